use crate::error::AppResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use launchdash_core::api::{DashboardControls, DashboardFigures};
use launchdash_core::chart::ChartSpec;
use launchdash_core::query::{QueryParams, SiteSelector};
use launchdash_core::Dashboard;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Control values as sent by the front end. Anything omitted falls back to
/// the dashboard defaults.
#[derive(Deserialize, Debug, Default)]
pub struct ChartQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ChartQuery {
    fn site(&self) -> SiteSelector {
        self.site
            .as_deref()
            .map(SiteSelector::parse)
            .unwrap_or_default()
    }

    fn params(&self, dashboard: &Dashboard) -> QueryParams {
        let dataset = dashboard.dataset();
        QueryParams {
            site: self.site(),
            payload_range: (
                self.low.unwrap_or_else(|| dataset.min_payload()),
                self.high.unwrap_or_else(|| dataset.max_payload()),
            ),
        }
    }
}

pub async fn controls(State(state): State<Arc<AppState>>) -> Json<DashboardControls> {
    Json(state.dashboard.controls())
}

pub async fn pie(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Json<ChartSpec> {
    let site = query.site();
    debug!("🥧 Pie request: {}", site);
    Json(state.dashboard.pie_chart(&site))
}

pub async fn scatter(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<ChartSpec>> {
    let params = query.params(&state.dashboard);
    debug!(
        "📈 Scatter request: {} {:?}",
        params.site, params.payload_range
    );
    let chart = state
        .dashboard
        .scatter_chart(&params.site, params.payload_range)?;
    Ok(Json(chart))
}

pub async fn figures(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<DashboardFigures>> {
    let params = query.params(&state.dashboard);
    Ok(Json(state.dashboard.render(&params)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use launchdash_core::config::DashboardConfig;
    use launchdash_core::error::DashError;

    fn state() -> Arc<AppState> {
        let path = format!(
            "{}/../../data/spacex_launch_dash.csv",
            env!("CARGO_MANIFEST_DIR")
        );
        let dashboard = Dashboard::load(path, DashboardConfig::default()).unwrap();
        Arc::new(AppState::new(dashboard))
    }

    fn query(site: Option<&str>, low: Option<f64>, high: Option<f64>) -> Query<ChartQuery> {
        Query(ChartQuery {
            site: site.map(String::from),
            low,
            high,
        })
    }

    #[tokio::test]
    async fn pie_defaults_to_all_sites() {
        let Json(chart) = pie(State(state()), query(None, None, None)).await;
        assert_eq!(chart.title(), "Total Success Launches By Site");
    }

    #[tokio::test]
    async fn scatter_fills_missing_bounds_from_dataset() {
        let Json(chart) = scatter(State(state()), query(Some("VAFB SLC-4E"), Some(9000.0), None))
            .await
            .unwrap();
        let s = chart.as_scatter().unwrap();
        assert_eq!(s.x_axis.range, (8900.0, 9700.0));
        assert_eq!(s.point_count(), 5);
    }

    #[tokio::test]
    async fn scatter_rejects_inverted_range() {
        let err = scatter(State(state()), query(None, Some(3000.0), Some(1000.0)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Dashboard(DashError::InvalidRange { .. })
        ));
    }

    #[tokio::test]
    async fn figures_for_empty_band() {
        let Json(figs) = figures(State(state()), query(Some("ALL"), Some(9000.0), Some(9001.0)))
            .await
            .unwrap();
        let s = figs.scatter.as_scatter().unwrap();
        assert!(s.series.is_empty());
        assert_eq!(s.annotations[0].text, "No data points in this range");
        assert_eq!(figs.pie.as_pie().unwrap().slices.len(), 4);
    }

    #[tokio::test]
    async fn controls_list_every_site() {
        let Json(controls) = controls(State(state())).await;
        assert_eq!(controls.site_options.len(), 5);
    }
}
