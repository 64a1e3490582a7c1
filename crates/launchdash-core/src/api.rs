use crate::aggregation::{payload_outcome_view_with, site_success_breakdown};
use crate::chart::{assemble_pie_chart, assemble_scatter_chart_padded, ChartSpec};
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::error::DashResult;
use crate::query::{QueryParams, SiteSelector, ALL_SITES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const DASHBOARD_HEADING: &str = "SpaceX Launch Records Dashboard";

/// Loaded dataset plus settings. Built once before any query is served;
/// clones share the same records.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayloadControl {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_range: (f64, f64),
}

/// What a front end needs to draw its input widgets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardControls {
    pub heading: String,
    pub site_placeholder: String,
    pub site_options: Vec<SiteOption>,
    pub default_site: String,
    pub payload: PayloadControl,
    pub dataset_fingerprint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardFigures {
    pub pie: ChartSpec,
    pub scatter: ChartSpec,
}

impl Dashboard {
    pub fn new(dataset: impl Into<Arc<Dataset>>, config: DashboardConfig) -> DashResult<Self> {
        config.validate()?;
        Ok(Self {
            dataset: dataset.into(),
            config,
        })
    }

    /// Settings are checked before the dataset is read, so a bad config never
    /// costs a load.
    pub fn load<P: AsRef<Path>>(path: P, config: DashboardConfig) -> DashResult<Self> {
        config.validate()?;
        let dataset = Dataset::load(path)?;
        info!("🧮 Dashboard ready (dataset {})", &dataset.fingerprint()[..12]);
        Ok(Self {
            dataset: Arc::new(dataset),
            config,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn controls(&self) -> DashboardControls {
        let mut site_options = vec![SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        site_options.extend(self.dataset.sites().iter().map(|s| SiteOption {
            label: s.clone(),
            value: s.clone(),
        }));

        DashboardControls {
            heading: DASHBOARD_HEADING.to_string(),
            site_placeholder: "Select a Launch Site here".to_string(),
            site_options,
            default_site: ALL_SITES.to_string(),
            payload: PayloadControl {
                label: "Payload range (Kg):".to_string(),
                min: self.config.slider_min_kg,
                max: self.config.slider_max_kg,
                step: self.config.slider_step_kg,
                default_range: (self.dataset.min_payload(), self.dataset.max_payload()),
            },
            dataset_fingerprint: self.dataset.fingerprint().to_string(),
        }
    }

    /// Every site over the full payload span of the dataset.
    pub fn default_query(&self) -> QueryParams {
        QueryParams::new(
            SiteSelector::All,
            self.dataset.min_payload(),
            self.dataset.max_payload(),
        )
    }

    pub fn pie_chart(&self, site: &SiteSelector) -> ChartSpec {
        assemble_pie_chart(&site_success_breakdown(&self.dataset, site))
    }

    pub fn scatter_chart(
        &self,
        site: &SiteSelector,
        payload_range: (f64, f64),
    ) -> DashResult<ChartSpec> {
        let view =
            payload_outcome_view_with(&self.dataset, site, payload_range, &self.config.jitter())?;
        Ok(assemble_scatter_chart_padded(
            &view,
            self.config.axis_padding_kg,
        ))
    }

    /// Both figures for one interaction.
    pub fn render(&self, params: &QueryParams) -> DashResult<DashboardFigures> {
        Ok(DashboardFigures {
            pie: self.pie_chart(&params.site),
            scatter: self.scatter_chart(&params.site, params.payload_range)?,
        })
    }
}
