use super::jitter::{jitter_outcomes, Jitter};
use super::{filter_view, FilteredView};
use crate::dataset::Dataset;
use crate::error::DashResult;
use crate::query::{PayloadRange, SiteSelector};
use tracing::debug;

/// Everything the scatter chart needs for one query.
#[derive(Debug, Clone)]
pub struct PayloadOutcomeView<'a> {
    pub site: SiteSelector,
    pub range: PayloadRange,
    pub records: FilteredView<'a>,
    /// One y value per entry of `records`, same order.
    pub jitter: Vec<f64>,
    pub title: String,
}

impl PayloadOutcomeView<'_> {
    pub fn low(&self) -> f64 {
        self.range.low()
    }

    pub fn high(&self) -> f64 {
        self.range.high()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn payload_outcome_view<'a>(
    dataset: &'a Dataset,
    site: &SiteSelector,
    payload_range: (f64, f64),
) -> DashResult<PayloadOutcomeView<'a>> {
    payload_outcome_view_with(dataset, site, payload_range, &Jitter::default())
}

/// Fails with `InvalidRange` when `low > high`; bounds are not swapped.
pub fn payload_outcome_view_with<'a>(
    dataset: &'a Dataset,
    site: &SiteSelector,
    payload_range: (f64, f64),
    jitter: &Jitter,
) -> DashResult<PayloadOutcomeView<'a>> {
    let range = PayloadRange::try_from(payload_range)?;
    let records = filter_view(dataset, site, &range);
    let ys = jitter_outcomes(&records, jitter)?;
    let title = scatter_title(site, &range);

    debug!(
        "Scatter view for '{}' [{}, {}]: {} of {} records",
        site,
        range.low(),
        range.high(),
        records.len(),
        dataset.len()
    );

    Ok(PayloadOutcomeView {
        site: site.clone(),
        range,
        records,
        jitter: ys,
        title,
    })
}

/// Bounds print with `f64`'s shortest exact form: whole kilograms show no
/// decimals and fractional bounds are never rounded across the filter edge.
fn scatter_title(site: &SiteSelector, range: &PayloadRange) -> String {
    let subject = match site {
        SiteSelector::All => "all Sites".to_string(),
        SiteSelector::Site(name) => format!("site {}", name),
    };
    format!(
        "Correlation between Payload and Success for {} ({} kg to {} kg)",
        subject,
        range.low(),
        range.high()
    )
}
