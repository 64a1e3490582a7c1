use super::model::{ChartSpec, PieChart, PieSlice};
use crate::aggregation::SiteBreakdown;

/// Slices map one-to-one onto the breakdown's groups. An empty breakdown
/// gives a titled chart with no slices.
pub fn assemble_pie_chart(breakdown: &SiteBreakdown) -> ChartSpec {
    let slices = breakdown
        .labels
        .iter()
        .zip(&breakdown.values)
        .map(|(label, &value)| PieSlice {
            label: label.clone(),
            value,
        })
        .collect();

    ChartSpec::Pie(PieChart {
        title: breakdown.title.clone(),
        slices,
    })
}
