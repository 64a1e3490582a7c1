use super::palette;
use super::model::{
    Annotation, Axis, Border, ChartSpec, CoordSystem, Font, HorizontalAnchor, LineDash,
    ReferenceLine, ScatterChart, ScatterPoint, ScatterSeries, TextAlign, Tick, TitlePosition,
    VerticalAnchor,
};
use crate::aggregation::{booster_outcome_summary, BoosterOutcomeSummary, PayloadOutcomeView};

pub const DEFAULT_AXIS_PADDING_KG: f64 = 100.0;
pub const EMPTY_RANGE_MESSAGE: &str = "No data points in this range";

const Y_RANGE: (f64, f64) = (-0.1, 1.1);

pub fn assemble_scatter_chart(view: &PayloadOutcomeView<'_>) -> ChartSpec {
    assemble_scatter_chart_padded(view, DEFAULT_AXIS_PADDING_KG)
}

/// The x-axis spans the selected range widened by `axis_padding_kg` on each
/// side. An empty view yields no series and a single centered message in
/// place of the count table.
pub fn assemble_scatter_chart_padded(
    view: &PayloadOutcomeView<'_>,
    axis_padding_kg: f64,
) -> ChartSpec {
    let (low, high) = (view.low(), view.high());

    let (series, annotations, summary) = if view.is_empty() {
        let message = Annotation::builder()
            .text(EMPTY_RANGE_MESSAGE)
            .x(view.range.midpoint())
            .y(0.5)
            .font(Font {
                size: 16.0,
                family: None,
            })
            .build();
        (Vec::new(), vec![message], None)
    } else {
        let summary = booster_outcome_summary(&view.records);
        let table = summary_annotation(&summary);
        (build_series(view), vec![table], Some(summary))
    };

    ChartSpec::Scatter(ScatterChart {
        title: view.title.clone(),
        title_position: TitlePosition::default(),
        series,
        x_axis: Axis {
            title: Some("Payload Mass (kg)".to_string()),
            range: (low - axis_padding_kg, high + axis_padding_kg),
            tick_format: Some("d".to_string()),
            ticks: Vec::new(),
        },
        y_axis: Axis {
            title: Some("Class".to_string()),
            range: Y_RANGE,
            tick_format: None,
            ticks: vec![
                Tick {
                    value: 0.0,
                    label: "0".to_string(),
                },
                Tick {
                    value: 1.0,
                    label: "1".to_string(),
                },
            ],
        },
        reference_lines: vec![boundary_line(low), boundary_line(high)],
        annotations,
        summary,
    })
}

/// One series per booster category, in order of first appearance.
fn build_series(view: &PayloadOutcomeView<'_>) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for (record, &y) in view.records.iter().zip(&view.jitter) {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y,
        };
        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => {
                let color = palette::color_for(series.len()).to_string();
                series.push(ScatterSeries {
                    name: record.booster_version_category.clone(),
                    color,
                    points: vec![point],
                });
            }
        }
    }
    series
}

fn boundary_line(x: f64) -> ReferenceLine {
    ReferenceLine {
        x,
        width: 1.0,
        dash: LineDash::Dash,
        color: "black".to_string(),
        opacity: 0.5,
    }
}

/// Fixed-width text rendering of the count table.
pub fn summary_table_lines(summary: &BoosterOutcomeSummary) -> Vec<String> {
    let mut lines = vec![
        " Booster Version Counts".to_string(),
        "   Success|Failure|Total".to_string(),
    ];
    lines.extend(summary.rows().map(|row| {
        format!(
            "{:<5}| {:2} | {:2}    |   {:2}",
            row.category, row.successes, row.failures, row.total
        )
    }));
    lines
}

fn summary_annotation(summary: &BoosterOutcomeSummary) -> Annotation {
    Annotation::builder()
        .text(summary_table_lines(summary).join("\n"))
        .x(1.02)
        .y(0.5)
        .coords(CoordSystem::Paper)
        .font(Font {
            size: 12.0,
            family: Some("monospace".to_string()),
        })
        .align(TextAlign::Left)
        .border(Border {
            color: "black".to_string(),
            width: 1.0,
        })
        .x_anchor(HorizontalAnchor::Left)
        .y_anchor(VerticalAnchor::Top)
        .build()
}
