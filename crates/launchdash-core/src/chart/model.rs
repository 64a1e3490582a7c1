use crate::aggregation::BoosterOutcomeSummary;
use serde::{Deserialize, Serialize};
use strum::Display;
use typed_builder::TypedBuilder;

/// Data-only chart description. Renderers decide how to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(p) => &p.title,
            ChartSpec::Scatter(s) => &s.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(p) => Some(p),
            ChartSpec::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(s) => Some(s),
            ChartSpec::Pie(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChart {
    pub title: String,
    pub title_position: TitlePosition,
    pub series: Vec<ScatterSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<Annotation>,
    /// Counts behind the table overlay; absent when there is nothing to count.
    pub summary: Option<BoosterOutcomeSummary>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePosition {
    pub x: f64,
    pub y: f64,
    pub x_anchor: HorizontalAnchor,
    pub y_anchor: VerticalAnchor,
}

impl Default for TitlePosition {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.85,
            x_anchor: HorizontalAnchor::Center,
            y_anchor: VerticalAnchor::Top,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: Option<String>,
    pub range: (f64, f64),
    pub tick_format: Option<String>,
    /// Empty means the renderer picks ticks.
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub x: f64,
    pub width: f64,
    pub dash: LineDash,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CoordSystem {
    #[default]
    Data,
    /// Fractions of the plotting area; values outside 0..1 land in the margins.
    Paper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HorizontalAnchor {
    #[default]
    Auto,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VerticalAnchor {
    #[default]
    Auto,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    pub family: Option<String>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 12.0,
            family: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: String,
    pub width: f64,
}

/// Free text placed on the chart. Lines are separated by `\n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[builder(setter(into))]
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[builder(default)]
    pub coords: CoordSystem,
    #[builder(default)]
    pub font: Font,
    #[builder(default)]
    pub align: TextAlign,
    #[builder(default, setter(strip_option))]
    pub border: Option<Border>,
    #[builder(default)]
    pub x_anchor: HorizontalAnchor,
    #[builder(default)]
    pub y_anchor: VerticalAnchor,
    #[builder(default = false)]
    pub show_arrow: bool,
}
