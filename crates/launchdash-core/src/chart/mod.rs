pub mod model;
pub mod palette;
pub mod pie;
pub mod scatter;

pub use self::pie::assemble_pie_chart;
pub use self::scatter::{
    assemble_scatter_chart, assemble_scatter_chart_padded, summary_table_lines,
    EMPTY_RANGE_MESSAGE,
};
pub use self::model::{Annotation, ChartSpec, PieChart, ScatterChart};
