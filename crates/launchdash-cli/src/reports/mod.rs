mod overview;
mod tables;

pub use self::overview::print as print_dataset_overview;
pub use self::tables::{pie as print_pie, scatter as print_scatter};
