// Internal Modules
pub mod aggregation;
pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod query;

pub use crate::api::Dashboard;
pub use crate::error::{DashError, DashResult};
