use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Load Error: {0}")]
    DataLoad(String),

    #[error("Invalid Range: low bound {low} must not exceed high bound {high}")]
    InvalidRange { low: f64, high: f64 },

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl DashError {
    /// Errors raised while reading the dataset. The process must not serve
    /// queries after one of these.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            DashError::Io(_) | DashError::Csv(_) | DashError::DataLoad(_)
        )
    }
}

pub type DashResult<T> = Result<T, DashError>;
