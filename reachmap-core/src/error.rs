use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bucket configuration: {0}")]
    InvalidBuckets(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
