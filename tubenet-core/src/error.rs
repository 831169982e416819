use thiserror::Error;

use crate::{StationId, Weight};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Weight matrix shape error: {0}")]
    Shape(String),
    #[error("Incompatible graph sizes: {left} and {right}")]
    IncompatibleSize { left: usize, right: usize },
    #[error("Station {station} is out of range for a network of {size} stations")]
    StationOutOfRange { station: StationId, size: usize },
    #[error("Invalid scaling factor {0}, expected a finite non-negative number")]
    InvalidFactor(Weight),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failures of the data fetching collaborator
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid CSV payload: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Line {0} is not available")]
    UnknownLine(crate::LineId),
}
