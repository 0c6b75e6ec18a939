//! Error types for risk-map services.

use thiserror::Error;

use crate::dataset::DatasetId;

/// Result type alias using RiskError.
pub type RiskResult<T> = Result<T, RiskError>;

/// Primary error type for risk-map operations.
#[derive(Debug, Error)]
pub enum RiskError {
    /// A dataset name outside the closed {flood, thatch} set reached the
    /// registry. Fatal to the call, not to the process.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// A feature collection was paired with a descriptor for a different
    /// dataset. Caught at the projector boundary; must never reach the
    /// presenter.
    #[error("Dataset mismatch: collection is '{collection}' but descriptor is '{descriptor}'")]
    DatasetMismatch {
        collection: DatasetId,
        descriptor: DatasetId,
    },

    /// Transport failure fetching a dataset. Recoverable; leaves the last
    /// rendered view in place.
    #[error("Failed to fetch dataset '{dataset}': {reason}")]
    FetchFailure { dataset: DatasetId, reason: String },

    /// A dataset body could not be parsed as a GeoJSON feature collection.
    #[error("Invalid GeoJSON for dataset '{dataset}': {reason}")]
    InvalidGeoJson { dataset: DatasetId, reason: String },

    /// Failed to read dataset content from local storage.
    #[error("Failed to read data: {0}")]
    DataReadError(String),
}

impl RiskError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            RiskError::UnknownDataset(_) => 400,
            RiskError::FetchFailure { .. } => 502,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for RiskError {
    fn from(err: std::io::Error) -> Self {
        RiskError::DataReadError(err.to_string())
    }
}
