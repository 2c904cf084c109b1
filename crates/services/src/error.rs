//! Shared error types for the services crate.

use thiserror::Error;

use pathway_core::planner::PlanError;

/// Errors emitted while reading a dataset file.
///
/// Only these structured failures trigger the embedded-default fallback;
/// anything else propagates normally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted by `CompressionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompressionError {
    #[error("prompt compression is not configured")]
    Disabled,
    #[error("compression API returned an empty response")]
    EmptyResponse,
    #[error("compression API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `RecommenderService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecommenderError {
    #[error(transparent)]
    Plan(#[from] PlanError),
}
