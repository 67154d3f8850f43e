//! Network error types.

use crate::domain::{InvalidName, LineName};

/// Errors from building or querying a [`NetworkModel`](super::NetworkModel).
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A line or station name in the dataset failed validation
    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    /// No station with this name exists in the network
    #[error("unknown station: {0:?}")]
    UnknownStation(String),

    /// No line with this name exists in the network
    #[error("unknown line: {0:?}")]
    UnknownLine(String),

    /// A line was declared without any stations
    #[error("line {0} has no stations")]
    EmptyLine(LineName),

    /// Two lines share a name
    #[error("line {0} is defined more than once")]
    DuplicateLine(LineName),

    /// Dataset file could not be read
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not valid JSON for the expected shape
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}
