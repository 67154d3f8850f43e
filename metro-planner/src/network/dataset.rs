//! Static dataset loading.
//!
//! The network is supplied as a JSON table of lines and their stations:
//!
//! ```json
//! { "lines": [ { "name": "Line 1", "stations": ["A", "B"], "circular": false } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::NetworkError;
use super::model::{NetworkBuilder, NetworkModel};

/// One line as it appears in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    /// Line name.
    pub name: String,
    /// Station names in running order.
    pub stations: Vec<String>,
    /// Whether the last station connects back to the first.
    #[serde(default)]
    pub circular: bool,
}

/// A complete network dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub lines: Vec<LineRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            lines = dataset.lines.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Validate the dataset and build a network from it.
    pub fn into_network(self) -> Result<NetworkModel, NetworkError> {
        self.lines
            .into_iter()
            .fold(NetworkBuilder::new(), |builder, record| {
                if record.circular {
                    builder.circular_line(record.name, record.stations)
                } else {
                    builder.line(record.name, record.stations)
                }
            })
            .build()
    }
}

impl NetworkModel {
    /// Build a network from a parsed dataset.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, NetworkError> {
        dataset.into_network()
    }

    /// Read a dataset file and build a network from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        Dataset::from_path(path)?.into_network()
    }
}
