//! Metro network topology.
//!
//! A [`NetworkModel`] is built once from a table of lines and their
//! stations, and is read-only afterwards. It answers which stations are
//! one hop away from a given station and on which lines.

mod dataset;
mod error;
mod model;

pub use dataset::{Dataset, LineRecord};
pub use error::NetworkError;
pub use model::{Edge, Line, LineId, Neighbor, NetworkBuilder, NetworkModel, StationId};
