//! Station name type.

use std::fmt;

use serde::Serialize;

use super::name::{InvalidName, normalize};

/// A validated station name.
///
/// Station names are trimmed and guaranteed non-empty with no control
/// characters. Equality is exact after trimming: `"Central"` and
/// `"central"` are different stations.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationName;
///
/// let name = StationName::parse("  Central ").unwrap();
/// assert_eq!(name.as_str(), "Central");
///
/// assert!(StationName::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from user or dataset input.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        normalize(s).map(|name| StationName(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
