//! Line name type.

use std::fmt;

use serde::Serialize;

use super::name::{InvalidName, normalize};

/// A validated line name, such as `"Line 2"` or `"Circle"`.
///
/// Shares the validation rules of [`StationName`](super::StationName).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineName(String);

impl LineName {
    /// Parse a line name.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        normalize(s).map(|name| LineName(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
