//! Shared validation for station and line names.

/// Error returned when a station or line name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid name {input:?}: {reason}")]
pub struct InvalidName {
    input: String,
    reason: &'static str,
}

impl InvalidName {
    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Trim `s` and check it is usable as a name.
///
/// Names must be non-empty after trimming and free of control characters.
pub(super) fn normalize(s: &str) -> Result<&str, InvalidName> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(InvalidName {
            input: s.to_string(),
            reason: "must not be empty",
        });
    }

    if trimmed.chars().any(char::is_control) {
        return Err(InvalidName {
            input: s.to_string(),
            reason: "must not contain control characters",
        });
    }

    Ok(trimmed)
}
