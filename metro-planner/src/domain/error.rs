//! Domain error types.
//!
//! These errors represent invariant violations when assembling domain
//! values. They are distinct from lookup failures against a network.

/// Domain-level errors for route construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stops
    #[error("route must have at least one stop")]
    EmptyRoute,

    /// The first stop carries an arrival line
    #[error("origin stop must not have an arrival line")]
    OriginHasLine,

    /// A stop after the origin has no arrival line
    #[error("stop {0} has no arrival line")]
    MissingLine(usize),
}
