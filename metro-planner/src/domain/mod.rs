//! Domain types for the metro route planner.
//!
//! This module contains the validated values the planner works with.
//! Names are checked at construction time, so code that receives a
//! `StationName` or `LineName` can trust it is well-formed.

mod error;
mod line;
mod name;
mod route;
mod station;

pub use error::DomainError;
pub use line::LineName;
pub use name::InvalidName;
pub use route::{Ride, Route, Segment, Stop, Transfer};
pub use station::StationName;
