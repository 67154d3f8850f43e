//! Route planner using a transfer-penalised Dijkstra search.
//!
//! This module answers: "what is the best way from station A to station B?"
//! where best means fewest line changes first, then fewest stops.
//!
//! The search runs over `(station, line)` states rather than bare stations,
//! since the cost of the next hop depends on the line used to arrive.
//! A second, best-first search over partial routes lists the runner-up
//! routes as well.

mod alternatives;
mod config;
mod search;

pub use config::{PlannerConfig, TransferPenalty};
pub use search::{PlanError, PlanResult, RoutePlanner};
