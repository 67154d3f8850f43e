//! Web layer for the metro route planner.
//!
//! Provides JSON endpoints for planning routes and inspecting the network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
