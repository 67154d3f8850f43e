//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkModel;
use crate::planner::{PlannerConfig, RoutePlanner};

/// Shared application state.
///
/// The network is immutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded network
    pub network: Arc<NetworkModel>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkModel, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }

    /// A planner over the shared network.
    pub fn planner(&self) -> RoutePlanner<'_> {
        RoutePlanner::new(&self.network, &self.config)
    }
}
