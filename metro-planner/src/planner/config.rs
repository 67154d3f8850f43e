//! Planner configuration.

/// How much a line change costs relative to riding one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferPenalty {
    /// Derive the penalty from the network so that a route with fewer
    /// transfers always wins, whatever its length.
    ///
    /// The derived value is the station count. An optimal route never
    /// visits a station twice (cutting out the loop cannot add a transfer),
    /// so it has at most `station_count - 1` edges. One transfer therefore
    /// outweighs any achievable difference in hop count.
    #[default]
    Auto,

    /// A fixed penalty. Values at or below the network diameter let a much
    /// shorter route beat one with fewer transfers.
    Fixed(u32),
}

impl TransferPenalty {
    /// The concrete penalty for a network with `station_count` stations.
    pub fn resolve(self, station_count: usize) -> u64 {
        match self {
            TransferPenalty::Auto => station_count.max(1) as u64,
            TransferPenalty::Fixed(penalty) => u64::from(penalty),
        }
    }
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Cost added per line change.
    pub transfer_penalty: TransferPenalty,

    /// Number of alternative routes returned when the caller does not ask
    /// for a specific count.
    pub max_alternatives: usize,
}

impl PlannerConfig {
    /// Create a configuration with the given transfer penalty.
    pub fn new(transfer_penalty: TransferPenalty) -> Self {
        Self {
            transfer_penalty,
            ..Self::default()
        }
    }

    /// Set the default number of alternative routes.
    pub fn with_max_alternatives(mut self, max_alternatives: usize) -> Self {
        self.max_alternatives = max_alternatives;
        self
    }

    /// Use a fixed transfer penalty instead of the derived one.
    pub fn with_fixed_penalty(mut self, penalty: u32) -> Self {
        self.transfer_penalty = TransferPenalty::Fixed(penalty);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transfer_penalty: TransferPenalty::Auto,
            max_alternatives: 3,
        }
    }
}
