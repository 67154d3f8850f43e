//! Dijkstra search over `(station, line)` states.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{DomainError, Route, StationName, Stop};
use crate::network::{LineId, NetworkModel, StationId};

use super::config::PlannerConfig;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination is not a station in the network
    #[error("unknown station: {0:?}")]
    UnknownStation(String),

    /// Both stations exist but no sequence of lines connects them
    #[error("no route from {origin} to {destination}")]
    NoRoute {
        origin: StationName,
        destination: StationName,
    },

    /// The predecessor chain produced an inconsistent route
    #[error("failed to assemble route: {0}")]
    InvalidRoute(#[from] DomainError),
}

/// Result of a route search.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// The best route found.
    pub route: Route,

    /// Total weighted cost of the route.
    pub cost: u64,

    /// Number of states expanded during search.
    pub states_expanded: usize,
}

/// Search state: a station together with the line used to reach it.
pub(super) type State = (StationId, LineId);

/// Accumulated cost of reaching a state.
///
/// Ordered by weighted total first, then by hop count, so that equal-cost
/// candidates are broken in favour of fewer edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct Cost {
    pub(super) total: u64,
    pub(super) hops: u32,
}

impl Cost {
    pub(super) const ZERO: Cost = Cost { total: 0, hops: 0 };

    /// Cost after riding one more edge, changing line if `transfer` is set.
    pub(super) fn step(self, transfer: bool, penalty: u64) -> Cost {
        Cost {
            total: self.total + 1 + if transfer { penalty } else { 0 },
            hops: self.hops + 1,
        }
    }
}

/// Route planner over a fixed network.
///
/// Holds no per-query state, so one planner can serve any number of
/// concurrent `plan` calls.
#[derive(Debug, Clone)]
pub struct RoutePlanner<'a> {
    pub(super) network: &'a NetworkModel,
    pub(super) penalty: u64,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a NetworkModel, config: &PlannerConfig) -> Self {
        Self {
            network,
            penalty: config.transfer_penalty.resolve(network.station_count()),
        }
    }

    /// The concrete per-transfer penalty in use.
    pub fn transfer_penalty(&self) -> u64 {
        self.penalty
    }

    /// Find the best route from `origin` to `destination`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::network::NetworkModel;
    /// use metro_planner::planner::{PlannerConfig, RoutePlanner};
    ///
    /// let network = NetworkModel::from_lines([
    ///     ("Red", vec!["A", "B", "C"]),
    ///     ("Blue", vec!["C", "D"]),
    /// ])
    /// .unwrap();
    /// let planner = RoutePlanner::new(&network, &PlannerConfig::default());
    ///
    /// let route = planner.plan("A", "D").unwrap();
    /// assert_eq!(route.edge_count(), 3);
    /// assert_eq!(route.transfer_count(), 1);
    /// ```
    pub fn plan(&self, origin: &str, destination: &str) -> Result<Route, PlanError> {
        self.search(origin, destination).map(|result| result.route)
    }

    /// Find the best route and report search statistics.
    pub fn search(&self, origin: &str, destination: &str) -> Result<PlanResult, PlanError> {
        let from = self.resolve(origin)?;
        let to = self.resolve(destination)?;

        if from == to {
            return Ok(PlanResult {
                route: Route::trivial(self.network.station_name(from).clone()),
                cost: 0,
                states_expanded: 0,
            });
        }

        let mut best: HashMap<State, Cost> = HashMap::new();
        let mut predecessors: HashMap<State, State> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<(Cost, StationId, LineId)>> = BinaryHeap::new();

        // Boarding any line at the origin is free
        for &line in self.network.line_ids_at(from) {
            best.insert((from, line), Cost::ZERO);
            frontier.push(Reverse((Cost::ZERO, from, line)));
        }

        let mut states_expanded = 0;

        while let Some(Reverse((cost, station, line))) = frontier.pop() {
            if best.get(&(station, line)).is_some_and(|known| *known < cost) {
                continue;
            }

            if station == to {
                let route = self.reconstruct((station, line), &predecessors)?;
                debug!(
                    origin = %route.origin(),
                    destination = %route.destination(),
                    cost = cost.total,
                    hops = cost.hops,
                    transfers = route.transfer_count(),
                    states_expanded,
                    "Route found"
                );
                return Ok(PlanResult {
                    route,
                    cost: cost.total,
                    states_expanded,
                });
            }

            states_expanded += 1;
            trace!(
                station = %self.network.station_name(station),
                line = %self.network.line_name(line),
                cost = cost.total,
                "Expanding state"
            );

            for edge in self.network.edges(station) {
                let next = cost.step(edge.line != line, self.penalty);
                let state = (edge.to, edge.line);

                if best.get(&state).is_none_or(|known| next < *known) {
                    best.insert(state, next);
                    predecessors.insert(state, (station, line));
                    frontier.push(Reverse((next, edge.to, edge.line)));
                }
            }
        }

        let origin = self.network.station_name(from).clone();
        let destination = self.network.station_name(to).clone();
        debug!(%origin, %destination, states_expanded, "No route found");
        Err(PlanError::NoRoute {
            origin,
            destination,
        })
    }

    pub(super) fn resolve(&self, name: &str) -> Result<StationId, PlanError> {
        self.network
            .resolve(name)
            .map_err(|_| PlanError::UnknownStation(name.to_string()))
    }

    /// Walk predecessors back from `end` to a start state and build the route.
    fn reconstruct(
        &self,
        end: State,
        predecessors: &HashMap<State, State>,
    ) -> Result<Route, DomainError> {
        let mut chain = vec![end];
        let mut current = end;
        while let Some(&previous) = predecessors.get(&current) {
            chain.push(previous);
            current = previous;
        }
        chain.reverse();
        self.route_from_chain(&chain)
    }

    /// Build a route from a start state followed by the states it visits.
    pub(super) fn route_from_chain(&self, chain: &[State]) -> Result<Route, DomainError> {
        let Some(&(origin, _)) = chain.first() else {
            return Err(DomainError::EmptyRoute);
        };

        // The start state's line is never ridden into the origin
        let mut stops = Vec::with_capacity(chain.len());
        stops.push(Stop::origin(self.network.station_name(origin).clone()));
        stops.extend(chain[1..].iter().map(|&(station, line)| {
            Stop::via(
                self.network.station_name(station).clone(),
                self.network.line_name(line).clone(),
            )
        }));

        Route::new(stops)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
