//! Ranked alternative routes.
//!
//! Best-first search over partial routes rather than states: a state may be
//! popped up to `max_routes` times, once per distinct way of reaching it.
//! Partial routes never revisit a station, and complete routes that pass
//! through the same stations (differing only in which parallel line is
//! ridden) are reported once.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::domain::Route;
use crate::network::StationId;

use super::search::{Cost, PlanError, PlanResult, RoutePlanner, State};

impl RoutePlanner<'_> {
    /// Find up to `max_routes` distinct routes, best first.
    ///
    /// Routes are ranked by the same key as [`search`](Self::search): total
    /// cost, then hop count. The first entry is always as good as the
    /// route `search` returns. Fewer than `max_routes` entries are returned
    /// when the network has fewer distinct routes.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::network::NetworkModel;
    /// use metro_planner::planner::{PlannerConfig, RoutePlanner};
    ///
    /// let network = NetworkModel::from_lines([
    ///     ("Red", vec!["A", "B", "C"]),
    ///     ("Blue", vec!["A", "D", "E", "C"]),
    /// ])
    /// .unwrap();
    /// let planner = RoutePlanner::new(&network, &PlannerConfig::default());
    ///
    /// let routes = planner.alternatives("A", "C", 5).unwrap();
    /// assert_eq!(routes.len(), 2);
    /// assert_eq!(routes[0].route.edge_count(), 2);
    /// assert_eq!(routes[1].route.edge_count(), 3);
    /// ```
    pub fn alternatives(
        &self,
        origin: &str,
        destination: &str,
        max_routes: usize,
    ) -> Result<Vec<PlanResult>, PlanError> {
        let from = self.resolve(origin)?;
        let to = self.resolve(destination)?;

        if max_routes == 0 {
            return Ok(Vec::new());
        }
        if from == to {
            return Ok(vec![PlanResult {
                route: Route::trivial(self.network.station_name(from).clone()),
                cost: 0,
                states_expanded: 0,
            }]);
        }

        // Partial routes live here; the frontier refers to them by index,
        // which also gives a stable order between equal costs.
        let mut partials: Vec<Vec<State>> = Vec::new();
        let mut frontier: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();

        for &line in self.network.line_ids_at(from) {
            partials.push(vec![(from, line)]);
            frontier.push(Reverse((Cost::ZERO, partials.len() - 1)));
        }

        let mut pops: HashMap<State, usize> = HashMap::new();
        let mut seen: HashSet<Vec<StationId>> = HashSet::new();
        let mut results = Vec::new();
        let mut states_expanded = 0;

        while results.len() < max_routes {
            let Some(Reverse((cost, index))) = frontier.pop() else {
                break;
            };
            let chain = std::mem::take(&mut partials[index]);
            let Some(&(station, line)) = chain.last() else {
                continue;
            };

            if station == to {
                let signature: Vec<StationId> = chain.iter().map(|&(s, _)| s).collect();
                if seen.insert(signature) {
                    results.push(PlanResult {
                        route: self.route_from_chain(&chain)?,
                        cost: cost.total,
                        states_expanded,
                    });
                }
                continue;
            }

            let count = pops.entry((station, line)).or_insert(0);
            if *count >= max_routes {
                continue;
            }
            *count += 1;
            states_expanded += 1;

            let at_origin = chain.len() == 1;
            for edge in self.network.edges(station) {
                // Other lines at the origin have their own start state
                if at_origin && edge.line != line {
                    continue;
                }
                if chain.iter().any(|&(s, _)| s == edge.to) {
                    continue;
                }

                let mut next = chain.clone();
                next.push((edge.to, edge.line));
                partials.push(next);
                frontier.push(Reverse((
                    cost.step(edge.line != line, self.penalty),
                    partials.len() - 1,
                )));
            }
        }

        debug!(
            origin = %self.network.station_name(from),
            destination = %self.network.station_name(to),
            routes = results.len(),
            states_expanded,
            "Alternatives search complete"
        );

        if results.is_empty() {
            return Err(PlanError::NoRoute {
                origin: self.network.station_name(from).clone(),
                destination: self.network.station_name(to).clone(),
            });
        }

        Ok(results)
    }
}
