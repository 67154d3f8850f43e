//! Unit tests for the transfer-penalised route search.

use super::*;
use crate::domain::{LineName, Segment};
use crate::planner::TransferPenalty;

fn station(s: &str) -> StationName {
    StationName::parse(s).unwrap()
}

fn line(s: &str) -> LineName {
    LineName::parse(s).unwrap()
}

fn stations(route: &Route) -> Vec<&str> {
    route.stops().iter().map(|s| s.station.as_str()).collect()
}

fn ride_lines(route: &Route) -> Vec<&str> {
    route.rides().map(|r| r.line.as_str()).collect()
}

fn planner(network: &NetworkModel) -> RoutePlanner<'_> {
    RoutePlanner::new(network, &PlannerConfig::default())
}

/// A 1-transfer route of 5 hops competing with a 0-transfer route of 8.
///
/// Direct: A - D1 .. D7 - B on one line.
/// Change: A - X1 - X2 - H on Cross, then H - Y1 - B on Spur.
fn competing_routes() -> NetworkModel {
    NetworkModel::builder()
        .line(
            "Direct",
            ["A", "D1", "D2", "D3", "D4", "D5", "D6", "D7", "B"],
        )
        .line("Cross", ["A", "X1", "X2", "H"])
        .line("Spur", ["H", "Y1", "B"])
        .build()
        .unwrap()
}

#[test]
fn same_station_gives_trivial_route() {
    let network = competing_routes();
    let route = planner(&network).plan("H", "H").unwrap();

    assert!(route.is_trivial());
    assert_eq!(route.edge_count(), 0);
    assert_eq!(route.transfer_count(), 0);
    assert_eq!(route.origin(), &station("H"));
    assert!(route.segments().is_empty());
}

#[test]
fn same_station_after_trimming_is_trivial() {
    let network = competing_routes();
    let route = planner(&network).plan(" H", "H ").unwrap();
    assert!(route.is_trivial());
}

#[test]
fn adjacent_stations_give_single_ride() {
    let network = competing_routes();
    let route = planner(&network).plan("X1", "X2").unwrap();

    assert_eq!(route.edge_count(), 1);
    assert_eq!(route.transfer_count(), 0);
    assert_eq!(ride_lines(&route), vec!["Cross"]);
}

#[test]
fn fewer_transfers_beat_fewer_hops() {
    let network = competing_routes();
    let result = planner(&network).search("A", "B").unwrap();

    assert_eq!(result.route.transfer_count(), 0);
    assert_eq!(result.route.edge_count(), 8);
    assert_eq!(ride_lines(&result.route), vec!["Direct"]);
    assert_eq!(result.cost, 8);
}

#[test]
fn small_fixed_penalty_allows_shorter_transfer_route() {
    let network = competing_routes();
    let config = PlannerConfig::new(TransferPenalty::Fixed(2));
    let planner = RoutePlanner::new(&network, &config);

    let result = planner.search("A", "B").unwrap();

    assert_eq!(result.route.transfer_count(), 1);
    assert_eq!(result.route.edge_count(), 5);
    assert_eq!(stations(&result.route), vec!["A", "X1", "X2", "H", "Y1", "B"]);
    assert_eq!(result.cost, 5 + 2);
}

#[test]
fn auto_penalty_is_station_count() {
    let network = competing_routes();
    assert_eq!(planner(&network).transfer_penalty(), 13);
}

#[test]
fn shorter_route_wins_among_equal_transfer_counts() {
    // Two zero-transfer options from A to D on different lines
    let network = NetworkModel::from_lines([
        ("Long", vec!["A", "L1", "L2", "L3", "D"]),
        ("Short", vec!["A", "S1", "D"]),
    ])
    .unwrap();

    let route = planner(&network).plan("A", "D").unwrap();

    assert_eq!(route.transfer_count(), 0);
    assert_eq!(stations(&route), vec!["A", "S1", "D"]);
}

#[test]
fn shorter_route_wins_among_one_transfer_options() {
    // A -Red- X -Green- D (2 hops) vs A -Blue- Y1 - Y2 -Purple- D (3 hops)
    let network = NetworkModel::from_lines([
        ("Red", vec!["A", "X"]),
        ("Green", vec!["X", "D"]),
        ("Blue", vec!["A", "Y1", "Y2"]),
        ("Purple", vec!["Y2", "D"]),
    ])
    .unwrap();

    let route = planner(&network).plan("A", "D").unwrap();

    assert_eq!(route.transfer_count(), 1);
    assert_eq!(stations(&route), vec!["A", "X", "D"]);
}

#[test]
fn equal_cost_prefers_fewer_hops() {
    // Under a penalty of 2 both routes from O to T cost 5:
    // Long rides 5 hops without changing, Zb + Zc rides 3 hops with one change.
    // Long has the lowest line id, so only the hop count can pick the other.
    let network = NetworkModel::from_lines([
        ("Long", vec!["O", "P1", "P2", "P3", "P4", "T"]),
        ("Zb", vec!["O", "Q1", "Q2"]),
        ("Zc", vec!["Q2", "T"]),
    ])
    .unwrap();
    let config = PlannerConfig::new(TransferPenalty::Fixed(2));

    let result = RoutePlanner::new(&network, &config).search("O", "T").unwrap();

    assert_eq!(result.cost, 5);
    assert_eq!(result.route.edge_count(), 3);
    assert_eq!(result.route.transfer_count(), 1);
    assert_eq!(stations(&result.route), vec!["O", "Q1", "Q2", "T"]);
}

#[test]
fn transfer_marker_names_both_lines() {
    let network = competing_routes();
    let route = planner(&network).plan("X1", "Y1").unwrap();

    assert_eq!(route.transfer_count(), 1);
    let segments = route.segments();
    assert_eq!(segments.len(), 3);

    let Segment::Transfer(transfer) = &segments[1] else {
        panic!("expected transfer, got {:?}", segments[1]);
    };
    assert_eq!(transfer.station, station("H"));
    assert_eq!(transfer.from_line, line("Cross"));
    assert_eq!(transfer.to_line, line("Spur"));

    let first = segments[0].as_ride().unwrap();
    assert_eq!(first.from(), &station("X1"));
    assert_eq!(first.to(), &station("H"));
    let second = segments[2].as_ride().unwrap();
    assert_eq!(second.from(), &station("H"));
    assert_eq!(second.to(), &station("Y1"));
}

#[test]
fn parallel_lines_do_not_cause_spurious_transfers() {
    let network = NetworkModel::from_lines([
        ("Fast", vec!["X", "Y", "Z"]),
        ("Slow", vec!["X", "Y", "Z"]),
    ])
    .unwrap();

    let route = planner(&network).plan("X", "Z").unwrap();

    assert_eq!(route.edge_count(), 2);
    assert_eq!(route.transfer_count(), 0);
    assert_eq!(route.rides().count(), 1);
}

#[test]
fn circular_line_wraps_around() {
    let network = NetworkModel::builder()
        .circular_line("Loop", ["A", "B", "C", "D", "E", "F"])
        .build()
        .unwrap();

    let route = planner(&network).plan("A", "F").unwrap();
    assert_eq!(stations(&route), vec!["A", "F"]);

    let route = planner(&network).plan("B", "E").unwrap();
    assert_eq!(route.edge_count(), 3);
}

#[test]
fn unknown_origin_rejected() {
    let network = competing_routes();
    let result = planner(&network).plan("Nonexistent", "A");
    assert_eq!(result, Err(PlanError::UnknownStation("Nonexistent".into())));
}

#[test]
fn unknown_destination_rejected() {
    let network = competing_routes();
    let result = planner(&network).plan("A", "Nowhere");
    assert_eq!(result, Err(PlanError::UnknownStation("Nowhere".into())));
}

#[test]
fn blank_name_is_unknown_station() {
    let network = competing_routes();
    let result = planner(&network).plan("", "A");
    assert!(matches!(result, Err(PlanError::UnknownStation(_))));
}

#[test]
fn disconnected_components_have_no_route() {
    let network = NetworkModel::from_lines([
        ("North", vec!["N1", "N2", "N3"]),
        ("South", vec!["S1", "S2"]),
    ])
    .unwrap();

    let result = planner(&network).plan("N1", "S2");

    assert_eq!(
        result,
        Err(PlanError::NoRoute {
            origin: station("N1"),
            destination: station("S2"),
        })
    );
}

#[test]
fn no_route_leaves_network_usable() {
    let network = NetworkModel::from_lines([("North", vec!["N1", "N2"]), ("South", vec!["S1"])])
        .unwrap();
    let planner = planner(&network);

    assert!(planner.plan("N1", "S1").is_err());
    assert_eq!(planner.plan("N1", "N2").unwrap().edge_count(), 1);
}

#[test]
fn cost_matches_hops_and_transfers() {
    let network = competing_routes();
    let planner = planner(&network);
    let result = planner.search("D1", "Y1").unwrap();

    let expected = result.route.edge_count() as u64
        + planner.transfer_penalty() * result.route.transfer_count() as u64;
    assert_eq!(result.cost, expected);
    assert!(result.states_expanded > 0);
}

#[test]
fn sample_network_route() {
    let network = NetworkModel::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/sample_network.json"
    ))
    .unwrap();

    let route = planner(&network)
        .plan("Fudan University", "Xujiahui")
        .unwrap();

    assert_eq!(route.transfer_count(), 1);
    assert_eq!(route.edge_count(), 5);
    assert_eq!(ride_lines(&route), vec!["Line 10", "Line 1"]);
    let transfer = route.transfers().next().unwrap();
    assert_eq!(transfer.station, station("Shaanxi Road South"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Random networks of up to four lines over eight stations.
    fn network_strategy() -> impl Strategy<Value = NetworkModel> {
        prop::collection::vec(prop::collection::vec(0usize..8, 1..6), 1..5).prop_map(|lines| {
            NetworkModel::from_lines(lines.into_iter().enumerate().map(|(i, stations)| {
                (
                    format!("L{i}"),
                    stations
                        .into_iter()
                        .map(|s| format!("S{s}"))
                        .collect::<Vec<_>>(),
                )
            }))
            .unwrap()
        })
    }

    fn names(network: &NetworkModel) -> Vec<String> {
        network.stations().iter().map(|s| s.to_string()).collect()
    }

    proptest! {
        /// Every station routes to itself with an empty route
        #[test]
        fn self_route_is_trivial(network in network_strategy()) {
            let planner = RoutePlanner::new(&network, &PlannerConfig::default());
            for name in names(&network) {
                let route = planner.plan(&name, &name).unwrap();
                prop_assert!(route.is_trivial());
                prop_assert_eq!(route.transfer_count(), 0);
            }
        }

        /// Reversing a query gives the same hop and transfer counts
        #[test]
        fn routes_are_symmetric(network in network_strategy()) {
            let planner = RoutePlanner::new(&network, &PlannerConfig::default());
            let names = names(&network);
            for a in &names {
                for b in &names {
                    match (planner.plan(a, b), planner.plan(b, a)) {
                        (Ok(there), Ok(back)) => {
                            prop_assert_eq!(there.edge_count(), back.edge_count());
                            prop_assert_eq!(there.transfer_count(), back.transfer_count());
                        }
                        (Err(PlanError::NoRoute { .. }), Err(PlanError::NoRoute { .. })) => {}
                        (there, back) => {
                            prop_assert!(false, "asymmetric results: {:?} / {:?}", there, back);
                        }
                    }
                }
            }
        }

        /// Directly connected stations are one ride apart
        #[test]
        fn neighbors_are_one_ride(network in network_strategy()) {
            let planner = RoutePlanner::new(&network, &PlannerConfig::default());
            for name in names(&network) {
                for neighbor in network.neighbors(&name).unwrap() {
                    let route = planner.plan(&name, neighbor.station.as_str()).unwrap();
                    prop_assert_eq!(route.edge_count(), 1);
                    prop_assert_eq!(route.transfer_count(), 0);
                }
            }
        }

        /// Alternatives are distinct, ranked, and led by the best route
        #[test]
        fn alternatives_are_ranked_and_distinct(network in network_strategy()) {
            let planner = RoutePlanner::new(&network, &PlannerConfig::default());
            let names = names(&network);
            for a in &names {
                for b in &names {
                    let Ok(best) = planner.search(a, b) else { continue };
                    let routes = planner.alternatives(a, b, 4).unwrap();
                    prop_assert!(!routes.is_empty() && routes.len() <= 4);
                    prop_assert_eq!(routes[0].cost, best.cost);

                    let mut seen = std::collections::HashSet::new();
                    for result in &routes {
                        let sequence: Vec<&StationName> =
                            result.route.stops().iter().map(|s| &s.station).collect();
                        prop_assert!(seen.insert(sequence), "duplicate route {:?}", result.route);
                    }
                    for pair in routes.windows(2) {
                        prop_assert!(
                            (pair[0].cost, pair[0].route.edge_count())
                                <= (pair[1].cost, pair[1].route.edge_count())
                        );
                    }
                }
            }
        }

        /// Every step of a route follows a real edge on its tagged line
        #[test]
        fn routes_follow_edges(network in network_strategy()) {
            let planner = RoutePlanner::new(&network, &PlannerConfig::default());
            let names = names(&network);
            for a in &names {
                for b in &names {
                    let Ok(route) = planner.plan(a, b) else { continue };
                    prop_assert_eq!(route.origin().as_str(), a.as_str());
                    prop_assert_eq!(route.destination().as_str(), b.as_str());
                    for pair in route.stops().windows(2) {
                        let arrival = pair[1].line.as_ref().unwrap();
                        let found = network
                            .neighbors(pair[0].station.as_str())
                            .unwrap()
                            .iter()
                            .any(|n| n.station == &pair[1].station && n.line == arrival);
                        prop_assert!(found, "{:?} -> {:?} is not an edge", pair[0], pair[1]);
                    }
                }
            }
        }
    }
}
