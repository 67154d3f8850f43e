//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Segment, Stop};
use crate::network::{Line, NetworkModel, Neighbor};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,
}

/// Request for several ranked routes.
#[derive(Debug, Deserialize)]
pub struct AlternativesRequest {
    pub origin: String,
    pub destination: String,

    /// Upper bound on routes returned; the server default when absent
    #[serde(default)]
    pub max_routes: Option<usize>,
}

/// Ranked routes, best first.
#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub routes: Vec<RankedRouteResponse>,
}

/// One entry of an alternatives response.
#[derive(Debug, Serialize)]
pub struct RankedRouteResponse {
    /// Weighted cost the routes are ranked by
    pub cost: u64,

    #[serde(flatten)]
    pub route: RouteResponse,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub origin: String,
    pub destination: String,

    /// Number of edges travelled
    pub edge_count: usize,

    /// Number of line changes
    pub transfer_count: usize,

    /// Every stop with the line used to arrive
    pub stops: Vec<StopResult>,

    /// Rides and transfers in order
    pub segments: Vec<SegmentResult>,
}

impl RouteResponse {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            edge_count: route.edge_count(),
            transfer_count: route.transfer_count(),
            stops: route.stops().iter().map(StopResult::from_stop).collect(),
            segments: route
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
        }
    }
}

/// A stop on a route.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub station: String,

    /// Line used to arrive; absent for the origin
    pub line: Option<String>,
}

impl StopResult {
    fn from_stop(stop: &Stop) -> Self {
        Self {
            station: stop.station.to_string(),
            line: stop.line.as_ref().map(ToString::to_string),
        }
    }
}

/// A route segment.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentResult {
    Ride {
        line: String,
        from: String,
        to: String,
        hops: usize,
        stations: Vec<String>,
    },
    Transfer {
        station: String,
        from_line: String,
        to_line: String,
    },
}

impl SegmentResult {
    fn from_segment(segment: &Segment) -> Self {
        match segment {
            Segment::Ride(ride) => SegmentResult::Ride {
                line: ride.line.to_string(),
                from: ride.from().to_string(),
                to: ride.to().to_string(),
                hops: ride.hops(),
                stations: ride.stations.iter().map(ToString::to_string).collect(),
            },
            Segment::Transfer(transfer) => SegmentResult::Transfer {
                station: transfer.station.to_string(),
                from_line: transfer.from_line.to_string(),
                to_line: transfer.to_line.to_string(),
            },
        }
    }
}

/// All lines in the network.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// A line with its stations.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub name: String,
    pub circular: bool,
    pub stations: Vec<String>,
}

impl LineResult {
    /// Create from a network line.
    pub fn from_line(network: &NetworkModel, line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            circular: line.is_circular(),
            stations: line
                .stations()
                .iter()
                .map(|id| network.station_name(*id).to_string())
                .collect(),
        }
    }
}

/// Topology around one station.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub name: String,

    /// Lines through the station
    pub lines: Vec<String>,

    /// Whether two or more lines meet here
    pub transfer_hub: bool,

    /// Stations one hop away
    pub neighbors: Vec<NeighborResult>,
}

/// A neighbouring station.
#[derive(Debug, Serialize)]
pub struct NeighborResult {
    pub station: String,
    pub line: String,
}

impl NeighborResult {
    /// Create from a network neighbor.
    pub fn from_neighbor(neighbor: &Neighbor<'_>) -> Self {
        Self {
            station: neighbor.station.to_string(),
            line: neighbor.line.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
