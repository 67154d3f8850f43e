//! The immutable network model and its builder.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{LineName, StationName};

use super::error::NetworkError;

/// Index of a station within the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// Index of a line within the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

/// A directed half of an undirected track connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Station at the far end.
    pub to: StationId,
    /// Line this connection belongs to.
    pub line: LineId,
}

/// A line and its stations in running order.
#[derive(Debug, Clone)]
pub struct Line {
    name: LineName,
    stations: Vec<StationId>,
    circular: bool,
}

impl Line {
    /// The line's name.
    pub fn name(&self) -> &LineName {
        &self.name
    }

    /// Stations in running order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Whether the last station connects back to the first.
    pub fn is_circular(&self) -> bool {
        self.circular
    }
}

/// A station one hop away, and the line that gets you there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub station: &'a StationName,
    pub line: &'a LineName,
}

/// Station and line topology of a metro network.
///
/// Stations are identified by name; a station listed on several lines is a
/// single node and acts as a transfer hub. There are no mutation operations:
/// build a new model to change the network.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    stations: Vec<StationName>,
    station_index: HashMap<StationName, StationId>,
    lines: Vec<Line>,
    line_index: HashMap<LineName, LineId>,
    /// Outgoing edges per station, indexed by `StationId`.
    edges: Vec<Vec<Edge>>,
    /// Lines through each station in definition order, indexed by `StationId`.
    lines_at: Vec<Vec<LineId>>,
}

impl NetworkModel {
    /// Create a builder for a new network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Build a network from `(line name, stations)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::network::NetworkModel;
    ///
    /// let network = NetworkModel::from_lines([
    ///     ("Red", vec!["A", "B", "C"]),
    ///     ("Blue", vec!["B", "D"]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(network.station_count(), 4);
    /// assert!(network.is_transfer_hub("B").unwrap());
    /// ```
    pub fn from_lines<I, L, S, N>(lines: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        lines
            .into_iter()
            .fold(NetworkBuilder::new(), |builder, (name, stations)| {
                builder.line(name, stations)
            })
            .build()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of undirected (station, station, line) connections.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// All station names, in first-seen order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// All lines, in definition order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns true if `name` is a station in this network.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Look up a station by name.
    ///
    /// Surrounding whitespace is ignored. Malformed names are reported as
    /// unknown stations, since no station can carry them.
    pub fn resolve(&self, name: &str) -> Result<StationId, NetworkError> {
        StationName::parse(name)
            .ok()
            .and_then(|parsed| self.station_id(&parsed))
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Look up a station by validated name.
    pub fn station_id(&self, name: &StationName) -> Option<StationId> {
        self.station_index.get(name).copied()
    }

    /// Name of a station issued by this network.
    pub fn station_name(&self, id: StationId) -> &StationName {
        &self.stations[id.0]
    }

    /// Name of a line issued by this network.
    pub fn line_name(&self, id: LineId) -> &LineName {
        &self.lines[id.0].name
    }

    /// Outgoing edges of a station.
    pub fn edges(&self, id: StationId) -> &[Edge] {
        &self.edges[id.0]
    }

    /// Lines passing through a station.
    pub fn line_ids_at(&self, id: StationId) -> &[LineId] {
        &self.lines_at[id.0]
    }

    /// All stations one hop from `station`, with the connecting line.
    ///
    /// Results are sorted by station name, then line name. A pair of
    /// stations joined by two lines appears once per line.
    pub fn neighbors(&self, station: &str) -> Result<Vec<Neighbor<'_>>, NetworkError> {
        Ok(self.neighbors_of(self.resolve(station)?))
    }

    /// Neighbours of an already resolved station, ordered as in
    /// [`neighbors`](Self::neighbors).
    pub fn neighbors_of(&self, id: StationId) -> Vec<Neighbor<'_>> {
        let mut neighbors: Vec<Neighbor<'_>> = self
            .edges(id)
            .iter()
            .map(|edge| Neighbor {
                station: self.station_name(edge.to),
                line: self.line_name(edge.line),
            })
            .collect();
        neighbors.sort_by(|a, b| (a.station, a.line).cmp(&(b.station, b.line)));
        neighbors
    }

    /// Lines passing through `station`, in definition order.
    pub fn lines_of(&self, station: &str) -> Result<Vec<&LineName>, NetworkError> {
        let id = self.resolve(station)?;
        Ok(self
            .line_ids_at(id)
            .iter()
            .map(|line| self.line_name(*line))
            .collect())
    }

    /// Returns true if two or more lines pass through `station`.
    pub fn is_transfer_hub(&self, station: &str) -> Result<bool, NetworkError> {
        let id = self.resolve(station)?;
        Ok(self.line_ids_at(id).len() >= 2)
    }

    /// Look up a line by name.
    pub fn line(&self, name: &str) -> Result<&Line, NetworkError> {
        LineName::parse(name)
            .ok()
            .and_then(|parsed| self.line_index.get(&parsed))
            .map(|id| &self.lines[id.0])
            .ok_or_else(|| NetworkError::UnknownLine(name.to_string()))
    }

    /// Stations on a line in running order.
    pub fn stations_on(&self, line: &str) -> Result<Vec<&StationName>, NetworkError> {
        let line = self.line(line)?;
        Ok(line
            .stations
            .iter()
            .map(|id| self.station_name(*id))
            .collect())
    }
}

/// A line as supplied to the builder, before validation.
#[derive(Debug)]
struct RawLine {
    name: String,
    stations: Vec<String>,
    circular: bool,
}

/// Builder for creating a [`NetworkModel`].
///
/// Provides a fluent API for declaring lines. Validation happens in
/// [`build`](NetworkBuilder::build).
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    lines: Vec<RawLine>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line whose consecutive stations are adjacent.
    pub fn line<N, S>(self, name: impl Into<String>, stations: S) -> Self
    where
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.push(name.into(), stations, false)
    }

    /// Add a loop line: consecutive stations are adjacent, and so are the
    /// last and first.
    pub fn circular_line<N, S>(self, name: impl Into<String>, stations: S) -> Self
    where
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.push(name.into(), stations, true)
    }

    fn push<N, S>(mut self, name: String, stations: S, circular: bool) -> Self
    where
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.lines.push(RawLine {
            name,
            stations: stations.into_iter().map(Into::into).collect(),
            circular,
        });
        self
    }

    /// Validate the declared lines and build the network.
    pub fn build(self) -> Result<NetworkModel, NetworkError> {
        let mut network = NetworkModel {
            stations: Vec::new(),
            station_index: HashMap::new(),
            lines: Vec::new(),
            line_index: HashMap::new(),
            edges: Vec::new(),
            lines_at: Vec::new(),
        };

        for raw in self.lines {
            let name = LineName::parse(&raw.name)?;
            if network.line_index.contains_key(&name) {
                return Err(NetworkError::DuplicateLine(name));
            }
            if raw.stations.is_empty() {
                return Err(NetworkError::EmptyLine(name));
            }

            let line_id = LineId(network.lines.len());
            let mut stations = Vec::with_capacity(raw.stations.len());
            for station in &raw.stations {
                let id = network.intern(StationName::parse(station)?);
                if !network.lines_at[id.0].contains(&line_id) {
                    network.lines_at[id.0].push(line_id);
                }
                stations.push(id);
            }

            for pair in stations.windows(2) {
                network.connect(pair[0], pair[1], line_id);
            }
            if raw.circular && stations.len() > 2 {
                network.connect(stations[stations.len() - 1], stations[0], line_id);
            }

            network.line_index.insert(name.clone(), line_id);
            network.lines.push(Line {
                name,
                stations,
                circular: raw.circular,
            });
        }

        debug!(
            stations = network.station_count(),
            lines = network.line_count(),
            edges = network.edge_count(),
            "Built network model"
        );

        Ok(network)
    }
}

impl NetworkModel {
    /// Return the id for `name`, allocating a new station if unseen.
    fn intern(&mut self, name: StationName) -> StationId {
        if let Some(id) = self.station_index.get(&name) {
            return *id;
        }
        let id = StationId(self.stations.len());
        self.station_index.insert(name.clone(), id);
        self.stations.push(name);
        self.edges.push(Vec::new());
        self.lines_at.push(Vec::new());
        id
    }

    /// Join two stations in both directions on `line`.
    fn connect(&mut self, a: StationId, b: StationId, line: LineId) {
        if a == b {
            return;
        }
        let forward = Edge { to: b, line };
        if !self.edges[a.0].contains(&forward) {
            self.edges[a.0].push(forward);
            self.edges[b.0].push(Edge { to: a, line });
        }
    }
}
