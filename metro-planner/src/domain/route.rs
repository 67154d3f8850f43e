//! Route types.
//!
//! A `Route` is the answer to a planning query: the ordered stops from
//! origin to destination, each tagged with the line used to arrive there.
//! Consecutive stops on the same line are grouped into rides, with a
//! transfer marker wherever the line changes.

use super::{DomainError, LineName, StationName};

/// One stop on a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// The station reached.
    pub station: StationName,
    /// Line used to arrive here; `None` only for the origin.
    pub line: Option<LineName>,
}

impl Stop {
    /// The starting stop of a route.
    pub fn origin(station: StationName) -> Self {
        Self {
            station,
            line: None,
        }
    }

    /// A stop reached by riding `line`.
    pub fn via(station: StationName, line: LineName) -> Self {
        Self {
            station,
            line: Some(line),
        }
    }
}

/// A maximal run along a single line without changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    /// The line ridden.
    pub line: LineName,
    /// Stations passed, boarding station first and alighting station last.
    /// Always at least two entries.
    pub stations: Vec<StationName>,
}

impl Ride {
    /// Boarding station.
    pub fn from(&self) -> &StationName {
        &self.stations[0]
    }

    /// Alighting station.
    pub fn to(&self) -> &StationName {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of edges travelled on this ride.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }
}

/// A change of line at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Where the change happens.
    pub station: StationName,
    /// Line being left.
    pub from_line: LineName,
    /// Line being boarded.
    pub to_line: LineName,
}

/// A segment of a route: either a ride or a transfer between rides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Travel along one line
    Ride(Ride),
    /// Change lines at a station
    Transfer(Transfer),
}

impl Segment {
    /// Returns the ride if this is a ride segment.
    pub fn as_ride(&self) -> Option<&Ride> {
        match self {
            Segment::Ride(ride) => Some(ride),
            Segment::Transfer(_) => None,
        }
    }

    /// Returns the transfer if this is a transfer segment.
    pub fn as_transfer(&self) -> Option<&Transfer> {
        match self {
            Segment::Ride(_) => None,
            Segment::Transfer(transfer) => Some(transfer),
        }
    }

    /// Returns true if this is a transfer segment.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Segment::Transfer(_))
    }
}

/// A complete route from origin to destination.
///
/// # Invariants
///
/// - At least one stop
/// - The first stop has no arrival line, every later stop has one
/// - Segments alternate Ride, Transfer, Ride, ... starting and ending
///   with a ride (or are empty for a trivial route)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<Stop>,
    segments: Vec<Segment>,
}

impl Route {
    /// Constructs a route from its stops, grouping them into rides.
    ///
    /// Adjacency of consecutive stops is not checked here; that is the
    /// planner's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::domain::{LineName, Route, StationName, Stop};
    ///
    /// let station = |s| StationName::parse(s).unwrap();
    /// let red = LineName::parse("Red").unwrap();
    ///
    /// let route = Route::new(vec![
    ///     Stop::origin(station("A")),
    ///     Stop::via(station("B"), red.clone()),
    ///     Stop::via(station("C"), red),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(route.edge_count(), 2);
    /// assert_eq!(route.transfer_count(), 0);
    /// assert_eq!(route.rides().count(), 1);
    /// ```
    pub fn new(stops: Vec<Stop>) -> Result<Self, DomainError> {
        let Some(first) = stops.first() else {
            return Err(DomainError::EmptyRoute);
        };
        if first.line.is_some() {
            return Err(DomainError::OriginHasLine);
        }

        let mut segments = Vec::new();
        let mut current: Option<Ride> = None;

        for (i, window) in stops.windows(2).enumerate() {
            let (prev, stop) = (&window[0], &window[1]);
            let line = stop.line.as_ref().ok_or(DomainError::MissingLine(i + 1))?;

            if let Some(ride) = current.as_mut().filter(|ride| &ride.line == line) {
                ride.stations.push(stop.station.clone());
                continue;
            }

            if let Some(ride) = current.take() {
                let from_line = ride.line.clone();
                segments.push(Segment::Ride(ride));
                segments.push(Segment::Transfer(Transfer {
                    station: prev.station.clone(),
                    from_line,
                    to_line: line.clone(),
                }));
            }
            current = Some(Ride {
                line: line.clone(),
                stations: vec![prev.station.clone(), stop.station.clone()],
            });
        }

        segments.extend(current.map(Segment::Ride));

        Ok(Route { stops, segments })
    }

    /// A zero-length route that starts and ends at `station`.
    pub fn trivial(station: StationName) -> Self {
        Route {
            stops: vec![Stop::origin(station)],
            segments: Vec::new(),
        }
    }

    /// All stops in order, origin first.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Rides and transfers in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the rides only.
    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.segments.iter().filter_map(Segment::as_ride)
    }

    /// Iterate over the transfers only.
    pub fn transfers(&self) -> impl Iterator<Item = &Transfer> {
        self.segments.iter().filter_map(Segment::as_transfer)
    }

    /// Starting station.
    pub fn origin(&self) -> &StationName {
        &self.stops[0].station
    }

    /// Final station.
    pub fn destination(&self) -> &StationName {
        &self.stops[self.stops.len() - 1].station
    }

    /// Number of edges travelled.
    pub fn edge_count(&self) -> usize {
        self.stops.len() - 1
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_transfer()).count()
    }

    /// Returns true if origin and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }
}
