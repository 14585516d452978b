//! The transit network as seen by the search.
//!
//! Searches only need to know where you can go from a station, and which zones
//! a station belongs to. Loading that data is left to implementors of
//! [`Network`] (see [`crate::problems::transit`]).

use std::sync::Arc;

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::cost::Minutes;

/// A station in the network.
///
/// Cheap to clone, as it's shared with every Search Node that visits it.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0}")]
pub struct Station(Arc<str>);

impl Station {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A line (service) connecting stations.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0}")]
pub struct Line(Arc<str>);

impl Line {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Line {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A zone label, like `'1'` or `'a'`.
///
/// Labels are not validated here. Only the heuristic gives them meaning.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0}")]
pub struct Zone(pub char);

/// Zones a station belongs to. Stations rarely have more than 2.
pub type ZoneSet = SmallVec<[Zone; 2]>;

/// A connection out of a station.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{to} ({minutes}min, {line})")]
pub struct Edge {
    pub to: Station,
    pub minutes: Minutes,
    pub line: Line,
}

impl Edge {
    pub fn new(to: Station, minutes: Minutes, line: Line) -> Self {
        Self { to, minutes, line }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Station '{0}' not found in the network")]
    StationNotFound(Station),
}

/// A read-only view of a transit network.
///
/// Edges are returned in a stable order, which makes searches deterministic.
pub trait Network: std::fmt::Debug {
    /// Connections leaving a station.
    fn neighbours(&self, station: &Station) -> Result<&[Edge], NetworkError>;
    /// Zones of a station.
    fn zones(&self, station: &Station) -> Result<&ZoneSet, NetworkError>;

    fn contains(&self, station: &Station) -> bool {
        self.neighbours(station).is_ok()
    }
}
