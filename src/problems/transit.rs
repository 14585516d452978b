//! Transit networks loaded from connection tables.
//!
//! Each line of the data file describes a track segment served by a line,
//!
//! ```text
//! # from, to, line, minutes, main zone, secondary zone
//! Harrow & Wealdstone, Kenton, Bakerloo, 3, 5, 0
//! Kenton, South Kenton, Bakerloo, 2, 4, 0
//! ```
//!
//! Segments can be travelled both ways. The main zone belongs to the first
//! station. The second station gets the secondary zone, or the main one when
//! the secondary zone is `0`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::cost::Minutes;
use crate::space::Edge;
use crate::space::Line;
use crate::space::Network;
use crate::space::NetworkError;
use crate::space::Station;
use crate::space::Zone;
use crate::space::ZoneSet;

const MAX_ELEMENTS_DISPLAYED: usize = 20;
const FIELDS_PER_LINE: usize = 6;
/// Secondary zone meaning "same as the main zone".
const NO_ZONE: &str = "0";
/// Zone labels handed out by [`TransitNetwork::random`].
const RANDOM_ZONES: [char; 10] = ['1', '2', '3', '4', '5', '6', 'a', 'b', 'c', 'd'];

#[derive(Clone, Default)]
pub struct TransitNetwork {
    /// Stations in the order they were first seen.
    stations: Vec<Station>,
    edges: FxHashMap<Station, Vec<Edge>>,
    zones: FxHashMap<Station, ZoneSet>,
}

impl TransitNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station with no connections or zones, if it's new.
    pub fn add_station(&mut self, station: &Station) {
        if !self.edges.contains_key(station) {
            self.stations.push(station.clone());
            self.edges.insert(station.clone(), Vec::new());
            self.zones.insert(station.clone(), ZoneSet::new());
        }
    }

    /// Connects two stations both ways.
    pub fn connect(&mut self, a: &Station, b: &Station, minutes: Minutes, line: &Line) {
        self.add_station(a);
        self.add_station(b);
        if let Some(edges) = self.edges.get_mut(a) {
            edges.push(Edge::new(b.clone(), minutes, line.clone()));
        }
        if let Some(edges) = self.edges.get_mut(b) {
            edges.push(Edge::new(a.clone(), minutes, line.clone()));
        }
    }

    /// Puts a station in a zone, if it wasn't already.
    pub fn add_zone(&mut self, station: &Station, zone: Zone) {
        self.add_station(station);
        if let Some(zones) = self.zones.get_mut(station)
            && !zones.contains(&zone)
        {
            zones.push(zone);
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
    pub fn len(&self) -> usize {
        self.stations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
    /// Number of (directed) edges.
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// A random network.
    ///
    /// Each line runs through `stations_per_line` distinct stations picked at
    /// random, with segments of 1 to 10 minutes. Every station gets 1 or 2
    /// zones.
    pub fn random<R: rand::Rng>(
        r: &mut R,
        num_stations: usize,
        num_lines: usize,
        stations_per_line: usize,
    ) -> Self {
        use rand::seq::SliceRandom;

        let mut network = Self::new();
        let stations: Vec<Station> = (0..num_stations)
            .map(|i| Station::new(&format!("S{i}")))
            .collect();
        for s in &stations {
            network.add_station(s);
            let main = r.random_range(0..RANDOM_ZONES.len());
            network.add_zone(s, Zone(RANDOM_ZONES[main]));
            if r.random_bool(0.25) {
                let secondary = (main + 1).min(RANDOM_ZONES.len() - 1);
                network.add_zone(s, Zone(RANDOM_ZONES[secondary]));
            }
        }

        let mut order: Vec<usize> = (0..num_stations).collect();
        for l in 0..num_lines {
            let line = Line::new(&format!("L{l}"));
            order.shuffle(r);
            let stops = &order[..stations_per_line.min(num_stations)];
            for pair in stops.windows(2) {
                let minutes = r.random_range(1..=10);
                network.connect(&stations[pair[0]], &stations[pair[1]], minutes, &line);
            }
        }

        network
    }
}

impl Network for TransitNetwork {
    fn neighbours(&self, station: &Station) -> Result<&[Edge], NetworkError> {
        self.edges
            .get(station)
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::StationNotFound(station.clone()))
    }

    fn zones(&self, station: &Station) -> Result<&ZoneSet, NetworkError> {
        self.zones
            .get(station)
            .ok_or_else(|| NetworkError::StationNotFound(station.clone()))
    }
}

impl std::fmt::Display for TransitNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "TransitNetwork({} stations, {} edges):",
            self.len(),
            self.num_edges()
        )?;
        for s in self.stations.iter().take(MAX_ELEMENTS_DISPLAYED) {
            let zones: String = self.zones[s].iter().map(|z| z.0).collect();
            write!(f, "  {s} [{zones}]:")?;
            for e in self.edges[s].iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, " {e}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for TransitNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "TransitNetwork({}, {})", self.len(), self.num_edges())
    }
}

#[derive(Debug, Error)]
pub enum TransitNetworkParseError {
    #[error("Line {line}: expected 6 fields, found {found}")]
    WrongFieldCount { line: usize, found: usize },
    #[error("Line {line}: empty station name")]
    EmptyStation { line: usize },
    #[error("Line {line}: invalid travel time '{value}': {e}")]
    InvalidMinutes {
        line: usize,
        value: String,
        e: std::num::ParseIntError,
    },
    #[error("Line {line}: invalid zone '{value}'")]
    InvalidZone { line: usize, value: String },
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

fn parse_zone(line: usize, value: &str) -> Result<Zone, TransitNetworkParseError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Zone(c)),
        _ => Err(TransitNetworkParseError::InvalidZone {
            line,
            value: value.to_string(),
        }),
    }
}

fn parse_station(line: usize, value: &str) -> Result<Station, TransitNetworkParseError> {
    if value.is_empty() {
        return Err(TransitNetworkParseError::EmptyStation { line });
    }
    Ok(Station::new(value))
}

impl std::convert::TryFrom<&str> for TransitNetwork {
    type Error = TransitNetworkParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut network = TransitNetwork::new();

        for (i, text) in s.lines().enumerate() {
            let line = i + 1;
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let fields: SmallVec<[&str; FIELDS_PER_LINE]> = text.split(',').map(str::trim).collect();
            let [from, to, line_name, minutes, main_zone, secondary_zone] = fields[..] else {
                return Err(TransitNetworkParseError::WrongFieldCount {
                    line,
                    found: fields.len(),
                });
            };

            let from = parse_station(line, from)?;
            let to = parse_station(line, to)?;
            let minutes: Minutes =
                minutes
                    .parse()
                    .map_err(|e| TransitNetworkParseError::InvalidMinutes {
                        line,
                        value: minutes.to_string(),
                        e,
                    })?;
            let main_zone = parse_zone(line, main_zone)?;

            network.connect(&from, &to, minutes, &Line::new(line_name));
            network.add_zone(&from, main_zone);
            if secondary_zone == NO_ZONE {
                network.add_zone(&to, main_zone);
            } else {
                network.add_zone(&to, parse_zone(line, secondary_zone)?);
            }
        }

        log::debug!(
            "Loaded {} stations and {} edges",
            network.len(),
            network.num_edges()
        );
        Ok(network)
    }
}

impl std::convert::TryFrom<&std::path::Path> for TransitNetwork {
    type Error = TransitNetworkParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| TransitNetworkParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        TransitNetwork::try_from(text.as_str())
    }
}
