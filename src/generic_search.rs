//! The traversal loop shared by every strategy.
//!
//! ```
//! use transit_search::generic_search::search_by_name;
//! use transit_search::problems::transit::TransitNetwork;
//!
//! let network = TransitNetwork::try_from("A, B, X, 5, 1, 0\nB, C, X, 3, 1, 2").unwrap();
//! let found = search_by_name(&network, "A", "C", "UniformCost", false, 0).unwrap();
//! assert_eq!(found.labels(), vec!["A (None)", "B (X)", "C (X)"]);
//! assert_eq!(found.cost, 8);
//! assert_eq!(found.explored, 3);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::algorithms::Admission;
use crate::algorithms::Candidate;
use crate::algorithms::Strategy;
use crate::algorithms::strategy_by_name;
use crate::cost::Minutes;
use crate::heuristic::ZoneError;
use crate::search::SearchTree;
use crate::search::Stop;
use crate::space::Line;
use crate::space::Network;
use crate::space::NetworkError;
use crate::space::Station;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Algorithm '{0}' not known")]
    UnknownStrategy(String),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("Unable to find path from start [{start}] to goal [{goal}]")]
    Unreachable { start: Station, goal: Station },
    #[error("No more nodes to explore; algorithm failed")]
    Exhausted,
    #[error("Heuristic failed: {0}")]
    Heuristic(#[from] ZoneError),
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Stops from the start to the goal. Empty when they are the same.
    pub path: Vec<Stop>,
    /// Cost of the path, as priced by the strategy.
    pub cost: Minutes,
    /// Distinct stations expanded, including the goal.
    pub explored: usize,
}

impl SearchResult {
    fn trivial() -> Self {
        Self {
            path: vec![],
            cost: 0,
            explored: 0,
        }
    }

    /// The path as `station (line)` labels.
    pub fn labels(&self) -> Vec<String> {
        self.path.iter().map(Stop::to_string).collect()
    }
}

/// Lines through which each station was expanded.
///
/// A station may be expanded again through a different line, but never
/// through the same line twice.
#[derive(Debug, Default)]
pub struct ExploredSet {
    lines: FxHashMap<Station, SmallVec<[Option<Line>; 4]>>,
}

impl ExploredSet {
    pub fn mark(&mut self, station: &Station, line: Option<&Line>) {
        let lines = self.lines.entry(station.clone()).or_default();
        if !lines.iter().any(|l| l.as_ref() == line) {
            lines.push(line.cloned());
        }
    }

    #[must_use]
    pub fn contains(&self, station: &Station, line: Option<&Line>) -> bool {
        self.lines
            .get(station)
            .is_some_and(|lines| lines.iter().any(|l| l.as_ref() == line))
    }

    /// Number of distinct stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Searches a path from `start` to `goal`.
///
/// `reverse` and `line_change_cost` are only interpreted by the strategy.
pub fn search<N: Network + ?Sized>(
    network: &N,
    start: &Station,
    goal: &Station,
    strategy: &dyn Strategy,
    reverse: bool,
    line_change_cost: Minutes,
) -> Result<SearchResult, SearchError> {
    if start == goal {
        return Ok(SearchResult::trivial());
    }
    log::debug!(
        "Searching {start} -> {goal} with {} (reverse={reverse}, line change={line_change_cost}min)",
        strategy.name()
    );

    let admission = Admission {
        reverse,
        line_change_cost,
        goal_zones: network.zones(goal)?,
    };
    let mut tree = SearchTree::new();
    let mut explored = ExploredSet::default();

    let seed = Candidate::start(start.clone(), network.zones(start)?.clone());
    let mut frontier = strategy.create_frontier(&mut tree, seed, &admission)?;

    while let Some(node_index) = frontier.pop() {
        let node = &tree[node_index];
        explored.mark(node.station(), node.line());

        if node.station() == goal {
            let found = SearchResult {
                path: tree.to_path(node_index),
                cost: node.g(),
                explored: explored.len(),
            };
            log::debug!(
                "Found {goal} at {}min after exploring {} stations ({} nodes)",
                found.cost,
                found.explored,
                tree.len()
            );
            return Ok(found);
        }

        log::trace!(
            "Expanding {} ({}min, {})",
            node.station(),
            node.g(),
            frontier.len()
        );
        let candidates = network
            .neighbours(node.station())?
            .iter()
            .filter(|e| !explored.contains(&e.to, Some(&e.line)))
            .map(|e| -> Result<Candidate, SearchError> {
                Ok(Candidate::from_edge(e, network.zones(&e.to)?.clone(), node_index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        strategy.admit(frontier.as_mut(), &mut tree, candidates, &admission)?;
    }

    log::debug!(
        "Exhausted the frontier after exploring {} stations",
        explored.len()
    );
    Err(SearchError::Unreachable {
        start: start.clone(),
        goal: goal.clone(),
    })
}

/// Like [`search`], picking the strategy by name.
///
/// Unknown names fail before touching the network.
pub fn search_by_name<N: Network + ?Sized>(
    network: &N,
    start: &str,
    goal: &str,
    strategy: &str,
    reverse: bool,
    line_change_cost: Minutes,
) -> Result<SearchResult, SearchError> {
    let strategy = strategy_by_name(strategy)?;
    search(
        network,
        &Station::new(start),
        &Station::new(goal),
        strategy,
        reverse,
        line_change_cost,
    )
}
