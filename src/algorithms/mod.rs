//! Implementation of search strategies.
//!
//! A strategy decides how the frontier is ordered and which successors make
//! it in. The traversal itself lives in [`crate::generic_search`] and doesn't
//! know which strategy it's running.

pub mod best_first;
pub mod breadth_first;
pub mod depth_first;
pub mod frontier;
pub mod uniform_cost;

use crate::cost::Minutes;
use crate::cost::step_cost;
use crate::generic_search::SearchError;
use crate::search::NodeIndex;
use crate::search::SearchNode;
use crate::search::SearchTree;
use crate::space::Edge;
use crate::space::Line;
use crate::space::Station;
use crate::space::ZoneSet;

pub use best_first::BestFirst;
pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use frontier::Frontier;
pub use uniform_cost::UniformCost;

/// A successor offered to a strategy, not yet part of the search tree.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub station: Station,
    /// Cost of the step from the parent.
    pub minutes: Minutes,
    pub line: Option<Line>,
    pub zones: ZoneSet,
    pub parent: Option<NodeIndex>,
}

impl Candidate {
    /// The root of a search.
    pub fn start(station: Station, zones: ZoneSet) -> Self {
        Self {
            station,
            minutes: 0,
            line: None,
            zones,
            parent: None,
        }
    }

    /// Following `edge` out of `parent`.
    pub fn from_edge(edge: &Edge, zones: ZoneSet, parent: NodeIndex) -> Self {
        Self {
            station: edge.to.clone(),
            minutes: edge.minutes,
            line: Some(edge.line.clone()),
            zones,
            parent: Some(parent),
        }
    }

    /// Builds the Search Node, pricing line changes at `line_change_cost`.
    pub fn into_node(self, tree: &SearchTree, line_change_cost: Minutes) -> SearchNode {
        let g = match self.parent {
            Some(p) => {
                let parent = &tree[p];
                step_cost(
                    parent.g(),
                    parent.line(),
                    self.minutes,
                    self.line.as_ref(),
                    line_change_cost,
                )
            }
            None => self.minutes,
        };
        SearchNode::new(self.station, g, self.line, self.zones, self.parent)
    }
}

/// Search-wide settings handed to every admission.
#[derive(Debug, Clone, Copy)]
pub struct Admission<'a> {
    /// Flips the order in which successors are inserted.
    pub reverse: bool,
    /// Extra minutes for changing lines. Not every strategy charges it.
    pub line_change_cost: Minutes,
    pub goal_zones: &'a ZoneSet,
}

/// A frontier ordering policy.
///
/// Strategies are stateless. Everything belonging to a run is passed in.
pub trait Strategy: std::fmt::Debug + Sync {
    fn name(&self) -> &'static str;

    /// An empty frontier with this strategy's ordering.
    fn new_frontier(&self) -> Box<dyn Frontier>;

    /// Turns `candidates` into Search Nodes and inserts the chosen ones into
    /// the frontier.
    fn admit(
        &self,
        frontier: &mut dyn Frontier,
        tree: &mut SearchTree,
        candidates: Vec<Candidate>,
        admission: &Admission,
    ) -> Result<(), SearchError>;

    /// A frontier seeded with `seed`.
    fn create_frontier(
        &self,
        tree: &mut SearchTree,
        seed: Candidate,
        admission: &Admission,
    ) -> Result<Box<dyn Frontier>, SearchError> {
        let mut frontier = self.new_frontier();
        self.admit(frontier.as_mut(), tree, vec![seed], admission)?;
        Ok(frontier)
    }
}

/// Admits every candidate, in edge order or reversed.
pub(crate) fn admit_all(
    frontier: &mut dyn Frontier,
    tree: &mut SearchTree,
    candidates: Vec<Candidate>,
    line_change_cost: Minutes,
    reversed: bool,
) {
    let mut nodes: Vec<SearchNode> = candidates
        .into_iter()
        .map(|c| c.into_node(tree, line_change_cost))
        .collect();
    if reversed {
        nodes.reverse();
    }

    for node in nodes {
        let g = node.g();
        log::trace!("  Admitting {} ({}min)", node.station(), g);
        let index = tree.push(node);
        frontier.push(index, g);
    }
}

/// Names of the available strategies, in registry order.
pub const STRATEGY_NAMES: [&str; 4] = ["BreadthFirst", "DepthFirst", "UniformCost", "BestFirst"];

static STRATEGIES: [&dyn Strategy; 4] = [&BreadthFirst, &DepthFirst, &UniformCost, &BestFirst];

/// Looks up a strategy by its name.
///
/// ```
/// use transit_search::algorithms::strategy_by_name;
///
/// assert_eq!(strategy_by_name("UniformCost").unwrap().name(), "UniformCost");
/// assert!(strategy_by_name("Dijkstra").is_err());
/// ```
pub fn strategy_by_name(name: &str) -> Result<&'static dyn Strategy, SearchError> {
    STRATEGIES
        .iter()
        .copied()
        .find(|s| s.name() == name)
        .ok_or_else(|| SearchError::UnknownStrategy(name.to_string()))
}
