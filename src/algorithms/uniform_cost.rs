//! Uniform-cost search.
//!
//! Expands the cheapest node first, charging for line changes. Among equally
//! cheap nodes the one inserted first wins, so results don't depend on how the
//! heap happens to shuffle things around.

use crate::algorithms::Admission;
use crate::algorithms::Candidate;
use crate::algorithms::Strategy;
use crate::algorithms::admit_all;
use crate::algorithms::frontier::Frontier;
use crate::cost::Minutes;
use crate::data_structures::rank_heap::RankHeap;
use crate::generic_search::SearchError;
use crate::search::NodeIndex;
use crate::search::SearchTree;

/// The ranking value for Uniform-cost search
///
/// We prefer better g-values, and tie break by insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct UniformCostRank {
    g: Minutes,
    sequence: u64,
}

impl UniformCostRank {
    pub fn new(g: Minutes, sequence: u64) -> Self {
        Self { g, sequence }
    }
    pub fn g(&self) -> Minutes {
        self.g
    }
}

/// A heap node for Uniform-cost search
///
/// Carries just ranking information and the index of the Search Node.
#[derive(Debug)]
struct UniformCostHeapNode {
    rank: UniformCostRank,
    node: NodeIndex,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl PartialEq for UniformCostHeapNode {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl Eq for UniformCostHeapNode {}

/// PartialOrd is forwarded to Ord::cmp
impl PartialOrd for UniformCostHeapNode {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is forwarded to self.rank's Ord
impl Ord for UniformCostHeapNode {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Pops the cheapest node, oldest first on ties.
#[derive(Debug, Default)]
pub struct CostFrontier {
    open: RankHeap<UniformCostHeapNode>,
    /// Insertions so far.
    sequence: u64,
}

impl CostFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for CostFrontier {
    fn push(&mut self, node: NodeIndex, g: Minutes) {
        let rank = UniformCostRank::new(g, self.sequence);
        self.sequence += 1;
        self.open.push(UniformCostHeapNode { rank, node });
    }
    fn pop(&mut self) -> Option<NodeIndex> {
        self.open.pop().map(|n| n.node)
    }
    fn len(&self) -> usize {
        self.open.len()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn name(&self) -> &'static str {
        "UniformCost"
    }

    fn new_frontier(&self) -> Box<dyn Frontier> {
        Box::new(CostFrontier::new())
    }

    /// Inserts every candidate, in reverse edge order unless `reverse` is set.
    ///
    /// Order only matters for breaking ties between equally cheap nodes.
    fn admit(
        &self,
        frontier: &mut dyn Frontier,
        tree: &mut SearchTree,
        candidates: Vec<Candidate>,
        admission: &Admission,
    ) -> Result<(), SearchError> {
        admit_all(
            frontier,
            tree,
            candidates,
            admission.line_change_cost,
            !admission.reverse,
        );
        Ok(())
    }
}
