//! Breadth-first search.
//!
//! Expands stations in the order they were reached. Line changes are free.

use crate::algorithms::Admission;
use crate::algorithms::Candidate;
use crate::algorithms::Strategy;
use crate::algorithms::admit_all;
use crate::algorithms::frontier::FifoFrontier;
use crate::algorithms::frontier::Frontier;
use crate::generic_search::SearchError;
use crate::search::SearchTree;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "BreadthFirst"
    }

    fn new_frontier(&self) -> Box<dyn Frontier> {
        Box::new(FifoFrontier::new())
    }

    /// Queues every candidate, in edge order unless reversed.
    fn admit(
        &self,
        frontier: &mut dyn Frontier,
        tree: &mut SearchTree,
        candidates: Vec<Candidate>,
        admission: &Admission,
    ) -> Result<(), SearchError> {
        admit_all(frontier, tree, candidates, 0, admission.reverse);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Edge;
    use crate::space::Station;
    use crate::space::ZoneSet;

    fn popped(reverse: bool) -> Vec<String> {
        let mut tree = SearchTree::new();
        let goal_zones = ZoneSet::new();
        let admission = Admission {
            reverse,
            line_change_cost: 100,
            goal_zones: &goal_zones,
        };
        let seed = Candidate::start(Station::new("A"), ZoneSet::new());
        let mut frontier = BreadthFirst
            .create_frontier(&mut tree, seed, &admission)
            .unwrap();
        let root = frontier.pop().unwrap();

        let candidates = [("B", "X"), ("C", "Y"), ("D", "Z")]
            .into_iter()
            .map(|(to, line)| {
                Candidate::from_edge(&Edge::new(to.into(), 1, line.into()), ZoneSet::new(), root)
            })
            .collect();
        BreadthFirst
            .admit(frontier.as_mut(), &mut tree, candidates, &admission)
            .unwrap();

        std::iter::from_fn(|| frontier.pop())
            .map(|i| format!("{}:{}", tree[i].station(), tree[i].g()))
            .collect()
    }

    #[test]
    fn queues_in_edge_order() {
        assert_eq!(popped(false), vec!["B:1", "C:1", "D:1"]);
    }

    #[test]
    fn reverse_flips_order() {
        assert_eq!(popped(true), vec!["D:1", "C:1", "B:1"]);
    }
}
