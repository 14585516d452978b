//! Depth-first search.
//!
//! Expands the most recently reached station first. Line changes are free.
//!
//! Candidates are stacked in reverse edge order so the first edge is explored
//! first. `reverse` undoes this, which is the opposite of what it does for
//! [`BreadthFirst`](crate::algorithms::BreadthFirst).

use crate::algorithms::Admission;
use crate::algorithms::Candidate;
use crate::algorithms::Strategy;
use crate::algorithms::admit_all;
use crate::algorithms::frontier::Frontier;
use crate::algorithms::frontier::LifoFrontier;
use crate::generic_search::SearchError;
use crate::search::SearchTree;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "DepthFirst"
    }

    fn new_frontier(&self) -> Box<dyn Frontier> {
        Box::new(LifoFrontier::new())
    }

    fn admit(
        &self,
        frontier: &mut dyn Frontier,
        tree: &mut SearchTree,
        candidates: Vec<Candidate>,
        admission: &Admission,
    ) -> Result<(), SearchError> {
        admit_all(frontier, tree, candidates, 0, !admission.reverse);
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
        let mut frontier = DepthFirst
            .create_frontier(&mut tree, seed, &admission)
            .unwrap();
        let root = frontier.pop().unwrap();

        let candidates = [("B", 1, "X"), ("C", 2, "Y"), ("D", 3, "Z")]
            .into_iter()
            .map(|(to, minutes, line)| {
                Candidate::from_edge(
                    &Edge::new(to.into(), minutes, line.into()),
                    ZoneSet::new(),
                    root,
                )
            })
            .collect();
        DepthFirst
            .admit(frontier.as_mut(), &mut tree, candidates, &admission)
            .unwrap();

        std::iter::from_fn(|| frontier.pop())
            .map(|i| format!("{}:{}", tree[i].station(), tree[i].g()))
            .collect()
    }

    #[test]
    fn first_edge_is_explored_first() {
        assert_eq!(popped(false), vec!["B:1", "C:2", "D:3"]);
    }

    #[test]
    fn reverse_explores_last_edge_first() {
        assert_eq!(popped(true), vec!["D:3", "C:2", "B:1"]);
    }
}
