//! Bounded best-first search.
//!
//! Every expansion ranks its successors by [`ZoneDistance`] and only the best
//! [`BEAM_WIDTH`] of them are queued, in FIFO order. Anything else is dropped
//! for good, so the search is neither complete nor optimal.
//!
//! An expansion with no successors at all fails the whole search with
//! [`SearchError::Exhausted`], even when other nodes are still queued.

use crate::algorithms::Admission;
use crate::algorithms::Candidate;
use crate::algorithms::Strategy;
use crate::algorithms::frontier::FifoFrontier;
use crate::algorithms::frontier::Frontier;
use crate::cost::Minutes;
use crate::generic_search::SearchError;
use crate::heuristic::Heuristic;
use crate::heuristic::ZoneDistance;
use crate::search::SearchNode;
use crate::search::SearchTree;

/// Successors kept per expansion.
pub const BEAM_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

impl Strategy for BestFirst {
    fn name(&self) -> &'static str {
        "BestFirst"
    }

    fn new_frontier(&self) -> Box<dyn Frontier> {
        Box::new(FifoFrontier::new())
    }

    /// Queues the best [`BEAM_WIDTH`] candidates by heuristic.
    ///
    /// Ignores `reverse`. Candidates with the same estimate keep their edge
    /// order.
    fn admit(
        &self,
        frontier: &mut dyn Frontier,
        tree: &mut SearchTree,
        candidates: Vec<Candidate>,
        admission: &Admission,
    ) -> Result<(), SearchError> {
        let Some(parent) = candidates.first().map(|c| c.parent) else {
            return Err(SearchError::Exhausted);
        };

        let mut ranked: Vec<(Minutes, SearchNode)> = candidates
            .into_iter()
            .map(|c| -> Result<(Minutes, SearchNode), SearchError> {
                let h = ZoneDistance::h(&c.zones, admission.goal_zones)?;
                Ok((h, c.into_node(tree, admission.line_change_cost)))
            })
            .collect::<Result<_, _>>()?;
        ranked.sort_by_key(|(h, _)| *h);

        if let Some(p) = parent {
            log::trace!(
                "  Keeping {} of {} successors of {}",
                ranked.len().min(BEAM_WIDTH),
                ranked.len(),
                tree[p].station()
            );
        }
        for (h, node) in ranked.into_iter().take(BEAM_WIDTH) {
            let g = node.g();
            log::trace!("  Admitting {} ({}min, h={})", node.station(), g, h);
            let index = tree.push(node);
            frontier.push(index, g);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Edge;
    use crate::space::Station;
    use crate::space::Zone;
    use crate::space::ZoneSet;

    fn zones(labels: &str) -> ZoneSet {
        labels.chars().map(Zone).collect()
    }

    struct Fixture {
        tree: SearchTree,
        frontier: Box<dyn Frontier>,
        goal_zones: ZoneSet,
    }

    impl Fixture {
        fn new(goal_zones: &str) -> Self {
            let mut tree = SearchTree::new();
            let goal_zones = zones(goal_zones);
            let admission = Admission {
                reverse: false,
                line_change_cost: 0,
                goal_zones: &goal_zones,
            };
            let seed = Candidate::start(Station::new("Start"), zones("1"));
            let frontier = BestFirst
                .create_frontier(&mut tree, seed, &admission)
                .unwrap();
            Self {
                tree,
                frontier,
                goal_zones,
            }
        }

        fn expand(&mut self, successors: &[(&str, &str)]) -> Result<Vec<String>, SearchError> {
            let admission = Admission {
                reverse: true,
                line_change_cost: 0,
                goal_zones: &self.goal_zones,
            };
            let root = self.frontier.pop().unwrap();
            let candidates = successors
                .iter()
                .map(|(station, zone_labels)| {
                    let edge = Edge::new(Station::new(station), 1, "L".into());
                    Candidate::from_edge(&edge, zones(zone_labels), root)
                })
                .collect();
            BestFirst.admit(self.frontier.as_mut(), &mut self.tree, candidates, &admission)?;

            Ok(std::iter::from_fn(|| self.frontier.pop())
                .map(|i| self.tree[i].station().to_string())
                .collect())
        }
    }

    #[test]
    fn keeps_the_two_closest() {
        let mut f = Fixture::new("4");
        let kept = f
            .expand(&[("Far", "1"), ("Near", "4"), ("Mid", "2"), ("Close", "3")])
            .unwrap();
        assert_eq!(kept, vec!["Near", "Close"]);
    }

    #[test]
    fn ties_keep_edge_order() {
        let mut f = Fixture::new("4");
        let kept = f
            .expand(&[("P", "2"), ("Q", "2"), ("R", "2")])
            .unwrap();
        assert_eq!(kept, vec!["P", "Q"]);
    }

    #[test]
    fn a_single_successor_is_fine() {
        let mut f = Fixture::new("4");
        assert_eq!(f.expand(&[("Only", "1")]).unwrap(), vec!["Only"]);
    }

    #[test]
    fn no_successors_is_exhaustion() {
        let mut f = Fixture::new("4");
        assert_eq!(f.expand(&[]).unwrap_err(), SearchError::Exhausted);
    }

    #[test]
    fn unknown_zones_fail() {
        let mut f = Fixture::new("4");
        assert!(matches!(
            f.expand(&[("Nowhere", "z")]),
            Err(SearchError::Heuristic(_))
        ));
    }
}
