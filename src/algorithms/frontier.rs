use std::collections::VecDeque;

use crate::cost::Minutes;
use crate::search::NodeIndex;

/// Nodes waiting to be expanded.
pub trait Frontier: std::fmt::Debug {
    /// Inserts a node reached with cost `g`.
    ///
    /// Frontiers that don't rank by cost ignore `g`.
    fn push(&mut self, node: NodeIndex, g: Minutes);
    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<NodeIndex>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeIndex>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeIndex, _g: Minutes) {
        self.queue.push_back(node);
    }
    fn pop(&mut self) -> Option<NodeIndex> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeIndex>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: NodeIndex, _g: Minutes) {
        self.stack.push(node);
    }
    fn pop(&mut self) -> Option<NodeIndex> {
        self.stack.pop()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::search::SearchNode;
    use crate::search::SearchTree;
    use crate::space::Station;
    use crate::space::ZoneSet;

    /// A tree with `n` root nodes, just to get valid indices.
    pub(crate) fn indices(n: usize) -> Vec<NodeIndex> {
        let mut tree = SearchTree::new();
        (0..n)
            .map(|i| {
                tree.push(SearchNode::new(
                    Station::new(&i.to_string()),
                    0,
                    None,
                    ZoneSet::new(),
                    None,
                ))
            })
            .collect()
    }

    #[test]
    fn fifo_ignores_cost() {
        let i = indices(3);
        let mut f = FifoFrontier::new();
        f.push(i[0], 30);
        f.push(i[1], 10);
        f.push(i[2], 20);
        assert_eq!(f.len(), 3);

        assert_eq!(f.pop(), Some(i[0]));
        assert_eq!(f.pop(), Some(i[1]));
        assert_eq!(f.pop(), Some(i[2]));
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn lifo_ignores_cost() {
        let i = indices(3);
        let mut f = LifoFrontier::new();
        f.push(i[0], 10);
        f.push(i[1], 30);
        f.push(i[2], 20);

        assert_eq!(f.pop(), Some(i[2]));
        assert_eq!(f.pop(), Some(i[1]));
        assert_eq!(f.pop(), Some(i[0]));
        assert!(f.pop().is_none());
    }
}
