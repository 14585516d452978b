use derive_more::Display;
use nonmax::NonMaxUsize;

use crate::cost::Minutes;
use crate::space::Line;
use crate::space::Station;
use crate::space::ZoneSet;

/// A reference to a `SearchNode` in a `SearchTree`.
///
/// Backed by a `NonMaxUsize` so `Option<NodeIndex>` is still a single word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(NonMaxUsize);

impl NodeIndex {
    #[inline(always)]
    fn new(index: usize) -> Option<Self> {
        NonMaxUsize::new(index).map(Self)
    }
    #[inline(always)]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// A node of the search tree.
///
/// Nodes are never changed after being pushed into the tree. Children point
/// to their parent, parents don't know about their children.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub(crate) station: Station,
    pub(crate) g: Minutes,
    pub(crate) line: Option<Line>,
    pub(crate) zones: ZoneSet,
    pub(crate) parent: Option<NodeIndex>,
}

impl SearchNode {
    pub fn new(
        station: Station,
        g: Minutes,
        line: Option<Line>,
        zones: ZoneSet,
        parent: Option<NodeIndex>,
    ) -> Self {
        Self {
            station,
            g,
            line,
            zones,
            parent,
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }
    /// Cost from the start to this node.
    pub fn g(&self) -> Minutes {
        self.g
    }
    /// The line used to get here. `None` for the root.
    pub fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A stop in a path, rendered as `station (line)`.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{station} ({})", line.as_ref().map_or("None", |l| l.as_str()))]
pub struct Stop {
    pub station: Station,
    pub line: Option<Line>,
}

/// Append-only arena holding every node created by a search.
#[derive(Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchNode) -> NodeIndex {
        debug_assert!(node.parent.is_none_or(|p| p.get() < self.nodes.len()));
        let index = NodeIndex::new(self.nodes.len())
            .unwrap_or_else(|| unreachable!("SearchTree can't hold usize::MAX nodes"));
        self.nodes.push(node);
        index
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The stops from the root to `node_index`.
    #[must_use]
    pub fn to_path(&self, mut node_index: NodeIndex) -> Vec<Stop> {
        let mut path = Vec::new();
        loop {
            let node = &self[node_index];
            path.push(Stop {
                station: node.station.clone(),
                line: node.line.clone(),
            });
            match node.parent {
                Some(parent_index) => {
                    debug_assert!(parent_index < node_index);
                    node_index = parent_index;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl std::ops::Index<NodeIndex> for SearchTree {
    type Output = SearchNode;

    #[inline(always)]
    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl std::fmt::Debug for SearchTree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(tree: &mut SearchTree, station: &str, line: Option<&str>, parent: Option<NodeIndex>) -> NodeIndex {
        let g = parent.map_or(0, |p| tree[p].g + 1);
        tree.push(SearchNode::new(
            Station::new(station),
            g,
            line.map(Line::new),
            ZoneSet::new(),
            parent,
        ))
    }

    #[test]
    fn root_path() {
        let mut tree = SearchTree::new();
        let root = node(&mut tree, "Bank", None, None);

        let path = tree.to_path(root);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].to_string(), "Bank (None)");
        assert!(tree[root].is_root());
    }

    #[test]
    fn deep_path() {
        let mut tree = SearchTree::new();
        let a = node(&mut tree, "A", None, None);
        let b = node(&mut tree, "B", Some("X"), Some(a));
        // A sibling that's not in the path
        let _d = node(&mut tree, "D", Some("Y"), Some(a));
        let c = node(&mut tree, "C", Some("X"), Some(b));

        let labels: Vec<String> = tree.to_path(c).iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["A (None)", "B (X)", "C (X)"]);
        assert_eq!(tree[c].g(), 2);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn option_index_is_small() {
        assert_eq!(
            std::mem::size_of::<Option<NodeIndex>>(),
            std::mem::size_of::<usize>()
        );
    }
}
