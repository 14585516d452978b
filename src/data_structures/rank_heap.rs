use std::cmp::min;
use std::fmt::Debug;

type HeapIndex = usize;

const HEAP_ARITY: usize = 4usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// A min-heap of ranked elements.
///
/// Elements are popped best (smallest) first. Elements that compare equal
/// come out in an unspecified order, so callers that need stable ordering
/// must put a tie-breaker into the rank.
#[derive(Debug, Clone)]
pub struct RankHeap<N>
where
    N: Debug + Ord,
{
    heap: Vec<N>,
}

impl<N> RankHeap<N>
where
    N: Debug + Ord,
{
    pub fn new() -> Self {
        Self { heap: vec![] }
    }
    pub fn with_capacity(s: HeapIndex) -> Self {
        Self {
            heap: Vec::with_capacity(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn peek(&self) -> Option<&N> {
        self.heap.first()
    }

    pub fn push(&mut self, n: N) -> HeapIndex {
        self.verify_heap();
        let heap_index = self.heap.len(); // Future heap_index

        self.heap.push(n);
        let heap_index = self.sift_up(heap_index);

        self.verify_heap();
        heap_index
    }

    pub fn pop(&mut self) -> Option<N> {
        self.verify_heap();

        if self.heap.len() <= 1 {
            return self.heap.pop();
        }

        // Move the last element to the top and let it fall into place.
        let top = self.heap.swap_remove(0);
        self.sift_down(0);

        self.verify_heap();
        Some(top)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                self.heap[p] <= self.heap[i],
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    // Implementation details

    /// Raises a node
    /// Returns its new index
    #[inline(always)]
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.heap.len(), "Index out of bounds...");

        let mut pos = index;
        while pos > 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Lowers a node
    /// Returns its new index
    #[inline(always)]
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.heap.len();
        debug_assert!(index < len, "Index out of bounds...");

        loop {
            let first = down_left(index);
            if first >= len {
                break;
            }
            debug_assert_eq!(first + HEAP_ARITY, down_right(index) + 1);

            // Find the best child
            let last = min(down_right(index), len - 1);
            let mut child = first;
            for c in (first + 1)..=last {
                if self.heap[c] < self.heap[child] {
                    child = c;
                }
            }

            if self.heap[index] <= self.heap[child] {
                break;
            }

            self.heap.swap(index, child);
            index = child;
        }
        index
    }
}

impl<N> Default for RankHeap<N>
where
    N: Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_works() {
        let mut heap = RankHeap::<(u32, &str)>::new();

        heap.push((1, "aoeu"));
        assert_eq!(heap.peek(), Some(&(1, "aoeu")));
        assert_eq!(heap.pop(), Some((1, "aoeu")));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_sorts() {
        let mut heap = RankHeap::<String>::with_capacity(8);

        assert_eq!(heap.push("c".to_string()), 0usize);
        assert_eq!(heap.push("e".to_string()), 1usize);
        assert_eq!(heap.push("f".to_string()), 2usize);
        assert_eq!(heap.push("a".to_string()), 0usize);
        assert_eq!(heap.push("d".to_string()), 4usize);
        assert_eq!(heap.push("b".to_string()), 1usize);
        assert_eq!(heap.len(), 6);

        for expected in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(heap.pop().unwrap(), expected);
        }
        assert!(heap.pop().is_none());
    }

    #[test]
    fn heap_sorts_many() {
        let mut heap = RankHeap::<u32>::new();
        // A fixed permutation of 0..100
        for i in 0..100u32 {
            heap.push((i * 37) % 100);
        }
        for expected in 0..100u32 {
            assert_eq!(heap.pop(), Some(expected));
        }
    }
}
