//! Containers backing the search frontiers.

pub mod rank_heap;
