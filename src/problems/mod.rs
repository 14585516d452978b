//! Concrete transit networks.
//!
//! Searches only see the [`crate::space::Network`] trait. These load or
//! generate networks that implement it.

pub mod transit;
