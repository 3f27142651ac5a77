//! Domain layer: the directed graph and everything derived from it.

pub mod error;
pub mod graph;
pub mod tarjan;
pub mod traits;
