use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculateStats {
    pub edges_seen: usize,
    pub vertices: usize,
    pub edges: usize,
    pub heads: usize,
    pub tails: usize,
}
