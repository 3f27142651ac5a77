use crate::usecase::stats::CalculateStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        vertices: usize,
        edges: usize,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    EndpointsResolved {
        heads: Vec<String>,
        tails: Vec<String>,
    },

    Finished {
        operation: String,
        stats: CalculateStats,
    },
}
