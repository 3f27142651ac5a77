use crate::domain::graph::DirectedGraph;
use crate::usecase::calculate::parse_request;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Everything the graph can say about a payload, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub rendering: String,
    pub vertices: usize,
    pub edges: usize,
    pub heads: Vec<String>,
    pub tails: Vec<String>,
    pub components: Vec<Vec<String>>,
    pub cyclic_components: Vec<bool>,
    pub strongly_connected: bool,
}

pub fn inspect_graph(payload: &Value) -> Result<(DirectedGraph<String>, InspectReport)> {
    let request = parse_request(payload)?;
    let graph = DirectedGraph::from_edges(request.label_pairs()).context("building graph")?;

    let scc = graph.scc_report();
    let report = InspectReport {
        rendering: graph.to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        heads: graph.find_heads(),
        tails: graph.find_tails(),
        components: scc.components,
        cyclic_components: scc.cyclic_component,
        strongly_connected: graph.is_strongly_connected(),
    };

    Ok((graph, report))
}
