//! Directed graph over generic vertex labels.
//!
//! Vertices are interned to dense indices in insertion order; adjacency and
//! both degree tables are indexed the same way and only change inside
//! [`DirectedGraph::add_vertex`] and [`DirectedGraph::add_edge`].

use crate::domain::error::{GraphError, GraphResult};
use crate::domain::tarjan::{is_cyclic_component, tarjan_scc};
use crate::domain::traits::Vertex;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    labels: Vec<T>,
    index_of: HashMap<T, usize>,
    edges: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
}

/// SCC decomposition with per-component cyclic flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccReport<T> {
    pub components: Vec<Vec<T>>,
    pub cyclic_component: Vec<bool>,
}

impl<T> SccReport<T> {
    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&c| c).count()
    }
}

impl<T: Vertex> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex> DirectedGraph<T> {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index_of: HashMap::new(),
            edges: Vec::new(),
            in_degree: Vec::new(),
            out_degree: Vec::new(),
        }
    }

    /// Builds a graph by adding each `(from, to)` pair in order.
    pub fn from_edges<I>(pairs: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        graph.extend_edges(pairs)?;
        Ok(graph)
    }

    /// Adds each pair in order, stopping at the first invalid one.
    ///
    /// Pairs added before the failure stay in the graph.
    pub fn extend_edges<I>(&mut self, pairs: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        for (from, to) in pairs {
            self.add_edge(from, to)?;
        }
        Ok(())
    }

    pub fn add_vertex(&mut self, vertex: T) -> GraphResult<()> {
        if vertex.is_absent() {
            return Err(GraphError::absent_vertex());
        }
        self.intern(vertex);
        Ok(())
    }

    pub fn add_edge(&mut self, from: T, to: T) -> GraphResult<()> {
        if from.is_absent() || to.is_absent() {
            return Err(GraphError::absent_endpoint());
        }
        let u = self.intern(from);
        let v = self.intern(to);
        self.edges[u].push(v);
        self.out_degree[u] += 1;
        self.in_degree[v] += 1;
        Ok(())
    }

    fn intern(&mut self, vertex: T) -> usize {
        if let Some(&idx) = self.index_of.get(&vertex) {
            return idx;
        }
        let idx = self.labels.len();
        self.index_of.insert(vertex.clone(), idx);
        self.labels.push(vertex);
        self.edges.push(Vec::new());
        self.in_degree.push(0);
        self.out_degree.push(0);
        idx
    }

    fn index(&self, vertex: &T) -> Option<usize> {
        self.index_of.get(vertex).copied()
    }

    /// Neighbors of `vertex` in insertion order.
    ///
    /// `Ok(None)` means the vertex was never added; a known vertex without
    /// outgoing edges yields `Ok(Some(vec![]))`.
    pub fn get_neighbors(&self, vertex: &T) -> GraphResult<Option<Vec<&T>>> {
        if vertex.is_absent() {
            return Err(GraphError::absent_vertex());
        }
        Ok(self
            .index(vertex)
            .map(|u| self.edges[u].iter().map(|&v| &self.labels[v]).collect()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.labels.iter()
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.index_of.contains_key(vertex)
    }

    pub fn in_degree(&self, vertex: &T) -> Option<usize> {
        self.index(vertex).map(|u| self.in_degree[u])
    }

    pub fn out_degree(&self, vertex: &T) -> Option<usize> {
        self.index(vertex).map(|u| self.out_degree[u])
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_reachable(&self, source: &T, target: &T) -> bool {
        match (self.index(source), self.index(target)) {
            (Some(s), Some(t)) => self.search(s, Some(t)).0,
            _ => false,
        }
    }

    /// Iterative DFS from `start`. Stops as soon as `target` is popped.
    /// Returns whether the target was hit and the visited set.
    fn search(&self, start: usize, target: Option<usize>) -> (bool, Vec<bool>) {
        let mut visited = vec![false; self.labels.len()];
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if Some(v) == target {
                return (true, visited);
            }
            if visited[v] {
                continue;
            }
            visited[v] = true;
            for &w in self.edges[v].iter() {
                if !visited[w] {
                    stack.push(w);
                }
            }
        }

        (false, visited)
    }

    pub fn find_sccs(&self) -> Vec<Vec<T>> {
        tarjan_scc(&self.edges)
            .into_iter()
            .map(|comp| self.labels_of(&comp))
            .collect()
    }

    pub fn scc_report(&self) -> SccReport<T> {
        let raw = tarjan_scc(&self.edges);
        let cyclic_component = raw
            .iter()
            .map(|comp| is_cyclic_component(&self.edges, comp))
            .collect();
        SccReport {
            components: raw.iter().map(|comp| self.labels_of(comp)).collect(),
            cyclic_component,
        }
    }

    fn labels_of(&self, indices: &[usize]) -> Vec<T> {
        indices.iter().map(|&i| self.labels[i].clone()).collect()
    }

    /// Whole-graph strong connectivity via forward and transpose reachability
    /// from the first vertex. The empty graph counts as strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let (_, forward) = self.search(0, None);
        if forward.iter().any(|&seen| !seen) {
            return false;
        }
        let (_, backward) = self.transpose().search(0, None);
        backward.iter().all(|&seen| seen)
    }

    /// Same vertices in the same order, every edge reversed.
    pub(crate) fn transpose(&self) -> Self {
        let n = self.labels.len();
        let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (u, outs) in self.edges.iter().enumerate() {
            for &v in outs {
                edges[v].push(u);
            }
        }
        Self {
            labels: self.labels.clone(),
            index_of: self.index_of.clone(),
            edges,
            in_degree: self.out_degree.clone(),
            out_degree: self.in_degree.clone(),
        }
    }

    /// Vertices without incoming edges, in insertion order.
    ///
    /// When every vertex has an incoming edge the graph is cyclic everywhere.
    /// In that case only a decomposition into exactly three components is
    /// accepted (lead-in, cycle, lead-out) and the second component is
    /// returned; any other shape yields no heads.
    pub fn find_heads(&self) -> Vec<T> {
        let sources = self.head_indices();
        if !sources.is_empty() {
            return self.labels_of(&sources);
        }

        let mut comps = tarjan_scc(&self.edges);
        if comps.len() == 3 {
            let second = comps.swap_remove(1);
            return self.labels_of(&second);
        }
        Vec::new()
    }

    fn head_indices(&self) -> Vec<usize> {
        (0..self.labels.len())
            .filter(|&v| self.in_degree[v] == 0)
            .collect()
    }

    /// Vertices without outgoing edges that lie on a path from some head.
    ///
    /// Grouped by head in [`find_heads`](Self::find_heads) order, then by
    /// insertion order. No heads means no tails.
    pub fn find_tails(&self) -> Vec<T> {
        let heads: Vec<usize> = self
            .find_heads()
            .iter()
            .filter_map(|h| self.index(h))
            .collect();
        let sinks: Vec<usize> = (0..self.labels.len())
            .filter(|&v| self.out_degree[v] == 0)
            .collect();

        let mut picked = vec![false; self.labels.len()];
        let mut tails = Vec::new();
        for head in heads {
            let (_, reached) = self.search(head, None);
            for &sink in sinks.iter() {
                if reached[sink] && !picked[sink] {
                    picked[sink] = true;
                    tails.push(sink);
                }
            }
        }
        self.labels_of(&tails)
    }
}

impl<T: Vertex + fmt::Display> DirectedGraph<T> {
    pub fn print_graph(&self) {
        print!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, label) in self.labels.iter().enumerate() {
            write!(f, "{label} -> ")?;
            for (i, &v) in self.edges[u].iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.labels[v])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(pairs: &[(&'static str, &'static str)]) -> DirectedGraph<&'static str> {
        DirectedGraph::from_edges(pairs.iter().copied()).expect("valid edges")
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = DirectedGraph::new();
        g.add_vertex("A").expect("add");
        g.add_vertex("A").expect("add again");
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.get_neighbors(&"A"), Ok(Some(vec![])));
    }

    #[test]
    fn add_edge_creates_endpoints_and_counts_degrees() {
        let mut g = DirectedGraph::new();
        g.add_edge("A", "B").expect("edge");
        assert_eq!(g.get_neighbors(&"A"), Ok(Some(vec![&"B"])));
        assert_eq!(g.get_neighbors(&"B"), Ok(Some(vec![])));
        assert_eq!(g.out_degree(&"A"), Some(1));
        assert_eq!(g.in_degree(&"A"), Some(0));
        assert_eq!(g.in_degree(&"B"), Some(1));
        assert_eq!(g.out_degree(&"B"), Some(0));
    }

    #[test]
    fn absent_vertex_is_rejected_without_mutation() {
        let mut g: DirectedGraph<&str> = DirectedGraph::new();
        let err = g.add_vertex("").unwrap_err();
        assert_eq!(err.to_string(), "Vertex cannot be null or undefined");

        let err = g.add_edge("A", "").unwrap_err();
        assert_eq!(err.to_string(), "Vertices cannot be null or undefined");
        assert!(g.is_empty());

        assert!(g.get_neighbors(&"").is_err());
    }

    #[test]
    fn unknown_vertex_neighbors_are_not_found() {
        let g = graph(&[("A", "B")]);
        assert_eq!(g.get_neighbors(&"Z"), Ok(None));
    }

    #[test]
    fn extend_edges_keeps_prefix_on_failure() {
        let mut g = DirectedGraph::new();
        let res = g.extend_edges(vec![("A", "B"), ("B", ""), ("C", "D")]);
        assert!(res.is_err());
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn display_renders_one_line_per_vertex() {
        let g = graph(&[("A", "B"), ("A", "C"), ("C", "A")]);
        assert_eq!(g.to_string(), "A -> B, C\nB -> \nC -> A\n");
    }

    #[test]
    fn transpose_reverses_edges_and_swaps_degrees() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        let t = g.transpose();
        assert_eq!(t.get_neighbors(&"C"), Ok(Some(vec![&"B"])));
        assert_eq!(t.get_neighbors(&"A"), Ok(Some(vec![])));
        assert_eq!(t.in_degree(&"A"), Some(1));
        assert_eq!(t.out_degree(&"C"), Some(1));
    }

    #[test]
    fn reachability_respects_direction() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        assert!(g.is_reachable(&"A", &"C"));
        assert!(!g.is_reachable(&"C", &"A"));
        assert!(g.is_reachable(&"B", &"B"));
        assert!(!g.is_reachable(&"A", &"Z"));
        assert!(!g.is_reachable(&"Z", &"A"));
    }

    #[test]
    fn scc_report_flags_cycles_and_self_loops() {
        let g = graph(&[("A", "A"), ("B", "C"), ("C", "B"), ("C", "D")]);
        let report = g.scc_report();
        assert_eq!(report.components.len(), 3);
        assert_eq!(report.cyclic_count(), 2);
        let d = report
            .components
            .iter()
            .position(|c| c == &vec!["D"])
            .expect("D component");
        assert!(!report.cyclic_component[d]);
    }
}
