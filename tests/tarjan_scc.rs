use flight_sorter::domain::graph::DirectedGraph;
use flight_sorter::domain::tarjan::tarjan_scc;

#[test]
fn tarjan_detects_self_loop_as_cyclic() {
    let g = DirectedGraph::from_edges(vec![("A", "A")]).expect("edges");
    let report = g.scc_report();

    assert_eq!(report.components, vec![vec!["A"]]);
    assert_eq!(report.cyclic_component, vec![true]);
}

#[test]
fn tarjan_detects_two_node_cycle() {
    let g = DirectedGraph::from_edges(vec![("A", "B"), ("B", "A")]).expect("edges");
    let report = g.scc_report();

    assert_eq!(report.components, vec![vec!["B", "A"]]);
    assert_eq!(report.cyclic_component, vec![true]);
}

#[test]
fn tarjan_emits_chain_in_reverse_topological_order() {
    let g = DirectedGraph::from_edges(vec![("A", "B"), ("B", "C")]).expect("edges");
    let report = g.scc_report();

    assert_eq!(report.components, vec![vec!["C"], vec!["B"], vec!["A"]]);
    assert!(report.cyclic_component.iter().all(|&b| !b));
}

#[test]
fn tarjan_isolated_vertices_are_trivial_components() {
    let mut g = DirectedGraph::new();
    g.add_vertex(1u32).expect("add");
    g.add_vertex(2u32).expect("add");
    assert_eq!(g.find_sccs(), vec![vec![1], vec![2]]);
}

#[test]
fn tarjan_later_roots_after_earlier_ones() {
    // C -> A is only discovered after A's tree closes.
    let g = DirectedGraph::from_edges(vec![("A", "B"), ("C", "A")]).expect("edges");
    assert_eq!(g.find_sccs(), vec![vec!["B"], vec!["A"], vec!["C"]]);
}

#[test]
fn tarjan_partitions_every_vertex_once() {
    let g = DirectedGraph::from_edges(vec![
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("C", "D"),
        ("D", "E"),
        ("E", "D"),
        ("F", "F"),
    ])
    .expect("edges");

    let mut seen: Vec<&str> = g.find_sccs().into_iter().flatten().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn tarjan_index_level_matches_graph_level() {
    let edges = vec![vec![1], vec![2], vec![0, 3], vec![]];
    let g = DirectedGraph::from_edges(vec![(0u32, 1u32), (1, 2), (2, 0), (2, 3)]).expect("edges");
    let by_index: Vec<Vec<u32>> = tarjan_scc(&edges)
        .into_iter()
        .map(|c| c.into_iter().map(|v| v as u32).collect())
        .collect();
    assert_eq!(g.find_sccs(), by_index);
}

#[test]
fn strongly_connected_edge_cases() {
    let empty: DirectedGraph<&str> = DirectedGraph::new();
    assert!(empty.is_strongly_connected());

    let mut single = DirectedGraph::new();
    single.add_vertex("A").expect("add");
    assert!(single.is_strongly_connected());

    let mut pair = DirectedGraph::new();
    pair.add_vertex("A").expect("add");
    pair.add_vertex("B").expect("add");
    assert!(!pair.is_strongly_connected());
}

#[test]
fn strongly_connected_needs_both_directions() {
    let chain = DirectedGraph::from_edges(vec![("A", "B"), ("B", "C")]).expect("edges");
    assert!(!chain.is_strongly_connected());

    // Everything reaches A, but A reaches nothing.
    let star = DirectedGraph::from_edges(vec![("A", "A"), ("B", "A"), ("C", "A")]).expect("edges");
    assert!(!star.is_strongly_connected());

    let ring = DirectedGraph::from_edges(vec![("A", "B"), ("B", "C"), ("C", "A")]).expect("edges");
    assert!(ring.is_strongly_connected());
}

#[test]
fn strongly_connected_agrees_with_single_component() {
    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![("A", "B"), ("B", "A")],
        vec![("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")],
        vec![("A", "B"), ("B", "C"), ("C", "A"), ("B", "D"), ("D", "E"), ("E", "B")],
        vec![("A", "A")],
    ];
    for pairs in cases {
        let g = DirectedGraph::from_edges(pairs.clone()).expect("edges");
        assert_eq!(
            g.is_strongly_connected(),
            g.find_sccs().len() == 1,
            "disagreement on {pairs:?}"
        );
    }
}
