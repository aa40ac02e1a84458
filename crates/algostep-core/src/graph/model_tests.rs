//! Tests for the graph model.

use super::model::Graph;

fn neighbors(graph: &Graph, label: &str) -> Vec<String> {
    graph
        .neighbors(label)
        .unwrap()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_build_symmetric_adjacency() {
    let graph = Graph::build(["A", "B", "C"], [("A", "B"), ("B", "C")]);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(neighbors(&graph, "A"), vec!["B"]);
    assert_eq!(neighbors(&graph, "B"), vec!["A", "C"]);
    assert_eq!(neighbors(&graph, "C"), vec!["B"]);
    assert!(graph.are_adjacent("C", "B"));
    assert!(!graph.are_adjacent("A", "C"));
}

#[test]
fn test_build_keeps_declaration_order() {
    let graph = Graph::build(["D", "A", "C"], [("A", "D"), ("A", "C")]);

    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["D", "A", "C"]);
    assert_eq!(neighbors(&graph, "A"), vec!["D", "C"]);
}

#[test]
fn test_build_trims_and_skips_empty_and_duplicate_vertices() {
    let graph = Graph::build([" A ", "", "B", "A", "  "], []);

    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn test_unknown_endpoints_are_skipped() {
    let graph = Graph::build(["A", "B"], [("A", "Z"), ("Y", "B"), ("A", "B")]);

    assert_eq!(neighbors(&graph, "A"), vec!["B"]);
    assert_eq!(neighbors(&graph, "B"), vec!["A"]);
}

#[test]
fn test_duplicate_edges_and_self_loops_are_kept() {
    let graph = Graph::build(["A", "B"], [("A", "B"), ("A", "B"), ("A", "A")]);

    assert_eq!(neighbors(&graph, "A"), vec!["B", "B", "A", "A"]);
    assert_eq!(neighbors(&graph, "B"), vec!["A", "A"]);
}

#[test]
fn test_canonical_edges_deduplicate_and_drop_self_loops() {
    let graph = Graph::build(
        ["B", "A", "C"],
        [("B", "A"), ("A", "B"), ("C", "C"), ("C", "A")],
    );

    assert_eq!(graph.canonical_edges(), vec![("A", "B"), ("A", "C")]);
}

#[test]
fn test_empty_graph() {
    let graph = Graph::build(std::iter::empty(), std::iter::empty());

    assert!(graph.is_empty());
    assert!(!graph.contains("A"));
    assert!(graph.neighbors("A").is_none());
    assert!(graph.canonical_edges().is_empty());
}

#[test]
fn test_from_text_parses_reference_input() {
    let graph = Graph::from_text("A,B,C,D,E,F,G,H,I,J", "A B,B C,A D,D E,E F,F G,H I,I J");

    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(neighbors(&graph, "A"), vec!["B", "D"]);
    assert_eq!(neighbors(&graph, "I"), vec!["H", "J"]);
}

#[test]
fn test_from_text_drops_malformed_tokens() {
    let graph = Graph::from_text("A, B ,C,", "A B, B, A B C,,C  A ,A-B");

    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(neighbors(&graph, "A"), vec!["B", "C"]);
    assert_eq!(neighbors(&graph, "C"), vec!["A"]);
}
