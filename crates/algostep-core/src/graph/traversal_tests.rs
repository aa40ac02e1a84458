//! Tests for stepwise DFS and BFS.

use std::sync::Arc;

use super::model::Graph;
use super::traversal::{bfs, dfs, BfsWalk, DfsWalk, TraversalKind, TraversalResult, Walk};
use crate::error::Error;

/// Reference graph: two components, `A..G` reachable from `A`, `H-I-J` apart.
fn build_reference_graph() -> Graph {
    Graph::from_text("A,B,C,D,E,F,G,H,I,J", "A B,B C,A D,D E,E F,F G,H I,I J")
}

/// Diamond with a tail: A-B, A-C, B-D, C-D, D-E.
fn build_diamond_graph() -> Graph {
    Graph::build(
        ["A", "B", "C", "D", "E"],
        [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")],
    )
}

/// Recursive pre-order DFS used as an oracle for the explicit-stack walker.
fn recursive_dfs_order(graph: &Graph, start: &str) -> Vec<String> {
    fn visit(graph: &Graph, u: &str, seen: &mut Vec<String>) {
        seen.push(u.to_string());
        let neighbors: Vec<String> = graph.neighbors(u).unwrap().map(str::to_string).collect();
        for w in neighbors {
            if !seen.contains(&w) {
                visit(graph, &w, seen);
            }
        }
    }
    let mut seen = Vec::new();
    visit(graph, start, &mut seen);
    seen
}

fn parent(result: &TraversalResult, vertex: &str) -> Option<String> {
    result.parent(vertex).flatten().map(str::to_string)
}

// ── DFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_dfs_reference_order() {
    let graph = build_reference_graph();
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.order(), ["A", "B", "C", "D", "E", "F", "G"]);
}

#[test]
fn test_dfs_reference_parents() {
    let graph = build_reference_graph();
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.parent("A"), Some(None));
    assert_eq!(parent(&result, "B").as_deref(), Some("A"));
    assert_eq!(parent(&result, "C").as_deref(), Some("B"));
    assert_eq!(parent(&result, "D").as_deref(), Some("A"));
    assert_eq!(parent(&result, "E").as_deref(), Some("D"));
    assert_eq!(parent(&result, "F").as_deref(), Some("E"));
    assert_eq!(parent(&result, "G").as_deref(), Some("F"));
}

#[test]
fn test_dfs_unreachable_vertices_absent() {
    let graph = build_reference_graph();
    let result = dfs(&graph, "A").unwrap();

    for v in ["H", "I", "J"] {
        assert!(!result.is_visited(v));
        assert!(result.parent(v).is_none());
        assert!(result.position(v).is_none());
    }
    assert_eq!(result.edges_order().len(), result.len() - 1);
}

#[test]
fn test_dfs_edges_in_discovery_order() {
    let graph = build_reference_graph();
    let result = dfs(&graph, "A").unwrap();

    let edges: Vec<(&str, &str)> = result
        .edges_order()
        .iter()
        .map(|(u, v)| (u.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        edges,
        vec![("A", "B"), ("B", "C"), ("A", "D"), ("D", "E"), ("E", "F"), ("F", "G")]
    );
}

#[test]
fn test_dfs_matches_recursive_preorder() {
    let graph = build_diamond_graph();
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.order(), recursive_dfs_order(&graph, "A").as_slice());
    assert_eq!(result.order(), ["A", "B", "D", "C", "E"]);
}

#[test]
fn test_dfs_invalid_start() {
    let graph = build_reference_graph();
    let err = dfs(&graph, "Z").unwrap_err();
    assert_eq!(err, Error::InvalidStart("Z".to_string()));
}

#[test]
fn test_dfs_isolated_start() {
    let graph = Graph::build(["A", "B"], []);
    let result = dfs(&graph, "B").unwrap();

    assert_eq!(result.order(), ["B"]);
    assert!(result.edges_order().is_empty());
}

#[test]
fn test_dfs_tolerates_self_loops_and_duplicates() {
    let graph = Graph::build(["A", "B"], [("A", "A"), ("A", "B"), ("A", "B")]);
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.order(), ["A", "B"]);
    assert_eq!(result.edges_order().len(), 1);
}

// ── BFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_bfs_reference_order() {
    let graph = build_reference_graph();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.order(), ["A", "B", "D", "C", "E", "F", "G"]);
}

#[test]
fn test_bfs_diamond_discovers_once() {
    let graph = build_diamond_graph();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.order(), ["A", "B", "C", "D", "E"]);
    assert_eq!(parent(&result, "D").as_deref(), Some("B"));
    assert_eq!(result.children("A"), vec!["B", "C"]);
}

#[test]
fn test_bfs_invalid_start() {
    let graph = Graph::new();
    assert!(matches!(bfs(&graph, "A"), Err(Error::InvalidStart(_))));
}

#[test]
fn test_bfs_order_index_matches_order() {
    let graph = build_reference_graph();
    let result = bfs(&graph, "A").unwrap();

    for (index, vertex) in result.order().iter().enumerate() {
        assert_eq!(result.position(vertex), Some(index));
    }
}

// ── Incremental walkers ────────────────────────────────────────────

#[test]
fn test_walk_yields_one_visit_per_step() {
    let graph = build_reference_graph();
    let mut walk = DfsWalk::new(&graph, "A").unwrap();

    let first = walk.next().unwrap();
    assert_eq!(first.vertex, "A");
    assert_eq!(first.edge(), None);
    assert_eq!(walk.progress().order(), ["A"]);

    let second = walk.next().unwrap();
    assert_eq!(second.edge(), Some(("A", "B")));
    assert_eq!(walk.progress().len(), 2);
    assert!(!walk.progress().is_visited("C"));
}

#[test]
fn test_walk_exhausts_and_stays_exhausted() {
    let graph = build_reference_graph();
    let mut walk = BfsWalk::new(&graph, "A").unwrap();

    assert_eq!(walk.by_ref().count(), 7);
    assert!(walk.is_finished());
    assert!(walk.next().is_none());
    assert_eq!(walk.progress().len(), 7);
}

#[test]
fn test_incremental_matches_eager() {
    let graph = Arc::new(build_diamond_graph());
    for kind in [TraversalKind::Dfs, TraversalKind::Bfs] {
        let mut walk = kind.walk(Arc::clone(&graph), "C").unwrap();
        let events: Vec<_> = walk.by_ref().collect();
        let eager = kind.run(&graph, "C").unwrap();

        assert_eq!(walk.progress(), &eager);
        assert_eq!(events.len(), eager.len());
        for (event, vertex) in events.iter().zip(eager.order()) {
            assert_eq!(&event.vertex, vertex);
        }
    }
}

#[test]
fn test_reruns_are_identical() {
    let graph = build_reference_graph();
    assert_eq!(dfs(&graph, "E").unwrap(), dfs(&graph, "E").unwrap());
    assert_eq!(bfs(&graph, "E").unwrap(), bfs(&graph, "E").unwrap());
}

#[test]
fn test_traversal_kind_parse() {
    assert_eq!(" DFS ".parse::<TraversalKind>().unwrap(), TraversalKind::Dfs);
    assert_eq!("bfs".parse::<TraversalKind>().unwrap(), TraversalKind::Bfs);
    assert!(matches!(
        "dijkstra".parse::<TraversalKind>(),
        Err(Error::UnknownAlgorithm(_))
    ));
}

#[test]
fn test_traversal_result_serializes() {
    let graph = build_reference_graph();
    let result = dfs(&graph, "A").unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["order"][0], "A");
    assert_eq!(json["parents"]["A"], serde_json::Value::Null);
    assert_eq!(json["parents"]["B"], "A");
}
