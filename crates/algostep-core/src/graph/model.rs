//! Undirected adjacency model built from vertex labels and edge pairs.
//!
//! Vertices keep their declaration order and adjacency lists keep edge
//! declaration order, so every traversal over a [`Graph`] is deterministic.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Dense vertex index, assigned in declaration order.
pub type VertexId = usize;

/// Undirected graph over string-labelled vertices.
///
/// Adjacency is symmetric: declaring `(u, v)` appends `v` to `u`'s list and
/// `u` to `v`'s list. Self-loops and repeated edges are kept as declared.
///
/// # Example
///
/// ```rust
/// use algostep_core::graph::Graph;
///
/// let graph = Graph::build(["A", "B", "C"], [("A", "B"), ("B", "C"), ("A", "Z")]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.neighbors("B").unwrap().collect::<Vec<_>>(), vec!["A", "C"]);
/// // Edges naming unknown vertices are dropped.
/// assert_eq!(graph.neighbors("A").unwrap().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    labels: Vec<String>,
    ids: FxHashMap<String, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from vertex labels and label pairs.
    ///
    /// Labels are trimmed; empty labels are skipped and a repeated label keeps
    /// its first position. Edges referencing unknown vertices are skipped.
    #[must_use]
    pub fn build<'a, V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Self::new();
        for label in vertices {
            graph.add_vertex(label);
        }
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Builds a graph from the comma-separated text a front-end collects.
    ///
    /// `vertices` is `"A,B,C"`; `edges` is `"A B,B C"`. Edge tokens that do not
    /// split into exactly two whitespace-separated labels are dropped.
    #[must_use]
    pub fn from_text(vertices: &str, edges: &str) -> Self {
        let mut graph = Self::build(vertices.split(','), std::iter::empty::<(&str, &str)>());
        for token in edges.split(',') {
            let parts: Vec<&str> = token.split_whitespace().collect();
            match parts.as_slice() {
                [u, v] => graph.add_edge(u, v),
                [] => {}
                _ => debug!(token = token.trim(), "skipping malformed edge token"),
            }
        }
        graph
    }

    fn add_vertex(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() || self.ids.contains_key(label) {
            return;
        }
        self.ids.insert(label.to_string(), self.labels.len());
        self.labels.push(label.to_string());
        self.adjacency.push(Vec::new());
    }

    fn add_edge(&mut self, u: &str, v: &str) {
        let (Some(a), Some(b)) = (self.id_of(u.trim()), self.id_of(v.trim())) else {
            debug!(u, v, "skipping edge with unknown endpoint");
            return;
        };
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if `label` names a vertex.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Looks up the dense index of a vertex.
    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    /// Returns the label of a vertex index.
    ///
    /// Indices come from this graph; an index from another graph may panic.
    #[must_use]
    pub fn label(&self, id: VertexId) -> &str {
        &self.labels[id]
    }

    /// Vertex labels in declaration order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Adjacent vertex indices in edge declaration order.
    #[must_use]
    pub fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        &self.adjacency[id]
    }

    /// Adjacent labels of `label`, or `None` for an unknown vertex.
    pub fn neighbors(&self, label: &str) -> Option<impl Iterator<Item = &str>> {
        let id = self.id_of(label)?;
        Some(self.adjacency[id].iter().map(|&n| self.label(n)))
    }

    /// Returns true if `u` and `v` share at least one edge.
    #[must_use]
    pub fn are_adjacent(&self, u: &str, v: &str) -> bool {
        match (self.id_of(u), self.id_of(v)) {
            (Some(a), Some(b)) => self.adjacency[a].contains(&b),
            _ => false,
        }
    }

    /// Distinct edges keyed `(u, v)` with `u < v`, in first-occurrence order.
    ///
    /// Self-loops never satisfy `u < v` and are omitted.
    #[must_use]
    pub fn canonical_edges(&self) -> Vec<(&str, &str)> {
        let mut seen = FxHashSet::default();
        let mut edges = Vec::new();
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                let (a, b) = (self.label(u), self.label(v));
                if a < b && seen.insert((u, v)) {
                    edges.push((a, b));
                }
            }
        }
        edges
    }
}
