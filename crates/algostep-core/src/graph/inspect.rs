//! Point lookups over a traversal run: position, parent, children, visit time.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use super::traversal::TraversalResult;

/// Wall-clock time at which each vertex's step was rendered.
pub type VisitTimestamps = IndexMap<String, DateTime<Utc>>;

/// Parent of a vertex as seen by an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "vertex", rename_all = "snake_case")]
pub enum ParentLink {
    /// The vertex has not been visited (yet).
    NotVisited,
    /// The vertex is the traversal root.
    Root,
    /// The vertex was discovered from this vertex.
    Vertex(String),
}

/// Everything known about one vertex at the time of the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexReport {
    /// The inspected vertex.
    pub vertex: String,
    /// One-based visit position, if visited.
    pub position: Option<usize>,
    /// Parent link.
    pub parent: ParentLink,
    /// Vertices discovered from this vertex, in visit order.
    pub children: Vec<String>,
    /// When the vertex's step was rendered, if it has been.
    pub visited_at: Option<DateTime<Utc>>,
}

/// Read-only view over a (possibly partial) traversal and its timestamps.
///
/// The index borrows the run's data, so it always reflects exactly the
/// steps performed so far: vertices not yet visited report nothing.
#[derive(Debug, Clone, Copy)]
pub struct InspectionIndex<'a> {
    result: &'a TraversalResult,
    timestamps: &'a VisitTimestamps,
}

impl<'a> InspectionIndex<'a> {
    /// Creates a view over `result` and `timestamps`.
    #[must_use]
    pub fn new(result: &'a TraversalResult, timestamps: &'a VisitTimestamps) -> Self {
        Self { result, timestamps }
    }

    /// One-based visit position.
    #[must_use]
    pub fn position(&self, vertex: &str) -> Option<usize> {
        self.result.position(vertex).map(|index| index + 1)
    }

    /// Parent link of `vertex`.
    #[must_use]
    pub fn parent(&self, vertex: &str) -> ParentLink {
        match self.result.parent(vertex) {
            None => ParentLink::NotVisited,
            Some(None) => ParentLink::Root,
            Some(Some(parent)) => ParentLink::Vertex(parent.to_string()),
        }
    }

    /// Vertices whose parent is `vertex` (full scan of the parent map).
    #[must_use]
    pub fn children(&self, vertex: &str) -> Vec<&'a str> {
        self.result.children(vertex)
    }

    /// When `vertex`'s step was rendered.
    #[must_use]
    pub fn visited_at(&self, vertex: &str) -> Option<DateTime<Utc>> {
        self.timestamps.get(vertex).copied()
    }

    /// Collects every field for `vertex` into one report.
    #[must_use]
    pub fn lookup(&self, vertex: &str) -> VertexReport {
        VertexReport {
            vertex: vertex.to_string(),
            position: self.position(vertex),
            parent: self.parent(vertex),
            children: self
                .children(vertex)
                .into_iter()
                .map(str::to_string)
                .collect(),
            visited_at: self.visited_at(vertex),
        }
    }
}
