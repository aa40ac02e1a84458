//! Stepwise graph traversal (DFS/BFS) over a [`Graph`].
//!
//! Both traversals are explicit-state walkers: every call to
//! [`Iterator::next`] performs exactly one visit and returns it as a
//! [`VisitEvent`], so a driver can pause between visits. The blocking
//! [`dfs`] and [`bfs`] functions simply drain a walker, which keeps the
//! eager and incremental forms identical by construction.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::model::{Graph, VertexId};
use crate::error::{Error, Result};

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Depth-first, pre-order.
    Dfs,
    /// Breadth-first, discovery order.
    Bfs,
}

impl TraversalKind {
    /// Lower-case algorithm name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }

    /// Creates a walker of this kind, boxed for dynamic dispatch.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStart` if `start` is not in `graph`.
    pub fn walk<'g, G>(self, graph: G, start: &str) -> Result<Box<dyn Walk + 'g>>
    where
        G: Borrow<Graph> + 'g,
    {
        Ok(match self {
            Self::Dfs => Box::new(DfsWalk::new(graph, start)?),
            Self::Bfs => Box::new(BfsWalk::new(graph, start)?),
        })
    }

    /// Runs this traversal to completion.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStart` if `start` is not in `graph`.
    pub fn run(self, graph: &Graph, start: &str) -> Result<TraversalResult> {
        match self {
            Self::Dfs => dfs(graph, start),
            Self::Bfs => bfs(graph, start),
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// One traversal step: `vertex` was visited, discovered from `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// The vertex visited at this step.
    pub vertex: String,
    /// The vertex it was discovered from (`None` for the start vertex).
    pub parent: Option<String>,
}

impl VisitEvent {
    /// The discovery edge `(parent, vertex)`, if any.
    #[must_use]
    pub fn edge(&self) -> Option<(&str, &str)> {
        self.parent
            .as_deref()
            .map(|parent| (parent, self.vertex.as_str()))
    }
}

/// Provenance of a traversal: visit order, parent tree and discovery edges.
///
/// Walkers fill this in as they go, so a partial result always describes
/// exactly the vertices visited so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    order: Vec<String>,
    parents: IndexMap<String, Option<String>>,
    edges_order: Vec<(String, String)>,
    order_index: IndexMap<String, usize>,
}

impl TraversalResult {
    fn record(&mut self, vertex: &str, parent: Option<&str>) -> VisitEvent {
        self.order_index.insert(vertex.to_string(), self.order.len());
        self.order.push(vertex.to_string());
        self.parents
            .insert(vertex.to_string(), parent.map(str::to_string));
        if let Some(parent) = parent {
            self.edges_order
                .push((parent.to_string(), vertex.to_string()));
        }
        VisitEvent {
            vertex: vertex.to_string(),
            parent: parent.map(str::to_string),
        }
    }

    /// Visited vertices in visit order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Parent of each visited vertex (`None` for the start), in visit order.
    #[must_use]
    pub fn parents(&self) -> &IndexMap<String, Option<String>> {
        &self.parents
    }

    /// Discovery edges `(parent, child)` in discovery order.
    #[must_use]
    pub fn edges_order(&self) -> &[(String, String)] {
        &self.edges_order
    }

    /// Zero-based position of each visited vertex in [`order`](Self::order).
    #[must_use]
    pub fn order_index(&self) -> &IndexMap<String, usize> {
        &self.order_index
    }

    /// Number of visited vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if `vertex` has been visited.
    #[must_use]
    pub fn is_visited(&self, vertex: &str) -> bool {
        self.order_index.contains_key(vertex)
    }

    /// Zero-based visit position of `vertex`.
    #[must_use]
    pub fn position(&self, vertex: &str) -> Option<usize> {
        self.order_index.get(vertex).copied()
    }

    /// Parent link of `vertex`: `None` if unvisited, `Some(None)` for the start.
    #[must_use]
    pub fn parent(&self, vertex: &str) -> Option<Option<&str>> {
        self.parents.get(vertex).map(Option::as_deref)
    }

    /// Vertices whose recorded parent is `vertex`, in visit order.
    ///
    /// Computed by scanning the parent map on every call.
    #[must_use]
    pub fn children(&self, vertex: &str) -> Vec<&str> {
        self.parents
            .iter()
            .filter(|(_, parent)| parent.as_deref() == Some(vertex))
            .map(|(child, _)| child.as_str())
            .collect()
    }

    /// Returns true if `(u, v)` was traversed as a discovery edge, either way round.
    #[must_use]
    pub fn is_discovery_edge(&self, u: &str, v: &str) -> bool {
        self.edges_order
            .iter()
            .any(|(a, b)| (a == u && b == v) || (a == v && b == u))
    }
}

/// An incremental traversal yielding one [`VisitEvent`] per step.
pub trait Walk: Iterator<Item = VisitEvent> {
    /// Strategy of this walker.
    fn kind(&self) -> TraversalKind;

    /// The result accumulated so far.
    fn progress(&self) -> &TraversalResult;

    /// Returns true once a step has found nothing left to visit.
    fn is_finished(&self) -> bool;

    /// Consumes the walker, returning the accumulated result.
    fn into_result(self) -> TraversalResult
    where
        Self: Sized;

    /// Performs every remaining step and returns the full result.
    fn run_to_end(mut self) -> TraversalResult
    where
        Self: Sized,
    {
        self.by_ref().for_each(drop);
        self.into_result()
    }
}

fn resolve_start(graph: &Graph, start: &str) -> Result<VertexId> {
    graph
        .id_of(start)
        .ok_or_else(|| Error::InvalidStart(start.to_string()))
}

/// A suspended vertex together with the next neighbour to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

impl Frame {
    fn new(vertex: VertexId) -> Self {
        Self { vertex, cursor: 0 }
    }
}

/// Depth-first walker backed by an explicit stack of frames.
///
/// Each step resumes the top frame's neighbour cursor; the first unvisited
/// neighbour is visited and pushed, and exhausted frames are popped. This is
/// the same pre-order as the recursive formulation.
#[derive(Debug)]
pub struct DfsWalk<G> {
    graph: G,
    pending_start: Option<VertexId>,
    stack: Vec<Frame>,
    visited: Vec<bool>,
    progress: TraversalResult,
}

impl<G: Borrow<Graph>> DfsWalk<G> {
    /// Creates a walker positioned before the start vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStart` if `start` is not a vertex of `graph`.
    pub fn new(graph: G, start: &str) -> Result<Self> {
        let model: &Graph = graph.borrow();
        let start = resolve_start(model, start)?;
        let visited = vec![false; model.vertex_count()];
        Ok(Self {
            graph,
            pending_start: Some(start),
            stack: Vec::new(),
            visited,
            progress: TraversalResult::default(),
        })
    }
}

impl<G: Borrow<Graph>> Iterator for DfsWalk<G> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        let graph: &Graph = self.graph.borrow();
        if let Some(start) = self.pending_start.take() {
            self.visited[start] = true;
            self.stack.push(Frame::new(start));
            return Some(self.progress.record(graph.label(start), None));
        }
        loop {
            let frame = self.stack.last_mut()?;
            match graph.neighbor_ids(frame.vertex).get(frame.cursor) {
                Some(&next) => {
                    frame.cursor += 1;
                    if !self.visited[next] {
                        let parent = frame.vertex;
                        self.visited[next] = true;
                        self.stack.push(Frame::new(next));
                        return Some(
                            self.progress
                                .record(graph.label(next), Some(graph.label(parent))),
                        );
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<G: Borrow<Graph>> Walk for DfsWalk<G> {
    fn kind(&self) -> TraversalKind {
        TraversalKind::Dfs
    }

    fn progress(&self) -> &TraversalResult {
        &self.progress
    }

    fn is_finished(&self) -> bool {
        self.pending_start.is_none() && self.stack.is_empty()
    }

    fn into_result(self) -> TraversalResult {
        self.progress
    }
}

/// Breadth-first walker backed by a FIFO queue.
///
/// Vertices are marked visited when discovered (before enqueueing), so the
/// visit order is discovery order.
#[derive(Debug)]
pub struct BfsWalk<G> {
    graph: G,
    pending_start: Option<VertexId>,
    queue: VecDeque<VertexId>,
    current: Option<Frame>,
    visited: Vec<bool>,
    progress: TraversalResult,
}

impl<G: Borrow<Graph>> BfsWalk<G> {
    /// Creates a walker positioned before the start vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStart` if `start` is not a vertex of `graph`.
    pub fn new(graph: G, start: &str) -> Result<Self> {
        let model: &Graph = graph.borrow();
        let start = resolve_start(model, start)?;
        let visited = vec![false; model.vertex_count()];
        Ok(Self {
            graph,
            pending_start: Some(start),
            queue: VecDeque::new(),
            current: None,
            visited,
            progress: TraversalResult::default(),
        })
    }
}

impl<G: Borrow<Graph>> Iterator for BfsWalk<G> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        let graph: &Graph = self.graph.borrow();
        if let Some(start) = self.pending_start.take() {
            self.visited[start] = true;
            self.queue.push_back(start);
            return Some(self.progress.record(graph.label(start), None));
        }
        loop {
            if self.current.is_none() {
                self.current = Some(Frame::new(self.queue.pop_front()?));
            }
            let frame = self.current.as_mut()?;
            match graph.neighbor_ids(frame.vertex).get(frame.cursor) {
                Some(&next) => {
                    frame.cursor += 1;
                    if !self.visited[next] {
                        let parent = frame.vertex;
                        self.visited[next] = true;
                        self.queue.push_back(next);
                        return Some(
                            self.progress
                                .record(graph.label(next), Some(graph.label(parent))),
                        );
                    }
                }
                None => self.current = None,
            }
        }
    }
}

impl<G: Borrow<Graph>> Walk for BfsWalk<G> {
    fn kind(&self) -> TraversalKind {
        TraversalKind::Bfs
    }

    fn progress(&self) -> &TraversalResult {
        &self.progress
    }

    fn is_finished(&self) -> bool {
        self.pending_start.is_none() && self.current.is_none() && self.queue.is_empty()
    }

    fn into_result(self) -> TraversalResult {
        self.progress
    }
}

/// DFS traversal from `start`, run to completion.
///
/// # Errors
///
/// Returns `Error::InvalidStart` if `start` is not a vertex of `graph`.
pub fn dfs(graph: &Graph, start: &str) -> Result<TraversalResult> {
    Ok(DfsWalk::new(graph, start)?.run_to_end())
}

/// BFS traversal from `start`, run to completion.
///
/// # Errors
///
/// Returns `Error::InvalidStart` if `start` is not a vertex of `graph`.
pub fn bfs(graph: &Graph, start: &str) -> Result<TraversalResult> {
    Ok(BfsWalk::new(graph, start)?.run_to_end())
}
