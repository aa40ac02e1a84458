//! Pure projection of engine state into draw commands.
//!
//! The engine never draws. A renderer turns these commands into pixels,
//! terminal cells or anything else; the projection only decides geometry
//! and colour.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::graph::{Graph, TraversalKind, TraversalResult};

/// Named colours used by the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Unvisited vertex.
    LightBlue,
    /// DFS visit.
    Orange,
    /// BFS visit.
    Green,
    /// Untraversed edge.
    Black,
    /// Highlighted bar.
    Red,
    /// Plain bar.
    SkyBlue,
}

impl Color {
    /// Colour marking vertices and edges visited by `kind`.
    #[must_use]
    pub fn for_traversal(kind: TraversalKind) -> Self {
        match kind {
            TraversalKind::Dfs => Self::Orange,
            TraversalKind::Bfs => Self::Green,
        }
    }
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downwards).
    pub y: f64,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum DrawCommand {
    /// An edge.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke colour.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// A labelled vertex.
    Circle {
        /// Vertex label.
        label: String,
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill colour.
        fill: Color,
    },
    /// One array element.
    Bar {
        /// Array index.
        index: usize,
        /// Top-left corner.
        origin: Point,
        /// Bar width.
        width: f64,
        /// Bar height.
        height: f64,
        /// Fill colour.
        fill: Color,
    },
}

/// Vertex positions evenly spaced on a circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLayout {
    positions: IndexMap<String, Point>,
}

impl GraphLayout {
    /// Places vertex `i` of `n` at angle `2πi/n` on a ring centred in the canvas.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // vertex counts are far below 2^52
    pub fn circle(graph: &Graph, config: &RenderConfig) -> Self {
        let n = graph.vertex_count() as f64;
        let (cx, cy) = (config.graph_width / 2.0, config.graph_height / 2.0);
        let radius = config.graph_width.min(config.graph_height) / 2.0 - config.ring_margin;
        let positions = graph
            .vertices()
            .enumerate()
            .map(|(i, label)| {
                let angle = TAU * i as f64 / n;
                let point = Point {
                    x: cx + radius * angle.cos(),
                    y: cy + radius * angle.sin(),
                };
                (label.to_string(), point)
            })
            .collect();
        Self { positions }
    }

    /// Position of `vertex`.
    #[must_use]
    pub fn position(&self, vertex: &str) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    /// Number of placed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no vertex is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Draws `graph` with the traversal progress so far.
///
/// Edges come first so vertices are painted over them. Discovery edges and
/// visited vertices take the traversal colour; `progress` may be partial.
#[must_use]
pub fn graph_frame(
    graph: &Graph,
    layout: &GraphLayout,
    progress: &TraversalResult,
    kind: TraversalKind,
    config: &RenderConfig,
) -> Vec<DrawCommand> {
    let accent = Color::for_traversal(kind);
    let mut commands = Vec::with_capacity(graph.vertex_count() * 2);

    for (u, v) in graph.canonical_edges() {
        let (Some(from), Some(to)) = (layout.position(u), layout.position(v)) else {
            continue;
        };
        let (color, width) = if progress.is_discovery_edge(u, v) {
            (accent, 3.0)
        } else {
            (Color::Black, 1.0)
        };
        commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    for vertex in graph.vertices() {
        let Some(center) = layout.position(vertex) else {
            continue;
        };
        let fill = if progress.is_visited(vertex) {
            accent
        } else {
            Color::LightBlue
        };
        commands.push(DrawCommand::Circle {
            label: vertex.to_string(),
            center,
            radius: config.node_radius,
            fill,
        });
    }
    commands
}

/// Draws one bar per value, bottom-aligned, highlighted bars in red.
#[must_use]
#[allow(clippy::cast_precision_loss)] // indices and bar values stay small
pub fn sort_frame(
    values: &[i64],
    highlighted: &BTreeSet<usize>,
    config: &RenderConfig,
) -> Vec<DrawCommand> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let height = value as f64 * config.bar_scale;
            DrawCommand::Bar {
                index,
                origin: Point {
                    x: index as f64 * config.bar_width,
                    y: config.sort_height - height,
                },
                width: config.bar_width,
                height,
                fill: if highlighted.contains(&index) {
                    Color::Red
                } else {
                    Color::SkyBlue
                },
            }
        })
        .collect()
}
