//! # algostep Core
//!
//! Stepwise algorithm engine: graph traversals and sorts reformulated as
//! explicit state machines that advance one primitive operation at a time,
//! so a driver can pause, render and resume between steps.
//!
//! ## Features
//!
//! - **Traversals**: depth-first and breadth-first search, eager or one visit per step
//! - **Sorts**: bubble, insertion, selection and counting sort, one comparison or move per step
//! - **Scheduler**: ticket-driven runs with superseding, start/end times and per-visit timestamps
//! - **Inspection**: visit position, parent, children and visit time of any vertex, mid-run included
//! - **Render projection**: state to backend-agnostic draw commands
//!
//! ## Quick Start
//!
//! ```rust
//! use algostep_core::{Graph, Scheduler, EngineConfig, Tick, TraversalKind};
//!
//! fn main() -> algostep_core::Result<()> {
//!     let graph = Graph::from_text("A,B,C,D", "A B,B C,A D");
//!
//!     // Eager form
//!     let result = algostep_core::graph::dfs(&graph, "A")?;
//!     assert_eq!(result.order(), ["A", "B", "C", "D"]);
//!
//!     // Stepwise form, driven by a scheduler
//!     let mut scheduler = Scheduler::new(&EngineConfig::default());
//!     let mut ticket = scheduler.start_traversal(graph, "A", TraversalKind::Dfs)?;
//!     while let Tick::Continue { next, .. } = scheduler.tick(ticket) {
//!         ticket = next;
//!     }
//!
//!     let report = scheduler.inspect("C").expect("run exists");
//!     assert_eq!(report.position, Some(3));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::single_match_else,
        clippy::cast_lossless,
        clippy::cast_possible_wrap,
        clippy::manual_assert
    )
)]

pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod render;
pub mod scheduler;
pub mod sort;

pub use config::{EngineConfig, RenderConfig, SchedulerConfig, SortConfig};
pub use error::{Error, Result};
pub use graph::{
    bfs, dfs, Graph, InspectionIndex, ParentLink, TraversalKind, TraversalResult, VertexReport,
    VisitEvent, Walk,
};
pub use render::{graph_frame, sort_frame, Color, DrawCommand, GraphLayout, Point};
pub use scheduler::{
    drive, Clock, Frame, Lane, ManualClock, Scheduler, SortRun, SystemClock, Tick, Ticket,
    TraversalRun,
};
pub use sort::{parse_values, SortKind, SortMachine, SortStats, SortStep};
