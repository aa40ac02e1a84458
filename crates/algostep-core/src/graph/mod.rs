//! Graph model, stepwise traversals and run inspection.
//!
//! # Example
//!
//! ```rust
//! use algostep_core::graph::{Graph, traversal::{bfs, dfs}};
//!
//! let graph = Graph::from_text("A,B,C,D", "A B,B C,A D");
//!
//! let depth_first = dfs(&graph, "A").unwrap();
//! assert_eq!(depth_first.order(), ["A", "B", "C", "D"]);
//!
//! let breadth_first = bfs(&graph, "A").unwrap();
//! assert_eq!(breadth_first.order(), ["A", "B", "D", "C"]);
//! ```

mod inspect;
mod model;
pub mod traversal;

#[cfg(test)]
mod model_tests;
#[cfg(test)]
mod traversal_tests;

pub use inspect::{InspectionIndex, ParentLink, VertexReport, VisitTimestamps};
pub use model::{Graph, VertexId};
pub use traversal::{
    bfs, dfs, BfsWalk, DfsWalk, TraversalKind, TraversalResult, VisitEvent, Walk,
};
