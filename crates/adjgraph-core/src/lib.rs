//! # adjgraph-core
//!
//! Generic in-memory graph container: adjacency-list storage of nodes and
//! (optionally weighted, optionally directed) edges, with breadth-first and
//! depth-first traversal over pluggable neighbor ordering, neighbor
//! filtering, and completion handling.
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph_core::graph::UndirectedGraph;
//! use adjgraph_core::GraphError;
//!
//! fn main() -> Result<(), GraphError> {
//!     let mut graph: UndirectedGraph<&str> = ["A", "B", "C", "D"].into();
//!     graph.insert_edge(&"A", &"B")?;
//!     graph.insert_edge(&"B", &"C")?;
//!     graph.insert_edge(&"C", &"D")?;
//!     graph.insert_edge(&"A", &"D")?;
//!
//!     assert_eq!(graph.bfs(&"A", &"D")?, vec!["A", "D"]);
//!     assert!(matches!(
//!         graph.insert_edge(&"D", &"A"),
//!         Err(GraphError::EdgeExists(..))
//!     ));
//!     Ok(())
//! }
//! ```
//!
//! The graph does no internal locking. Undirected edge mutation touches two
//! adjacency lists, [`sort_neighbors`](graph::Graph::sort_neighbors) reorders
//! stored lists, and node removal scans every list, so shared use must be
//! serialized by the caller.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, Neighbor, SortPolicy, Traversal, UndirectedGraph};
