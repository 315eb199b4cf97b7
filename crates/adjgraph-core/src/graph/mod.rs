//! In-memory adjacency-list graph.
//!
//! Provides the node/edge store with existence-checked mutation, neighbor
//! ordering, and BFS/DFS traversal with pluggable ordering, filtering, and
//! completion handling.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use adjgraph_core::graph::{DirectedGraph, Traversal};
//!
//! let mut graph: DirectedGraph<u64> = [1, 2, 3].into();
//! graph.insert_edge(&1, &2).unwrap();
//! graph.insert_edge(&2, &3).unwrap();
//!
//! assert_eq!(graph.bfs(&1, &3).unwrap(), vec![1, 2, 3]);
//! assert!(graph.bfs(&3, &1).unwrap().is_empty());
//!
//! // Ordered containers hand the handler an ordered parent map.
//! let hops = Traversal::bfs()
//!     .run_with(&graph, &1, &3, |start: &u64, end: &u64, parents: &BTreeMap<u64, u64>| {
//!         let mut hops = 0;
//!         let mut node = end;
//!         while node != start {
//!             node = &parents[node];
//!             hops += 1;
//!         }
//!         hops
//!     })
//!     .unwrap();
//! assert_eq!(hops, Some(2));
//! ```

mod adjacency;
mod ordering;
mod path;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod adjacency_tests;
#[cfg(test)]
mod ordering_tests;

pub use adjacency::{DirectedGraph, Graph, UndirectedGraph};
pub use ordering::{NeighborOrdering, StoredOrder};
pub use path::{reconstruct_path, ParentMap};
pub use store::{NeighborList, NodeMap};
pub use traversal::{AcceptAll, Adjacency, NeighborFilter, Strategy, Traversal, VisitedSet};
pub use types::{Directed, EdgeDirection, EdgeWeight, Neighbor, SortPolicy, Undirected};
