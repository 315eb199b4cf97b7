//! Graph traversal (BFS/DFS) between two nodes.
//!
//! A [`Traversal`] combines a search [`Strategy`] with an optional neighbor
//! ordering and an optional neighbor filter. It runs over anything that
//! implements [`Adjacency`] and yields either the default path from `start`
//! to `end` or whatever a caller-supplied completion handler derives from
//! the parent map.
//!
//! # Example
//!
//! ```rust
//! use adjgraph_core::graph::{Neighbor, SortPolicy, Traversal, UndirectedGraph};
//!
//! let mut graph: UndirectedGraph<char> = ['a', 'b', 'c', 'd'].into();
//! graph.insert_edge(&'a', &'b').unwrap();
//! graph.insert_edge(&'b', &'d').unwrap();
//! graph.insert_edge(&'a', &'c').unwrap();
//! graph.insert_edge(&'c', &'d').unwrap();
//!
//! let avoid_b = Traversal::bfs()
//!     .with_order(SortPolicy::KeyAscending)
//!     .with_filter(|n: &Neighbor<char, f64>| *n.key() != 'b');
//! assert_eq!(avoid_b.path(&graph, &'a', &'d').unwrap(), vec!['a', 'c', 'd']);
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

use crate::error::Result;

use super::adjacency::Graph;
use super::ordering::{NeighborOrdering, StoredOrder};
use super::path::{reconstruct_path, ParentMap};
use super::store::NodeMap;
use super::types::{EdgeDirection, EdgeWeight, Neighbor};

/// Set of nodes a traversal has already marked.
pub trait VisitedSet<K>: Default {
    /// Marks `key`, returning false if it was already marked.
    fn mark(&mut self, key: K) -> bool;

    /// Returns true if `key` is marked.
    fn is_marked(&self, key: &K) -> bool;
}

impl<K: Ord> VisitedSet<K> for BTreeSet<K> {
    fn mark(&mut self, key: K) -> bool {
        self.insert(key)
    }

    fn is_marked(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K, S> VisitedSet<K> for HashSet<K, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn mark(&mut self, key: K) -> bool {
        self.insert(key)
    }

    fn is_marked(&self, key: &K) -> bool {
        self.contains(key)
    }
}

/// Read access to adjacency lists; any graph store can implement this.
pub trait Adjacency<K, W> {
    /// Parent map a traversal over this store produces.
    type Parents: ParentMap<K>;

    /// Visited set a traversal over this store keeps.
    type Visited: VisitedSet<K>;

    /// Returns `key`'s adjacency list in stored order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    fn adjacent(&self, key: &K) -> Result<&[Neighbor<K, W>]>;
}

impl<K, W, D, M> Adjacency<K, W> for Graph<K, W, D, M>
where
    K: Clone + Eq + Debug,
    W: EdgeWeight,
    D: EdgeDirection,
    M: NodeMap<K, W>,
{
    type Parents = M::Parents;
    type Visited = M::Visited;

    fn adjacent(&self, key: &K) -> Result<&[Neighbor<K, W>]> {
        self.neighbors(key)
    }
}

/// Decides which neighbors may enter the frontier.
pub trait NeighborFilter<K, W> {
    /// Returns false to exclude `neighbor` from this expansion step.
    fn accept(&self, neighbor: &Neighbor<K, W>) -> bool;
}

/// Filter that accepts every neighbor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<K, W> NeighborFilter<K, W> for AcceptAll {
    fn accept(&self, _neighbor: &Neighbor<K, W>) -> bool {
        true
    }
}

impl<K, W, F> NeighborFilter<K, W> for F
where
    F: Fn(&Neighbor<K, W>) -> bool,
{
    fn accept(&self, neighbor: &Neighbor<K, W>) -> bool {
        self(neighbor)
    }
}

/// Search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier; nodes are marked visited when first discovered, so each
    /// node is enqueued at most once and the default path has minimal hops.
    BreadthFirst,
    /// Front-inserted frontier used as a stack; nodes are marked visited when
    /// popped, so a node may be pushed several times before it is expanded.
    DepthFirst,
}

/// A configured BFS or DFS.
#[derive(Clone)]
pub struct Traversal<O = StoredOrder, F = AcceptAll> {
    strategy: Strategy,
    order: O,
    filter: F,
}

impl Traversal {
    /// Breadth-first search in stored neighbor order, no filter.
    #[must_use]
    pub fn bfs() -> Self {
        Self::new(Strategy::BreadthFirst)
    }

    /// Depth-first search in stored neighbor order, no filter.
    #[must_use]
    pub fn dfs() -> Self {
        Self::new(Strategy::DepthFirst)
    }

    /// Search with the given strategy, stored neighbor order, no filter.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            order: StoredOrder,
            filter: AcceptAll,
        }
    }
}

impl<O, F> Debug for Traversal<O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl<O, F> Traversal<O, F> {
    /// Orders each node's neighbors before they are enumerated (builder pattern).
    ///
    /// The ordering is applied to a copy; stored adjacency lists are not
    /// reordered.
    #[must_use]
    pub fn with_order<O2>(self, order: O2) -> Traversal<O2, F> {
        Traversal {
            strategy: self.strategy,
            order,
            filter: self.filter,
        }
    }

    /// Excludes neighbors rejected by `filter` from the frontier (builder pattern).
    #[must_use]
    pub fn with_filter<F2>(self, filter: F2) -> Traversal<O, F2> {
        Traversal {
            strategy: self.strategy,
            order: self.order,
            filter,
        }
    }

    /// Returns the search strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Searches from `start` until `end` is taken off the frontier.
    ///
    /// Returns the parent map at that moment, or `None` if the frontier is
    /// exhausted first. `start` is not checked up front: an absent `start`
    /// surfaces as `NodeNotFound` when it is expanded, unless it equals `end`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if an expanded node is absent.
    pub fn parents<G, K, W>(&self, graph: &G, start: &K, end: &K) -> Result<Option<G::Parents>>
    where
        G: Adjacency<K, W> + ?Sized,
        K: Clone + Eq + Debug,
        W: Clone,
        O: NeighborOrdering<K, W>,
        F: NeighborFilter<K, W>,
    {
        let depth_first = self.strategy == Strategy::DepthFirst;
        let mut visited = G::Visited::default();
        let mut parents = G::Parents::default();
        let mut frontier: VecDeque<K> = VecDeque::new();
        let mut scratch: Vec<Neighbor<K, W>> = Vec::new();
        let mut expanded = 0usize;

        if !depth_first {
            visited.mark(start.clone());
        }
        frontier.push_back(start.clone());

        while let Some(current) = frontier.pop_front() {
            if current == *end {
                tracing::trace!(strategy = ?self.strategy, expanded, ?start, ?end, "Reached target");
                return Ok(Some(parents));
            }
            if depth_first && !visited.mark(current.clone()) {
                continue;
            }
            expanded += 1;

            let stored = graph.adjacent(&current)?;
            let candidates: &[Neighbor<K, W>] =
                if <O as NeighborOrdering<K, W>>::PRESERVES_STORED_ORDER {
                    stored
                } else {
                    scratch.clear();
                    scratch.extend_from_slice(stored);
                    self.order.arrange(&mut scratch);
                    &scratch
                };

            for neighbor in candidates {
                if !self.filter.accept(neighbor) {
                    continue;
                }
                let key = neighbor.key();
                if depth_first {
                    if !visited.is_marked(key) {
                        parents.set_parent(key.clone(), current.clone());
                        frontier.push_front(key.clone());
                    }
                } else if visited.mark(key.clone()) {
                    parents.set_parent(key.clone(), current.clone());
                    frontier.push_back(key.clone());
                }
            }
        }

        tracing::trace!(strategy = ?self.strategy, expanded, ?start, ?end, "Target unreachable");
        Ok(None)
    }

    /// Path `start, ..., end`, or empty if `end` is unreachable.
    ///
    /// Breadth-first paths have the fewest hops; depth-first paths are valid
    /// but not necessarily shortest.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if an expanded node is absent.
    pub fn path<G, K, W>(&self, graph: &G, start: &K, end: &K) -> Result<Vec<K>>
    where
        G: Adjacency<K, W> + ?Sized,
        K: Clone + Eq + Debug,
        W: Clone,
        O: NeighborOrdering<K, W>,
        F: NeighborFilter<K, W>,
    {
        Ok(self
            .parents(graph, start, end)?
            .map(|parents| reconstruct_path(&parents, start, end))
            .unwrap_or_default())
    }

    /// Calls `handler(start, end, parents)` once when `end` is reached.
    ///
    /// Returns `None` without calling the handler if `end` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if an expanded node is absent.
    pub fn run_with<G, K, W, R, H>(
        &self,
        graph: &G,
        start: &K,
        end: &K,
        handler: H,
    ) -> Result<Option<R>>
    where
        G: Adjacency<K, W> + ?Sized,
        K: Clone + Eq + Debug,
        W: Clone,
        O: NeighborOrdering<K, W>,
        F: NeighborFilter<K, W>,
        H: FnOnce(&K, &K, &G::Parents) -> R,
    {
        Ok(self
            .parents(graph, start, end)?
            .map(|parents| handler(start, end, &parents)))
    }
}

/// Shortest hop path from `start` to `end`, or empty if unreachable.
///
/// # Errors
///
/// Returns `GraphError::NodeNotFound` if an expanded node is absent.
pub fn bfs<G, K, W>(graph: &G, start: &K, end: &K) -> Result<Vec<K>>
where
    G: Adjacency<K, W> + ?Sized,
    K: Clone + Eq + Debug,
    W: Clone,
{
    Traversal::bfs().path(graph, start, end)
}

/// Some path from `start` to `end`, or empty if unreachable.
///
/// # Errors
///
/// Returns `GraphError::NodeNotFound` if an expanded node is absent.
pub fn dfs<G, K, W>(graph: &G, start: &K, end: &K) -> Result<Vec<K>>
where
    G: Adjacency<K, W> + ?Sized,
    K: Clone + Eq + Debug,
    W: Clone,
{
    Traversal::dfs().path(graph, start, end)
}

impl<K, W, D, M> Graph<K, W, D, M>
where
    K: Clone + Eq + Debug,
    W: EdgeWeight,
    D: EdgeDirection,
    M: NodeMap<K, W>,
{
    /// Shortest hop path from `start` to `end`, or empty if unreachable.
    ///
    /// # Errors
    ///
    /// An absent `start` surfaces as `GraphError::NodeNotFound` when it is
    /// expanded, unless it equals `end`.
    pub fn bfs(&self, start: &K, end: &K) -> Result<Vec<K>> {
        bfs(self, start, end)
    }

    /// Some path from `start` to `end`, or empty if unreachable.
    ///
    /// # Errors
    ///
    /// An absent `start` surfaces as `GraphError::NodeNotFound` when it is
    /// expanded, unless it equals `end`.
    pub fn dfs(&self, start: &K, end: &K) -> Result<Vec<K>> {
        dfs(self, start, end)
    }
}
