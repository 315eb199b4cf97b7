//! Adjacency-list graph: node and edge storage with existence-checked mutation.
//!
//! Every precondition is checked before anything is mutated, so a failed call
//! leaves the graph untouched.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};

use super::ordering::NeighborOrdering;
use super::store::{NeighborList, NodeMap};
use super::types::{Directed, EdgeDirection, EdgeWeight, Neighbor, Undirected};

/// In-memory adjacency-list graph.
///
/// * `K` - node key
/// * `W` - edge weight (default `f64`)
/// * `D` - [`Undirected`] or [`Directed`]
/// * `M` - whole-graph container, see [`NodeMap`]
///
/// An undirected edge `a - b` is stored as two entries (`a -> b` and
/// `b -> a`) and counts twice in [`edge_count`](Self::edge_count); a directed
/// edge is one entry and counts once. Neighbor lists keep insertion order
/// until [`sort_neighbors`](Self::sort_neighbors) is called.
///
/// # Example
///
/// ```rust
/// use adjgraph_core::graph::UndirectedGraph;
///
/// let mut graph: UndirectedGraph<&str> = ["a", "b", "c"].into();
/// graph.insert_edge(&"a", &"b").unwrap();
/// graph.insert_edge_weighted(&"b", &"c", 2.0).unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 4);
/// assert!(graph.is_weighted());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K, W = f64, D = Undirected, M = BTreeMap<K, NeighborList<K, W>>> {
    nodes: M,
    node_count: usize,
    edge_count: usize,
    weighted: bool,
    neighbor_capacity: usize,
    _marker: PhantomData<fn() -> (K, W, D)>,
}

/// Graph whose edges are mirrored in both endpoints' lists.
pub type UndirectedGraph<K, W = f64> = Graph<K, W, Undirected>;

/// Graph whose edges are stored in the source's list only.
pub type DirectedGraph<K, W = f64> = Graph<K, W, Directed>;

impl<K, W, D, M> Default for Graph<K, W, D, M>
where
    M: Default,
{
    fn default() -> Self {
        Self {
            nodes: M::default(),
            node_count: 0,
            edge_count: 0,
            weighted: false,
            neighbor_capacity: 0,
            _marker: PhantomData,
        }
    }
}

impl<K, W, D, M> Graph<K, W, D, M>
where
    K: Clone + Eq + Debug,
    W: EdgeWeight,
    D: EdgeDirection,
    M: NodeMap<K, W>,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph using the allocation hints in `config`.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            nodes: M::with_capacity(config.node_capacity),
            neighbor_capacity: config.neighbor_capacity,
            ..Self::default()
        }
    }

    /// Builds a graph with one isolated node per key.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeExists` if `keys` contains a duplicate.
    pub fn try_from_nodes<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut graph = Self::new();
        for key in keys {
            graph.insert_node(key)?;
        }
        Ok(graph)
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Inserts an isolated node.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeExists` if `key` is already present.
    pub fn insert_node(&mut self, key: K) -> Result<()> {
        if self.nodes.contains(&key) {
            return Err(GraphError::node_exists(&key));
        }
        self.insert_absent(key);
        Ok(())
    }

    fn insert_absent(&mut self, key: K) {
        self.nodes
            .insert(key, Vec::with_capacity(self.neighbor_capacity));
        self.node_count += 1;
    }

    /// Removes a node and every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    pub fn remove_node(&mut self, key: &K) -> Result<()> {
        let own = self
            .nodes
            .remove(key)
            .ok_or_else(|| GraphError::node_not_found(key))?;
        self.node_count -= 1;

        let mut removed = own.len();
        for list in self.nodes.lists_mut() {
            let before = list.len();
            list.retain(|entry| entry.key() != key);
            removed += before - list.len();
        }
        self.edge_count -= removed;

        tracing::debug!(node = ?key, removed_entries = removed, "Removed node");
        Ok(())
    }

    /// Returns true if `key` is a node of this graph.
    #[must_use]
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains(key)
    }

    /// Iterates node keys in the container's order.
    pub fn nodes(&self) -> M::Keys<'_> {
        self.nodes.keys()
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Inserts an edge with the unit weight.
    ///
    /// # Errors
    ///
    /// See [`insert_edge_weighted`](Self::insert_edge_weighted).
    pub fn insert_edge(&mut self, from: &K, to: &K) -> Result<()> {
        self.insert_edge_weighted(from, to, W::unit())
    }

    /// Inserts an edge `from -> to`, mirrored as `to -> from` when undirected.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent, and
    /// `GraphError::EdgeExists` if the edge is already present (in either
    /// orientation for undirected graphs).
    pub fn insert_edge_weighted(&mut self, from: &K, to: &K, weight: W) -> Result<()> {
        self.require_node(from)?;
        self.require_node(to)?;
        if self.has_entry(from, to) || (!D::DIRECTED && self.has_entry(to, from)) {
            return Err(GraphError::edge_exists(from, to));
        }

        self.list_mut(from)?.push(Neighbor::new(to.clone(), weight));
        if D::DIRECTED {
            self.edge_count += 1;
        } else {
            self.list_mut(to)?.push(Neighbor::new(from.clone(), weight));
            self.edge_count += 2;
        }
        if weight != W::unit() {
            self.weighted = true;
        }

        tracing::trace!(?from, ?to, ?weight, "Inserted edge");
        Ok(())
    }

    /// Removes the edge `from -> to` (both entries when undirected).
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent, and
    /// `GraphError::EdgeNotFound` if the edge is not present.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<()> {
        self.require_node(from)?;
        self.require_node(to)?;
        if !self.edge_exists(from, to) {
            return Err(GraphError::edge_not_found(from, to));
        }

        remove_first(self.list_mut(from)?, to);
        if D::DIRECTED {
            self.edge_count -= 1;
        } else {
            remove_first(self.list_mut(to)?, from);
            self.edge_count -= 2;
        }

        tracing::trace!(?from, ?to, "Removed edge");
        Ok(())
    }

    /// Returns true if the edge exists. Undirected graphs require both entries.
    ///
    /// Absent endpoints yield `false`.
    #[must_use]
    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        self.edge_exists(from, to)
    }

    fn edge_exists(&self, from: &K, to: &K) -> bool {
        if D::DIRECTED {
            self.has_entry(from, to)
        } else {
            self.has_entry(from, to) && self.has_entry(to, from)
        }
    }

    // Linear scan of `from`'s list.
    fn has_entry(&self, from: &K, to: &K) -> bool {
        self.nodes
            .list(from)
            .is_some_and(|list| list.iter().any(|entry| entry.key() == to))
    }

    /// Returns the weight of the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent, and
    /// `GraphError::EdgeNotFound` if the edge is not present.
    pub fn edge_weight(&self, from: &K, to: &K) -> Result<W> {
        self.require_node(to)?;
        self.neighbors(from)?
            .iter()
            .find(|entry| entry.key() == to)
            .map(Neighbor::weight)
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    // ── Neighbors ──────────────────────────────────────────────────────

    /// Returns `key`'s adjacency list in stored order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    pub fn neighbors(&self, key: &K) -> Result<&[Neighbor<K, W>]> {
        self.nodes
            .list(key)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::node_not_found(key))
    }

    /// Number of entries in `key`'s adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    pub fn degree(&self, key: &K) -> Result<usize> {
        self.neighbors(key).map(<[_]>::len)
    }

    /// Reorders `key`'s stored adjacency list.
    ///
    /// The new order persists: later reads and traversals observe it until
    /// the list is sorted again.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    pub fn sort_neighbors<O>(&mut self, key: &K, order: &O) -> Result<()>
    where
        O: NeighborOrdering<K, W> + ?Sized,
    {
        order.arrange(self.list_mut(key)?);
        Ok(())
    }

    /// Sorts `key`'s adjacency list in place, then returns it.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `key` is absent.
    pub fn sorted_neighbors<O>(&mut self, key: &K, order: &O) -> Result<&[Neighbor<K, W>]>
    where
        O: NeighborOrdering<K, W> + ?Sized,
    {
        let list = self.list_mut(key)?;
        order.arrange(list.as_mut_slice());
        Ok(list.as_slice())
    }

    // ── Counters ───────────────────────────────────────────────────────

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of adjacency entries: one per directed edge, two per undirected edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of entries in the underlying container.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true once any edge was inserted with a non-unit weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns true for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// Removes every node and edge and resets the counters.
    pub fn clear(&mut self) {
        tracing::debug!(
            nodes = self.node_count,
            edges = self.edge_count,
            "Clearing graph"
        );
        self.nodes.clear();
        self.node_count = 0;
        self.edge_count = 0;
        self.weighted = false;
    }

    fn require_node(&self, key: &K) -> Result<()> {
        if self.nodes.contains(key) {
            Ok(())
        } else {
            Err(GraphError::node_not_found(key))
        }
    }

    fn list_mut(&mut self, key: &K) -> Result<&mut NeighborList<K, W>> {
        self.nodes
            .list_mut(key)
            .ok_or_else(|| GraphError::node_not_found(key))
    }
}

fn remove_first<K: PartialEq, W>(list: &mut NeighborList<K, W>, key: &K) {
    if let Some(pos) = list.iter().position(|entry| entry.key() == key) {
        list.remove(pos);
    }
}

impl<K, W, D, M> FromIterator<K> for Graph<K, W, D, M>
where
    K: Clone + Eq + Debug,
    W: EdgeWeight,
    D: EdgeDirection,
    M: NodeMap<K, W>,
{
    /// Duplicate keys collapse into a single node.
    ///
    /// Use [`Graph::try_from_nodes`] to reject duplicates with
    /// `GraphError::NodeExists` instead.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut graph = Self::new();
        for key in keys {
            if !graph.contains_node(&key) {
                graph.insert_absent(key);
            }
        }
        graph
    }
}

impl<K, W, D, M, const N: usize> From<[K; N]> for Graph<K, W, D, M>
where
    K: Clone + Eq + Debug,
    W: EdgeWeight,
    D: EdgeDirection,
    M: NodeMap<K, W>,
{
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}
