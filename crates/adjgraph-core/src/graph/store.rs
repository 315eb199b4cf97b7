//! Whole-graph container abstraction.
//!
//! The adjacency store maps each node key to its neighbor list. Which map
//! backs it is a type parameter of [`Graph`](super::Graph): `BTreeMap` keeps
//! nodes in key order, `IndexMap` in insertion order, and `HashMap` (with any
//! hasher, e.g. `rustc_hash::FxBuildHasher`) trades order for speed.
//!
//! Traversal bookkeeping follows the container: ordered maps track visited
//! nodes and parents in `BTreeSet`/`BTreeMap`, hashed maps in
//! `FxHashSet`/`FxHashMap`. Keys therefore need only the bounds their
//! container already asks for.

use std::collections::{btree_map, hash_map, BTreeMap, BTreeSet, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use super::path::ParentMap;
use super::traversal::VisitedSet;
use super::types::Neighbor;

/// A node's adjacency list, in stored order.
pub type NeighborList<K, W> = Vec<Neighbor<K, W>>;

/// Map from node key to adjacency list.
pub trait NodeMap<K, W>: Default {
    /// Iterator over node keys.
    type Keys<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    /// Iterator over mutable adjacency lists.
    type ListsMut<'a>: Iterator<Item = &'a mut NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    /// Visited-node set used by traversals over this container.
    type Visited: VisitedSet<K>;

    /// Parent map produced by traversals over this container.
    type Parents: ParentMap<K>;

    /// Creates a map with room for `capacity` nodes, when supported.
    #[must_use]
    fn with_capacity(capacity: usize) -> Self {
        let _ = capacity;
        Self::default()
    }

    /// Returns true if `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Returns the adjacency list of `key`.
    fn list(&self, key: &K) -> Option<&NeighborList<K, W>>;

    /// Returns the mutable adjacency list of `key`.
    fn list_mut(&mut self, key: &K) -> Option<&mut NeighborList<K, W>>;

    /// Inserts `key` with the given list. Callers check for presence first.
    fn insert(&mut self, key: K, list: NeighborList<K, W>);

    /// Removes `key`, returning its list.
    fn remove(&mut self, key: &K) -> Option<NeighborList<K, W>>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);

    /// Iterates node keys in the container's order.
    fn keys<'a>(&'a self) -> Self::Keys<'a>
    where
        K: 'a,
        W: 'a;

    /// Iterates every adjacency list mutably.
    fn lists_mut<'a>(&'a mut self) -> Self::ListsMut<'a>
    where
        K: 'a,
        W: 'a;
}

impl<K: Ord, W> NodeMap<K, W> for BTreeMap<K, NeighborList<K, W>> {
    type Keys<'a>
        = btree_map::Keys<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type ListsMut<'a>
        = btree_map::ValuesMut<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type Visited = BTreeSet<K>;
    type Parents = BTreeMap<K, K>;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn list(&self, key: &K) -> Option<&NeighborList<K, W>> {
        self.get(key)
    }

    fn list_mut(&mut self, key: &K) -> Option<&mut NeighborList<K, W>> {
        self.get_mut(key)
    }

    fn insert(&mut self, key: K, list: NeighborList<K, W>) {
        BTreeMap::insert(self, key, list);
    }

    fn remove(&mut self, key: &K) -> Option<NeighborList<K, W>> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn keys<'a>(&'a self) -> Self::Keys<'a>
    where
        K: 'a,
        W: 'a,
    {
        BTreeMap::keys(self)
    }

    fn lists_mut<'a>(&'a mut self) -> Self::ListsMut<'a>
    where
        K: 'a,
        W: 'a,
    {
        self.values_mut()
    }
}

impl<K, W, S> NodeMap<K, W> for HashMap<K, NeighborList<K, W>, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    type Keys<'a>
        = hash_map::Keys<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type ListsMut<'a>
        = hash_map::ValuesMut<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type Visited = FxHashSet<K>;
    type Parents = FxHashMap<K, K>;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn list(&self, key: &K) -> Option<&NeighborList<K, W>> {
        self.get(key)
    }

    fn list_mut(&mut self, key: &K) -> Option<&mut NeighborList<K, W>> {
        self.get_mut(key)
    }

    fn insert(&mut self, key: K, list: NeighborList<K, W>) {
        HashMap::insert(self, key, list);
    }

    fn remove(&mut self, key: &K) -> Option<NeighborList<K, W>> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn keys<'a>(&'a self) -> Self::Keys<'a>
    where
        K: 'a,
        W: 'a,
    {
        HashMap::keys(self)
    }

    fn lists_mut<'a>(&'a mut self) -> Self::ListsMut<'a>
    where
        K: 'a,
        W: 'a,
    {
        self.values_mut()
    }
}

impl<K, W, S> NodeMap<K, W> for IndexMap<K, NeighborList<K, W>, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    type Keys<'a>
        = indexmap::map::Keys<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type ListsMut<'a>
        = indexmap::map::ValuesMut<'a, K, NeighborList<K, W>>
    where
        Self: 'a,
        K: 'a,
        W: 'a;

    type Visited = FxHashSet<K>;
    type Parents = FxHashMap<K, K>;

    fn with_capacity(capacity: usize) -> Self {
        IndexMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn list(&self, key: &K) -> Option<&NeighborList<K, W>> {
        self.get(key)
    }

    fn list_mut(&mut self, key: &K) -> Option<&mut NeighborList<K, W>> {
        self.get_mut(key)
    }

    fn insert(&mut self, key: K, list: NeighborList<K, W>) {
        IndexMap::insert(self, key, list);
    }

    // Keeps the remaining nodes in insertion order.
    fn remove(&mut self, key: &K) -> Option<NeighborList<K, W>> {
        self.shift_remove(key)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn clear(&mut self) {
        IndexMap::clear(self);
    }

    fn keys<'a>(&'a self) -> Self::Keys<'a>
    where
        K: 'a,
        W: 'a,
    {
        IndexMap::keys(self)
    }

    fn lists_mut<'a>(&'a mut self) -> Self::ListsMut<'a>
    where
        K: 'a,
        W: 'a,
    {
        self.values_mut()
    }
}
