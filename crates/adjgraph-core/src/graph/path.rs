//! Path reconstruction from a traversal's parent map.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Discovery predecessor of every node reached by a traversal (except `start`).
///
/// The concrete map follows the graph's container: `BTreeMap` for ordered
/// containers, `FxHashMap` for hashed ones (see [`NodeMap::Parents`]).
///
/// [`NodeMap::Parents`]: super::NodeMap::Parents
pub trait ParentMap<K>: Default {
    /// Returns the node `child` was discovered from.
    fn parent_of(&self, child: &K) -> Option<&K>;

    /// Records (or overwrites) `child`'s predecessor.
    fn set_parent(&mut self, child: K, parent: K);
}

impl<K: Ord> ParentMap<K> for BTreeMap<K, K> {
    fn parent_of(&self, child: &K) -> Option<&K> {
        self.get(child)
    }

    fn set_parent(&mut self, child: K, parent: K) {
        self.insert(child, parent);
    }
}

impl<K, S> ParentMap<K> for HashMap<K, K, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn parent_of(&self, child: &K) -> Option<&K> {
        self.get(child)
    }

    fn set_parent(&mut self, child: K, parent: K) {
        self.insert(child, parent);
    }
}

/// Walks parent pointers from `end` back to `start`.
///
/// Returns `start, ..., end` inclusive, or an empty path if the chain is
/// broken before reaching `start`.
#[must_use]
pub fn reconstruct_path<K, P>(parents: &P, start: &K, end: &K) -> Vec<K>
where
    K: Clone + Eq,
    P: ParentMap<K> + ?Sized,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        match parents.parent_of(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
