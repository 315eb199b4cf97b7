//! Neighbor ordering: built-in sort policies, caller comparators, or stored order.
//!
//! All orderings use a stable sort, so entries that compare equal keep their
//! relative stored order.

use std::cmp::Ordering;

use super::types::{EdgeWeight, Neighbor, SortPolicy};

/// Arranges an adjacency list before it is read or expanded.
///
/// Implemented by [`StoredOrder`], [`SortPolicy`], and any comparator closure
/// `Fn(&Neighbor<K, W>, &Neighbor<K, W>) -> Ordering`.
///
/// ```rust
/// use adjgraph_core::graph::{Neighbor, UndirectedGraph};
///
/// let mut graph: UndirectedGraph<u32> = [1, 2, 3].into();
/// graph.insert_edge_weighted(&1, &2, 5.0).unwrap();
/// graph.insert_edge_weighted(&1, &3, 2.0).unwrap();
///
/// let lightest_first =
///     |a: &Neighbor<u32, f64>, b: &Neighbor<u32, f64>| a.weight().total_cmp(&b.weight());
/// let sorted = graph.sorted_neighbors(&1, &lightest_first).unwrap();
/// assert_eq!(*sorted[0].key(), 3);
/// ```
pub trait NeighborOrdering<K, W> {
    /// True when [`arrange`](Self::arrange) never moves entries, letting
    /// traversals read the stored list without copying it.
    const PRESERVES_STORED_ORDER: bool = false;

    /// Reorders `neighbors` in place.
    fn arrange(&self, neighbors: &mut [Neighbor<K, W>]);
}

/// Leaves adjacency lists in stored (insertion, or last sorted) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoredOrder;

impl<K, W> NeighborOrdering<K, W> for StoredOrder {
    const PRESERVES_STORED_ORDER: bool = true;

    fn arrange(&self, _neighbors: &mut [Neighbor<K, W>]) {}
}

impl<K: Ord, W: EdgeWeight> NeighborOrdering<K, W> for SortPolicy {
    fn arrange(&self, neighbors: &mut [Neighbor<K, W>]) {
        match self {
            Self::KeyAscending => neighbors.sort_by(|a, b| a.key().cmp(b.key())),
            Self::KeyDescending => neighbors.sort_by(|a, b| b.key().cmp(a.key())),
            Self::WeightAscending => {
                neighbors.sort_by(|a, b| a.weight().total_order(&b.weight()));
            }
            Self::WeightDescending => {
                neighbors.sort_by(|a, b| b.weight().total_order(&a.weight()));
            }
        }
    }
}

impl<K, W, F> NeighborOrdering<K, W> for F
where
    F: Fn(&Neighbor<K, W>, &Neighbor<K, W>) -> Ordering,
{
    fn arrange(&self, neighbors: &mut [Neighbor<K, W>]) {
        neighbors.sort_by(|a, b| self(a, b));
    }
}
