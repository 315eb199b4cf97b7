//! Value types shared by the adjacency store, ordering, and traversal.

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// One adjacency-list entry: the neighbor's key and the edge weight.
///
/// # Example
///
/// ```rust
/// use adjgraph_core::graph::Neighbor;
///
/// let n = Neighbor::new("b", 2.5_f64);
/// assert_eq!(*n.key(), "b");
/// assert_eq!(n.weight(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor<K, W> {
    key: K,
    weight: W,
}

impl<K, W> Neighbor<K, W> {
    /// Creates an adjacency entry.
    #[must_use]
    pub fn new(key: K, weight: W) -> Self {
        Self { key, weight }
    }

    /// Returns the neighbor's key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K, W: Copy> Neighbor<K, W> {
    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// Edge weight types.
///
/// `unit()` is the default weight of an edge inserted without an explicit
/// weight; a graph becomes weighted once any edge deviates from it.
pub trait EdgeWeight: Copy + PartialEq + Debug {
    /// The default weight.
    fn unit() -> Self;

    /// Total order used by the weight sort policies.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl EdgeWeight for $t {
            fn unit() -> Self {
                1.0
            }

            fn total_order(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {$(
        impl EdgeWeight for $t {
            fn unit() -> Self {
                1
            }

            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_float_weight!(f32, f64);
impl_int_weight!(i32, i64, u32, u64);

/// Edge direction of a graph, fixed at the type level.
pub trait EdgeDirection {
    /// True when an edge is stored in its source's list only.
    const DIRECTED: bool;
}

/// Marker for graphs whose edges are mirrored in both endpoints' lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Marker for graphs whose edges are stored in the source's list only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl EdgeDirection for Undirected {
    const DIRECTED: bool = false;
}

impl EdgeDirection for Directed {
    const DIRECTED: bool = true;
}

/// Built-in neighbor orderings.
///
/// Each policy combines a direction bit with a "by weight" bit; see
/// [`SortPolicy::from_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Ascending by neighbor key.
    KeyAscending,
    /// Descending by neighbor key.
    KeyDescending,
    /// Ascending by edge weight.
    WeightAscending,
    /// Descending by edge weight.
    WeightDescending,
}

impl SortPolicy {
    /// Bit selecting descending order.
    pub const DESCENDING: u8 = 0b01;
    /// Bit selecting weight instead of key.
    pub const BY_WEIGHT: u8 = 0b10;

    /// Builds a policy from its direction and "by weight" bits.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        match (bits & Self::BY_WEIGHT != 0, bits & Self::DESCENDING != 0) {
            (false, false) => Self::KeyAscending,
            (false, true) => Self::KeyDescending,
            (true, false) => Self::WeightAscending,
            (true, true) => Self::WeightDescending,
        }
    }

    /// Returns the bit encoding of this policy.
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Self::KeyAscending => 0,
            Self::KeyDescending => Self::DESCENDING,
            Self::WeightAscending => Self::BY_WEIGHT,
            Self::WeightDescending => Self::BY_WEIGHT | Self::DESCENDING,
        }
    }

    /// Returns true if this policy orders by weight.
    #[must_use]
    pub fn by_weight(self) -> bool {
        self.bits() & Self::BY_WEIGHT != 0
    }

    /// Returns true if this policy orders descending.
    #[must_use]
    pub fn descending(self) -> bool {
        self.bits() & Self::DESCENDING != 0
    }
}
