//! Error types for adjgraph-core.

use thiserror::Error;

/// Graph error types.
///
/// Keys are rendered with their `Debug` representation so the error stays
/// independent of the graph's key type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this key is already present.
    #[error("Node already exists: {0}")]
    NodeExists(String),

    /// The operation referenced a node that is not present.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The edge between these nodes is already present.
    #[error("Edge already exists: {0} -> {1}")]
    EdgeExists(String, String),

    /// The edge between these nodes is not present.
    #[error("Edge not found: {0} -> {1}")]
    EdgeNotFound(String, String),

    /// Configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphError {
    pub(crate) fn node_exists<K: std::fmt::Debug>(key: &K) -> Self {
        Self::NodeExists(format!("{key:?}"))
    }

    pub(crate) fn node_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Self::NodeNotFound(format!("{key:?}"))
    }

    pub(crate) fn edge_exists<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        Self::EdgeExists(format!("{from:?}"), format!("{to:?}"))
    }

    pub(crate) fn edge_not_found<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        Self::EdgeNotFound(format!("{from:?}"), format!("{to:?}"))
    }

    /// Returns true for `NodeNotFound` and `EdgeNotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound(..))
    }

    /// Returns true for `NodeExists` and `EdgeExists`.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::NodeExists(_) | Self::EdgeExists(..))
    }
}

impl From<figment::Error> for GraphError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
