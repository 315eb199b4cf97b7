//! Graph configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional TOML
//! file, then `ADJGRAPH_`-prefixed environment variables.
//!
//! ```toml
//! node_capacity = 1024
//! neighbor_capacity = 8
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ADJGRAPH_";

/// Allocation hints applied when a graph is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of nodes to pre-allocate room for, when the container supports it.
    pub node_capacity: usize,
    /// Reserved slots in each newly inserted node's neighbor list.
    pub neighbor_capacity: usize,
}

impl GraphConfig {
    /// Creates a config with explicit capacities.
    #[must_use]
    pub fn new(node_capacity: usize, neighbor_capacity: usize) -> Self {
        Self {
            node_capacity,
            neighbor_capacity,
        }
    }

    /// Loads defaults, then `path` (if it exists), then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` if a layer contains malformed values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::figment()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        tracing::debug!(?config, path = %path.as_ref().display(), "Loaded graph config");
        Ok(config)
    }

    /// Parses an inline TOML document layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::figment().merge(Toml::string(toml)).extract()?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }
}
