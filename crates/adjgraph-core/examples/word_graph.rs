//! Builds a complete graph over a handful of words, weighting each edge by
//! the difference in word length, and logs a few queries.
//!
//! Run with: `RUST_LOG=debug cargo run --example word_graph`

use adjgraph_core::graph::{SortPolicy, UndirectedGraph};
use adjgraph_core::{GraphConfig, GraphError};
use tracing_subscriber::EnvFilter;

const WORDS: [&str; 7] = ["Hello", "people", "how", "are", "you", "doing", "!"];

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GraphConfig::load("adjgraph.toml")?;
    let mut graph: UndirectedGraph<&str> = UndirectedGraph::with_config(&config);
    for word in WORDS {
        graph.insert_node(word)?;
    }

    for (i, a) in WORDS.iter().enumerate() {
        for b in &WORDS[i + 1..] {
            #[allow(clippy::cast_precision_loss)]
            let weight = a.len().abs_diff(b.len()) as f64;
            graph.insert_edge_weighted(a, b, weight)?;
        }
    }
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        weighted = graph.is_weighted(),
        "Built word graph"
    );

    let closest = graph.sorted_neighbors(&"people", &SortPolicy::WeightAscending)?;
    if let Some(first) = closest.first() {
        tracing::info!(
            word = "people",
            closest = first.key(),
            weight = first.weight(),
            "Closest by length"
        );
    }

    graph.remove_edge(&"Hello", &"!")?;
    let path = graph.bfs(&"Hello", &"!")?;
    tracing::info!(?path, "Hop path after removing the direct edge");

    graph.remove_node(&"people")?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Removed a node"
    );
    Ok(())
}
