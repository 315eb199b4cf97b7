//! Tests for the adjacency store and edge mutation.

use std::collections::HashMap;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::adjacency::{DirectedGraph, Graph, UndirectedGraph};
use super::store::NeighborList;
use super::types::{Directed, Neighbor, Undirected};
use crate::config::GraphConfig;
use crate::error::GraphError;

fn keys<K: Clone, W>(neighbors: &[Neighbor<K, W>]) -> Vec<K> {
    neighbors.iter().map(|n| n.key().clone()).collect()
}

/// A - B - C (undirected)
fn build_path_graph() -> UndirectedGraph<&'static str> {
    let mut graph: UndirectedGraph<&str> = ["A", "B", "C"].into();
    graph.insert_edge(&"A", &"B").unwrap();
    graph.insert_edge(&"B", &"C").unwrap();
    graph
}

// ── Nodes ──────────────────────────────────────────────────────────

#[test]
fn test_insert_and_contains_node() {
    let mut graph: UndirectedGraph<u32> = Graph::new();
    assert!(graph.is_empty());
    graph.insert_node(1).unwrap();
    assert!(graph.contains_node(&1));
    assert!(!graph.contains_node(&2));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.size(), 1);
    assert!(graph.neighbors(&1).unwrap().is_empty());
}

#[test]
fn test_insert_duplicate_node_fails() {
    let mut graph: UndirectedGraph<u32> = [1].into();
    let err = graph.insert_node(1).unwrap_err();
    assert_eq!(err, GraphError::NodeExists("1".to_string()));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_remove_absent_node_fails() {
    let mut graph: UndirectedGraph<u32> = [1].into();
    assert!(matches!(
        graph.remove_node(&2),
        Err(GraphError::NodeNotFound(_))
    ));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_remove_node_cascades_undirected() {
    let mut graph = build_path_graph();
    assert_eq!(graph.edge_count(), 4);

    graph.remove_node(&"B").unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors(&"A").unwrap().is_empty());
    assert!(graph.neighbors(&"C").unwrap().is_empty());
}

#[test]
fn test_remove_node_cascades_directed() {
    let mut graph: DirectedGraph<u32> = [1, 2, 3].into();
    graph.insert_edge(&1, &2).unwrap();
    graph.insert_edge(&2, &3).unwrap();
    graph.insert_edge(&3, &2).unwrap();
    graph.insert_edge(&1, &3).unwrap();
    assert_eq!(graph.edge_count(), 4);

    graph.remove_node(&2).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(keys(graph.neighbors(&1).unwrap()), vec![3]);
    assert!(graph.neighbors(&3).unwrap().is_empty());
}

#[test]
fn test_from_iter_collapses_duplicates() {
    let graph: UndirectedGraph<u32> = vec![3, 1, 3, 2].into_iter().collect();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_try_from_nodes_rejects_duplicates() {
    let result = UndirectedGraph::<u32>::try_from_nodes([1, 2, 1]);
    assert!(matches!(result, Err(GraphError::NodeExists(_))));

    let graph = UndirectedGraph::<u32>::try_from_nodes(1..=4).unwrap();
    assert_eq!(graph.node_count(), 4);
}

// ── Edges ──────────────────────────────────────────────────────────

#[test]
fn test_undirected_edge_is_symmetric() {
    let mut graph: UndirectedGraph<&str> = ["A", "B"].into();
    graph.insert_edge_weighted(&"A", &"B", 2.5).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors(&"A").unwrap(), &[Neighbor::new("B", 2.5)]);
    assert_eq!(graph.neighbors(&"B").unwrap(), &[Neighbor::new("A", 2.5)]);
    assert!(graph.contains_edge(&"A", &"B"));
    assert!(graph.contains_edge(&"B", &"A"));
}

#[test]
fn test_directed_edge_is_asymmetric() {
    let mut graph: DirectedGraph<&str> = ["A", "B"].into();
    graph.insert_edge_weighted(&"A", &"B", 2.5).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(keys(graph.neighbors(&"A").unwrap()), vec!["B"]);
    assert!(graph.neighbors(&"B").unwrap().is_empty());
    assert!(graph.contains_edge(&"A", &"B"));
    assert!(!graph.contains_edge(&"B", &"A"));

    // The reverse direction is a distinct edge.
    graph.insert_edge(&"B", &"A").unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_insert_edge_missing_node_fails() {
    let mut graph: UndirectedGraph<u32> = [1].into();
    assert!(matches!(
        graph.insert_edge(&1, &2),
        Err(GraphError::NodeNotFound(_))
    ));
    assert!(matches!(
        graph.insert_edge(&2, &1),
        Err(GraphError::NodeNotFound(_))
    ));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors(&1).unwrap().is_empty());
}

#[test]
fn test_insert_duplicate_edge_fails() {
    let mut graph = build_path_graph();
    assert!(matches!(
        graph.insert_edge(&"A", &"B"),
        Err(GraphError::EdgeExists(..))
    ));
    assert!(matches!(
        graph.insert_edge(&"B", &"A"),
        Err(GraphError::EdgeExists(..))
    ));
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.degree(&"A").unwrap(), 1);
}

#[test]
fn test_remove_edge_round_trip() {
    let mut graph = build_path_graph();
    graph.insert_edge(&"A", &"C").unwrap();
    assert_eq!(graph.edge_count(), 6);

    graph.remove_edge(&"C", &"A").unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(keys(graph.neighbors(&"A").unwrap()), vec!["B"]);
    assert_eq!(keys(graph.neighbors(&"C").unwrap()), vec!["B"]);
}

#[test]
fn test_remove_directed_edge_round_trip() {
    let mut graph: DirectedGraph<u32> = [1, 2].into();
    graph.insert_edge(&1, &2).unwrap();
    graph.insert_edge(&2, &1).unwrap();

    graph.remove_edge(&1, &2).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.neighbors(&1).unwrap().is_empty());
    assert_eq!(keys(graph.neighbors(&2).unwrap()), vec![1]);
}

#[test]
fn test_remove_absent_edge_fails() {
    let mut graph = build_path_graph();
    assert_eq!(
        graph.remove_edge(&"A", &"C"),
        Err(GraphError::EdgeNotFound("\"A\"".to_string(), "\"C\"".to_string()))
    );
    assert!(matches!(
        graph.remove_edge(&"A", &"Z"),
        Err(GraphError::NodeNotFound(_))
    ));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_self_loops() {
    let mut undirected: UndirectedGraph<u32> = [1].into();
    undirected.insert_edge(&1, &1).unwrap();
    assert_eq!(undirected.edge_count(), 2);
    assert_eq!(undirected.degree(&1).unwrap(), 2);
    assert!(undirected.insert_edge(&1, &1).is_err());
    undirected.remove_edge(&1, &1).unwrap();
    assert_eq!(undirected.edge_count(), 0);
    assert_eq!(undirected.degree(&1).unwrap(), 0);

    let mut directed: DirectedGraph<u32> = [1].into();
    directed.insert_edge(&1, &1).unwrap();
    assert_eq!(directed.edge_count(), 1);
    directed.remove_node(&1).unwrap();
    assert_eq!(directed.edge_count(), 0);
}

#[test]
fn test_edge_weight_lookup() {
    let mut graph: DirectedGraph<u32, i64> = [1, 2, 3].into();
    graph.insert_edge_weighted(&1, &2, -4).unwrap();

    assert_eq!(graph.edge_weight(&1, &2).unwrap(), -4);
    assert!(matches!(
        graph.edge_weight(&2, &1),
        Err(GraphError::EdgeNotFound(..))
    ));
    assert!(matches!(
        graph.edge_weight(&1, &9),
        Err(GraphError::NodeNotFound(_))
    ));
}

#[test]
fn test_weighted_flag() {
    let mut graph: UndirectedGraph<u32> = [1, 2, 3].into();
    graph.insert_edge(&1, &2).unwrap();
    graph.insert_edge_weighted(&2, &3, 1.0).unwrap();
    assert!(!graph.is_weighted());

    graph.remove_edge(&2, &3).unwrap();
    graph.insert_edge_weighted(&2, &3, 0.25).unwrap();
    assert!(graph.is_weighted());

    // Stays set once observed.
    graph.remove_edge(&2, &3).unwrap();
    assert!(graph.is_weighted());
}

#[test]
fn test_neighbors_of_absent_node_fails() {
    let graph = build_path_graph();
    assert!(matches!(
        graph.neighbors(&"Z"),
        Err(GraphError::NodeNotFound(_))
    ));
    assert!(graph.degree(&"Z").is_err());
}

#[test]
fn test_clear_resets_counters() {
    let mut graph = build_path_graph();
    graph.insert_edge_weighted(&"A", &"C", 3.0).unwrap();
    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.is_weighted());

    graph.insert_node("A").unwrap();
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_is_directed() {
    assert!(DirectedGraph::<u32>::new().is_directed());
    assert!(!UndirectedGraph::<u32>::new().is_directed());
}

// ── Containers and config ──────────────────────────────────────────

#[test]
fn test_index_map_keeps_insertion_order() {
    let mut graph: Graph<u32, f64, Undirected, IndexMap<u32, NeighborList<u32, f64>>> =
        [5, 1, 3].into();
    graph.insert_node(0).unwrap();
    graph.remove_node(&1).unwrap();
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![5, 3, 0]);
}

#[test]
fn test_hash_map_with_fx_hasher() {
    let mut graph: Graph<
        String,
        f32,
        Directed,
        HashMap<String, NeighborList<String, f32>, FxBuildHasher>,
    > = Graph::new();
    graph.insert_node("x".to_string()).unwrap();
    graph.insert_node("y".to_string()).unwrap();
    graph
        .insert_edge_weighted(&"x".to_string(), &"y".to_string(), 0.5)
        .unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_weighted());
    assert_eq!(graph.nodes().count(), 2);
}

#[test]
fn test_with_config() {
    let config = GraphConfig::new(128, 4);
    let mut graph: Graph<u32, f64, Undirected, IndexMap<u32, NeighborList<u32, f64>>> =
        Graph::with_config(&config);
    assert!(graph.is_empty());

    graph.insert_node(1).unwrap();
    graph.insert_node(2).unwrap();
    graph.insert_edge(&1, &2).unwrap();
    assert_eq!(graph.edge_count(), 2);
}
