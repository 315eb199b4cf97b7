//! Tests for neighbor ordering.

use std::cmp::Ordering;

use super::adjacency::UndirectedGraph;
use super::ordering::{NeighborOrdering, StoredOrder};
use super::types::{Neighbor, SortPolicy};
use crate::error::GraphError;

/// Hub node 0 connected to 3, 1, 2 with weights 0.5, 3.0, 2.0 (in that order).
fn build_star_graph() -> UndirectedGraph<u32> {
    let mut graph: UndirectedGraph<u32> = [0, 1, 2, 3].into();
    graph.insert_edge_weighted(&0, &3, 0.5).unwrap();
    graph.insert_edge_weighted(&0, &1, 3.0).unwrap();
    graph.insert_edge_weighted(&0, &2, 2.0).unwrap();
    graph
}

fn hub_keys(graph: &UndirectedGraph<u32>) -> Vec<u32> {
    graph
        .neighbors(&0)
        .unwrap()
        .iter()
        .map(|n| *n.key())
        .collect()
}

#[test]
fn test_default_is_insertion_order() {
    let graph = build_star_graph();
    assert_eq!(hub_keys(&graph), vec![3, 1, 2]);
}

#[test]
fn test_sort_policies() {
    let mut graph = build_star_graph();
    let cases = [
        (SortPolicy::KeyAscending, vec![1, 2, 3]),
        (SortPolicy::KeyDescending, vec![3, 2, 1]),
        (SortPolicy::WeightAscending, vec![3, 2, 1]),
        (SortPolicy::WeightDescending, vec![1, 2, 3]),
    ];
    for (policy, expected) in cases {
        graph.sort_neighbors(&0, &policy).unwrap();
        assert_eq!(hub_keys(&graph), expected, "policy {:?}", policy);
    }
}

#[test]
fn test_sort_persists_until_resorted() {
    let mut graph = build_star_graph();
    let sorted: Vec<u32> = graph
        .sorted_neighbors(&0, &SortPolicy::KeyDescending)
        .unwrap()
        .iter()
        .map(|n| *n.key())
        .collect();
    assert_eq!(sorted, vec![3, 2, 1]);

    // Plain reads observe the stored order.
    assert_eq!(hub_keys(&graph), vec![3, 2, 1]);
    graph.sort_neighbors(&0, &StoredOrder).unwrap();
    assert_eq!(hub_keys(&graph), vec![3, 2, 1]);
}

#[test]
fn test_custom_comparator() {
    let mut graph = build_star_graph();
    // Odd keys first, then by key.
    let odd_first = |a: &Neighbor<u32, f64>, b: &Neighbor<u32, f64>| {
        (a.key() % 2 == 0)
            .cmp(&(b.key() % 2 == 0))
            .then_with(|| a.key().cmp(b.key()))
    };
    graph.sort_neighbors(&0, &odd_first).unwrap();
    assert_eq!(hub_keys(&graph), vec![1, 3, 2]);
}

#[test]
fn test_sort_is_stable_for_equal_weights() {
    let mut graph: UndirectedGraph<u32> = [0, 1, 2, 3].into();
    graph.insert_edge_weighted(&0, &2, 1.0).unwrap();
    graph.insert_edge_weighted(&0, &3, 1.0).unwrap();
    graph.insert_edge_weighted(&0, &1, 0.0).unwrap();

    graph.sort_neighbors(&0, &SortPolicy::WeightAscending).unwrap();
    assert_eq!(hub_keys(&graph), vec![1, 2, 3]);
}

#[test]
fn test_sort_absent_node_fails() {
    let mut graph = build_star_graph();
    assert!(matches!(
        graph.sort_neighbors(&9, &SortPolicy::KeyAscending),
        Err(GraphError::NodeNotFound(_))
    ));
}

#[test]
fn test_arrange_on_slice() {
    let mut entries = vec![Neighbor::new('c', 1_u32), Neighbor::new('a', 3), Neighbor::new('b', 2)];
    SortPolicy::KeyAscending.arrange(&mut entries);
    assert_eq!(entries[0], Neighbor::new('a', 3));

    let by_weight_desc = |a: &Neighbor<char, u32>, b: &Neighbor<char, u32>| -> Ordering {
        b.weight().cmp(&a.weight())
    };
    by_weight_desc.arrange(&mut entries);
    let weights: Vec<u32> = entries.iter().map(Neighbor::weight).collect();
    assert_eq!(weights, vec![3, 2, 1]);
}
