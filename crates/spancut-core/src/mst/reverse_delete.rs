//! Reverse-delete: heaviest-first edge elimination guarded by connectivity
//! checks.

use fixedbitset::FixedBitSet;

use crate::connectivity::ConnectivityChecker;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::result::SpanningTree;

/// Computes a minimum spanning tree by deleting edges heaviest-first.
///
/// Works on an active-edge bitset rather than a mutable graph copy: each
/// edge is deactivated once, in descending weight order (ties keep their
/// enumeration order), and restored into the tree only when its removal
/// disconnects the remaining active edges. The per-edge connectivity check
/// makes this the most expensive of the four strategies, `O(E(V + E))`.
///
/// The input must be connected; the check before any removal reports
/// [`GraphError::Disconnected`] otherwise.
pub fn reverse_delete(graph: &Graph) -> Result<SpanningTree> {
    let node_count = graph.node_count();
    let mut active = FixedBitSet::with_capacity(graph.edge_count());
    active.insert_range(..);
    let mut checker = ConnectivityChecker::new(graph);

    if !checker.is_connected(&active) {
        return Err(GraphError::Disconnected { node_count });
    }

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by(|&a, &b| graph.edge(b).weight.total_cmp(&graph.edge(a).weight));

    let mut tree = SpanningTree::with_capacity(node_count.saturating_sub(1));
    for index in order {
        active.set(index, false);
        if !checker.is_connected(&active) {
            // essential edge: reinsert and accept
            active.set(index, true);
            let edge = graph.edge(index);
            tree.push(edge.u, edge.v, edge.weight);
        }
    }

    tracing::debug!(
        "reverse_delete: {} edges, total weight {}",
        tree.edge_count(),
        tree.total_weight
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_drops_heaviest() {
        let graph = Graph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap();
        let tree = reverse_delete(&graph).unwrap();
        assert_eq!(tree.total_weight, 3.0);
        // the weight-3 edge closes a cycle and is removed first
        assert!(tree.edges.iter().all(|e| e.weight < 3.0));
    }

    #[test]
    fn test_equal_weight_cycle_keeps_three_edges() {
        // any one cycle edge can go; exactly three survive
        let graph = Graph::new(
            4,
            [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
        )
        .unwrap();
        let tree = reverse_delete(&graph).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight, 3.0);
    }

    #[test]
    fn test_acceptance_order_is_heaviest_first() {
        let graph = Graph::new(
            4,
            [(0, 1, 4.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 1.0)],
        )
        .unwrap();
        let tree = reverse_delete(&graph).unwrap();
        let weights: Vec<f64> = tree.edges.iter().map(|e| e.weight).collect();
        // weight 4 closes the cycle and is removed; survivors accepted
        // heaviest first as each later removal would disconnect the path
        assert_eq!(weights, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_disconnected_fails_before_any_removal() {
        let graph = Graph::new(4, [(0, 1, 5.0), (2, 3, 7.0)]).unwrap();
        assert_eq!(
            reverse_delete(&graph).unwrap_err(),
            GraphError::Disconnected { node_count: 4 }
        );
    }

    #[test]
    fn test_tree_input_keeps_every_edge() {
        let graph = Graph::new(4, [(0, 1, 1.0), (1, 2, 2.0), (1, 3, 3.0)]).unwrap();
        let tree = reverse_delete(&graph).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight, 6.0);
    }
}
