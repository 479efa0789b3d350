//! Kruskal's algorithm: greedy ascending scan with union-find cycle
//! detection.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::result::SpanningTree;
use crate::union_find::UnionFind;

/// Computes a minimum spanning tree by scanning edges in ascending weight
/// order and accepting each edge that joins two distinct components.
///
/// The sort is stable, so equal weights keep their enumeration order and
/// the result is deterministic. The scan covers every edge; the accepted
/// count is compared against `n - 1` afterwards, which is how a
/// disconnected graph (spanning forest) is detected. `O(E log E)`.
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    let node_count = graph.node_count();

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by(|&a, &b| graph.edge(a).weight.total_cmp(&graph.edge(b).weight));

    let mut components = UnionFind::new(node_count);
    let mut tree = SpanningTree::with_capacity(node_count.saturating_sub(1));
    for index in order {
        let edge = graph.edge(index);
        if components.union(edge.u, edge.v) {
            tree.push(edge.u, edge.v, edge.weight);
        }
    }

    if tree.edge_count() + 1 < node_count {
        return Err(GraphError::Disconnected { node_count });
    }
    tracing::debug!(
        "kruskal: {} edges, total weight {}",
        tree.edge_count(),
        tree.total_weight
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_edges_in_ascending_weight_order() {
        let graph = Graph::new(
            4,
            [(2, 3, 4.0), (0, 1, 1.0), (1, 2, 3.0), (0, 3, 2.0)],
        )
        .unwrap();
        let tree = kruskal(&graph).unwrap();
        let weights: Vec<f64> = tree.edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
        assert_eq!(tree.total_weight, 6.0);
    }

    #[test]
    fn test_ties_break_by_enumeration_order() {
        // both weight-2 edges close the same cycle; the first enumerated wins
        let graph = Graph::new(3, [(1, 2, 2.0), (0, 2, 2.0), (0, 1, 1.0)]).unwrap();
        let tree = kruskal(&graph).unwrap();
        assert_eq!(tree.edges[0].weight, 1.0);
        assert_eq!((tree.edges[1].u, tree.edges[1].v), (1, 2));
    }

    #[test]
    fn test_disconnected_reports_error() {
        let graph = Graph::new(4, [(0, 1, 5.0), (2, 3, 7.0)]).unwrap();
        assert_eq!(
            kruskal(&graph).unwrap_err(),
            GraphError::Disconnected { node_count: 4 }
        );
    }

    #[test]
    fn test_cycle_edge_skipped() {
        let graph = Graph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap();
        let tree = kruskal(&graph).unwrap();
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.edges.iter().all(|e| e.weight < 3.0));
    }
}
