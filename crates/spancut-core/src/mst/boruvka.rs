//! Borůvka's algorithm: per-round cheapest outgoing edge per component.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::result::SpanningTree;
use crate::union_find::UnionFind;

/// Computes a minimum spanning tree by repeated component merging.
///
/// Each round makes one pass over all edges, recording for every component
/// the cheapest edge that leaves it (strict comparison, so the first edge
/// seen wins ties), then merges along every recorded edge. The same edge
/// can be the pick of both of its components; the second union is a no-op
/// and the edge is accepted once. Every component that has an outgoing edge
/// merges, so the component count at least halves per round and a connected
/// graph finishes in `O(log V)` rounds of `O(E)` work.
///
/// A round that merges nothing while several components remain means a
/// component has no outgoing edge at all: the graph is disconnected, and
/// the guard turns what would be an endless loop into an error.
pub fn boruvka(graph: &Graph) -> Result<SpanningTree> {
    let node_count = graph.node_count();
    let mut components = UnionFind::new(node_count);
    let mut tree = SpanningTree::with_capacity(node_count.saturating_sub(1));
    let mut cheapest: Vec<Option<usize>> = vec![None; node_count];
    let mut round = 0u32;

    while components.set_count() > 1 {
        round += 1;
        for slot in &mut cheapest {
            *slot = None;
        }

        for (index, edge) in graph.edges().iter().enumerate() {
            let comp_u = components.find(edge.u);
            let comp_v = components.find(edge.v);
            if comp_u == comp_v {
                continue;
            }
            for comp in [comp_u, comp_v] {
                match cheapest[comp] {
                    Some(best) if graph.edge(best).weight <= edge.weight => {}
                    _ => cheapest[comp] = Some(index),
                }
            }
        }

        let before = components.set_count();
        for comp in 0..node_count {
            let Some(index) = cheapest[comp] else {
                continue;
            };
            let edge = graph.edge(index);
            if components.union(edge.u, edge.v) {
                tree.push(edge.u, edge.v, edge.weight);
            }
        }

        if components.set_count() == before {
            return Err(GraphError::Disconnected { node_count });
        }
        tracing::trace!(
            "boruvka round {}: {} components remain",
            round,
            components.set_count()
        );
    }

    tracing::debug!(
        "boruvka: {} rounds, {} edges, total weight {}",
        round,
        tree.edge_count(),
        tree.total_weight
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let graph = Graph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap();
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.total_weight, 3.0);
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_single_round_on_star() {
        // every leaf's cheapest edge is its spoke; one round suffices
        let graph = Graph::new(
            5,
            [(0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0), (0, 4, 4.0)],
        )
        .unwrap();
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree.total_weight, 10.0);
    }

    #[test]
    fn test_shared_cheapest_edge_accepted_once() {
        // the weight-1 edge is cheapest for both of its endpoints
        let graph = Graph::new(2, [(0, 1, 1.0)]).unwrap();
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn test_disconnected_stops_with_error() {
        let graph = Graph::new(4, [(0, 1, 5.0), (2, 3, 7.0)]).unwrap();
        assert_eq!(
            boruvka(&graph).unwrap_err(),
            GraphError::Disconnected { node_count: 4 }
        );
    }

    #[test]
    fn test_isolated_node_stops_with_error() {
        let graph = Graph::new(3, [(0, 1, 1.0)]).unwrap();
        assert_eq!(
            boruvka(&graph).unwrap_err(),
            GraphError::Disconnected { node_count: 3 }
        );
    }

    #[test]
    fn test_tied_weights_terminate() {
        // equal weights must not stall the round-halving guarantee
        let graph = Graph::new(
            4,
            [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
        )
        .unwrap();
        let tree = boruvka(&graph).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight, 3.0);
    }
}
