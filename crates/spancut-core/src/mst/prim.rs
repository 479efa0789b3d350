//! Prim's algorithm: frontier expansion with a lazy-deletion binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::result::SpanningTree;

/// Frontier entry ordered as a min-heap: lightest weight first, edge index
/// breaking ties. `BinaryHeap` is a max-heap, so `Ord` is reversed.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    weight: f64,
    edge: usize,
    from: usize,
    to: usize,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

/// Grows a minimum spanning tree outward from node 0.
///
/// The heap holds frontier edges and is never purged: entries whose far
/// endpoint is already visited are stale and dropped on pop (lazy
/// deletion), which is why the heap can briefly hold more entries than the
/// frontier has edges. A seen-edge bitset keeps each edge from entering the
/// heap twice, once per endpoint. If the heap drains before every node is
/// visited, node 0's component does not span the graph. `O(E log E)`.
pub fn prim(graph: &Graph) -> Result<SpanningTree> {
    let node_count = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut seen_edges = FixedBitSet::with_capacity(graph.edge_count());
    let mut heap: BinaryHeap<FrontierEdge> = BinaryHeap::new();
    let mut tree = SpanningTree::with_capacity(node_count.saturating_sub(1));

    visited.insert(0);
    let mut visited_count = 1;
    push_frontier(graph, 0, &visited, &mut seen_edges, &mut heap);

    while let Some(entry) = heap.pop() {
        if visited.contains(entry.to) {
            // stale entry left behind by lazy deletion
            continue;
        }
        visited.insert(entry.to);
        visited_count += 1;
        tree.push(entry.from, entry.to, entry.weight);
        if visited_count == node_count {
            break;
        }
        push_frontier(graph, entry.to, &visited, &mut seen_edges, &mut heap);
    }

    if visited_count < node_count {
        return Err(GraphError::Disconnected { node_count });
    }
    tracing::debug!(
        "prim: {} edges, total weight {}",
        tree.edge_count(),
        tree.total_weight
    );
    Ok(tree)
}

fn push_frontier(
    graph: &Graph,
    node: usize,
    visited: &FixedBitSet,
    seen_edges: &mut FixedBitSet,
    heap: &mut BinaryHeap<FrontierEdge>,
) {
    for (neighbor, edge_index) in graph.neighbors(node) {
        if visited.contains(neighbor) || seen_edges.contains(edge_index) {
            continue;
        }
        seen_edges.insert(edge_index);
        heap.push(FrontierEdge {
            weight: graph.edge(edge_index).weight,
            edge: edge_index,
            from: node,
            to: neighbor,
        });
    }
}
