//! BFS reachability over an active-edge subset.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

/// Reusable BFS over the subgraph induced by an active-edge bitset.
///
/// Reverse-Delete runs one connectivity check per edge; keeping the visited
/// set and queue between calls avoids reallocating them `O(E)` times.
pub struct ConnectivityChecker<'a> {
    graph: &'a Graph,
    visited: FixedBitSet,
    queue: VecDeque<usize>,
}

impl<'a> ConnectivityChecker<'a> {
    /// Creates a checker with scratch space sized to `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.node_count()),
            queue: VecDeque::new(),
        }
    }

    /// Whether every node is reachable from node 0 using only active edges.
    pub fn is_connected(&mut self, active: &FixedBitSet) -> bool {
        self.reachable_count(active) == self.graph.node_count()
    }

    /// Number of nodes reachable from node 0 using only active edges.
    ///
    /// `O(V + E)` per call.
    pub fn reachable_count(&mut self, active: &FixedBitSet) -> usize {
        self.visited.clear();
        self.queue.clear();
        self.visited.insert(0);
        self.queue.push_back(0);
        let mut reached = 1;

        while let Some(node) = self.queue.pop_front() {
            for &edge_index in self.graph.incident_edges(node) {
                if !active.contains(edge_index) {
                    continue;
                }
                let next = self.graph.edge(edge_index).other(node);
                if !self.visited.contains(next) {
                    self.visited.insert(next);
                    self.queue.push_back(next);
                    reached += 1;
                }
            }
        }

        reached
    }
}

/// Whether the graph is connected with every edge active.
pub fn is_connected(graph: &Graph) -> bool {
    let mut active = FixedBitSet::with_capacity(graph.edge_count());
    active.insert_range(..);
    ConnectivityChecker::new(graph).is_connected(&active)
}
