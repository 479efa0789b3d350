//! Result carriers handed back to callers and the external visualization
//! layer. All types are plain data and serializable.

use serde::{Deserialize, Serialize};

/// An accepted spanning-tree edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    /// Endpoint on the side the algorithm reached first, where meaningful.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: f64,
}

/// A complete spanning tree, edges in acceptance order.
///
/// The order is part of the contract: external animation replays it step by
/// step. A value of this type always spans the graph; a partial tree never
/// escapes an algorithm — it turns into [`GraphError::Disconnected`]
/// instead.
///
/// [`GraphError::Disconnected`]: crate::error::GraphError::Disconnected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// Accepted edges in the order the algorithm emitted them.
    pub edges: Vec<TreeEdge>,
    /// Sum of accepted edge weights.
    pub total_weight: f64,
}

impl SpanningTree {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, u: usize, v: usize, weight: f64) {
        self.edges.push(TreeEdge { u, v, weight });
        self.total_weight += weight;
    }

    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree holds no edges (single-node graph).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// An edge of the contracted multigraph.
///
/// Endpoints are supernode labels; every label is an original node id that
/// survived the merges so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutEdge {
    /// First supernode.
    pub u: usize,
    /// Second supernode.
    pub v: usize,
    /// Edge weight.
    pub weight: f64,
}

/// One contraction of the Karger run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractionStep {
    /// Supernode that survives the merge.
    pub kept: usize,
    /// Supernode absorbed into `kept`.
    pub absorbed: usize,
    /// Full edge multiset immediately after this contraction, self-loops
    /// dropped and parallel edges preserved.
    pub edges: Vec<CutEdge>,
}

/// Outcome of one Karger contraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinCut {
    /// The contraction steps in execution order.
    pub steps: Vec<ContractionStep>,
    /// Edges crossing the final two-supernode partition.
    pub cut_edges: Vec<CutEdge>,
    /// Sum of crossing edge weights.
    pub cut_weight: f64,
}
