//! Error types for graph construction and algorithm runs.

use thiserror::Error;

/// Convenience alias for results carrying a [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error raised by graph construction or an algorithm run.
///
/// Every variant is recoverable at the call site: a driver processing many
/// graphs keeps going after one of them fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A graph needs at least one node.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// An edge endpoint does not name an existing node.
    #[error("edge ({u}, {v}) references a node outside 0..{node_count}")]
    EdgeOutOfRange {
        /// First endpoint of the offending edge.
        u: usize,
        /// Second endpoint of the offending edge.
        v: usize,
        /// Number of nodes in the graph under construction.
        node_count: usize,
    },

    /// Self-loops carry no spanning or cut information.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop {
        /// The node both endpoints name.
        node: usize,
    },

    /// At most one edge may join any unordered node pair.
    #[error("duplicate edge between {u} and {v}")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated pair.
        u: usize,
        /// Larger endpoint of the repeated pair.
        v: usize,
    },

    /// Weight accumulation requires finite values.
    #[error("non-finite weight {weight} on edge ({u}, {v})")]
    NonFiniteWeight {
        /// First endpoint of the offending edge.
        u: usize,
        /// Second endpoint of the offending edge.
        v: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// No spanning tree exists; only a forest or partial tree was reachable.
    #[error("graph is disconnected: no spanning tree over {node_count} nodes")]
    Disconnected {
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// A cut partitions the nodes into two non-empty sides.
    #[error("minimum cut requires at least two nodes, got {node_count}")]
    CutTooSmall {
        /// Number of nodes in the graph.
        node_count: usize,
    },
}
