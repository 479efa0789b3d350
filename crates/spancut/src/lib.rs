//! # Spancut
//!
//! Minimum spanning trees and randomized minimum cuts over weighted
//! undirected graphs.
//!
//! Five classical algorithms share one [`Graph`] contract:
//!
//! | Function | Strategy | Cost |
//! | -------- | -------- | ---- |
//! | [`kruskal`] | greedy ascending scan + union-find | O(E log E) |
//! | [`prim`] | frontier expansion, lazy-deletion heap | O(E log E) |
//! | [`boruvka`] | per-round component merging | O(E log V) |
//! | [`reverse_delete`] | heaviest-first elimination | O(E(V + E)) |
//! | [`karger`] / [`karger_best_of`] | randomized contraction | O(V E) per trial |
//!
//! Every MST function returns the accepted edges in emission order (the
//! order drives external animation) plus the total weight, and reports a
//! disconnected input as [`GraphError::Disconnected`] instead of a partial
//! tree. [`karger`] is a single Monte-Carlo trial; use [`karger_best_of`]
//! when you need confidence in the minimum.
//!
//! ## Quick Start
//!
//! ```rust
//! use spancut::{Graph, karger_best_of, kruskal};
//!
//! let graph = Graph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
//!
//! let tree = kruskal(&graph)?;
//! assert_eq!(tree.total_weight, 3.0);
//!
//! let cut = karger_best_of(&graph, 64, 7)?;
//! assert_eq!(cut.cut_weight, 3.0);
//! # Ok::<(), spancut::GraphError>(())
//! ```

// Re-export the algorithm entry points
pub use spancut_core::{boruvka, karger, karger_best_of, kruskal, prim, reverse_delete};

// Re-export the data model and result carriers
pub use spancut_core::{
    ContractionStep, CutEdge, Edge, Graph, GraphError, MinCut, Result, SpanningTree, TreeEdge,
};

// Utilities the algorithms share, useful to callers building their own
pub use spancut_core::UnionFind;
pub use spancut_core::connectivity::{ConnectivityChecker, is_connected};
