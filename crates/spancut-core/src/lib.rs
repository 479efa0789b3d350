//! # spancut-core
//!
//! Core layer for Spancut: the graph model, shared utilities, and the five
//! algorithms — Borůvka, Kruskal, Prim, Reverse-Delete, and Karger
//! contraction.
//!
//! ## Modules
//!
//! - [`graph`] - Weighted undirected graph model (adjacency lists)
//! - [`union_find`] - Disjoint-set structure with path compression
//! - [`connectivity`] - BFS reachability over active-edge subsets
//! - [`mst`] - Minimum spanning tree algorithms
//! - [`cut`] - Randomized minimum cut via edge contraction
//! - [`result`] - Result carriers (spanning trees, cuts, step traces)
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connectivity;
pub mod cut;
pub mod error;
pub mod graph;
mod hash;
pub mod mst;
pub mod result;
pub mod union_find;

// Re-export the algorithm entry points and commonly used types
pub use cut::{karger, karger_best_of};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph};
pub use mst::{boruvka, kruskal, prim, reverse_delete};
pub use result::{ContractionStep, CutEdge, MinCut, SpanningTree, TreeEdge};
pub use union_find::UnionFind;
