//! Minimum spanning tree algorithms.
//!
//! Four strategies over the same [`Graph`](crate::graph::Graph) contract:
//!
//! - [`kruskal`] - greedy ascending scan with union-find cycle detection, `O(E log E)`
//! - [`prim`] - frontier expansion with a lazy-deletion heap, `O(E log E)`
//! - [`boruvka`] - per-round cheapest outgoing edge per component, `O(E log V)`
//! - [`reverse_delete`] - heaviest-first elimination guarded by connectivity
//!   checks, `O(E(V + E))`
//!
//! All return a [`SpanningTree`](crate::result::SpanningTree) with edges in
//! acceptance order, or
//! [`GraphError::Disconnected`](crate::error::GraphError::Disconnected) when
//! no spanning tree exists. A single-node graph yields the empty tree of
//! weight zero.

mod boruvka;
mod kruskal;
mod prim;
mod reverse_delete;

pub use boruvka::boruvka;
pub use kruskal::kruskal;
pub use prim::prim;
pub use reverse_delete::reverse_delete;
