//! Weighted undirected graph model.
//!
//! Adjacency-list representation: one edge record per unordered node pair
//! plus per-node lists of incident edge indices. A graph is built once by
//! the caller and is read-only afterwards; algorithms that need a shrinking
//! edge set work on active-edge bitsets or relabelled copies instead of
//! mutating the graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GraphError, Result};
use crate::hash::FxHashSet;

/// A weighted undirected edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight; validated finite at graph construction.
    pub weight: f64,
}

impl Edge {
    /// Returns the endpoint opposite to `node`.
    ///
    /// `node` must be one of the edge's endpoints.
    pub fn other(&self, node: usize) -> usize {
        if node == self.u { self.v } else { self.u }
    }
}

/// Immutable weighted undirected graph over nodes `0..node_count`.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<SmallVec<[usize; 4]>>,
}

impl Graph {
    /// Builds a graph from a node count and `(u, v, weight)` triples.
    ///
    /// Edge order is preserved and observable: the MST algorithms break
    /// weight ties by enumeration order.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] when `node_count` is zero
    /// - [`GraphError::EdgeOutOfRange`] when an endpoint is `>= node_count`
    /// - [`GraphError::SelfLoop`] when both endpoints are the same node
    /// - [`GraphError::DuplicateEdge`] when an unordered pair repeats
    /// - [`GraphError::NonFiniteWeight`] when a weight is NaN or infinite
    pub fn new(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut graph = Self {
            node_count,
            edges: Vec::new(),
            adjacency: vec![SmallVec::new(); node_count],
        };
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();

        for (u, v, weight) in edges {
            if u >= node_count || v >= node_count {
                return Err(GraphError::EdgeOutOfRange { u, v, node_count });
            }
            if u == v {
                return Err(GraphError::SelfLoop { node: u });
            }
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { u, v, weight });
            }
            let key = (u.min(v), u.max(v));
            if !seen.insert(key) {
                return Err(GraphError::DuplicateEdge { u: key.0, v: key.1 });
            }

            let index = graph.edges.len();
            graph.edges.push(Edge { u, v, weight });
            graph.adjacency[u].push(index);
            graph.adjacency[v].push(index);
        }

        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in enumeration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge at `index`.
    ///
    /// Panics when `index >= edge_count()`.
    pub fn edge(&self, index: usize) -> Edge {
        self.edges[index]
    }

    /// Indices of the edges incident to `node`.
    pub fn incident_edges(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Iterates over `(neighbor, edge index)` pairs for `node`.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency[node]
            .iter()
            .map(move |&index| (self.edges[index].other(node), index))
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }
}
