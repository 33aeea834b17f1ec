// src/graph/rank/graph.rs
//! The directed graph structure: dual adjacency indexes over string labels.

use std::collections::HashMap;

use super::vector::RankVector;
use crate::error::Result;

/// A directed multigraph indexed both ways.
///
/// Every label present in `out_degree` is also present in `in_adjacency` and
/// vice versa. The indexes are only mutated through [`RankGraph::insert_edge`].
#[derive(Debug, Clone, Default)]
pub struct RankGraph {
    /// Label -> number of edges leaving it (parallel edges counted).
    pub(crate) out_degree: HashMap<String, u32>,
    /// Label -> sources of its incoming edges, in insertion order.
    pub(crate) in_adjacency: HashMap<String, Vec<String>>,
    pub(crate) edges: usize,
}

impl RankGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by inserting each edge in order.
    #[must_use]
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.insert_edge(from.as_ref(), to.as_ref());
        }
        graph
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Repeated pairs and self-loops are kept; both change the ranks.
    pub fn insert_edge(&mut self, from: &str, to: &str) {
        *self.out_degree.entry(from.to_string()).or_insert(0) += 1;
        self.in_adjacency
            .entry(to.to_string())
            .or_default()
            .push(from.to_string());

        // Reciprocal entries keep both key sets identical.
        self.out_degree.entry(to.to_string()).or_insert(0);
        self.in_adjacency.entry(from.to_string()).or_default();

        self.edges += 1;
    }

    /// Number of distinct labels seen as either endpoint.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.in_adjacency.len()
    }

    /// Number of inserted edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_adjacency.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.in_adjacency.contains_key(label)
    }

    /// Out-degree of `label`, or `None` if it never appeared in an edge.
    #[must_use]
    pub fn out_degree(&self, label: &str) -> Option<u32> {
        self.out_degree.get(label).copied()
    }

    /// Sources pointing at `label`, one entry per edge.
    #[must_use]
    pub fn in_sources(&self, label: &str) -> Option<&[String]> {
        self.in_adjacency.get(label).map(Vec::as_slice)
    }

    /// All labels in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<&str> {
        super::queries::sorted_vertices(self)
    }

    /// Labels with out-degree 0, in ascending order.
    #[must_use]
    pub fn sinks(&self) -> Vec<&str> {
        super::queries::sinks(self)
    }

    /// True when both indexes cover exactly the same labels.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        super::queries::indexes_consistent(self)
    }

    /// Runs the power iteration with the given iteration budget.
    ///
    /// # Errors
    /// Returns [`crate::error::RankError::EmptyGraph`] if no edge was inserted.
    pub fn compute_ranks(&self, iterations: usize) -> Result<RankVector> {
        super::pagerank::compute(self, iterations)
    }
}

impl<S: AsRef<str>> Extend<(S, S)> for RankGraph {
    fn extend<I: IntoIterator<Item = (S, S)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.insert_edge(from.as_ref(), to.as_ref());
        }
    }
}
