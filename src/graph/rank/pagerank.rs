// src/graph/rank/pagerank.rs
//! Simplified `PageRank`: undamped power iteration over a fixed budget.
//!
//! An iteration budget of `n` means the uniform initialization counts as the
//! first iteration, so `n - 1` propagation passes run. Budgets of 0 and 1 both
//! return the initialization.

use std::collections::HashMap;

use super::graph::RankGraph;
use super::vector::RankVector;
use crate::error::{RankError, Result};

/// Computes ranks for every vertex of `graph`.
///
/// # Errors
/// Returns [`RankError::EmptyGraph`] if the graph has no vertices.
pub fn compute(graph: &RankGraph, iterations: usize) -> Result<RankVector> {
    compute_with(graph, iterations, |_, _| {})
}

/// Like [`compute`], calling `observer(pass, ranks)` after each committed pass.
///
/// # Errors
/// Returns [`RankError::EmptyGraph`] if the graph has no vertices.
pub fn compute_with<F>(graph: &RankGraph, iterations: usize, mut observer: F) -> Result<RankVector>
where
    F: FnMut(usize, &RankVector),
{
    let mut ranks = initialize_ranks(graph)?;

    for pass in 1..=passes_for(iterations) {
        ranks = iterate_once(&ranks, graph);
        observer(pass, &ranks);
    }

    Ok(ranks)
}

/// Number of propagation passes an iteration budget performs.
#[must_use]
pub const fn passes_for(iterations: usize) -> usize {
    iterations.saturating_sub(1)
}

/// Uniform `1 / |V|` starting vector.
///
/// # Errors
/// Returns [`RankError::EmptyGraph`] if the graph has no vertices.
#[allow(clippy::cast_precision_loss)]
pub fn initialize_ranks(graph: &RankGraph) -> Result<RankVector> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }

    let initial = 1.0_f32 / graph.vertex_count() as f32;
    Ok(graph
        .in_adjacency
        .keys()
        .map(|label| (label.clone(), initial))
        .collect())
}

fn iterate_once(previous: &RankVector, graph: &RankGraph) -> RankVector {
    graph
        .in_adjacency
        .iter()
        .map(|(target, sources)| {
            let rank = compute_incoming_rank(sources, previous, &graph.out_degree);
            (target.clone(), rank)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank(
    sources: &[String],
    previous: &RankVector,
    out_degree: &HashMap<String, u32>,
) -> f32 {
    let mut rank = 0.0_f32;

    for source in sources {
        let Some(&degree) = out_degree.get(source) else {
            continue;
        };
        if degree == 0 {
            continue;
        }

        let source_rank = previous.get(source).unwrap_or(0.0);
        rank += (1.0 / degree as f32) * source_rank;
    }

    rank
}
