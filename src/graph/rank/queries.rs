// src/graph/rank/queries.rs
use crate::graph::rank::graph::RankGraph;

#[must_use]
pub fn sorted_vertices(graph: &RankGraph) -> Vec<&str> {
    let mut labels: Vec<&str> = graph.in_adjacency.keys().map(String::as_str).collect();
    labels.sort_unstable();
    labels
}

#[must_use]
pub fn sinks(graph: &RankGraph) -> Vec<&str> {
    let mut labels: Vec<&str> = graph
        .out_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(label, _)| label.as_str())
        .collect();
    labels.sort_unstable();
    labels
}

/// Returns true when the two indexes are total over the same labels.
#[must_use]
pub fn indexes_consistent(graph: &RankGraph) -> bool {
    graph.out_degree.len() == graph.in_adjacency.len()
        && graph
            .out_degree
            .keys()
            .all(|label| graph.in_adjacency.contains_key(label))
}
