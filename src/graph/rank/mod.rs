// src/graph/rank/mod.rs
pub mod graph;
pub mod pagerank;
pub mod queries;
pub mod vector;

pub use graph::RankGraph;
pub use vector::RankVector;
