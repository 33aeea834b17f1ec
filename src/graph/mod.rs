// src/graph/mod.rs
//! Directed graph storage and ranking.

pub mod rank;

pub use rank::{RankGraph, RankVector};
