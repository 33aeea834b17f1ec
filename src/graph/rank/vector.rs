// src/graph/rank/vector.rs
//! Rank values keyed by label, kept in ascending label order.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankVector {
    ranks: BTreeMap<String, f32>,
}

impl RankVector {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f32> {
        self.ranks.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.ranks.iter().map(|(label, rank)| (label.as_str(), *rank))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all ranks.
    #[must_use]
    pub fn mass(&self) -> f32 {
        self.ranks.values().sum()
    }

    /// Labels by descending rank; equal ranks fall back to label order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl FromIterator<(String, f32)> for RankVector {
    fn from_iter<I: IntoIterator<Item = (String, f32)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}
