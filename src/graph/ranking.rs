// src/graph/ranking.rs
use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::types::PatchId;

/// Per-node importance scores, in graph node order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportanceDistribution {
    ids: Vec<PatchId>,
    scores: Vec<f64>,
    index: HashMap<PatchId, usize>,
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPatch {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub id: PatchId,
    pub score: f64,
}

impl ImportanceDistribution {
    pub(crate) fn new(ids: Vec<PatchId>, scores: Vec<f64>) -> Self {
        let index = ids
            .iter()
            .take(scores.len())
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let ids = ids.into_iter().take(scores.len()).collect();
        Self { ids, scores, index }
    }

    #[must_use]
    pub fn get(&self, id: &PatchId) -> Option<f64> {
        self.index.get(id).map(|&i| self.scores[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores; 1 up to rounding for a converged run.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Scores in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&PatchId, f64)> + '_ {
        self.ids.iter().zip(self.scores.iter().copied())
    }

    /// Scores sorted descending; equal scores are ordered by id ascending.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedPatch> {
        let mut order: Vec<(&PatchId, f64)> = self.iter().collect();
        order.sort_by(compare_ranked);
        order
            .into_iter()
            .enumerate()
            .map(|(i, (id, score))| RankedPatch {
                rank: i + 1,
                id: id.clone(),
                score,
            })
            .collect()
    }
}

fn compare_ranked(a: &(&PatchId, f64), b: &(&PatchId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
