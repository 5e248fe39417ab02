// src/reporting/shared.rs
use serde::Serialize;

use crate::graph::weight;
use crate::graph::HabitatGraph;

/// Summary figures for a built graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub isolated: usize,
    pub dangling: usize,
    pub mean_out_degree: f64,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    /// Distance beyond which no edge can survive pruning.
    pub reach: Option<f64>,
}

impl GraphStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn collect(graph: &HabitatGraph, dispersal_distance: f64, threshold: f64) -> Self {
        let nodes = graph.node_count();
        let edges = graph.edge_count();
        let weights = graph.edges().map(|(_, _, w)| w);
        let (min_weight, max_weight) = weights.fold((None, None), |(lo, hi), w| {
            (
                Some(lo.map_or(w, |l: f64| l.min(w))),
                Some(hi.map_or(w, |h: f64| h.max(w))),
            )
        });
        let max_quality = graph
            .patches()
            .iter()
            .map(crate::types::Patch::quality)
            .fold(0.0, f64::max);

        Self {
            nodes,
            edges,
            isolated: graph.isolated_count(),
            dangling: graph.dangling_count(),
            mean_out_degree: if nodes == 0 { 0.0 } else { edges as f64 / nodes as f64 },
            min_weight,
            max_weight,
            reach: weight::cutoff_distance(dispersal_distance, max_quality, threshold),
        }
    }
}

pub(crate) fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        return format!("{count} {word}");
    }
    let suffix = if word.ends_with("ch") || word.ends_with('s') || word.ends_with('x') {
        "es"
    } else {
        "s"
    };
    format!("{count} {word}{suffix}")
}

pub(crate) fn format_score(score: f64, precision: usize) -> String {
    format!("{score:.precision$}")
}
