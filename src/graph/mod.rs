// src/graph/mod.rs
pub mod builder;
pub mod network;
pub mod pagerank;
pub mod ranking;
pub mod weight;

pub use network::{Edge, HabitatGraph};
pub use pagerank::{Convergence, PageRankConfig};
pub use ranking::{ImportanceDistribution, RankedPatch};

use crate::config::ModelConfig;
use crate::error::Result;
use crate::types::Patch;

/// Orchestrates graph construction and ranking.
pub struct GraphEngine;

impl GraphEngine {
    /// Builds the pruned connectivity graph for `patches`.
    ///
    /// # Errors
    /// Returns error on duplicate ids or invalid model parameters.
    pub fn build(patches: Vec<Patch>, model: &ModelConfig) -> Result<HabitatGraph> {
        builder::build(patches, model.dispersal_distance, model.weight_threshold)
    }

    /// Ranks the nodes of `graph`, failing if the solver does not converge.
    ///
    /// # Errors
    /// Returns `ConvergenceFailure` or `InvalidConfig`.
    pub fn rank(graph: &HabitatGraph, model: &ModelConfig) -> Result<ImportanceDistribution> {
        pagerank::solve(graph, &model.solver())
    }
}
