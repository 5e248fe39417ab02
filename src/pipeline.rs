// src/pipeline.rs
//! Staged ranking run: load patches, build the graph, solve for scores.
//!
//! Each stage returns its own `Result`, so a failure names the stage that
//! produced it and later stages never run.

use std::path::Path;

use tracing::{info, warn};

use crate::config::ModelConfig;
use crate::error::Result;
use crate::graph::{pagerank, GraphEngine, HabitatGraph, ImportanceDistribution};
use crate::ingest;
use crate::types::Patch;

/// Everything a finished run hands to reporting and export.
#[derive(Debug, Clone)]
pub struct RankRun {
    pub graph: HabitatGraph,
    pub scores: ImportanceDistribution,
    pub iterations: usize,
    pub residual: f64,
    /// False only when an approximate result was explicitly accepted.
    pub converged: bool,
}

/// Stage 1: read the patch table.
///
/// # Errors
/// Returns `SourceUnavailable`, `SchemaViolation` or `DuplicateIdentifier`.
pub fn load(path: &Path) -> Result<Vec<Patch>> {
    ingest::load_patches(path)
}

/// Stage 2: build the pruned connectivity graph.
///
/// # Errors
/// Returns `InvalidConfig` or `DuplicateIdentifier`.
pub fn build(patches: Vec<Patch>, model: &ModelConfig) -> Result<HabitatGraph> {
    let graph = GraphEngine::build(patches, model)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "network built"
    );
    Ok(graph)
}

/// Stage 3: solve for stationary importance.
///
/// With `accept_approximate`, a run that hits the iteration cap returns its
/// last iterate instead of `ConvergenceFailure`.
///
/// # Errors
/// Returns `InvalidConfig`, or `ConvergenceFailure` unless approximate
/// results are accepted.
pub fn solve(graph: HabitatGraph, model: &ModelConfig, accept_approximate: bool) -> Result<RankRun> {
    let outcome = pagerank::iterate(&graph, &model.solver())?;
    let (iterations, residual, converged) =
        (outcome.iterations, outcome.residual, outcome.converged);

    let scores = if accept_approximate {
        if !converged {
            warn!(iterations, residual, "accepting non-converged ranking");
        }
        outcome.scores
    } else {
        outcome.into_result()?
    };

    Ok(RankRun {
        graph,
        scores,
        iterations,
        residual,
        converged,
    })
}

/// Runs all three stages against the patch table at `path`.
///
/// # Errors
/// Propagates the first stage failure.
pub fn run(path: &Path, model: &ModelConfig, accept_approximate: bool) -> Result<RankRun> {
    model.validate()?;
    let patches = load(path)?;
    let graph = build(patches, model)?;
    solve(graph, model, accept_approximate)
}
