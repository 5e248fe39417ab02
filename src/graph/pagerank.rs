// src/graph/pagerank.rs
//! Weighted `PageRank` by damped power iteration.
//!
//! The walk follows outgoing edges with probability proportional to their
//! weight. Mass sitting on dangling nodes is spread uniformly over all nodes
//! on every iteration, and a `(1 - damping) / n` teleport term is added to
//! each node. Iteration stops once the L1 change between successive iterates
//! drops below `n * tolerance`.

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::network::HabitatGraph;
use super::ranking::ImportanceDistribution;
use crate::error::{RankError, Result};

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following an edge rather than teleporting.
    pub damping_factor: f64,
    /// Per-node convergence tolerance; the L1 threshold is `n * tolerance`.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 1.0e-6,
            max_iterations: 100,
        }
    }
}

impl PageRankConfig {
    /// # Errors
    /// Returns `InvalidConfig` for damping outside (0, 1), a non-positive
    /// tolerance, or a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(RankError::InvalidConfig(format!(
                "damping_factor must be in (0, 1), got {}",
                self.damping_factor
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RankError::InvalidConfig(format!(
                "tolerance must be > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a solver run, converged or not.
#[derive(Debug, Clone)]
pub struct Convergence {
    /// The last iterate.
    pub scores: ImportanceDistribution,
    pub iterations: usize,
    /// L1 distance between the last two iterates.
    pub residual: f64,
    pub converged: bool,
}

impl Convergence {
    /// Returns the scores if the run converged.
    ///
    /// # Errors
    /// Returns `ConvergenceFailure` carrying the final residual otherwise.
    pub fn into_result(self) -> Result<ImportanceDistribution> {
        if self.converged {
            Ok(self.scores)
        } else {
            Err(RankError::ConvergenceFailure {
                iterations: self.iterations,
                residual: self.residual,
            })
        }
    }
}

/// Computes the stationary importance of every node.
///
/// An empty graph yields an empty distribution.
///
/// # Errors
/// Returns `InvalidConfig` for bad parameters and `ConvergenceFailure` if
/// `max_iterations` is exhausted before the tolerance is met.
pub fn solve(graph: &HabitatGraph, config: &PageRankConfig) -> Result<ImportanceDistribution> {
    iterate(graph, config)?.into_result()
}

/// Runs the power iteration and reports how it ended without treating a
/// non-converged run as an error.
///
/// # Errors
/// Returns `InvalidConfig` for bad parameters.
#[allow(clippy::cast_precision_loss)]
pub fn iterate(graph: &HabitatGraph, config: &PageRankConfig) -> Result<Convergence> {
    config.validate()?;

    let n = graph.node_count();
    let ids = graph.patches().iter().map(|p| p.id().clone()).collect();
    if n == 0 {
        return Ok(Convergence {
            scores: ImportanceDistribution::new(ids, Vec::new()),
            iterations: 0,
            residual: 0.0,
            converged: true,
        });
    }

    let nf = n as f64;
    let damping = config.damping_factor;
    let teleport = (1.0 - damping) / nf;
    let transitions = transition_rows(graph);
    let dangling: Vec<usize> = (0..n).filter(|&v| graph.is_dangling(v)).collect();

    let mut scores = vec![1.0 / nf; n];
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let dangling_share = dangling.iter().map(|&d| scores[d]).sum::<f64>() / nf;

        let next: Vec<f64> = transitions
            .par_iter()
            .map(|incoming| {
                let flow: f64 = incoming.iter().map(|&(u, p)| scores[u] * p).sum();
                teleport + damping * (dangling_share + flow)
            })
            .collect();

        residual = next
            .iter()
            .zip(&scores)
            .map(|(new, old)| (new - old).abs())
            .sum();
        scores = next;
        trace!(iteration, residual, "pagerank step");

        if residual < nf * config.tolerance {
            debug!(iterations = iteration, residual, "pagerank converged");
            return Ok(Convergence {
                scores: ImportanceDistribution::new(ids, scores),
                iterations: iteration,
                residual,
                converged: true,
            });
        }
    }

    warn!(
        iterations = config.max_iterations,
        residual, "pagerank did not converge"
    );
    Ok(Convergence {
        scores: ImportanceDistribution::new(ids, scores),
        iterations: config.max_iterations,
        residual,
        converged: false,
    })
}

/// Incoming transition probabilities per target: `(source, weight / out_weight(source))`.
fn transition_rows(graph: &HabitatGraph) -> Vec<Vec<(usize, f64)>> {
    // Weights are scaled by the row maximum before summing, so rows of very
    // large weights normalize without overflowing to inf.
    let scale: Vec<(f64, f64)> = (0..graph.node_count())
        .map(|v| {
            let edges = graph.out_edges(v);
            let max = edges.iter().map(|e| e.weight).fold(0.0, f64::max);
            let total = if max > 0.0 {
                edges.iter().map(|e| e.weight / max).sum()
            } else {
                0.0
            };
            (max, total)
        })
        .collect();
    graph
        .incoming()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(src, w)| {
                    let (max, total) = scale[src];
                    (src, w / max / total)
                })
                .collect()
        })
        .collect()
}
