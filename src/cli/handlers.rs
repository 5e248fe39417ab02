// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{ModelArgs, RankFormat};
use crate::config::{Config, ConfigOverrides};
use crate::exit::PatchRankExit;
use crate::export::{self, ExportFormat};
use crate::pipeline;
use crate::reporting::{self, GraphStats};

#[derive(Debug, Clone)]
pub struct RankOptions {
    pub input: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub format: RankFormat,
    pub top: Option<usize>,
    pub quiet: bool,
    pub accept_approximate: bool,
}

/// Loads the config file, applies flag overrides and validates the result.
///
/// # Errors
/// Returns error if the config file is malformed or a value is out of range.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = Config::load(path)?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if any pipeline stage fails.
pub fn handle_rank(opts: &RankOptions) -> Result<PatchRankExit> {
    let config = resolve_config(opts.config_path.as_deref(), &opts.overrides)?;
    let step = |msg: String| {
        if !opts.quiet {
            reporting::print_step(&msg);
        }
    };

    step("Step 1: Loading habitat patch data...".to_string());
    let patches = pipeline::load(&opts.input)?;
    step(format!("Loaded {} habitat patches.", patches.len()));

    step("Step 2: Building the weighted habitat network...".to_string());
    let graph = pipeline::build(patches, &config.model)?;
    step(format!(
        "Network built with {} nodes and {} edges.",
        graph.node_count(),
        graph.edge_count()
    ));

    step("Step 3: Running the weighted PageRank algorithm...".to_string());
    let run = pipeline::solve(graph, &config.model, opts.accept_approximate)?;
    if !run.converged {
        eprintln!(
            "{}",
            format!(
                "warning: no convergence after {} iterations (residual {:e}); ranking is approximate",
                run.iterations, run.residual
            )
            .yellow()
        );
    }

    let mut ranked = run.scores.ranked();
    if let Some(n) = opts.top {
        ranked.truncate(n);
    }

    match opts.format {
        RankFormat::Text => reporting::print_ranking(&ranked, config.report.precision),
        RankFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ranked).context("serializing ranking")?
            );
        }
    }

    if run.converged {
        Ok(PatchRankExit::Success)
    } else {
        Ok(PatchRankExit::ConvergenceFailure)
    }
}

/// Handles the render command.
///
/// # Errors
/// Returns error if ranking fails or the output cannot be written.
pub fn handle_render(
    input: &Path,
    config_path: Option<&Path>,
    model: &ModelArgs,
    output: &Path,
    format: ExportFormat,
) -> Result<PatchRankExit> {
    let config = resolve_config(config_path, &model.overrides(None))?;
    let run = pipeline::run(input, &config.model, false)?;
    export::write(output, format, &run.graph, &run.scores)?;
    reporting::print_step(&format!(
        "Wrote {} nodes and {} edges to {}",
        run.graph.node_count(),
        run.graph.edge_count(),
        output.display()
    ));
    Ok(PatchRankExit::Success)
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if loading or graph construction fails.
pub fn handle_stats(
    input: &Path,
    config_path: Option<&Path>,
    model: &ModelArgs,
) -> Result<PatchRankExit> {
    let config = resolve_config(config_path, &model.overrides(None))?;
    let patches = pipeline::load(input)?;
    let graph = pipeline::build(patches, &config.model)?;
    let stats = GraphStats::collect(
        &graph,
        config.model.dispersal_distance,
        config.model.weight_threshold,
    );
    reporting::print_stats(&stats);
    Ok(PatchRankExit::Success)
}
