//! Command dispatch logic extracted from binary to reduce main function size.

use std::path::Path;

use anyhow::Result;

use super::args::Commands;
use super::handlers::{handle_rank, handle_render, handle_stats, RankOptions};
use crate::exit::PatchRankExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<PatchRankExit> {
    match command {
        Commands::Rank {
            input,
            model,
            format,
            top,
            precision,
            quiet,
            accept_approximate,
        } => handle_rank(&RankOptions {
            input,
            config_path: config_path.map(Path::to_path_buf),
            overrides: model.overrides(precision),
            format,
            top,
            quiet,
            accept_approximate,
        }),
        Commands::Render {
            input,
            model,
            output,
            format,
        } => handle_render(&input, config_path, &model, &output, format),
        Commands::Stats { input, model } => handle_stats(&input, config_path, &model),
    }
}
