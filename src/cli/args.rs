use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "patchrank",
    version,
    about = "Rank habitat patches by their importance for landscape connectivity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file to use instead of ./patchrank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the connectivity network and print patches by importance
    Rank {
        /// Patch table with id, x, y and quality columns
        #[arg(value_name = "CSV")]
        input: PathBuf,
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long, value_enum, default_value_t = RankFormat::Text)]
        format: RankFormat,
        /// Only print the N most important patches
        #[arg(long, value_name = "N")]
        top: Option<usize>,
        /// Decimal places for printed scores
        #[arg(long)]
        precision: Option<usize>,
        /// Suppress progress lines on stderr
        #[arg(long, short)]
        quiet: bool,
        /// Print the last iterate if the solver hits its iteration cap
        #[arg(long)]
        accept_approximate: bool,
    },
    /// Write the ranked network for a graph viewer
    Render {
        #[arg(value_name = "CSV")]
        input: PathBuf,
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,
    },
    /// Summarize the connectivity network without ranking it
    Stats {
        #[arg(value_name = "CSV")]
        input: PathBuf,
        #[command(flatten)]
        model: ModelArgs,
    },
}

/// Model parameters shared by every command; unset flags fall back to the
/// config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Dispersal distance in coordinate units
    #[arg(long, value_name = "DIST")]
    pub dispersal: Option<f64>,
    /// Probability of following an edge instead of teleporting
    #[arg(long)]
    pub damping: Option<f64>,
    /// Edges with weight at or below this are dropped
    #[arg(long)]
    pub threshold: Option<f64>,
    #[arg(long)]
    pub tolerance: Option<f64>,
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
}

impl ModelArgs {
    #[must_use]
    pub fn overrides(&self, precision: Option<usize>) -> ConfigOverrides {
        ConfigOverrides {
            dispersal_distance: self.dispersal,
            damping_factor: self.damping,
            weight_threshold: self.threshold,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            precision,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum RankFormat {
    #[default]
    Text,
    Json,
}
