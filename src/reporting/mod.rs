// src/reporting/mod.rs
//! Console output for rankings and graph summaries.

pub mod console;
pub mod shared;

pub use console::{print_ranking, print_stats, print_step, render_ranking, render_stats};
pub use shared::GraphStats;
