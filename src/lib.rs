//! Habitat patch importance ranking.
//!
//! Patches become nodes of a weighted directed graph whose edge weights decay
//! with distance and grow with patch quality; a damped power iteration then
//! scores each patch by its stationary share of a random walk over the
//! network.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod pipeline;
pub mod reporting;
pub mod types;

pub use error::{RankError, Result};
pub use graph::{GraphEngine, HabitatGraph, ImportanceDistribution, PageRankConfig, RankedPatch};
pub use types::{Patch, PatchId, Point};
