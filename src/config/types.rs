use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters of the connectivity model and the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Decay scale of connectivity with distance, in coordinate units.
    #[serde(default = "default_dispersal")]
    pub dispersal_distance: f64,
    #[serde(default = "default_damping")]
    pub damping_factor: f64,
    /// Edges with weight at or below this value are pruned.
    #[serde(default = "default_threshold")]
    pub weight_threshold: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dispersal_distance: default_dispersal(),
            damping_factor: default_damping(),
            weight_threshold: default_threshold(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places used when printing scores.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

const fn default_dispersal() -> f64 {
    15.0
}

const fn default_damping() -> f64 {
    0.85
}

const fn default_threshold() -> f64 {
    0.01
}

const fn default_tolerance() -> f64 {
    1.0e-6
}

const fn default_max_iterations() -> usize {
    100
}

const fn default_precision() -> usize {
    4
}

/// On-disk layout of `patchrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatchRankToml {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub dispersal_distance: Option<f64>,
    pub damping_factor: Option<f64>,
    pub weight_threshold: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub model: ModelConfig,
    pub report: ReportConfig,
    /// File the values were read from, if any.
    pub source: Option<PathBuf>,
}
