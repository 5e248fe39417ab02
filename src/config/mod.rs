// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, ConfigOverrides, ModelConfig, PatchRankToml, ReportConfig};

use std::path::Path;

use crate::error::Result;
use crate::graph::builder;
use crate::graph::pagerank::PageRankConfig;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `patchrank.toml` from the working directory, or `explicit` when
    /// given. An explicit file must exist; the implicit one is optional.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        match explicit {
            Some(path) => io::load_toml_config(&mut config, path, true)?,
            None => io::load_toml_config(&mut config, Path::new(CONFIG_FILE), false)?,
        }
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        let m = &mut self.model;
        if let Some(v) = overrides.dispersal_distance {
            m.dispersal_distance = v;
        }
        if let Some(v) = overrides.damping_factor {
            m.damping_factor = v;
        }
        if let Some(v) = overrides.weight_threshold {
            m.weight_threshold = v;
        }
        if let Some(v) = overrides.tolerance {
            m.tolerance = v;
        }
        if let Some(v) = overrides.max_iterations {
            m.max_iterations = v;
        }
        if let Some(v) = overrides.precision {
            self.report.precision = v;
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        self.model.validate()
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}

impl ModelConfig {
    /// # Errors
    /// Returns `InvalidConfig` naming the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        builder::check_params(self.dispersal_distance, self.weight_threshold)?;
        self.solver().validate()
    }

    #[must_use]
    pub fn solver(&self) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}
