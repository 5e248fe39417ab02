// src/config/io.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::types::{Config, PatchRankToml};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "patchrank.toml";

/// Parses TOML content into the config, replacing model and report values.
///
/// # Errors
/// Returns `RankError::Config` if the content is not valid TOML for the layout.
pub fn parse_toml(config: &mut Config, content: &str, path: &Path) -> Result<()> {
    let parsed: PatchRankToml = toml::from_str(content).map_err(|source| RankError::Config {
        source,
        path: path.to_path_buf(),
    })?;
    config.model = parsed.model;
    config.report = parsed.report;
    config.source = Some(path.to_path_buf());
    Ok(())
}

/// Loads `path` if it exists. A missing file leaves the config untouched
/// unless `required` is set.
///
/// # Errors
/// Returns error if the file is unreadable, malformed, or required but absent.
pub fn load_toml_config(config: &mut Config, path: &Path, required: bool) -> Result<()> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "loading config file");
            parse_toml(config, &content, path)
        }
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(())
        }
        Err(e) => Err(RankError::InvalidConfig(format!(
            "cannot read {}: {e}",
            path.display()
        ))),
    }
}

/// Writes the current values to `path` as TOML.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let doc = PatchRankToml {
        model: config.model,
        report: config.report,
    };
    let content = toml::to_string_pretty(&doc)
        .map_err(|e| RankError::InvalidConfig(format!("cannot serialize config: {e}")))?;
    fs::write(path, content).map_err(|source| RankError::Export {
        source,
        path: path.to_path_buf(),
    })
}
