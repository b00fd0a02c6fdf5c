//! CLI command implementations.

pub mod config;
pub mod eval;
pub mod version;

use std::path::Path;

use abacus_config::{AbacusConfig, ConfigLoader};
use anyhow::{Context, Result};

/// Loads configuration from `config_file` alone, or from every layered
/// source rooted at `project_dir`.
pub fn load_config(project_dir: &Path, config_file: Option<&Path>) -> Result<AbacusConfig> {
    match config_file {
        Some(path) => AbacusConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => ConfigLoader::new()
            .with_project_dir(project_dir)
            .load()
            .context("Failed to load configuration"),
    }
}
