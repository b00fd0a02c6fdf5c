//! Configuration management for abacus
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (ABACUS_* prefix, `__` between sections)
//! 3. abacus.local.toml (gitignored, local overrides)
//! 4. abacus.toml (git-tracked, project config)
//! 5. ~/.config/abacus/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use abacus::{ComputeStrategy, DecimalSeparator, NumberFormat, StrategyKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main abacus configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbacusConfig {
    pub format: FormatConfig,
    pub dispatch: DispatchConfig,
}

/// How number literals are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub decimal_separator: DecimalSeparator,
}

/// Which strategies the dispatcher tries, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub strategies: Vec<StrategyKind>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            strategies: vec![StrategyKind::Sum, StrategyKind::Product],
        }
    }
}

impl AbacusConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, ignoring every other source
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Point-separated literals (`1.5`), both strategies
    pub fn invariant() -> Self {
        Self {
            format: FormatConfig {
                decimal_separator: DecimalSeparator::Point,
            },
            ..Default::default()
        }
    }

    /// Reject strategy lists that are empty or name a strategy twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let strategies = &self.dispatch.strategies;
        if strategies.is_empty() {
            return Err(ConfigError::ValidationError(
                "dispatch.strategies must name at least one strategy".to_string(),
            ));
        }
        for (i, kind) in strategies.iter().enumerate() {
            if strategies[..i].contains(kind) {
                return Err(ConfigError::ValidationError(format!(
                    "dispatch.strategies lists '{kind}' more than once"
                )));
            }
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.format.decimal_separator)
    }

    /// Instantiate the configured strategies in order
    pub fn build_strategies(&self) -> Vec<Box<dyn ComputeStrategy>> {
        abacus::build_strategies(&self.dispatch.strategies, self.number_format())
    }

    /// Render as TOML, e.g. for `abacus config`
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
