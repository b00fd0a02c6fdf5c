//! Configuration display command.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use crate::style::{print_header, print_labeled};

/// How `abacus config` renders the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled sections for reading.
    Text,
    /// The same TOML accepted by abacus.toml.
    Toml,
}

/// Show the resolved configuration.
pub fn show(project_dir: &Path, config_file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = super::load_config(project_dir, config_file)?;

    if format == OutputFormat::Toml {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let strategies = config
        .dispatch
        .strategies
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    print_header("Format:");
    print_labeled(
        "Decimal separator",
        &config.format.decimal_separator.to_string(),
    );
    println!();
    print_header("Dispatch:");
    print_labeled("Strategies", &strategies);

    Ok(())
}
