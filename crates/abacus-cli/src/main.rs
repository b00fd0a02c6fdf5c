//! abacus command-line interface.
//!
//! Evaluates flat arithmetic expressions by handing each one to the first
//! configured strategy that claims it.
//!
//! # Quick Start
//!
//! ```bash
//! # Comma decimals by default
//! abacus eval "1,0+2,3" "2*2,6"
//!
//! # Point decimals, product tried before sum
//! abacus eval --separator point --strategies product,sum "1.5*4"
//!
//! # One expression per stdin line
//! printf '1+1\n2*3\n' | abacus eval
//!
//! # Show the resolved configuration
//! abacus config --format toml
//! ```

mod commands;
mod style;

use std::io::IsTerminal;
use std::path::PathBuf;

use abacus::{DecimalSeparator, StrategyKind};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::commands::config::OutputFormat;
use crate::commands::eval::EvalOptions;

/// abacus - strategy-dispatched arithmetic over flat expressions.
#[derive(Parser)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log dispatch decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Evaluate expressions (reads stdin lines when none are given).
    Eval {
        /// Expressions such as "1,0+2,3" or "2*2,6".
        expressions: Vec<String>,

        /// Decimal separator (comma or point).
        #[arg(short, long)]
        separator: Option<DecimalSeparator>,

        /// Strategies to try, in order (e.g. "product,sum").
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<StrategyKind>,

        /// Directory holding abacus.toml and abacus.local.toml.
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Read configuration from this file only.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the resolved configuration.
    Config {
        /// Directory holding abacus.toml and abacus.local.toml.
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Read configuration from this file only.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise only warnings reach stderr
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.verbose {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    style::set_no_color(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    if let Err(e) = run(cli.command) {
        style::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Eval {
            expressions,
            separator,
            strategies,
            project_dir,
            config,
        } => commands::eval::run(
            &expressions,
            &EvalOptions {
                separator,
                strategies,
                project_dir,
                config_file: config,
            },
        ),
        Commands::Config {
            project_dir,
            config,
            format,
        } => commands::config::show(&project_dir, config.as_deref(), format),
    }
}
