//! Eval command - evaluate expressions with the configured strategies.

use std::io::BufRead;
use std::path::PathBuf;

use abacus::{DecimalSeparator, ExpressionDispatcher, StrategyKind};
use anyhow::{Context, Result};
use tracing::debug;

use crate::style::print_warn;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default)]
pub struct EvalOptions {
    pub separator: Option<DecimalSeparator>,
    pub strategies: Vec<StrategyKind>,
    pub project_dir: PathBuf,
    pub config_file: Option<PathBuf>,
}

/// Evaluates each expression, or each non-empty stdin line when none are
/// given, printing one result per line.
pub fn run(expressions: &[String], options: &EvalOptions) -> Result<()> {
    let mut config = super::load_config(&options.project_dir, options.config_file.as_deref())?;

    if let Some(separator) = options.separator {
        config.format.decimal_separator = separator;
    }
    if !options.strategies.is_empty() {
        config.dispatch.strategies.clone_from(&options.strategies);
        config.validate()?;
    }
    debug!(
        separator = %config.format.decimal_separator,
        strategies = ?config.dispatch.strategies,
        "resolved configuration"
    );

    let format = config.number_format();
    let strategies = config.build_strategies();
    let dispatcher = ExpressionDispatcher::new(&strategies);

    let evaluate = |expression: &str| -> Result<()> {
        if dispatcher.select(expression).is_none() {
            print_warn(&format!(
                "no strategy handles '{expression}', result defaults to 0"
            ));
        }
        let value = dispatcher
            .evaluate(expression)
            .with_context(|| format!("Failed to evaluate '{expression}'"))?;
        println!("{}", format.format(value));
        Ok(())
    };

    if expressions.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let expression = line.trim();
            if !expression.is_empty() {
                evaluate(expression)?;
            }
        }
    } else {
        for expression in expressions {
            evaluate(expression)?;
        }
    }

    Ok(())
}
