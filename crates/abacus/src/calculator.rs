//! Named calculators over slices and `+`-separated strings.

use crate::error::Result;
use crate::number::NumberFormat;
use crate::strategy::{ComputeStrategy, SumStrategy};

/// Summation over a slice of values.
///
/// The provided [`sum`](Self::sum) accumulates left to right. Implementors
/// may override it; calls through `&dyn Summation` see the override.
pub trait Summation {
    fn sum(&self, values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, v| acc + v)
    }
}

/// A calculator with an optional display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    name: Option<String>,
    format: NumberFormat,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the decimal convention used by [`sum_expression`](Self::sum_expression).
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    /// Sums a `+`-separated expression such as `"1,0+2"`.
    ///
    /// Unlike the dispatcher, a lone operand is accepted and returned as is.
    pub fn sum_expression(&self, expression: &str) -> Result<f64> {
        SumStrategy::new(self.format).evaluate(expression)
    }
}

impl Summation for Calculator {}

/// A calculator that truncates every value toward zero before summing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncatingCalculator;

impl TruncatingCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl Summation for TruncatingCalculator {
    fn sum(&self, values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, v| acc + v.trunc())
    }
}
