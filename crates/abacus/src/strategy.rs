//! Evaluation strategies.
//!
//! A strategy pairs a capability check with an evaluation function. Each
//! built-in strategy handles one operator and folds the operands left to
//! right, so floating-point rounding follows the written order.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::number::NumberFormat;

/// Operator characters understood by the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Times,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Times => '*',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A stateless evaluator selected by capability.
///
/// Implementations must be pure: `can_handle` and `evaluate` depend only on
/// their argument and on values fixed at construction.
pub trait ComputeStrategy: Debug + Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// The operator this strategy splits on.
    fn operator(&self) -> Operator;

    /// Returns true if this strategy can evaluate `expression`.
    fn can_handle(&self, expression: &str) -> bool;

    /// Evaluates `expression`.
    ///
    /// Callers are expected to check [`can_handle`](Self::can_handle) first;
    /// evaluating an expression this strategy does not handle treats the
    /// whole expression as a single operand.
    fn evaluate(&self, expression: &str) -> Result<f64>;
}

/// Splits `expression` on `operator` and folds the parsed operands in order.
fn fold_operands(
    expression: &str,
    operator: Operator,
    format: NumberFormat,
    seed: f64,
    combine: impl Fn(f64, f64) -> f64,
) -> Result<f64> {
    let mut acc = seed;
    for token in expression.split(operator.symbol()) {
        acc = combine(acc, format.parse(token)?);
    }
    Ok(acc)
}

/// Sums `+`-separated operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumStrategy {
    format: NumberFormat,
}

impl SumStrategy {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }
}

impl ComputeStrategy for SumStrategy {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn operator(&self) -> Operator {
        Operator::Plus
    }

    fn can_handle(&self, expression: &str) -> bool {
        expression.contains(self.operator().symbol())
    }

    fn evaluate(&self, expression: &str) -> Result<f64> {
        fold_operands(expression, self.operator(), self.format, 0.0, |acc, v| acc + v)
    }
}

/// Multiplies `*`-separated operands, starting from `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStrategy {
    format: NumberFormat,
}

impl ProductStrategy {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }
}

impl ComputeStrategy for ProductStrategy {
    fn name(&self) -> &'static str {
        "product"
    }

    fn operator(&self) -> Operator {
        Operator::Times
    }

    fn can_handle(&self, expression: &str) -> bool {
        expression.contains(self.operator().symbol())
    }

    fn evaluate(&self, expression: &str) -> Result<f64> {
        fold_operands(expression, self.operator(), self.format, 1.0, |acc, v| acc * v)
    }
}

/// Names a built-in strategy, e.g. in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Sum,
    Product,
}

impl StrategyKind {
    pub fn operator(self) -> Operator {
        match self {
            Self::Sum => Operator::Plus,
            Self::Product => Operator::Times,
        }
    }

    /// Instantiates the strategy with the given number format.
    pub fn build(self, format: NumberFormat) -> Box<dyn ComputeStrategy> {
        match self {
            Self::Sum => Box::new(SumStrategy::new(format)),
            Self::Product => Box::new(ProductStrategy::new(format)),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => f.write_str("sum"),
            Self::Product => f.write_str("product"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected 'sum' or 'product')")]
pub struct ParseStrategyError(String);

impl std::str::FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "+" => Ok(Self::Sum),
            "product" | "*" => Ok(Self::Product),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Builds strategies in the order given.
pub fn build_strategies(
    kinds: &[StrategyKind],
    format: NumberFormat,
) -> Vec<Box<dyn ComputeStrategy>> {
    kinds.iter().map(|kind| kind.build(format)).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::error::EvalError;
    use test_case::test_case;

    #[test]
    fn sum_handles_plus_only() {
        let sum = SumStrategy::default();
        assert!(sum.can_handle("1+2"));
        assert!(sum.can_handle("+"));
        assert!(!sum.can_handle("1*2"));
        assert!(!sum.can_handle("abc"));
    }

    #[test]
    fn product_handles_star_only() {
        let product = ProductStrategy::default();
        assert!(product.can_handle("1*2"));
        assert!(!product.can_handle("1+2"));
        assert!(!product.can_handle(""));
    }

    #[test_case("1+2,3", 1.0 + 2.3 ; "mixed literals")]
    #[test_case("1,0+2,3", 1.0 + 2.3 ; "both fractional")]
    #[test_case("1,3+1,8", 1.3 + 1.8 ; "carry")]
    #[test_case("1,2+1,5+5,3", 1.2 + 1.5 + 5.3 ; "three operands")]
    #[test_case("-1+1", 0.0 ; "negative operand")]
    fn sum_evaluates(expression: &str, expected: f64) {
        assert_eq!(SumStrategy::default().evaluate(expression).unwrap(), expected);
    }

    #[test_case("2*2,6", 2.0 * 2.6 ; "mixed literals")]
    #[test_case("2,0*2,3", 2.0 * 2.3 ; "both fractional")]
    #[test_case("1,5*2*4", 1.5 * 2.0 * 4.0 ; "three operands")]
    #[test_case("7", 7.0 ; "single operand")]
    fn product_evaluates(expression: &str, expected: f64) {
        assert_eq!(ProductStrategy::default().evaluate(expression).unwrap(), expected);
    }

    #[test]
    fn sum_accumulates_left_to_right() {
        // (0.1 + 0.2) + 0.3 differs from 0.1 + (0.2 + 0.3) in binary floating point.
        let result = SumStrategy::new(NumberFormat::point())
            .evaluate("0.1+0.2+0.3")
            .unwrap();
        assert_eq!(result, (0.1 + 0.2) + 0.3);
        assert_ne!(result, 0.1 + (0.2 + 0.3));
    }

    #[test]
    fn malformed_operand_is_format_error() {
        let err = SumStrategy::default().evaluate("1+x").unwrap_err();
        assert!(matches!(err, EvalError::Format { ref token, .. } if token == "x"));
    }

    #[test]
    fn trailing_operator_is_format_error() {
        let err = ProductStrategy::default().evaluate("2*").unwrap_err();
        assert_eq!(err.token(), "");
    }

    #[test]
    fn point_format_strategies() {
        let format = NumberFormat::point();
        assert_eq!(SumStrategy::new(format).evaluate("1.5+2.5").unwrap(), 4.0);
        assert!(SumStrategy::new(format).evaluate("1,5+2").is_err());
    }

    #[test]
    fn kind_builds_matching_strategy() {
        let sum = StrategyKind::Sum.build(NumberFormat::default());
        assert_eq!(sum.name(), "sum");
        assert!(sum.can_handle("1+1"));

        let product = StrategyKind::Product.build(NumberFormat::default());
        assert_eq!(product.name(), "product");
        assert_eq!(StrategyKind::Product.operator(), Operator::Times);
    }

    #[test]
    fn build_strategies_preserves_order() {
        let strategies =
            build_strategies(&[StrategyKind::Product, StrategyKind::Sum], NumberFormat::comma());
        let names: Vec<_> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["product", "sum"]);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("sum".parse::<StrategyKind>(), Ok(StrategyKind::Sum));
        assert_eq!("*".parse::<StrategyKind>(), Ok(StrategyKind::Product));

        let err = "division".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err, ParseStrategyError("division".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown strategy 'division' (expected 'sum' or 'product')"
        );
    }

    #[test]
    fn strategies_report_their_operator() {
        assert_eq!(SumStrategy::default().operator(), Operator::Plus);
        assert_eq!(ProductStrategy::default().operator(), Operator::Times);

        for kind in [StrategyKind::Sum, StrategyKind::Product] {
            let strategy = kind.build(NumberFormat::default());
            assert_eq!(strategy.operator(), kind.operator());
            assert!(strategy.can_handle(&format!("1{}1", strategy.operator())));
        }
    }
}
