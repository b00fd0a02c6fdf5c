//! Routing of expressions to the first capable strategy.

use tracing::{debug, trace};

use crate::error::Result;
use crate::strategy::ComputeStrategy;

/// Routes each expression to the first strategy whose
/// [`can_handle`](ComputeStrategy::can_handle) accepts it.
///
/// The dispatcher borrows its strategy list; the order of that list decides
/// which strategy wins when several could handle the same expression. It
/// holds no other state and can be shared across threads.
///
/// # Examples
///
/// ```
/// use abacus::{ComputeStrategy, ExpressionDispatcher, ProductStrategy, SumStrategy};
///
/// let strategies: Vec<Box<dyn ComputeStrategy>> = vec![
///     Box::new(SumStrategy::default()),
///     Box::new(ProductStrategy::default()),
/// ];
/// let dispatcher = ExpressionDispatcher::new(&strategies);
///
/// assert_eq!(dispatcher.evaluate("1,0+2,3").unwrap(), 1.0 + 2.3);
/// assert_eq!(dispatcher.evaluate("2,0*2,3").unwrap(), 2.0 * 2.3);
/// assert_eq!(dispatcher.evaluate("abc").unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionDispatcher<'s> {
    strategies: &'s [Box<dyn ComputeStrategy>],
}

impl<'s> ExpressionDispatcher<'s> {
    pub fn new(strategies: &'s [Box<dyn ComputeStrategy>]) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &'s [Box<dyn ComputeStrategy>] {
        self.strategies
    }

    /// Returns the first strategy able to handle `expression`.
    pub fn select(&self, expression: &str) -> Option<&'s dyn ComputeStrategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.can_handle(expression))
            .map(|strategy| strategy.as_ref())
    }

    /// Evaluates `expression` with the first capable strategy.
    ///
    /// Returns `0.0` when no strategy matches. That fallback is kept for
    /// compatibility with existing callers; it cannot be told apart from an
    /// expression that genuinely evaluates to zero, so callers that care
    /// should check [`select`](Self::select) first.
    ///
    /// Parse failures inside the selected strategy are returned unchanged.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let Some(strategy) = self.select(expression) else {
            debug!(expression, "no strategy matched, falling back to 0");
            return Ok(0.0);
        };

        trace!(expression, strategy = strategy.name(), "dispatching");
        let value = strategy.evaluate(expression)?;
        trace!(expression, strategy = strategy.name(), value, "evaluated");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::error::EvalError;
    use crate::number::NumberFormat;
    use crate::strategy::{
        Operator, ProductStrategy, StrategyKind, SumStrategy, build_strategies,
    };

    fn sum_then_product() -> Vec<Box<dyn ComputeStrategy>> {
        build_strategies(
            &[StrategyKind::Sum, StrategyKind::Product],
            NumberFormat::comma(),
        )
    }

    #[test_case(&[StrategyKind::Sum, StrategyKind::Product], "1,0+2,3", 1.0 + 2.3 ; "sum via both")]
    #[test_case(&[StrategyKind::Sum, StrategyKind::Product], "2,0*2,3", 2.0 * 2.3 ; "product via both")]
    #[test_case(&[StrategyKind::Sum], "1+2,3", 1.0 + 2.3 ; "sum only")]
    #[test_case(&[StrategyKind::Product], "2*2,6", 2.0 * 2.6 ; "product only")]
    #[test_case(&[StrategyKind::Sum, StrategyKind::Product], "abc", 0.0 ; "no match")]
    #[test_case(&[StrategyKind::Sum], "2*3", 0.0 ; "operator without strategy")]
    #[test_case(&[], "1+1", 0.0 ; "no strategies")]
    fn evaluates(kinds: &[StrategyKind], expression: &str, expected: f64) {
        let strategies = build_strategies(kinds, NumberFormat::comma());
        let dispatcher = ExpressionDispatcher::new(&strategies);
        assert_eq!(dispatcher.evaluate(expression).unwrap(), expected);
    }

    #[test]
    fn empty_expression_matches_nothing() {
        let strategies = sum_then_product();
        let dispatcher = ExpressionDispatcher::new(&strategies);
        assert!(dispatcher.select("").is_none());
        assert_eq!(dispatcher.evaluate("").unwrap(), 0.0);
    }

    #[test]
    fn first_capable_strategy_wins() {
        // "2+3*4" is claimed by both; the order of the list decides.
        let strategies = sum_then_product();
        let dispatcher = ExpressionDispatcher::new(&strategies);
        assert_eq!(dispatcher.select("2+3*4").map(|s| s.name()), Some("sum"));
        assert!(matches!(
            dispatcher.evaluate("2+3*4"),
            Err(EvalError::Format { ref token, .. }) if token == "3*4"
        ));

        let reversed = build_strategies(
            &[StrategyKind::Product, StrategyKind::Sum],
            NumberFormat::comma(),
        );
        let dispatcher = ExpressionDispatcher::new(&reversed);
        assert_eq!(dispatcher.select("2+3*4").map(|s| s.name()), Some("product"));
    }

    #[test]
    fn format_error_propagates_unchanged() {
        let strategies = sum_then_product();
        let dispatcher = ExpressionDispatcher::new(&strategies);
        let direct = SumStrategy::default().evaluate("1+deux").unwrap_err();
        assert_eq!(dispatcher.evaluate("1+deux").unwrap_err(), direct);
    }

    #[derive(Debug)]
    struct CountingStrategy {
        checks: Arc<AtomicUsize>,
    }

    impl ComputeStrategy for CountingStrategy {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn operator(&self) -> Operator {
            Operator::Plus
        }

        fn can_handle(&self, _expression: &str) -> bool {
            self.checks.fetch_add(1, Ordering::Relaxed);
            false
        }

        fn evaluate(&self, _expression: &str) -> Result<f64> {
            unreachable!("never handles anything")
        }
    }

    #[test]
    fn stops_at_first_match() {
        let checks = Arc::new(AtomicUsize::new(0));
        let strategies: Vec<Box<dyn ComputeStrategy>> = vec![
            Box::new(ProductStrategy::default()),
            Box::new(SumStrategy::default()),
            Box::new(CountingStrategy {
                checks: Arc::clone(&checks),
            }),
        ];
        let dispatcher = ExpressionDispatcher::new(&strategies);
        assert_eq!(dispatcher.evaluate("1+1").unwrap(), 2.0);
        assert_eq!(checks.load(Ordering::Relaxed), 0);

        assert_eq!(dispatcher.evaluate("x").unwrap(), 0.0);
        assert_eq!(checks.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn shared_across_threads() {
        let strategies = sum_then_product();
        let dispatcher = ExpressionDispatcher::new(&strategies);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| scope.spawn(move || dispatcher.evaluate(&format!("{i}+1")).unwrap()))
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), i as f64 + 1.0);
            }
        });
    }

    fn operand() -> impl Strategy<Value = (String, f64)> {
        (-1000i32..1000, 0u32..1000).prop_map(|(whole, frac)| {
            let comma = format!("{whole},{frac:03}");
            let value: f64 = format!("{whole}.{frac:03}").parse().unwrap();
            (comma, value)
        })
    }

    proptest! {
        #[test]
        fn sum_is_left_to_right_fold(operands in prop::collection::vec(operand(), 2..8)) {
            let strategies = sum_then_product();
            let dispatcher = ExpressionDispatcher::new(&strategies);
            let expression = operands.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>().join("+");
            let expected = operands.iter().fold(0.0, |acc, (_, v)| acc + v);
            prop_assert_eq!(dispatcher.evaluate(&expression).unwrap(), expected);
        }

        #[test]
        fn product_is_left_to_right_fold(operands in prop::collection::vec(operand(), 2..8)) {
            let strategies = sum_then_product();
            let dispatcher = ExpressionDispatcher::new(&strategies);
            let expression = operands.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>().join("*");
            let expected = operands.iter().fold(1.0, |acc, (_, v)| acc * v);
            prop_assert_eq!(dispatcher.evaluate(&expression).unwrap(), expected);
        }

        #[test]
        fn no_operator_yields_zero(expression in "[a-z0-9, ]{0,16}") {
            let strategies = sum_then_product();
            let dispatcher = ExpressionDispatcher::new(&strategies);
            prop_assert_eq!(dispatcher.evaluate(&expression).unwrap(), 0.0);
        }

        #[test]
        fn malformed_operand_is_rejected(word in "[a-z]{1,8}", value in 0u32..100) {
            let strategies = sum_then_product();
            let dispatcher = ExpressionDispatcher::new(&strategies);
            let err = dispatcher.evaluate(&format!("{value}+{word}")).unwrap_err();
            prop_assert_eq!(err.token(), word.as_str());
        }
    }
}
