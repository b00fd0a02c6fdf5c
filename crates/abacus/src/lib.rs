//! # abacus: strategy-dispatched arithmetic over flat expressions
//!
//! An expression is a run of number literals joined by a single repeated
//! operator, e.g. `"1,0+2,3"` or `"2*2,6"`. Evaluation is delegated to the
//! first strategy in an ordered list that claims the expression:
//!
//! - [`SumStrategy`] claims anything containing `+` and sums left to right
//! - [`ProductStrategy`] claims anything containing `*` and multiplies left
//!   to right, starting from `1.0`
//!
//! Number literals follow one [`DecimalSeparator`] per [`NumberFormat`]:
//! comma (`1,5`) by default, or point (`1.5`).
//!
//! ## Usage
//!
//! ```
//! use abacus::{ExpressionDispatcher, NumberFormat, StrategyKind, build_strategies};
//!
//! let strategies = build_strategies(
//!     &[StrategyKind::Sum, StrategyKind::Product],
//!     NumberFormat::comma(),
//! );
//! let dispatcher = ExpressionDispatcher::new(&strategies);
//!
//! assert_eq!(dispatcher.evaluate("1+2,3")?, 1.0 + 2.3);
//! assert!(dispatcher.evaluate("1+two").is_err());
//! # Ok::<(), abacus::EvalError>(())
//! ```
//!
//! An expression no strategy claims evaluates to `0.0`; use
//! [`ExpressionDispatcher::select`] to tell that case apart.

mod calculator;
mod dispatcher;
mod error;
mod number;
mod strategy;

pub use calculator::{Calculator, Summation, TruncatingCalculator};
pub use dispatcher::ExpressionDispatcher;
pub use error::{EvalError, Result};
pub use number::{DecimalSeparator, NumberFormat, ParseSeparatorError};
pub use strategy::{
    ComputeStrategy, Operator, ParseStrategyError, ProductStrategy, StrategyKind, SumStrategy,
    build_strategies,
};
