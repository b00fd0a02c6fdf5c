//! Error types for expression evaluation.

use thiserror::Error;

use crate::number::DecimalSeparator;

/// Result type for evaluation operations.
pub type Result<T, E = EvalError> = std::result::Result<T, E>;

/// Errors raised while evaluating an expression.
///
/// A strategy that fails to match is not an error; see
/// [`ExpressionDispatcher::evaluate`](crate::ExpressionDispatcher::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A token between operators is not a number in the active decimal convention.
    #[error("invalid number '{token}' (decimal separator: {separator})")]
    Format {
        token: String,
        separator: DecimalSeparator,
    },
}

impl EvalError {
    pub(crate) fn format(token: &str, separator: DecimalSeparator) -> Self {
        Self::Format {
            token: token.to_string(),
            separator,
        }
    }

    /// Returns the offending token.
    pub fn token(&self) -> &str {
        match self {
            Self::Format { token, .. } => token,
        }
    }
}
