//! Decimal conventions for number tokens.
//!
//! Expressions are written in one decimal convention at a time: either
//! `1,5` (comma) or `1.5` (point). A [`NumberFormat`] captures the
//! convention in use and converts tokens to `f64` under it.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{EvalError, Result};

/// The character separating the integer part from the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalSeparator {
    /// `1,5`
    #[default]
    Comma,
    /// `1.5`
    Point,
}

impl DecimalSeparator {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Point => '.',
        }
    }
}

impl Display for DecimalSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comma => f.write_str("comma"),
            Self::Point => f.write_str("point"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown decimal separator '{0}' (expected 'comma' or 'point')")]
pub struct ParseSeparatorError(String);

impl FromStr for DecimalSeparator {
    type Err = ParseSeparatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Self::Comma),
            "point" | "dot" | "." => Ok(Self::Point),
            _ => Err(ParseSeparatorError(s.to_string())),
        }
    }
}

/// Parses and renders numbers under one decimal convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberFormat {
    separator: DecimalSeparator,
}

impl NumberFormat {
    pub fn new(separator: DecimalSeparator) -> Self {
        Self { separator }
    }

    /// `1,5`
    pub fn comma() -> Self {
        Self::new(DecimalSeparator::Comma)
    }

    /// `1.5`
    pub fn point() -> Self {
        Self::new(DecimalSeparator::Point)
    }

    pub fn separator(self) -> DecimalSeparator {
        self.separator
    }

    /// Parses one number token.
    ///
    /// Surrounding whitespace is ignored. The accepted grammar is
    /// `[+-] digits [sep digits] [(e|E) [+-] digits]` with at least one
    /// mantissa digit; `sep` must be this format's separator. Anything else,
    /// including an empty token, is [`EvalError::Format`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use abacus::NumberFormat;
    /// assert_eq!(NumberFormat::comma().parse("2,5").unwrap(), 2.5);
    /// assert!(NumberFormat::comma().parse("2.5").is_err());
    /// assert_eq!(NumberFormat::point().parse(" 2.5 ").unwrap(), 2.5);
    /// ```
    pub fn parse(self, token: &str) -> Result<f64> {
        let trimmed = token.trim();
        let sep = self.separator.as_char();

        if !is_well_formed(trimmed, sep) {
            return Err(EvalError::format(token, self.separator));
        }

        let normalized = match self.separator {
            DecimalSeparator::Point => trimmed.to_string(),
            DecimalSeparator::Comma => trimmed.replace(sep, "."),
        };

        normalized
            .parse::<f64>()
            .map_err(|_| EvalError::format(token, self.separator))
    }

    /// Renders a number with this format's separator.
    pub fn format(self, value: f64) -> String {
        let rendered = value.to_string();
        match self.separator {
            DecimalSeparator::Point => rendered,
            DecimalSeparator::Comma => rendered.replace('.', ","),
        }
    }
}

impl From<DecimalSeparator> for NumberFormat {
    fn from(separator: DecimalSeparator) -> Self {
        Self::new(separator)
    }
}

fn is_well_formed(token: &str, sep: char) -> bool {
    let mut chars = token.chars().peekable();

    if matches!(chars.peek(), Some('+' | '-')) {
        chars.next();
    }

    let mut mantissa_digits = 0usize;
    while chars.next_if(char::is_ascii_digit).is_some() {
        mantissa_digits += 1;
    }
    if chars.next_if_eq(&sep).is_some() {
        while chars.next_if(char::is_ascii_digit).is_some() {
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if chars.next_if(|&c| matches!(c, 'e' | 'E')).is_some() {
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        let mut exponent_digits = 0usize;
        while chars.next_if(char::is_ascii_digit).is_some() {
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}
