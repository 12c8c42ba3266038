//! Errors raised while reading polynomials from text.

use thiserror::Error;

/// Errors that can occur while parsing a polynomial.
///
/// `index` fields are zero-based positions of the pair being read.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input ended before a required token.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },

    /// The term count is not an integer.
    #[error("invalid term count `{token}`")]
    InvalidCount {
        /// The offending token.
        token: String,
    },

    /// The term count is negative.
    ///
    /// A stream-style reader looping `0..count` would read nothing and
    /// yield the zero polynomial; this reader rejects the count instead.
    #[error("term count must not be negative, got {count}")]
    NegativeCount {
        /// The count that was read.
        count: i64,
    },

    /// A coefficient is not a number.
    #[error("invalid coefficient `{token}` for term {index}")]
    InvalidCoefficient {
        /// Position of the pair.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// An exponent is not an `i32`.
    #[error("invalid exponent `{token}` for term {index}")]
    InvalidExponent {
        /// Position of the pair.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// A standalone value could not be parsed.
    #[error("invalid value `{token}`")]
    InvalidValue {
        /// The offending token.
        token: String,
    },

    /// Tokens remain after a complete polynomial.
    #[error("unexpected trailing input `{token}`")]
    TrailingInput {
        /// The first extra token.
        token: String,
    },

    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
