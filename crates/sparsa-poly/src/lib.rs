//! # sparsa-poly
//!
//! Sparse single-variable polynomials over floating-point coefficients.
//!
//! This crate provides:
//! - [`Polynomial`], a term list kept in normalized form (strictly
//!   descending exponents, no duplicates, no zero coefficients)
//! - Linear-merge addition and subtraction, pairwise multiplication,
//!   and point evaluation
//! - Text formatting in two sign styles
//! - Parsing of the `N c1 e1 ... cN eN` input protocol
//!
//! ## Normalization
//!
//! Every result is assembled through [`Polynomial::insert_term`], so a
//! zero coefficient is never stored and a term whose coefficient sums
//! to zero is removed on the spot.
//!
//! ```
//! use sparsa_poly::Polynomial;
//!
//! let p = Polynomial::from_terms([(2.0, 2), (3.0, 1)]);
//! let q = Polynomial::from_terms([(1.0, 2), (-3.0, 1)]);
//!
//! assert_eq!((&p + &q).to_string(), "3*x^2");
//! assert_eq!(p.evaluate(2.0), 14.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod format;
pub mod parse;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{ParseError, ParseResult};
pub use format::{FormatStyle, PolyDisplay};
pub use parse::{Prompt, TokenReader};
pub use sparse::Polynomial;
pub use term::Term;
