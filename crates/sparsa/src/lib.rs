//! # Sparsa
//!
//! Sparse polynomials in one variable, stored as normalized term lists.
//!
//! ## Features
//!
//! - **Normalized storage**: strictly descending exponents, no
//!   duplicates, no zero coefficients
//! - **Linear merges**: addition and subtraction walk both term lists once
//! - **Generic coefficients**: any `num_traits::Float` (`f32`, `f64`)
//! - **Text I/O**: count-then-pairs parsing and two output styles
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsa::prelude::*;
//!
//! let p: Polynomial = "2  2 2  3 1".parse().unwrap();
//! let x = Polynomial::monomial(1.0, 1);
//!
//! assert_eq!((&p * &x).to_string(), "2*x^3 + 3*x^2");
//! assert_eq!(p.evaluate(1.0), 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sparsa_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sparsa_poly::{FormatStyle, ParseError, Polynomial, Term, TokenReader};
}
