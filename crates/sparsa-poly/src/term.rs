//! Single-variable terms.
//!
//! A term is one monomial `c * x^e` of a polynomial. Terms carry no
//! normalization rules of their own; those live in [`Polynomial`].
//!
//! [`Polynomial`]: crate::Polynomial

use std::fmt;

use num_traits::Float;

/// A single monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Term<C = f64> {
    coefficient: C,
    exponent: i32,
}

impl<C: Float> Term<C> {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: C, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> C {
        self.coefficient
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == C::zero()
    }

    /// Returns the term with its coefficient sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }

    /// Multiplies two terms, or returns `None` if the exponent sum
    /// does not fit in `i32`.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let exponent = self.exponent.checked_add(other.exponent)?;
        Some(Self::new(self.coefficient * other.coefficient, exponent))
    }

    /// Multiplies two terms (multiplies coefficients, adds exponents).
    ///
    /// # Panics
    ///
    /// Panics if the exponent sum overflows `i32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.checked_mul(other).expect("term exponent overflows i32")
    }

    /// Evaluates `c * x^e`.
    ///
    /// Negative exponents use reciprocal powers, so `x = 0` with a
    /// negative exponent yields an infinity.
    #[must_use]
    pub fn evaluate(&self, x: C) -> C {
        self.coefficient * x.powi(self.exponent)
    }

    pub(crate) fn add_coefficient(&mut self, c: C) {
        self.coefficient = self.coefficient + c;
    }
}

impl<C: Float> From<(C, i32)> for Term<C> {
    fn from((coefficient, exponent): (C, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl<C: Float + fmt::Display> fmt::Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*x^{}", self.coefficient, self.exponent)
    }
}
