//! Sparse univariate polynomials.
//!
//! This module provides the normalized term-list representation and
//! the arithmetic built on top of it.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::term::Term;

/// A sparse polynomial in one variable.
///
/// Terms are kept in normalized form: strictly decreasing exponent,
/// at most one term per exponent, no zero coefficients. Every
/// constructor and operation builds its result through
/// [`insert_term`](Self::insert_term), the only code that adds to or
/// modifies the term list.
#[derive(PartialEq, Debug, Default)]
pub struct Polynomial<C = f64> {
    /// Terms in descending exponent order.
    terms: Vec<Term<C>>,
}

impl<C: Float> Polynomial<C> {
    /// Creates the zero polynomial.
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new()
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial `c * x^e`.
    #[must_use]
    pub fn monomial(c: C, e: i32) -> Self {
        let mut poly = Self::new();
        poly.insert_term(c, e);
        poly
    }

    /// Creates a polynomial from `(coefficient, exponent)` pairs.
    ///
    /// Pairs may come in any order; duplicates are merged and
    /// cancellations dropped.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = (C, i32)>>(terms: I) -> Self {
        let mut poly = Self::new();
        poly.extend(terms);
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in descending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Iterates over the terms in descending exponent order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<C>> {
        self.terms.iter()
    }

    /// Returns the highest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(Term::exponent)
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    /// Returns the coefficient of `x^exponent` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, exponent: i32) -> C {
        self.terms
            .binary_search_by(|t| exponent.cmp(&t.exponent()))
            .map_or_else(|_| C::zero(), |i| self.terms[i].coefficient())
    }

    /// Removes every term, leaving the zero polynomial.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Adds `coefficient * x^exponent` into the polynomial.
    ///
    /// A zero coefficient is ignored. If a term with the same exponent
    /// exists the coefficients are summed and the term is removed when
    /// the sum is exactly zero. Otherwise a new term is spliced in at
    /// the position that keeps exponents strictly decreasing.
    pub fn insert_term(&mut self, coefficient: C, exponent: i32) {
        if coefficient == C::zero() {
            return;
        }

        // First position whose exponent is <= the target
        let pos = self.terms.partition_point(|t| t.exponent() > exponent);

        match self.terms.get_mut(pos) {
            Some(term) if term.exponent() == exponent => {
                term.add_coefficient(coefficient);
                if term.is_zero() {
                    self.terms.remove(pos);
                }
            }
            _ => self.terms.insert(pos, Term::new(coefficient, exponent)),
        }

        debug_assert!(self.is_normalized());
    }

    /// Returns true if the term list is in normalized form.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.terms.iter().all(|t| !t.is_zero())
            && self
                .terms
                .windows(2)
                .all(|w| w[0].exponent() > w[1].exponent())
    }

    /// Merges two descending term lists.
    ///
    /// Terms present only in `other` are mapped through `map_other`;
    /// equal exponents emit `a + map_other(b)`.
    fn merge(&self, other: &Self, map_other: impl Fn(C) -> C) -> Self {
        let mut result = Self::new();
        let mut a = self.terms.iter().peekable();
        let mut b = other.terms.iter().peekable();

        while let (Some(ta), Some(tb)) = (a.peek(), b.peek()) {
            if ta.exponent() == tb.exponent() {
                let c = ta.coefficient() + map_other(tb.coefficient());
                result.insert_term(c, ta.exponent());
                a.next();
                b.next();
            } else if ta.exponent() > tb.exponent() {
                result.insert_term(ta.coefficient(), ta.exponent());
                a.next();
            } else {
                result.insert_term(map_other(tb.coefficient()), tb.exponent());
                b.next();
            }
        }

        for ta in a {
            result.insert_term(ta.coefficient(), ta.exponent());
        }
        for tb in b {
            result.insert_term(map_other(tb.coefficient()), tb.exponent());
        }

        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, |c| c)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.merge(other, |c| -c)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.iter().map(Term::negate).collect()
    }

    /// Multiplies two polynomials by full pairwise distribution, or
    /// returns `None` if some product exponent does not fit in `i32`.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let mut result = Self::new();
        if self.is_zero() || other.is_zero() {
            return Some(result);
        }

        for ta in &self.terms {
            for tb in &other.terms {
                let t = ta.checked_mul(tb)?;
                result.insert_term(t.coefficient(), t.exponent());
            }
        }

        Some(result)
    }

    /// Multiplies two polynomials by full pairwise distribution.
    ///
    /// # Panics
    ///
    /// Panics if some product exponent overflows `i32`. Use
    /// [`checked_mul`](Self::checked_mul) to handle that case.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.checked_mul(other).expect("product exponent overflows i32")
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: C) -> Self {
        self.iter()
            .map(|t| Term::new(t.coefficient() * c, t.exponent()))
            .collect()
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: C) -> C {
        self.terms
            .iter()
            .fold(C::zero(), |acc, t| acc + t.evaluate(x))
    }

    /// Compares two polynomials coefficient-wise within `tolerance`.
    ///
    /// Exponents missing from one side count as zero there, so a term
    /// that cancelled exactly on one side and left rounding noise on
    /// the other still compares equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: C) -> bool {
        self.sub(other)
            .iter()
            .all(|t| t.coefficient().abs() <= tolerance)
    }
}

impl<C: Float> Clone for Polynomial<C> {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().copied());
    }
}

impl<C: Float> FromIterator<Term<C>> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = Term<C>>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl<C: Float> FromIterator<(C, i32)> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = (C, i32)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<C: Float> Extend<Term<C>> for Polynomial<C> {
    fn extend<I: IntoIterator<Item = Term<C>>>(&mut self, iter: I) {
        for t in iter {
            self.insert_term(t.coefficient(), t.exponent());
        }
    }
}

impl<C: Float> Extend<(C, i32)> for Polynomial<C> {
    fn extend<I: IntoIterator<Item = (C, i32)>>(&mut self, iter: I) {
        for (c, e) in iter {
            self.insert_term(c, e);
        }
    }
}

impl<'a, C> IntoIterator for &'a Polynomial<C> {
    type Item = &'a Term<C>;
    type IntoIter = std::slice::Iter<'a, Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<C: Float> From<Term<C>> for Polynomial<C> {
    fn from(term: Term<C>) -> Self {
        Self::monomial(term.coefficient(), term.exponent())
    }
}

// Operator impls for every owned/borrowed operand combination.
// `Mul` panics on exponent overflow like `Polynomial::mul`.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<C: Float> $Op<&Polynomial<C>> for &Polynomial<C> {
            type Output = Polynomial<C>;

            fn $op(self, rhs: &Polynomial<C>) -> Polynomial<C> {
                Polynomial::$op(self, rhs)
            }
        }

        impl<C: Float> $Op<Polynomial<C>> for &Polynomial<C> {
            type Output = Polynomial<C>;

            fn $op(self, rhs: Polynomial<C>) -> Polynomial<C> {
                Polynomial::$op(self, &rhs)
            }
        }

        impl<C: Float> $Op<&Polynomial<C>> for Polynomial<C> {
            type Output = Polynomial<C>;

            fn $op(self, rhs: &Polynomial<C>) -> Polynomial<C> {
                Polynomial::$op(&self, rhs)
            }
        }

        impl<C: Float> $Op<Polynomial<C>> for Polynomial<C> {
            type Output = Polynomial<C>;

            fn $op(self, rhs: Polynomial<C>) -> Polynomial<C> {
                Polynomial::$op(&self, &rhs)
            }
        }

        impl<C: Float> $OpAssign<&Polynomial<C>> for Polynomial<C> {
            fn $op_assign(&mut self, rhs: &Polynomial<C>) {
                *self = Polynomial::$op(self, rhs);
            }
        }

        impl<C: Float> $OpAssign<Polynomial<C>> for Polynomial<C> {
            fn $op_assign(&mut self, rhs: Polynomial<C>) {
                *self = Polynomial::$op(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl<C: Float> Neg for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        Polynomial::neg(self)
    }
}

impl<C: Float> Neg for Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        Polynomial::neg(&self)
    }
}
