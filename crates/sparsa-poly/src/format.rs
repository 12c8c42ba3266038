//! Textual rendering of polynomials.
//!
//! Two styles are supported. [`FormatStyle::Classic`] writes `" + "`
//! only in front of positive terms and lets negative coefficients carry
//! their own sign, so `2x^2 - 3x` renders as `2*x^2-3*x^1`.
//! [`FormatStyle::Signed`] writes an explicit `" - "` separator instead.

use std::fmt;

use num_traits::Float;

use crate::sparse::Polynomial;

/// How to join consecutive terms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FormatStyle {
    /// `" + "` before positive terms; negative terms print inline.
    #[default]
    Classic,
    /// `" + "` or `" - "` before every term after the first.
    Signed,
}

impl FormatStyle {
    /// Returns a short name for the style.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            FormatStyle::Classic => "classic",
            FormatStyle::Signed => "signed",
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A [`Display`](fmt::Display) adapter rendering a polynomial in a
/// given style.
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a, C> {
    poly: &'a Polynomial<C>,
    style: FormatStyle,
}

impl<C: Float> Polynomial<C> {
    /// Returns a display adapter for the given style.
    #[must_use]
    pub fn display(&self, style: FormatStyle) -> PolyDisplay<'_, C> {
        PolyDisplay { poly: self, style }
    }
}

impl<C: Float + fmt::Display> fmt::Display for PolyDisplay<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.poly.iter().enumerate() {
            let c = term.coefficient();
            let e = term.exponent();

            if i == 0 {
                write!(f, "{c}*x^{e}")?;
                continue;
            }

            match self.style {
                FormatStyle::Classic => {
                    if c > C::zero() {
                        write!(f, " + ")?;
                    }
                    write!(f, "{c}*x^{e}")?;
                }
                FormatStyle::Signed => {
                    if c < C::zero() {
                        write!(f, " - {}*x^{e}", c.abs())?;
                    } else {
                        write!(f, " + {c}*x^{e}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl<C: Float + fmt::Display> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(FormatStyle::Classic), f)
    }
}
