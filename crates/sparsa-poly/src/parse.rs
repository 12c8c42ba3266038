//! Reading polynomials from text streams.
//!
//! The input protocol is a term count `N` followed by `N`
//! `coefficient exponent` pairs, all separated by arbitrary whitespace
//! (including newlines). Pairs are inserted one at a time through
//! [`Polynomial::insert_term`], so repeated exponents merge and
//! cancelling pairs disappear.

use std::io::BufRead;
use std::str::FromStr;

use log::{debug, trace};
use num_traits::Float;

use crate::error::{ParseError, ParseResult};
use crate::sparse::Polynomial;

/// What the reader is about to ask for.
///
/// Interactive callers use this to print a prompt before each read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Prompt {
    /// The number of terms.
    TermCount,
    /// The coefficient/exponent pair with the given zero-based index.
    Term {
        /// Index of the pair.
        index: usize,
    },
}

/// Splits a buffered reader into whitespace-separated tokens.
///
/// Lines are pulled lazily, so a token is available as soon as the
/// line containing it has been entered.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> ParseResult<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let tail = &rest[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                let token = tail[..len].to_string();
                self.pos += start + len;
                return Ok(Some(token));
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    fn expect_token(&mut self, expected: &'static str) -> ParseResult<String> {
        self.next_token()?
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    /// Reads a single value such as an evaluation point.
    pub fn read_value<T: FromStr>(&mut self) -> ParseResult<T> {
        let token = self.expect_token("value")?;
        token
            .parse()
            .map_err(|_| ParseError::InvalidValue { token })
    }

    /// Reads a term count.
    fn read_count(&mut self) -> ParseResult<usize> {
        let token = self.expect_token("term count")?;
        let count: i64 = token
            .parse()
            .map_err(|_| ParseError::InvalidCount {
                token: token.clone(),
            })?;
        usize::try_from(count).map_err(|_| ParseError::NegativeCount { count })
    }

    /// Reads a polynomial without prompting.
    pub fn read_polynomial<C>(&mut self) -> ParseResult<Polynomial<C>>
    where
        C: Float + FromStr,
    {
        self.read_polynomial_with(|_| Ok(()))
    }

    /// Reads a polynomial, calling `on_prompt` before each read.
    pub fn read_polynomial_with<C, F>(&mut self, mut on_prompt: F) -> ParseResult<Polynomial<C>>
    where
        C: Float + FromStr,
        F: FnMut(Prompt) -> std::io::Result<()>,
    {
        on_prompt(Prompt::TermCount)?;
        let count = self.read_count()?;

        let mut poly = Polynomial::new();
        for index in 0..count {
            on_prompt(Prompt::Term { index })?;

            let token = self.expect_token("coefficient")?;
            let coefficient: C = token
                .parse()
                .map_err(|_| ParseError::InvalidCoefficient { index, token })?;

            let token = self.expect_token("exponent")?;
            let exponent: i32 = token
                .parse()
                .map_err(|_| ParseError::InvalidExponent { index, token })?;

            trace!("term {index}: exponent {exponent}");
            let before = poly.len();
            poly.insert_term(coefficient, exponent);
            if poly.len() < before {
                debug!("term {index} cancelled exponent {exponent}");
            }
        }

        debug!("read polynomial: {count} pairs, {} terms", poly.len());
        Ok(poly)
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<C: Float + FromStr> FromStr for Polynomial<C> {
    type Err = ParseError;

    /// Parses `"N c1 e1 c2 e2 ..."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = TokenReader::new(s.as_bytes());
        let poly = tokens.read_polynomial()?;

        match tokens.next_token()? {
            Some(token) => Err(ParseError::TrailingInput { token }),
            None => Ok(poly),
        }
    }
}
