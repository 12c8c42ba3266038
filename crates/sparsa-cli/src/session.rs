//! The interactive calculator session.
//!
//! The session owns a token reader over the input and a writer for the
//! transcript, so it runs the same against a terminal or in-memory
//! buffers.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use sparsa_poly::{Polynomial, Prompt, TokenReader};

use crate::config::SessionConfig;

/// Runs `f` and returns its result with the elapsed wall-clock time.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// One calculator run: read p1 and p2, print the results, evaluate p1.
pub struct Session<R, W> {
    input: TokenReader<R>,
    out: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `out`.
    pub fn new(input: R, out: W, config: SessionConfig) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            config,
        }
    }

    /// Runs the whole session.
    pub fn run(&mut self) -> Result<()> {
        let p1 = self
            .read_polynomial("first")
            .context("reading the first polynomial")?;
        let p2 = self
            .read_polynomial("second")
            .context("reading the second polynomial")?;

        let (sum, elapsed) = timed(|| &p1 + &p2);
        self.report("p1 + p2", &sum, "Addition", elapsed)?;

        let (product, elapsed) = timed(|| p1.checked_mul(&p2));
        let product = product.context("p1 * p2 has an exponent outside the i32 range")?;
        self.report("p1 * p2", &product, "Multiplication", elapsed)?;

        if self.config.subtract {
            let (difference, elapsed) = timed(|| &p1 - &p2);
            self.report("p1 - p2", &difference, "Subtraction", elapsed)?;
        }

        self.prompt("Enter x to evaluate p1: ")?;
        let x: f64 = self
            .input
            .read_value()
            .context("reading the evaluation point")?;

        let (value, elapsed) = timed(|| p1.evaluate(x));
        writeln!(self.out, "p1({x}) = {value}")?;
        self.report_time("Evaluation", elapsed)?;

        self.out.flush()?;
        Ok(())
    }

    fn read_polynomial(&mut self, which: &str) -> Result<Polynomial> {
        if self.config.prompts {
            writeln!(self.out, "Enter the {which} polynomial:")?;
        }

        let prompts = self.config.prompts;
        let out = &mut self.out;
        let poly = self.input.read_polynomial_with(|prompt| {
            if !prompts {
                return Ok(());
            }
            match prompt {
                Prompt::TermCount => write!(out, "Number of terms: ")?,
                Prompt::Term { index } => {
                    write!(out, "Coefficient and exponent of term {}: ", index + 1)?;
                }
            }
            out.flush()
        })?;

        info!("{which} polynomial has {} terms", poly.len());
        Ok(poly)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.config.prompts {
            write!(self.out, "{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn report(
        &mut self,
        label: &str,
        poly: &Polynomial,
        step: &str,
        elapsed: Duration,
    ) -> Result<()> {
        writeln!(self.out, "{label} = {}", poly.display(self.config.style))?;
        self.report_time(step, elapsed)
    }

    fn report_time(&mut self, step: &str, elapsed: Duration) -> Result<()> {
        info!("{step} took {elapsed:?}");
        if self.config.timing {
            writeln!(self.out, "{step} time: {} s", elapsed.as_secs_f64())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sparsa_poly::{FormatStyle, ParseError};

    use super::*;

    const QUIET: SessionConfig = SessionConfig {
        subtract: false,
        timing: false,
        style: FormatStyle::Classic,
        prompts: false,
    };

    fn run(input: &str, config: SessionConfig) -> Result<String> {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config);
        session.run()?;
        Ok(String::from_utf8(session.out).unwrap())
    }

    #[test]
    fn test_sum_product_and_value() {
        let out = run("2\n2 2\n3 1\n2\n1 2\n-3 1\n2\n", QUIET).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "p1 + p2 = 3*x^2",
                "p1 * p2 = 2*x^4-3*x^3-9*x^2",
                "p1(2) = 14",
            ]
        );
    }

    #[test]
    fn test_subtract_signed() {
        let config = SessionConfig {
            subtract: true,
            style: FormatStyle::Signed,
            ..QUIET
        };
        let out = run("1 1 1\n1 1 1\n5", config).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec!["p1 + p2 = 2*x^1", "p1 * p2 = 1*x^2", "p1 - p2 = 0", "p1(5) = 5"]
        );
    }

    #[test]
    fn test_timing_lines() {
        let config = SessionConfig {
            timing: true,
            subtract: true,
            ..QUIET
        };
        let out = run("1 2 0\n0\n5", config).unwrap();
        let steps: Vec<&str> = out
            .lines()
            .filter(|l| l.ends_with(" s"))
            .map(|l| l.split(" time: ").next().unwrap())
            .collect();

        assert_eq!(steps, vec!["Addition", "Multiplication", "Subtraction", "Evaluation"]);
        assert!(out.contains("p1(5) = 2"));
    }

    #[test]
    fn test_prompts() {
        let out = run("1 1 0\n1 1 0\n3\n", SessionConfig::default()).unwrap();

        assert!(out.starts_with("Enter the first polynomial:\nNumber of terms: "));
        assert!(out.contains("Coefficient and exponent of term 1: "));
        assert!(out.contains("Enter the second polynomial:"));
        assert!(out.contains("Enter x to evaluate p1: p1(3) = 1"));
    }

    #[test]
    fn test_malformed_input() {
        let err = run("2 1 1 x 0\n", QUIET).unwrap_err();

        assert_eq!(err.to_string(), "reading the first polynomial");
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::InvalidCoefficient { index: 1, .. })
        ));
    }

    #[test]
    fn test_product_exponent_overflow() {
        let input = format!("1 1 {}\n1 1 1\n2\n", i32::MAX);
        let err = run(&input, QUIET).unwrap_err();

        assert_eq!(err.to_string(), "p1 * p2 has an exponent outside the i32 range");
    }

    #[test]
    fn test_missing_point() {
        let err = run("0\n0\n", QUIET).unwrap_err();
        assert_eq!(err.to_string(), "reading the evaluation point");
    }
}
