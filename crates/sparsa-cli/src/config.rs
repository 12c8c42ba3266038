//! Command-line configuration.

use clap::{Parser, ValueEnum};
use sparsa_poly::FormatStyle;

/// Interactive sparse polynomial calculator.
///
/// Reads two polynomials as a term count followed by
/// `coefficient exponent` pairs, prints their sum and product, then
/// evaluates the first one at a point.
#[derive(Parser, Debug)]
#[command(
    name = "sparsa",
    version = env!("CARGO_PKG_VERSION"),
    after_help = r#"
Environment Variables:
  SPARSA_SUBTRACT=1          Also print p1 - p2
  SPARSA_TIMING=1            Print elapsed seconds for each step
  SPARSA_STYLE=signed        Output style (classic, signed)
  SPARSA_QUIET=1             Do not print input prompts
  SPARSA_LOG_LEVEL=debug     Set log level (error, warn, info, debug, trace)
"#
)]
pub struct Cli {
    /// Also compute and print p1 - p2
    #[arg(long, env = "SPARSA_SUBTRACT", value_parser = parse_bool_env)]
    pub subtract: bool,

    /// Print wall-clock seconds for each arithmetic step
    #[arg(long, env = "SPARSA_TIMING", value_parser = parse_bool_env)]
    pub timing: bool,

    /// How to render negative terms
    #[arg(long, value_enum, env = "SPARSA_STYLE", default_value = "classic")]
    pub style: StyleArg,

    /// Do not print input prompts
    #[arg(short, long, env = "SPARSA_QUIET", value_parser = parse_bool_env)]
    pub quiet: bool,

    /// Set log level
    #[arg(long, value_enum, env = "SPARSA_LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// "2*x^2-3*x^1": negative terms carry their own sign
    Classic,
    /// "2*x^2 - 3*x^1": explicit minus separator
    Signed,
}

impl From<StyleArg> for FormatStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Classic => FormatStyle::Classic,
            StyleArg::Signed => FormatStyle::Signed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings consumed by [`Session`](crate::session::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub subtract: bool,
    pub timing: bool,
    pub style: FormatStyle,
    pub prompts: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            subtract: false,
            timing: false,
            style: FormatStyle::Classic,
            prompts: true,
        }
    }
}

impl From<&Cli> for SessionConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            subtract: cli.subtract,
            timing: cli.timing,
            style: cli.style.into(),
            prompts: !cli.quiet,
        }
    }
}

/// Parses boolean environment values, treating an empty string as false.
fn parse_bool_env(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(format!(
            "Invalid boolean value '{s}'. Expected: 1/0, true/false, yes/no, on/off"
        )),
    }
}
