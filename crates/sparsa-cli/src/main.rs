//! sparsa - interactive sparse polynomial calculator.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

mod config;
mod session;

use config::{Cli, SessionConfig};
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SessionConfig::from(cli);
    debug!("session config: {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}
