//! Market Alert — polls the Yahoo Finance chart API for the S&P 500 index, the VOO ETF
//! and NVIDIA, and prints one line per symbol with the change from the previous close.
//! Moves at or beyond the threshold are tagged `[ALERT]`, everything else `[INFO]`;
//! symbols that could not be fetched are listed under a `[WARN]` block.
//!
//! Usage example (CLI):
//! ```bash
//! market_alert --interval 30 --threshold 1.5
//! market_alert --once
//! ```
//!
//! The report goes to stdout; diagnostics go to stderr and honour `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod runner;

use crate::args::{Args, Config};
use crate::fetcher::ChartClient;
use clap::Parser;
use log::{error, info};
use market_common::MarketError;
use market_common::Result;
use std::io;
use std::process::ExitCode;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn main() -> ExitCode {
    init_logger();
    let config = Config::from(Args::parse());
    exit_code(run(config))
}

/// Installs the interrupt handler, builds the client and drives the poll loop.
fn run(config: Config) -> Result<(), MarketError> {
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping after the current step...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| MarketError::Signal(e.to_string()))?;
    }

    info!(
        "Polling {} every {}s, alert threshold {:.2}%{}",
        config.endpoint,
        config.interval.as_secs(),
        config.threshold,
        if config.once { " (once)" } else { "" }
    );

    let client = ChartClient::new(&config.endpoint)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(&client, &config, shutdown, &mut out)?;
    Ok(())
}

/// Maps the outcome of `run` to the process exit code, logging any error.
fn exit_code(result: Result<(), MarketError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
