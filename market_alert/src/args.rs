//! Command-line arguments for the market alert program.
//!
//! This module defines the CLI interface using `clap` and converts it into the
//! immutable `Config` consumed by the runner.
use std::time::Duration;

use clap::Parser;

/// Default quote provider base URL.
pub const DEFAULT_ENDPOINT: &str = "https://query1.finance.yahoo.com";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "US market real-time alert program for S&P 500, VOO, and NVIDIA.",
    long_about = None
)]
pub struct Args {
    /// Polling interval in seconds.
    #[clap(long, default_value_t = 60)]
    pub interval: u64,

    /// Alert threshold for percent change.
    #[clap(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Fetch and print once, then exit.
    #[clap(long)]
    pub once: bool,

    /// Base URL of the chart API provider.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

/// Runtime configuration, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sleep between cycles.
    pub interval: Duration,
    /// Absolute percent change at which a quote is reported as `[ALERT]`.
    pub threshold: f64,
    /// Stop after the first cycle.
    pub once: bool,
    /// Provider base URL without a trailing slash.
    pub endpoint: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            interval: Duration::from_secs(args.interval),
            threshold: args.threshold,
            once: args.once,
            endpoint: args.endpoint.trim().trim_end_matches('/').to_string(),
        }
    }
}
