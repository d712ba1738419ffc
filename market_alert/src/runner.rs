//! Poll loop: fetch every symbol, print the report, then exit or sleep.
//!
//! The loop is a small state machine, `FETCHING -> REPORTING -> (DONE | SLEEPING -> FETCHING)`.
//! A shared `shutdown` flag, set by the Ctrl+C handler, is checked at every cycle
//! boundary and while sleeping.
use std::io::Write;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use market_common::{CycleReport, QuoteSource, Result, Ticker};

use crate::args::Config;

/// Granularity of the interruptible sleep.
const SLEEP_STEP: Duration = Duration::from_millis(200);

/// Fetches every ticker in table order. A failure is recorded and the next symbol is
/// still fetched.
pub fn fetch_cycle<S: QuoteSource>(source: &S, tickers: &[Ticker]) -> CycleReport {
    let mut report = CycleReport::new();
    for ticker in tickers {
        let (name, symbol) = (ticker.name(), ticker.symbol());
        let outcome = source.fetch_quote(name, &symbol);
        match &outcome {
            Ok(quote) => debug!(
                "{} price={} prev_close={} market_time={:?}",
                symbol, quote.price, quote.prev_close, quote.market_time
            ),
            Err(e) if e.is_quote_error() => error!("Bad payload for {}: {}", symbol, e),
            Err(e) => warn!("Failed to fetch {}: {}", symbol, e),
        }
        report.record(name, &symbol, outcome);
    }
    report
}

/// Sleeps for `duration` in short steps. Returns `false` if `shutdown` was raised.
///
/// A duration too large to add to `Instant::now()` never elapses; only `shutdown`
/// ends the sleep.
pub fn sleep_interruptible(duration: Duration, shutdown: &AtomicBool) -> bool {
    let deadline = Instant::now().checked_add(duration);
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        let step = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return true;
                }
                SLEEP_STEP.min(deadline - now)
            }
            None => SLEEP_STEP,
        };
        thread::sleep(step);
    }
}

/// Runs cycles until once-mode completes or `shutdown` is raised, writing reports to `out`.
///
/// Returns the number of completed cycles.
pub fn run<S: QuoteSource, W: Write>(
    source: &S,
    config: &Config,
    shutdown: Arc<AtomicBool>,
    out: &mut W,
) -> Result<u64> {
    let tickers = Ticker::all();
    let mut cycles = 0u64;

    while !shutdown.load(Ordering::Relaxed) {
        debug!("Cycle {} started", cycles + 1);
        let report = fetch_cycle(source, &tickers);
        report.write_to(out, config.threshold)?;
        cycles += 1;
        debug!(
            "Cycle {} done: {} quotes, {} failures, {} alerts",
            cycles,
            report.quotes.len(),
            report.failures.len(),
            report.alert_count(config.threshold)
        );

        if config.once {
            break;
        }
        if !sleep_interruptible(config.interval, &shutdown) {
            break;
        }
    }
    info!("Poll loop stopped after {} cycle(s)", cycles);
    Ok(cycles)
}
