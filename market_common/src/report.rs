//! Report rendering for one poll cycle.
//!
//! A cycle produces a `CycleReport`: successful quotes and failure lines, both in fetch
//! order. Rendering emits the warning block first (only when something failed), then
//! one `[ALERT]` or `[INFO]` line per quote.
use std::fmt;
use std::io::Write;

use crate::error::MarketError;
use crate::quote::Quote;
use crate::result::Result;

/// Header printed above the list of failed symbols.
pub const WARN_HEADER: &str = "[WARN] Failed to fetch some quotes:";

/// Severity tag for a quote line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Change stayed below the threshold.
    Info,
    /// Change met or exceeded the threshold.
    Alert,
}

impl Level {
    /// Picks the level for `quote` under `threshold` percent.
    pub fn for_quote(quote: &Quote, threshold: f64) -> Self {
        if should_alert(quote, threshold) {
            Level::Alert
        } else {
            Level::Info
        }
    }
}

impl fmt::Display for Level {
    // Both tags render seven columns wide so the quote text lines up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("[INFO] "),
            Level::Alert => f.write_str("[ALERT]"),
        }
    }
}

/// `true` when the absolute percent change reaches `threshold`; the boundary alerts.
pub fn should_alert(quote: &Quote, threshold: f64) -> bool {
    quote.change_percent().abs() >= threshold
}

/// Renders `NAME (SYMBOL) PRICE CCY (+ABS, +PCT%)` with two decimals and explicit signs.
pub fn format_quote(quote: &Quote) -> String {
    format!(
        "{} ({}) {:.2} {} ({:+.2}, {:+.2}%)",
        quote.name,
        quote.symbol,
        quote.price,
        quote.currency,
        quote.change_absolute(),
        quote.change_percent()
    )
}

/// Renders a failed fetch as `NAME (SYMBOL): message`.
pub fn format_failure(name: &str, symbol: &str, error: &MarketError) -> String {
    format!("{} ({}): {}", name, symbol, error)
}

/// Outcome of one FETCHING phase.
#[derive(Debug, Default, Clone)]
pub struct CycleReport {
    /// Successfully fetched quotes, in fetch order.
    pub quotes: Vec<Quote>,
    /// Rendered failure lines, in fetch order.
    pub failures: Vec<String>,
}

impl CycleReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of fetching one symbol.
    pub fn record(&mut self, name: &str, symbol: &str, outcome: Result<Quote>) {
        match outcome {
            Ok(quote) => self.quotes.push(quote),
            Err(e) => self.failures.push(format_failure(name, symbol, &e)),
        }
    }

    /// Number of quotes that would be reported as `[ALERT]`.
    pub fn alert_count(&self, threshold: f64) -> usize {
        self.quotes
            .iter()
            .filter(|q| should_alert(q, threshold))
            .count()
    }

    /// Report lines in print order.
    pub fn lines(&self, threshold: f64) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.quotes.len() + self.failures.len() + 1);
        if !self.failures.is_empty() {
            lines.push(WARN_HEADER.to_string());
            lines.extend(self.failures.iter().map(|f| format!("  - {}", f)));
        }
        for quote in &self.quotes {
            lines.push(format!(
                "{} {}",
                Level::for_quote(quote, threshold),
                format_quote(quote)
            ));
        }
        lines
    }

    /// Writes the report to `out`, one line each, and flushes.
    pub fn write_to<W: Write>(&self, out: &mut W, threshold: f64) -> Result<()> {
        for line in self.lines(threshold) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, symbol: &str, price: f64, prev_close: f64) -> Quote {
        Quote::new(name, symbol, price, prev_close, "USD")
    }

    #[test]
    fn formats_reference_quote_exactly() {
        let q = quote("NVIDIA", "NVDA", 123.45, 120.00);
        assert_eq!(format_quote(&q), "NVIDIA (NVDA) 123.45 USD (+3.45, +2.88%)");
    }

    #[test]
    fn change_figures_always_carry_a_sign() {
        let up = quote("VOO", "VOO", 101.5, 100.0);
        assert_eq!(format_quote(&up), "VOO (VOO) 101.50 USD (+1.50, +1.50%)");

        let down = quote("VOO", "VOO", 98.0, 100.0);
        assert_eq!(format_quote(&down), "VOO (VOO) 98.00 USD (-2.00, -2.00%)");

        let flat = quote("VOO", "VOO", 100.0, 100.0);
        assert_eq!(format_quote(&flat), "VOO (VOO) 100.00 USD (+0.00, +0.00%)");
    }

    #[test]
    fn zero_previous_close_formats_zero_percent() {
        let q = quote("S&P 500", "^GSPC", 4500.0, 0.0);
        assert_eq!(
            format_quote(&q),
            "S&P 500 (^GSPC) 4500.00 USD (+4500.00, +0.00%)"
        );
    }

    #[test]
    fn alert_boundary_is_inclusive() {
        let q = quote("VOO", "VOO", 101.0, 100.0);
        assert!(should_alert(&q, 1.0));
        assert!(!should_alert(&q, 1.01));

        let down = quote("VOO", "VOO", 99.0, 100.0);
        assert!(should_alert(&down, 1.0));
        assert_eq!(Level::for_quote(&down, 1.0), Level::Alert);
    }

    #[test]
    fn zero_threshold_alerts_on_any_move() {
        let moved = quote("VOO", "VOO", 100.01, 100.0);
        assert!(should_alert(&moved, 0.0));
        let flat = quote("VOO", "VOO", 0.5, 0.0);
        assert!(should_alert(&flat, 0.0));
    }

    #[test]
    fn failures_are_listed_before_quotes_in_fetch_order() {
        let mut report = CycleReport::new();
        report.record("S&P 500", "^GSPC", Ok(quote("S&P 500", "^GSPC", 5000.0, 4990.0)));
        report.record(
            "VOO",
            "VOO",
            Err(MarketError::Quote("Missing price data for VOO".to_string())),
        );
        report.record("NVIDIA", "NVDA", Ok(quote("NVIDIA", "NVDA", 123.45, 120.0)));

        assert_eq!(report.alert_count(1.0), 1);
        assert_eq!(
            report.lines(1.0),
            vec![
                "[WARN] Failed to fetch some quotes:",
                "  - VOO (VOO): Missing price data for VOO",
                "[INFO]  S&P 500 (^GSPC) 5000.00 USD (+10.00, +0.20%)",
                "[ALERT] NVIDIA (NVDA) 123.45 USD (+3.45, +2.88%)",
            ]
        );
    }

    #[test]
    fn no_warn_block_without_failures() {
        let mut report = CycleReport::new();
        report.record("VOO", "VOO", Ok(quote("VOO", "VOO", 98.0, 100.0)));

        let mut out = Vec::new();
        report.write_to(&mut out, 5.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[INFO]  VOO (VOO) 98.00 USD (-2.00, -2.00%)\n"
        );
    }
}
