//! Quote record and change calculation.
//!
//! A `Quote` is built fresh on every poll cycle from the chart endpoint's metadata
//! and dropped once it has been printed.
use chrono::{DateTime, Utc};

/// Currency reported when the provider omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// One successful price observation for a ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Display label (e.g., `NVIDIA`).
    pub name: String,
    /// Provider symbol (e.g., `NVDA`).
    pub symbol: String,
    /// Current price.
    pub price: f64,
    /// Previous session's close.
    pub prev_close: f64,
    /// Currency code.
    pub currency: String,
    /// Provider timestamp of `price`, when supplied.
    pub market_time: Option<DateTime<Utc>>,
}

impl Quote {
    /// Creates a quote without a market timestamp.
    pub fn new(name: &str, symbol: &str, price: f64, prev_close: f64, currency: &str) -> Self {
        Quote {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price,
            prev_close,
            currency: currency.to_string(),
            market_time: None,
        }
    }

    /// Attaches the provider timestamp.
    pub fn with_market_time(mut self, market_time: Option<DateTime<Utc>>) -> Self {
        self.market_time = market_time;
        self
    }

    /// `price - prev_close`.
    pub fn change_absolute(&self) -> f64 {
        self.price - self.prev_close
    }

    /// Percent change from the previous close. A zero previous close yields exactly `0.0`.
    pub fn change_percent(&self) -> f64 {
        if self.prev_close == 0.0 {
            return 0.0;
        }
        (self.price - self.prev_close) / self.prev_close * 100.0
    }
}
