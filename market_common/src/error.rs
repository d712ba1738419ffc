//! Error types shared by the quote library and the alert binary.
//!
//! The `MarketError` enum unifies transport failures, malformed provider payloads,
//! and process-level setup failures, allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Boxed transport error as produced by whichever HTTP client backs a `QuoteSource`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type shared by the workspace.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Transport-level failure: connection refused, timeout, or a non-2xx HTTP status.
    #[error("request for {symbol} failed: {cause}")]
    Fetch {
        /// Ticker symbol the request was issued for.
        symbol: String,
        /// `source` and every error beneath it, joined with `": "`.
        cause: String,
        /// Underlying transport error.
        #[source]
        source: BoxError,
    },

    /// Provider answered, but the payload lacks the data needed to build a quote.
    #[error("{0}")]
    Quote(String),

    /// Provider answered with a body that is not the expected JSON document.
    #[error("invalid chart payload for {symbol}: {source}")]
    Decode {
        /// Ticker symbol the payload was requested for.
        symbol: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Installing the interrupt handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}

impl MarketError {
    /// Builds a `Fetch` error from any transport error, keeping its whole cause chain
    /// in the message.
    pub fn fetch(symbol: &str, source: impl Into<BoxError>) -> Self {
        let source = source.into();
        MarketError::Fetch {
            symbol: symbol.to_string(),
            cause: error_chain(&*source),
            source,
        }
    }

    /// Returns `true` for errors caused by the payload rather than the transport.
    pub fn is_quote_error(&self) -> bool {
        matches!(self, MarketError::Quote(_) | MarketError::Decode { .. })
    }
}

/// Renders `err` followed by each of its sources, skipping a source whose text the
/// previous level already ends with.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let message = cause.to_string();
        if !message.is_empty() && !text.ends_with(&message) {
            text.push_str(": ");
            text.push_str(&message);
        }
        current = cause.source();
    }
    text
}
