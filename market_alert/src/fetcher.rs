//! HTTP quote source backed by the Yahoo Finance chart API.
//!
//! One blocking GET per call, bounded by [`REQUEST_TIMEOUT`]; no retries.
use std::time::Duration;

use log::debug;
use market_common::chart::{QuoteSource, parse_quote};
use market_common::{MarketError, Quote, Result};
use reqwest::blocking::Client;

/// Upper bound for a single chart request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Candle interval requested from the chart endpoint.
const CHART_INTERVAL: &str = "2m";
/// Time range requested from the chart endpoint.
const CHART_RANGE: &str = "1d";

/// Blocking chart API client.
pub struct ChartClient {
    client: Client,
    base_url: String,
}

impl ChartClient {
    /// Builds a client for `base_url` (e.g., `https://query1.finance.yahoo.com`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Builds a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketError::Client(e.to_string()))?;
        Ok(ChartClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Chart URL for `symbol`, without the query string.
    pub fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }
}

impl QuoteSource for ChartClient {
    fn fetch_quote(&self, name: &str, symbol: &str) -> Result<Quote> {
        let url = self.chart_url(symbol);
        debug!("GET {} interval={} range={}", url, CHART_INTERVAL, CHART_RANGE);

        let body = self
            .client
            .get(&url)
            .query(&[("interval", CHART_INTERVAL), ("range", CHART_RANGE)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| MarketError::fetch(symbol, e))?;

        parse_quote(name, symbol, &body)
    }
}
