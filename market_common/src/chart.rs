//! Chart API payload decoding.
//!
//! The provider answers `GET /v8/finance/chart/{symbol}` with a document shaped like
//! `{"chart": {"result": [{"meta": {...}}]}}`. Only the first result's `meta` section is
//! read; everything else (candles, indicators, trading periods) is ignored.
use chrono::DateTime;
use serde::Deserialize;

use crate::error::MarketError;
use crate::quote::{DEFAULT_CURRENCY, Quote};
use crate::result::Result;

/// Anything that can produce a quote for a (display name, symbol) pair.
///
/// The alert loop only depends on this trait, so the HTTP client can be swapped for
/// a canned source in tests.
pub trait QuoteSource {
    /// Fetches one quote. Each call is independent; implementations must not retry.
    fn fetch_quote(&self, name: &str, symbol: &str) -> Result<Quote>;
}

#[derive(Debug, Default, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    chart: Option<Chart>,
}

#[derive(Debug, Default, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    currency: Option<String>,
    regular_market_time: Option<i64>,
}

/// Decodes a chart response body into a `Quote` for `name`/`symbol`.
///
/// Fails with `MarketError::Decode` when the body is not JSON of the expected shape,
/// and with `MarketError::Quote` when the result list is empty or the price fields
/// are missing. An absent or empty currency falls back to `USD`.
pub fn parse_quote(name: &str, symbol: &str, body: &str) -> Result<Quote> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|source| MarketError::Decode {
            symbol: symbol.to_string(),
            source,
        })?;

    let first = response
        .chart
        .and_then(|chart| chart.result)
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketError::Quote(format!("No data returned for {}", symbol)))?;

    let meta = first.meta.unwrap_or_default();
    let (price, prev_close) = match (meta.regular_market_price, meta.previous_close) {
        (Some(price), Some(prev_close)) => (price, prev_close),
        _ => {
            return Err(MarketError::Quote(format!(
                "Missing price data for {}",
                symbol
            )));
        }
    };

    let currency = meta
        .currency
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let market_time = meta
        .regular_market_time
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Ok(Quote::new(name, symbol, price, prev_close, &currency).with_market_time(market_time))
}
