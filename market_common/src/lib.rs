//!
//! Domain types and pure logic for the market alert program.
//!
//! This crate aggregates:
//! - `error` — unified error type `MarketError` used across the workspace.
//! - `result` — handy `Result<T, MarketError>` alias.
//! - `tickers` — the fixed, ordered symbol table.
//! - `quote` — the `Quote` record and change calculation.
//! - `chart` — chart API payload decoding and the `QuoteSource` seam.
//! - `report` — line formatting, alert decision and cycle report rendering.
#![warn(missing_docs)]
pub mod chart;
pub mod error;
pub mod quote;
pub mod report;
pub mod result;
pub mod tickers;

pub use chart::QuoteSource;
pub use error::MarketError;
pub use quote::Quote;
pub use report::CycleReport;
pub use result::Result;
pub use tickers::Ticker;
