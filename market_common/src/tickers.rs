//! The fixed symbol table polled on every cycle.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Symbols watched by the alert loop, in reporting order.
///
/// `Display` yields the provider symbol sent to the chart endpoint; [`Ticker::name`]
/// yields the human-readable label used in report lines.
#[derive(Debug, Clone, Copy, Display, EnumIter, Hash, Eq, PartialEq)]
pub enum Ticker {
    /// S&P 500 index.
    #[strum(to_string = "^GSPC")]
    Sp500,
    /// Vanguard S&P 500 ETF.
    #[strum(to_string = "VOO")]
    Voo,
    /// NVIDIA Corporation.
    #[strum(to_string = "NVDA")]
    Nvidia,
}

impl Ticker {
    /// Display label for report lines.
    pub fn name(&self) -> &'static str {
        match self {
            Ticker::Sp500 => "S&P 500",
            Ticker::Voo => "VOO",
            Ticker::Nvidia => "NVIDIA",
        }
    }

    /// Provider symbol, same as the `Display` output.
    pub fn symbol(&self) -> String {
        self.to_string()
    }

    /// The whole table in its defined order.
    pub fn all() -> Vec<Ticker> {
        Ticker::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_index_etf_stock() {
        let symbols: Vec<String> = Ticker::all().iter().map(Ticker::symbol).collect();
        assert_eq!(symbols, vec!["^GSPC", "VOO", "NVDA"]);
    }

    #[test]
    fn names_are_never_empty() {
        let names: Vec<&str> = Ticker::all().iter().map(Ticker::name).collect();
        assert_eq!(names, vec!["S&P 500", "VOO", "NVIDIA"]);
    }
}
