use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Exchange, Interval, ValidationError};

/// Join a platform symbol and exchange into the `symbol.EXCHANGE` identifier.
pub fn vt_symbol(symbol: &str, exchange: Exchange) -> String {
    format!("{symbol}.{exchange}")
}

/// Generic history request issued by the trading platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Interval,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl HistoryRequest {
    pub fn new(
        symbol: impl Into<String>,
        exchange: Exchange,
        interval: Interval,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Self, ValidationError> {
        let symbol = symbol.into().trim().to_owned();
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        if start > end {
            return Err(ValidationError::InvertedRange);
        }

        Ok(Self {
            symbol,
            exchange,
            interval,
            start,
            end,
        })
    }

    pub fn vt_symbol(&self) -> String {
        vt_symbol(&self.symbol, self.exchange)
    }
}

/// Canonical OHLCV bar handed back to the trading platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Interval,
    #[serde(with = "time::serde::rfc3339")]
    pub datetime: OffsetDateTime,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: f64,
    pub open_interest: f64,
    /// Origin tag of the adapter that produced the bar.
    pub gateway_name: String,
}

impl BarData {
    pub fn vt_symbol(&self) -> String {
        vt_symbol(&self.symbol, self.exchange)
    }
}
