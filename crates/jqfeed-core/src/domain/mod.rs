//! # Domain Models
//!
//! Platform-side types exchanged with the trading platform.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HistoryRequest`] | Symbol, exchange, interval, and time range to fetch |
//! | [`BarData`] | OHLCV bar localized to China Standard Time |
//! | [`Exchange`] | Platform exchange code (SSE, SZSE, ...) |
//! | [`Interval`] | Platform bar interval (1m, 1h, d, ...) |
//!
//! Identity fields on a [`BarData`] always come from the originating
//! [`HistoryRequest`], never from vendor rows.

mod exchange;
mod interval;
mod models;
pub mod timestamp;

pub use exchange::Exchange;
pub use interval::Interval;
pub use models::{vt_symbol, BarData, HistoryRequest};
pub use timestamp::CHINA_TZ;
