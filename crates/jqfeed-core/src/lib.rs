//! # jqfeed Core
//!
//! Historical bar datafeed for the JoinQuant JQData vendor.
//!
//! ## Overview
//!
//! [`JqdataDatafeed`] takes a platform [`HistoryRequest`], authenticates with
//! the vendor, translates the symbol and interval into vendor codes, runs one
//! blocking price query, and maps each returned row into a [`BarData`]
//! localized to China Standard Time.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | The JQData datafeed adapter |
//! | [`datafeed`] | Datafeed trait |
//! | [`domain`] | Requests, bars, exchanges, intervals, CST helpers |
//! | [`error`] | Validation, settings, and query errors |
//! | [`settings`] | Datafeed credentials |
//! | [`vendor`] | Vendor client trait, HTTP transport, JQData client |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jqfeed_core::{Datafeed, DatafeedSettings, Exchange, HistoryRequest, Interval, JqdataDatafeed};
//! use time::macros::datetime;
//!
//! let feed = JqdataDatafeed::from_settings(DatafeedSettings::from_env()?);
//! let request = HistoryRequest::new(
//!     "600000",
//!     Exchange::Sse,
//!     Interval::Minute,
//!     datetime!(2023-01-03 09:30:00 +8),
//!     datetime!(2023-01-03 15:00:00 +8),
//! )?;
//!
//! match feed.query_bar_history(&request)? {
//!     Some(bars) => println!("{} bars", bars.len()),
//!     None => eprintln!("datafeed unavailable"),
//! }
//! ```
//!
//! ## Error Handling
//!
//! Authentication failures are logged and reported as `Ok(None)`. Errors
//! raised by the query itself propagate as [`DatafeedError`]:
//!
//! ```rust
//! use jqfeed_core::{DatafeedError, VendorErrorKind};
//!
//! fn describe(error: &DatafeedError) -> &'static str {
//!     let DatafeedError::Vendor(vendor) = error;
//!     match vendor.kind() {
//!         VendorErrorKind::InvalidRequest => "bad request",
//!         VendorErrorKind::Transport => "network",
//!         _ => "vendor",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - Credentials are never logged; `DatafeedSettings` redacts the password in `Debug`
//! - All HTTP requests use TLS via reqwest

pub mod adapters;
pub mod datafeed;
pub mod domain;
pub mod error;
pub mod settings;
pub mod vendor;

pub use adapters::{interval_code, mapped_index_code, JqdataDatafeed, GATEWAY_NAME};

pub use datafeed::Datafeed;

pub use domain::{vt_symbol, BarData, Exchange, HistoryRequest, Interval, CHINA_TZ};

pub use error::{DatafeedError, SettingsError, ValidationError};

pub use settings::DatafeedSettings;

pub use vendor::http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, DEFAULT_TIMEOUT_MS,
};
pub use vendor::{
    normalize_code, JqDataClient, PriceFrame, PriceQuery, PriceRow, VendorClient, VendorError,
    VendorErrorKind, JQDATA_API_URL,
};
