//! Datafeed adapters.

mod jqdata;

pub use jqdata::{interval_code, mapped_index_code, JqdataDatafeed, GATEWAY_NAME};
