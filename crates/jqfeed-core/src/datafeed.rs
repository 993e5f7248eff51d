//! Historical datafeed contract.
//!
//! A [`Datafeed`] turns a platform [`HistoryRequest`] into canonical
//! [`BarData`] records. Implementations block the calling thread.

use crate::{BarData, DatafeedError, HistoryRequest};

/// Datafeed adapter contract.
///
/// | Method | Description |
/// |--------|-------------|
/// | [`gateway_name`](Datafeed::gateway_name) | Origin tag stamped on produced bars |
/// | [`init`](Datafeed::init) | Authenticate ahead of the first query |
/// | [`query_bar_history`](Datafeed::query_bar_history) | Fetch and normalize bars |
pub trait Datafeed: Send + Sync {
    /// Returns the origin tag written into [`BarData::gateway_name`].
    fn gateway_name(&self) -> &'static str;

    /// Authenticates against the vendor and reports whether it succeeded.
    fn init(&self) -> bool;

    /// Fetches bar history for `req`.
    ///
    /// - `Ok(None)`: the vendor is unavailable (authentication failed).
    /// - `Ok(Some(bars))`: success; `bars` may be empty.
    ///
    /// # Errors
    ///
    /// Failures after authentication (symbol normalization, transport,
    /// upstream rejection, malformed payloads) are returned unhandled.
    fn query_bar_history(
        &self,
        req: &HistoryRequest,
    ) -> Result<Option<Vec<BarData>>, DatafeedError>;
}
