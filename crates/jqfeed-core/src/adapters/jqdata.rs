use std::sync::Arc;

use time::Duration;

use crate::datafeed::Datafeed;
use crate::domain::timestamp::localize;
use crate::vendor::{JqDataClient, PriceFrame, PriceQuery, VendorClient, VendorError};
use crate::{BarData, DatafeedError, DatafeedSettings, HistoryRequest, Interval};

/// Origin tag stamped on every bar produced by [`JqdataDatafeed`].
pub const GATEWAY_NAME: &str = "JQ";

/// Index codes the vendor cannot derive from the bare symbol.
const INDEX_CONVERT: [(&str, &str); 1] = [("000852.SSE", "000852.XSHG")];

/// Vendor code for an index listed in the conversion table, by `vt_symbol`.
pub fn mapped_index_code(vt_symbol: &str) -> Option<&'static str> {
    INDEX_CONVERT
        .iter()
        .find(|(platform, _)| *platform == vt_symbol)
        .map(|(_, vendor)| *vendor)
}

/// Vendor frequency code for a platform interval. Unsupported intervals map to `None`.
pub const fn interval_code(interval: Interval) -> Option<&'static str> {
    match interval {
        Interval::Minute => Some("1m"),
        Interval::Hour => Some("60m"),
        Interval::Daily => Some("1d"),
        Interval::Weekly | Interval::Tick => None,
    }
}

/// JQData implementation of [`Datafeed`].
#[derive(Clone)]
pub struct JqdataDatafeed {
    settings: DatafeedSettings,
    client: Arc<dyn VendorClient>,
}

impl JqdataDatafeed {
    pub fn new(settings: DatafeedSettings, client: Arc<dyn VendorClient>) -> Self {
        Self { settings, client }
    }

    /// Adapter over the JQData HTTP API.
    pub fn from_settings(settings: DatafeedSettings) -> Self {
        Self::new(settings, Arc::new(JqDataClient::default()))
    }

    pub fn settings(&self) -> &DatafeedSettings {
        &self.settings
    }

    /// Vendor security code for a request.
    ///
    /// Symbols starting with `99` are Shanghai index aliases and become
    /// `00xxxx.XSHG`; listed index codes come from the conversion table;
    /// everything else goes through the vendor's own normalization.
    pub fn resolve_security(&self, req: &HistoryRequest) -> Result<String, VendorError> {
        if let Some(rest) = req.symbol.strip_prefix("99") {
            return Ok(format!("00{rest}.XSHG"));
        }

        if let Some(code) = mapped_index_code(&req.vt_symbol()) {
            return Ok(code.to_owned());
        }

        self.client.normalize_code(&req.symbol)
    }

    /// Vendor query for a request, without sending it.
    ///
    /// The end bound is pushed out by one minute so the bar stamped exactly at
    /// `req.end` falls inside the vendor's half-open range.
    pub fn build_query(&self, req: &HistoryRequest) -> Result<PriceQuery, VendorError> {
        let security = self.resolve_security(req)?;
        let end_date = req.end.checked_add(Duration::minutes(1)).ok_or_else(|| {
            VendorError::invalid_request(format!("end datetime {} is out of range", req.end))
        })?;

        Ok(PriceQuery {
            security,
            frequency: interval_code(req.interval),
            start_date: req.start,
            end_date,
            panel: false,
        })
    }

    /// One-line diagnostic for an outgoing query.
    fn describe_query(req: &HistoryRequest, query: &PriceQuery) -> String {
        format!(
            "security={} frequency={:?} start={} end={} request={req:?}",
            query.security, query.frequency, query.start_date, query.end_date,
        )
    }

    fn to_bars(req: &HistoryRequest, frame: &PriceFrame) -> Vec<BarData> {
        frame
            .rows
            .iter()
            .map(|row| BarData {
                symbol: req.symbol.clone(),
                exchange: req.exchange,
                interval: req.interval,
                datetime: localize(row.index),
                open_price: row.open,
                high_price: row.high,
                low_price: row.low,
                close_price: row.close,
                volume: row.volume,
                open_interest: 0.0,
                gateway_name: String::from(GATEWAY_NAME),
            })
            .collect()
    }
}

impl Datafeed for JqdataDatafeed {
    fn gateway_name(&self) -> &'static str {
        GATEWAY_NAME
    }

    fn init(&self) -> bool {
        match self
            .client
            .auth(&self.settings.username, &self.settings.password)
        {
            Ok(()) => {
                log::info!("jqdata datafeed authenticated");
                true
            }
            Err(error) => {
                log::error!("jqdata datafeed authentication failed: {error:?}");
                false
            }
        }
    }

    fn query_bar_history(
        &self,
        req: &HistoryRequest,
    ) -> Result<Option<Vec<BarData>>, DatafeedError> {
        if let Err(error) = self
            .client
            .auth(&self.settings.username, &self.settings.password)
        {
            log::error!(
                "jqdata authentication failed, history for {} is unavailable: {error:?}",
                req.vt_symbol()
            );
            return Ok(None);
        }

        let query = self.build_query(req)?;
        log::info!("querying jqdata history: {}", Self::describe_query(req, &query));

        let Some(frame) = self.client.get_price(&query)? else {
            log::info!("no jqdata history found for {}", query.security);
            return Ok(Some(Vec::new()));
        };

        Ok(Some(Self::to_bars(req, &frame)))
    }
}
