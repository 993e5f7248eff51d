use jqfeed_core::domain::timestamp::parse_datetime;
use jqfeed_core::{Datafeed, DatafeedSettings, HistoryRequest, JqdataDatafeed};
use serde_json::Value;

use crate::cli::BarsArgs;
use crate::error::CliError;

use super::parse_instrument;

pub fn run(args: &BarsArgs, settings: DatafeedSettings) -> Result<Value, CliError> {
    let (exchange, interval) = parse_instrument(&args.instrument)?;
    let request = HistoryRequest::new(
        args.instrument.symbol.as_str(),
        exchange,
        interval,
        parse_datetime(&args.start)?,
        parse_datetime(&args.end)?,
    )?;

    let feed = JqdataDatafeed::from_settings(settings);
    let Some(bars) = feed.query_bar_history(&request)? else {
        return Err(CliError::Unavailable);
    };

    log::info!("received {} bars for {}", bars.len(), request.vt_symbol());
    Ok(serde_json::to_value(bars)?)
}
