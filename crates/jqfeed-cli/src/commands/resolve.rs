use std::sync::Arc;

use jqfeed_core::domain::timestamp::parse_datetime;
use jqfeed_core::{DatafeedSettings, HistoryRequest, JqDataClient, JqdataDatafeed, CHINA_TZ};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::cli::ResolveArgs;
use crate::error::CliError;

use super::parse_instrument;

pub fn run(args: &ResolveArgs) -> Result<Value, CliError> {
    let (exchange, interval) = parse_instrument(&args.instrument)?;
    let now = OffsetDateTime::now_utc().to_offset(CHINA_TZ);
    let start = args.start.as_deref().map(parse_datetime).transpose()?.unwrap_or(now);
    let end = args.end.as_deref().map(parse_datetime).transpose()?.unwrap_or(now);
    let request = HistoryRequest::new(
        args.instrument.symbol.as_str(),
        exchange,
        interval,
        start,
        end,
    )?;

    // Credentials are never used: resolving only touches local normalization.
    let feed = JqdataDatafeed::new(
        DatafeedSettings::new("", ""),
        Arc::new(JqDataClient::default()),
    );
    let query = feed.build_query(&request)?;

    Ok(json!({
        "vt_symbol": request.vt_symbol(),
        "security": query.security,
        "frequency": query.frequency,
        "start_date": query.start_date.format(&Rfc3339)?,
        "end_date": query.end_date.format(&Rfc3339)?,
    }))
}
