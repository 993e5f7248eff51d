//! China Standard Time helpers.
//!
//! The vendor reports naive Beijing wall-clock timestamps. They are localized
//! to a fixed UTC+8 offset; there is no daylight-saving adjustment.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

/// China Standard Time.
pub const CHINA_TZ: UtcOffset = offset!(+8);

/// Attach the CST offset to a naive Beijing wall-clock timestamp.
pub fn localize(naive: PrimitiveDateTime) -> OffsetDateTime {
    naive.assume_offset(CHINA_TZ)
}

/// Parse `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD` as a naive
/// timestamp. A `T` separator is accepted in place of the space.
pub fn parse_naive(input: &str) -> Option<PrimitiveDateTime> {
    let value = input.trim();
    let formats: [&[BorrowedFormatItem<'static>]; 4] = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];

    formats
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(value, *format).ok())
        .or_else(|| {
            Date::parse(value, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(Date::midnight)
        })
}

/// Parse an RFC3339 timestamp, or a naive one interpreted as Beijing time.
pub fn parse_datetime(input: &str) -> Result<OffsetDateTime, ValidationError> {
    if let Ok(parsed) = OffsetDateTime::parse(input.trim(), &Rfc3339) {
        return Ok(parsed);
    }

    parse_naive(input)
        .map(localize)
        .ok_or_else(|| ValidationError::InvalidDateTime {
            value: input.to_owned(),
        })
}

/// Render a timestamp as Beijing wall-clock `YYYY-MM-DD HH:MM:SS`.
pub fn format_beijing(value: OffsetDateTime) -> Result<String, time::error::Format> {
    value
        .to_offset(CHINA_TZ)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
}
