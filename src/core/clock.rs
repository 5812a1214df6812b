//! Calendar helpers for manifest dates.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Days, Duration, NaiveDate, TimeZone};

/// Manifest date layout, always zero-padded (`2025-06-01`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse a manifest date string.
///
/// Only the exact `YYYY-MM-DD` shape is accepted; `2025-6-1` or trailing
/// text is rejected even though chrono alone would be lenient about it.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let bytes = raw.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_shaped {
        return Err(anyhow!("expected YYYY-MM-DD, got {raw:?}"));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).with_context(|| format!("invalid date {raw:?}"))
}

/// Upper bound when searching past a skipped stretch of wall-clock time
const MAX_GAP_MINUTES: i64 = 48 * 60;

/// Midnight at the start of `date` in the given timezone.
///
/// When midnight falls inside a DST gap, the first wall-clock minute after
/// the gap is used instead. `None` only if no valid time exists within two
/// days.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    (0..=MAX_GAP_MINUTES).find_map(|minute| {
        let local = midnight.checked_add_signed(Duration::minutes(minute))?;
        tz.from_local_datetime(&local).earliest()
    })
}

/// The calendar day after `date`
pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| anyhow!("date {date} has no following day"))
}

/// Whole days from `from` until `to`, rounded toward zero.
pub fn whole_days_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    to.clone().signed_duration_since(from.clone()).num_seconds() / SECONDS_PER_DAY
}
