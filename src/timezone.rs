//! Resolving the server's local time from a canonical timezone name.

use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The current UTC offset of `canonical_timezone`, or `None` if the name is unknown.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current wall clock time in `canonical_timezone`.
///
/// # Errors
///
/// Returns [Error::InvalidTimezoneError] if the timezone is not a known canonical name.
pub fn local_now(canonical_timezone: &str) -> Result<PrimitiveDateTime, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))?;
    let now = OffsetDateTime::now_utc().to_offset(offset);

    Ok(PrimitiveDateTime::new(now.date(), now.time()))
}

/// The number of days in the month containing `date`.
pub fn days_in_month(date: Date) -> u8 {
    date.month().length(date.year())
}
