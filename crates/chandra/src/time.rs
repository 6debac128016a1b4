//! Birth moments and the local civil time → UTC shift.

use crate::offset::UtcOffset;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Shifting {local} by the UTC offset leaves the supported calendar range")]
pub struct CalendarOverflow {
    pub local: NaiveDateTime,
}

/// Civil date and time of birth together with the caller-supplied offset.
///
/// Time of day is kept at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub offset: UtcOffset,
}

impl BirthMoment {
    pub fn new(date: NaiveDate, time: NaiveTime, offset: UtcOffset) -> Self {
        let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
        Self { date, time, offset }
    }

    pub fn local(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn utc_instant(&self) -> Result<DateTime<Utc>, CalendarOverflow> {
        to_utc(self.date, self.time, self.offset)
    }
}

/// Subtract the offset from the local timestamp.
///
/// Plain calendar arithmetic: the result may land on another day, month or
/// year. No timezone database is consulted.
pub fn to_utc(
    date: NaiveDate,
    time: NaiveTime,
    offset: UtcOffset,
) -> Result<DateTime<Utc>, CalendarOverflow> {
    let local = date.and_time(time);
    let naive_utc = local
        .checked_sub_signed(Duration::minutes(offset.minutes() as i64))
        .ok_or(CalendarOverflow { local })?;
    Ok(Utc.from_utc_datetime(&naive_utc))
}

/// Inverse of [`to_utc`]: the local civil time at `offset` for a UTC instant.
pub fn from_utc(instant: DateTime<Utc>, offset: UtcOffset) -> Option<NaiveDateTime> {
    instant
        .naive_utc()
        .checked_add_signed(Duration::minutes(offset.minutes() as i64))
}

/// Julian day for a UTC instant, proleptic Gregorian calendar.
///
/// Meeus, *Astronomical Algorithms*, ch. 7. The time of day (including
/// seconds) becomes the fractional part.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let mut year = instant.year() as f64;
    let mut month = instant.month() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();

    let seconds = instant.num_seconds_from_midnight() as f64
        + instant.nanosecond().min(999_999_999) as f64 / 1e9;
    let day = instant.day() as f64 + seconds / 86_400.0;

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + gregorian
        - 1524.5
}
