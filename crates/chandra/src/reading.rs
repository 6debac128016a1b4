//! One reading: offset text + local birth date/time → UTC → moon placement.

use crate::ephemeris::{Ayanamsa, EphemerisEngine};
use crate::offset::{parse_offset, OffsetError};
use crate::time::{BirthMoment, CalendarOverflow};
use crate::vedic::{compute_moon_placement, MoonPlacement, Unavailable};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error(transparent)]
    Offset(#[from] OffsetError),
    #[error(transparent)]
    Calendar(#[from] CalendarOverflow),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonReading {
    pub birth: BirthMoment,
    pub utc: DateTime<Utc>,
    /// Left out when the ephemeris engine is missing or failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vedic: Option<MoonPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<Unavailable>,
}

/// Run a full reading.
///
/// A bad offset stops everything before any conversion happens. A missing or
/// failing engine does not: the reading comes back with `vedic: None`.
pub fn moon_reading(
    date: NaiveDate,
    time: NaiveTime,
    offset_text: &str,
    engine: Option<&dyn EphemerisEngine>,
    ayanamsa: Ayanamsa,
) -> Result<MoonReading, ReadingError> {
    let offset = parse_offset(offset_text)?;
    let birth = BirthMoment::new(date, time, offset);
    let utc = birth.utc_instant()?;
    log::debug!("{} {} at {} is {} UTC", birth.date, birth.time, offset, utc);

    let (vedic, unavailable) = match compute_moon_placement(engine, utc, ayanamsa) {
        Ok(placement) => (Some(placement), None),
        Err(reason) => (None, Some(reason)),
    };

    Ok(MoonReading {
        birth,
        utc,
        vedic,
        unavailable,
    })
}
