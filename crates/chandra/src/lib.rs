//! Sidereal Moon placement for a birth moment.
//!
//! The pipeline is: parse the caller's UTC offset, shift the local civil time
//! to UTC, ask an ephemeris engine for the Moon's tropical longitude and the
//! ayanamsa, then classify the sidereal longitude into rashi, nakshatra and
//! pada.

pub mod config;
pub mod ephemeris;
pub mod offset;
pub mod reading;
pub mod time;
pub mod vedic;

pub use config::ChandraConfig;
pub use ephemeris::{Ayanamsa, EphemerisEngine, EphemerisError, SwissEphemerisAdapter};
pub use offset::{parse_offset, OffsetError, UtcOffset};
pub use reading::{moon_reading, MoonReading, ReadingError};
pub use time::{to_utc, BirthMoment, CalendarOverflow};
pub use vedic::{compute_moon_placement, MoonPlacement, Nakshatra, Unavailable, ZodiacSign};
