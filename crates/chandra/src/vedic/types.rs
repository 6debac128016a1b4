//! Moon placement output types.

use crate::ephemeris::Ayanamsa;
use crate::vedic::nakshatra::{get_nakshatra_for_longitude, normalize_degrees, Nakshatra};
use crate::vedic::rashi::{degree_in_sign, ZodiacSign};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why the Vedic part of a reading was left out. Never fatal to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum Unavailable {
    #[error("no ephemeris engine is available")]
    EngineAbsent,
    #[error("ephemeris lookup failed: {0}")]
    LookupFailed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonPlacement {
    pub sign: ZodiacSign,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
    #[serde(rename = "tropicalLongitude")]
    pub tropical_longitude: f64,
    pub ayanamsa: Ayanamsa,
    #[serde(rename = "ayanamsaValue")]
    pub ayanamsa_value: f64,
    #[serde(rename = "siderealLongitude")]
    pub sidereal_longitude: f64,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "nakshatraStart")]
    pub nakshatra_start: f64,
    #[serde(rename = "nakshatraEnd")]
    pub nakshatra_end: f64,
    #[serde(rename = "padaFraction")]
    pub pada_fraction: f64,
}

/// `(tropical - ayanamsa) mod 360`, in [0, 360).
pub fn sidereal_longitude(tropical: f64, ayanamsa_value: f64) -> f64 {
    normalize_degrees(tropical - ayanamsa_value)
}

impl MoonPlacement {
    /// Classify a Moon position given the engine's raw outputs.
    pub fn from_longitudes(
        julian_day: f64,
        tropical_longitude: f64,
        ayanamsa: Ayanamsa,
        ayanamsa_value: f64,
    ) -> Self {
        let sidereal = sidereal_longitude(tropical_longitude, ayanamsa_value);
        let meta = get_nakshatra_for_longitude(sidereal);

        Self {
            sign: ZodiacSign::for_longitude(sidereal),
            nakshatra: meta.nakshatra,
            pada: meta.pada,
            julian_day,
            tropical_longitude: normalize_degrees(tropical_longitude),
            ayanamsa,
            ayanamsa_value,
            sidereal_longitude: sidereal,
            degree_in_sign: degree_in_sign(sidereal),
            nakshatra_start: meta.nakshatra.start_degree(),
            nakshatra_end: meta.nakshatra.end_degree(),
            pada_fraction: meta.pada_fraction,
        }
    }
}

impl fmt::Display for MoonPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moon in {} ({}) {:.2}°, {} pada {} [sidereal {:.4}°, {} ayanamsa {:.4}°]",
            self.sign.name,
            self.sign.english,
            self.degree_in_sign,
            self.nakshatra.name,
            self.pada,
            self.sidereal_longitude,
            self.ayanamsa,
            self.ayanamsa_value,
        )
    }
}
