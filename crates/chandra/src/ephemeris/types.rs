use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur inside an ephemeris engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Failed to calculate {quantity} at JD {julian_day}: {message}")]
    CalculationFailed {
        quantity: &'static str,
        julian_day: f64,
        message: String,
    },
}

/// Sidereal standard used to turn tropical longitudes into sidereal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    #[default]
    #[serde(alias = "chitrapaksha")]
    Lahiri,
    FaganBradley,
    Raman,
    Krishnamurti,
}

// (slug, display name, variant); aliases share a variant
const AYANAMSAS: &[(&str, &str, Ayanamsa)] = &[
    ("lahiri", "Lahiri", Ayanamsa::Lahiri),
    ("chitrapaksha", "Lahiri", Ayanamsa::Lahiri),
    ("fagan_bradley", "Fagan-Bradley", Ayanamsa::FaganBradley),
    ("raman", "Raman", Ayanamsa::Raman),
    ("krishnamurti", "Krishnamurti", Ayanamsa::Krishnamurti),
];

impl Ayanamsa {
    pub fn slug(self) -> &'static str {
        AYANAMSAS
            .iter()
            .find(|(_, _, a)| *a == self)
            .map(|(slug, _, _)| *slug)
            .unwrap_or("lahiri")
    }

    pub fn label(self) -> &'static str {
        AYANAMSAS
            .iter()
            .find(|(_, _, a)| *a == self)
            .map(|(_, label, _)| *label)
            .unwrap_or("Lahiri")
    }

    /// Ayanamsa in degrees at J2000.0 (JD 2451545.0 TT).
    pub fn j2000_degrees(self) -> f64 {
        match self {
            Ayanamsa::Lahiri => 23.857_092,
            Ayanamsa::FaganBradley => 24.740_300,
            Ayanamsa::Raman => 22.410_791,
            Ayanamsa::Krishnamurti => 23.760_240,
        }
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Ayanamsa {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        AYANAMSAS
            .iter()
            .find(|(slug, _, _)| *slug == wanted)
            .map(|(_, _, a)| *a)
            .ok_or_else(|| EphemerisError::InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(slug, _, _)| slug.to_string()).collect(),
            })
    }
}

/// The ephemeris capability the placement calculator depends on.
///
/// Implementations must be reentrant: the sidereal standard arrives as an
/// argument on every call instead of living in engine-global state.
pub trait EphemerisEngine {
    fn name(&self) -> &str;

    /// Continuous Julian day (UT) for a UTC instant.
    fn julian_day(&self, instant: DateTime<Utc>) -> f64 {
        crate::time::julian_day(instant)
    }

    /// Geocentric tropical ecliptic longitude of the Moon, degrees.
    fn moon_longitude(&self, julian_day: f64) -> Result<f64, EphemerisError>;

    /// Ayanamsa for `standard` at `julian_day`, degrees.
    fn ayanamsa(&self, julian_day: f64, standard: Ayanamsa) -> Result<f64, EphemerisError>;
}
