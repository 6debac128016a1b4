#![allow(dead_code)]

use chandra::ephemeris::{Ayanamsa, EphemerisEngine, EphemerisError};
use std::cell::Cell;

/// Engine that reports the same Moon longitude and ayanamsa for every instant.
pub struct FixedEphemeris {
    pub moon_longitude: f64,
    pub ayanamsa: f64,
    pub calls: Cell<usize>,
}

impl FixedEphemeris {
    pub fn new(moon_longitude: f64, ayanamsa: f64) -> Self {
        Self {
            moon_longitude,
            ayanamsa,
            calls: Cell::new(0),
        }
    }
}

impl EphemerisEngine for FixedEphemeris {
    fn name(&self) -> &str {
        "fixed"
    }

    fn moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.moon_longitude)
    }

    fn ayanamsa(&self, _julian_day: f64, _standard: Ayanamsa) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }
}

/// Engine whose ayanamsa lookup always fails, after a successful Moon lookup.
pub struct FailingEphemeris;

impl EphemerisEngine for FailingEphemeris {
    fn name(&self) -> &str {
        "failing"
    }

    fn moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
        Ok(123.0)
    }

    fn ayanamsa(&self, julian_day: f64, _standard: Ayanamsa) -> Result<f64, EphemerisError> {
        Err(EphemerisError::CalculationFailed {
            quantity: "ayanamsa",
            julian_day,
            message: "date outside ephemeris range".to_string(),
        })
    }
}

/// Engine that returns NaN for the Moon, as a broken backend might.
pub struct NanEphemeris;

impl EphemerisEngine for NanEphemeris {
    fn name(&self) -> &str {
        "nan"
    }

    fn moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
        Ok(f64::NAN)
    }

    fn ayanamsa(&self, _julian_day: f64, _standard: Ayanamsa) -> Result<f64, EphemerisError> {
        Ok(24.0)
    }
}
