use crate::ephemeris::{Ayanamsa, EphemerisEngine, EphemerisError};
use crate::vedic::types::{MoonPlacement, Unavailable};
use chrono::{DateTime, Utc};

/// Sidereal Moon placement for a UTC instant.
///
/// The engine is a soft dependency: when it is absent, or any lookup fails,
/// the result is [`Unavailable`] and never a partial placement.
pub fn compute_moon_placement(
    engine: Option<&dyn EphemerisEngine>,
    instant: DateTime<Utc>,
    ayanamsa: Ayanamsa,
) -> Result<MoonPlacement, Unavailable> {
    let Some(engine) = engine else {
        log::debug!("No ephemeris engine; omitting moon placement for {}", instant);
        return Err(Unavailable::EngineAbsent);
    };

    lookup(engine, instant, ayanamsa).map_err(|err| {
        log::warn!(
            "{} lookup failed for {}, omitting moon placement: {}",
            engine.name(),
            instant,
            err
        );
        Unavailable::LookupFailed(err.to_string())
    })
}

fn lookup(
    engine: &dyn EphemerisEngine,
    instant: DateTime<Utc>,
    ayanamsa: Ayanamsa,
) -> Result<MoonPlacement, EphemerisError> {
    let jd = engine.julian_day(instant);
    let jd = finite("julian day", jd, jd)?;
    let tropical = finite("moon longitude", jd, engine.moon_longitude(jd)?)?;
    let ayanamsa_value = finite("ayanamsa", jd, engine.ayanamsa(jd, ayanamsa)?)?;

    let placement = MoonPlacement::from_longitudes(jd, tropical, ayanamsa, ayanamsa_value);
    log::debug!(
        "JD {:.6}: tropical {:.6}°, {} {:.6}°, sidereal {:.6}°",
        jd,
        tropical,
        ayanamsa,
        ayanamsa_value,
        placement.sidereal_longitude
    );
    Ok(placement)
}

fn finite(quantity: &'static str, julian_day: f64, value: f64) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::CalculationFailed {
            quantity,
            julian_day,
            message: format!("engine returned {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct BrokenClock;

    impl EphemerisEngine for BrokenClock {
        fn name(&self) -> &str {
            "broken-clock"
        }

        fn julian_day(&self, _instant: DateTime<Utc>) -> f64 {
            f64::INFINITY
        }

        fn moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
            Ok(45.0)
        }

        fn ayanamsa(&self, _julian_day: f64, _standard: Ayanamsa) -> Result<f64, EphemerisError> {
            Ok(24.0)
        }
    }

    #[test]
    fn test_non_finite_julian_day_reports_returned_value() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        match compute_moon_placement(Some(&BrokenClock), instant, Ayanamsa::Lahiri) {
            Err(Unavailable::LookupFailed(message)) => {
                assert!(message.contains("julian day at JD inf"), "{message}");
                assert!(!message.contains("NaN"), "{message}");
            }
            other => panic!("expected LookupFailed, got {:?}", other),
        }
    }
}
