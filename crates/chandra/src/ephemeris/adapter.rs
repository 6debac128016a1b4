use crate::ephemeris::precession::ayanamsa_degrees;
use crate::ephemeris::types::{Ayanamsa, EphemerisEngine, EphemerisError};
use crate::vedic::normalize_degrees;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, julday, set_ephe_path};

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

// Swiss Ephemeris constants
const SE_MOON: u32 = 1;
const SEFLG_SWIEPH: u32 = 2;
const SE_GREG_CAL: u32 = 1;

/// The C library keeps process-wide state; calls go through this lock.
static SWISSEPH_LOCK: Mutex<()> = Mutex::new(());

fn engine_lock() -> MutexGuard<'static, ()> {
    SWISSEPH_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then to the system install
    /// location. A missing directory means the engine is not available.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        {
            let _guard = engine_lock();
            set_ephe_path(&path.to_string_lossy());
        }
        log::debug!("Swiss Ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl EphemerisEngine for SwissEphemerisAdapter {
    fn name(&self) -> &str {
        "swisseph"
    }

    fn julian_day(&self, instant: DateTime<Utc>) -> f64 {
        let hour_decimal = instant.hour() as f64
            + instant.minute() as f64 / 60.0
            + instant.second() as f64 / 3600.0;

        let _guard = engine_lock();
        julday(
            instant.year(),
            instant.month() as i32,
            instant.day() as i32,
            hour_decimal,
            SE_GREG_CAL,
        )
    }

    fn moon_longitude(&self, julian_day: f64) -> Result<f64, EphemerisError> {
        let result = {
            let _guard = engine_lock();
            calc_ut(julian_day, SE_MOON, SEFLG_SWIEPH)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            quantity: "moon longitude",
            julian_day,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                quantity: "moon longitude",
                julian_day,
                message: format!("non-finite longitude {}", longitude),
            });
        }
        Ok(normalize_degrees(longitude))
    }

    fn ayanamsa(&self, julian_day: f64, standard: Ayanamsa) -> Result<f64, EphemerisError> {
        Ok(ayanamsa_degrees(standard, julian_day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_path_is_file_not_found() {
        let missing = PathBuf::from("/nonexistent/chandra/ephe");
        match SwissEphemerisAdapter::new(Some(missing)) {
            Err(EphemerisError::FileNotFound { path, .. }) => {
                assert!(path.contains("nonexistent"))
            }
            other => panic!("expected FileNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_existing_path_is_accepted() {
        let adapter = SwissEphemerisAdapter::new(Some(env::temp_dir())).unwrap();
        assert_eq!(adapter.ephemeris_path(), env::temp_dir().as_path());
        assert_eq!(adapter.name(), "swisseph");
    }

    #[test]
    fn test_swiss_julian_day_matches_meeus() {
        let adapter = SwissEphemerisAdapter::new(Some(env::temp_dir())).unwrap();
        for instant in [
            Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1957, 10, 4, 19, 26, 24).unwrap(),
            Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0).unwrap(),
        ] {
            let swiss = adapter.julian_day(instant);
            let meeus = crate::time::julian_day(instant);
            assert!((swiss - meeus).abs() < 1e-6, "{instant}: {swiss} vs {meeus}");
        }
    }
}
