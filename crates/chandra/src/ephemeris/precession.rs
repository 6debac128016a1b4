//! Ayanamsa from accumulated precession.
//!
//! Each standard is fixed by its value at J2000; the ayanamsa at any other
//! instant adds the IAU 2006 general precession in longitude (Capitaine et
//! al. 2003, p_A) accumulated since J2000.

use super::types::Ayanamsa;

pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// General precession in longitude since J2000, arcseconds.
///
/// The series is defined in TT; callers pass a UT Julian day. Ignoring ΔT
/// (about a minute today) shifts the result by roughly 0.001", well below
/// any sign or pada resolution.
pub fn general_precession_arcsec(julian_day: f64) -> f64 {
    let t = (julian_day - J2000) / DAYS_PER_JULIAN_CENTURY;
    t * (5028.796_195 + t * (1.105_434_8 + t * (0.000_079_64 + t * (-0.000_023_857 + t * -0.000_000_038_3))))
}

/// Ayanamsa in degrees for `standard` at `julian_day`.
pub fn ayanamsa_degrees(standard: Ayanamsa, julian_day: f64) -> f64 {
    standard.j2000_degrees() + general_precession_arcsec(julian_day) / 3600.0
}
