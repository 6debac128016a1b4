//! The twelve rashis (sidereal signs), 30° each, starting at Mesha.

use crate::vedic::nakshatra::normalize_degrees;
use serde::Serialize;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub index: usize,
    pub id: &'static str,
    /// Transliterated Sanskrit name
    pub name: &'static str,
    pub english: &'static str,
    pub lord: &'static str,
}

const fn sign(
    index: usize,
    id: &'static str,
    name: &'static str,
    english: &'static str,
    lord: &'static str,
) -> ZodiacSign {
    ZodiacSign {
        index,
        id,
        name,
        english,
        lord,
    }
}

pub const SIGNS: [ZodiacSign; 12] = [
    sign(0, "mesha", "Mesha", "Aries", "mars"),
    sign(1, "vrishabha", "Vrishabha", "Taurus", "venus"),
    sign(2, "mithuna", "Mithuna", "Gemini", "mercury"),
    sign(3, "karka", "Karka", "Cancer", "moon"),
    sign(4, "simha", "Simha", "Leo", "sun"),
    sign(5, "kanya", "Kanya", "Virgo", "mercury"),
    sign(6, "tula", "Tula", "Libra", "venus"),
    sign(7, "vrishchika", "Vrishchika", "Scorpio", "mars"),
    sign(8, "dhanu", "Dhanu", "Sagittarius", "jupiter"),
    sign(9, "makara", "Makara", "Capricorn", "saturn"),
    sign(10, "kumbha", "Kumbha", "Aquarius", "saturn"),
    sign(11, "meena", "Meena", "Pisces", "jupiter"),
];

/// Sign index (0-11) for a sidereal longitude. A longitude exactly on a cusp
/// belongs to the sign that starts there.
pub fn sign_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    (lon / SIGN_SPAN).floor() as usize % SIGNS.len()
}

impl ZodiacSign {
    pub fn for_longitude(longitude: f64) -> ZodiacSign {
        SIGNS[sign_index(longitude)]
    }

    pub fn start_degree(&self) -> f64 {
        self.index as f64 * SIGN_SPAN
    }
}

/// Degrees travelled through the containing sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_degrees(longitude);
    (lon - SIGNS[sign_index(lon)].start_degree()).clamp(0.0, SIGN_SPAN)
}
