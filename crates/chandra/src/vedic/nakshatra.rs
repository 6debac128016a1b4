//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::Serialize;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nakshatra {
    pub index: usize,
    pub id: &'static str,
    pub name: &'static str,
    /// Vimshottari lord
    pub lord: &'static str,
}

const fn nakshatra(index: usize, id: &'static str, name: &'static str, lord: &'static str) -> Nakshatra {
    Nakshatra {
        index,
        id,
        name,
        lord,
    }
}

pub const NAKSHATRAS: [Nakshatra; 27] = [
    nakshatra(0, "ashwini", "Ashwini", "ketu"),
    nakshatra(1, "bharani", "Bharani", "venus"),
    nakshatra(2, "krittika", "Krittika", "sun"),
    nakshatra(3, "rohini", "Rohini", "moon"),
    nakshatra(4, "mrigashira", "Mrigashira", "mars"),
    nakshatra(5, "ardra", "Ardra", "rahu"),
    nakshatra(6, "punarvasu", "Punarvasu", "jupiter"),
    nakshatra(7, "pushya", "Pushya", "saturn"),
    nakshatra(8, "ashlesha", "Ashlesha", "mercury"),
    nakshatra(9, "magha", "Magha", "ketu"),
    nakshatra(10, "purva_phalguni", "Purva Phalguni", "venus"),
    nakshatra(11, "uttara_phalguni", "Uttara Phalguni", "sun"),
    nakshatra(12, "hasta", "Hasta", "moon"),
    nakshatra(13, "chitra", "Chitra", "mars"),
    nakshatra(14, "swati", "Swati", "rahu"),
    nakshatra(15, "vishakha", "Vishakha", "jupiter"),
    nakshatra(16, "anuradha", "Anuradha", "saturn"),
    nakshatra(17, "jyeshtha", "Jyeshtha", "mercury"),
    nakshatra(18, "mula", "Mula", "ketu"),
    nakshatra(19, "purva_ashadha", "Purva Ashadha", "venus"),
    nakshatra(20, "uttara_ashadha", "Uttara Ashadha", "sun"),
    nakshatra(21, "shravana", "Shravana", "moon"),
    nakshatra(22, "dhanishta", "Dhanishta", "mars"),
    nakshatra(23, "shatabhisha", "Shatabhisha", "rahu"),
    nakshatra(24, "purva_bhadrapada", "Purva Bhadrapada", "jupiter"),
    nakshatra(25, "uttara_bhadrapada", "Uttara Bhadrapada", "saturn"),
    nakshatra(26, "revati", "Revati", "mercury"),
];

impl Nakshatra {
    pub fn start_degree(&self) -> f64 {
        self.index as f64 * NAKSHATRA_SEGMENT_SIZE
    }

    pub fn end_degree(&self) -> f64 {
        self.start_degree() + NAKSHATRA_SEGMENT_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraMetadata {
    pub nakshatra: Nakshatra,
    /// Fraction of the nakshatra already traversed, in [0, 1)
    pub progress: f64,
    pub pada: u8,
    pub pada_fraction: f64,
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-20 % 360 + 360 rounds to exactly 360
    if normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Return metadata for the nakshatra containing the given longitude.
///
/// Segments are half-open: a longitude on a boundary starts the next
/// nakshatra (and pada). The pada is clamped to 1..=4 so rounding right at a
/// boundary can never produce 0 or 5.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let scaled = lon / NAKSHATRA_SEGMENT_SIZE;
    let whole = scaled.floor();
    let index = whole as usize % NAKSHATRAS.len();
    let progress = (scaled - whole).clamp(0.0, 1.0);

    let quarters = progress * 4.0;
    let pada = (quarters.floor() as i64 + 1).clamp(1, 4) as u8;
    let pada_fraction = (quarters - (pada - 1) as f64).clamp(0.0, 1.0);

    NakshatraMetadata {
        nakshatra: NAKSHATRAS[index],
        progress,
        pada,
        pada_fraction,
    }
}
