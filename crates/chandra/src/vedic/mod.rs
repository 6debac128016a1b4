pub mod nakshatra;
pub mod placement;
pub mod rashi;
pub mod types;

pub use nakshatra::{get_nakshatra_for_longitude, normalize_degrees, Nakshatra, NakshatraMetadata, NAKSHATRAS};
pub use placement::compute_moon_placement;
pub use rashi::{sign_index, ZodiacSign, SIGNS};
pub use types::{MoonPlacement, Unavailable};
