pub mod adapter;
pub mod precession;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use types::{Ayanamsa, EphemerisEngine, EphemerisError};
