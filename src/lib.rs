pub mod bodies;
pub mod constants;
pub mod coordinates;
pub mod decimal_math;
pub mod ephemeris;
pub mod kepler;
pub mod observer;
pub mod orbital_elements;
pub mod orrery_errors;
pub mod params;
pub mod ref_system;
pub mod time;

pub use bodies::Body;
pub use ephemeris::Ephemeris;
pub use orrery_errors::OrreryError;
pub use params::EphemerisParams;
pub use time::JulianTime;
