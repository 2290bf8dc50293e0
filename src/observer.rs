//! # Observer on the Earth surface
//!
//! A [`GeoLocation`] is a validated geographic site (longitude east positive, latitude north
//! positive, both in degrees). It gives access to two site-dependent quantities:
//!
//! - the local sidereal time, from a cubic polynomial in the civil days elapsed since
//!   2000-01-01T00:00 plus the site longitude;
//! - the ascendant, the ecliptic longitude rising on the eastern horizon.
//!
//! ## Validation
//!
//! The coordinates are checked when the location is built, so an invalid site is rejected with a
//! `DomainError` before any trigonometric function runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::constants::Degree;
use crate::decimal_math::{atan, cos_deg, normalize_degrees, power_n, sin_deg, tan_deg, to_degrees};
use crate::orrery_errors::OrreryError;
use crate::ref_system::axial_tilt;
use crate::time::JulianTime;

/// A geographic site. Only [`GeoLocation::new`] builds one, so every value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    longitude: Degree,
    latitude: Degree,
}

impl GeoLocation {
    /// Build a validated location.
    ///
    /// Arguments
    /// ---------
    /// * `longitude`: degrees, east positive, in `[-180, 180]`.
    /// * `latitude`: degrees, north positive, in `(-90, 90)`. The ascendant is undefined at the
    ///   poles, so they are rejected.
    ///
    /// Return
    /// ------
    /// * The location, or a `DomainError` naming the offending coordinate.
    pub fn new(longitude: Degree, latitude: Degree) -> Result<Self, OrreryError> {
        if longitude.abs() > dec!(180) {
            return Err(OrreryError::domain(
                "GeoLocation::new",
                format!("longitude {longitude} outside [-180, 180]"),
            ));
        }
        if latitude.abs() >= dec!(90) {
            return Err(OrreryError::domain(
                "GeoLocation::new",
                format!("latitude {latitude} outside (-90, 90)"),
            ));
        }
        Ok(GeoLocation {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }
}

/// Local sidereal time θ of a site, in degrees within `[0, 360)`.
///
/// ```text
/// θ = 99.967794687 + 360.98564736628603 d + 2.907879e-13 d² − 5.302e-22 d³ + longitude
/// ```
///
/// with `d` the civil days elapsed since 2000-01-01T00:00.
pub fn local_sidereal_time(
    location: &GeoLocation,
    time: &JulianTime,
) -> Result<Degree, OrreryError> {
    let d = time.civil_days_since_2000();
    let theta = dec!(99.967794687)
        + dec!(360.98564736628603) * d
        + dec!(0.0000000000002907879) * power_n(d, 2)?
        - dec!(0.0000000000000000000005302) * power_n(d, 3)?
        + location.longitude;
    Ok(normalize_degrees(theta))
}

/// Ecliptic longitude of the ascendant, in degrees within `[0, 360)`.
///
/// With θ the local sidereal time, ε the axial tilt and φ the latitude:
///
/// ```text
/// y = −cos θ
/// x = sin θ cos ε + tan φ sin ε
/// A = atan(y / x)            (+180° when negative)
/// A = (A + 180°) mod 360°    when 90° < θ < 270°
/// ```
///
/// Return
/// ------
/// * The ascendant, or a `DomainError` when `x` vanishes.
pub fn ascendant(location: &GeoLocation, time: &JulianTime) -> Result<Degree, OrreryError> {
    let theta = local_sidereal_time(location, time)?;
    let tilt = axial_tilt(time.centuries_since_j2000());

    let y = -cos_deg(theta)?;
    let x = sin_deg(theta)? * cos_deg(tilt)? + tan_deg(location.latitude)? * sin_deg(tilt)?;
    if x.is_zero() {
        return Err(OrreryError::domain(
            "ascendant",
            "horizon and ecliptic intersection is undefined",
        ));
    }

    let mut output = to_degrees(atan(y / x)?);
    if output < Decimal::ZERO {
        output += dec!(180);
    }
    if theta > dec!(90) && theta < dec!(270) {
        output = (output + dec!(180)) % dec!(360);
    }

    debug!(sidereal_time = %theta, tilt = %tilt, ascendant = %output, "ascendant");
    Ok(output)
}
