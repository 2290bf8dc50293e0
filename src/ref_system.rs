//! # Reference frames and light-time
//!
//! Conversions between the frames used by the position providers:
//!
//! - heliocentric or geocentric ecliptic Cartesian vectors (AU),
//! - ecliptic angular coordinates (λ, β),
//! - equatorial angular coordinates (α, δ), obtained by a rotation of the ecliptic frame by the
//!   axial tilt ε of the date.
//!
//! The module also hosts the light-time iteration used to compute apparent geocentric
//! positions.
//!
//! ## Overview
//!
//! | Function | From | To |
//! |---|---|---|
//! | [`cartesian_to_ecliptic`] | ecliptic Cartesian | (λ, β) |
//! | [`ecliptic_to_equatorial`] | (λ, β) | (α, δ) |
//! | [`cartesian_to_equatorial`] | ecliptic Cartesian | (α, δ) |
//! | [`light_time_corrected`] | heliocentric model | retarded geocentric vector |

use nalgebra::Vector3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::constants::{AstronomicalUnit, Centuries, Degree, VLIGHT_AU_PER_SECOND};
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::decimal_math::{
    asin, atan2, cos_deg, normalize_degrees, sin_deg, sqrt, to_degrees,
};
use crate::orrery_errors::OrreryError;
use crate::time::JulianTime;

/// Mean obliquity of the ecliptic (axial tilt) of the date, in degrees.
///
/// ```text
/// ε(T) = 23.439291111111 − 0.0130041666667 T − 1.63888888889e-7 T² + 5.959274797e-9 T³
/// ```
///
/// evaluated with Horner's scheme.
///
/// Arguments
/// ---------
/// * `centuries`: Julian centuries since J2000.0.
pub fn axial_tilt(centuries: Centuries) -> Degree {
    let ob0 = dec!(23.439291111111);
    let ob1 = dec!(-0.0130041666667);
    let ob2 = dec!(-0.000000163888888889);
    let ob3 = dec!(0.000000005959274797);

    let t = centuries;
    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Euclidean norm of a Cartesian vector.
pub fn norm(v: &Vector3<Decimal>) -> Result<AstronomicalUnit, OrreryError> {
    sqrt(v.x * v.x + v.y * v.y + v.z * v.z)
}

/// Ecliptic longitude and latitude of an ecliptic Cartesian vector.
///
/// Return
/// ------
/// * λ = atan2(y, x) in `[0, 360)` and β = asin(z / r) in `[-90, 90]`, both in degrees.
///   The null vector has no direction and is rejected with a `DomainError`.
pub fn cartesian_to_ecliptic(v: &Vector3<Decimal>) -> Result<EclipticCoordinates, OrreryError> {
    let r = norm(v)?;
    if r.is_zero() {
        return Err(OrreryError::domain(
            "cartesian_to_ecliptic",
            "null vector has no direction",
        ));
    }

    let longitude = normalize_degrees(to_degrees(atan2(v.y, v.x)?));
    // rounding of the norm can push |z / r| a few ulps past 1
    let ratio = (v.z / r).clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
    let latitude = to_degrees(asin(ratio)?);

    Ok(EclipticCoordinates::new(longitude, latitude))
}

/// Rotate ecliptic coordinates into equatorial coordinates.
///
/// Arguments
/// ---------
/// * `ecliptic`: ecliptic longitude and latitude (degrees).
/// * `tilt`: axial tilt ε of the date (degrees), see [`axial_tilt`].
///
/// Return
/// ------
/// * Right ascension `α = atan2(sinλ cosβ cosε − sinβ sinε, cosλ cosβ)` in `[0, 360)` and
///   declination `δ = asin(sinβ cosε + cosβ sinε sinλ)`, in degrees. The ecliptic poles are
///   valid inputs. A point on the celestial pole gets `α = 0`.
pub fn ecliptic_to_equatorial(
    ecliptic: &EclipticCoordinates,
    tilt: Degree,
) -> Result<EquatorialCoordinates, OrreryError> {
    let (sin_l, cos_l) = (
        sin_deg(ecliptic.longitude)?,
        cos_deg(ecliptic.longitude)?,
    );
    let (sin_b, cos_b) = (sin_deg(ecliptic.latitude)?, cos_deg(ecliptic.latitude)?);
    let (sin_e, cos_e) = (sin_deg(tilt)?, cos_deg(tilt)?);

    let y = sin_l * cos_b * cos_e - sin_b * sin_e;
    let x = cos_l * cos_b;
    let right_ascension = if x.is_zero() && y.is_zero() {
        Decimal::ZERO
    } else {
        normalize_degrees(to_degrees(atan2(y, x)?))
    };
    let sin_dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
    let declination = to_degrees(asin(sin_dec)?);

    Ok(EquatorialCoordinates::new(right_ascension, declination))
}

/// Equatorial coordinates of an ecliptic Cartesian vector at a given date.
///
/// See also
/// --------
/// * [`cartesian_to_ecliptic`]
/// * [`ecliptic_to_equatorial`]
pub fn cartesian_to_equatorial(
    v: &Vector3<Decimal>,
    time: &JulianTime,
) -> Result<EquatorialCoordinates, OrreryError> {
    let ecliptic = cartesian_to_ecliptic(v)?;
    ecliptic_to_equatorial(&ecliptic, axial_tilt(time.centuries_since_j2000()))
}

// -------------------------------------------------------------------------------------------------
// Light-time correction
// -------------------------------------------------------------------------------------------------

/// Result of the light-time iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTimeSolution {
    /// Geocentric ecliptic vector of the body at the retarded instant (AU).
    pub geocentric: Vector3<Decimal>,
    /// Final light travel time estimate (seconds).
    pub light_time_seconds: Decimal,
    /// Number of corrective iterations performed.
    pub iterations: usize,
}

/// Solve for the light travel time between a body and the Earth.
///
/// The Earth stays at its position at the query instant `time`. At each iteration the body is
/// re-evaluated at `time − τ`, where `τ = |P − E| / c` is the previous light-time estimate.
/// The shift is always taken from the query instant, never accumulated across iterations.
///
/// Arguments
/// ---------
/// * `earth`: heliocentric Earth vector at `time` (AU).
/// * `time`: query instant.
/// * `max_iterations`: iteration ceiling.
/// * `tolerance_seconds`: stop when two successive estimates of `τ` differ by less than this.
/// * `heliocentric_at`: heliocentric position model of the body.
///
/// Return
/// ------
/// * A [`LightTimeSolution`], or [`OrreryError::ConvergenceFailure`] when the ceiling is
///   reached. Errors of the position model are propagated.
pub fn light_time_corrected<F>(
    earth: &Vector3<Decimal>,
    time: &JulianTime,
    max_iterations: usize,
    tolerance_seconds: Decimal,
    mut heliocentric_at: F,
) -> Result<LightTimeSolution, OrreryError>
where
    F: FnMut(&JulianTime) -> Result<Vector3<Decimal>, OrreryError>,
{
    let geocentric = heliocentric_at(time)? - earth;
    let mut light_time = norm(&geocentric)? / VLIGHT_AU_PER_SECOND;

    for iteration in 1..=max_iterations {
        let retarded = time.earlier_by_seconds(light_time);
        let geocentric = heliocentric_at(&retarded)? - earth;
        let next = norm(&geocentric)? / VLIGHT_AU_PER_SECOND;

        debug!(
            iteration,
            light_time_seconds = %next,
            delta = %(next - light_time),
            "light-time iteration"
        );

        if (next - light_time).abs() < tolerance_seconds {
            return Ok(LightTimeSolution {
                geocentric,
                light_time_seconds: next,
                iterations: iteration,
            });
        }
        light_time = next;
    }

    warn!(
        max_iterations,
        light_time_seconds = %light_time,
        "light-time iteration did not converge"
    );
    Err(OrreryError::ConvergenceFailure {
        routine: "light_time",
        iterations: max_iterations,
    })
}
