//! # Keplerian positions
//!
//! From a set of [`OrbitalElements`] to a heliocentric ecliptic Cartesian vector, in three
//! steps:
//!
//! 1. [`eccentric_anomaly`]: E from the mean anomaly M with the sixth order series in the
//!    eccentricity, `E = M + e sin M + ½ e² sin 2M + …`.
//! 2. [`orbital_plane_position`]: true anomaly v and distance r from the in-plane coordinates
//!    `Xv = A(cos E − e)`, `Yv = A √(1 − e²) sin E`.
//! 3. [`position_from_elements`]: rotation of (v, r) by the ascending node, the inclination and
//!    the argument of perihelion into the J2000.0 ecliptic frame.
//!
//! Angles enter in radians, except in [`OrbitalElements`] which stores degrees. Distances are in
//! AU.

use nalgebra::Vector3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::constants::Radian;
use crate::decimal_math::{atan2, cos, sin, sqrt, to_radians};
use crate::orbital_elements::OrbitalElements;
use crate::orrery_errors::OrreryError;

/// Eccentric anomaly from a sixth order expansion of Kepler's equation in powers of `e`.
///
/// This is a closed form truncated series, not an iterative solver: its accuracy degrades for
/// large eccentricities but stays far below the model error for every tabulated body.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians.
/// * `e`: orbital eccentricity.
///
/// Return
/// ------
/// * The eccentric anomaly E in radians.
pub fn eccentric_anomaly(mean_anomaly: Radian, e: Decimal) -> Result<Radian, OrreryError> {
    let m = mean_anomaly;
    let s1 = sin(m)?;
    let s2 = sin(Decimal::TWO * m)?;
    let s3 = sin(dec!(3) * m)?;
    let s4 = sin(dec!(4) * m)?;
    let s5 = sin(dec!(5) * m)?;
    let s6 = sin(dec!(6) * m)?;

    let e2 = e * e;
    let e3 = e2 * e;
    let e4 = e3 * e;
    let e5 = e4 * e;
    let e6 = e5 * e;

    let third = Decimal::ONE / dec!(3);
    let sixth = Decimal::ONE / dec!(6);

    let order3 = dec!(0.375) * s3 - dec!(0.125) * s1;
    let order4 = -sixth * s2 + third * s4;
    let order5 = -(dec!(27) / dec!(128)) * s3 + s1 / dec!(192) + (dec!(125) / dec!(384)) * s5;
    let order6 = s2 / dec!(48) + (dec!(27) / dec!(80)) * s6 - (dec!(4) / dec!(15)) * s4;

    Ok(m + e * s1 + e2 * dec!(0.5) * s2 + e3 * order3 + e4 * order4 + e5 * order5 + e6 * order6)
}

/// Position of the body in its orbital plane.
///
/// Arguments
/// ---------
/// * `semimajor_axis`: semimajor axis A (AU).
/// * `e`: eccentricity.
/// * `eccentric_anomaly`: eccentric anomaly E (radians).
///
/// Return
/// ------
/// * `(v, r)`: true anomaly in radians and heliocentric distance in AU, from
///   `Xv = A(cos E - e)` and `Yv = A √(1 - e²) sin E`.
pub fn orbital_plane_position(
    semimajor_axis: Decimal,
    e: Decimal,
    eccentric_anomaly: Radian,
) -> Result<(Radian, Decimal), OrreryError> {
    let xv = semimajor_axis * (cos(eccentric_anomaly)? - e);
    let yv = semimajor_axis * sqrt(Decimal::ONE - e * e)? * sin(eccentric_anomaly)?;

    let true_anomaly = atan2(yv, xv)?;
    let radius = sqrt(xv * xv + yv * yv)?;
    Ok((true_anomaly, radius))
}

/// Heliocentric ecliptic Cartesian position (AU) described by a set of orbital elements.
///
/// The orbital plane position is rotated by the ascending node N, the inclination i and the
/// argument of perihelion w:
///
/// ```text
/// X = r (cos N cos(v+w) - sin N sin(v+w) cos i)
/// Y = r (sin N cos(v+w) + cos N sin(v+w) cos i)
/// Z = r sin(v+w) sin i
/// ```
pub fn position_from_elements(elements: &OrbitalElements) -> Result<Vector3<Decimal>, OrreryError> {
    let e = elements.eccentricity;
    let m = to_radians(elements.mean_anomaly);
    let ecc = eccentric_anomaly(m, e)?;
    let (v, r) = orbital_plane_position(elements.semimajor_axis, e, ecc)?;

    debug!(
        mean_anomaly = %m,
        eccentric_anomaly = %ecc,
        true_anomaly = %v,
        radius = %r,
        "solved orbital plane position"
    );

    let node = to_radians(elements.long_ascending_node);
    let incl = to_radians(elements.inclination);
    let vw = v + to_radians(elements.perihelion);

    let (cos_n, sin_n) = (cos(node)?, sin(node)?);
    let (cos_vw, sin_vw) = (cos(vw)?, sin(vw)?);
    let (cos_i, sin_i) = (cos(incl)?, sin(incl)?);

    Ok(Vector3::new(
        r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
        r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
        r * sin_vw * sin_i,
    ))
}
