//! Geocentric Moon from a truncated lunar theory.
//!
//! ## Model
//!
//! With `T` the Julian centuries since J2000.0, the fundamental arguments are quartic
//! polynomials in `T`:
//!
//! * `L`: mean longitude of the Moon,
//! * `D`: mean elongation,
//! * `M☉`: mean anomaly of the Sun,
//! * `M`: mean anomaly of the Moon,
//! * `F`: argument of latitude.
//!
//! The longitude is
//!
//! ```text
//! λ = L + 1e-6 · (A + Σ eᵢ^|m| · Sᵢ · sin(d·D + m·M☉ + m'·M + f·F))
//! ```
//!
//! over the 30 largest periodic terms, where `A` gathers the Venus, Jupiter and flattening
//! additive terms and `e(T)` corrects for the decreasing eccentricity of the Earth orbit.
//! The latitude keeps only its main term `β = 5.128 · sin F`.
//!
//! The model yields geocentric angles only: heliocentric, 3D and element queries are not
//! available.

use nalgebra::Vector3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::{Body, PositionProvider};
use crate::constants::{Centuries, Degree};
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::decimal_math::{normalize_degrees, power_n, sin, sin_deg, to_radians};
use crate::ephemeris::Ephemeris;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{axial_tilt, ecliptic_to_equatorial};
use crate::time::JulianTime;

/// One periodic term of the longitude series: multipliers of `D`, `M☉`, `M`, `F` and the
/// amplitude in millionths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LongitudeTerm {
    d: i8,
    m: i8,
    m1: i8,
    f: i8,
    amplitude: i32,
}

const fn term(d: i8, m: i8, m1: i8, f: i8, amplitude: i32) -> LongitudeTerm {
    LongitudeTerm {
        d,
        m,
        m1,
        f,
        amplitude,
    }
}

const LONGITUDE_TERMS: [LongitudeTerm; 30] = [
    term(0, 0, 1, 0, 6288774),
    term(2, 0, -1, 0, 1274027),
    term(2, 0, 0, 0, 658314),
    term(0, 0, 2, 0, 213618),
    term(0, 1, 0, 0, -185116),
    term(0, 0, 0, 2, -114332),
    term(2, 0, -2, 0, 58793),
    term(2, -1, -1, 0, 57066),
    term(2, 0, 1, 0, 53322),
    term(2, -1, 0, 0, 45758),
    term(0, 1, -1, 0, -40923),
    term(1, 0, 0, 0, -34720),
    term(0, 1, 1, 0, -30383),
    term(2, 0, 0, -2, 15327),
    term(0, 0, 1, 2, -12528),
    term(0, 0, 1, -2, 10980),
    term(4, 0, -1, 0, 10675),
    term(0, 0, 3, 0, 10034),
    term(4, 0, -2, 0, 8548),
    term(2, 1, -1, 0, -7888),
    term(2, 1, 0, 0, -6766),
    term(1, 0, -1, 0, -5163),
    term(1, 1, 0, 0, 4987),
    term(2, -1, 1, 0, 4036),
    term(2, 0, 2, 0, 3994),
    term(4, 0, 0, 0, 3861),
    term(2, 0, -3, 0, 3665),
    term(0, 1, -2, 0, -2689),
    term(2, 0, -1, 2, -2602),
    term(2, -1, -2, 0, 2390),
];

/// Fundamental arguments of the lunar theory at one instant, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    pub mean_longitude: Degree,
    pub mean_elongation: Degree,
    pub sun_mean_anomaly: Degree,
    pub moon_mean_anomaly: Degree,
    pub argument_of_latitude: Degree,
}

impl LunarArguments {
    /// Evaluate the five arguments, each normalized to `[0, 360)`.
    pub fn at(centuries: Centuries) -> Result<Self, OrreryError> {
        let t = centuries;
        let t2 = power_n(t, 2)?;
        let t3 = power_n(t, 3)?;
        let t4 = power_n(t, 4)?;

        let mean_longitude = dec!(218.3164477) + dec!(481267.88123421) * t - dec!(0.0015786) * t2
            + t3 / dec!(538841)
            - t4 / dec!(65194000);
        let mean_elongation = dec!(297.8501921) + dec!(445267.114034) * t - dec!(0.0018819) * t2
            + t3 / dec!(545868)
            - t4 / dec!(113065000);
        let sun_mean_anomaly = dec!(357.5291092) + dec!(35999.0502909) * t
            - dec!(0.0001536) * t2
            + t3 / dec!(24490000);
        let moon_mean_anomaly = dec!(134.9633964) + dec!(477198.8675055) * t
            + dec!(0.0087414) * t2
            - t3 / dec!(24490000);
        let argument_of_latitude = dec!(93.2720950) + dec!(483202.0175233) * t
            - dec!(0.0036539) * t2
            - t3 / dec!(3526000)
            + t4 / dec!(863310000);

        Ok(LunarArguments {
            mean_longitude: normalize_degrees(mean_longitude),
            mean_elongation: normalize_degrees(mean_elongation),
            sun_mean_anomaly: normalize_degrees(sun_mean_anomaly),
            moon_mean_anomaly: normalize_degrees(moon_mean_anomaly),
            argument_of_latitude: normalize_degrees(argument_of_latitude),
        })
    }
}

/// Sum of the additive and periodic longitude terms, in millionths of a degree.
fn longitude_perturbation(args: &LunarArguments, t: Centuries) -> Result<Decimal, OrreryError> {
    let a1 = to_radians(dec!(119.75) + dec!(131.849) * t);
    let a2 = to_radians(dec!(53.09) + dec!(479264.290) * t);
    let mut sum = dec!(3958) * sin(a1)?
        + dec!(1962) * sin_deg(args.mean_longitude - args.argument_of_latitude)?
        + dec!(318) * sin(a2)?;

    let eccentricity = Decimal::ONE - dec!(0.002516) * t - dec!(0.0000074) * t * t;

    let d = to_radians(args.mean_elongation);
    let m = to_radians(args.sun_mean_anomaly);
    let m1 = to_radians(args.moon_mean_anomaly);
    let f = to_radians(args.argument_of_latitude);

    for term in LONGITUDE_TERMS.iter() {
        let argument = Decimal::from(term.d) * d
            + Decimal::from(term.m) * m
            + Decimal::from(term.m1) * m1
            + Decimal::from(term.f) * f;
        let factor = power_n(eccentricity, u64::from(term.m.unsigned_abs()))?;
        sum += factor * Decimal::from(term.amplitude) * sin(argument)?;
    }

    Ok(sum)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Moon;

impl Moon {
    /// Geocentric ecliptic longitude and latitude of the Moon.
    pub fn ecliptic_at(time: &JulianTime) -> Result<EclipticCoordinates, OrreryError> {
        let t = time.centuries_since_j2000();
        let args = LunarArguments::at(t)?;
        let sum = longitude_perturbation(&args, t)?;

        let longitude = normalize_degrees(args.mean_longitude + dec!(0.000001) * sum);
        let latitude = dec!(5.128) * sin_deg(args.argument_of_latitude)?;

        debug!(
            centuries = %t,
            mean_longitude = %args.mean_longitude,
            perturbation = %sum,
            longitude = %longitude,
            "lunar longitude"
        );
        Ok(EclipticCoordinates::new(longitude, latitude))
    }
}

impl PositionProvider for Moon {
    fn body(&self) -> Body {
        Body::Moon
    }

    fn ecliptic(
        &self,
        _state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        Moon::ecliptic_at(time)
    }

    fn equatorial(
        &self,
        _state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        let ecliptic = Moon::ecliptic_at(time)?;
        ecliptic_to_equatorial(&ecliptic, axial_tilt(time.centuries_since_j2000()))
    }

    fn geocentric_3d(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        Err(OrreryError::not_supported(Body::Moon, "geocentric_3d"))
    }

    fn apparent_geocentric_3d(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        Err(OrreryError::not_supported(Body::Moon, "apparent_geocentric"))
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;

    fn f(value: Decimal) -> f64 {
        value.to_f64().unwrap()
    }

    #[test]
    fn test_arguments_at_j2000() {
        let args = LunarArguments::at(Decimal::ZERO).unwrap();
        assert_eq!(args.mean_longitude, dec!(218.3164477));
        assert_eq!(args.mean_elongation, dec!(297.8501921));
        assert_eq!(args.sun_mean_anomaly, dec!(357.5291092));
        assert_eq!(args.moon_mean_anomaly, dec!(134.9633964));
        assert_eq!(args.argument_of_latitude, dec!(93.2720950));
    }

    #[test]
    fn test_longitude_2010() {
        // 2010-01-01T00:00:00
        let t = JulianTime::from_julian_day(dec!(2455197.5));
        let ecl = Moon::ecliptic_at(&t).unwrap();
        assert_relative_eq!(f(ecl.longitude), 103.22017, epsilon = 1e-4);
        assert_relative_eq!(f(ecl.latitude), 0.58283, epsilon = 1e-4);
    }

    #[test]
    fn test_latitude_is_bounded() {
        for jd in [dec!(2440000.5), dec!(2451545), dec!(2460000.25)] {
            let ecl = Moon::ecliptic_at(&JulianTime::from_julian_day(jd)).unwrap();
            assert!(ecl.latitude.abs() <= dec!(5.128));
            assert!(ecl.longitude >= Decimal::ZERO && ecl.longitude < dec!(360));
        }
    }

    #[test]
    fn test_unsupported_queries() {
        let state = Ephemeris::new();
        let t = JulianTime::J2000;
        for result in [
            Moon.heliocentric_3d(&state, &t),
            Moon.geocentric_3d(&state, &t),
            Moon.apparent_geocentric_3d(&state, &t),
        ] {
            assert!(matches!(result, Err(OrreryError::NotSupported { .. })));
        }
        assert!(Moon.orbital_elements(&state, &t).is_err());
        assert!(Moon.apparent_geocentric(&state, &t).is_err());
    }
}
