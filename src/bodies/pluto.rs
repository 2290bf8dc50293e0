//! Heliocentric Pluto from a fitted harmonic series.
//!
//! Two mean arguments drive the model, with `d` the days since J2000.0:
//!
//! ```text
//! S = 50.03  + 0.033459652 d   (Saturn)
//! P = 238.95 + 0.003968789 d   (Pluto)
//! ```
//!
//! Longitude, latitude and radius are trigonometric series in `P` (six harmonics) plus one
//! `S − P` term. The resulting heliocentric ecliptic vector feeds the same geocentric,
//! ecliptic, equatorial and apparent pipelines as the planets. Pluto has no orbital element
//! set in this model.

use nalgebra::Vector3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::{Body, PositionProvider};
use crate::constants::{AstronomicalUnit, Days, Degree};
use crate::coordinates::EquatorialCoordinates;
use crate::decimal_math::{cos, cos_deg, sin, sin_deg, to_radians};
use crate::ephemeris::Ephemeris;
use crate::orrery_errors::OrreryError;
use crate::ref_system::cartesian_to_equatorial;
use crate::time::JulianTime;

/// `(sin, cos)` coefficients of the harmonics `1P … 6P`, then of `S − P`.
struct HarmonicSeries {
    base: Decimal,
    drift: Decimal,
    harmonics: &'static [(Decimal, Decimal)],
    synodic: (Decimal, Decimal),
}

const LONGITUDE: HarmonicSeries = HarmonicSeries {
    base: dec!(238.9508),
    drift: dec!(0.00400703),
    harmonics: &[
        (dec!(-19.799), dec!(19.848)),
        (dec!(0.897), dec!(-4.956)),
        (dec!(0.610), dec!(1.211)),
        (dec!(-0.341), dec!(-0.190)),
        (dec!(0.128), dec!(-0.034)),
        (dec!(-0.038), dec!(0.031)),
    ],
    synodic: (dec!(0.020), dec!(-0.010)),
};

const LATITUDE: HarmonicSeries = HarmonicSeries {
    base: dec!(-3.9082),
    drift: dec!(0),
    harmonics: &[
        (dec!(-5.453), dec!(-14.975)),
        (dec!(3.527), dec!(1.673)),
        (dec!(-1.051), dec!(0.328)),
        (dec!(0.179), dec!(-0.292)),
        (dec!(0.019), dec!(0.100)),
        (dec!(-0.031), dec!(-0.026)),
    ],
    synodic: (dec!(0), dec!(0.011)),
};

const RADIUS: HarmonicSeries = HarmonicSeries {
    base: dec!(40.72),
    drift: dec!(0),
    harmonics: &[
        (dec!(6.68), dec!(6.90)),
        (dec!(-1.18), dec!(-0.03)),
        (dec!(0.15), dec!(-0.14)),
    ],
    synodic: (dec!(0), dec!(0)),
};

/// Sines and cosines of `kP` (k = 1..6) and of `S − P`.
struct Trigonometry {
    sin_kp: [Decimal; 6],
    cos_kp: [Decimal; 6],
    sin_sp: Decimal,
    cos_sp: Decimal,
}

impl Trigonometry {
    fn at(days: Days) -> Result<Self, OrreryError> {
        let s = to_radians(dec!(50.03) + dec!(0.033459652) * days);
        let p = to_radians(dec!(238.95) + dec!(0.003968789) * days);

        let mut sin_kp = [Decimal::ZERO; 6];
        let mut cos_kp = [Decimal::ZERO; 6];
        for (k, (sk, ck)) in sin_kp.iter_mut().zip(cos_kp.iter_mut()).enumerate() {
            let kp = Decimal::from(k + 1) * p;
            *sk = sin(kp)?;
            *ck = cos(kp)?;
        }

        Ok(Trigonometry {
            sin_kp,
            cos_kp,
            sin_sp: sin(s - p)?,
            cos_sp: cos(s - p)?,
        })
    }
}

impl HarmonicSeries {
    fn evaluate(&self, days: Days, trig: &Trigonometry) -> Decimal {
        let periodic: Decimal = self
            .harmonics
            .iter()
            .zip(trig.sin_kp.iter().zip(trig.cos_kp.iter()))
            .map(|((a, b), (s, c))| a * s + b * c)
            .sum();
        self.base
            + self.drift * days
            + periodic
            + self.synodic.0 * trig.sin_sp
            + self.synodic.1 * trig.cos_sp
    }
}

/// Heliocentric ecliptic longitude, latitude (degrees) and distance (AU) of Pluto.
pub fn heliocentric_spherical(
    days: Days,
) -> Result<(Degree, Degree, AstronomicalUnit), OrreryError> {
    let trig = Trigonometry::at(days)?;
    Ok((
        LONGITUDE.evaluate(days, &trig),
        LATITUDE.evaluate(days, &trig),
        RADIUS.evaluate(days, &trig),
    ))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pluto;

impl PositionProvider for Pluto {
    fn body(&self) -> Body {
        Body::Pluto
    }

    fn heliocentric_3d(
        &self,
        _state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        let (longitude, latitude, radius) = heliocentric_spherical(time.days_since_j2000())?;
        debug!(
            longitude = %longitude,
            latitude = %latitude,
            radius = %radius,
            "pluto heliocentric series"
        );

        let (sin_lon, cos_lon) = (sin_deg(longitude)?, cos_deg(longitude)?);
        let (sin_lat, cos_lat) = (sin_deg(latitude)?, cos_deg(latitude)?);

        Ok(Vector3::new(
            radius * cos_lon * cos_lat,
            radius * sin_lon * cos_lat,
            radius * sin_lat,
        ))
    }

    fn equatorial(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        cartesian_to_equatorial(&self.geocentric_3d(state, time)?, time)
    }
}

#[cfg(test)]
mod pluto_test {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;

    fn f(value: Decimal) -> f64 {
        value.to_f64().unwrap()
    }

    #[test]
    fn test_series_at_j2000() {
        let (lon, lat, r) = heliocentric_spherical(Decimal::ZERO).unwrap();
        assert_relative_eq!(f(lon), 250.53035, epsilon = 1e-4);
        assert_relative_eq!(f(lat), 11.16499, epsilon = 1e-4);
        assert_relative_eq!(f(r), 30.26137, epsilon = 1e-4);
    }

    #[test]
    fn test_heliocentric_vector_has_series_radius() {
        let state = Ephemeris::new();
        let t = JulianTime::from_julian_day(dec!(2455197.5));
        let v = Pluto.heliocentric_3d(&state, &t).unwrap();
        let (_, _, r) = heliocentric_spherical(t.days_since_j2000()).unwrap();
        let norm = crate::ref_system::norm(&v).unwrap();
        assert_relative_eq!(f(norm), f(r), epsilon = 1e-12);
    }

    #[test]
    fn test_orbital_elements_not_supported() {
        let state = Ephemeris::new();
        assert_eq!(
            Pluto.orbital_elements(&state, &JulianTime::J2000),
            Err(OrreryError::NotSupported {
                body: "Pluto".into(),
                operation: "orbital_elements"
            })
        );
    }
}
