//! Mean lunar nodes: Rahu (ascending) and Ketu (descending).
//!
//! The longitude of the ascending node regresses linearly, `Ω = 125.04452 − 0.05295376484 d`
//! with `d` the days since J2000.0; the descending node is diametrically opposite. Both lie on
//! the ecliptic.

use nalgebra::Vector3;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Body, PositionProvider};
use crate::constants::{Days, Degree};
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::decimal_math::normalize_degrees;
use crate::ephemeris::Ephemeris;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{axial_tilt, ecliptic_to_equatorial};
use crate::time::JulianTime;

const NODE_AT_J2000: Degree = dec!(125.04452);
const NODE_RATE: Degree = dec!(-0.05295376484);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarNode {
    /// Ascending node.
    Rahu,
    /// Descending node.
    Ketu,
}

impl LunarNode {
    /// Ecliptic longitude of the node, in `[0, 360)`.
    pub fn longitude(&self, days: Days) -> Degree {
        let ascending = NODE_AT_J2000 + NODE_RATE * days;
        match self {
            LunarNode::Rahu => normalize_degrees(ascending),
            LunarNode::Ketu => normalize_degrees(ascending + dec!(180)),
        }
    }
}

impl PositionProvider for LunarNode {
    fn body(&self) -> Body {
        match self {
            LunarNode::Rahu => Body::Rahu,
            LunarNode::Ketu => Body::Ketu,
        }
    }

    fn ecliptic(
        &self,
        _state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        Ok(EclipticCoordinates::new(
            self.longitude(time.days_since_j2000()),
            Decimal::ZERO,
        ))
    }

    fn equatorial(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        let ecliptic = self.ecliptic(state, time)?;
        ecliptic_to_equatorial(&ecliptic, axial_tilt(time.centuries_since_j2000()))
    }

    fn geocentric_3d(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        Err(OrreryError::not_supported(self.body(), "geocentric_3d"))
    }

    fn apparent_geocentric_3d(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        Err(OrreryError::not_supported(self.body(), "apparent_geocentric"))
    }
}
