//! Bodies following the six-element Keplerian model: the Sun, the Earth and the seven other
//! classical planets.
//!
//! The Earth row of the element table describes the apparent orbit of the Sun seen from the
//! Earth, so the Earth heliocentric vector is the negated output of the engine. The Sun sits at
//! the origin of the heliocentric frame and its geocentric vector is the negated Earth vector.

use nalgebra::Vector3;
use rust_decimal::Decimal;

use super::{light_time_geocentric, Body, PositionProvider};
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::ephemeris::Ephemeris;
use crate::kepler::position_from_elements;
use crate::orbital_elements::{self, AngleNormalization, BodyDescriptor, OrbitalElements};
use crate::orrery_errors::OrreryError;
use crate::ref_system::{cartesian_to_ecliptic, cartesian_to_equatorial};
use crate::time::JulianTime;

/// How the engine output of a body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeplerianRole {
    /// Heliocentric position straight from the engine.
    Planet,
    /// Negated engine output, observer of every geocentric query.
    Earth,
    /// Origin of the heliocentric frame.
    Sun,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianBody {
    body: Body,
    descriptor: BodyDescriptor,
    role: KeplerianRole,
}

impl KeplerianBody {
    pub fn new(body: Body, descriptor: BodyDescriptor, role: KeplerianRole) -> Self {
        KeplerianBody {
            body,
            descriptor,
            role,
        }
    }

    /// A planet with the given element table.
    pub fn planet(body: Body, descriptor: BodyDescriptor) -> Self {
        Self::new(body, descriptor, KeplerianRole::Planet)
    }

    /// The standard Sun, Earth and planet providers.
    pub fn standard() -> Vec<KeplerianBody> {
        vec![
            Self::new(Body::Sun, orbital_elements::SUN, KeplerianRole::Sun),
            Self::new(Body::Earth, orbital_elements::EARTH, KeplerianRole::Earth),
            Self::planet(Body::Mercury, orbital_elements::MERCURY),
            Self::planet(Body::Venus, orbital_elements::VENUS),
            Self::planet(Body::Mars, orbital_elements::MARS),
            Self::planet(Body::Jupiter, orbital_elements::JUPITER),
            Self::planet(Body::Saturn, orbital_elements::SATURN),
            Self::planet(Body::Uranus, orbital_elements::URANUS),
            Self::planet(Body::Neptune, orbital_elements::NEPTUNE),
        ]
    }

    pub fn role(&self) -> KeplerianRole {
        self.role
    }

    pub fn descriptor(&self) -> &BodyDescriptor {
        &self.descriptor
    }

    fn elements(&self, time: &JulianTime, normalization: AngleNormalization) -> OrbitalElements {
        self.descriptor
            .elements_at(time.days_since_j2000(), normalization)
    }
}

impl PositionProvider for KeplerianBody {
    fn body(&self) -> Body {
        self.body
    }

    fn orbital_elements(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<OrbitalElements, OrreryError> {
        Ok(self.elements(time, state.params().angle_normalization))
    }

    fn heliocentric_3d(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        match self.role {
            KeplerianRole::Sun => Ok(Vector3::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)),
            KeplerianRole::Earth => {
                let elements = self.elements(time, state.params().angle_normalization);
                Ok(-position_from_elements(&elements)?)
            }
            KeplerianRole::Planet => {
                let elements = self.elements(time, state.params().angle_normalization);
                position_from_elements(&elements)
            }
        }
    }

    fn geocentric_3d(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        match self.role {
            KeplerianRole::Earth => Ok(Vector3::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)),
            KeplerianRole::Sun => Ok(-state.earth_heliocentric(time)?),
            KeplerianRole::Planet => {
                let position = self.heliocentric_3d(state, time)?;
                Ok(position - state.earth_heliocentric(time)?)
            }
        }
    }

    fn ecliptic(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        if self.role == KeplerianRole::Earth {
            return Err(OrreryError::not_supported(self.body, "ecliptic"));
        }
        cartesian_to_ecliptic(&self.geocentric_3d(state, time)?)
    }

    fn equatorial(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        if self.role == KeplerianRole::Earth {
            return Err(OrreryError::not_supported(self.body, "equatorial"));
        }
        cartesian_to_equatorial(&self.geocentric_3d(state, time)?, time)
    }

    fn apparent_geocentric_3d(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        if self.role != KeplerianRole::Planet {
            return Err(OrreryError::not_supported(self.body, "apparent_geocentric"));
        }
        light_time_geocentric(self, state, time)
    }
}
