//! # Celestial bodies and position providers
//!
//! Every body of the catalog is served by a [`PositionProvider`]. The trait exposes the full
//! query surface; each implementation overrides only the queries its model defines and inherits
//! a [`NotSupported`](crate::orrery_errors::OrreryError::NotSupported) default for the others.
//!
//! ## Providers
//!
//! | Body | Provider | Model |
//! |---|---|---|
//! | Sun, Earth, Mercury … Neptune | [`KeplerianBody`](keplerian::KeplerianBody) | six orbital elements |
//! | Moon | [`Moon`](moon::Moon) | truncated periodic-term series |
//! | Pluto | [`Pluto`](pluto::Pluto) | harmonic series in two mean arguments |
//! | Rahu, Ketu | [`LunarNode`](lunar_node::LunarNode) | linear regression of the node |
//!
//! ## Support matrix
//!
//! | Query | Planet | Earth | Sun | Moon | Pluto | Rahu/Ketu |
//! |---|---|---|---|---|---|---|
//! | orbital elements | ✔ | ✔ | ✔ | – | – | – |
//! | ecliptic | ✔ | – | ✔ | ✔ | ✔ | ✔ |
//! | equatorial | ✔ | – | ✔ | ✔ | ✔ | ✔ |
//! | heliocentric 3D | ✔ | ✔ | ✔ | – | ✔ | – |
//! | geocentric 3D | ✔ | ✔ | ✔ | – | ✔ | – |
//! | apparent geocentric | ✔ | – | – | – | ✔ | – |
//!
//! Providers receive the [`Ephemeris`] they are registered in, so that they can reach the
//! memoized Earth vector and the configuration.

pub mod keplerian;
pub mod lunar_node;
pub mod moon;
pub mod pluto;

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::ephemeris::Ephemeris;
use crate::orbital_elements::OrbitalElements;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{cartesian_to_ecliptic, light_time_corrected};
use crate::time::JulianTime;

/// The fixed catalog of bodies known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Earth,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
    Rahu,
    Ketu,
}

impl Body {
    /// Every body of the catalog, in catalog order.
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Earth,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Moon,
        Body::Rahu,
        Body::Ketu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Moon => "Moon",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    /// Case-insensitive lookup of a catalog name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OrreryError::NotFound(s.to_string()))
    }
}

/// Position query capabilities of one body.
///
/// Every query has a default implementation. The 3D-derived defaults (`geocentric_3d`,
/// `ecliptic`, `apparent_geocentric_3d`) are built on `heliocentric_3d`, so a model that only
/// knows its heliocentric vector gets the derived queries for free. `orbital_elements` and
/// `equatorial` default to `NotSupported`.
pub trait PositionProvider: fmt::Debug + Send + Sync {
    /// Body served by this provider, used in error reports.
    fn body(&self) -> Body;

    fn orbital_elements(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<OrbitalElements, OrreryError> {
        Err(OrreryError::not_supported(self.body(), "orbital_elements"))
    }

    /// Heliocentric ecliptic Cartesian position (AU).
    fn heliocentric_3d(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        Err(OrreryError::not_supported(self.body(), "heliocentric_3d"))
    }

    /// Geocentric ecliptic Cartesian position (AU): heliocentric minus Earth heliocentric.
    fn geocentric_3d(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        let position = self.heliocentric_3d(state, time)?;
        let earth = state.earth_heliocentric(time)?;
        Ok(position - earth)
    }

    /// Geocentric ecliptic longitude and latitude.
    fn ecliptic(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        cartesian_to_ecliptic(&self.geocentric_3d(state, time)?)
    }

    /// Geocentric right ascension and declination.
    fn equatorial(
        &self,
        _state: &Ephemeris,
        _time: &JulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        Err(OrreryError::not_supported(self.body(), "equatorial"))
    }

    /// Light-time corrected geocentric ecliptic Cartesian position (AU).
    fn apparent_geocentric_3d(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        light_time_geocentric(self, state, time)
    }

    /// Light-time corrected geocentric ecliptic longitude and latitude.
    fn apparent_geocentric(
        &self,
        state: &Ephemeris,
        time: &JulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        cartesian_to_ecliptic(&self.apparent_geocentric_3d(state, time)?)
    }
}

/// Light-time corrected geocentric vector of a provider, with the Earth fixed at `time` and the
/// iteration budget taken from the registry parameters.
pub(crate) fn light_time_geocentric<P: PositionProvider + ?Sized>(
    provider: &P,
    state: &Ephemeris,
    time: &JulianTime,
) -> Result<Vector3<Decimal>, OrreryError> {
    let earth = state.earth_heliocentric(time)?;
    let params = state.params();
    let solution = light_time_corrected(
        &earth,
        time,
        params.light_time_max_iterations,
        params.light_time_tolerance_seconds,
        |at| provider.heliocentric_3d(state, at),
    )?;

    tracing::debug!(
        body = %provider.body(),
        iterations = solution.iterations,
        light_time_seconds = %solution.light_time_seconds,
        "apparent position solved"
    );
    Ok(solution.geocentric)
}
