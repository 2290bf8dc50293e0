//! # Ephemeris: body registry and query surface
//!
//! [`Ephemeris`] is the context object of the crate. It owns:
//!
//! 1. **Parameters** ([`EphemerisParams`]): light-time budget, cache capacity and element
//!    normalization policy.
//! 2. **Providers**: one [`PositionProvider`] per catalog [`Body`]. The standard catalog is
//!    installed by [`Ephemeris::new`]; any entry can be replaced with [`Ephemeris::register`].
//! 3. **Earth cache**: a bounded LRU of heliocentric Earth vectors keyed by instant. Every
//!    geocentric query needs the Earth vector, so repeated queries at one instant compute it
//!    once.
//!
//! The value is `Send + Sync`: the cache sits behind a [`Mutex`] that is never held while a
//! provider runs.
//!
//! ## Typical usage
//!
//! ```rust
//! use hifitime::Epoch;
//! use orrery::bodies::Body;
//! use orrery::ephemeris::Ephemeris;
//!
//! let ephemeris = Ephemeris::new();
//! let epoch = Epoch::from_gregorian_utc_hms(2019, 11, 9, 0, 0, 0);
//!
//! let jupiter = ephemeris.equatorial_coordinates(Body::Jupiter, &epoch).unwrap();
//! assert_eq!(jupiter.right_ascension.round(), rust_decimal::Decimal::from(264));
//! ```
//!
//! ## Errors
//!
//! * [`OrreryError::NotFound`]: unknown body name, or no provider registered for the body.
//! * [`OrreryError::NotSupported`]: the provider does not define the query.
//! * [`OrreryError::ConvergenceFailure`]: the light-time iteration exhausted its budget.
//! * Kernel domain errors propagate unchanged.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lru::LruCache;
use nalgebra::Vector3;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::bodies::keplerian::KeplerianBody;
use crate::bodies::lunar_node::LunarNode;
use crate::bodies::moon::Moon;
use crate::bodies::pluto::Pluto;
use crate::bodies::{Body, PositionProvider};
use crate::constants::Degree;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::observer::{self, GeoLocation};
use crate::orbital_elements::OrbitalElements;
use crate::orrery_errors::OrreryError;
use crate::params::EphemerisParams;
use crate::time::{JulianTime, ToJulianTime};

#[derive(Debug)]
pub struct Ephemeris {
    params: EphemerisParams,
    providers: HashMap<Body, Arc<dyn PositionProvider>>,
    earth_cache: Mutex<LruCache<JulianTime, Vector3<Decimal>>>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// Registry with the standard catalog and default parameters.
    pub fn new() -> Self {
        Self::with_params(EphemerisParams::default())
    }

    /// Registry with the standard catalog and the given parameters.
    ///
    /// A zero cache capacity (only reachable by bypassing the builder) falls back to a single
    /// entry.
    pub fn with_params(params: EphemerisParams) -> Self {
        let capacity = NonZeroUsize::new(params.earth_cache_capacity).unwrap_or(NonZeroUsize::MIN);

        let mut providers: HashMap<Body, Arc<dyn PositionProvider>> = HashMap::new();
        for body in KeplerianBody::standard() {
            providers.insert(body.body(), Arc::new(body));
        }
        providers.insert(Body::Pluto, Arc::new(Pluto));
        providers.insert(Body::Moon, Arc::new(Moon));
        providers.insert(Body::Rahu, Arc::new(LunarNode::Rahu));
        providers.insert(Body::Ketu, Arc::new(LunarNode::Ketu));

        Ephemeris {
            params,
            providers,
            earth_cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn params(&self) -> &EphemerisParams {
        &self.params
    }

    /// Install a provider for the body it serves, returning the one it replaces.
    ///
    /// Replacing the Earth provider empties the Earth cache.
    pub fn register(
        &mut self,
        provider: Arc<dyn PositionProvider>,
    ) -> Option<Arc<dyn PositionProvider>> {
        let body = provider.body();
        if body == Body::Earth {
            self.earth_cache
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
        self.providers.insert(body, provider)
    }

    /// Resolve a catalog name, case-insensitively.
    pub fn body(&self, name: &str) -> Result<Body, OrreryError> {
        name.parse()
    }

    /// Provider registered for `body`.
    pub fn provider(&self, body: Body) -> Result<&dyn PositionProvider, OrreryError> {
        self.providers
            .get(&body)
            .map(|p| p.as_ref())
            .ok_or_else(|| OrreryError::NotFound(body.to_string()))
    }

    /// Heliocentric Earth vector at `time`, memoized in the LRU cache.
    pub fn earth_heliocentric(&self, time: &JulianTime) -> Result<Vector3<Decimal>, OrreryError> {
        if let Some(v) = self.cache().get(time) {
            return Ok(*v);
        }

        let earth = self.provider(Body::Earth)?.heliocentric_3d(self, time)?;
        debug!(time = %time, x = %earth.x, y = %earth.y, z = %earth.z, "earth position cached");
        self.cache().put(*time, earth);
        Ok(earth)
    }

    /// Number of Earth vectors currently cached.
    pub fn cached_earth_positions(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, LruCache<JulianTime, Vector3<Decimal>>> {
        // the cache holds plain values, a panic elsewhere cannot leave it inconsistent
        self.earth_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------------------------------------------------------------------------
    // Query surface
    // ---------------------------------------------------------------------------------------------

    /// Six classical orbital elements of a Keplerian body.
    #[instrument(level = "debug", skip(self, at))]
    pub fn orbital_elements(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<OrbitalElements, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.orbital_elements(self, &time)
    }

    /// Geocentric ecliptic longitude and latitude (degrees).
    #[instrument(level = "debug", skip(self, at))]
    pub fn ecliptic_coordinates(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.ecliptic(self, &time)
    }

    /// Geocentric right ascension and declination (degrees).
    #[instrument(level = "debug", skip(self, at))]
    pub fn equatorial_coordinates(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.equatorial(self, &time)
    }

    /// Heliocentric ecliptic Cartesian position (AU).
    #[instrument(level = "debug", skip(self, at))]
    pub fn heliocentric_3d(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        let time = at.to_julian_time()?;
        if body == Body::Earth {
            return self.earth_heliocentric(&time);
        }
        self.provider(body)?.heliocentric_3d(self, &time)
    }

    /// Geocentric ecliptic Cartesian position (AU).
    #[instrument(level = "debug", skip(self, at))]
    pub fn geocentric_3d(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.geocentric_3d(self, &time)
    }

    /// Light-time corrected geocentric ecliptic longitude and latitude (degrees).
    #[instrument(level = "debug", skip(self, at))]
    pub fn apparent_geocentric(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<EclipticCoordinates, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.apparent_geocentric(self, &time)
    }

    /// Light-time corrected geocentric ecliptic Cartesian position (AU).
    #[instrument(level = "debug", skip(self, at))]
    pub fn apparent_geocentric_3d(
        &self,
        body: Body,
        at: &impl ToJulianTime,
    ) -> Result<Vector3<Decimal>, OrreryError> {
        let time = at.to_julian_time()?;
        self.provider(body)?.apparent_geocentric_3d(self, &time)
    }

    /// Geocentric ecliptic longitude of every catalog body that has one, in catalog order.
    ///
    /// Bodies without an ecliptic position (the Earth) or without a registered provider are
    /// skipped; any other failure aborts the snapshot.
    #[instrument(level = "debug", skip(self, at))]
    pub fn ecliptic_longitudes(
        &self,
        at: &impl ToJulianTime,
    ) -> Result<Vec<(Body, Degree)>, OrreryError> {
        let time = at.to_julian_time()?;
        let mut longitudes = Vec::with_capacity(Body::ALL.len());

        for body in Body::ALL {
            let Some(provider) = self.providers.get(&body) else {
                continue;
            };
            match provider.ecliptic(self, &time) {
                Ok(ecliptic) => longitudes.push((body, ecliptic.longitude)),
                Err(OrreryError::NotSupported { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(longitudes)
    }

    /// Ecliptic longitude of the ascendant of a site (degrees).
    #[instrument(level = "debug", skip(self, at))]
    pub fn ascendant(
        &self,
        location: &GeoLocation,
        at: &impl ToJulianTime,
    ) -> Result<Degree, OrreryError> {
        let time = at.to_julian_time()?;
        observer::ascendant(location, &time)
    }
}
