//! # Ephemeris configuration
//!
//! [`EphemerisParams`] gathers the tunable knobs of an [`Ephemeris`](crate::ephemeris::Ephemeris):
//! the light-time iteration budget and tolerance, the capacity of the Earth position cache and
//! the normalization policy of orbital element angles.
//!
//! Parameters are built either with [`EphemerisParams::default()`] or with the validating
//! [`EphemerisParamsBuilder`]:
//!
//! ```rust
//! use orrery::params::EphemerisParams;
//! use rust_decimal_macros::dec;
//!
//! let params = EphemerisParams::builder()
//!     .light_time_max_iterations(20)
//!     .light_time_tolerance_seconds(dec!(0.1))
//!     .build()
//!     .unwrap();
//! assert_eq!(params.light_time_max_iterations, 20);
//! ```
//!
//! The struct is `serde` serializable so that it can be stored next to any application
//! configuration.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::orbital_elements::AngleNormalization;
use crate::orrery_errors::OrreryError;

/// Tunable parameters of the ephemeris engine.
///
/// Defaults
/// -----------------
/// * `light_time_max_iterations`: 10
/// * `light_time_tolerance_seconds`: 1 s
/// * `earth_cache_capacity`: 64 entries
/// * `angle_normalization`: [`AngleNormalization::Legacy`]
///
/// Validation
/// -----------------
/// * `light_time_max_iterations ≥ 1`
/// * `light_time_tolerance_seconds > 0`
/// * `earth_cache_capacity ≥ 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisParams {
    /// Maximum number of light-time iterations before reporting a convergence failure.
    pub light_time_max_iterations: usize,
    /// The light-time loop stops when two successive estimates differ by less than this.
    pub light_time_tolerance_seconds: Decimal,
    /// Number of Earth heliocentric vectors kept in the LRU cache.
    pub earth_cache_capacity: usize,
    /// Normalization policy of the angular orbital elements.
    pub angle_normalization: AngleNormalization,
}

impl EphemerisParams {
    /// Equivalent to [`EphemerisParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`EphemerisParamsBuilder`] initialized with the default values.
    pub fn builder() -> EphemerisParamsBuilder {
        EphemerisParamsBuilder::new()
    }
}

impl Default for EphemerisParams {
    fn default() -> Self {
        EphemerisParams {
            light_time_max_iterations: 10,
            light_time_tolerance_seconds: dec!(1),
            earth_cache_capacity: 64,
            angle_normalization: AngleNormalization::Legacy,
        }
    }
}

/// Builder for [`EphemerisParams`], with validation.
#[derive(Debug, Clone)]
pub struct EphemerisParamsBuilder {
    params: EphemerisParams,
}

impl Default for EphemerisParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: EphemerisParams::default(),
        }
    }

    pub fn light_time_max_iterations(mut self, v: usize) -> Self {
        self.params.light_time_max_iterations = v;
        self
    }
    pub fn light_time_tolerance_seconds(mut self, v: Decimal) -> Self {
        self.params.light_time_tolerance_seconds = v;
        self
    }
    pub fn earth_cache_capacity(mut self, v: usize) -> Self {
        self.params.earth_cache_capacity = v;
        self
    }
    pub fn angle_normalization(mut self, v: AngleNormalization) -> Self {
        self.params.angle_normalization = v;
        self
    }

    /// Validate and return the parameters.
    ///
    /// Return
    /// ------
    /// * The [`EphemerisParams`], or [`OrreryError::InvalidParameter`] naming the first
    ///   rejected field.
    pub fn build(self) -> Result<EphemerisParams, OrreryError> {
        let p = &self.params;

        if p.light_time_max_iterations == 0 {
            return Err(OrreryError::InvalidParameter(
                "light_time_max_iterations must be >= 1".into(),
            ));
        }
        if p.light_time_tolerance_seconds <= Decimal::ZERO {
            return Err(OrreryError::InvalidParameter(
                "light_time_tolerance_seconds must be > 0".into(),
            ));
        }
        if p.earth_cache_capacity == 0 {
            return Err(OrreryError::InvalidParameter(
                "earth_cache_capacity must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for EphemerisParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ephemeris Parameters")?;
        writeln!(f, "--------------------")?;
        writeln!(
            f,
            "  light_time_max_iterations    = {}",
            self.light_time_max_iterations
        )?;
        writeln!(
            f,
            "  light_time_tolerance_seconds = {}",
            self.light_time_tolerance_seconds
        )?;
        writeln!(
            f,
            "  earth_cache_capacity         = {}",
            self.earth_cache_capacity
        )?;
        write!(
            f,
            "  angle_normalization          = {:?}",
            self.angle_normalization
        )
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = EphemerisParams::new();
        assert_eq!(p.light_time_max_iterations, 10);
        assert_eq!(p.light_time_tolerance_seconds, Decimal::ONE);
        assert_eq!(p.earth_cache_capacity, 64);
        assert_eq!(p.angle_normalization, AngleNormalization::Legacy);
        assert_eq!(EphemerisParams::builder().build().unwrap(), p);
    }

    #[test]
    fn test_builder_overrides() {
        let p = EphemerisParams::builder()
            .light_time_max_iterations(3)
            .light_time_tolerance_seconds(dec!(0.01))
            .earth_cache_capacity(2)
            .angle_normalization(AngleNormalization::Uniform)
            .build()
            .unwrap();
        assert_eq!(p.light_time_max_iterations, 3);
        assert_eq!(p.light_time_tolerance_seconds, dec!(0.01));
        assert_eq!(p.earth_cache_capacity, 2);
        assert_eq!(p.angle_normalization, AngleNormalization::Uniform);
    }

    #[test]
    fn test_builder_validation() {
        let err = EphemerisParams::builder()
            .light_time_max_iterations(0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            OrreryError::InvalidParameter("light_time_max_iterations must be >= 1".into())
        );

        assert!(EphemerisParams::builder()
            .light_time_tolerance_seconds(Decimal::ZERO)
            .build()
            .is_err());
        assert!(EphemerisParams::builder()
            .earth_cache_capacity(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_serde_round_trip_with_partial_input() {
        let p: EphemerisParams =
            serde_json::from_str(r#"{"light_time_max_iterations": 4, "angle_normalization": "Uniform"}"#)
                .unwrap();
        assert_eq!(p.light_time_max_iterations, 4);
        assert_eq!(p.angle_normalization, AngleNormalization::Uniform);
        assert_eq!(p.earth_cache_capacity, 64);

        let json = serde_json::to_string(&p).unwrap();
        let back: EphemerisParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_display() {
        let out = format!("{}", EphemerisParams::default());
        assert!(out.contains("light_time_max_iterations    = 10"));
        assert!(out.contains("angle_normalization          = Legacy"));
    }
}
