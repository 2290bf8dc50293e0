//! Angular coordinate pairs returned by the position queries.
//!
//! Both types hold degrees. They are plain containers: the frame (geocentric, apparent …) is the
//! one of the query that produced them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::decimal_math::sqrt;
use crate::orrery_errors::OrreryError;

/// Ecliptic longitude λ in `[0, 360)` and latitude β in `[-90, 90]`, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    pub longitude: Degree,
    pub latitude: Degree,
}

/// Right ascension α in `[0, 360)` and declination δ in `[-90, 90]`, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    pub right_ascension: Degree,
    pub declination: Degree,
}

impl EclipticCoordinates {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        EclipticCoordinates {
            longitude,
            latitude,
        }
    }

    /// Planar distance between two pairs, `√(Δλ² + Δβ²)`, in degrees.
    pub fn planar_distance(&self, other: &EclipticCoordinates) -> Result<Decimal, OrreryError> {
        planar_distance(
            self.longitude - other.longitude,
            self.latitude - other.latitude,
        )
    }
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Degree, declination: Degree) -> Self {
        EquatorialCoordinates {
            right_ascension,
            declination,
        }
    }

    /// Planar distance between two pairs, `√(Δα² + Δδ²)`, in degrees.
    pub fn planar_distance(&self, other: &EquatorialCoordinates) -> Result<Decimal, OrreryError> {
        planar_distance(
            self.right_ascension - other.right_ascension,
            self.declination - other.declination,
        )
    }
}

fn planar_distance(d1: Decimal, d2: Decimal) -> Result<Decimal, OrreryError> {
    sqrt(d1 * d1 + d2 * d2)
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "λ = {:.6}°, β = {:.6}°", self.longitude, self.latitude)
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "α = {:.6}°, δ = {:.6}°",
            self.right_ascension, self.declination
        )
    }
}
