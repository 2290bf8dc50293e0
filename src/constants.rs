//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **mathematical constants**, **physical constants**, **conversion
//! factors**, and **common type aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Mathematical constants as fixed 28-digit decimal literals (π, e, ln 10 …)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, centuries ↔ seconds)
//! - Time scale anchors (J2000 Julian day)
//! - Speed of light in astronomical units per second
//! - Core type aliases used across the crate
//!
//! Every value here is a [`Decimal`]: no binary floating point constant is used by the
//! computation paths of the crate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// -------------------------------------------------------------------------------------------------
// Mathematical constants
// -------------------------------------------------------------------------------------------------

/// π
pub const PI: Decimal = dec!(3.1415926535897932384626433833);

/// 2π, one full turn in radians
pub const DPI: Decimal = dec!(6.2831853071795864769252867666);

/// π/2
pub const HALF_PI: Decimal = dec!(1.5707963267948966192313216916);

/// 3π/2
pub const THREE_HALVES_PI: Decimal = dec!(4.7123889803846898576939650749);

/// π/4
pub const QUARTER_PI: Decimal = dec!(0.7853981633974483096156608458);

/// Euler's number e
pub const E: Decimal = dec!(2.7182818284590452353602874714);

/// 1/e
pub const E_INV: Decimal = dec!(0.3678794411714423215955237702);

/// 1/ln(10), used to turn natural logarithms into decimal ones
pub const LOG10_INV: Decimal = dec!(0.4342944819032518276511289189);

/// Default closeness tolerance of the kernel (smallest meaningful step at 28 digits)
pub const EPSILON: Decimal = dec!(0.0000000000000000001);

/// Upper bound on the number of terms any kernel series may sum
pub const MAX_SERIES_ITERATIONS: usize = 1000;

/// Upper bound on Newton-Raphson steps for the square root
pub const MAX_NEWTON_ITERATIONS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: Decimal = dec!(0.0174532925199432957692369077);

/// Radians → degrees
pub const DEGRAD: Decimal = dec!(57.295779513082320876798154814);

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: Decimal = dec!(86400);

/// Number of seconds in a Julian century (36525 days)
pub const SECONDS_PER_CENTURY: Decimal = dec!(3155760000);

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: Decimal = dec!(36525);

// -------------------------------------------------------------------------------------------------
// Time and physical constants
// -------------------------------------------------------------------------------------------------

/// Julian day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: Decimal = dec!(2451545);

/// Julian day of the civil midnight opening 2000-01-01, origin of the sidereal time polynomial
pub const J2000_CIVIL_MIDNIGHT_JD: Decimal = dec!(2451544.5);

/// Speed of light in astronomical units per second
pub const VLIGHT_AU_PER_SECOND: Decimal = dec!(0.0020039888041000038110836560);

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = Decimal;

/// Angle in radians
pub type Radian = Decimal;

/// Distance in astronomical units
pub type AstronomicalUnit = Decimal;

/// Time span in days
pub type Days = Decimal;

/// Time span in Julian centuries
pub type Centuries = Decimal;

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_angle_constants_are_consistent() {
        assert_eq!(PI * dec!(2), DPI);
        assert!((PI / dec!(2) - HALF_PI).abs() < EPSILON);
        assert!((PI / dec!(4) - QUARTER_PI).abs() < EPSILON);
        assert!((RADEG * DEGRAD - Decimal::ONE).abs() < EPSILON);
        assert!((E * E_INV - Decimal::ONE).abs() < EPSILON);
    }

    #[test]
    fn test_century_is_36525_days() {
        assert_eq!(SECONDS_PER_CENTURY, SECONDS_PER_DAY * DAYS_PER_CENTURY);
    }
}
