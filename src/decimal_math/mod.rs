//! # Decimal math kernel
//!
//! Transcendental functions evaluated entirely in [`Decimal`] arithmetic (96-bit mantissa,
//! 28 significant digits). No binary floating point transcendental is trusted on the
//! computation path; the only `f64` operation is the seed of the square root Newton iteration.
//!
//! ## Overview
//!
//! - [`exponential`]: `exp`, `log`, `log10`, `power`, `power_n`, `sqrt`
//! - [`trigonometry`]: `cos`, `sin`, `tan`, `asin`, `acos`, `atan`, `atan2` and degree variants
//! - [`hyperbolic`]: `sinh`, `cosh`, `tanh`
//! - This module: closeness predicate, sign helpers and angle normalization
//!
//! ## Convergence
//!
//! Every series is summed until the new accumulator compares equal to the previous one, i.e.
//! until no further representable change happens. Each loop is additionally bounded by
//! [`MAX_SERIES_ITERATIONS`](crate::constants::MAX_SERIES_ITERATIONS) and reports
//! [`OrreryError::ConvergenceFailure`](crate::orrery_errors::OrreryError::ConvergenceFailure)
//! when the ceiling is hit.
//!
//! ## Errors
//!
//! Arguments outside a function domain (negative logarithm, `asin(2)`, `atan2(0, 0)` …) fail with
//! [`OrreryError::DomainError`](crate::orrery_errors::OrreryError::DomainError). Results that do
//! not fit in a [`Decimal`] fail with
//! [`OrreryError::ArithmeticOverflow`](crate::orrery_errors::OrreryError::ArithmeticOverflow).

pub mod exponential;
pub mod hyperbolic;
pub mod trigonometry;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::Degree;

pub use exponential::{exp, log, log10, power, power_n, sqrt, sqrt_with_tolerance};
pub use hyperbolic::{cosh, sinh, tanh};
pub use trigonometry::{
    acos, asin, atan, atan2, cos, cos_deg, sin, sin_deg, tan, tan_deg, to_degrees, to_radians,
};

const FULL_TURN: Decimal = dec!(360);

/// Closeness predicate used as the equality primitive of the crate.
///
/// Returns `true` when `|a - b| < epsilon`.
pub fn is_close(a: Decimal, b: Decimal, epsilon: Decimal) -> bool {
    (a - b).abs() < epsilon
}

/// Sign of `value` as a decimal: `-1`, `0` or `1`.
pub fn sign(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else if value.is_sign_negative() {
        Decimal::NEGATIVE_ONE
    } else {
        Decimal::ONE
    }
}

/// Absolute value.
pub fn abs(value: Decimal) -> Decimal {
    value.abs()
}

/// `true` when `value` has no fractional part. No tolerance is applied.
pub fn is_integer(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Bring an angle in degrees into `[0, 360)`.
///
/// Arguments
/// ---------
/// * `angle`: any angle in degrees, possibly negative or larger than a full turn.
///
/// Return
/// ------
/// * `((angle % 360) + 360) % 360`
pub fn normalize_degrees(angle: Degree) -> Degree {
    ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Reduce an angle in degrees modulo 360 while keeping the sign of the input.
///
/// The result lies in `(-360, 360)`.
pub fn reduce_degrees(angle: Degree) -> Degree {
    angle % FULL_TURN
}
