//! Trigonometric and inverse trigonometric functions in decimal arithmetic.
//!
//! `cos` is the only direct series of the family: `sin` is derived from it through
//! `±√(1 - cos²)`, `tan` from both, and the inverse functions all route through `asin`.

use rust_decimal::Decimal;

use crate::constants::{
    Degree, Radian, DEGRAD, DPI, HALF_PI, MAX_SERIES_ITERATIONS, PI, QUARTER_PI, RADEG,
};
use crate::orrery_errors::OrreryError;

use super::exponential::sqrt;
use super::sign;

/// Degrees → radians
pub fn to_radians(angle: Degree) -> Radian {
    angle * RADEG
}

/// Radians → degrees
pub fn to_degrees(angle: Radian) -> Degree {
    angle * DEGRAD
}

/// Cosine of an angle in radians.
///
/// The argument is reduced modulo 2π, then folded into `(-π, π)` with `cos(x) = -cos(x ∓ π)`
/// before the even power series `Σ (-1)ⁿ x²ⁿ / (2n)!` is summed.
pub fn cos(x: Radian) -> Result<Decimal, OrreryError> {
    let mut x = x % DPI;
    let mut sign = Decimal::ONE;
    if x >= PI {
        x -= PI;
        sign = Decimal::NEGATIVE_ONE;
    } else if x <= -PI {
        x += PI;
        sign = Decimal::NEGATIVE_ONE;
    }

    let x2 = x * x;
    let mut term = Decimal::ONE;
    let mut sum = Decimal::ONE;
    for i in 0..MAX_SERIES_ITERATIONS {
        let factor = Decimal::from((2 * i + 1) * (2 * i + 2));
        term = -term * x2 / factor;
        let next = sum + term;
        if next == sum {
            return Ok(sign * sum);
        }
        sum = next;
    }

    Err(OrreryError::ConvergenceFailure {
        routine: "cos",
        iterations: MAX_SERIES_ITERATIONS,
    })
}

/// Sine of an angle in radians, `±√(1 - cos²x)`.
///
/// The sign is read from the band of `x mod 2π`:
///
/// | band        | sign |
/// |-------------|------|
/// | `[-2π, -π]` | `+`  |
/// | `(-π, 0)`   | `-`  |
/// | `[0, π]`    | `+`  |
/// | `(π, 2π)`   | `-`  |
pub fn sin(x: Radian) -> Result<Decimal, OrreryError> {
    let c = cos(x)?;
    sin_from_cos(x, c)
}

fn sin_from_cos(x: Radian, c: Decimal) -> Result<Decimal, OrreryError> {
    let magnitude = sqrt((Decimal::ONE - c * c).max(Decimal::ZERO))?;
    let reduced = x % DPI;
    let positive = (reduced >= Decimal::ZERO && reduced <= PI) || reduced <= -PI;
    Ok(if positive { magnitude } else { -magnitude })
}

/// Tangent of an angle in radians.
///
/// Fails with a domain error when the cosine is exactly zero and with an overflow when the
/// quotient leaves the decimal range.
pub fn tan(x: Radian) -> Result<Decimal, OrreryError> {
    let c = cos(x)?;
    if c.is_zero() {
        return Err(OrreryError::domain("tan", format!("cos({x}) is zero")));
    }
    sin_from_cos(x, c)?
        .checked_div(c)
        .ok_or(OrreryError::ArithmeticOverflow("tan"))
}

/// Arcsine, in radians, of a value in `[-1, 1]`.
///
/// Arguments above `0.5` are first brought closer to zero with the half-angle identity
/// `asin(x) = (π/2 - asin(1 - 2x²)) / 2`; the binomial series
/// `Σ (2n)! / (4ⁿ (n!)² (2n+1)) x²ⁿ⁺¹` is then summed on the reduced argument.
pub fn asin(x: Decimal) -> Result<Radian, OrreryError> {
    if x > Decimal::ONE || x < Decimal::NEGATIVE_ONE {
        return Err(OrreryError::domain(
            "asin",
            format!("argument must lie in [-1, 1], got {x}"),
        ));
    }
    asin_unchecked(x)
}

fn asin_unchecked(x: Decimal) -> Result<Radian, OrreryError> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if x == Decimal::ONE {
        return Ok(HALF_PI);
    }
    if x.is_sign_negative() {
        return Ok(-asin_unchecked(-x)?);
    }

    let y = Decimal::ONE - Decimal::TWO * x * x;
    if x > y.abs() {
        return Ok((HALF_PI - asin_unchecked(y)?) / Decimal::TWO);
    }

    let x2 = x * x;
    let half = Decimal::new(5, 1);
    let mut term = x;
    let mut sum = x;
    for i in 1..=MAX_SERIES_ITERATIONS {
        term = term * x2 * (Decimal::ONE - half / Decimal::from(i));
        let next = sum + term / Decimal::from(2 * i + 1);
        if next == sum {
            return Ok(sum);
        }
        sum = next;
    }

    Err(OrreryError::ConvergenceFailure {
        routine: "asin",
        iterations: MAX_SERIES_ITERATIONS,
    })
}

/// Arccosine, in radians, of a value in `[-1, 1]`.
pub fn acos(x: Decimal) -> Result<Radian, OrreryError> {
    if x > Decimal::ONE || x < Decimal::NEGATIVE_ONE {
        return Err(OrreryError::domain(
            "acos",
            format!("argument must lie in [-1, 1], got {x}"),
        ));
    }
    if x.is_zero() {
        return Ok(HALF_PI);
    }
    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }
    if x.is_sign_negative() {
        return Ok(PI - acos(-x)?);
    }
    Ok(HALF_PI - asin(x)?)
}

/// Arctangent, in radians.
///
/// `atan(x) = asin(x / √(1 + x²))` for `|x| ≤ 1`; larger arguments use
/// `atan(x) = ±π/2 - atan(1/x)` so that `x²` stays representable.
pub fn atan(x: Decimal) -> Result<Radian, OrreryError> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if x == Decimal::ONE {
        return Ok(QUARTER_PI);
    }
    if x == Decimal::NEGATIVE_ONE {
        return Ok(-QUARTER_PI);
    }
    if x.abs() > Decimal::ONE {
        let inner = atan(Decimal::ONE / x)?;
        return Ok(if x.is_sign_positive() {
            HALF_PI - inner
        } else {
            -HALF_PI - inner
        });
    }
    asin(x / sqrt(Decimal::ONE + x * x)?)
}

/// Four quadrant arctangent of `y / x`, in radians, within `(-π, π]`.
///
/// Fails with a domain error for `atan2(0, 0)`.
pub fn atan2(y: Decimal, x: Decimal) -> Result<Radian, OrreryError> {
    if x.is_zero() {
        return if y.is_sign_positive() && !y.is_zero() {
            Ok(HALF_PI)
        } else if y.is_sign_negative() && !y.is_zero() {
            Ok(-HALF_PI)
        } else {
            Err(OrreryError::domain("atan2", "atan2(0, 0) is undefined"))
        };
    }

    let angle = match y.checked_div(x) {
        Some(ratio) => atan(ratio)?,
        None => sign(y) * sign(x) * HALF_PI,
    };

    if x.is_sign_positive() {
        Ok(angle)
    } else if y.is_sign_negative() && !y.is_zero() {
        Ok(angle - PI)
    } else {
        Ok(angle + PI)
    }
}

/// Sine of an angle in degrees.
pub fn sin_deg(angle: Degree) -> Result<Decimal, OrreryError> {
    sin(to_radians(angle))
}

/// Cosine of an angle in degrees.
pub fn cos_deg(angle: Degree) -> Result<Decimal, OrreryError> {
    cos(to_radians(angle))
}

/// Tangent of an angle in degrees.
pub fn tan_deg(angle: Degree) -> Result<Decimal, OrreryError> {
    tan(to_radians(angle))
}
