//! Exponential family: `exp`, `log`, `log10`, `power`, `power_n` and `sqrt`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::{E, E_INV, LOG10_INV, MAX_NEWTON_ITERATIONS, MAX_SERIES_ITERATIONS};
use crate::orrery_errors::OrreryError;

use super::is_integer;

/// Natural exponential `e^x`.
///
/// The argument is split into `count + r` with `count = floor(x)` and `r` in `[0, 1)`.
/// The Taylor series of `e^r` is summed until a new term no longer changes the partial sum,
/// then rescaled by `e^count` through [`power_n`].
///
/// Arguments
/// ---------
/// * `x`: exponent.
///
/// Return
/// ------
/// * `e^x`, or [`OrreryError::ArithmeticOverflow`] when the result exceeds the decimal range
///   (roughly `x > 66`).
pub fn exp(x: Decimal) -> Result<Decimal, OrreryError> {
    if x.is_zero() {
        return Ok(Decimal::ONE);
    }

    let count = x.floor();
    let reduced = x - count;
    let count = count
        .to_i64()
        .ok_or(OrreryError::ArithmeticOverflow("exp"))?;

    let mut sum = Decimal::ONE;
    let mut term = Decimal::ONE;
    let mut converged = false;
    for i in 1..=MAX_SERIES_ITERATIONS {
        term = term * reduced / Decimal::from(i);
        let next = sum + term;
        if next == sum {
            converged = true;
            break;
        }
        sum = next;
    }
    if !converged {
        return Err(OrreryError::ConvergenceFailure {
            routine: "exp",
            iterations: MAX_SERIES_ITERATIONS,
        });
    }

    let scale = if count >= 0 {
        power_n(E, count.unsigned_abs())?
    } else {
        // 1/e^n while e^n fits, powers of 1/e past that point
        match power_n(E, count.unsigned_abs()) {
            Ok(p) => Decimal::ONE / p,
            Err(_) => power_n(E_INV, count.unsigned_abs())?,
        }
    };

    sum.checked_mul(scale)
        .ok_or(OrreryError::ArithmeticOverflow("exp"))
}

/// Integer power by repeated squaring.
///
/// Every intermediate product is checked, an overflow yields
/// [`OrreryError::ArithmeticOverflow`] instead of a panic.
pub fn power_n(value: Decimal, n: u64) -> Result<Decimal, OrreryError> {
    let mut result = Decimal::ONE;
    let mut base = value;
    let mut n = n;

    while n > 0 {
        if n & 1 == 1 {
            result = result
                .checked_mul(base)
                .ok_or(OrreryError::ArithmeticOverflow("power_n"))?;
        }
        n >>= 1;
        if n > 0 {
            base = base
                .checked_mul(base)
                .ok_or(OrreryError::ArithmeticOverflow("power_n"))?;
        }
    }
    Ok(result)
}

/// General power `base^exponent`.
///
/// * exponents `0`, `1` and `-1` are answered directly;
/// * a zero base gives `0` for positive exponents and a domain error otherwise;
/// * integer exponents go through [`power_n`], which also carries the sign of a negative base;
/// * non-integer exponents are computed as `exp(exponent * log(base))` and require a positive
///   base.
pub fn power(base: Decimal, exponent: Decimal) -> Result<Decimal, OrreryError> {
    if exponent.is_zero() {
        return Ok(Decimal::ONE);
    }
    if exponent == Decimal::ONE {
        return Ok(base);
    }
    if base.is_zero() {
        if exponent.is_sign_positive() {
            return Ok(Decimal::ZERO);
        }
        return Err(OrreryError::domain(
            "power",
            "zero base with a negative exponent",
        ));
    }
    if exponent == Decimal::NEGATIVE_ONE {
        return Ok(Decimal::ONE / base);
    }

    if is_integer(exponent) {
        let n = exponent
            .abs()
            .to_u64()
            .ok_or(OrreryError::ArithmeticOverflow("power"))?;
        let p = power_n(base, n)?;
        if exponent.is_sign_negative() {
            if p.is_zero() {
                return Err(OrreryError::ArithmeticOverflow("power"));
            }
            return Ok(Decimal::ONE / p);
        }
        return Ok(p);
    }

    if base.is_sign_negative() {
        return Err(OrreryError::domain(
            "power",
            format!("negative base {base} requires an integer exponent, got {exponent}"),
        ));
    }

    let product = exponent
        .checked_mul(log(base)?)
        .ok_or(OrreryError::ArithmeticOverflow("power"))?;
    exp(product)
}

/// Natural logarithm.
///
/// Arguments below one use `ln(x) = -ln(1/x)`. The rest is brought into the band `(1/e, 1]` by
/// at most `MAX_SERIES_ITERATIONS` multiplications by `1/e`, counting the steps. With `w = 1 - y` for the reduced value `y`, the series `ln(1 - w) = -Σ wⁱ/i` is then summed until it stops
/// changing; the result is `count + ln(y)`.
pub fn log(x: Decimal) -> Result<Decimal, OrreryError> {
    if x <= Decimal::ZERO {
        return Err(OrreryError::domain(
            "log",
            format!("argument must be strictly positive, got {x}"),
        ));
    }
    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    // ln(x) = -ln(1/x); 1/x keeps the significant digits a tiny x lacks
    if x < Decimal::ONE {
        let inverse = Decimal::ONE
            .checked_div(x)
            .ok_or(OrreryError::ArithmeticOverflow("log"))?;
        return Ok(-log(inverse)?);
    }

    let mut count: i64 = 0;
    let mut y = x;
    for _ in 0..MAX_SERIES_ITERATIONS {
        if y <= Decimal::ONE {
            break;
        }
        y *= E_INV;
        count += 1;
    }
    if y > Decimal::ONE {
        return Err(OrreryError::ConvergenceFailure {
            routine: "log",
            iterations: MAX_SERIES_ITERATIONS,
        });
    }

    let w = Decimal::ONE - y;
    let mut w_power = Decimal::ONE;
    let mut series = Decimal::ZERO;
    for i in 1..=MAX_SERIES_ITERATIONS {
        w_power *= w;
        let next = series + w_power / Decimal::from(i);
        if next == series {
            return Ok(Decimal::from(count) - series);
        }
        series = next;
    }

    Err(OrreryError::ConvergenceFailure {
        routine: "log",
        iterations: MAX_SERIES_ITERATIONS,
    })
}

/// Decimal logarithm, `log(x) / ln(10)`.
pub fn log10(x: Decimal) -> Result<Decimal, OrreryError> {
    Ok(log(x)? * LOG10_INV)
}

/// Square root with an exact stopping rule, see [`sqrt_with_tolerance`].
pub fn sqrt(x: Decimal) -> Result<Decimal, OrreryError> {
    sqrt_with_tolerance(x, Decimal::ZERO)
}

/// Square root by Newton-Raphson iteration.
///
/// The iteration is seeded with the `f64` square root of `x` and stops when two successive
/// approximations differ by at most `epsilon`. With `epsilon = 0` the iteration may end up
/// alternating between two neighbours in the last digit; that oscillation is accepted as
/// convergence.
///
/// Arguments
/// ---------
/// * `x`: non negative radicand.
/// * `epsilon`: stopping tolerance between successive approximations.
///
/// Return
/// ------
/// * `√x`, or [`OrreryError::DomainError`] for a negative argument.
pub fn sqrt_with_tolerance(x: Decimal, epsilon: Decimal) -> Result<Decimal, OrreryError> {
    if x.is_sign_negative() && !x.is_zero() {
        return Err(OrreryError::domain(
            "sqrt",
            format!("argument must be non negative, got {x}"),
        ));
    }
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let mut current = x
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .filter(|seed| seed.is_sign_positive() && !seed.is_zero())
        .unwrap_or(if x > Decimal::ONE { x } else { Decimal::ONE });
    let mut previous = Decimal::ZERO;

    for _ in 0..MAX_NEWTON_ITERATIONS {
        let next = (current + x / current) / Decimal::TWO;
        if (next - current).abs() <= epsilon || next == previous {
            return Ok(next);
        }
        previous = current;
        current = next;
    }

    Err(OrreryError::ConvergenceFailure {
        routine: "sqrt",
        iterations: MAX_NEWTON_ITERATIONS,
    })
}
