use rust_decimal::Decimal;

use crate::orrery_errors::OrreryError;

use super::exponential::exp;

/// Hyperbolic sine, `(eˣ - e⁻ˣ) / 2`.
pub fn sinh(x: Decimal) -> Result<Decimal, OrreryError> {
    Ok((exp(x)? - exp(-x)?) / Decimal::TWO)
}

/// Hyperbolic cosine, `(eˣ + e⁻ˣ) / 2`.
pub fn cosh(x: Decimal) -> Result<Decimal, OrreryError> {
    Ok((exp(x)? + exp(-x)?) / Decimal::TWO)
}

/// Hyperbolic tangent, `sinh(x) / cosh(x)`.
pub fn tanh(x: Decimal) -> Result<Decimal, OrreryError> {
    let p = exp(x)?;
    let n = exp(-x)?;
    Ok((p - n) / (p + n))
}

#[cfg(test)]
mod hyperbolic_test {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn test_hyperbolic_values() {
        let x = dec!(1.25);
        assert_relative_eq!(sinh(x).unwrap().to_f64().unwrap(), 1.25_f64.sinh(), epsilon = 1e-14);
        assert_relative_eq!(cosh(x).unwrap().to_f64().unwrap(), 1.25_f64.cosh(), epsilon = 1e-14);
        assert_relative_eq!(tanh(-x).unwrap().to_f64().unwrap(), (-1.25_f64).tanh(), epsilon = 1e-15);
    }

    #[test]
    fn test_hyperbolic_identity() {
        let x = dec!(-2.3);
        let s = sinh(x).unwrap();
        let c = cosh(x).unwrap();
        assert!((c * c - s * s - Decimal::ONE).abs() < dec!(0.0000000000000000000001));
        assert_eq!(sinh(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(cosh(Decimal::ZERO).unwrap(), Decimal::ONE);
    }
}
