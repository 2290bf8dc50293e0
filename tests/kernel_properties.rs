use orrery::decimal_math::{
    asin, atan, atan2, cos, exp, log, normalize_degrees, power, power_n, sin, sqrt, tan,
};
use orrery::orrery_errors::OrreryError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tolerance() -> Decimal {
    Decimal::new(1, 14)
}

proptest! {
    /// `sin(asin(x))` gives `x` back over the whole open domain.
    #[test]
    fn sin_inverts_asin(n in -9999i64..=9999) {
        let x = Decimal::new(n, 4);
        let back = sin(asin(x).unwrap()).unwrap();
        prop_assert!((back - x).abs() < Decimal::new(1, 15), "x = {x}, sin(asin(x)) = {back}");
    }

    /// Pythagorean identity on angles of several turns.
    #[test]
    fn pythagorean_identity(n in -200_000i64..200_000) {
        let x = Decimal::new(n, 4);
        let (s, c) = (sin(x).unwrap(), cos(x).unwrap());
        prop_assert!((s * s + c * c - Decimal::ONE).abs() < tolerance(), "x = {x}");
    }

    /// `tan(atan(x))` gives `x` back, on both sides of the `|x| = 1` reflection.
    #[test]
    fn tan_inverts_atan(n in -50_000i64..50_000) {
        let x = Decimal::new(n, 3);
        let back = tan(atan(x).unwrap()).unwrap();
        let scale = Decimal::ONE.max(x.abs());
        prop_assert!((back - x).abs() < tolerance() * scale * scale, "x = {x}");
    }

    /// `atan2` lands in `(-π, π]` and agrees with the point it was built from.
    #[test]
    fn atan2_recovers_direction(y in -1000i64..1000, x in -1000i64..1000) {
        prop_assume!(x != 0 || y != 0);
        let (y, x) = (Decimal::from(y), Decimal::from(x));
        let angle = atan2(y, x).unwrap();
        let r = sqrt(x * x + y * y).unwrap();
        prop_assert!((r * cos(angle).unwrap() - x).abs() < dec!(0.000000001));
        prop_assert!((r * sin(angle).unwrap() - y).abs() < dec!(0.000000001));
    }

    /// Repeated squaring and naive multiplication agree exactly when no rounding occurs.
    #[test]
    fn power_n_is_exact(n in -500i64..500, k in 0u64..=8) {
        let value = Decimal::new(n, 2);
        let naive = (0..k).fold(Decimal::ONE, |acc, _| acc * value);
        prop_assert_eq!(power_n(value, k).unwrap(), naive);
    }

    /// A negative base only accepts exactly integral exponents, however close the miss.
    #[test]
    fn negative_base_rejects_near_integer_exponent(
        base in -50i64..-1,
        n in -6i64..=6,
        offset in prop_oneof![-100i64..=-1, 1i64..=100],
    ) {
        let exponent = Decimal::from(n) + Decimal::new(offset, 20);
        let result = power(Decimal::from(base), exponent);
        prop_assert!(
            matches!(result, Err(OrreryError::DomainError { .. })),
            "power({base}, {exponent}) = {result:?}"
        );
    }

    /// `exp(log(x))` gives `x` back to a relative tolerance.
    #[test]
    fn exp_inverts_log(n in 1i64..1_000_000) {
        let x = Decimal::new(n, 3);
        let back = exp(log(x).unwrap()).unwrap();
        prop_assert!(((back - x) / x).abs() < tolerance(), "x = {x}, exp(log(x)) = {back}");
    }

    /// Degree normalization always lands in `[0, 360)` and keeps the direction.
    #[test]
    fn normalized_degrees_are_in_range(n in -10_000_000i64..10_000_000) {
        let angle = Decimal::new(n, 2);
        let normalized = normalize_degrees(angle);
        prop_assert!(normalized >= Decimal::ZERO && normalized < dec!(360));
        prop_assert!(((angle - normalized) % dec!(360)).is_zero());
    }
}

#[test]
fn negative_base_with_almost_three() {
    let err = power(dec!(-2), dec!(2.99999999999999999999)).unwrap_err();
    assert!(err.is_domain_error(), "{err}");
    assert_eq!(power(dec!(-2), dec!(3.000)).unwrap(), dec!(-8));
}
