#![allow(dead_code)]

use approx::assert_relative_eq;
use nalgebra::Vector3;
use orrery::time::JulianTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub fn f(value: Decimal) -> f64 {
    value.to_f64().unwrap()
}

/// Parse an ISO 8601 UTC instant, e.g. `"2019-11-09T00:00:00"`.
pub fn utc(iso: &str) -> JulianTime {
    format!("{iso} UTC").parse().unwrap()
}

pub fn assert_vector_close(actual: &Vector3<Decimal>, expected: [f64; 3], epsilon: f64) {
    assert_relative_eq!(f(actual.x), expected[0], epsilon = epsilon);
    assert_relative_eq!(f(actual.y), expected[1], epsilon = epsilon);
    assert_relative_eq!(f(actual.z), expected[2], epsilon = epsilon);
}

pub fn assert_pair_close(actual: (Decimal, Decimal), expected: (f64, f64), epsilon: f64) {
    assert_relative_eq!(f(actual.0), expected.0, epsilon = epsilon);
    assert_relative_eq!(f(actual.1), expected.1, epsilon = epsilon);
}
