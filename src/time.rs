//! # Time basis
//!
//! Continuous Julian day count used as the time argument of every orbital formula.
//!
//! ## Overview
//!
//! Instants enter the crate as [`hifitime::Epoch`] values. They are broken down into their
//! UTC Gregorian calendar fields and converted, exactly and in decimal arithmetic, into a
//! [`JulianTime`]. The derived quantities are:
//!
//! - days since J2000.0 (`JD - 2451545`), used by the orbital element model, Pluto and the lunar
//!   nodes;
//! - Julian centuries since J2000.0 (`days * 86400 / 3155760000`), used by the Moon series and
//!   the axial tilt polynomial;
//! - civil days since 2000-01-01T00:00, used by the sidereal time polynomial.
//!
//! The Gregorian calendar is applied proleptically, leap seconds are ignored (a day always holds
//! 86400 seconds).

use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Centuries, Days, J2000_CIVIL_MIDNIGHT_JD, J2000_JD, SECONDS_PER_CENTURY, SECONDS_PER_DAY,
};
use crate::orrery_errors::OrreryError;

/// An instant expressed as a continuous Julian day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JulianTime {
    julian_day: Decimal,
}

impl JulianTime {
    /// The J2000.0 epoch, 2000-01-01 12:00:00.
    pub const J2000: JulianTime = JulianTime {
        julian_day: J2000_JD,
    };

    /// Build a time directly from a Julian day number.
    pub fn from_julian_day(julian_day: Decimal) -> Self {
        JulianTime { julian_day }
    }

    /// Build a time from Gregorian UTC calendar fields.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: proleptic Gregorian date.
    /// * `hour`, `minute`, `second`, `nanos`: time of day.
    ///
    /// Return
    /// ------
    /// * The corresponding [`JulianTime`], or [`OrreryError::InvalidEpoch`] when a field is out
    ///   of range or the day does not exist in that month.
    pub fn from_gregorian(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanos: u32,
    ) -> Result<Self, OrreryError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(OrreryError::InvalidEpoch(format!(
                "invalid calendar date {year:04}-{month:02}-{day:02}"
            )));
        }
        if hour > 23 || minute > 59 || second > 60 || nanos >= 1_000_000_000 {
            return Err(OrreryError::InvalidEpoch(format!(
                "invalid time of day {hour:02}:{minute:02}:{second:02}.{nanos:09}"
            )));
        }

        let jdn = julian_day_number(year, month, day);
        let seconds_of_day = Decimal::from(u32::from(hour) * 3600 + u32::from(minute) * 60)
            + Decimal::from(second)
            + Decimal::new(i64::from(nanos), 9);

        Ok(JulianTime {
            julian_day: Decimal::from(jdn) - Decimal::new(5, 1) + seconds_of_day / SECONDS_PER_DAY,
        })
    }

    /// Build a time from a [`hifitime::Epoch`], through its UTC Gregorian representation.
    pub fn from_epoch(epoch: &Epoch) -> Result<Self, OrreryError> {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        Self::from_gregorian(year, month, day, hour, minute, second, nanos)
    }

    /// Julian day number, including the fraction of the day.
    pub fn julian_day(&self) -> Decimal {
        self.julian_day
    }

    /// Days elapsed since J2000.0 (2000-01-01 12:00:00).
    pub fn days_since_j2000(&self) -> Days {
        self.julian_day - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> Centuries {
        self.days_since_j2000() * SECONDS_PER_DAY / SECONDS_PER_CENTURY
    }

    /// Days elapsed since the civil midnight opening 2000-01-01.
    pub fn civil_days_since_2000(&self) -> Days {
        self.julian_day - J2000_CIVIL_MIDNIGHT_JD
    }

    /// The instant `seconds` seconds before `self`.
    pub fn earlier_by_seconds(&self, seconds: Decimal) -> Self {
        JulianTime {
            julian_day: self.julian_day - seconds / SECONDS_PER_DAY,
        }
    }
}

/// Length of a month of the proleptic Gregorian calendar.
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Fliegel & Van Flandern Julian day number of a proleptic Gregorian date (noon based).
fn julian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// An instant that can designate the time argument of a query.
///
/// Implemented for [`JulianTime`] and [`hifitime::Epoch`], so that every query of the
/// [`Ephemeris`](crate::ephemeris::Ephemeris) accepts either.
pub trait ToJulianTime {
    fn to_julian_time(&self) -> Result<JulianTime, OrreryError>;
}

impl ToJulianTime for JulianTime {
    fn to_julian_time(&self) -> Result<JulianTime, OrreryError> {
        Ok(*self)
    }
}

impl ToJulianTime for Epoch {
    fn to_julian_time(&self) -> Result<JulianTime, OrreryError> {
        JulianTime::from_epoch(self)
    }
}

impl TryFrom<Epoch> for JulianTime {
    type Error = OrreryError;

    fn try_from(epoch: Epoch) -> Result<Self, Self::Error> {
        JulianTime::from_epoch(&epoch)
    }
}

impl FromStr for JulianTime {
    type Err = OrreryError;

    /// Parse any ISO 8601 string accepted by [`hifitime::Epoch`], e.g. `2019-11-09T00:00:00 UTC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch = Epoch::from_str(s).map_err(|e| OrreryError::InvalidEpoch(e.to_string()))?;
        JulianTime::from_epoch(&epoch)
    }
}

impl fmt::Display for JulianTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.julian_day)
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn test_j2000_origin() {
        let t = JulianTime::from_gregorian(2000, 1, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(t, JulianTime::J2000);
        assert_eq!(t.days_since_j2000(), Decimal::ZERO);
        assert_eq!(t.centuries_since_j2000(), Decimal::ZERO);
        assert_eq!(t.civil_days_since_2000(), dec!(0.5));
    }

    #[test]
    fn test_julian_day_reference_dates() {
        // Meeus, Astronomical Algorithms, example 7.a
        let sputnik = JulianTime::from_gregorian(1957, 10, 4, 19, 26, 24, 0).unwrap();
        assert_eq!(sputnik.julian_day(), dec!(2436116.31));

        let t = JulianTime::from_gregorian(1950, 3, 26, 10, 0, 0, 0).unwrap();
        assert_relative_eq!(
            t.days_since_j2000().to_f64().unwrap(),
            -18178.083333333333,
            epsilon = 1e-9
        );

        let t = JulianTime::from_gregorian(1600, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(t.julian_day(), dec!(2305447.5));
    }

    #[test]
    fn test_centuries() {
        let t = JulianTime::from_julian_day(dec!(2451545) + dec!(36525));
        assert_eq!(t.centuries_since_j2000(), Decimal::ONE);
    }

    #[test]
    fn test_from_epoch_and_str() {
        let epoch = Epoch::from_gregorian_utc_hms(2019, 11, 9, 0, 0, 0);
        let from_epoch = JulianTime::from_epoch(&epoch).unwrap();
        let parsed = JulianTime::from_str("2019-11-09T00:00:00 UTC").unwrap();
        assert_eq!(from_epoch, parsed);
        assert_eq!(parsed.julian_day(), dec!(2458796.5));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            JulianTime::from_str("not a date"),
            Err(OrreryError::InvalidEpoch(_))
        ));
        assert!(matches!(
            JulianTime::from_gregorian(2020, 13, 1, 0, 0, 0, 0),
            Err(OrreryError::InvalidEpoch(_))
        ));
        assert!(matches!(
            JulianTime::from_gregorian(2020, 1, 1, 24, 0, 0, 0),
            Err(OrreryError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn test_day_must_exist_in_month() {
        for (year, month, day) in [(2021, 2, 31), (2021, 2, 29), (1900, 2, 29), (2019, 4, 31), (2019, 6, 0)] {
            assert!(
                matches!(
                    JulianTime::from_gregorian(year, month, day, 0, 0, 0, 0),
                    Err(OrreryError::InvalidEpoch(_))
                ),
                "{year}-{month:02}-{day:02}"
            );
        }

        // leap days of the Gregorian rule
        for year in [2000, 2020, 1600] {
            let leap_day = JulianTime::from_gregorian(year, 2, 29, 0, 0, 0, 0).unwrap();
            let march_first = JulianTime::from_gregorian(year, 3, 1, 0, 0, 0, 0).unwrap();
            assert_eq!(march_first.julian_day() - leap_day.julian_day(), Decimal::ONE);
        }
        assert!(JulianTime::from_gregorian(2019, 12, 31, 0, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_to_julian_time() {
        let epoch = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
        assert_eq!(epoch.to_julian_time().unwrap(), JulianTime::J2000);
        assert_eq!(
            JulianTime::J2000.to_julian_time().unwrap(),
            JulianTime::J2000
        );
    }

    #[test]
    fn test_earlier_by_seconds() {
        let t = JulianTime::J2000.earlier_by_seconds(dec!(43200));
        assert_eq!(t.julian_day(), dec!(2451544.5));
        assert_eq!(t.civil_days_since_2000(), Decimal::ZERO);
    }
}
