//! # Orbital element model
//!
//! Linear-in-time model of the six classical orbital elements of the bodies following a
//! Keplerian orbit, and the standard table of base values and secular rates (epoch J2000.0).
//!
//! ## Elements
//!
//! 1. **N**: longitude of the ascending node (degrees)
//! 2. **i**: inclination to the ecliptic (degrees)
//! 3. **w**: argument of perihelion (degrees)
//! 4. **e**: eccentricity (unitless)
//! 5. **M**: mean anomaly (degrees)
//! 6. **a**: semimajor axis (AU)
//!
//! Each element evaluates as `base + rate * d`, where `d` is the number of days since J2000.0
//! (every rate of the table is expressed per day).
//!
//! ## Angle normalization
//!
//! With [`AngleNormalization::Legacy`] (the default) the node, the perihelion and the mean
//! anomaly are brought into `[0, 360)` while the inclination is only reduced modulo 360 and keeps
//! the sign of its raw value. This reproduces the historical outputs of the model bit for bit.
//! [`AngleNormalization::Uniform`] brings all four angles into `[0, 360)`.
//!
//! The Earth row describes the apparent orbit of the Sun around the Earth: the Keplerian engine
//! negates its output to obtain the heliocentric Earth vector. The Sun row carries the classical
//! low precision solar elements and is only used for element queries.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Days, Degree};
use crate::decimal_math::{normalize_degrees, reduce_degrees};

/// How angular elements are normalized after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleNormalization {
    /// Node, perihelion and mean anomaly in `[0, 360)`, inclination in `(-360, 360)`.
    #[default]
    Legacy,
    /// Every angular element in `[0, 360)`.
    Uniform,
}

/// The six classical orbital elements at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub long_ascending_node: Degree,
    pub inclination: Degree,
    pub perihelion: Degree,
    pub eccentricity: Decimal,
    pub mean_anomaly: Degree,
    pub semimajor_axis: AstronomicalUnit,
}

/// Base value at J2000.0 and secular rate per day of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRate {
    pub base: Decimal,
    pub rate: Decimal,
}

impl ElementRate {
    pub const fn new(base: Decimal, rate: Decimal) -> Self {
        ElementRate { base, rate }
    }

    /// Raw value `base + rate * days`, without any normalization.
    pub fn at(&self, days: Days) -> Decimal {
        self.base + self.rate * days
    }
}

/// Immutable element table of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub long_ascending_node: ElementRate,
    pub inclination: ElementRate,
    pub perihelion: ElementRate,
    pub eccentricity: ElementRate,
    pub mean_anomaly: ElementRate,
    pub semimajor_axis: ElementRate,
}

impl BodyDescriptor {
    /// Evaluate the six elements `days` days after J2000.0.
    ///
    /// Arguments
    /// ---------
    /// * `days`: days since J2000.0.
    /// * `normalization`: normalization policy of the angular elements.
    ///
    /// Return
    /// ------
    /// * The [`OrbitalElements`] of the body at that instant.
    pub fn elements_at(&self, days: Days, normalization: AngleNormalization) -> OrbitalElements {
        let inclination = self.inclination.at(days);
        OrbitalElements {
            long_ascending_node: normalize_degrees(self.long_ascending_node.at(days)),
            inclination: match normalization {
                AngleNormalization::Legacy => reduce_degrees(inclination),
                AngleNormalization::Uniform => normalize_degrees(inclination),
            },
            perihelion: normalize_degrees(self.perihelion.at(days)),
            eccentricity: self.eccentricity.at(days),
            mean_anomaly: normalize_degrees(self.mean_anomaly.at(days)),
            semimajor_axis: self.semimajor_axis.at(days),
        }
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  N   (longitude of node)     = {:.6}°", self.long_ascending_node)?;
        writeln!(f, "  i   (inclination)           = {:.6}°", self.inclination)?;
        writeln!(f, "  w   (argument of perihelion)= {:.6}°", self.perihelion)?;
        writeln!(f, "  e   (eccentricity)          = {:.8}", self.eccentricity)?;
        writeln!(f, "  M   (mean anomaly)          = {:.6}°", self.mean_anomaly)?;
        write!(f, "  a   (semimajor axis)        = {:.8} AU", self.semimajor_axis)
    }
}

// -------------------------------------------------------------------------------------------------
// Standard element table, rates per day since J2000.0
// -------------------------------------------------------------------------------------------------

pub const EARTH: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(0), dec!(0)),
    inclination: ElementRate::new(dec!(-0.00001531), dec!(-0.00000035446078)),
    perihelion: ElementRate::new(dec!(282.93768193), dec!(0.00000885074)),
    eccentricity: ElementRate::new(dec!(0.01671123), dec!(-0.00000000120246407)),
    mean_anomaly: ElementRate::new(dec!(357.52688973), dec!(0.98560025124)),
    semimajor_axis: ElementRate::new(dec!(1.00000261), dec!(0.00000000015386721)),
};

pub const SUN: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(0), dec!(0)),
    inclination: ElementRate::new(dec!(0), dec!(0)),
    perihelion: ElementRate::new(dec!(282.9404), dec!(0.0000470935)),
    eccentricity: ElementRate::new(dec!(0.016709), dec!(-0.000000001151)),
    mean_anomaly: ElementRate::new(dec!(356.0470), dec!(0.9856002585)),
    semimajor_axis: ElementRate::new(dec!(1), dec!(0)),
};

pub const MERCURY: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(48.33076593), dec!(-0.00000343164)),
    inclination: ElementRate::new(dec!(7.00497902), dec!(-0.000000162833402)),
    perihelion: ElementRate::new(dec!(29.12703035), dec!(0.00000782525)),
    eccentricity: ElementRate::new(dec!(0.20563593), dec!(0.00000000052183436)),
    mean_anomaly: ElementRate::new(dec!(174.79252722), dec!(4.09233439111)),
    semimajor_axis: ElementRate::new(dec!(0.38709927), dec!(0.000000000010130048)),
};

pub const VENUS: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(76.67984255), dec!(-0.00000760285)),
    inclination: ElementRate::new(dec!(3.39467605), dec!(-0.0000000215989049)),
    perihelion: ElementRate::new(dec!(54.92262463), dec!(0.00000767631)),
    eccentricity: ElementRate::new(dec!(0.00677672), dec!(-0.00000000112443532)),
    mean_anomaly: ElementRate::new(dec!(50.37663232), dec!(1.60213039573)),
    semimajor_axis: ElementRate::new(dec!(0.72333566), dec!(-0.00000000010677618)),
};

pub const MARS: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(49.55953891), dec!(-0.00000801022)),
    inclination: ElementRate::new(dec!(1.84969142), dec!(-0.000000222623135)),
    perihelion: ElementRate::new(dec!(286.4968315), dec!(0.00002017753)),
    eccentricity: ElementRate::new(dec!(0.09339410), dec!(0.00000000215797399)),
    mean_anomaly: ElementRate::new(dec!(19.39019754), dec!(0.52402076)),
    semimajor_axis: ElementRate::new(dec!(1.52371034), dec!(0.000000000513073)),
};

pub const JUPITER: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(100.4739091), dec!(0.00000560414)),
    inclination: ElementRate::new(dec!(1.30439695), dec!(-0.0000000502982)),
    perihelion: ElementRate::new(dec!(274.2545707), dec!(0.000000214528)),
    eccentricity: ElementRate::new(dec!(0.04838624), dec!(-0.00000000362847)),
    mean_anomaly: ElementRate::new(dec!(19.66796068), dec!(0.083081002)),
    semimajor_axis: ElementRate::new(dec!(5.202887), dec!(-0.00000000317782)),
};

pub const SATURN: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(113.66242448), dec!(-0.00000790357125256674)),
    inclination: ElementRate::new(dec!(2.48599187), dec!(0.00000005295249828884)),
    perihelion: ElementRate::new(dec!(338.93645383), dec!(-0.00000356726132785763)),
    eccentricity: ElementRate::new(dec!(0.05386179), dec!(-0.00000013960574948665)),
    mean_anomaly: ElementRate::new(dec!(317.35536592), dec!(0.0334815220854209)),
    semimajor_axis: ElementRate::new(dec!(9.53667594), dec!(-0.00000003423956194387)),
};

pub const URANUS: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(74.01692503), dec!(0.00000116100999315537)),
    inclination: ElementRate::new(dec!(0.77263783), dec!(0.0000000665130732375086)),
    perihelion: ElementRate::new(dec!(96.93735127), dec!(0.0000100108670773443)),
    eccentricity: ElementRate::new(dec!(0.04725744), dec!(-0.0000000120383299110198)),
    mean_anomaly: ElementRate::new(dec!(142.28382821), dec!(0.0117200266951403)),
    semimajor_axis: ElementRate::new(dec!(19.18916464), dec!(-0.0000000537100616016427)),
};

pub const NEPTUNE: BodyDescriptor = BodyDescriptor {
    long_ascending_node: ElementRate::new(dec!(131.78422574), dec!(-0.00000139264613278576)),
    inclination: ElementRate::new(dec!(1.77004347), dec!(0.00000000968432580424367)),
    perihelion: ElementRate::new(dec!(273.18053653), dec!(-0.00000743458562628337)),
    eccentricity: ElementRate::new(dec!(0.00859048), dec!(0.00000000139767282683094)),
    mean_anomaly: ElementRate::new(dec!(259.91520804), dec!(0.00598992109212868)),
    semimajor_axis: ElementRate::new(dec!(30.06992276), dec!(0.000000235194524298426)),
};

#[cfg(test)]
mod orbital_elements_test {
    use super::*;

    #[test]
    fn test_elements_at_j2000_are_base_values() {
        let el = VENUS.elements_at(Decimal::ZERO, AngleNormalization::Legacy);
        assert_eq!(el.long_ascending_node, dec!(76.67984255));
        assert_eq!(el.inclination, dec!(3.39467605));
        assert_eq!(el.perihelion, dec!(54.92262463));
        assert_eq!(el.eccentricity, dec!(0.00677672));
        assert_eq!(el.mean_anomaly, dec!(50.37663232));
        assert_eq!(el.semimajor_axis, dec!(0.72333566));
    }

    #[test]
    fn test_mean_anomaly_wraps_into_full_turn() {
        let el = MERCURY.elements_at(dec!(-1000), AngleNormalization::Legacy);
        // 174.79252722 - 4092.33439111 = -3917.54186389
        assert_eq!(el.mean_anomaly, dec!(42.45813611));
    }

    #[test]
    fn test_inclination_normalization_policies() {
        let days = dec!(1000);
        let legacy = EARTH.elements_at(days, AngleNormalization::Legacy);
        let uniform = EARTH.elements_at(days, AngleNormalization::Uniform);

        let raw = dec!(-0.00001531) + dec!(-0.00000035446078) * days;
        assert_eq!(legacy.inclination, raw);
        assert!(legacy.inclination.is_sign_negative());
        assert_eq!(uniform.inclination, raw + dec!(360));

        assert_eq!(legacy.perihelion, uniform.perihelion);
        assert_eq!(legacy.mean_anomaly, uniform.mean_anomaly);
    }

    #[test]
    fn test_eccentricity_and_axis_are_not_normalized() {
        let el = SATURN.elements_at(dec!(-10000), AngleNormalization::Uniform);
        assert_eq!(
            el.eccentricity,
            dec!(0.05386179) + dec!(0.0013960574948665)
        );
        assert_eq!(el.semimajor_axis, dec!(9.53667594) + dec!(0.0003423956194387));
    }

    #[test]
    fn test_display() {
        let el = SUN.elements_at(Decimal::ZERO, AngleNormalization::Legacy);
        let out = format!("{el}");
        assert!(out.contains("282.940400°"));
        assert!(out.contains("1.00000000 AU"));
    }
}
