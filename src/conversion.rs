//! Conversion plans between two units
//!
//! A plan is computed once per pair of unit types, during constant
//! evaluation, from their canonical tags. Asking for a plan between two units
//! that are not convertible is a compile error.

use crate::{ratio::Ratio, scalar::Scalar, tag::UnitTag, unit::Unit};
use core::marker::PhantomData;

/// How to turn a value expressed in one unit into the same quantity
/// expressed in another one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Both units have the same canonical tag
    Identity,
    /// Multiply by the ratio of the scales
    Linear(Ratio),
    /// At least one side is an interval unit: shift to its origin, rescale,
    /// then shift to the origin of the target unit
    Affine {
        shift_from: Ratio,
        factor: Ratio,
        shift_to: Ratio,
    },
}

impl Conversion {
    /// The plan from `from` to `to`. Panics with "incompatible units" if they
    /// are not convertible, so when const-evaluated this is a compile error
    pub const fn between(from: &UnitTag, to: &UnitTag) -> Conversion {
        assert!(
            from.convertible_with(to),
            "incompatible units: conversion between unit tags that are not convertible"
        );
        let (scale_from, shift_from) = from.scale_and_shift();
        let (scale_to, shift_to) = to.scale_and_shift();
        let factor = scale_from.div(scale_to);
        // Interval units with a zero shift are plain rescalings
        let shifted = !(shift_from.is_zero() && shift_to.is_zero());
        if shifted {
            Conversion::Affine {
                shift_from,
                factor,
                shift_to,
            }
        } else if factor.is_one() {
            Conversion::Identity
        } else {
            Conversion::Linear(factor)
        }
    }

    /// Run the plan on a value
    #[inline]
    pub fn apply<T: Scalar>(self, x: T) -> T {
        match self {
            Conversion::Identity => x,
            Conversion::Linear(factor) => x.rescale(factor),
            Conversion::Affine {
                shift_from,
                factor,
                shift_to,
            } => x.affine(shift_from, factor, shift_to),
        }
    }
}

/// Holds the plan from unit `Src` to unit `Dst` as an associated const, so
/// that it is computed (and checked) once per pair, at compile time
pub struct Converter<Src, Dst>(PhantomData<fn() -> (Src, Dst)>);

impl<Src: Unit, Dst: Unit> Converter<Src, Dst> {
    pub const PLAN: Conversion = Conversion::between(&Src::TAG, &Dst::TAG);

    #[inline]
    pub fn convert<T: Scalar>(x: T) -> T {
        Self::PLAN.apply(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ratio::{Kilo, Rat},
        test_macros::*,
        unit::{BaseUnit, Derived, Interval, Pow, Scaled},
    };
    use approx::assert_relative_eq;

    type S = BaseUnit<0>;
    type M = BaseUnit<1>;
    type K = BaseUnit<3>;
    type Km = Scaled<M, Kilo>;
    type Hour = Scaled<S, Rat<3600>>;
    type Celsius = Interval<K, Rat<1>, Rat<27315, 100>>;
    type Fahrenheit = Interval<K, Rat<5, 9>, Rat<45967, 100>>;

    simple_eqs! {
        identity: Converter::<M, M>::PLAN => Conversion::Identity,
        identity_between_spellings: Converter::<Derived<(M, S)>, Derived<(S, M)>>::PLAN => Conversion::Identity,
        linear: Converter::<Km, M>::PLAN => Conversion::Linear(Ratio::integer(1000)),
        linear_inverse: Converter::<M, Km>::PLAN => Conversion::Linear(Ratio::new(1, 1000)),
        kelvin_to_celsius: Converter::<K, Celsius>::PLAN => Conversion::Affine {
            shift_from: Ratio::ZERO,
            factor: Ratio::ONE,
            shift_to: Ratio::new(27315, 100)
        },
        int_km_per_hour: Converter::<Derived<(Km, Pow<Hour, -1>)>, Derived<(M, Pow<S, -1>)>>::convert(36i32) => 10,
        int_fahrenheit_to_celsius: Converter::<Fahrenheit, Celsius>::convert(212i32) => 100,
        int_celsius_to_fahrenheit: Converter::<Celsius, Fahrenheit>::convert(100i32) => 212,
        int_celsius_round_trip: Converter::<Fahrenheit, Celsius>::convert(Converter::<Celsius, Fahrenheit>::convert(100i32)) => 100,
        int_freezing_point: Converter::<Celsius, Fahrenheit>::convert(0i64) => 32,
        int_kelvin_to_celsius: Converter::<K, Celsius>::convert(300u32) => 26
    }

    #[test]
    fn temperatures() {
        assert_relative_eq!(Converter::<K, Celsius>::convert(0.0f64), -273.15);
        assert_relative_eq!(Converter::<Celsius, Fahrenheit>::convert(100.0f64), 212.0, epsilon = 1e-9);
        assert_relative_eq!(Converter::<Fahrenheit, Celsius>::convert(32.0f64), 0.0, epsilon = 1e-9);
        assert_relative_eq!(Converter::<Fahrenheit, K>::convert(-459.67f64), 0.0, epsilon = 1e-9);
    }

    #[test]
    #[should_panic(expected = "incompatible units")]
    fn incompatible_tags() {
        let _ = Conversion::between(&M::TAG, &S::TAG);
    }

    #[test]
    #[should_panic(expected = "incompatible units")]
    fn interval_over_squared_base() {
        let _ = Conversion::between(&Celsius::TAG, &Pow::<K, 2>::TAG);
    }
}
