/*!
# Compile-time dimensional analysis

Represent physical quantities as distinct types, so that unit errors (adding
a duration to a distance) are caught by the compiler, and unit conversions
(miles to metres, Celsius to Kelvin) cost no more at runtime than a multiply
and a divide. The main type is [`Quantity<T, U>`][Quantity], a value of
numeric type `T` expressed in unit `U`.

Units are plain types, built from four shapes:

- [`BaseUnit<ID>`][BaseUnit]: an independent dimension (length, mass, time,
  …), identified by a number the user picks. [`base_units!`] declares a set
  of them and checks that their ids are distinct
- [`Scaled<U, S>`][Scaled]: `U` times a constant rational factor, eg.
  `Scaled<Metre, ratio::Kilo>`
- [`Derived<(T1, T2, …)>`][Derived]: a product of terms, each term being
  possibly raised to some integer power with [`Pow`], eg.
  `Derived<(Metre, Pow<Second, -1>)>`
- [`Interval<B, S, H>`][Interval]: a unit with its own origin, like degrees
  Celsius, defined over some base unit `B`. Such units are terminal: they can
  be converted from and to, but are not combined with others

Whatever way it was written, a unit reduces to a unique canonical
[`UnitTag`]: a single exact scale factor relative to the base units, and the
sorted list of the base units involved with their exponents. This reduction
is done by `const fn`s, during compilation, and never at runtime. Two
quantities are convertible iff their tags list the same base units with the
same exponents (interval units follow their own rule, see
[`UnitTag::convertible_with`]). Their scales then give the conversion factor.

```
use dimal::{systems::si::*, Quantity, Unit};

let distance = Kilometre::quantity(36.0f64);
let duration = Hour::quantity(0.5f64);
let speed: Quantity<f64, MetrePerSecond> = (distance / duration).convert();
assert_eq!(speed.get(), 20.0);

let oven = Celsius::quantity(180.0f64).convert::<Fahrenheit>();
assert!((oven.get() - 356.0).abs() < 1e-9);
```

All errors are compile errors. Converting, adding or subtracting
quantities whose units are not convertible fails during constant evaluation
with "incompatible units: conversion between unit tags that are not
convertible". Using an interval unit inside a scaled or derived unit, or
multiplying it, fails a [`RationalUnit`] trait bound. Zero denominators,
`i128` overflows of scale factors and duplicate base unit ids all fail
constant evaluation with a message of their own. Note that errors detected
during constant evaluation only show up once the code is monomorphized, so
`cargo build` reports them but `cargo check` may not.

The crate is `no_std`. Optional features:

- `serde`: quantities (de)serialize as their bare value
- `approx`: approximate comparisons of quantities holding floats
*/

#![cfg_attr(not(test), no_std)]

mod conversion;
mod power_list;
mod quantity;
pub mod ratio;
mod scalar;
pub mod systems;
mod tag;
pub mod unit;

pub use conversion::{Conversion, Converter};
pub use power_list::{Power, PowerList, MAX_POWERS};
pub use quantity::{quantity_of, Quantity};
pub use ratio::{Rat, Ratio, ScaleFactor};
pub use scalar::{Promote, Scalar};
pub use tag::{AffineTag, RationalTag, UnitTag};
pub use unit::{
    assert_distinct_tags, BaseDimension, BaseUnit, Derived, Dimensionless, Interval, Pow,
    RationalUnit, Scaled, Terms, Unit,
};

#[cfg(test)]
pub(crate) mod test_macros {
    macro_rules! simple_eqs {
        {$($test_name:ident : $a:expr => $b:expr),+} => {
          mod simple_eqs {
            use super::*;
            $(
                #[test]
                fn $test_name() {
                    assert_eq!($a, $b);
                }
            )+
          }
        }
    }
    pub(crate) use simple_eqs;
}
