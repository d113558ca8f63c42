//! The centimetre–gram–second system
//!
//! Units are defined as scaled SI units rather than over base units of their
//! own, so CGS and SI quantities convert into one another.

use super::si::{Centimetre, Gram};
use crate::unit::{Derived, Pow};

pub use super::si::Second;

pub type CentimetrePerSecond = Derived<(Centimetre, Pow<Second, -1>)>;
/// Acceleration, 1 cm/s²
pub type Gal = Derived<(Centimetre, Pow<Second, -2>)>;
/// Force, 10⁻⁵ N
pub type Dyne = Derived<(Gram, Centimetre, Pow<Second, -2>)>;
/// Energy, 10⁻⁷ J
pub type Erg = Derived<(Gram, Pow<Centimetre, 2>, Pow<Second, -2>)>;
pub type ErgPerSecond = Derived<(Erg, Pow<Second, -1>)>;
/// Pressure, 0.1 Pa
pub type Barye = Derived<(Gram, Pow<Centimetre, -1>, Pow<Second, -2>)>;
/// Dynamic viscosity, 0.1 Pa·s
pub type Poise = Derived<(Gram, Pow<Centimetre, -1>, Pow<Second, -1>)>;
/// Kinematic viscosity, 1 cm²/s
pub type Stokes = Derived<(Pow<Centimetre, 2>, Pow<Second, -1>)>;
/// Wavenumber, 1 cm⁻¹
pub type Kayser = Derived<(Pow<Centimetre, -1>,)>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ratio::Ratio,
        systems::si,
        test_macros::*,
        unit::{RationalUnit, Unit},
    };
    use approx::assert_relative_eq;

    simple_eqs! {
        dyne_scale: Dyne::CANON.scale() => Ratio::new(1, 100_000),
        erg_scale: Erg::CANON.scale() => Ratio::new(1, 10_000_000),
        barye_scale: Barye::CANON.scale() => Ratio::new(1, 10),
        poise_scale: Poise::CANON.scale() => Ratio::new(1, 10),
        dyne_is_force: Dyne::CANON.same_dimension(&si::Newton::CANON) => true,
        erg_per_second_is_power: ErgPerSecond::CANON.same_dimension(&si::Watt::CANON) => true,
        kayser: Kayser::CANON.scale() => Ratio::integer(100)
    }

    #[test]
    fn to_si() {
        assert_eq!(Dyne::quantity(100_000i64).convert::<si::Newton>().get(), 1);
        assert_relative_eq!(
            Erg::quantity(1.0e7f64).convert::<si::Joule>().get(),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Gal::quantity(981.0f64).convert::<si::MetrePerSecondSquared>().get(),
            9.81,
            epsilon = 1e-12
        );
        let stokes = Stokes::quantity(10_000u64);
        assert_eq!(stokes.convert::<Derived<(Pow<si::Metre, 2>, Pow<Second, -1>)>>().get(), 1);
    }

    #[test]
    fn gram_per_second() {
        let rate = si::Gram::quantity(4.0f64) / Second::quantity(10.0f64);
        assert_relative_eq!(rate.get(), 0.4);
        assert_relative_eq!(rate.convert::<Derived<(si::Kilogram, Pow<Second, -1>)>>().get(), 0.0004);
    }
}
