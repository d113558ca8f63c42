//! The International System of Units
//!
//! Base units are tagged 0 (second) to 6 (candela). Named derived units are
//! written in terms of the base ones or of each other, which makes no
//! difference once canonicalized: [`Watt`] is `Joule / Second` here, and has
//! the same tag as `Kilogram · Metre² · Second⁻³`.

use crate::{
    ratio::{self, Rat},
    unit::{Derived, Interval, Pow, Scaled},
};

crate::base_units! {
    pub Second = 0;
    pub Metre = 1;
    pub Kilogram = 2;
    pub Kelvin = 3;
    pub Ampere = 4;
    pub Mole = 5;
    pub Candela = 6;
}

// Dimensionless

pub type Radian = Derived<(Metre, Pow<Metre, -1>)>;
pub type Steradian = Derived<(Pow<Metre, 2>, Pow<Metre, -2>)>;

// Named derived units

pub type Hertz = Derived<(Pow<Second, -1>,)>;
pub type Newton = Derived<(Kilogram, Metre, Pow<Second, -2>)>;
pub type Pascal = Derived<(Newton, Pow<Metre, -2>)>;
pub type Joule = Derived<(Kilogram, Pow<Metre, 2>, Pow<Second, -2>)>;
pub type Watt = Derived<(Joule, Pow<Second, -1>)>;
pub type Coulomb = Derived<(Second, Ampere)>;
pub type Volt = Derived<(Kilogram, Pow<Metre, 2>, Pow<Second, -3>, Pow<Ampere, -1>)>;
pub type Farad = Derived<(Coulomb, Pow<Volt, -1>)>;
pub type Ohm = Derived<(Volt, Pow<Ampere, -1>)>;
pub type Siemens = Derived<(Pow<Ohm, -1>,)>;
pub type Weber = Derived<(Volt, Second)>;
pub type Tesla = Derived<(Weber, Pow<Metre, -2>)>;
pub type Henry = Derived<(Weber, Pow<Ampere, -1>)>;
pub type Lumen = Derived<(Candela, Steradian)>;
pub type Lux = Derived<(Lumen, Pow<Metre, -2>)>;
pub type Becquerel = Derived<(Pow<Second, -1>,)>;
pub type Gray = Derived<(Joule, Pow<Kilogram, -1>)>;
pub type Sievert = Derived<(Joule, Pow<Kilogram, -1>)>;
pub type Katal = Derived<(Mole, Pow<Second, -1>)>;

// Coherent derived units

pub type SquareMetre = Derived<(Pow<Metre, 2>,)>;
pub type CubicMetre = Derived<(Pow<Metre, 3>,)>;
pub type MetrePerSecond = Derived<(Metre, Pow<Second, -1>)>;
pub type MetrePerSecondSquared = Derived<(Metre, Pow<Second, -2>)>;
pub type ReciprocalMetre = Derived<(Pow<Metre, -1>,)>;
pub type KilogramPerCubicMetre = Derived<(Kilogram, Pow<Metre, -3>)>;
pub type KilogramPerSquareMetre = Derived<(Kilogram, Pow<Metre, -2>)>;
pub type CubicMetrePerKilogram = Derived<(Pow<Metre, 3>, Pow<Kilogram, -1>)>;
pub type AmperePerSquareMetre = Derived<(Ampere, Pow<Metre, -2>)>;
pub type AmperePerMetre = Derived<(Ampere, Pow<Metre, -1>)>;
pub type MolePerCubicMetre = Derived<(Mole, Pow<Metre, -3>)>;
pub type CandelaPerSquareMetre = Derived<(Candela, Pow<Metre, -2>)>;

// Derived units involving named ones

pub type PascalSecond = Derived<(Pascal, Second)>;
pub type NewtonMetre = Derived<(Newton, Metre)>;
pub type NewtonPerMetre = Derived<(Newton, Pow<Metre, -1>)>;
pub type RadianPerSecond = Derived<(Radian, Pow<Second, -1>)>;
pub type RadianPerSecondSquared = Derived<(Radian, Pow<Second, -2>)>;
pub type WattPerSquareMetre = Derived<(Watt, Pow<Metre, -2>)>;
pub type JoulePerKelvin = Derived<(Joule, Pow<Kelvin, -1>)>;
pub type JoulePerKilogramKelvin = Derived<(Joule, Pow<Kilogram, -1>, Pow<Kelvin, -1>)>;
pub type JoulePerKilogram = Derived<(Joule, Pow<Kilogram, -1>)>;
pub type WattPerMetreKelvin = Derived<(Watt, Pow<Metre, -1>, Pow<Kelvin, -1>)>;
pub type JoulePerCubicMetre = Derived<(Joule, Pow<Metre, -3>)>;
pub type VoltPerMetre = Derived<(Volt, Pow<Metre, -1>)>;
pub type CoulombPerCubicMetre = Derived<(Coulomb, Pow<Metre, -3>)>;
pub type CoulombPerSquareMetre = Derived<(Coulomb, Pow<Metre, -2>)>;
pub type FaradPerMetre = Derived<(Farad, Pow<Metre, -1>)>;
pub type HenryPerMetre = Derived<(Henry, Pow<Metre, -1>)>;
pub type JoulePerMole = Derived<(Joule, Pow<Mole, -1>)>;
pub type JoulePerMoleKelvin = Derived<(Joule, Pow<Mole, -1>, Pow<Kelvin, -1>)>;
pub type CoulombPerKilogram = Derived<(Coulomb, Pow<Kilogram, -1>)>;
pub type GrayPerSecond = Derived<(Gray, Pow<Second, -1>)>;
pub type WattPerSteradian = Derived<(Watt, Pow<Steradian, -1>)>;
pub type WattPerSquareMetreSteradian = Derived<(Watt, Pow<Metre, -2>, Pow<Steradian, -1>)>;
pub type KatalPerCubicMetre = Derived<(Katal, Pow<Metre, -3>)>;

macro_rules! prefixed {
    ($($name:ident),+) => {
        $(
            #[doc = concat!("`U` scaled by the [`", stringify!($name), "`][ratio::", stringify!($name), "] prefix")]
            pub type $name<U> = Scaled<U, ratio::$name>;
        )+
    };
}

prefixed!(Exa, Peta, Tera, Giga, Mega, Kilo, Hecto, Deca, Deci, Centi, Milli, Micro, Nano, Pico, Femto, Atto);

// Scaled units, not all of them SI

pub type Kilometre = Kilo<Metre>;
pub type Centimetre = Centi<Metre>;
pub type Millimetre = Milli<Metre>;
pub type Gram = Milli<Kilogram>;
pub type Millisecond = Milli<Second>;
pub type Minute = Scaled<Second, Rat<60>>;
pub type Hour = Scaled<Minute, Rat<60>>;
pub type Day = Scaled<Hour, Rat<24>>;
pub type KilometrePerHour = Derived<(Kilometre, Pow<Hour, -1>)>;
pub type AstronomicalUnit = Scaled<Metre, Rat<149_597_870_700>>;
pub type Hectare = Scaled<SquareMetre, Rat<10_000>>;
pub type Litre = Scaled<CubicMetre, Rat<1, 1000>>;
pub type Tonne = Scaled<Kilogram, Rat<1000>>;
pub type MetricTon = Tonne;
/// The international mile, exactly 1609.344 m
pub type Mile = Scaled<Metre, Rat<1_609_344, 1000>>;

// Temperatures

/// Degree Celsius: 0 °C is 273.15 K
pub type Celsius = Interval<Kelvin, Rat<1>, Rat<27_315, 100>>;
/// Degree Fahrenheit: 0 °F is 459.67 °R, a degree Rankine being 5/9 K
pub type Fahrenheit = Interval<Kelvin, Rat<5, 9>, Rat<45_967, 100>>;
