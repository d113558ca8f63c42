use crate::{
    conversion::Converter,
    scalar::{Promote, Scalar},
    tag::UnitTag,
    unit::{Derived, Pow, RationalUnit, Unit},
};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::Zero;

/// A raw value of type `T`, expressed in unit `U`
///
/// The unit only exists at the type level: a quantity is exactly as large as
/// its value. Units are checked and conversion factors computed at compile
/// time, from the canonical tags of the unit types.
///
/// Adding or subtracting quantities requires their units to be convertible.
/// The result is expressed in the unit of the left operand:
///
/// ```
/// use dimal::{systems::si::{Kilometre, Metre}, Unit};
///
/// let d = Kilometre::quantity(1.0f64) + Metre::quantity(500.0f64);
/// assert_eq!(d.get(), 1.5);
/// ```
///
/// Units that measure different things cannot be added:
///
/// ```compile_fail
/// use dimal::{systems::si::{Metre, Second}, Unit};
///
/// let _ = Metre::quantity(1.0f64) + Second::quantity(1.0f64);
/// ```
///
/// Multiplying or dividing quantities combines their units:
///
/// ```
/// use dimal::{systems::si::{Metre, MetrePerSecond, Second}, Quantity, Unit};
///
/// let v = Metre::quantity(4.0f64) / Second::quantity(2.0f64);
/// assert_eq!(v.get(), 2.0);
/// let v: Quantity<f64, MetrePerSecond> = v.convert();
/// assert_eq!(v.get(), 2.0);
/// ```
///
/// but only for rational units, interval units like degrees Celsius can only
/// be converted:
///
/// ```compile_fail
/// use dimal::{systems::si::{Celsius, Second}, Unit};
///
/// let _ = Celsius::quantity(20.0f64) / Second::quantity(1.0f64);
/// ```
///
/// ```compile_fail
/// use dimal::{systems::si::{Celsius, Second}, Derived, Unit};
///
/// let _ = <Derived<(Celsius, Second)>>::quantity(1.0f64);
/// ```
///
/// Ill-formed scale factors are rejected as soon as the unit is used:
///
/// ```compile_fail
/// use dimal::{ratio::Rat, systems::si::Metre, Scaled, Unit};
///
/// let _ = <Scaled<Metre, Rat<1, 0>>>::quantity(1.0f64);
/// ```
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<fn() -> U>,
}

/// Same as `U::quantity(value)`
pub const fn quantity_of<U: Unit, T>(value: T) -> Quantity<T, U> {
    Quantity::new(value)
}

impl<T, U: Unit> Quantity<T, U> {
    pub const fn new(value: T) -> Self {
        // Makes sure the tag is evaluated, hence the unit well-formed
        let _tag = U::TAG;
        Quantity {
            value,
            unit: PhantomData,
        }
    }

    /// The raw value, in unit `U`
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The canonical tag of `U`
    pub const fn tag(&self) -> UnitTag {
        U::TAG
    }

    /// The same quantity, expressed in unit `V`. Fails to compile if `U` and
    /// `V` are not convertible
    pub fn convert<V: Unit>(self) -> Quantity<T, V>
    where
        T: Scalar,
    {
        Quantity::new(Converter::<U, V>::convert(self.value))
    }
}

macro_rules! additive_ops {
    ($($op:ident $fn_name:ident $assign_op:ident $assign_fn:ident),+) => {
        $(
            impl<T, U, V> $op<Quantity<T, V>> for Quantity<T, U>
            where
                T: Scalar + $op<Output = T>,
                U: Unit,
                V: Unit,
            {
                type Output = Quantity<T, U>;
                #[inline]
                fn $fn_name(self, rhs: Quantity<T, V>) -> Quantity<T, U> {
                    Quantity::new(self.value.$fn_name(Converter::<V, U>::convert(rhs.value)))
                }
            }

            impl<T, U, V> $assign_op<Quantity<T, V>> for Quantity<T, U>
            where
                T: Scalar + $op<Output = T>,
                U: Unit,
                V: Unit,
            {
                #[inline]
                fn $assign_fn(&mut self, rhs: Quantity<T, V>) {
                    self.value = self.value.$fn_name(Converter::<V, U>::convert(rhs.value));
                }
            }
        )+
    };
}

additive_ops!(Add add AddAssign add_assign, Sub sub SubAssign sub_assign);

impl<T1, T2, U, V> Mul<Quantity<T2, V>> for Quantity<T1, U>
where
    T1: Promote<T2>,
    <T1 as Promote<T2>>::Output: Mul<Output = <T1 as Promote<T2>>::Output>,
    U: RationalUnit,
    V: RationalUnit,
{
    type Output = Quantity<<T1 as Promote<T2>>::Output, Derived<(U, V)>>;
    #[inline]
    fn mul(self, rhs: Quantity<T2, V>) -> Self::Output {
        Quantity::new(self.value.promote() * T1::promote_rhs(rhs.value))
    }
}

impl<T1, T2, U, V> Div<Quantity<T2, V>> for Quantity<T1, U>
where
    T1: Promote<T2>,
    <T1 as Promote<T2>>::Output: Div<Output = <T1 as Promote<T2>>::Output>,
    U: RationalUnit,
    V: RationalUnit,
{
    type Output = Quantity<<T1 as Promote<T2>>::Output, Derived<(U, Pow<V, -1>)>>;
    #[inline]
    fn div(self, rhs: Quantity<T2, V>) -> Self::Output {
        Quantity::new(self.value.promote() / T1::promote_rhs(rhs.value))
    }
}

/// Scaling by a bare number of the same representation
macro_rules! scalar_ops {
    ($($t:ty),+) => {
        $(
            impl<U: Unit> Mul<$t> for Quantity<$t, U> {
                type Output = Quantity<$t, U>;
                #[inline]
                fn mul(self, rhs: $t) -> Quantity<$t, U> {
                    Quantity::new(self.value * rhs)
                }
            }

            impl<U: Unit> Mul<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, U>;
                #[inline]
                fn mul(self, rhs: Quantity<$t, U>) -> Quantity<$t, U> {
                    Quantity::new(self * rhs.value)
                }
            }

            impl<U: Unit> Div<$t> for Quantity<$t, U> {
                type Output = Quantity<$t, U>;
                #[inline]
                fn div(self, rhs: $t) -> Quantity<$t, U> {
                    Quantity::new(self.value / rhs)
                }
            }

            impl<U: RationalUnit> Div<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, Pow<U, -1>>;
                #[inline]
                fn div(self, rhs: Quantity<$t, U>) -> Quantity<$t, Pow<U, -1>> {
                    Quantity::new(self / rhs.value)
                }
            }

            impl<U: Unit> MulAssign<$t> for Quantity<$t, U> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.value *= rhs;
                }
            }

            impl<U: Unit> DivAssign<$t> for Quantity<$t, U> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.value /= rhs;
                }
            }
        )+
    };
}

scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl<T: Neg<Output = T>, U: Unit> Neg for Quantity<T, U> {
    type Output = Quantity<T, U>;
    #[inline]
    fn neg(self) -> Quantity<T, U> {
        Quantity::new(-self.value)
    }
}

impl<T: Scalar + Zero, U: Unit> Zero for Quantity<T, U> {
    fn zero() -> Self {
        Quantity::new(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<T: Scalar + Zero, U: Unit> Sum for Quantity<T, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<T: Clone, U> Clone for Quantity<T, U> {
    fn clone(&self) -> Self {
        Quantity {
            value: self.value.clone(),
            unit: PhantomData,
        }
    }
}

impl<T: Copy, U> Copy for Quantity<T, U> {}

impl<T: Default, U: Unit> Default for Quantity<T, U> {
    fn default() -> Self {
        Quantity::new(T::default())
    }
}

impl<T: PartialEq, U> PartialEq for Quantity<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, U> Eq for Quantity<T, U> {}

impl<T: PartialOrd, U> PartialOrd for Quantity<T, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, U> Ord for Quantity<T, U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, U> Hash for Quantity<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, U: Unit> fmt::Debug for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &format_args!("{}", U::TAG))
            .finish()
    }
}

/// `"{value} {tag}"`, eg. `"9.81 u1/u0^2"`
impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::TAG)
    }
}

/// Quantities are serialized as their bare value
#[cfg(feature = "serde")]
impl<T: serde::Serialize, U> serde::Serialize for Quantity<T, U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, U: Unit> serde::Deserialize<'de> for Quantity<T, U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::new)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, U> approx::AbsDiffEq for Quantity<T, U> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, U> approx::RelativeEq for Quantity<T, U> {
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, U> approx::UlpsEq for Quantity<T, U> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{systems::si::*, test_macros::*};
    use approx::assert_relative_eq;

    type KilometrePerSecond = Derived<(Kilometre, Pow<Second, -1>)>;

    simple_eqs! {
        km_per_s_to_m_per_s: KilometrePerSecond::quantity(5.0f64).convert::<MetrePerSecond>().get() => 5000.0,
        kelvin_to_celsius: Kelvin::quantity(0.0f64).convert::<Celsius>().get() => -273.15,
        division_value: (Metre::quantity(4.0f64) / Second::quantity(2.0f64)).get() => 2.0,
        division_tag: (Metre::quantity(4.0f64) / Second::quantity(2.0f64)).tag()
            => UnitTag::Rational(Metre::CANON.product(Second::CANON.pow(-1))),
        left_unit_wins: (Kilometre::quantity(1.0f64) + Metre::quantity(500.0f64)).tag() => Kilometre::TAG,
        left_unit_value: (Metre::quantity(500.0f64) + Kilometre::quantity(1.0f64)).get() => 1500.0,
        sub_converts: (Hour::quantity(2) - Minute::quantity(60)).get() => 1,
        promotion: (Metre::quantity(2.0f32) * Second::quantity(3.0f64)).get() => 6.0f64,
        int_promotion: (Metre::quantity(2u8) * Metre::quantity(300u32)).get() => 600u32,
        scalar_mul_left: (2.0f64 * Metre::quantity(1.5f64)).get() => 3.0,
        scalar_mul_right: (Metre::quantity(1.5f64) * 2.0).get() => 3.0,
        scalar_div: (Metre::quantity(9i32) / 2).get() => 4,
        scalar_over_quantity: (1.0f64 / Second::quantity(4.0f64)).tag() => Hertz::TAG,
        neg: (-Metre::quantity(2.0f64)).get() => -2.0,
        quantity_of_matches_quantity: quantity_of::<Metre, _>(7).get() => Metre::quantity(7).get(),
        display: format!("{}", Metre::quantity(3)) => "3 u1",
        display_derived: format!("{}", MetrePerSecondSquared::quantity(9.81f64)) => "9.81 u1/u0^2",
        debug: format!("{:?}", Second::quantity(1)) => "Quantity { value: 1, unit: u0 }"
    }

    #[test]
    fn celsius_and_fahrenheit() {
        let boiling = Celsius::quantity(100.0f64);
        let f = boiling.convert::<Fahrenheit>();
        assert_relative_eq!(f.get(), 212.0, epsilon = 1e-9);
        assert_relative_eq!(f.convert::<Celsius>().get(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn round_trips() {
        let d = Kilometre::quantity(3i64);
        assert_eq!(d.convert::<Metre>().get(), 3000);
        assert_eq!(d.convert::<Metre>().convert::<Kilometre>(), d);

        let v = KilometrePerHour::quantity(72.0f64);
        assert_relative_eq!(v.convert::<MetrePerSecond>().get(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(
            v.convert::<MetrePerSecond>().convert::<KilometrePerHour>().get(),
            72.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn assign_ops() {
        let mut d = Metre::quantity(1.0f64);
        d += Kilometre::quantity(1.0f64);
        d -= Metre::quantity(1.0f64);
        assert_eq!(d.get(), 1000.0);
        d *= 3.0;
        d /= 2.0;
        assert_eq!(d.get(), 1500.0);
    }

    #[test]
    fn sum_and_zero() {
        let total: Quantity<u32, Second> = [1, 2, 3].into_iter().map(Second::quantity).sum();
        assert_eq!(total.get(), 6);
        assert!(Quantity::<f64, Metre>::zero().is_zero());
        assert_eq!(Quantity::<i32, Metre>::default(), Quantity::zero());
    }

    #[test]
    fn ordering() {
        assert!(Metre::quantity(1.0f64) < Metre::quantity(2.0f64));
        assert_eq!(Second::quantity(3).max(Second::quantity(5)).get(), 5);
    }

    #[test]
    fn products_of_named_units() {
        let work = Newton::quantity(2.0f64) * Metre::quantity(3.0f64);
        assert_eq!(work.tag(), Joule::TAG);
        assert_eq!(work.convert::<Joule>().get(), 6.0);
        let per_hour = (Kilometre::quantity(36.0f64) / Hour::quantity(1.0f64)).convert::<MetrePerSecond>();
        assert_relative_eq!(per_hour.get(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn cancelled_units_are_dimensionless() {
        let ratio = Kilometre::quantity(1.0f64) / Metre::quantity(250.0f64);
        assert_relative_eq!(ratio.convert::<crate::Dimensionless>().get(), 4.0, epsilon = 1e-12);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn approx_on_quantities() {
        let a = Celsius::quantity(100.0f64).convert::<Fahrenheit>().convert::<Celsius>();
        approx::assert_relative_eq!(a, Celsius::quantity(100.0f64), epsilon = 1e-9);
        approx::assert_ulps_eq!(Metre::quantity(0.1f64 + 0.2), Metre::quantity(0.3f64));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bare_value() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Leg {
            distance: Quantity<f64, Kilometre>,
            duration: Quantity<u32, Second>,
        }

        let json = serde_json::to_string(&Leg {
            distance: Kilometre::quantity(4.5f64),
            duration: Second::quantity(900),
        })
        .unwrap();
        assert_eq!(json, r#"{"distance":4.5,"duration":900}"#);
        let back: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(back.distance.get(), 4.5);
        assert_eq!(back.duration.get(), 900);
    }
}
