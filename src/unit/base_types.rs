use super::{BaseDimension, RationalUnit, Unit};
use crate::{
    ratio::ScaleFactor,
    tag::{AffineTag, RationalTag, UnitTag},
};
use core::marker::PhantomData;

/// An irreducible unit, identified by `ID`. Two base units are the same
/// dimension iff their ids are equal. Ids are never allocated by the library,
/// see [`base_units!`][crate::base_units] to declare a consistent set of them
pub struct BaseUnit<const ID: u32>;

/// `U` multiplied by the constant factor `S`, eg. `Scaled<Metre, Kilo>`
pub struct Scaled<U, S>(PhantomData<fn() -> (U, S)>);

/// `U` raised to the integer power `P`. Mostly used as a term of a
/// [`Derived`][super::Derived] unit, eg. `Pow<Second, -1>`
pub struct Pow<U, const P: i32>(PhantomData<fn() -> U>);

/// An interval unit (eg. degrees Celsius) over the base unit `B`: a value `v`
/// in this unit stands for `(v + H) * S` in `B`. Such units have an origin of
/// their own, so they can be converted from and to, but neither scaled nor
/// combined with other units
pub struct Interval<B, S, H>(PhantomData<fn() -> (B, S, H)>);

impl<const ID: u32> Unit for BaseUnit<ID> {
    const TAG: UnitTag = UnitTag::Rational(Self::CANON);
}

impl<U: RationalUnit, S: ScaleFactor> Unit for Scaled<U, S> {
    const TAG: UnitTag = UnitTag::Rational(Self::CANON);
}

impl<U: RationalUnit, const P: i32> Unit for Pow<U, P> {
    const TAG: UnitTag = UnitTag::Rational(Self::CANON);
}

impl<const ID: u32> RationalUnit for BaseUnit<ID> {
    const CANON: RationalTag = RationalTag::base(ID);
}

impl<const N: u32> BaseDimension for BaseUnit<N> {
    const ID: u32 = N;
}

impl<U: RationalUnit, S: ScaleFactor> RationalUnit for Scaled<U, S> {
    const CANON: RationalTag = U::CANON.scaled(S::RATIO);
}

impl<U: RationalUnit, const P: i32> RationalUnit for Pow<U, P> {
    const CANON: RationalTag = U::CANON.pow(P);
}

impl<B: BaseDimension, S: ScaleFactor, H: ScaleFactor> Unit for Interval<B, S, H> {
    const TAG: UnitTag = UnitTag::Affine(AffineTag::new(B::ID, S::RATIO, H::RATIO));
}
