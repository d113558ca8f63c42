use super::{RationalUnit, Unit};
use crate::tag::{RationalTag, UnitTag};
use core::marker::PhantomData;

/// A product of rational units, given as a tuple of terms. Each term is
/// itself a rational unit, use [`Pow`][super::Pow] to give it an exponent:
/// `Derived<(Kilogram, Metre, Pow<Second, -2>)>` is the newton. Terms may be
/// derived units themselves, and their order is irrelevant
pub struct Derived<L>(PhantomData<fn() -> L>);

/// The unit of pure numbers
pub type Dimensionless = Derived<()>;

/// Tuples of up to twelve [`RationalUnit`]s
pub trait Terms {
    /// Canonical form of the product of all the terms
    const CANON: RationalTag;
}

impl<L: Terms> RationalUnit for Derived<L> {
    const CANON: RationalTag = L::CANON;
}

impl<L: Terms> Unit for Derived<L> {
    const TAG: UnitTag = UnitTag::Rational(L::CANON);
}

macro_rules! tuple_terms {
    () => {
        impl Terms for () {
            const CANON: RationalTag = RationalTag::DIMENSIONLESS;
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: RationalUnit $(, $tail: RationalUnit)*> Terms for ($head, $($tail,)*) {
            const CANON: RationalTag =
                RationalTag::term(<$head as RationalUnit>::CANON, 1, <($($tail,)*) as Terms>::CANON);
        }
        tuple_terms!($($tail),*);
    };
}

tuple_terms!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
