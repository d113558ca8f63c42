mod base_types;
mod derived;

pub use base_types::{BaseUnit, Interval, Pow, Scaled};
pub use derived::{Derived, Dimensionless, Terms};
use crate::{
    quantity::Quantity,
    tag::{RationalTag, UnitTag},
};

/// Anything quantities can be expressed in. The canonical tag is computed
/// during constant evaluation, and is all the library ever looks at: two unit
/// types with equal tags are the same unit, however they were written
pub trait Unit {
    /// The canonical tag of the unit
    const TAG: UnitTag;

    /// Wrap a raw value expressed in this unit
    fn quantity<T>(value: T) -> Quantity<T, Self>
    where
        Self: Sized,
    {
        Quantity::new(value)
    }
}

/// A unit without any offset, which can therefore be scaled, raised to a power
/// and combined with others. Every [`Unit`] but [`Interval`] is one
pub trait RationalUnit: Unit {
    const CANON: RationalTag;
}

/// A [`BaseUnit`], seen as the reference an [`Interval`] unit is built on
pub trait BaseDimension: RationalUnit {
    const ID: u32;
}

/// Panics (at compile time when used in a `const`) if two tags of `tags` are
/// equal. Used by [`base_units!`][crate::base_units]
pub const fn assert_distinct_tags(tags: &[u32]) {
    let mut i = 0;
    while i < tags.len() {
        let mut j = i + 1;
        while j < tags.len() {
            assert!(tags[i] != tags[j], "duplicate base unit tag");
            j += 1;
        }
        i += 1;
    }
}

/// Declare a set of base units, as aliases of [`BaseUnit`], and check at
/// compile time that their tags are pairwise distinct
///
/// ```
/// dimal::base_units! {
///     /// Time
///     pub Tick = 0;
///     pub Cell = 1;
/// }
///
/// use dimal::Unit;
/// assert_eq!(Tick::quantity(3).get(), 3);
/// ```
///
/// ```compile_fail
/// dimal::base_units! {
///     pub Tick = 0;
///     pub Cell = 0;
/// }
/// ```
#[macro_export]
macro_rules! base_units {
    ($($(#[$meta:meta])* $vis:vis $name:ident = $tag:literal;)+) => {
        $(
            $(#[$meta])*
            $vis type $name = $crate::BaseUnit<$tag>;
        )+
        const _: () = $crate::assert_distinct_tags(&[$($tag),+]);
    };
}
