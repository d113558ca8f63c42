//! Canonical unit tags, and the canonicalization procedure producing them
//!
//! Whatever way a unit is written down, it reduces to exactly one
//! [`UnitTag`]. For rational units this is a [`RationalTag`]: a single scale
//! factor relative to the base units, plus the list of base units it involves
//! with their (non-zero) exponents, sorted by base tag and without duplicates.
//! Deciding whether two quantities can be converted into one another then
//! amounts to comparing these lists. Interval (affine) units are not reduced:
//! their [`AffineTag`] just carries their own data.
//!
//! All of this runs in constant evaluation: unit types expose their tag as an
//! associated `const` (see [`Unit::TAG`][crate::Unit::TAG]).

use crate::{
    power_list::{Combine, Power, PowerList, PowerMap, Prune},
    ratio::Ratio,
};
use core::fmt;

/// The normal form of a rational unit (any combination of base, scaled and
/// derived units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalTag {
    scale: Ratio,
    powers: PowerList,
}

impl RationalTag {
    /// No base unit, and a scale of one
    pub const DIMENSIONLESS: RationalTag = RationalTag {
        scale: Ratio::ONE,
        powers: PowerList::EMPTY,
    };

    /// The tag of a base unit: itself to the power one
    pub const fn base(tag: u32) -> Self {
        RationalTag {
            scale: Ratio::ONE,
            powers: PowerList::single(Power::new(tag, 1)),
        }
    }

    /// Normalize an arbitrary list of powers (unsorted, possibly with
    /// duplicate or zero entries) attached to some scale
    pub const fn from_powers(scale: Ratio, powers: &[Power]) -> Self {
        let mut res = RationalTag::DIMENSIONLESS.scaled(scale);
        let mut i = 0;
        while i < powers.len() {
            let single = RationalTag {
                scale: Ratio::ONE,
                powers: PowerList::single(powers[i]),
            };
            res = res.product(single);
            i += 1;
        }
        res
    }

    pub const fn scale(&self) -> Ratio {
        self.scale
    }

    pub const fn powers(&self) -> PowerList {
        self.powers
    }

    /// The tag of a unit worth `s` times `self`
    pub const fn scaled(self, s: Ratio) -> Self {
        RationalTag {
            scale: s.mul(self.scale),
            powers: self.powers,
        }
    }

    /// Raise the whole unit to the power `p`: every exponent gets multiplied
    /// by `p`, and the scale raised to `p`
    pub const fn pow(self, p: i32) -> Self {
        RationalTag {
            scale: self.scale.pow(p),
            powers: self
                .powers
                .map(PowerMap::RaiseBy(p))
                .sort()
                .remove_if(Prune::ZeroExponent),
        }
    }

    /// Product of two canonical tags: exponents of common base units add up,
    /// and base units whose exponents cancel out disappear
    pub const fn product(self, rhs: RationalTag) -> Self {
        RationalTag {
            scale: self.scale.mul(rhs.scale),
            powers: self
                .powers
                .merge_with(Combine::AddExponents, rhs.powers)
                .remove_if(Prune::ZeroExponent),
        }
    }

    /// Quotient of two canonical tags
    pub const fn quotient(self, rhs: RationalTag) -> Self {
        RationalTag {
            scale: self.scale.div(rhs.scale),
            powers: self
                .powers
                .merge_with(Combine::SubtractExponents, rhs.powers)
                .remove_if(Prune::ZeroExponent),
        }
    }

    /// One step of the canonicalization of a derived unit: `inner` raised to
    /// `p`, times the (already canonical) rest of the terms
    pub const fn term(inner: RationalTag, p: i32, rest: RationalTag) -> Self {
        inner.pow(p).product(rest)
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.powers.is_empty()
    }

    /// Whether both tags are made of the same base units with the same
    /// exponents, their scales being free to differ
    pub const fn same_dimension(&self, other: &RationalTag) -> bool {
        self.powers.eq(&other.powers)
    }

    /// Exact equality, usable in const context
    pub const fn eq(&self, other: &RationalTag) -> bool {
        self.scale.eq(&other.scale) && self.same_dimension(other)
    }

    /// `Some(b)` if this tag is base unit `b` to the power one, possibly scaled
    pub const fn single_base(&self) -> Option<u32> {
        match self.powers.get(0) {
            Some(p) if self.powers.len() == 1 && p.exp == 1 => Some(p.base),
            _ => None,
        }
    }
}

/// The tag of an interval unit, `base = (value + shift) * scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineTag {
    base: u32,
    scale: Ratio,
    shift: Ratio,
}

impl AffineTag {
    pub const fn new(base: u32, scale: Ratio, shift: Ratio) -> Self {
        assert!(!scale.is_zero(), "interval unit scale must be non-zero");
        AffineTag { base, scale, shift }
    }

    pub const fn base(&self) -> u32 {
        self.base
    }

    pub const fn scale(&self) -> Ratio {
        self.scale
    }

    pub const fn shift(&self) -> Ratio {
        self.shift
    }
}

/// The canonical tag of any unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitTag {
    Rational(RationalTag),
    Affine(AffineTag),
}

impl UnitTag {
    /// Whether quantities expressed with these two tags can be converted into
    /// one another:
    ///
    /// - two rational tags need the same base units with the same exponents
    /// - an affine tag and a rational one need the rational one to be the
    ///   affine unit's base, to the power one
    /// - two affine tags need the same base
    pub const fn convertible_with(&self, other: &UnitTag) -> bool {
        match (self, other) {
            (UnitTag::Rational(a), UnitTag::Rational(b)) => a.same_dimension(b),
            (UnitTag::Affine(a), UnitTag::Rational(r))
            | (UnitTag::Rational(r), UnitTag::Affine(a)) => match r.single_base() {
                Some(b) => b == a.base,
                None => false,
            },
            (UnitTag::Affine(a), UnitTag::Affine(b)) => a.base == b.base,
        }
    }

    pub const fn is_affine(&self) -> bool {
        matches!(self, UnitTag::Affine(_))
    }

    /// `(scale, shift)` such that `base = (value + shift) * scale`. Rational
    /// units have no shift
    pub const fn scale_and_shift(&self) -> (Ratio, Ratio) {
        match self {
            UnitTag::Rational(r) => (r.scale, Ratio::ZERO),
            UnitTag::Affine(a) => (a.scale, a.shift),
        }
    }

    /// Exact equality, usable in const context
    pub const fn eq(&self, other: &UnitTag) -> bool {
        match (self, other) {
            (UnitTag::Rational(a), UnitTag::Rational(b)) => a.eq(b),
            (UnitTag::Affine(a), UnitTag::Affine(b)) => {
                a.base == b.base && a.scale.eq(&b.scale) && a.shift.eq(&b.shift)
            }
            _ => false,
        }
    }
}

fn write_powers(f: &mut fmt::Formatter<'_>, powers: &PowerList) -> fmt::Result {
    for (i, p) in powers.iter().enumerate() {
        if i > 0 {
            f.write_str("·")?;
        }
        if p.exp == 1 {
            write!(f, "u{}", p.base)?;
        } else {
            write!(f, "u{}^{}", p.base, p.exp)?;
        }
    }
    Ok(())
}

/// Base units are written `u<tag>`, eg. `1000·u1/u0` for kilometres per second
/// with metres tagged 1 and seconds 0
impl fmt::Display for RationalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.powers.remove_if(Prune::NegativeExponent);
        let den = self
            .powers
            .remove_if(Prune::PositiveExponent)
            .map(PowerMap::Invert);
        match (self.scale.is_one(), num.is_empty()) {
            (true, true) => f.write_str("1")?,
            (true, false) => write_powers(f, &num)?,
            (false, true) => write!(f, "{}", self.scale)?,
            (false, false) => {
                write!(f, "{}·", self.scale)?;
                write_powers(f, &num)?;
            }
        }
        if !den.is_empty() {
            f.write_str("/")?;
            if den.len() > 1 {
                f.write_str("(")?;
                write_powers(f, &den)?;
                f.write_str(")")?;
            } else {
                write_powers(f, &den)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for AffineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(u{} + {})·{}", self.base, self.shift, self.scale)
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitTag::Rational(r) => fmt::Display::fmt(r, f),
            UnitTag::Affine(a) => fmt::Display::fmt(a, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_macros::*;

    const S: u32 = 0;
    const M: u32 = 1;
    const KG: u32 = 2;

    fn t(scale: (i128, i128), ps: &[(u32, i32)]) -> RationalTag {
        let mut powers = std::vec::Vec::new();
        for &(b, e) in ps {
            powers.push(Power::new(b, e));
        }
        RationalTag::from_powers(Ratio::new(scale.0, scale.1), &powers)
    }

    simple_eqs! {
        base_tag: RationalTag::base(M) => t((1, 1), &[(M, 1)]),
        scaled_tag: RationalTag::base(M).scaled(Ratio::integer(1000)).scale() => Ratio::integer(1000),
        pow_sorts_and_scales: t((1000, 1), &[(M, 1), (S, -1)]).pow(2) => t((1_000_000, 1), &[(S, -2), (M, 2)]),
        pow_zero: t((7, 3), &[(M, 1)]).pow(0) => RationalTag::DIMENSIONLESS,
        product_merges: RationalTag::base(M).product(RationalTag::base(M)) => t((1, 1), &[(M, 2)]),
        quotient_cancels: RationalTag::base(M).quotient(RationalTag::base(M)) => RationalTag::DIMENSIONLESS,
        from_powers_merges: t((1, 1), &[(KG, 1), (M, 1), (S, -1), (M, 1), (S, -1)])
            => t((1, 1), &[(S, -2), (M, 2), (KG, 1)]),
        single_base: t((1, 100), &[(M, 1)]).single_base() => Some(M),
        no_single_base: t((1, 1), &[(M, 2)]).single_base() => None,
        display_velocity: format!("{}", t((1000, 1), &[(M, 1), (S, -1)])) => "1000·u1/u0",
        display_joule: format!("{}", t((1, 1), &[(KG, 1), (M, 2), (S, -2)])) => "u1^2·u2/u0^2",
        display_hertz: format!("{}", t((1, 1), &[(S, -1)])) => "1/u0",
        display_dimensionless: format!("{}", RationalTag::DIMENSIONLESS) => "1",
        display_two_denominators: format!("{}", t((1, 1), &[(S, -1), (KG, -1)])) => "1/(u0·u2)",
        display_affine: format!("{}", UnitTag::Affine(AffineTag::new(3, Ratio::new(5, 9), Ratio::new(45967, 100))))
            => "(u3 + 45967/100)·5/9"
    }

    #[test]
    fn canonical_form_is_idempotent() {
        let tag = t((3, 7), &[(KG, 1), (S, -2), (M, 3), (S, 1)]);
        assert!(tag.powers().is_strictly_sorted());
        let again = RationalTag::from_powers(tag.scale(), tag.powers().as_slice());
        assert_eq!(again, tag);
    }

    #[test]
    fn inverse_cancels() {
        let a = t((1000, 3), &[(M, 1), (S, -2)]);
        assert_eq!(a.product(a.pow(-1)), RationalTag::DIMENSIONLESS);
    }

    #[test]
    fn product_is_commutative_and_associative() {
        let a = t((1000, 1), &[(M, 1)]);
        let b = t((1, 60), &[(S, -1)]);
        let c = t((1, 1), &[(KG, 1), (M, -2)]);
        let abc = a.product(b).product(c);
        assert_eq!(abc, b.product(c).product(a));
        assert_eq!(abc, a.product(b.product(c)));
        assert_eq!(abc, c.product(a).product(b));
    }

    #[test]
    fn term_follows_exponent() {
        let km = RationalTag::base(M).scaled(Ratio::integer(1000));
        let per_hour = RationalTag::base(S).scaled(Ratio::integer(3600)).pow(-1);
        let kmh = RationalTag::term(km, 1, per_hour);
        assert_eq!(kmh.scale(), Ratio::new(5, 18));
        assert_eq!(kmh, t((5, 18), &[(S, -1), (M, 1)]));
    }

    #[test]
    fn convertibility() {
        let m = UnitTag::Rational(RationalTag::base(M));
        let km = UnitTag::Rational(RationalTag::base(M).scaled(Ratio::integer(1000)));
        let s = UnitTag::Rational(RationalTag::base(S));
        let kelvin = UnitTag::Rational(RationalTag::base(3));
        let kelvin_sq = UnitTag::Rational(RationalTag::base(3).pow(2));
        let celsius = UnitTag::Affine(AffineTag::new(3, Ratio::ONE, Ratio::new(27315, 100)));
        let fahrenheit = UnitTag::Affine(AffineTag::new(3, Ratio::new(5, 9), Ratio::new(45967, 100)));
        let other_affine = UnitTag::Affine(AffineTag::new(4, Ratio::ONE, Ratio::ONE));

        assert!(m.convertible_with(&km));
        assert!(!m.convertible_with(&s));
        assert!(celsius.convertible_with(&kelvin));
        assert!(kelvin.convertible_with(&celsius));
        assert!(!celsius.convertible_with(&kelvin_sq));
        assert!(celsius.convertible_with(&fahrenheit));
        assert!(!celsius.convertible_with(&other_affine));
        assert!(!celsius.convertible_with(&m));
    }

    #[test]
    #[should_panic(expected = "must be non-zero")]
    fn zero_affine_scale_is_rejected() {
        let _ = AffineTag::new(3, Ratio::ZERO, Ratio::ONE);
    }
}
