//! Exact rational scale factors, usable in constant evaluation
//!
//! A [`Ratio`] is always kept reduced to lowest terms with a strictly positive
//! denominator, so two ratios are equal iff their fields are. Every operation
//! is a `const fn`: scale factors of units are computed by the compiler, and an
//! invalid factor (zero denominator, inverting zero, `i128` overflow) is a
//! compile error rather than a runtime one.
//!
//! Type-level ratios are written [`Rat<N, D>`] and exposed through the
//! [`ScaleFactor`] trait, which is what [`Scaled`][crate::Scaled] and
//! [`Interval`][crate::Interval] consume.

use core::fmt;
use num_integer::Integer as _;

/// An exact fraction `num / den`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`
pub(crate) const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    // Only i128::MIN has no positive counterpart
    assert!(a <= i128::MAX as u128, "scale factor overflows i128");
    a as i128
}

const fn checked(x: Option<i128>) -> i128 {
    match x {
        Some(x) => x,
        None => panic!("scale factor overflows i128"),
    }
}

impl Ratio {
    /// The identity factor `1/1`
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// The zero factor. Valid as a shift, never as a scale
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };

    /// Build a ratio and reduce it. Panics (which is a compile error in const
    /// context) when `den == 0`
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "zero denominator in scale factor");
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = checked(num.checked_neg());
            den = checked(den.checked_neg());
        }
        Ratio { num, den }
    }

    /// A whole number
    pub const fn integer(n: i128) -> Self {
        Ratio { num: n, den: 1 }
    }

    pub const fn num(&self) -> i128 {
        self.num
    }

    pub const fn den(&self) -> i128 {
        self.den
    }

    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `self * rhs`. Operands are cross-reduced first, so the product only
    /// overflows when the reduced result itself does not fit
    pub const fn mul(self, rhs: Ratio) -> Ratio {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        // Denominators are non-zero, so neither gcd is
        Ratio::new(
            checked((self.num / g1).checked_mul(rhs.num / g2)),
            checked((self.den / g2).checked_mul(rhs.den / g1)),
        )
    }

    /// `1 / self`. Panics when `self` is zero
    pub const fn recip(self) -> Ratio {
        assert!(self.num != 0, "cannot invert a zero scale factor");
        Ratio::new(self.den, self.num)
    }

    /// `self / rhs`
    pub const fn div(self, rhs: Ratio) -> Ratio {
        self.mul(rhs.recip())
    }

    /// `self ^ n`. A negative `n` inverts first, `n == 0` yields [`Ratio::ONE`]
    pub const fn pow(self, n: i32) -> Ratio {
        let base = if n < 0 { self.recip() } else { self };
        let mut exp = n.unsigned_abs();
        let mut acc = Ratio::ONE;
        while exp > 0 {
            acc = acc.mul(base);
            exp -= 1;
        }
        acc
    }

    /// `-self`
    pub const fn neg(self) -> Ratio {
        Ratio {
            num: checked(self.num.checked_neg()),
            den: self.den,
        }
    }

    /// Structural equality, usable in const context
    pub const fn eq(&self, other: &Ratio) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// `self < other`
    pub const fn lt(&self, other: &Ratio) -> bool {
        // Denominators are positive so cross multiplication keeps the order
        checked(self.num.checked_mul(other.den)) < checked(other.num.checked_mul(self.den))
    }

    /// `self <= other`
    pub const fn le(&self, other: &Ratio) -> bool {
        !other.lt(self)
    }

    /// Approximate value, for display and floating-point representations
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// The smallest positive denominator both ratios can be written over
    pub fn common_denominator(&self, other: &Ratio) -> i128 {
        self.den.lcm(&other.den)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl core::ops::Mul for Ratio {
    type Output = Ratio;
    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::mul(self, rhs)
    }
}

impl core::ops::Div for Ratio {
    type Output = Ratio;
    fn div(self, rhs: Ratio) -> Ratio {
        Ratio::div(self, rhs)
    }
}

impl core::ops::Neg for Ratio {
    type Output = Ratio;
    fn neg(self) -> Ratio {
        Ratio::neg(self)
    }
}

impl num_traits::One for Ratio {
    fn one() -> Self {
        Ratio::ONE
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        if Ratio::lt(self, other) {
            core::cmp::Ordering::Less
        } else if Ratio::eq(self, other) {
            core::cmp::Ordering::Equal
        } else {
            core::cmp::Ordering::Greater
        }
    }
}

/// A ratio known at the type level
pub trait ScaleFactor {
    const RATIO: Ratio;
}

/// The type-level ratio `N / D`. `Rat<1000>` is a thousand, `Rat<1, 1000>` a
/// thousandth
pub struct Rat<const N: i128, const D: i128 = 1>;

impl<const N: i128, const D: i128> ScaleFactor for Rat<N, D> {
    const RATIO: Ratio = Ratio::new(N, D);
}

macro_rules! si_prefixes {
    ($($name:ident $num:literal / $den:literal),* $(,)?) => {
        $(
            #[doc = concat!("SI prefix factor ", stringify!($num), "/", stringify!($den))]
            pub type $name = Rat<$num, $den>;
        )*
    };
}

si_prefixes! {
    Exa 1_000_000_000_000_000_000 / 1,
    Peta 1_000_000_000_000_000 / 1,
    Tera 1_000_000_000_000 / 1,
    Giga 1_000_000_000 / 1,
    Mega 1_000_000 / 1,
    Kilo 1_000 / 1,
    Hecto 100 / 1,
    Deca 10 / 1,
    Deci 1 / 10,
    Centi 1 / 100,
    Milli 1 / 1_000,
    Micro 1 / 1_000_000,
    Nano 1 / 1_000_000_000,
    Pico 1 / 1_000_000_000_000,
    Femto 1 / 1_000_000_000_000_000,
    Atto 1 / 1_000_000_000_000_000_000,
}
