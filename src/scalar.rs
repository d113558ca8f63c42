//! Numeric representations quantities can be stored in
//!
//! Converting between units means multiplying by an exact [`Ratio`] and, for
//! interval units, shifting by another one. [`Scalar`] is how a representation
//! does that. [`Promote`] decides which representation the product or quotient
//! of two quantities is stored in.

use crate::ratio::Ratio;

/// A numeric type quantities can be converted in
pub trait Scalar: Copy {
    /// `self * factor`
    fn rescale(self, factor: Ratio) -> Self;
    /// `self + shift`
    fn offset(self, shift: Ratio) -> Self;

    /// `(self + shift_from) * factor - shift_to`, the conversion from or to an
    /// interval unit
    fn affine(self, shift_from: Ratio, factor: Ratio, shift_to: Ratio) -> Self {
        self.offset(shift_from).rescale(factor).offset(shift_to.neg())
    }
}

fn checked(x: Option<i128>) -> i128 {
    match x {
        Some(x) => x,
        None => panic!("unit conversion overflows i128"),
    }
}

fn rescale_i128(x: i128, factor: Ratio) -> i128 {
    checked(x.checked_mul(factor.num())) / factor.den()
}

fn offset_i128(x: i128, shift: Ratio) -> i128 {
    checked(checked(x.checked_mul(shift.den())).checked_add(shift.num())) / shift.den()
}

/// Evaluated as a single exact fraction, so that only the final division
/// truncates
fn affine_i128(x: i128, shift_from: Ratio, factor: Ratio, shift_to: Ratio) -> i128 {
    let shifted = checked(checked(x.checked_mul(shift_from.den())).checked_add(shift_from.num()));
    let scaled = Ratio::new(shifted, shift_from.den()).mul(factor);
    let den = scaled.common_denominator(&shift_to);
    let lhs = checked(scaled.num().checked_mul(den / scaled.den()));
    let rhs = checked(shift_to.num().checked_mul(den / shift_to.den()));
    checked(lhs.checked_sub(rhs)) / den
}

macro_rules! float_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn rescale(self, factor: Ratio) -> Self {
                    (self as f64 * factor.num() as f64 / factor.den() as f64) as $t
                }

                #[inline]
                fn offset(self, shift: Ratio) -> Self {
                    (self as f64 + shift.num() as f64 / shift.den() as f64) as $t
                }
            }
        )+
    };
}

/// Integers are converted through `i128` and truncated toward zero, like
/// integer division. An `i128` overflow of the intermediate values panics,
/// results out of the range of the representation wrap around as `as` casts
/// do
macro_rules! int_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn rescale(self, factor: Ratio) -> Self {
                    rescale_i128(self as i128, factor) as $t
                }

                #[inline]
                fn offset(self, shift: Ratio) -> Self {
                    offset_i128(self as i128, shift) as $t
                }

                #[inline]
                fn affine(self, shift_from: Ratio, factor: Ratio, shift_to: Ratio) -> Self {
                    affine_i128(self as i128, shift_from, factor, shift_to) as $t
                }
            }
        )+
    };
}

float_scalar!(f32, f64);
int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// The representation used for the result of an operation between a `Self`
/// and an `Rhs`
pub trait Promote<Rhs> {
    type Output;
    fn promote(self) -> Self::Output;
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

macro_rules! promote_self {
    ($($t:ty),+) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;
                #[inline]
                fn promote(self) -> $t {
                    self
                }
                #[inline]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )+
    };
}

/// Both `a op b` and `b op a` are stored as `out`
macro_rules! promote_pairs {
    ($($a:ty, $b:ty => $out:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

promote_self!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

promote_pairs! {
    f32, f64 => f64;

    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u8, i128 => i128;
    u16, i32 => i32;
    u16, i64 => i64;
    u16, i128 => i128;
    u32, i64 => i64;
    u32, i128 => i128;
    u64, i128 => i128;

    i8, f32 => f32;
    i16, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    i32, f32 => f64;
    i64, f32 => f64;
    i128, f32 => f64;
    u32, f32 => f64;
    u64, f32 => f64;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    i128, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
}
