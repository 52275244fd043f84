//! Scalar witness traits.
//!
//! The algebra is specialized per scalar kind without boxing by making every
//! node generic over the scalar types it produces and consumes. The traits
//! here are the witnesses that drive that monomorphization: [`Scalar`] ties a
//! Rust type to its [`ScalarKind`] tag, [`NumericScalar`] supplies the
//! arithmetic used by the operator families, [`Promote`] encodes binary
//! numeric promotion, and [`CastInto`] encodes the standard
//! narrowing/widening conversions.

use crate::types::ScalarKind;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::hash::{Hash, Hasher};

/// A type usable as a scalar result of a computation.
///
/// `hash_scalar` must agree with `PartialEq`: equal scalars hash identically.
/// Floats hash their bit pattern, which is consistent with the structural
/// equality of nodes holding them as constants.
pub trait Scalar: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const KIND: ScalarKind;

    fn hash_scalar<H: Hasher>(&self, state: &mut H);
}

macro_rules! scalar_hash_impl {
    ($($ty:ty => $kind:expr;)*) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = $kind;

                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state);
                }
            }
        )*
    };
}

scalar_hash_impl! {
    bool => ScalarKind::Bool;
    i8 => ScalarKind::Byte;
    i16 => ScalarKind::Short;
    i32 => ScalarKind::Int;
    i64 => ScalarKind::Long;
    char => ScalarKind::Char;
    String => ScalarKind::String;
    Decimal => ScalarKind::Decimal;
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        // Negative zero compares equal to zero, so both must hash alike.
        let normalized = if *self == 0.0 { 0.0f32 } else { *self };
        normalized.to_bits().hash(state);
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        let normalized = if *self == 0.0 { 0.0f64 } else { *self };
        normalized.to_bits().hash(state);
    }
}

/// Implement [`Scalar`] with kind `Enum` for one or more user enum types.
///
/// The enum must be `Clone + PartialEq + Eq + Hash + Debug + Send + Sync`.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Color { Red, Green, Blue }
///
/// streamexpr::scalar_enum!(Color);
/// ```
#[macro_export]
macro_rules! scalar_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::scalar::Scalar for $ty {
                const KIND: $crate::types::ScalarKind = $crate::types::ScalarKind::Enum;

                fn hash_scalar<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(self, state);
                }
            }
        )+
    };
}

/// A scalar that participates in arithmetic.
///
/// Integer operations wrap on overflow (two's complement); floats follow
/// IEEE-754 and propagate infinities/NaN as values. Decimal saturates at its
/// representable range so evaluation never panics.
pub trait NumericScalar: Scalar {
    fn num_add(self, rhs: Self) -> Self;
    fn num_sub(self, rhs: Self) -> Self;
    fn num_mul(self, rhs: Self) -> Self;
    fn num_neg(self) -> Self;
    fn num_abs(self) -> Self;

    /// -1, 0 or 1 as the narrowest integer type. Float NaN maps to 0.
    fn signum_i8(self) -> i8;

    fn as_f64(self) -> f64;
}

macro_rules! numeric_int_impl {
    ($($ty:ty),*) => {
        $(
            impl NumericScalar for $ty {
                fn num_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn num_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn num_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn num_neg(self) -> Self {
                    self.wrapping_neg()
                }

                fn num_abs(self) -> Self {
                    self.wrapping_abs()
                }

                fn signum_i8(self) -> i8 {
                    self.signum() as i8
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

numeric_int_impl!(i8, i16, i32, i64);

macro_rules! numeric_float_impl {
    ($($ty:ty),*) => {
        $(
            impl NumericScalar for $ty {
                fn num_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn num_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn num_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn num_neg(self) -> Self {
                    -self
                }

                fn num_abs(self) -> Self {
                    self.abs()
                }

                fn signum_i8(self) -> i8 {
                    if self > 0.0 {
                        1
                    } else if self < 0.0 {
                        -1
                    } else {
                        0
                    }
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

numeric_float_impl!(f32, f64);

impl NumericScalar for Decimal {
    fn num_add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    fn num_sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    fn num_mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    fn num_neg(self) -> Self {
        -self
    }

    fn num_abs(self) -> Self {
        self.abs()
    }

    fn signum_i8(self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// A fixed-width integer scalar, usable as a Pow exponent.
pub trait IntegerScalar: NumericScalar {
    fn as_i64(self) -> i64;
}

macro_rules! integer_impl {
    ($($ty:ty),*) => {
        $(
            impl IntegerScalar for $ty {
                fn as_i64(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

integer_impl!(i8, i16, i32, i64);

/// Binary numeric promotion between a left and a right operand kind.
///
/// Rules: anything with double widens to double, else anything with float
/// widens to float, else anything with long widens to long, else int
/// (byte/short/int all promote to int). Decimal only promotes with Decimal.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: NumericScalar;

    fn promote_left(self) -> Self::Output;
    fn promote_right(rhs: Rhs) -> Self::Output;
}

macro_rules! promote_impl {
    ($($l:ty, $r:ty => $out:ty;)*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $out;

                fn promote_left(self) -> $out {
                    self as $out
                }

                fn promote_right(rhs: $r) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote_impl! {
    // double wins
    f64, f64 => f64;
    f64, f32 => f64;
    f32, f64 => f64;
    f64, i64 => f64;
    i64, f64 => f64;
    f64, i32 => f64;
    i32, f64 => f64;
    f64, i16 => f64;
    i16, f64 => f64;
    f64, i8 => f64;
    i8, f64 => f64;
    // then float
    f32, f32 => f32;
    f32, i64 => f32;
    i64, f32 => f32;
    f32, i32 => f32;
    i32, f32 => f32;
    f32, i16 => f32;
    i16, f32 => f32;
    f32, i8 => f32;
    i8, f32 => f32;
    // then long
    i64, i64 => i64;
    i64, i32 => i64;
    i32, i64 => i64;
    i64, i16 => i64;
    i16, i64 => i64;
    i64, i8 => i64;
    i8, i64 => i64;
    // everything narrower promotes to int
    i32, i32 => i32;
    i32, i16 => i32;
    i16, i32 => i32;
    i32, i8 => i32;
    i8, i32 => i32;
    i16, i16 => i32;
    i16, i8 => i32;
    i8, i16 => i32;
    i8, i8 => i32;
}

impl Promote<Decimal> for Decimal {
    type Output = Decimal;

    fn promote_left(self) -> Decimal {
        self
    }

    fn promote_right(rhs: Decimal) -> Decimal {
        rhs
    }
}

/// Standard narrowing/widening conversion from one scalar kind to another.
///
/// Integer narrowing keeps the low-order bits (two's complement truncation,
/// `as` semantics); float to int saturates per Rust `as`; bool maps to 1/0;
/// char converts through its code point.
pub trait CastInto<Out: Scalar>: Scalar {
    fn cast_into(self) -> Out;
}

macro_rules! cast_as_impl {
    ($($src:ty => [$($dst:ty),*];)*) => {
        $($(
            impl CastInto<$dst> for $src {
                fn cast_into(self) -> $dst {
                    self as $dst
                }
            }
        )*)*
    };
}

cast_as_impl! {
    i8 => [i8, i16, i32, i64, f32, f64];
    i16 => [i8, i16, i32, i64, f32, f64];
    i32 => [i8, i16, i32, i64, f32, f64];
    i64 => [i8, i16, i32, i64, f32, f64];
    f32 => [i8, i16, i32, i64, f32, f64];
    f64 => [i8, i16, i32, i64, f32, f64];
    bool => [i8, i16, i32, i64];
    char => [i8, i16, i32, i64];
}

impl CastInto<f32> for bool {
    fn cast_into(self) -> f32 {
        self as i32 as f32
    }
}

impl CastInto<f64> for bool {
    fn cast_into(self) -> f64 {
        self as i32 as f64
    }
}

impl CastInto<f32> for char {
    fn cast_into(self) -> f32 {
        self as u32 as f32
    }
}

impl CastInto<f64> for char {
    fn cast_into(self) -> f64 {
        self as u32 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<S: Scalar>(value: &S) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_scalar(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_wrapping_integer_arithmetic() {
        assert_eq!(i32::MAX.num_add(1), i32::MIN);
        assert_eq!(i8::MIN.num_neg(), i8::MIN);
        assert_eq!(i8::MIN.num_abs(), i8::MIN);
        assert_eq!(100i8.num_mul(3), 44); // 300 mod 256
    }

    #[test]
    fn test_float_arithmetic_follows_ieee() {
        assert!(1.0f64.num_mul(f64::INFINITY).is_infinite());
        assert!(f64::NAN.num_add(1.0).is_nan());
        assert_eq!((-3.5f64).num_abs(), 3.5);
    }

    #[test]
    fn test_signum() {
        assert_eq!((-42i32).signum_i8(), -1);
        assert_eq!(0i64.signum_i8(), 0);
        assert_eq!(7i8.signum_i8(), 1);
        assert_eq!(0.0f64.signum_i8(), 0);
        assert_eq!((-0.0f64).signum_i8(), 0);
        assert_eq!(f64::NAN.signum_i8(), 0);
        assert_eq!(Decimal::new(-5, 0).signum_i8(), -1);
        assert_eq!(Decimal::ZERO.signum_i8(), 0);
    }

    #[test]
    fn test_promotion_output() {
        fn promoted<L: Promote<R>, R: Scalar>(l: L, r: R) -> L::Output {
            L::promote_left(l).num_add(L::promote_right(r))
        }

        let x: i32 = promoted(1i16, 2i32);
        assert_eq!(x, 3);
        let y: i32 = promoted(1i8, 2i8);
        assert_eq!(y, 3);
        let z: i64 = promoted(1i32, 2i64);
        assert_eq!(z, 3);
        let w: f64 = promoted(1i64, 2.5f64);
        assert_eq!(w, 3.5);
        let v: f32 = promoted(1.5f32, 2i32);
        assert_eq!(v, 3.5);
    }

    #[test]
    fn test_cast_truncation() {
        let narrowed: i8 = 0x1_23i32.cast_into();
        assert_eq!(narrowed, 0x23);
        let wrapped: i8 = 200i32.cast_into();
        assert_eq!(wrapped, -56);
        let widened: i64 = (-5i8).cast_into();
        assert_eq!(widened, -5);
        let truthy: i32 = true.cast_into();
        assert_eq!(truthy, 1);
        let falsy: f64 = false.cast_into();
        assert_eq!(falsy, 0.0);
        let code_point: i32 = 'A'.cast_into();
        assert_eq!(code_point, 65);
        let code_point_f: f64 = 'A'.cast_into();
        assert_eq!(code_point_f, 65.0);
    }

    #[test]
    fn test_float_hash_agrees_with_equality() {
        assert_eq!(hash_of(&1.5f64), hash_of(&1.5f64));
        assert_ne!(hash_of(&1.5f64), hash_of(&2.5f64));
        assert_eq!(hash_of(&0.0f64), hash_of(&-0.0f64));
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Suit {
        Hearts,
        Spades,
    }

    crate::scalar_enum!(Suit);

    #[test]
    fn test_enum_scalar_kind() {
        assert_eq!(Suit::KIND, ScalarKind::Enum);
        assert_eq!(hash_of(&Suit::Hearts), hash_of(&Suit::Hearts));
        assert_ne!(Suit::Hearts, Suit::Spades);
    }
}
