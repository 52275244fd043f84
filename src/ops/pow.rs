//! Power factories.
//!
//! Pow always produces a double result. Integer exponents use a fixed
//! special-case policy, applied identically whether the exponent is a
//! constant or a computed value:
//!
//! - exponent 0 -> 1 (including base 0)
//! - exponent 1 -> the base
//! - exponent 2 or 3 -> direct multiplication, skipping the transcendental
//!   call for the common cases
//! - negative exponent -> reciprocal of the positive-exponent result
//! - any other exponent -> the general power function

use crate::expr::Expression;
use crate::node::{BinaryConstExpr, BinaryExpr};
use crate::operator::{BinaryOperator, ObjectBinaryOperator};
use crate::scalar::{IntegerScalar, NumericScalar};

fn pos_int_pow(base: f64, exponent: u64) -> f64 {
    match exponent {
        0 => 1.0,
        1 => base,
        2 => base * base,
        3 => base * base * base,
        _ => base.powf(exponent as f64),
    }
}

pub(crate) fn int_pow(base: f64, exponent: i64) -> f64 {
    if exponent < 0 {
        1.0 / pos_int_pow(base, exponent.unsigned_abs())
    } else {
        pos_int_pow(base, exponent as u64)
    }
}

/// Base computation raised to an integer-exponent computation, as `f64`.
pub fn pow<T, L, R>(base: L, exponent: R) -> BinaryExpr<L, R, L::Output, R::Output, f64>
where
    L: Expression<T>,
    R: Expression<T>,
    L::Output: NumericScalar,
    R::Output: IntegerScalar,
{
    BinaryExpr::new(
        BinaryOperator::Pow,
        base,
        exponent,
        |a: L::Output, e: R::Output| int_pow(a.as_f64(), e.as_i64()),
    )
}

/// Base computation raised to a constant integer exponent, as `f64`.
pub fn pow_const<T, L, C>(base: L, exponent: C) -> BinaryConstExpr<L, L::Output, C, f64>
where
    L: Expression<T>,
    L::Output: NumericScalar,
    C: IntegerScalar,
{
    BinaryConstExpr::new(
        ObjectBinaryOperator::Pow,
        base,
        exponent,
        |a: L::Output, e: C| int_pow(a.as_f64(), e.as_i64()),
    )
}

/// Base computation raised to a floating exponent computation: always the
/// general power function.
pub fn pow_f<T, L, R>(base: L, exponent: R) -> BinaryExpr<L, R, L::Output, R::Output, f64>
where
    L: Expression<T>,
    R: Expression<T>,
    L::Output: NumericScalar,
    R::Output: NumericScalar,
{
    BinaryExpr::new(
        BinaryOperator::Pow,
        base,
        exponent,
        |a: L::Output, e: R::Output| a.as_f64().powf(e.as_f64()),
    )
}

/// Base computation raised to a constant floating exponent.
pub fn pow_f_const<T, L, C>(base: L, exponent: C) -> BinaryConstExpr<L, L::Output, C, f64>
where
    L: Expression<T>,
    L::Output: NumericScalar,
    C: NumericScalar,
{
    BinaryConstExpr::new(
        ObjectBinaryOperator::Pow,
        base,
        exponent,
        |a: L::Output, e: C| a.as_f64().powf(e.as_f64()),
    )
}
