//! Division factories.
//!
//! Division always produces a double result regardless of the input kinds:
//! truncating integer division is not the intended semantic for derived
//! fields. Division by zero follows IEEE-754 (infinity or NaN), it is not
//! intercepted.

use crate::expr::Expression;
use crate::node::{BinaryConstExpr, BinaryExpr};
use crate::operator::{BinaryOperator, ObjectBinaryOperator};
use crate::scalar::NumericScalar;

/// Quotient of two numeric computations as `f64`.
pub fn divide<T, L, R>(left: L, right: R) -> BinaryExpr<L, R, L::Output, R::Output, f64>
where
    L: Expression<T>,
    R: Expression<T>,
    L::Output: NumericScalar,
    R::Output: NumericScalar,
{
    BinaryExpr::new(
        BinaryOperator::Divide,
        left,
        right,
        |a: L::Output, b: R::Output| a.as_f64() / b.as_f64(),
    )
}

/// Quotient of a numeric computation and a literal constant as `f64`.
pub fn divide_const<T, L, C>(left: L, constant: C) -> BinaryConstExpr<L, L::Output, C, f64>
where
    L: Expression<T>,
    L::Output: NumericScalar,
    C: NumericScalar,
{
    BinaryConstExpr::new(
        ObjectBinaryOperator::Divide,
        left,
        constant,
        |a: L::Output, c: C| a.as_f64() / c.as_f64(),
    )
}
