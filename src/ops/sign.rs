//! Sign factories: -1, 0 or 1 as the narrowest integer type.

use crate::expr::{Expression, NullableExpression};
use crate::node::{NullableUnaryExpr, UnaryExpr};
use crate::operator::UnaryOperator;
use crate::scalar::NumericScalar;

/// Sign of a numeric computation as an `i8`: -1 for negative, 0 for zero
/// (and float NaN), 1 for positive.
pub fn sign<T, E>(inner: E) -> UnaryExpr<E, E::Output, i8>
where
    E: Expression<T>,
    E::Output: NumericScalar,
{
    UnaryExpr::new(
        UnaryOperator::Sign,
        inner,
        <E::Output as NumericScalar>::signum_i8,
    )
}

/// Sign over a nullable operand; absent stays absent.
pub fn sign_nullable<T, E>(inner: E) -> NullableUnaryExpr<E, E::Output, i8>
where
    E: NullableExpression<T>,
    E::Output: NumericScalar,
{
    NullableUnaryExpr::new(
        UnaryOperator::Sign,
        inner,
        <E::Output as NumericScalar>::signum_i8,
    )
}
