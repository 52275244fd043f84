//! Negation factories: arithmetic negation for numerics, logical NOT for
//! booleans.

use crate::expr::{Expression, NullableExpression};
use crate::node::{NullableUnaryExpr, UnaryExpr};
use crate::operator::UnaryOperator;
use crate::scalar::NumericScalar;

/// Arithmetic negation of a numeric computation (wrapping for integers).
pub fn negate<T, E>(inner: E) -> UnaryExpr<E, E::Output, E::Output>
where
    E: Expression<T>,
    E::Output: NumericScalar,
{
    UnaryExpr::new(
        UnaryOperator::Negate,
        inner,
        <E::Output as NumericScalar>::num_neg,
    )
}

/// Logical NOT of a boolean computation.
pub fn negate_bool<T, E>(inner: E) -> UnaryExpr<E, bool, bool>
where
    E: Expression<T, Output = bool>,
{
    UnaryExpr::new(UnaryOperator::Negate, inner, |value: bool| !value)
}

/// Arithmetic negation over a nullable operand; absent stays absent.
pub fn negate_nullable<T, E>(inner: E) -> NullableUnaryExpr<E, E::Output, E::Output>
where
    E: NullableExpression<T>,
    E::Output: NumericScalar,
{
    NullableUnaryExpr::new(
        UnaryOperator::Negate,
        inner,
        <E::Output as NumericScalar>::num_neg,
    )
}

/// Logical NOT over a nullable boolean operand; absent stays absent.
pub fn negate_bool_nullable<T, E>(inner: E) -> NullableUnaryExpr<E, bool, bool>
where
    E: NullableExpression<T, Output = bool>,
{
    NullableUnaryExpr::new(UnaryOperator::Negate, inner, |value: bool| !value)
}
