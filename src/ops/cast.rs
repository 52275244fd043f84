//! Cast factories between primitive kinds.
//!
//! Conversions follow Rust `as` semantics: integer narrowing keeps the
//! low-order bits, float to int saturates, bool maps to 1/0, char converts
//! through its code point.

use crate::expr::{Expression, NullableExpression};
use crate::node::{NullableUnaryExpr, UnaryExpr};
use crate::operator::UnaryOperator;
use crate::scalar::{CastInto, Scalar};

/// Cast a computation to another primitive kind:
/// `cast::<i64, _, _>(to_int(...))`.
pub fn cast<Out, T, E>(inner: E) -> UnaryExpr<E, E::Output, Out>
where
    E: Expression<T>,
    E::Output: CastInto<Out>,
    Out: Scalar,
{
    UnaryExpr::new(
        UnaryOperator::Cast,
        inner,
        <E::Output as CastInto<Out>>::cast_into,
    )
}

/// Cast over a nullable operand; absent stays absent.
pub fn cast_nullable<Out, T, E>(inner: E) -> NullableUnaryExpr<E, E::Output, Out>
where
    E: NullableExpression<T>,
    E::Output: CastInto<Out>,
    Out: Scalar,
{
    NullableUnaryExpr::new(
        UnaryOperator::Cast,
        inner,
        <E::Output as CastInto<Out>>::cast_into,
    )
}
