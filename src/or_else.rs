//! The bridge from nullable to non-nullable computations.
//!
//! A nullable computation cannot participate in operations that demand a
//! value (arithmetic, pattern matching). [`or_else`] substitutes a default
//! when the value is absent; [`or_else_throw`] surfaces the absence as an
//! [`ExpressionError::AbsentValue`] instead.

use crate::error::{ExpressionError, ExpressionResult};
use crate::expr::{Expression, NullableExpression};
use crate::scalar::Scalar;
use std::hash::{Hash, Hasher};

/// Non-nullable view of a nullable computation with a default value.
///
/// Equality: inner computation + default value.
#[derive(Debug, Clone, PartialEq)]
pub struct OrElseExpr<E, V> {
    inner: E,
    default: V,
}

impl<E, V> OrElseExpr<E, V> {
    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn default_value(&self) -> &V {
        &self.default
    }
}

impl<E: Eq, V: Eq> Eq for OrElseExpr<E, V> {}

impl<E: Hash, V: Scalar> Hash for OrElseExpr<E, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
        self.default.hash_scalar(state);
    }
}

impl<T, E, V> Expression<T> for OrElseExpr<E, V>
where
    E: NullableExpression<T, Output = V>,
    V: Scalar,
{
    type Output = V;

    fn eval(&self, input: &T) -> ExpressionResult<V> {
        Ok(self
            .inner
            .eval(input)?
            .unwrap_or_else(|| self.default.clone()))
    }
}

/// Non-nullable view of a nullable computation that fails on absence.
///
/// No default is stored; equality is solely by inner computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrElseThrowExpr<E> {
    inner: E,
}

impl<E> OrElseThrowExpr<E> {
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<T, E> Expression<T> for OrElseThrowExpr<E>
where
    E: NullableExpression<T>,
{
    type Output = E::Output;

    fn eval(&self, input: &T) -> ExpressionResult<E::Output> {
        self.inner.eval(input)?.ok_or(ExpressionError::AbsentValue {
            expression_type: self.inner.expression_type(),
        })
    }
}

/// Return `default` whenever `inner` produces no value, the actual value
/// otherwise.
pub fn or_else<T, E, V>(inner: E, default: V) -> OrElseExpr<E, V>
where
    E: NullableExpression<T, Output = V>,
    V: Scalar,
{
    OrElseExpr { inner, default }
}

/// Fail with [`ExpressionError::AbsentValue`] whenever `inner` produces no
/// value.
pub fn or_else_throw<T, E>(inner: E) -> OrElseThrowExpr<E>
where
    E: NullableExpression<T>,
{
    OrElseThrowExpr { inner }
}
