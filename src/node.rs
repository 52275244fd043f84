//! Expression node shapes.
//!
//! Nodes are plain structs holding an operator tag, the operand
//! computations, and the monomorphized `apply` function the factory picked
//! for the concrete scalar pairing. Structural equality and hashing cover
//! the tag and the operands only: `apply` is a pure function of both and is
//! excluded, which keeps function-pointer comparison (unreliable across
//! codegen units) out of the contract.
//!
//! The constant-operand shape is a distinct type from the
//! computation-operand shape and additionally implements cross-shape
//! `PartialEq` as always-false, so the two never compare equal even when the
//! operand values coincide numerically.

use crate::error::ExpressionResult;
use crate::expr::{Expression, NullableExpression};
use crate::operator::{BinaryOperator, ObjectBinaryOperator, UnaryOperator};
use crate::scalar::Scalar;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unary node: one operand computation plus a unary operator tag.
pub struct UnaryExpr<E, In, Out> {
    op: UnaryOperator,
    inner: E,
    apply: fn(In) -> Out,
}

impl<E, In, Out> UnaryExpr<E, In, Out> {
    pub(crate) fn new(op: UnaryOperator, inner: E, apply: fn(In) -> Out) -> Self {
        Self { op, inner, apply }
    }

    pub fn operator(&self) -> UnaryOperator {
        self.op
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Clone, In, Out> Clone for UnaryExpr<E, In, Out> {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            inner: self.inner.clone(),
            apply: self.apply,
        }
    }
}

impl<E: fmt::Debug, In, Out> fmt::Debug for UnaryExpr<E, In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryExpr")
            .field("op", &self.op)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<E: PartialEq, In, Out> PartialEq for UnaryExpr<E, In, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.inner == other.inner
    }
}

impl<E: Eq, In, Out> Eq for UnaryExpr<E, In, Out> {}

impl<E: Hash, In, Out> Hash for UnaryExpr<E, In, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.inner.hash(state);
    }
}

impl<T, E, In, Out> Expression<T> for UnaryExpr<E, In, Out>
where
    E: Expression<T, Output = In>,
    In: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Out> {
        Ok((self.apply)(self.inner.eval(input)?))
    }
}

/// Unary node over a nullable operand. An absent operand value passes
/// through as absent without invoking the operator.
pub struct NullableUnaryExpr<E, In, Out> {
    op: UnaryOperator,
    inner: E,
    apply: fn(In) -> Out,
}

impl<E, In, Out> NullableUnaryExpr<E, In, Out> {
    pub(crate) fn new(op: UnaryOperator, inner: E, apply: fn(In) -> Out) -> Self {
        Self { op, inner, apply }
    }

    pub fn operator(&self) -> UnaryOperator {
        self.op
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Clone, In, Out> Clone for NullableUnaryExpr<E, In, Out> {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            inner: self.inner.clone(),
            apply: self.apply,
        }
    }
}

impl<E: fmt::Debug, In, Out> fmt::Debug for NullableUnaryExpr<E, In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullableUnaryExpr")
            .field("op", &self.op)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<E: PartialEq, In, Out> PartialEq for NullableUnaryExpr<E, In, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.inner == other.inner
    }
}

impl<E: Eq, In, Out> Eq for NullableUnaryExpr<E, In, Out> {}

impl<E: Hash, In, Out> Hash for NullableUnaryExpr<E, In, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.inner.hash(state);
    }
}

impl<T, E, In, Out> NullableExpression<T> for NullableUnaryExpr<E, In, Out>
where
    E: NullableExpression<T, Output = In>,
    In: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Option<Out>> {
        Ok(self.inner.eval(input)?.map(self.apply))
    }
}

/// Binary node: both operands are computations over the same domain type,
/// re-evaluated per domain value.
pub struct BinaryExpr<L, R, A, B, Out> {
    op: BinaryOperator,
    left: L,
    right: R,
    apply: fn(A, B) -> Out,
}

impl<L, R, A, B, Out> BinaryExpr<L, R, A, B, Out> {
    pub(crate) fn new(op: BinaryOperator, left: L, right: R, apply: fn(A, B) -> Out) -> Self {
        Self {
            op,
            left,
            right,
            apply,
        }
    }

    pub fn operator(&self) -> BinaryOperator {
        self.op
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: Clone, R: Clone, A, B, Out> Clone for BinaryExpr<L, R, A, B, Out> {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            left: self.left.clone(),
            right: self.right.clone(),
            apply: self.apply,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug, A, B, Out> fmt::Debug for BinaryExpr<L, R, A, B, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryExpr")
            .field("op", &self.op)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<L: PartialEq, R: PartialEq, A, B, Out> PartialEq for BinaryExpr<L, R, A, B, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.left == other.left && self.right == other.right
    }
}

impl<L: Eq, R: Eq, A, B, Out> Eq for BinaryExpr<L, R, A, B, Out> {}

impl<L: Hash, R: Hash, A, B, Out> Hash for BinaryExpr<L, R, A, B, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.left.hash(state);
        self.right.hash(state);
    }
}

impl<T, L, R, A, B, Out> Expression<T> for BinaryExpr<L, R, A, B, Out>
where
    L: Expression<T, Output = A>,
    R: Expression<T, Output = B>,
    A: Scalar,
    B: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Out> {
        Ok((self.apply)(self.left.eval(input)?, self.right.eval(input)?))
    }
}

/// Binary node whose right operand is a literal constant fixed at
/// construction time. Avoids allocating a constant-returning computation;
/// the constant participates in equality by value.
pub struct BinaryConstExpr<L, A, C, Out> {
    op: ObjectBinaryOperator,
    left: L,
    constant: C,
    apply: fn(A, C) -> Out,
}

impl<L, A, C, Out> BinaryConstExpr<L, A, C, Out> {
    pub(crate) fn new(
        op: ObjectBinaryOperator,
        left: L,
        constant: C,
        apply: fn(A, C) -> Out,
    ) -> Self {
        Self {
            op,
            left,
            constant,
            apply,
        }
    }

    pub fn operator(&self) -> ObjectBinaryOperator {
        self.op
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn constant(&self) -> &C {
        &self.constant
    }
}

impl<L: Clone, A, C: Clone, Out> Clone for BinaryConstExpr<L, A, C, Out> {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            left: self.left.clone(),
            constant: self.constant.clone(),
            apply: self.apply,
        }
    }
}

impl<L: fmt::Debug, A, C: fmt::Debug, Out> fmt::Debug for BinaryConstExpr<L, A, C, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryConstExpr")
            .field("op", &self.op)
            .field("left", &self.left)
            .field("constant", &self.constant)
            .finish()
    }
}

impl<L: PartialEq, A, C: PartialEq, Out> PartialEq for BinaryConstExpr<L, A, C, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.left == other.left && self.constant == other.constant
    }
}

impl<L: Eq, A, C: Eq, Out> Eq for BinaryConstExpr<L, A, C, Out> {}

impl<L: Hash, A, C: Scalar, Out> Hash for BinaryConstExpr<L, A, C, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.left.hash(state);
        self.constant.hash_scalar(state);
    }
}

impl<T, L, A, C, Out> Expression<T> for BinaryConstExpr<L, A, C, Out>
where
    L: Expression<T, Output = A>,
    A: Scalar,
    C: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Out> {
        Ok((self.apply)(self.left.eval(input)?, self.constant.clone()))
    }
}

// The two binary shapes are never structurally equal, even when the constant
// and the computation operand always produce the same value.
impl<L1, R1, A1, B1, O1, L2, A2, C2, O2> PartialEq<BinaryConstExpr<L2, A2, C2, O2>>
    for BinaryExpr<L1, R1, A1, B1, O1>
{
    fn eq(&self, _other: &BinaryConstExpr<L2, A2, C2, O2>) -> bool {
        false
    }
}

impl<L1, A1, C1, O1, L2, R2, A2, B2, O2> PartialEq<BinaryExpr<L2, R2, A2, B2, O2>>
    for BinaryConstExpr<L1, A1, C1, O1>
{
    fn eq(&self, _other: &BinaryExpr<L2, R2, A2, B2, O2>) -> bool {
        false
    }
}
