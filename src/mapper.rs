//! Mapper nodes: a user-supplied transform applied to a computation's
//! result, tagged with the (source kind, target kind) pairing.
//!
//! The common case keeps the kind (int to int for a derived field); the
//! shape also supports kind-changing transforms (for example bool to
//! double), tagged accordingly.

use crate::error::ExpressionResult;
use crate::expr::{leaf_identity_impls, Expression, NullableExpression};
use crate::operator::MapperType;
use crate::scalar::Scalar;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A caller-supplied scalar transform. Compared by reference identity, like
/// every caller-supplied leaf: reuse (clone) one instance when building
/// mappers that should compare equal.
pub struct Transform<In, Out> {
    f: Arc<dyn Fn(In) -> Out + Send + Sync>,
}

leaf_identity_impls!(Transform<In, Out>, f, "Transform");

impl<In, Out> Transform<In, Out> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    pub fn apply(&self, value: In) -> Out {
        (self.f)(value)
    }
}

/// Mapper node over a non-nullable computation.
///
/// Equality: inner computation + transform identity + mapper type tag.
/// Implemented manually so the scalar type parameters carry no bounds
/// (the transform compares by identity regardless of kind).
pub struct MapExpr<E, In, Out> {
    tag: MapperType,
    inner: E,
    transform: Transform<In, Out>,
}

impl<E: Clone, In, Out> Clone for MapExpr<E, In, Out> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            inner: self.inner.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<E: fmt::Debug, In, Out> fmt::Debug for MapExpr<E, In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapExpr")
            .field("tag", &self.tag)
            .field("inner", &self.inner)
            .field("transform", &self.transform)
            .finish()
    }
}

impl<E: PartialEq, In, Out> PartialEq for MapExpr<E, In, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.inner == other.inner && self.transform == other.transform
    }
}

impl<E: Eq, In, Out> Eq for MapExpr<E, In, Out> {}

impl<E: Hash, In, Out> Hash for MapExpr<E, In, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        self.inner.hash(state);
        self.transform.hash(state);
    }
}

impl<E, In, Out> MapExpr<E, In, Out> {
    pub fn mapper_type(&self) -> MapperType {
        self.tag
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn transform(&self) -> &Transform<In, Out> {
        &self.transform
    }
}

impl<T, E, In, Out> Expression<T> for MapExpr<E, In, Out>
where
    E: Expression<T, Output = In>,
    In: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Out> {
        Ok(self.transform.apply(self.inner.eval(input)?))
    }
}

/// Mapper node over a nullable computation; absent stays absent.
pub struct NullableMapExpr<E, In, Out> {
    tag: MapperType,
    inner: E,
    transform: Transform<In, Out>,
}

impl<E: Clone, In, Out> Clone for NullableMapExpr<E, In, Out> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            inner: self.inner.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<E: fmt::Debug, In, Out> fmt::Debug for NullableMapExpr<E, In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullableMapExpr")
            .field("tag", &self.tag)
            .field("inner", &self.inner)
            .field("transform", &self.transform)
            .finish()
    }
}

impl<E: PartialEq, In, Out> PartialEq for NullableMapExpr<E, In, Out> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.inner == other.inner && self.transform == other.transform
    }
}

impl<E: Eq, In, Out> Eq for NullableMapExpr<E, In, Out> {}

impl<E: Hash, In, Out> Hash for NullableMapExpr<E, In, Out> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        self.inner.hash(state);
        self.transform.hash(state);
    }
}

impl<E, In, Out> NullableMapExpr<E, In, Out> {
    pub fn mapper_type(&self) -> MapperType {
        self.tag
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn transform(&self) -> &Transform<In, Out> {
        &self.transform
    }
}

impl<T, E, In, Out> NullableExpression<T> for NullableMapExpr<E, In, Out>
where
    E: NullableExpression<T, Output = In>,
    In: Scalar,
    Out: Scalar,
{
    type Output = Out;

    fn eval(&self, input: &T) -> ExpressionResult<Option<Out>> {
        Ok(self
            .inner
            .eval(input)?
            .map(|value| self.transform.apply(value)))
    }
}

/// Same-kind mapper: transform a computation's result without changing its
/// scalar kind.
pub fn map<T, E>(
    inner: E,
    transform: Transform<E::Output, E::Output>,
) -> MapExpr<E, E::Output, E::Output>
where
    E: Expression<T>,
{
    MapExpr {
        tag: MapperType::same(E::Output::KIND),
        inner,
        transform,
    }
}

/// Kind-changing mapper, tagged with the (source, target) pairing.
pub fn map_to<Out, T, E>(
    inner: E,
    transform: Transform<E::Output, Out>,
) -> MapExpr<E, E::Output, Out>
where
    E: Expression<T>,
    Out: Scalar,
{
    MapExpr {
        tag: MapperType::new(E::Output::KIND, Out::KIND),
        inner,
        transform,
    }
}

/// Same-kind mapper over a nullable computation.
pub fn map_nullable<T, E>(
    inner: E,
    transform: Transform<E::Output, E::Output>,
) -> NullableMapExpr<E, E::Output, E::Output>
where
    E: NullableExpression<T>,
{
    NullableMapExpr {
        tag: MapperType::same(E::Output::KIND),
        inner,
        transform,
    }
}

/// Kind-changing mapper over a nullable computation.
pub fn map_to_nullable<Out, T, E>(
    inner: E,
    transform: Transform<E::Output, Out>,
) -> NullableMapExpr<E, E::Output, Out>
where
    E: NullableExpression<T>,
    Out: Scalar,
{
    NullableMapExpr {
        tag: MapperType::new(E::Output::KIND, Out::KIND),
        inner,
        transform,
    }
}
