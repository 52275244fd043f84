//! Composition of a plain first-step mapping with a typed computation.
//!
//! The first step navigates from the domain value to an intermediate object
//! (for example entity -> related entity); the second step is a typed
//! computation over that object. When the first step produces nothing the
//! composition short-circuits to absent without invoking the second step,
//! so the result is always nullable.

use crate::error::ExpressionResult;
use crate::expr::{leaf_identity_impls, Expression, NullableExpression};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The first step of a composition: a caller-supplied navigation from the
/// domain value to an optional intermediate object. Compared by reference
/// identity, like every caller-supplied leaf.
pub struct Mapping<T, A> {
    f: Arc<dyn Fn(&T) -> Option<A> + Send + Sync>,
}

leaf_identity_impls!(Mapping<T, A>, f, "Mapping");

impl<T, A> Mapping<T, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<A> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    pub fn apply(&self, input: &T) -> Option<A> {
        (self.f)(input)
    }
}

/// Composition with a non-nullable second step.
///
/// Equality is tag-free: two compositions are equal iff both steps are
/// pairwise equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComposedExpr<F, S> {
    first: F,
    second: S,
}

impl<F, S> ComposedExpr<F, S> {
    pub fn first_step(&self) -> &F {
        &self.first
    }

    pub fn second_step(&self) -> &S {
        &self.second
    }
}

impl<T, A, S> NullableExpression<T> for ComposedExpr<Mapping<T, A>, S>
where
    S: Expression<A>,
{
    type Output = S::Output;

    fn eval(&self, input: &T) -> ExpressionResult<Option<S::Output>> {
        match self.first.apply(input) {
            Some(intermediate) => self.second.eval(&intermediate).map(Some),
            None => Ok(None),
        }
    }
}

/// Composition with a nullable second step; absent at either step yields
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComposedNullableExpr<F, S> {
    first: F,
    second: S,
}

impl<F, S> ComposedNullableExpr<F, S> {
    pub fn first_step(&self) -> &F {
        &self.first
    }

    pub fn second_step(&self) -> &S {
        &self.second
    }
}

impl<T, A, S> NullableExpression<T> for ComposedNullableExpr<Mapping<T, A>, S>
where
    S: NullableExpression<A>,
{
    type Output = S::Output;

    fn eval(&self, input: &T) -> ExpressionResult<Option<S::Output>> {
        match self.first.apply(input) {
            Some(intermediate) => self.second.eval(&intermediate),
            None => Ok(None),
        }
    }
}

/// Compose a first-step mapping with a non-nullable second-step computation.
///
/// Reuse the same [`Mapping`] instance when building equivalent
/// compositions: equality at the first step is by identity.
pub fn compose<T, A, S>(first: Mapping<T, A>, second: S) -> ComposedExpr<Mapping<T, A>, S>
where
    S: Expression<A>,
{
    ComposedExpr { first, second }
}

/// Compose a first-step mapping with a nullable second-step computation.
pub fn compose_nullable<T, A, S>(
    first: Mapping<T, A>,
    second: S,
) -> ComposedNullableExpr<Mapping<T, A>, S>
where
    S: NullableExpression<A>,
{
    ComposedNullableExpr { first, second }
}
