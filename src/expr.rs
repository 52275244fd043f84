//! Core computation traits and the leaf function family.
//!
//! A computation is a pure function from a domain value to a scalar. Two
//! families exist per scalar kind: [`Expression`] always produces a value,
//! [`NullableExpression`] may produce "no value" (distinct from any
//! representable scalar, including zero and the empty string).
//!
//! The leaves of every expression tree are caller-supplied closures wrapped
//! in [`Getter`] / [`NullableGetter`]. Closures cannot be compared by value,
//! so structural equality bottoms out at reference identity of the shared
//! closure: two trees are recognized as duplicates only when they reuse the
//! same leaf instances.

use crate::error::{ExpressionError, ExpressionResult};
use crate::scalar::Scalar;
use crate::types::{ExpressionType, ScalarKind};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A pure computation from a domain value to a scalar, guaranteed to
/// produce a value.
///
/// Evaluation is fallible only through the OrElseThrow bridge; computations
/// built from plain leaves and operator factories never return an error.
pub trait Expression<T> {
    type Output: Scalar;

    /// The non-nullable type tag for this computation. Stable for the
    /// lifetime of the instance: a pure function of the static type.
    fn expression_type(&self) -> ExpressionType {
        ExpressionType::of(Self::Output::KIND, false)
    }

    fn eval(&self, input: &T) -> ExpressionResult<Self::Output>;

    /// The concrete enum type, for Enum-kind computations. Lets generic
    /// pipelines validate or reconstruct values without probing the node.
    fn enum_type(&self) -> Option<TypeId> {
        (Self::Output::KIND == ScalarKind::Enum).then(|| TypeId::of::<Self::Output>())
    }
}

/// A pure computation that may produce "no value" for a given input.
pub trait NullableExpression<T> {
    type Output: Scalar;

    /// The nullable type tag for this computation.
    fn expression_type(&self) -> ExpressionType {
        ExpressionType::of(Self::Output::KIND, true)
    }

    fn eval(&self, input: &T) -> ExpressionResult<Option<Self::Output>>;

    /// Evaluate, failing with [`ExpressionError::AbsentValue`] when the
    /// result is absent. Callers that want a default instead must route
    /// through the OrElse bridge.
    fn eval_required(&self, input: &T) -> ExpressionResult<Self::Output> {
        self.eval(input)?.ok_or(ExpressionError::AbsentValue {
            expression_type: self.expression_type(),
        })
    }

    /// The concrete enum type, for Enum-kind computations.
    fn enum_type(&self) -> Option<TypeId> {
        (Self::Output::KIND == ScalarKind::Enum).then(|| TypeId::of::<Self::Output>())
    }
}

/// Implements Clone/PartialEq/Hash/Debug by shared-closure identity for a
/// leaf struct whose only field is an `Arc<dyn Fn...>`.
macro_rules! leaf_identity_impls {
    ($name:ident<$($param:ident),*>, $field:ident, $label:literal) => {
        impl<$($param),*> Clone for $name<$($param),*> {
            fn clone(&self) -> Self {
                Self {
                    $field: Arc::clone(&self.$field),
                }
            }
        }

        impl<$($param),*> PartialEq for $name<$($param),*> {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.$field, &other.$field)
            }
        }

        // Pointer identity is reflexive, so leaf equality is total.
        impl<$($param),*> Eq for $name<$($param),*> {}

        impl<$($param),*> Hash for $name<$($param),*> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                (Arc::as_ptr(&self.$field) as *const () as usize).hash(state);
            }
        }

        impl<$($param),*> fmt::Debug for $name<$($param),*> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct($label)
                    .field(
                        stringify!($field),
                        &(Arc::as_ptr(&self.$field) as *const ()),
                    )
                    .finish()
            }
        }
    };
}

pub(crate) use leaf_identity_impls;

/// Leaf computation: a caller-supplied getter that always produces a value.
pub struct Getter<T, V> {
    f: Arc<dyn Fn(&T) -> V + Send + Sync>,
}

leaf_identity_impls!(Getter<T, V>, f, "Getter");

impl<T, V> Getter<T, V> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }
}

impl<T: 'static, V: Scalar> Expression<T> for Getter<T, V> {
    type Output = V;

    fn eval(&self, input: &T) -> ExpressionResult<V> {
        Ok((self.f)(input))
    }
}

/// Leaf computation: a caller-supplied getter that may produce no value.
pub struct NullableGetter<T, V> {
    f: Arc<dyn Fn(&T) -> Option<V> + Send + Sync>,
}

leaf_identity_impls!(NullableGetter<T, V>, f, "NullableGetter");

impl<T, V> NullableGetter<T, V> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }
}

impl<T: 'static, V: Scalar> NullableExpression<T> for NullableGetter<T, V> {
    type Output = V;

    fn eval(&self, input: &T) -> ExpressionResult<Option<V>> {
        Ok((self.f)(input))
    }
}

// Per-kind aliases for the leaf family surface consumed by the field layer.
pub type ToBool<T> = Getter<T, bool>;
pub type ToByte<T> = Getter<T, i8>;
pub type ToShort<T> = Getter<T, i16>;
pub type ToInt<T> = Getter<T, i32>;
pub type ToLong<T> = Getter<T, i64>;
pub type ToFloat<T> = Getter<T, f32>;
pub type ToDouble<T> = Getter<T, f64>;
pub type ToChar<T> = Getter<T, char>;
pub type ToStr<T> = Getter<T, String>;
pub type ToDecimal<T> = Getter<T, rust_decimal::Decimal>;
pub type ToEnum<T, E> = Getter<T, E>;

pub type ToBoolNullable<T> = NullableGetter<T, bool>;
pub type ToByteNullable<T> = NullableGetter<T, i8>;
pub type ToShortNullable<T> = NullableGetter<T, i16>;
pub type ToIntNullable<T> = NullableGetter<T, i32>;
pub type ToLongNullable<T> = NullableGetter<T, i64>;
pub type ToFloatNullable<T> = NullableGetter<T, f32>;
pub type ToDoubleNullable<T> = NullableGetter<T, f64>;
pub type ToCharNullable<T> = NullableGetter<T, char>;
pub type ToStrNullable<T> = NullableGetter<T, String>;
pub type ToDecimalNullable<T> = NullableGetter<T, rust_decimal::Decimal>;
pub type ToEnumNullable<T, E> = NullableGetter<T, E>;

macro_rules! leaf_constructors {
    ($($ctor:ident / $nullable_ctor:ident => $ty:ty;)*) => {
        $(
            pub fn $ctor<T, F>(f: F) -> Getter<T, $ty>
            where
                F: Fn(&T) -> $ty + Send + Sync + 'static,
            {
                Getter::new(f)
            }

            pub fn $nullable_ctor<T, F>(f: F) -> NullableGetter<T, $ty>
            where
                F: Fn(&T) -> Option<$ty> + Send + Sync + 'static,
            {
                NullableGetter::new(f)
            }
        )*
    };
}

leaf_constructors! {
    to_bool / to_bool_nullable => bool;
    to_byte / to_byte_nullable => i8;
    to_short / to_short_nullable => i16;
    to_int / to_int_nullable => i32;
    to_long / to_long_nullable => i64;
    to_float / to_float_nullable => f32;
    to_double / to_double_nullable => f64;
    to_char / to_char_nullable => char;
    to_str / to_str_nullable => String;
    to_decimal / to_decimal_nullable => rust_decimal::Decimal;
}

/// Leaf constructor for an Enum-kind computation.
pub fn to_enum<T, E, F>(f: F) -> Getter<T, E>
where
    E: Scalar,
    F: Fn(&T) -> E + Send + Sync + 'static,
{
    Getter::new(f)
}

/// Nullable leaf constructor for an Enum-kind computation.
pub fn to_enum_nullable<T, E, F>(f: F) -> NullableGetter<T, E>
where
    E: Scalar,
    F: Fn(&T) -> Option<E> + Send + Sync + 'static,
{
    NullableGetter::new(f)
}
