//! Typed scalar expression algebra for stream-oriented query layers.
//!
//! This crate provides:
//! - Leaf computation wrappers per scalar kind, nullable and non-nullable
//! - Operator factories (abs, negate, sign, cast, plus, minus, multiply,
//!   divide, pow) with binary numeric promotion
//! - Composition and mapper nodes for derived fields
//! - The OrElse / OrElseThrow bridge from nullable to non-nullable
//! - Structural (value-based) equality and hashing over expression trees,
//!   so semantically identical computations can be recognized, cached or
//!   deduplicated by a downstream query planner
//!
//! All nodes are immutable after construction and safe for unsynchronized
//! concurrent evaluation.

pub mod compose;
pub mod error;
pub mod expr;
pub mod mapper;
pub mod node;
pub mod operator;
pub mod ops;
pub mod or_else;
pub mod scalar;
pub mod types;

pub use compose::{compose, compose_nullable, ComposedExpr, ComposedNullableExpr, Mapping};
pub use error::{ExpressionError, ExpressionResult};
pub use expr::{
    to_bool, to_bool_nullable, to_byte, to_byte_nullable, to_char, to_char_nullable, to_decimal,
    to_decimal_nullable, to_double, to_double_nullable, to_enum, to_enum_nullable, to_float,
    to_float_nullable, to_int, to_int_nullable, to_long, to_long_nullable, to_short,
    to_short_nullable, to_str, to_str_nullable, Expression, Getter, NullableExpression,
    NullableGetter,
};
pub use mapper::{
    map, map_nullable, map_to, map_to_nullable, MapExpr, NullableMapExpr, Transform,
};
pub use node::{BinaryConstExpr, BinaryExpr, NullableUnaryExpr, UnaryExpr};
pub use operator::{BinaryOperator, MapperType, ObjectBinaryOperator, UnaryOperator};
pub use ops::{
    abs, abs_nullable, cast, cast_nullable, divide, divide_const, minus, minus_const, multiply,
    multiply_const, negate, negate_bool, negate_bool_nullable, negate_nullable, plus, plus_const,
    pow, pow_const, pow_f, pow_f_const, sign, sign_nullable,
};
pub use or_else::{or_else, or_else_throw, OrElseExpr, OrElseThrowExpr};
pub use scalar::{CastInto, IntegerScalar, NumericScalar, Promote, Scalar};
pub use types::{ExpressionType, ScalarKind};
