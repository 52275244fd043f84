//! Scalar kind and expression type tags.
//!
//! Every computation in the algebra reports exactly one [`ExpressionType`],
//! a pure function of the node's static type. Downstream layers use the tag
//! for introspection and to pick specialized code paths without inspecting
//! the node's concrete type.

use serde::{Deserialize, Serialize};

/// The scalar result kinds supported by the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Decimal,
    Enum,
}

impl ScalarKind {
    /// Whether values of this kind participate in arithmetic.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ScalarKind::Byte
                | ScalarKind::Short
                | ScalarKind::Int
                | ScalarKind::Long
                | ScalarKind::Float
                | ScalarKind::Double
                | ScalarKind::Decimal
        )
    }

    /// Whether this kind is a fixed-width integer.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::Byte | ScalarKind::Short | ScalarKind::Int | ScalarKind::Long
        )
    }

    /// Get the display string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Byte => "byte",
            ScalarKind::Short => "short",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Char => "char",
            ScalarKind::String => "string",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Enum => "enum",
        }
    }
}

/// One tag per (scalar kind, nullability) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionType {
    Bool,
    NullableBool,
    Byte,
    NullableByte,
    Short,
    NullableShort,
    Int,
    NullableInt,
    Long,
    NullableLong,
    Float,
    NullableFloat,
    Double,
    NullableDouble,
    Char,
    NullableChar,
    String,
    NullableString,
    Decimal,
    NullableDecimal,
    Enum,
    NullableEnum,
}

impl ExpressionType {
    /// Build the tag for a kind and nullability.
    pub fn of(kind: ScalarKind, nullable: bool) -> Self {
        match (kind, nullable) {
            (ScalarKind::Bool, false) => ExpressionType::Bool,
            (ScalarKind::Bool, true) => ExpressionType::NullableBool,
            (ScalarKind::Byte, false) => ExpressionType::Byte,
            (ScalarKind::Byte, true) => ExpressionType::NullableByte,
            (ScalarKind::Short, false) => ExpressionType::Short,
            (ScalarKind::Short, true) => ExpressionType::NullableShort,
            (ScalarKind::Int, false) => ExpressionType::Int,
            (ScalarKind::Int, true) => ExpressionType::NullableInt,
            (ScalarKind::Long, false) => ExpressionType::Long,
            (ScalarKind::Long, true) => ExpressionType::NullableLong,
            (ScalarKind::Float, false) => ExpressionType::Float,
            (ScalarKind::Float, true) => ExpressionType::NullableFloat,
            (ScalarKind::Double, false) => ExpressionType::Double,
            (ScalarKind::Double, true) => ExpressionType::NullableDouble,
            (ScalarKind::Char, false) => ExpressionType::Char,
            (ScalarKind::Char, true) => ExpressionType::NullableChar,
            (ScalarKind::String, false) => ExpressionType::String,
            (ScalarKind::String, true) => ExpressionType::NullableString,
            (ScalarKind::Decimal, false) => ExpressionType::Decimal,
            (ScalarKind::Decimal, true) => ExpressionType::NullableDecimal,
            (ScalarKind::Enum, false) => ExpressionType::Enum,
            (ScalarKind::Enum, true) => ExpressionType::NullableEnum,
        }
    }

    /// The scalar kind this tag carries.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ExpressionType::Bool | ExpressionType::NullableBool => ScalarKind::Bool,
            ExpressionType::Byte | ExpressionType::NullableByte => ScalarKind::Byte,
            ExpressionType::Short | ExpressionType::NullableShort => ScalarKind::Short,
            ExpressionType::Int | ExpressionType::NullableInt => ScalarKind::Int,
            ExpressionType::Long | ExpressionType::NullableLong => ScalarKind::Long,
            ExpressionType::Float | ExpressionType::NullableFloat => ScalarKind::Float,
            ExpressionType::Double | ExpressionType::NullableDouble => ScalarKind::Double,
            ExpressionType::Char | ExpressionType::NullableChar => ScalarKind::Char,
            ExpressionType::String | ExpressionType::NullableString => ScalarKind::String,
            ExpressionType::Decimal | ExpressionType::NullableDecimal => ScalarKind::Decimal,
            ExpressionType::Enum | ExpressionType::NullableEnum => ScalarKind::Enum,
        }
    }

    /// Whether this tag is the nullable variant of its kind.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            ExpressionType::NullableBool
                | ExpressionType::NullableByte
                | ExpressionType::NullableShort
                | ExpressionType::NullableInt
                | ExpressionType::NullableLong
                | ExpressionType::NullableFloat
                | ExpressionType::NullableDouble
                | ExpressionType::NullableChar
                | ExpressionType::NullableString
                | ExpressionType::NullableDecimal
                | ExpressionType::NullableEnum
        )
    }
}
