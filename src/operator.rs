//! Operator tags for expression nodes.
//!
//! Each node shape carries its own closed tag set. The plain binary and the
//! constant-operand ("object binary") sets are deliberately separate enums:
//! the two shapes carry different equality semantics and must never be
//! interchangeable.

use crate::types::ScalarKind;
use serde::{Deserialize, Serialize};

/// Unary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Abs,
    Negate,
    Sign,
    Cast,
}

impl UnaryOperator {
    /// Get the display string for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Abs => "abs",
            UnaryOperator::Negate => "-",
            UnaryOperator::Sign => "sign",
            UnaryOperator::Cast => "cast",
        }
    }
}

/// Binary operators where both operands are computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Pow,
}

impl BinaryOperator {
    /// Get the display string for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Pow => "^",
        }
    }
}

/// Binary operators where the right operand is a literal constant fixed at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectBinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Pow,
}

impl ObjectBinaryOperator {
    /// Get the display string for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectBinaryOperator::Plus => "+",
            ObjectBinaryOperator::Minus => "-",
            ObjectBinaryOperator::Multiply => "*",
            ObjectBinaryOperator::Divide => "/",
            ObjectBinaryOperator::Pow => "^",
        }
    }
}

/// The (source kind, target kind) pairing a mapper node records.
///
/// Same-kind mappers have `source == target`; kind-changing mappers (for
/// example bool to double) tag accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapperType {
    pub source: ScalarKind,
    pub target: ScalarKind,
}

impl MapperType {
    pub fn new(source: ScalarKind, target: ScalarKind) -> Self {
        Self { source, target }
    }

    /// The tag for a mapper that does not change kind.
    pub fn same(kind: ScalarKind) -> Self {
        Self {
            source: kind,
            target: kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_display() {
        assert_eq!(UnaryOperator::Abs.as_str(), "abs");
        assert_eq!(UnaryOperator::Negate.as_str(), "-");
        assert_eq!(BinaryOperator::Plus.as_str(), "+");
        assert_eq!(BinaryOperator::Pow.as_str(), "^");
        assert_eq!(ObjectBinaryOperator::Divide.as_str(), "/");
    }

    #[test]
    fn test_mapper_type_same() {
        let tag = MapperType::same(ScalarKind::Int);
        assert_eq!(tag.source, ScalarKind::Int);
        assert_eq!(tag.target, ScalarKind::Int);
        assert_eq!(tag, MapperType::new(ScalarKind::Int, ScalarKind::Int));
        assert_ne!(tag, MapperType::new(ScalarKind::Bool, ScalarKind::Double));
    }
}
