//! Absolute value factories.

use crate::expr::{Expression, NullableExpression};
use crate::node::{NullableUnaryExpr, UnaryExpr};
use crate::operator::UnaryOperator;
use crate::scalar::NumericScalar;

/// Absolute value of a numeric computation, in the same primitive width as
/// the input. Integer minima wrap (abs(i8::MIN) == i8::MIN).
pub fn abs<T, E>(inner: E) -> UnaryExpr<E, E::Output, E::Output>
where
    E: Expression<T>,
    E::Output: NumericScalar,
{
    UnaryExpr::new(
        UnaryOperator::Abs,
        inner,
        <E::Output as NumericScalar>::num_abs,
    )
}

/// Absolute value of a nullable numeric computation; absent stays absent.
pub fn abs_nullable<T, E>(inner: E) -> NullableUnaryExpr<E, E::Output, E::Output>
where
    E: NullableExpression<T>,
    E::Output: NumericScalar,
{
    NullableUnaryExpr::new(
        UnaryOperator::Abs,
        inner,
        <E::Output as NumericScalar>::num_abs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{to_int, to_int_nullable, to_long};
    use crate::operator::UnaryOperator;

    struct Entity {
        length: i32,
    }

    #[test]
    fn test_abs_matches_inner_abs() {
        let length = to_int(|e: &Entity| e.length);
        let abs_length = abs(length.clone());

        for value in [-5, 0, 7] {
            let entity = Entity { length: value };
            assert_eq!(
                abs_length.eval(&entity).unwrap(),
                length.eval(&entity).unwrap().abs()
            );
        }
        assert_eq!(abs_length.operator(), UnaryOperator::Abs);
    }

    #[test]
    fn test_abs_same_width() {
        let long = to_long(|e: &Entity| e.length as i64 - 10);
        let node = abs(long);
        let out: i64 = node.eval(&Entity { length: 3 }).unwrap();
        assert_eq!(out, 7);
    }

    #[test]
    fn test_abs_nullable_passes_absent_through() {
        let maybe = to_int_nullable(|e: &Entity| (e.length >= 0).then_some(e.length - 8));
        let node = abs_nullable(maybe);

        assert_eq!(node.eval(&Entity { length: 3 }).unwrap(), Some(5));
        assert_eq!(node.eval(&Entity { length: -1 }).unwrap(), None);
    }

    #[test]
    fn test_reconstruction_stable_equality() {
        let length = to_int(|e: &Entity| e.length);
        assert_eq!(abs(length.clone()), abs(length));
    }
}
