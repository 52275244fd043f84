//! Plus, Minus and Multiply factories with binary numeric promotion.
//!
//! Each operator comes in two shapes: computation-against-computation
//! (re-evaluated per domain value) and computation-against-constant (the
//! right operand is a literal fixed at construction, avoiding the allocation
//! of a constant-returning computation). The shapes carry distinct operator
//! tags and are never structurally equal to each other.

use crate::expr::Expression;
use crate::node::{BinaryConstExpr, BinaryExpr};
use crate::operator::{BinaryOperator, ObjectBinaryOperator};
use crate::scalar::{NumericScalar, Promote, Scalar};

macro_rules! promoting_binary {
    (
        $(#[$doc:meta])* $name:ident,
        $(#[$const_doc:meta])* $const_name:ident,
        $op:ident,
        $method:ident
    ) => {
        $(#[$doc])*
        pub fn $name<T, L, R>(
            left: L,
            right: R,
        ) -> BinaryExpr<L, R, L::Output, R::Output, <L::Output as Promote<R::Output>>::Output>
        where
            L: Expression<T>,
            R: Expression<T>,
            L::Output: Promote<R::Output>,
        {
            BinaryExpr::new(
                BinaryOperator::$op,
                left,
                right,
                |a: L::Output, b: R::Output| {
                    <L::Output as Promote<R::Output>>::promote_left(a)
                        .$method(<L::Output as Promote<R::Output>>::promote_right(b))
                },
            )
        }

        $(#[$const_doc])*
        pub fn $const_name<T, L, C>(
            left: L,
            constant: C,
        ) -> BinaryConstExpr<L, L::Output, C, <L::Output as Promote<C>>::Output>
        where
            L: Expression<T>,
            C: Scalar,
            L::Output: Promote<C>,
        {
            BinaryConstExpr::new(
                ObjectBinaryOperator::$op,
                left,
                constant,
                |a: L::Output, c: C| {
                    <L::Output as Promote<C>>::promote_left(a)
                        .$method(<L::Output as Promote<C>>::promote_right(c))
                },
            )
        }
    };
}

promoting_binary!(
    /// Sum of two computations, widened per binary numeric promotion
    /// (short + int gives int, int + long gives long, anything with a float
    /// kind gives that float kind).
    plus,
    /// Sum of a computation and a literal constant.
    plus_const,
    Plus,
    num_add
);

promoting_binary!(
    /// Difference of two computations, widened per binary numeric promotion.
    minus,
    /// Difference of a computation and a literal constant.
    minus_const,
    Minus,
    num_sub
);

promoting_binary!(
    /// Product of two computations, widened per binary numeric promotion.
    multiply,
    /// Product of a computation and a literal constant.
    multiply_const,
    Multiply,
    num_mul
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{to_int, to_long, to_short};
    use crate::types::ExpressionType;

    struct Entity {
        length: i32,
    }

    #[test]
    fn test_plus_widens_short_and_int() {
        let small = to_short(|e: &Entity| e.length as i16);
        let big = to_int(|e: &Entity| e.length * 10);
        let sum = plus(small, big);

        assert_eq!(sum.eval(&Entity { length: 4 }).unwrap(), 44);
        assert_eq!(sum.expression_type(), ExpressionType::Int);
    }

    #[test]
    fn test_minus_and_multiply() {
        let length = to_int(|e: &Entity| e.length);
        let wide = to_long(|e: &Entity| e.length as i64);

        let diff = minus(length.clone(), wide);
        let diff_value: i64 = diff.eval(&Entity { length: 9 }).unwrap();
        assert_eq!(diff_value, 0);
        assert_eq!(diff.expression_type(), ExpressionType::Long);

        let product = multiply(length.clone(), length);
        assert_eq!(product.eval(&Entity { length: -6 }).unwrap(), 36);
    }

    #[test]
    fn test_const_shape_avoids_second_computation() {
        let length = to_int(|e: &Entity| e.length);
        let bumped = plus_const(length, 1);

        assert_eq!(bumped.eval(&Entity { length: 41 }).unwrap(), 42);
        assert_eq!(bumped.operator(), ObjectBinaryOperator::Plus);
        assert_eq!(*bumped.constant(), 1);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        let length = to_int(|e: &Entity| e.length);
        let bumped = plus_const(length, 1);
        assert_eq!(bumped.eval(&Entity { length: i32::MAX }).unwrap(), i32::MIN);
    }

    #[test]
    fn test_reconstruction_stable_equality() {
        let length = to_int(|e: &Entity| e.length);
        let other = to_int(|e: &Entity| e.length + 1);

        assert_eq!(
            plus(length.clone(), other.clone()),
            plus(length.clone(), other.clone())
        );
        assert_ne!(
            plus(length.clone(), other.clone()),
            plus(length.clone(), length.clone())
        );
        assert_eq!(plus_const(length.clone(), 5), plus_const(length, 5));
    }
}
