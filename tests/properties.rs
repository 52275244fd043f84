use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use streamexpr::ops::{abs, cast, minus, multiply_const, plus, pow_const, pow_f_const, sign};
use streamexpr::{to_double, to_int, to_long, to_short, Expression};

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn plus_wraps_like_wrapping_add(a in any::<i32>(), b in any::<i32>()) {
        let expr = plus(to_int(|v: &(i32, i32)| v.0), to_int(|v: &(i32, i32)| v.1));
        prop_assert_eq!(expr.eval(&(a, b)).unwrap(), a.wrapping_add(b));
    }

    #[test]
    fn minus_promotes_short_to_int(a in any::<i16>(), b in any::<i32>()) {
        let expr = minus(
            to_short(|v: &(i16, i32)| v.0),
            to_int(|v: &(i16, i32)| v.1),
        );
        prop_assert_eq!(expr.eval(&(a, b)).unwrap(), i32::from(a).wrapping_sub(b));
    }

    #[test]
    fn widening_cast_is_lossless(v in any::<i32>()) {
        let expr = cast::<i64, _, _>(to_int(|v: &i32| *v));
        prop_assert_eq!(expr.eval(&v).unwrap(), i64::from(v));
    }

    #[test]
    fn narrowing_cast_keeps_low_order_bits(v in any::<i64>()) {
        let expr = cast::<i32, _, _>(to_long(|v: &i64| *v));
        prop_assert_eq!(expr.eval(&v).unwrap(), v as i32);
    }

    #[test]
    fn small_integer_exponents_match_the_general_power_function(
        base in -100.0f64..100.0,
        exp in 2i32..=9,
    ) {
        let unrolled = pow_const(to_double(|v: &f64| *v), exp);
        let general = pow_f_const(to_double(|v: &f64| *v), f64::from(exp));
        let a = unrolled.eval(&base).unwrap();
        let b = general.eval(&base).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0));
    }

    #[test]
    fn negative_exponent_is_the_reciprocal(base in 0.5f64..100.0, exp in 1i32..=6) {
        let inverted = pow_const(to_double(|v: &f64| *v), -exp);
        let direct = pow_const(to_double(|v: &f64| *v), exp);
        let a = inverted.eval(&base).unwrap();
        let b = 1.0 / direct.eval(&base).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0));
    }

    #[test]
    fn abs_never_evaluates_negative_for_floats(v in any::<f64>()) {
        prop_assume!(!v.is_nan());
        let expr = abs(to_double(|v: &f64| *v));
        prop_assert!(expr.eval(&v).unwrap() >= 0.0);
    }

    #[test]
    fn sign_agrees_with_comparison_to_zero(v in any::<i64>()) {
        let expr = sign(to_long(|v: &i64| *v));
        let expected = match v.cmp(&0) {
            std::cmp::Ordering::Less => -1i8,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        prop_assert_eq!(expr.eval(&v).unwrap(), expected);
    }

    // Rebuilding a tree from the same leaves yields an equal key with an
    // equal hash, which is what planner-side deduplication relies on.
    #[test]
    fn reconstruction_preserves_equality_and_hash(factor in any::<i32>()) {
        let leaf = to_int(|v: &i32| *v);
        let a = multiply_const(abs(leaf.clone()), factor);
        let b = multiply_const(abs(leaf.clone()), factor);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn distinct_constants_break_equality(factor in any::<i32>()) {
        prop_assume!(factor != i32::MAX);
        let leaf = to_int(|v: &i32| *v);
        let a = multiply_const(leaf.clone(), factor);
        let b = multiply_const(leaf.clone(), factor + 1);
        prop_assert_ne!(&a, &b);
    }
}
