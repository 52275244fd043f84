use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use streamexpr::ops::{abs, cast, divide, plus, pow_const, sign};
use streamexpr::{
    compose, or_else, or_else_throw, to_double, to_double_nullable, to_int, to_int_nullable,
    to_short, to_str, Expression, ExpressionError, ExpressionType, Mapping, NullableExpression,
    NullableGetter, Transform,
};

struct Segment {
    length: f64,
    label: String,
    samples: i32,
    offset: Option<i32>,
    weight: Option<f64>,
}

fn segment(length: f64) -> Segment {
    Segment {
        length,
        label: "seg".to_string(),
        samples: 4,
        offset: None,
        weight: Some(2.5),
    }
}

fn offset_field() -> NullableGetter<Segment, i32> {
    to_int_nullable(|s: &Segment| s.offset)
}

#[test]
fn test_absolute_length_pipeline() {
    // Normalize a possibly negative length and truncate it to whole units.
    let whole_units = cast::<i32, _, _>(abs(to_double(|s: &Segment| s.length)));

    for (raw, expected) in [(-5.0, 5), (0.0, 0), (7.9, 7)] {
        assert_eq!(whole_units.eval(&segment(raw)).unwrap(), expected);
    }
    assert_eq!(whole_units.expression_type(), ExpressionType::Int);
}

#[test]
fn test_reciprocal_of_sample_count() {
    let reciprocal = pow_const(to_int(|s: &Segment| s.samples), -1i32);

    assert_eq!(reciprocal.eval(&segment(1.0)).unwrap(), 0.25);
    assert_eq!(reciprocal.expression_type(), ExpressionType::Double);
}

#[test]
fn test_mixed_width_arithmetic_promotes() {
    // Short + Int evaluates in Int, matching the wider operand.
    let total = plus(
        to_short(|s: &Segment| s.samples as i16),
        to_int(|s: &Segment| s.samples),
    );

    assert_eq!(total.eval(&segment(1.0)).unwrap(), 8i32);
    assert_eq!(total.expression_type(), ExpressionType::Int);
}

#[test]
fn test_density_uses_ieee_division() {
    let density = divide(
        to_double(|s: &Segment| s.length),
        to_int(|s: &Segment| s.samples),
    );

    assert_eq!(density.eval(&segment(10.0)).unwrap(), 2.5);

    // A zero divisor flows through as IEEE infinity rather than an error.
    let by_zero = divide(to_double(|s: &Segment| s.length), to_int(|_: &Segment| 0));
    assert_eq!(by_zero.eval(&segment(3.0)).unwrap(), f64::INFINITY);
}

#[test]
fn test_nullable_bridge_with_default() {
    let offset = or_else(offset_field(), 0);

    assert_eq!(offset.eval(&segment(1.0)).unwrap(), 0);

    let mut with_offset = segment(1.0);
    with_offset.offset = Some(12);
    assert_eq!(offset.eval(&with_offset).unwrap(), 12);
    assert_eq!(offset.expression_type(), ExpressionType::Int);
}

#[test]
fn test_nullable_bridge_that_requires_a_value() {
    let weight = or_else_throw(to_double_nullable(|s: &Segment| s.weight));

    assert_eq!(weight.eval(&segment(1.0)).unwrap(), 2.5);

    let mut missing = segment(1.0);
    missing.weight = None;
    let err = weight.eval(&missing).unwrap_err();
    assert_eq!(
        err,
        ExpressionError::AbsentValue {
            expression_type: ExpressionType::NullableDouble,
        }
    );
}

#[test]
fn test_arithmetic_over_a_bridged_value() {
    // The bridge output is non-nullable, so it composes with any operator.
    let padded = plus(or_else(offset_field(), 0), to_int(|s: &Segment| s.samples));

    let mut input = segment(1.0);
    input.offset = Some(6);
    assert_eq!(padded.eval(&input).unwrap(), 10);
}

#[test]
fn test_structural_equality_deduplicates_plans() {
    // Two trees over the same leaves collapse to one planner cache entry.
    let length = to_double(|s: &Segment| s.length);
    let first = cast::<i64, _, _>(abs(length.clone()));
    let second = cast::<i64, _, _>(abs(length.clone()));
    assert_eq!(first, second);

    let mut cache = HashMap::new();
    cache.insert(first, "plan-a");
    cache.insert(second, "plan-b");
    assert_eq!(cache.len(), 1);

    // A tree over an independently constructed leaf stays distinct.
    let other_leaf = to_double(|s: &Segment| s.length);
    let third = cast::<i64, _, _>(abs(other_leaf));
    assert!(!cache.contains_key(&third));
}

#[test]
fn test_composed_access_into_nested_input() {
    struct Record {
        segment: Option<Segment>,
    }

    let length = compose(
        Mapping::new(|r: &Record| r.segment.as_ref().map(|s| s.length)),
        to_double(|v: &f64| *v),
    );

    let hit = Record {
        segment: Some(segment(9.0)),
    };
    assert_eq!(length.eval(&hit).unwrap(), Some(9.0));

    let miss = Record { segment: None };
    assert_eq!(length.eval(&miss).unwrap(), None);
    assert_eq!(length.expression_type(), ExpressionType::NullableDouble);
}

#[test]
fn test_mapper_changes_scalar_kind() {
    let label_len = streamexpr::map_to::<i32, _, _>(
        to_str(|s: &Segment| s.label.clone()),
        Transform::new(|label: String| label.len() as i32),
    );

    assert_eq!(label_len.eval(&segment(1.0)).unwrap(), 3);
    assert_eq!(label_len.expression_type(), ExpressionType::Int);
}

#[test]
fn test_sign_of_length() {
    let direction = sign(to_double(|s: &Segment| s.length));

    assert_eq!(direction.eval(&segment(-3.5)).unwrap(), -1i8);
    assert_eq!(direction.eval(&segment(0.0)).unwrap(), 0i8);
    assert_eq!(direction.eval(&segment(8.0)).unwrap(), 1i8);
}

#[test]
fn test_concurrent_evaluation_of_a_shared_tree() {
    let expr = Arc::new(pow_const(
        cast::<i64, _, _>(abs(to_double(|s: &Segment| s.length))),
        2i32,
    ));

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let expr = Arc::clone(&expr);
        handles.push(thread::spawn(move || {
            let input = segment(-f64::from(i));
            let out = expr.eval(&input).unwrap();
            assert_eq!(out, f64::from(i * i));
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_hash_agreement_for_equal_trees() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let leaf = to_int(|s: &Segment| s.samples);
    let a = plus(abs(leaf.clone()), leaf.clone());
    let b = plus(abs(leaf.clone()), leaf.clone());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}
