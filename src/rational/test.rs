use num::BigRational;

use crate::division::Precision;
use crate::radix::Sign;
use crate::rational::{from_rational, round_to_int};
use crate::rounding::{Relation, RoundingMethod};

fn ratio(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(numerator.into(), denominator.into())
}

#[test]
fn test_exceptions() {
    assert!(
        from_rational(&ratio(1, 2), 0, Precision::Unbounded, RoundingMethod::Down).is_err()
    );
}

#[test]
fn test_zero() {
    let (radix, relation) =
        from_rational(&ratio(0, 1), 10, Precision::Unbounded, RoundingMethod::Down).unwrap();
    assert_eq!(radix.sign(), Sign::Zero);
    assert!(radix.non_repeating_part().is_empty());
    assert_eq!(relation, Relation::Equal);

    // a bounded conversion of zero still carries the requested digit count
    let (radix, relation) =
        from_rational(&ratio(0, 1), 10, Precision::Bounded(3), RoundingMethod::Down).unwrap();
    assert_eq!(radix.non_repeating_part(), &[0, 0, 0]);
    assert_eq!(relation, Relation::Equal);
}

#[test]
fn test_exact_conversion() {
    // 7/4 in base 2 is 1.11
    let (radix, relation) =
        from_rational(&ratio(7, 4), 2, Precision::Unbounded, RoundingMethod::Down).unwrap();
    assert_eq!(radix.sign(), Sign::Positive);
    assert_eq!(radix.integer_part(), &[1]);
    assert_eq!(radix.non_repeating_part(), &[1, 1]);
    assert!(radix.repeating_part().is_empty());
    assert_eq!(relation, Relation::Equal);
    assert_eq!(radix.as_rational(), ratio(7, 4));
}

#[test]
fn test_repeating_conversion() {
    // 1/3 in base 10 is 0.(3), exactly
    let (radix, relation) =
        from_rational(&ratio(1, 3), 10, Precision::Unbounded, RoundingMethod::Down).unwrap();
    assert_eq!(radix.repeating_part(), &[3]);
    assert_eq!(relation, Relation::Equal);
    assert_eq!(radix.as_rational(), ratio(1, 3));
}

#[test]
fn test_negative_round_trip() {
    let value = ratio(-7, 6);
    let (radix, relation) =
        from_rational(&value, 10, Precision::Unbounded, RoundingMethod::Down).unwrap();
    assert_eq!(radix.sign(), Sign::Negative);
    assert_eq!(relation, Relation::Equal);
    assert_eq!(radix.as_rational(), value);
}

#[test]
fn test_five_eighths_to_zero_digits() {
    // 5/8 = 0.625 > 1/2, so half-up at zero digits gives 1
    let (radix, relation) =
        from_rational(&ratio(5, 8), 3, Precision::Bounded(0), RoundingMethod::HalfUp).unwrap();
    assert_eq!(radix.integer_part(), &[1]);
    assert!(radix.non_repeating_part().is_empty());
    assert_eq!(relation, Relation::Greater);
    assert_eq!(radix.as_rational(), ratio(1, 1));
}

#[test]
fn test_bounded_precision_digit_count() {
    let (radix, relation) =
        from_rational(&ratio(1, 3), 10, Precision::Bounded(4), RoundingMethod::Down).unwrap();
    assert_eq!(radix.non_repeating_part(), &[3, 3, 3, 3]);
    assert!(radix.repeating_part().is_empty());
    assert_eq!(relation, Relation::Less);

    let (radix, relation) =
        from_rational(&ratio(1, 3), 10, Precision::Bounded(4), RoundingMethod::Up).unwrap();
    assert_eq!(radix.non_repeating_part(), &[3, 3, 3, 4]);
    assert_eq!(relation, Relation::Greater);
}

#[test]
fn test_bounded_precision_negative() {
    // -1/3 rounded down is away from zero: -0.3334
    let (radix, relation) =
        from_rational(&ratio(-1, 3), 10, Precision::Bounded(4), RoundingMethod::Down).unwrap();
    assert_eq!(radix.sign(), Sign::Negative);
    assert_eq!(radix.non_repeating_part(), &[3, 3, 3, 4]);
    assert_eq!(relation, Relation::Less);

    let (radix, relation) =
        from_rational(&ratio(-1, 3), 10, Precision::Bounded(4), RoundingMethod::ToZero).unwrap();
    assert_eq!(radix.non_repeating_part(), &[3, 3, 3, 3]);
    assert_eq!(relation, Relation::Greater);
}

#[test]
fn test_round_to_int_integral() {
    assert_eq!(
        round_to_int(&ratio(10, 5), RoundingMethod::HalfUp),
        (2.into(), Relation::Equal)
    );
}

#[test]
fn test_round_to_int() {
    let value = ratio(7, 2);
    assert_eq!(round_to_int(&value, RoundingMethod::Down), (3.into(), Relation::Less));
    assert_eq!(round_to_int(&value, RoundingMethod::Up), (4.into(), Relation::Greater));
    assert_eq!(round_to_int(&value, RoundingMethod::ToZero), (3.into(), Relation::Less));
    assert_eq!(round_to_int(&value, RoundingMethod::HalfUp), (4.into(), Relation::Greater));
    assert_eq!(round_to_int(&value, RoundingMethod::HalfDown), (3.into(), Relation::Less));
    assert_eq!(round_to_int(&value, RoundingMethod::HalfToZero), (3.into(), Relation::Less));

    let value = ratio(-7, 2);
    assert_eq!(round_to_int(&value, RoundingMethod::Down), ((-4).into(), Relation::Less));
    assert_eq!(round_to_int(&value, RoundingMethod::Up), ((-3).into(), Relation::Greater));
    assert_eq!(round_to_int(&value, RoundingMethod::ToZero), ((-3).into(), Relation::Greater));
    assert_eq!(
        round_to_int(&value, RoundingMethod::HalfUp),
        ((-3).into(), Relation::Greater)
    );
    assert_eq!(
        round_to_int(&value, RoundingMethod::HalfDown),
        ((-4).into(), Relation::Less)
    );
    assert_eq!(
        round_to_int(&value, RoundingMethod::HalfToZero),
        ((-3).into(), Relation::Greater)
    );
}

#[test]
fn test_round_to_int_off_half() {
    let value = ratio(7, 3);
    for method in &[
        RoundingMethod::HalfUp,
        RoundingMethod::HalfDown,
        RoundingMethod::HalfToZero,
    ] {
        assert_eq!(round_to_int(&value, *method), (2.into(), Relation::Less));
    }
}
