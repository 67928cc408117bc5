//! # Rounding
//!
//! The rounding method enumeration, the pure decision function shared by long
//! division and numeral rounding, and the relation indicator that accompanies
//! every inexact result.
use std::ops::Neg;

use num::BigRational;

use crate::error::{Error, Result};

/// How to round a value that falls between two representable results.
///
/// The half variants are conditional: they only differ when the discarded
/// remainder is exactly half of one unit in the last place.
///
/// For signed values, up and down are directional: up is toward positive
/// infinity and down toward negative infinity. [`divide`] works on magnitudes
/// only and never increments on `Down`; layers that know the sign substitute
/// [`RoundingMethod::reversed`] for negative values to keep the direction
/// correct.
///
/// [`divide`]: crate::division::divide
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundingMethod {
    /// Round down.
    Down,
    /// Round to nearest, down on a tie.
    HalfDown,
    /// Round to nearest, up on a tie.
    HalfUp,
    /// Round to nearest, to zero on a tie.
    HalfToZero,
    /// Round to zero.
    ToZero,
    /// Round up.
    Up,
}

impl RoundingMethod {
    /// The method with its direction reversed.
    ///
    /// Rounding a negative value down by magnitude rounds the signed value up;
    /// callers working on a magnitude apply the reversed method when the overall
    /// value is negative. `ToZero` and `HalfToZero` are their own reverse.
    pub fn reversed(self) -> Self {
        match self {
            RoundingMethod::Up => RoundingMethod::Down,
            RoundingMethod::Down => RoundingMethod::Up,
            RoundingMethod::HalfUp => RoundingMethod::HalfDown,
            RoundingMethod::HalfDown => RoundingMethod::HalfUp,
            RoundingMethod::ToZero | RoundingMethod::HalfToZero => self,
        }
    }
}

/// Relation of a computed value to the value it approximates.
///
/// Conversions and roundings return this alongside their result: `Equal` when
/// the result is exact, `Greater` when the result exceeds the true value,
/// `Less` when it falls short.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Relation {
    /// The result is less than the true value.
    Less,
    /// The result is exact.
    Equal,
    /// The result is greater than the true value.
    Greater,
}

impl Neg for Relation {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Equal => Relation::Equal,
            Relation::Greater => Relation::Less,
        }
    }
}

/// Decide whether to round away from the truncated value.
///
/// # Arguments
///
/// * `value`: The discarded remainder, as an exact ratio. Must be positive.
/// * `middle`: The ratio exactly halfway between the two candidate results.
/// * `method`: The rounding method.
///
/// # Return value
///
/// `true` to round away from the truncation, `false` to keep it.
///
/// # Errors
///
/// If `value` is not greater than 0: a zero remainder is exact and must not
/// reach a rounding decision.
pub fn rounds_away(
    value: &BigRational,
    middle: &BigRational,
    method: RoundingMethod,
) -> Result<bool> {
    if value <= &BigRational::from_integer(0.into()) {
        return Err(Error::invalid_value(value, "value", "must be greater than 0"));
    }

    Ok(match method {
        RoundingMethod::Down | RoundingMethod::ToZero => false,
        RoundingMethod::Up => true,
        RoundingMethod::HalfUp => value >= middle,
        RoundingMethod::HalfDown | RoundingMethod::HalfToZero => value > middle,
    })
}

#[cfg(test)]
mod test {
    use num::BigRational;

    use super::*;

    fn ratio(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(numerator.into(), denominator.into())
    }

    #[test]
    fn test_rounds_away_exceptions() {
        assert!(rounds_away(&ratio(0, 1), &ratio(1, 2), RoundingMethod::Up).is_err());
        assert!(rounds_away(&ratio(-1, 2), &ratio(1, 2), RoundingMethod::Up).is_err());
    }

    #[test]
    fn test_unconditional_methods() {
        for value in &[ratio(1, 3), ratio(1, 2), ratio(2, 3)] {
            let middle = ratio(1, 2);
            assert!(!rounds_away(value, &middle, RoundingMethod::Down).unwrap());
            assert!(!rounds_away(value, &middle, RoundingMethod::ToZero).unwrap());
            assert!(rounds_away(value, &middle, RoundingMethod::Up).unwrap());
        }
    }

    #[test]
    fn test_conditional_methods() {
        let middle = ratio(1, 2);
        for method in &[
            RoundingMethod::HalfUp,
            RoundingMethod::HalfDown,
            RoundingMethod::HalfToZero,
        ] {
            assert!(!rounds_away(&ratio(1, 3), &middle, *method).unwrap());
            assert!(rounds_away(&ratio(2, 3), &middle, *method).unwrap());
        }
        assert!(rounds_away(&ratio(1, 2), &middle, RoundingMethod::HalfUp).unwrap());
        assert!(!rounds_away(&ratio(1, 2), &middle, RoundingMethod::HalfDown).unwrap());
        assert!(!rounds_away(&ratio(1, 2), &middle, RoundingMethod::HalfToZero).unwrap());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(RoundingMethod::Up.reversed(), RoundingMethod::Down);
        assert_eq!(RoundingMethod::Down.reversed(), RoundingMethod::Up);
        assert_eq!(RoundingMethod::HalfUp.reversed(), RoundingMethod::HalfDown);
        assert_eq!(RoundingMethod::HalfDown.reversed(), RoundingMethod::HalfUp);
        assert_eq!(RoundingMethod::ToZero.reversed(), RoundingMethod::ToZero);
        assert_eq!(RoundingMethod::HalfToZero.reversed(), RoundingMethod::HalfToZero);
    }
}
