//! # Rational conversion
//!
//! The bridge between exact rationals and [`Radix`] numerals: sign handled
//! separately from magnitude, digit-level work delegated to the digits and
//! division modules.
use num::{BigInt, BigRational, One, Signed, Zero};

use crate::digits;
use crate::division::{self, Precision};
use crate::error::{Error, Result};
use crate::radix::{Radix, Sign};
use crate::rounding::{Relation, RoundingMethod};

/// Convert a rational value to a numeral in `to_base`.
///
/// # Arguments
///
/// * `value`: The value to convert.
/// * `to_base`: Base of the result, at least 2.
/// * `precision`: Bound on the number of fractional digits. Bounded conversion
///   produces exactly that many, rounding per `method`; unbounded conversion is
///   exact but runs in the size of the denominator.
/// * `method`: Rounding method, interpreted for the signed value: `Down` is
///   toward negative infinity regardless of sign.
///
/// # Return value
///
/// The numeral and its relation to `value`.
///
/// # Errors
///
/// If `to_base` is less than 2.
pub fn from_rational(
    value: &BigRational,
    to_base: u64,
    precision: Precision,
    method: RoundingMethod,
) -> Result<(Radix, Relation)> {
    digits::check_base(to_base).map_err(|_| {
        Error::invalid_value(to_base, "to_base", "must be at least 2")
    })?;

    if value.is_zero() {
        let non_repeating_part = match precision {
            Precision::Bounded(count) => vec![0; count],
            Precision::Unbounded => Vec::new(),
        };
        let zero = Radix::new(Sign::Zero, Vec::new(), non_repeating_part, Vec::new(), to_base)?;
        return Ok((zero, Relation::Equal));
    }

    let sign = if value.is_negative() { Sign::Negative } else { Sign::Positive };
    // division works on the magnitude; reverse the method below zero so that
    // the signed rounding direction is preserved
    let division_method = match sign {
        Sign::Negative => method.reversed(),
        _ => method,
    };

    let magnitude = value.abs();
    let numerator = digits::from_int(
        &magnitude.numer().to_biguint().expect("magnitude is non-negative"),
        to_base,
    )?;
    let denominator = digits::from_int(
        &magnitude.denom().to_biguint().expect("denominator is positive"),
        to_base,
    )?;

    let (integer_part, non_repeating_part, repeating_part, relation) =
        division::divide(&denominator, &numerator, to_base, precision, division_method)?;
    let relation = relation * sign;

    let result = Radix::new(sign, integer_part, non_repeating_part, repeating_part, to_base)?;

    // division rounds mid-computation; a second pass pins the exact number of
    // fractional digits and the final relation
    if let Precision::Bounded(count) = precision {
        let (result, second_relation) = result.rounded(count, method);
        let relation = match second_relation {
            Relation::Equal => relation,
            _ => second_relation,
        };
        Ok((result, relation))
    } else {
        Ok((result, relation))
    }
}

/// Round a rational to an integer according to `method`.
///
/// `Down` and `Up` are toward negative and positive infinity, `ToZero`
/// truncates, and the half methods compare the fractional part against one
/// half.
///
/// # Return value
///
/// The rounded integer and its relation to `value`.
pub fn round_to_int(value: &BigRational, method: RoundingMethod) -> (BigInt, Relation) {
    if value.denom().is_one() {
        return (value.numer().clone(), Relation::Equal);
    }

    let lower = value.floor().to_integer();
    let upper = &lower + BigInt::one();

    match method {
        RoundingMethod::Down => (lower, Relation::Less),
        RoundingMethod::Up => (upper, Relation::Greater),
        RoundingMethod::ToZero => {
            if lower.is_negative() {
                (upper, Relation::Greater)
            } else {
                (lower, Relation::Less)
            }
        },
        _ => {
            let delta = value - BigRational::from_integer(lower.clone());
            let half = BigRational::new(1.into(), 2.into());
            let away = match method {
                RoundingMethod::HalfUp => delta >= half,
                RoundingMethod::HalfDown => delta > half,
                RoundingMethod::HalfToZero => {
                    if lower.is_negative() {
                        delta >= half
                    } else {
                        delta > half
                    }
                },
                _ => unreachable!("unconditional methods are handled above"),
            };
            if away {
                (upper, Relation::Greater)
            } else {
                (lower, Relation::Less)
            }
        },
    }
}

#[cfg(test)]
mod test;
