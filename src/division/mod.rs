//! # Long division
//!
//! Division of natural numbers expressed as digit sequences, producing the
//! integer, non-repeating fractional, and repeating fractional digit groups of
//! the quotient, and its algebraic inverse recovering the divisor and dividend
//! in lowest terms.
use std::collections::HashMap;

use num::{BigInt, BigRational, BigUint, Integer, One, ToPrimitive, Zero};
use num::rational::Ratio;

use crate::digits;
use crate::error::{Error, Result};
use crate::rounding::{self, Relation, RoundingMethod};

/// Bound on the number of fractional digits to compute.
///
/// Unbounded division runs until the expansion terminates or a cycle is found;
/// the cycle length is bounded by the divisor's magnitude, so a caller that
/// needs a latency guarantee on large divisors must pass `Bounded`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Precision {
    /// Compute at most this many fractional digits, rounding the last.
    Bounded(usize),
    /// Compute until the expansion is exact or repeats.
    Unbounded,
}

/// Divide natural numbers given as digit sequences.
///
/// # Arguments
///
/// * `divisor`: Digit sequence of the divisor, most significant first. Must not
///   be zero.
/// * `dividend`: Digit sequence of the dividend, most significant first.
/// * `base`: Base of both sequences and of the result, at least 2.
/// * `precision`: Bound on the number of fractional digits.
/// * `method`: Rounding method for the last digit when the bound cuts the
///   expansion short.
///
/// # Return value
///
/// The integer part, the non-repeating fractional part, the repeating
/// fractional part, and the relation of the result to the true quotient. The
/// repeating part is the cycle as first discovered; [`Radix::new`] reduces it
/// to its minimal period.
///
/// # Errors
///
/// If `base` is less than 2, any digit is out of range, or the divisor is zero.
///
/// Complexity: O(precision) when bounded, otherwise O(divisor).
///
/// [`Radix::new`]: crate::radix::Radix::new
pub fn divide(
    divisor: &[u64],
    dividend: &[u64],
    base: u64,
    precision: Precision,
    method: RoundingMethod,
) -> Result<(Vec<u64>, Vec<u64>, Vec<u64>, Relation)> {
    digits::check_base(base)?;
    digits::check_digits(divisor, "divisor", base)?;
    digits::check_digits(dividend, "dividend", base)?;
    if divisor.iter().all(|&digit| digit == 0) {
        return Err(Error::invalid_value(divisor, "divisor", "must be greater than 0"));
    }

    let divisor = digits::to_int(divisor, base)?;

    let (integer_part, remainder) = integer_division(&divisor, dividend, base);
    let (carry, non_repeating_part, repeating_part, relation) =
        fractional_division(&divisor, remainder, base, precision, method)?;

    let (carry_out, integer_part) = digits::carry_in(&integer_part, carry, base)?;
    let integer_part = Some(carry_out)
        .into_iter()
        .chain(integer_part)
        .skip_while(|&digit| digit == 0)
        .collect();

    Ok((integer_part, non_repeating_part, repeating_part, relation))
}

/// Standard long division of the dividend's digits, one at a time.
///
/// Returns the quotient digits, still with any leading zeros, and the final
/// remainder.
fn integer_division(divisor: &BigUint, dividend: &[u64], base: u64) -> (Vec<u64>, BigUint) {
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder = BigUint::zero();
    for &digit in dividend {
        remainder = remainder * base + digit;
        let (quotient_digit, next) = remainder.div_rem(divisor);
        quotient.push(quotient_digit.to_u64().expect("quotient digit is less than the base"));
        remainder = next;
    }
    (quotient, remainder)
}

/// Continue division past the radix point.
///
/// Each step multiplies the remainder by the base and divides; the pre-division
/// remainders seen so far are tracked, and the first recurrence marks the start
/// of the repeating cycle.
///
/// Returns the carry into the integer part (nonzero only when rounding up
/// overflows the fractional digits), the non-repeating and repeating parts, and
/// the relation to the true value.
fn fractional_division(
    divisor: &BigUint,
    remainder: BigUint,
    base: u64,
    precision: Precision,
    method: RoundingMethod,
) -> Result<(u64, Vec<u64>, Vec<u64>, Relation)> {
    let limit = match precision {
        Precision::Bounded(n) => Some(n),
        Precision::Unbounded => None,
    };

    let mut quotient = Vec::new();
    let mut seen = HashMap::new();
    let mut remainder = remainder * base;

    loop {
        if remainder.is_zero() {
            return Ok((0, quotient, Vec::new(), Relation::Equal));
        }
        if let Some(&start) = seen.get(&remainder) {
            let repeating = quotient.split_off(start);
            return Ok((0, quotient, repeating, Relation::Equal));
        }
        if limit == Some(quotient.len()) {
            return round(quotient, divisor, &remainder, base, method);
        }

        seen.insert(remainder.clone(), quotient.len());
        let (quotient_digit, next) = remainder.div_rem(divisor);
        quotient.push(quotient_digit.to_u64().expect("quotient digit is less than the base"));
        remainder = next * base;
    }
}

/// Round the last computed quotient digit against a nonzero remainder.
///
/// The remainder at this point has already been multiplied by the base, so it
/// is compared against `base / 2` rather than one half.
fn round(
    quotient: Vec<u64>,
    divisor: &BigUint,
    remainder: &BigUint,
    base: u64,
    method: RoundingMethod,
) -> Result<(u64, Vec<u64>, Vec<u64>, Relation)> {
    let value = BigRational::new(
        BigInt::from(remainder.clone()),
        BigInt::from(divisor.clone()),
    );
    let middle = BigRational::new(BigInt::from(base), BigInt::from(2));

    if rounding::rounds_away(&value, &middle, method)? {
        let (carry, quotient) = digits::carry_in(&quotient, 1, base)?;
        Ok((carry, quotient, Vec::new(), Relation::Greater))
    } else {
        Ok((0, quotient, Vec::new(), Relation::Less))
    }
}

/// Find the divisor and dividend that yield the given component parts.
///
/// Exact inverse of [`divide`]: a fraction `0.N(R)` in base `b` equals
/// `(N‖R − N) / (b^|N| · (b^|R| − 1))` when a repeating part `R` exists, and
/// `N / b^|N|` otherwise. The result is reduced to lowest terms.
///
/// # Arguments
///
/// * `integer_part`: Digits left of the radix point, most significant first.
/// * `non_repeating_part`: Fractional digits before the cycle.
/// * `repeating_part`: The repeating cycle, possibly empty.
/// * `base`: Base of all three sequences, at least 2.
///
/// # Return value
///
/// The divisor and dividend as digit sequences in `base`, in lowest terms.
///
/// # Errors
///
/// If `base` is less than 2 or any digit is out of range.
///
/// Complexity: O(len(integer_part) + len(non_repeating_part) + len(repeating_part))
pub fn undivide(
    integer_part: &[u64],
    non_repeating_part: &[u64],
    repeating_part: &[u64],
    base: u64,
) -> Result<(Vec<u64>, Vec<u64>)> {
    digits::check_base(base)?;
    digits::check_digits(integer_part, "integer_part", base)?;
    digits::check_digits(non_repeating_part, "non_repeating_part", base)?;
    digits::check_digits(repeating_part, "repeating_part", base)?;

    let shift_length = repeating_part.len();
    let fractional_length = non_repeating_part.len();
    let shift = num::pow(BigUint::from(base), fractional_length);

    let with_repeating: Vec<u64> = integer_part
        .iter()
        .chain(non_repeating_part)
        .chain(repeating_part)
        .copied()
        .collect();
    let top = Ratio::new(digits::to_int(&with_repeating, base)?, shift.clone());

    let result = if shift_length == 0 {
        top
    } else {
        let without_repeating: Vec<u64> = integer_part
            .iter()
            .chain(non_repeating_part)
            .copied()
            .collect();
        let bottom = Ratio::new(digits::to_int(&without_repeating, base)?, shift);
        let cycle_shift = num::pow(BigUint::from(base), shift_length) - BigUint::one();
        (top - bottom) / Ratio::from_integer(cycle_shift)
    };

    Ok((
        digits::from_int(result.denom(), base)?,
        digits::from_int(result.numer(), base)?,
    ))
}
