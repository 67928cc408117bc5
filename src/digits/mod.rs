//! # Natural number digits
//!
//! Conversion between non-negative arbitrary precision integers and
//! most-significant-first digit sequences, and carry propagation into such a
//! sequence. The empty sequence denotes zero.
use num::{BigUint, Integer, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Compute the value of a digit sequence.
///
/// # Arguments
///
/// * `digits`: Digit sequence, most significant digit first.
/// * `base`: Base of the sequence, at least 2.
///
/// # Errors
///
/// If `base` is less than 2 or any digit is not in `[0, base)`.
///
/// Complexity: O(len(digits))
pub fn to_int(digits: &[u64], base: u64) -> Result<BigUint> {
    check_base(base)?;
    check_digits(digits, "digits", base)?;

    let mut value = BigUint::zero();
    for &digit in digits {
        value = value * base + digit;
    }
    Ok(value)
}

/// Express a value as a digit sequence.
///
/// The result has no leading zeros; zero becomes the empty sequence.
///
/// # Arguments
///
/// * `value`: The value to convert.
/// * `base`: Base of the result, at least 2.
///
/// # Errors
///
/// If `base` is less than 2.
///
/// Complexity: O(log_base(value))
pub fn from_int(value: &BigUint, base: u64) -> Result<Vec<u64>> {
    check_base(base)?;

    let big_base = BigUint::from(base);
    let mut value = value.clone();
    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&big_base);
        digits.push(remainder.to_u64().expect("remainder is less than the base"));
        value = quotient;
    }
    digits.reverse();
    Ok(digits)
}

/// Re-express a digit sequence in another base.
///
/// # Errors
///
/// If either base is less than 2 or any digit is not in `[0, from_base)`.
///
/// Complexity: O(len(digits) * log(value))
pub fn convert(digits: &[u64], from_base: u64, to_base: u64) -> Result<Vec<u64>> {
    from_int(&to_int(digits, from_base)?, to_base)
}

/// Add a carry digit at the least significant end of a sequence.
///
/// The result has the same length as the input; overflow at the most significant
/// end is reported through the carry-out, never by growing the sequence.
///
/// # Arguments
///
/// * `digits`: Digit sequence, most significant digit first.
/// * `carry`: The carry digit, in `[0, base)`.
/// * `base`: Base of the sequence, at least 2.
///
/// # Return value
///
/// The carry-out (0 or 1) and the resulting sequence.
///
/// # Errors
///
/// If `base` is less than 2, any digit is not in `[0, base)`, or `carry` is not
/// in `[0, base)`.
///
/// Complexity: O(len(digits))
pub fn carry_in(digits: &[u64], carry: u64, base: u64) -> Result<(u64, Vec<u64>)> {
    check_base(base)?;
    check_digits(digits, "digits", base)?;
    if carry >= base {
        return Err(Error::invalid_value(carry, "carry", "must be less than the base"));
    }

    let mut carry = carry;
    let mut result = vec![0; digits.len()];
    for (position, &digit) in digits.iter().enumerate().rev() {
        // u128 so that digit + carry cannot overflow for bases near u64::MAX
        let sum = digit as u128 + carry as u128;
        result[position] = (sum % base as u128) as u64;
        carry = (sum / base as u128) as u64;
    }
    Ok((carry, result))
}

pub(crate) fn check_base(base: u64) -> Result<()> {
    if base < 2 {
        Err(Error::invalid_value(base, "base", "must be at least 2"))
    } else {
        Ok(())
    }
}

pub(crate) fn check_digits(digits: &[u64], param: &'static str, base: u64) -> Result<()> {
    if digits.iter().any(|&digit| digit >= base) {
        Err(Error::invalid_value(
            digits,
            param,
            format!("for all elements, e, 0 <= e < {} required", base),
        ))
    } else {
        Ok(())
    }
}
