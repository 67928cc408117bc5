//! # Radix numerals
//!
//! The canonical representation of a signed rational in a fixed base: sign,
//! integer digits, non-repeating fractional digits, and the minimal repeating
//! cycle. Values are immutable; every transforming operation returns a new
//! numeral.
//!
//! Numerals compare for equality digit for digit. They are deliberately not
//! ordered: representations in different bases are not comparable without
//! conversion, so no `Ord` or `PartialOrd` is provided.
use itertools::repeat_n;
use num::{BigInt, BigRational};

pub use sign::Sign;

use crate::digits;
use crate::division::{self, Precision};
use crate::error::{Error, Result};
use crate::rational;
use crate::rounding::{self, Relation, RoundingMethod};

pub mod sign;

/// A numeral: a signed rational in positional notation in a fixed base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Radix {
    sign: Sign,
    integer_part: Vec<u64>,
    non_repeating_part: Vec<u64>,
    repeating_part: Vec<u64>,
    base: u64,
}

impl Radix {
    /// Construct a numeral from its five fields, validating and canonicalizing.
    ///
    /// Canonicalization strips leading zeros from the integer part, reduces the
    /// repeating part to its minimal period, folds a duplicated tail of the
    /// non-repeating part into a rotation of the cycle, eliminates an
    /// all-biggest-digit cycle by carrying, and forces the sign to zero for a
    /// zero magnitude. When the repeating part is empty, trailing zeros of the
    /// non-repeating part are kept: a value rounded to `n` fractional digits
    /// holds exactly `n` of them. A supplied cycle may absorb such zeros.
    ///
    /// # Errors
    ///
    /// If `base` is less than 2, any digit is not in `[0, base)`, or the sign
    /// is zero while some digit is not.
    pub fn new(
        sign: Sign,
        integer_part: Vec<u64>,
        non_repeating_part: Vec<u64>,
        repeating_part: Vec<u64>,
        base: u64,
    ) -> Result<Self> {
        digits::check_base(base)?;
        digits::check_digits(&integer_part, "integer_part", base)?;
        digits::check_digits(&non_repeating_part, "non_repeating_part", base)?;
        digits::check_digits(&repeating_part, "repeating_part", base)?;
        if sign == Sign::Zero
            && integer_part
                .iter()
                .chain(&non_repeating_part)
                .chain(&repeating_part)
                .any(|&digit| digit != 0)
        {
            return Err(Error::invalid_value(
                sign,
                "sign",
                "must not be zero for a nonzero magnitude",
            ));
        }

        Ok(Self::canonical(sign, integer_part, non_repeating_part, repeating_part, base))
    }

    /// Canonicalize digit groups already known to be in range.
    fn canonical(
        sign: Sign,
        integer_part: Vec<u64>,
        non_repeating_part: Vec<u64>,
        mut repeating_part: Vec<u64>,
        base: u64,
    ) -> Self {
        let mut integer_part: Vec<u64> = integer_part
            .into_iter()
            .skip_while(|&digit| digit == 0)
            .collect();

        repeating_part.truncate(repeat_length(&repeating_part));
        let (mut non_repeating_part, mut repeating_part) =
            canonicalize_fraction(non_repeating_part, repeating_part);
        if repeating_part.iter().all(|&digit| digit == 0) {
            repeating_part.clear();
        }

        // a cycle of only the biggest digit equals a carry of one unit
        if repeating_part == [base - 1] {
            repeating_part.clear();
            let (carry, fractional) = digits::carry_in(&non_repeating_part, 1, base)
                .expect("canonical digits are in range");
            non_repeating_part = fractional;
            if carry != 0 {
                let (carry, integer) = digits::carry_in(&integer_part, carry, base)
                    .expect("canonical digits are in range");
                integer_part = integer;
                if carry != 0 {
                    integer_part.insert(0, carry);
                }
            }
        }

        let sign = if integer_part.is_empty()
            && repeating_part.is_empty()
            && non_repeating_part.iter().all(|&digit| digit == 0)
        {
            Sign::Zero
        } else {
            sign
        };

        Self { sign, integer_part, non_repeating_part, repeating_part, base }
    }

    /// Sign of the value.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Base of the representation, at least 2.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Digits left of the radix point, most significant first, no leading zeros.
    pub fn integer_part(&self) -> &[u64] {
        &self.integer_part
    }

    /// Fractional digits before the repeating cycle begins.
    pub fn non_repeating_part(&self) -> &[u64] {
        &self.non_repeating_part
    }

    /// The minimal repeating cycle; empty when the value terminates.
    pub fn repeating_part(&self) -> &[u64] {
        &self.repeating_part
    }

    /// The exact rational value of this numeral.
    pub fn as_rational(&self) -> BigRational {
        let (divisor, dividend) = division::undivide(
            &self.integer_part,
            &self.non_repeating_part,
            &self.repeating_part,
            self.base,
        )
        .expect("canonical parts are valid");
        let numerator = digits::to_int(&dividend, self.base).expect("canonical parts are valid");
        let denominator = digits::to_int(&divisor, self.base).expect("canonical parts are valid");
        BigRational::new(numerator.into(), denominator.into()) * self.sign
    }

    /// This value rounded to an integer according to `method`.
    pub fn as_int(&self, method: RoundingMethod) -> (BigInt, Relation) {
        let (rounded, relation) = self.rounded(0, method);
        let value = digits::to_int(&rounded.integer_part, rounded.base)
            .expect("canonical parts are valid");
        (BigInt::from(value) * self.sign, relation)
    }

    /// This value with the fractional part rounded to exactly `precision`
    /// digits according to `method`.
    ///
    /// The result has a non-repeating part of exactly `precision` digits and an
    /// empty repeating part. The relation reports how the rounded value
    /// compares to this one. `Down` and `Up` are directional for the signed
    /// value: rounding a negative numeral down increases its magnitude.
    pub fn rounded(&self, precision: usize, method: RoundingMethod) -> (Self, Relation) {
        if self.sign == Sign::Zero {
            let zero = Self {
                sign: Sign::Zero,
                integer_part: Vec::new(),
                non_repeating_part: vec![0; precision],
                repeating_part: Vec::new(),
                base: self.base,
            };
            return (zero, Relation::Equal);
        }

        let mut expansion = self
            .non_repeating_part
            .iter()
            .copied()
            .chain(self.repeating_part.iter().copied().cycle());
        let mut kept: Vec<u64> = expansion.by_ref().take(precision).collect();
        let padding = precision - kept.len();
        kept.extend(repeat_n(0, padding));

        let discarded_non_repeating =
            self.non_repeating_part.get(precision..).unwrap_or(&[]);
        if discarded_non_repeating.iter().all(|&digit| digit == 0)
            && self.repeating_part.is_empty()
        {
            return (self.truncated(kept), Relation::Equal);
        }

        let effective = match self.sign {
            Sign::Negative => method.reversed(),
            _ => method,
        };
        let away = match effective {
            RoundingMethod::Down | RoundingMethod::ToZero => false,
            RoundingMethod::Up => true,
            _ => {
                // the discarded digits, as an exact fraction of one unit in the
                // last kept place
                let repeating = if discarded_non_repeating.is_empty() {
                    // the cycle as seen from the cut: the expansion iterator has
                    // already advanced `precision` digits into it
                    expansion.by_ref().take(self.repeating_part.len()).collect()
                } else {
                    self.repeating_part.clone()
                };
                let remainder = Self::canonical(
                    Sign::Positive,
                    Vec::new(),
                    discarded_non_repeating.to_vec(),
                    repeating,
                    self.base,
                );
                let half = BigRational::new(1.into(), 2.into());
                rounding::rounds_away(&remainder.as_rational(), &half, effective)
                    .expect("a non-exact discarded remainder is positive")
            }
        };

        if away {
            (self.incremented(kept), Relation::Greater * self.sign)
        } else {
            (self.truncated(kept), Relation::Less * self.sign)
        }
    }

    /// This numeral with the fractional part replaced by `non_repeating_part`.
    fn truncated(&self, non_repeating_part: Vec<u64>) -> Self {
        Self::canonical(
            self.sign,
            self.integer_part.clone(),
            non_repeating_part,
            Vec::new(),
            self.base,
        )
    }

    /// As [`Radix::truncated`], with one unit added in the last place.
    fn incremented(&self, non_repeating_part: Vec<u64>) -> Self {
        let (carry, non_repeating_part) = digits::carry_in(&non_repeating_part, 1, self.base)
            .expect("canonical digits are in range");
        let (carry, mut integer_part) = digits::carry_in(&self.integer_part, carry, self.base)
            .expect("canonical digits are in range");
        if carry != 0 {
            integer_part.insert(0, carry);
        }
        Self::canonical(self.sign, integer_part, non_repeating_part, Vec::new(), self.base)
    }

    /// This value expressed in another base.
    ///
    /// An equal copy for the same base; otherwise the exact rational value is
    /// converted without a precision bound, which may be expensive for large
    /// denominators. Round after converting when a bound is needed.
    ///
    /// # Errors
    ///
    /// If `base` is less than 2.
    pub fn in_base(&self, base: u64) -> Result<Self> {
        if base == self.base {
            return Ok(self.clone());
        }
        rational::from_rational(
            &self.as_rational(),
            base,
            Precision::Unbounded,
            RoundingMethod::Down,
        )
        .map(|(radix, _)| radix)
    }
}

/// The minimal period of `part`.
///
/// The smallest length dividing `len(part)` whose prefix, repeated, equals the
/// whole; the full length if no shorter period exists.
fn repeat_length(part: &[u64]) -> usize {
    let length = part.len();
    for period in 1..=length / 2 {
        if length % period == 0 && (period..length).all(|i| part[i] == part[i - period]) {
            return period;
        }
    }
    length
}

/// Shrink the non-repeating part by absorbing its tail into the cycle.
///
/// A suffix of the non-repeating digits that overlaps the repeating cycle can
/// be expressed by starting the cycle earlier at a rotation: `[6, 2, 1, 2]`
/// with cycle `[1, 2]` becomes `[6]` with cycle `[2, 1]`.
fn canonicalize_fraction(
    non_repeating: Vec<u64>,
    repeating: Vec<u64>,
) -> (Vec<u64>, Vec<u64>) {
    if repeating.is_empty() {
        return (non_repeating, repeating);
    }
    let period = repeating.len();

    // drop whole copies of the cycle from the end
    let mut end = non_repeating.len();
    while end >= period && non_repeating[end - period..end] == repeating[..] {
        end -= period;
    }

    // then the longest partial overlap, rotating the cycle to match
    let overlap = (1..=(period - 1).min(end))
        .rev()
        .find(|&length| repeating[period - length..] == non_repeating[end - length..end])
        .unwrap_or(0);

    let mut rotated = repeating[period - overlap..].to_vec();
    rotated.extend_from_slice(&repeating[..period - overlap]);
    (non_repeating[..end - overlap].to_vec(), rotated)
}
