//! # Sign
//!
//! Tri-state sign of a numeral. The zero sign is only valid for a zero
//! magnitude; canonicalization enforces this.
use std::ops::{Mul, Neg};

use num::{BigInt, BigRational};

use crate::rounding::Relation;

/// Sign of a numeral.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Sign {
    /// `x < 0`
    Negative,
    /// `x == 0`
    Zero,
    /// `x > 0`
    Positive,
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, other) => other,
            (Sign::Negative, other) => -other,
        }
    }
}

impl Mul<Sign> for BigInt {
    type Output = Self;

    fn mul(self, rhs: Sign) -> Self::Output {
        match rhs {
            Sign::Negative => -self,
            Sign::Zero => BigInt::from(0),
            Sign::Positive => self,
        }
    }
}

impl Mul<Sign> for BigRational {
    type Output = Self;

    fn mul(self, rhs: Sign) -> Self::Output {
        match rhs {
            Sign::Negative => -self,
            Sign::Zero => BigRational::from_integer(0.into()),
            Sign::Positive => self,
        }
    }
}

impl Mul<Sign> for Relation {
    type Output = Self;

    fn mul(self, rhs: Sign) -> Self::Output {
        match rhs {
            Sign::Negative => -self,
            Sign::Zero => Relation::Equal,
            Sign::Positive => self,
        }
    }
}
