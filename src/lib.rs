//! # Radices
//!
//! Exact conversion of rational numbers to and from positional numeral
//! representations in any base of at least 2, with configurable rounding to a
//! fixed number of fractional digits.
//!
//! The central type is [`Radix`]: sign, integer digits, non-repeating
//! fractional digits, and the minimal repeating cycle of a rational value in a
//! fixed base. [`from_rational`] produces one from any [`num::BigRational`]
//! with an exact repeating expansion or a rounded bounded one, and every
//! inexact step reports its [`Relation`] to the true value.
//!
//! Everything is a pure function over immutable values: no state is retained
//! between calls, and identical inputs always produce identical results. The
//! one resource concern is that unbounded conversion of a fraction runs in the
//! size of its denominator; pass a bounded [`Precision`] when latency matters.
//!
//! ```
//! use num::BigRational;
//! use radices::{from_rational, Precision, Relation, RoundingMethod};
//!
//! let third = BigRational::new(1.into(), 3.into());
//! let (radix, relation) = from_rational(
//!     &third,
//!     10,
//!     Precision::Unbounded,
//!     RoundingMethod::Down,
//! ).unwrap();
//! assert_eq!(radix.repeating_part(), &[3]);
//! assert_eq!(relation, Relation::Equal);
//! assert_eq!(radix.as_rational(), third);
//! ```
pub mod digits;
pub mod division;
pub mod error;
pub mod radix;
pub mod rational;
pub mod rounding;

pub use division::{divide, undivide, Precision};
pub use error::{Error, Result};
pub use radix::{Radix, Sign};
pub use rational::{from_rational, round_to_int};
pub use rounding::{rounds_away, Relation, RoundingMethod};
