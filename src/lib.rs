#![cfg_attr(not(test), no_std)]
//! This crate provides arbitrary-configuration
//! [posit numbers](https://posithub.org/docs/posit_standard-2.pdf), built around an explicit
//! model of the posit encoding: a sign bit, a run-length coded **regime**, up to `ES` **exponent**
//! bits, and whatever **fraction** bits remain.
//!
//! # Introduction
//!
//! A posit with `N` bits and `ES` exponent bits represents the value
//!
//! ```text
//! (-1)^sign × useed^k × 2^exponent × 1.fraction,   useed = 2^(2^ES)
//! ```
//!
//! where `k` is encoded in unary by the regime. Because the regime has a variable length, the
//! number of exponent and fraction bits left in a given encoding depends on the magnitude of the
//! value: posits are *tapered*, with most precision around 1 and dynamic range traded off for
//! precision towards the extremes.
//!
//! This crate exposes those fields as first-class objects ([`RegimeField`], [`ExponentField`],
//! [`FractionField`]), decodes a bit pattern into them ([`Posit::decode`]), and encodes an
//! arbitrary binary value ([`Value`]) into a posit with round-to-nearest-even at the truncation
//! boundary ([`Posit::convert_to_posit`]).
//!
//! # Usage
//!
//! ```
//! # use tapered_posit::Posit;
//! use tapered_posit::{p8, p16, p32, p64};  // Standard: n bits, 2 exponent bits
//! type MyPosit = Posit<24, 3, i32>;  // Non-standard: 24 bits, 3 exponent bits
//!
//! // Create posits from ints, IEEE floats, strings, constants, or a raw bit representation.
//! # use tapered_posit::{RoundFrom, RoundInto};
//! let a = p32::round_from(2.71_f64);
//! let b = p32::round_from(42_i32);
//! let c = p32::from_bits(0x7f001337);
//! let d: p16 = "16.2x7fffp".parse().unwrap();
//!
//! // Look inside the encoding.
//! let decoded = b.decode();
//! assert_eq!(decoded.regime().k(), 1);
//! assert_eq!(decoded.scale(), 5);
//! assert_eq!(d, p16::MAX);
//!
//! // Convert posits back to floats, strings, or a raw bit representation.
//! assert_eq!(f64::round_from(b), 42.0);
//! assert_eq!(p8::ONE.to_bits(), 0b01000000)
//! ```
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod posit;
mod underlying;
mod value;

pub use posit::Posit;
pub use posit::{Decoded, Quadrant, Rounding, ParsePositError};
pub use posit::fields::{RegimeField, ExponentField, FractionField};
pub use underlying::{Int, BitBlock};
pub use value::{Value, ValueClass};

/// Standard-defined 8-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 2, i8>;

/// Standard-defined 16-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 2, i16>;

/// Standard-defined 32-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p32 = Posit<32, 2, i32>;

/// Standard-defined 64-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p64 = Posit<64, 2, i64>;

pub use posit::convert::{RoundFrom, RoundInto};

/// Number of cases generated by each `proptest!` test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x4000};
