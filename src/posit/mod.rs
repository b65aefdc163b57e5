//! This module and its submodules contain the posit type, the field objects a posit bit pattern
//! is made of, and the decoding/encoding machinery between the two.
//!
//! The layout of an `N`-bit posit with `ES` exponent bits is
//!
//! ```text
//!   sign   regime            exponent   fraction
//!   s      r r r … r r̄       e e … e    f f f … f
//!   1 bit  2 .. N-1 bits      0 .. ES    the rest
//! ```
//!
//! The regime is a run of identical bits terminated by the opposite bit (or by the end of the
//! posit). Its length decides how many bits remain for exponent and fraction, so every field
//! after it may be partially or totally missing; missing bits read as 0.
//!
//! Negative posits are the two's complement of the corresponding positive bit pattern, so the
//! fields of a negative posit are always read from its absolute value.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **Scale**: the binary exponent of a value, i.e. `k × 2^ES + exponent`.

/// A Posit floating point number with `N` bits and `ES` exponent bits, using `Int` as its
/// underlying type.
///
/// Examples:
///
/// ```
/// # use tapered_posit::Posit;
/// type Foo = Posit::<32, 2, i32>;  // A 32-bit posit with 2-bit exponent field, represented in a
///                                  // 32-bit machine type
/// type Bar = Posit::<6, 1, i8>;  // A 6-bit posit with 1-bit exponent field, represented in an
///                                // 8-bit machine type.
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Default)]  // Eq and Ord are the same as for two's complement int
pub struct Posit<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Int);

/// Basics
mod basics;

/// Constants (zero, NaR, minpos, maxpos, etc)
mod consts;

/// The regime, exponent and fraction field objects
pub mod fields;

/// The shared rounding decision type
mod rounding;
pub use rounding::Rounding;

/// Bit pattern → fields
mod decode;
pub use decode::Decoded;

/// Value → bit pattern
mod encode;

/// Scale, useed, projection range, quadrant and other derived attributes
mod attributes;
pub use attributes::Quadrant;

/// Conversions to and from other types
pub mod convert;

/// Negation, absolute value, successor/predecessor
mod unary;

/// Debug, Display, and the textual renderings of a posit
mod fmt;

/// Parsing from strings
mod parse;
pub use parse::ParsePositError;


/// An exact rational oracle for testing
#[cfg(test)]
mod rational;
