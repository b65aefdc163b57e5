//! This module contains the substrate the posit fields are built on, hidden from the end-user
//! except for two items:
//!
//!   - the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32`, `i64`, and `i128`, that
//!     stores the raw bits of a posit;
//!   - the [`BitBlock`] fixed-capacity bit buffer, that stores the bits of each field and serves as
//!     scratch space when encoding.

/// The trait for the underlying machine integer types that can be used to represent a posit
/// (only satisfied by `i8`, `i16`, `i32`, `i64`, and `i128`).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::Not<Output=Self> +
  Into<i128>
{
  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  fn is_positive(self) -> bool;

  /// Logical shift right (rather than arithmetic shift). Short for `(self as uX >> n) as iX`.
  fn lshr(self, n: u32) -> Self;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_i16.mask_lsb(4), 0x000d_i16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// The lowest `n` bits of `self`, zero-extended to a `u128` (`n` may be up to 128).
  fn low_bits(self, n: u32) -> u128;

  /// Truncating conversion from the lowest bits of a `u128`.
  fn of_u128_truncating(x: u128) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;
}

mod int;
mod const_as;
mod bitblock;

pub use const_as::const_as;
pub use bitblock::BitBlock;
