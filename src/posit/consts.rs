use super::*;
use crate::underlying::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(Int::ZERO);

  /// NAR is the `0b1000...` bit pattern, appropriately sign-extended. This is that number
  /// represented as an i128 (max width of any Int).
  const NAR_I128: i128 = i128::MIN >> (128 - Self::BITS);

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self(const_as(Self::NAR_I128));

  /// Largest representable value (maxpos), equal to `-MIN`.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self(const_as(!Self::NAR_I128));

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self(const_as(Self::NAR_I128 + 1));

  /// Smallest *positive* value (minpos), equal to `-MAX_NEGATIVE`.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self(Int::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self(const_as(-1));

  /// The largest regime value `k`, that of [`Self::MAX`]. The smallest is its negation.
  pub const MAX_K: i32 = Self::BITS as i32 - 2;

  /// The maximum scale; [`Self::MAX`] = 2 <sup>[`Self::MAX_EXP`]</sup>.
  pub const MAX_EXP: i64 = (Self::MAX_K as i64) << Self::ES;

  /// The minimum scale; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_EXP: i64 = -Self::MAX_EXP;

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self(const_as(-(Self::NAR_I128 >> 1)));

  /// Negative 1 (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self(const_as(Self::NAR_I128 >> 1));
}
