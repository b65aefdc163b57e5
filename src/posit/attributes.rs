use super::*;
use crate::value::pow2;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The binary scale of `useed`, i.e. `2^ES`.
  pub const USEED_SCALE: i64 = 1 << Self::ES;

  /// `useed = 2^(2^ES)`, the factor by which each step of the regime scales a posit.
  pub fn useed() -> f64 {
    pow2(Self::USEED_SCALE)
  }

  /// [`Self::MAX`] as an `f64`.
  pub fn maxpos_value() -> f64 {
    pow2(Self::MAX_EXP)
  }

  /// [`Self::MIN_POSITIVE`] as an `f64`.
  pub fn minpos_value() -> f64 {
    pow2(Self::MIN_EXP)
  }

  /// The regime `k` of a value with binary scale `scale`, i.e. `floor(scale / 2^ES)`, clamped to
  /// the range of `i32` but not to the range of this posit type.
  pub fn calculate_k(scale: i64) -> i32 {
    (scale >> Self::ES).clamp(i32::MIN as i64, i32::MAX as i64) as i32
  }

  /// Same as [`Self::calculate_k`]. Used where the result is about to be checked against the
  /// projection range, to make the absence of clamping explicit.
  pub fn calculate_unconstrained_k(scale: i64) -> i32 {
    Self::calculate_k(scale)
  }

  /// Whether a value of binary scale `scale` lies outside `[MIN_EXP, MAX_EXP]`, and must therefore
  /// be projected onto [`Self::MIN_POSITIVE`] or [`Self::MAX`] (or their negatives) rather than
  /// rounded.
  pub fn check_inward_projection_range(scale: i64) -> bool {
    scale > Self::MAX_EXP || scale < Self::MIN_EXP
  }

  /// [`Self::MIN_POSITIVE`], or [`Self::MAX_NEGATIVE`] if `sign` is set.
  pub fn minpos_pattern(sign: bool) -> Self {
    if sign { Self::MAX_NEGATIVE } else { Self::MIN_POSITIVE }
  }

  /// [`Self::MAX`], or [`Self::MIN`] if `sign` is set.
  pub fn maxpos_pattern(sign: bool) -> Self {
    if sign { Self::MIN } else { Self::MAX }
  }

  /// The sign bit of `self`. Set for negative posits and for [NaR](Self::NAR).
  #[inline]
  pub fn sign(self) -> bool {
    !self.0.is_positive()
  }

  #[inline]
  pub fn is_zero(self) -> bool {
    self == Self::ZERO
  }

  #[inline]
  pub fn is_nar(self) -> bool {
    self == Self::NAR
  }

  #[inline]
  pub fn is_one(self) -> bool {
    self == Self::ONE
  }

  #[inline]
  pub fn is_minus_one(self) -> bool {
    self == Self::MINUS_ONE
  }

  /// Whether `self` is exactly `2^n` for some (possibly negative) integer `n`: a positive posit
  /// with no fraction bits set.
  pub fn is_power_of_2(self) -> bool {
    !self.is_special() && !self.sign() && self.decode().fraction().bits().is_zero()
  }

  /// The regime `k` of `self`; 0 for [zero](Self::ZERO) and [NaR](Self::NAR).
  pub fn regime_k(self) -> i32 {
    self.decode().regime().k()
  }

  /// The binary scale of `self`, such that `|self| = 2^scale × 1.fraction`; 0 for
  /// [zero](Self::ZERO) and [NaR](Self::NAR).
  pub fn scale(self) -> i64 {
    self.decode().scale()
  }

  /// Which of the four quadrants of the projective real circle `self` lies in.
  ///
  /// ```
  /// # use tapered_posit::{p16, Quadrant};
  /// assert_eq!(p16::from_bits(0x2000).quadrant(), Quadrant::SouthEast);
  /// assert_eq!(p16::ONE.quadrant(), Quadrant::NorthEast);
  /// assert_eq!(p16::MINUS_ONE.quadrant(), Quadrant::NorthWest);
  /// assert_eq!(p16::NAR.quadrant().to_string(), "NaR");
  /// ```
  pub fn quadrant(self) -> Quadrant {
    if self.is_zero() {
      Quadrant::Zero
    } else if self.is_nar() {
      Quadrant::NaR
    } else if self.sign() {
      if self <= Self::MINUS_ONE { Quadrant::NorthWest } else { Quadrant::SouthWest }
    } else if self >= Self::ONE {
      Quadrant::NorthEast
    } else {
      Quadrant::SouthEast
    }
  }
}

/// The position of a posit on the circle of projective reals, going counterclockwise from 0 at
/// the bottom: `(0, 1)` is the south-east, `[1, maxpos]` the north-east, NaR at the top,
/// `[-maxpos, -1]` the north-west and `(-1, 0)` the south-west.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum Quadrant {
  Zero,
  SouthEast,
  NorthEast,
  NaR,
  NorthWest,
  SouthWest,
}

impl core::fmt::Display for Quadrant {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Quadrant::Zero => "0",
      Quadrant::SouthEast => "SE",
      Quadrant::NorthEast => "NE",
      Quadrant::NaR => "NaR",
      Quadrant::NorthWest => "NW",
      Quadrant::SouthWest => "SW",
    })
  }
}
