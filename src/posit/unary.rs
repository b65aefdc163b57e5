use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The posit whose bit pattern follows that of `self`, wrapping from [`Self::MAX`] to
  /// [NaR](Self::NAR) and from NaR to [`Self::MIN`].
  ///
  /// Since the order of bit patterns (as signed integers) is the order of the reals they
  /// represent, this is the smallest posit greater than `self`.
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(Int::ONE))
  }

  /// The posit whose bit pattern precedes that of `self`, wrapping from [`Self::MIN`] to
  /// [NaR](Self::NAR) and from NaR to [`Self::MAX`].
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(Int::ONE))
  }

  /// The absolute value of `self`. Exact; [NaR](Self::NAR) stays NaR.
  #[inline]
  pub fn abs(self) -> Self {
    Self::from_bits(self.0.wrapping_abs())
  }
}

/// Exact: negating a posit is taking the two's complement of its bits. 0 and NaR are their own
/// negation.
impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for &Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
