use super::*;
use crate::underlying::BitBlock;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The size of this Posit type in bits (i.e. parameter `N`).
  ///
  /// Note: this is the logical size, not necessarily the size of the underlying type.
  pub const BITS: u32 = {
    assert!(
      N >= 3,
      "A posit cannot have fewer than 3 bits",
    );
    assert!(
      N <= Int::BITS,
      "Cannot represent an n-bit Posit with an underlying Int machine type with fewer bits.",
    );
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    assert!(
      ES < N,
      "Cannot use a number of exponent bits ES as high as the number of total bits N",
    );
    // Scales are handled as `i64`. The largest one is `MAX_EXP = (N-2) × 2^ES`, and the encoder
    // needs some headroom above it, so we require `4 × (N-2) × 2^ES < 2^64`.
    //
    // To make Rust allow this to go in compile-time (const), we round (N-2) down to the nearest
    // power of two and take the log, i.e. we check floor(log(N-2)) + ES + 2 < 64.
    assert!(
      (N - 2).ilog2() + ES + 2 < 64,
      "The chosen ES is too big for this N: the maximum scale (N-2) × 2^ES does not fit the scale \
      arithmetic. Consider lowering the number of exponent bits.",
    );
    ES
  };

  /// When representing an `N`-bit posit using a machine type whose width is `M`, the leftmost
  /// `N - M` bits are junk; they are always the same as the bit `N-1` (the function
  /// [`Self::sign_extend`] maintains this invariant).
  ///
  /// Of course, if [`Self::BITS`] is exactly as wide as the underlying `Int::BITS` (as is vastly
  /// the more common case), this is `0`.
  pub(crate) const JUNK_BITS: u32 = Int::BITS - Self::BITS;

  /// Take an `Int` and sign-extend from [`Self::BITS`] (logical width of posit) to `Int::BITS`.
  #[inline]
  pub(crate) fn sign_extend(x: Int) -> Int {
    if const { Self::JUNK_BITS == 0 } {
      x
    } else {
      (x << Self::JUNK_BITS) >> Self::JUNK_BITS
    }
  }

  /// Construct a posit from its raw bit representation. Bits higher (more significant) than the
  /// lowest `N` ([`Self::BITS`]) bits, if any, are ignored.
  #[inline]
  pub fn from_bits(bits: Int) -> Self {
    Self(Self::sign_extend(bits))
  }

  /// Return the underlying bit representation of `self` as a machine int. Bits higher
  /// (more significant) than the lowest `N` ([`Self::BITS`]) bits, if any, are set as equal to
  /// the `N-1`th bit (i.e. sign-extended).
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// The lowest `N` bits of `self` (no sign extension), as an unsigned number.
  #[inline]
  pub fn to_bits_unsigned(self) -> u128 {
    self.0.low_bits(Self::BITS)
  }

  /// The `N` bits of `self` in a [`BitBlock`], bit `N-1` being the sign.
  #[inline]
  pub fn to_bitblock(self) -> BitBlock {
    BitBlock::from_u128(self.to_bits_unsigned())
  }

  /// Construct a posit from the lowest `N` bits of a [`BitBlock`]; higher bits are ignored.
  #[inline]
  pub fn from_bitblock(bits: &BitBlock) -> Self {
    Self::from_bits(Int::of_u128_truncating(bits.low(Self::BITS).to_u128()))
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self == Self::ZERO || self == Self::NAR`, but faster.
  #[inline]
  pub(crate) fn is_special(&self) -> bool {
    (self.0 << Self::JUNK_BITS) << 1 == Int::ZERO
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 0, i8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_few() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 1, i32>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_32_few() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<9, 0, i8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_many() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<65, 3, i64>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_64_many() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 8, i8>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_equal() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<16, 17, i32>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_larger() {}

  /// ```compile_fail
  /// use tapered_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<64, 61, i64>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_scale_overflow() {}
}
