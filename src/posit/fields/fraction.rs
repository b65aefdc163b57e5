use crate::underlying::BitBlock;
use crate::value::pow2;

/// The fraction of an `N`-bit posit with `ES` exponent bits: the bits after the hidden 1, stored
/// left aligned in [`Self::FBITS`] bits (bit `FBITS-1` weighs 2<sup>-1</sup>).
///
/// `FBITS = N - 3 - ES` is the most fraction bits any encoding can have, reached when the regime
/// takes its minimum of 2 bits.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash, Default)]
pub struct FractionField<const N: u32, const ES: u32> {
  bits: BitBlock,
  nr_bits: u32,
}

impl<const N: u32, const ES: u32> FractionField<N, ES> {
  /// Capacity of the fraction, `max(0, N - 3 - ES)`.
  pub const FBITS: u32 = if N > 3 + ES { N - 3 - ES } else { 0 };

  /// No fraction bits.
  pub const fn new() -> Self {
    Self { bits: BitBlock::ZERO, nr_bits: 0 }
  }

  /// Set the fraction to `bits` (left aligned, `FBITS` wide) of which the first `nr_bits` are
  /// present.
  pub fn set(&mut self, bits: &BitBlock, nr_bits: u32) {
    debug_assert!(nr_bits <= Self::FBITS);
    self.nr_bits = nr_bits.min(Self::FBITS);
    self.bits = bits.low(Self::FBITS);
  }

  /// Set the fraction to the first `nr_bits` of `source`, a `source_bits` wide fraction (bit
  /// `source_bits - 1` weighing 2<sup>-1</sup>), and decide the rounding of what was cut off.
  ///
  /// Returns whether the kept bits need to be rounded up (round to nearest, ties to even); the
  /// caller applies the increment. With `nr_bits == 0` the last kept bit lies outside the
  /// fraction and ties are taken as even.
  pub fn assign2(&mut self, nr_bits: u32, source: &BitBlock, source_bits: u32) -> bool {
    debug_assert!(nr_bits <= Self::FBITS);
    let nr_bits = nr_bits.min(Self::FBITS);
    let source = source.low(source_bits);
    self.nr_bits = nr_bits;
    if nr_bits >= source_bits {
      // Everything fits, nothing to round.
      self.bits = source << (Self::FBITS - source_bits);
      return false
    }
    let cut = source_bits - nr_bits;
    let kept = source >> cut;
    self.bits = kept << (Self::FBITS - nr_bits);
    let round = source.test(cut - 1);
    let sticky = source.any_at_or_below(cut as i64 - 2);
    let odd = nr_bits > 0 && kept.test(0);
    round && (sticky || odd)
  }

  /// Bits present in this encoding.
  pub fn nr_bits(&self) -> u32 { self.nr_bits }

  /// The fraction bits, left aligned at bit `FBITS-1`.
  pub fn bits(&self) -> &BitBlock { &self.bits }

  /// The fraction as `0.b₁b₂…` in an `f64`.
  pub fn value(&self) -> f64 {
    let width = Self::FBITS.min(64);
    let top = self.bits.extract(Self::FBITS - width, width) as u64;
    top as f64 * pow2(-(width as i64))
  }

  /// The significand `1.b₁b₂…` as a fixed point number with the hidden bit at index `FBITS`.
  pub fn fixed_point(&self) -> BitBlock {
    let mut fixed = self.bits;
    fixed.set(Self::FBITS, true);
    fixed
  }
}

impl<const N: u32, const ES: u32> core::fmt::Display for FractionField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    super::fmt_field(f, &self.bits, Self::FBITS, self.nr_bits)
  }
}

impl<const N: u32, const ES: u32> core::fmt::Debug for FractionField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("FractionField")
      .field("bits", &format_args!("{self}"))
      .field("nr_bits", &self.nr_bits)
      .finish()
  }
}
