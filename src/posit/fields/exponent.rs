use super::RegimeField;
use crate::posit::Rounding;
use crate::underlying::BitBlock;
use crate::value::pow2;

/// The exponent of an `N`-bit posit: up to `ES` bits, stored left aligned (bit `ES-1` is the
/// first exponent bit of the encoding). Bits the regime left no room for are absent and read as
/// 0.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash, Default)]
pub struct ExponentField<const N: u32, const ES: u32> {
  bits: BitBlock,
  nr_bits: u32,
}

impl<const N: u32, const ES: u32> ExponentField<N, ES> {
  /// No exponent bits.
  pub const fn new() -> Self {
    Self { bits: BitBlock::ZERO, nr_bits: 0 }
  }

  /// Copy the exponent bits out of the (non-negative, `N`-bit) posit bit pattern `raw`, whose
  /// sign and regime take the leftmost `1 + nr_regime_bits` bits.
  pub fn extract_exponent_bits(&mut self, raw: &BitBlock, nr_regime_bits: u32) {
    *self = Self::new();
    // Index in `raw` of the first exponent bit; negative if the regime reached the end.
    let msb = N as i64 - 1 - (1 + nr_regime_bits as i64);
    if msb < 0 {
      return
    }
    let msb = msb as u32;
    self.nr_bits = ES.min(msb + 1);
    for i in 0 .. self.nr_bits {
      self.bits.set(ES - 1 - i, raw.test(msb - i));
    }
  }

  /// Set the exponent of a value of binary scale `scale` whose regime is `regime`: the exponent
  /// is `scale mod 2^ES`, cut to the bits the regime leaves.
  ///
  /// Returns [`Rounding::ArithmeticRounding`] if no bit was cut. Otherwise rounding is geometric
  /// and decided on the cut bits: [`Rounding::GeometricRoundUp`] if the first of them is 1,
  /// [`Rounding::GeometricRoundDown`] if it is 0 but a later one is not, and
  /// [`Rounding::NoAdditionalRounding`] if they are all 0.
  pub fn assign(&mut self, scale: i64, regime: &RegimeField<N, ES>) -> Rounding {
    *self = Self::new();
    if ES == 0 {
      return Rounding::ArithmeticRounding
    }
    let exponent = scale.rem_euclid(1 << ES) as u128;
    let available = RegimeField::<N, ES>::WIDTH - regime.nr_bits();
    self.nr_bits = ES.min(available);
    self.bits = BitBlock::from_u128(exponent);
    let cut = ES - self.nr_bits;
    if cut == 0 {
      return Rounding::ArithmeticRounding
    }
    let round = self.bits.test(cut - 1);
    let sticky = self.bits.any_at_or_below(cut as i64 - 2);
    self.bits = (self.bits >> cut) << cut;
    match (round, sticky) {
      (true, _) => Rounding::GeometricRoundUp,
      (false, true) => Rounding::GeometricRoundDown,
      (false, false) => Rounding::NoAdditionalRounding,
    }
  }

  /// Add one unit in the last present bit. Returns `true` (and wraps the present bits to 0) if
  /// they were all 1, or if no bits are present at all.
  pub fn increment(&mut self) -> bool {
    if self.nr_bits == 0 {
      return true
    }
    let cut = ES - self.nr_bits;
    let mut present = self.bits >> cut;
    let carry = present.increment(self.nr_bits);
    self.bits = present << cut;
    carry
  }

  /// Bits present in this encoding.
  pub fn nr_bits(&self) -> u32 { self.nr_bits }

  /// The exponent bits, left aligned at bit `ES-1`.
  pub fn bits(&self) -> &BitBlock { &self.bits }

  /// Binary scale of the exponent, i.e. the exponent bits as an unsigned number.
  pub fn scale(&self) -> i64 {
    self.bits.extract(0, ES) as i64
  }

  /// `2^exponent` as an `f64`.
  pub fn value(&self) -> f64 {
    pow2(self.scale())
  }
}

impl<const N: u32, const ES: u32> core::fmt::Display for ExponentField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    super::fmt_field(f, &self.bits, ES, self.nr_bits)
  }
}

impl<const N: u32, const ES: u32> core::fmt::Debug for ExponentField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ExponentField")
      .field("bits", &format_args!("{self}"))
      .field("nr_bits", &self.nr_bits)
      .finish()
  }
}
