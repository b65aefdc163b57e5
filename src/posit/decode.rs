use super::*;
use super::fields::{RegimeField, ExponentField, FractionField};
use crate::underlying::BitBlock;

/// A posit split into its fields: sign, regime, exponent, and fraction.
///
/// The value of a decoded posit is `(-1)^sign × 2^scale × 1.fraction`, with `scale` the sum of the
/// regime and exponent scales. Zero and NaR decode to an all-zero regime spanning `N-1` bits with
/// `k = 0` and no exponent or fraction bits (NaR with `sign` set); test for them on the posit
/// first.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Decoded<const N: u32, const ES: u32> {
  sign: bool,
  regime: RegimeField<N, ES>,
  exponent: ExponentField<N, ES>,
  fraction: FractionField<N, ES>,
}

impl<const N: u32, const ES: u32> Decoded<N, ES> {
  /// Split the `N`-bit posit pattern held in the lowest bits of `raw`.
  pub fn from_bitblock(raw: &BitBlock) -> Self {
    let raw = raw.low(N);
    let sign = raw.test(N - 1);
    let mut decoded = Self {
      sign,
      regime: RegimeField::new(),
      exponent: ExponentField::new(),
      fraction: FractionField::new(),
    };
    // 0 and NaR: nothing below the sign bit.
    if !raw.any_at_or_below(N as i64 - 2) {
      return decoded
    }

    // The fields of a negative posit are those of its absolute value.
    let raw = if sign { raw.twos_complement(N) } else { raw };

    let k = RegimeField::<N, ES>::decode_regime(&raw);
    let nr_regime_bits = decoded.regime.assign_regime_pattern(k);
    decoded.exponent.extract_exponent_bits(&raw, nr_regime_bits);

    // Whatever is left is fraction, msb first.
    let used = 1 + nr_regime_bits + decoded.exponent.nr_bits();
    let nr_fraction_bits = N.saturating_sub(used);
    let fraction = raw.low(nr_fraction_bits) << (FractionField::<N, ES>::FBITS - nr_fraction_bits);
    decoded.fraction.set(&fraction, nr_fraction_bits);

    decoded
  }

  pub fn sign(&self) -> bool { self.sign }
  pub fn regime(&self) -> &RegimeField<N, ES> { &self.regime }
  pub fn exponent(&self) -> &ExponentField<N, ES> { &self.exponent }
  pub fn fraction(&self) -> &FractionField<N, ES> { &self.fraction }

  /// The four parts, by value.
  pub fn into_parts(self) -> (bool, RegimeField<N, ES>, ExponentField<N, ES>, FractionField<N, ES>) {
    (self.sign, self.regime, self.exponent, self.fraction)
  }

  /// Binary scale of the posit: regime scale plus exponent.
  pub fn scale(&self) -> i64 {
    self.regime.scale() + self.exponent.scale()
  }

  /// Total number of bits accounted for by the fields, sign included. Always `N`.
  pub fn nr_bits(&self) -> u32 {
    1 + self.regime.nr_bits() + self.exponent.nr_bits() + self.fraction.nr_bits()
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Split `self` into its sign, regime, exponent, and fraction fields.
  ///
  /// ```
  /// # use tapered_posit::p16;
  /// let decoded = p16::from_bits(0b0_110_01_1000000000).decode();
  /// assert_eq!(decoded.regime().k(), 1);
  /// assert_eq!(decoded.exponent().scale(), 1);
  /// assert_eq!(decoded.scale(), 5);
  /// assert_eq!(decoded.fraction().value(), 0.5);
  /// ```
  pub fn decode(self) -> Decoded<N, ES> {
    let raw = self.to_bitblock();
    let decoded = Decoded::from_bitblock(&raw);
    log::trace!(
      "decode posit<{}, {}> {:?}: sign {} regime {} exponent {} fraction {}",
      Self::BITS, Self::ES, self,
      decoded.sign as u8, decoded.regime, decoded.exponent, decoded.fraction,
    );
    decoded
  }
}
