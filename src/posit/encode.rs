use super::*;
use super::fields::{RegimeField, ExponentField, FractionField};
use crate::underlying::BitBlock;
use crate::value::{Value, ValueClass};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Round a [`Value`] to the nearest posit.
  ///
  ///   - Zero converts to [zero](Self::ZERO), NaN and infinities to [NaR](Self::NAR).
  ///   - Scales outside `[MIN_EXP, MAX_EXP]` are projected onto [`Self::MIN_POSITIVE`] or
  ///     [`Self::MAX`] (with the sign of the value): posits never overflow or underflow.
  ///   - Everything else is rounded to the nearest bit pattern, ties to the even one.
  pub fn convert_to_posit(value: &Value) -> Self {
    match value.class() {
      ValueClass::Zero => return Self::ZERO,
      ValueClass::NaN | ValueClass::Infinite => return Self::NAR,
      ValueClass::Finite => (),
    }
    let sign = value.sign();
    let scale = value.scale();
    if Self::check_inward_projection_range(scale) {
      log::trace!("convert scale {scale} out of range, projecting");
      return if scale < 0 { Self::minpos_pattern(sign) } else { Self::maxpos_pattern(sign) }
    }

    // We build the posit, without its sign bit, in a scratch buffer wide enough to hold all of
    // regime, exponent, and the fraction bits that can possibly be kept, plus one sticky bit at
    // the end:
    //
    //   regime      exponent   fraction   sticky
    //   r r … r r̄   e e … e    f f … f    s
    //   run + 1     ES         nf         1
    //
    // Then we keep the leftmost `N` bits and round on the rest.
    //
    // The regime is `run` copies of `r` followed by `!r`: for scale ≥ 0, `r = 1` and the run is
    // `k + 1` long; for scale < 0, `r = 0` and the run is `-k` long, with `k = floor(scale / 2^ES)`.
    let r = scale >= 0;
    let run = (if r { 1 + (scale >> ES) } else { -(scale >> ES) }) as u32;
    let mut regime = BitBlock::ZERO;
    regime.set(0, !r);
    for i in 1 ..= run {
      regime.set(i, r);
    }

    // The exponent is the remainder of the scale, always non-negative.
    let exponent = BitBlock::from_u128(scale.rem_euclid(1 << ES) as u128);

    // Fraction bits that may survive: the `N+1` bits after the sign (including the round bit
    // after the last kept bit) minus what regime and exponent take.
    let nf = (N + 1).saturating_sub(2 + run + ES);
    let fbits = value.fbits();
    let fraction = value.fraction();
    let kept_fraction =
      if nf <= fbits {
        fraction.truncate_top(fbits, nf)
      } else {
        // Pad with 0s on the right.
        fraction.low(fbits) << (nf - fbits)
      };
    let sticky = fbits > nf && fraction.any_at_or_below(fbits as i64 - 1 - nf as i64);

    let mut scratch = regime << (ES + nf + 1);
    scratch |= exponent << (nf + 1);
    scratch |= kept_fraction << 1;
    scratch.set(0, sticky);

    // Width of the scratch plus one leading (sign) bit. The posit is the top `N` bits of it.
    let len = 1 + (N + 1).max(2 + run + ES);
    let blast = scratch.test(len - N);
    let bafter = scratch.test(len - N - 1);
    let bsticky = scratch.any_at_or_below(len as i64 - N as i64 - 2);
    // Round to nearest, ties to even:
    //
    //   last | after | sticky | result
    //   x    | 0     | x      | round down (+0)
    //   0    | 1     | 0      | round down to even (+0)
    //   1    | 1     | 0      | round up to even (+1)
    //   x    | 1     | 1      | round up (+1)
    let round_up = (blast && bafter) || (bafter && bsticky);

    let mut bits = scratch.truncate_top(len, N);
    if round_up {
      bits.increment(N);
    }
    if sign {
      bits = bits.twos_complement(N);
    }
    log::trace!(
      "convert scale {scale} run {run} nf {nf}: scratch {scratch:?} len {len}, round up {round_up}"
    );
    Self::from_bitblock(&bits)
  }

  /// Round a [`Value`] to the nearest posit, like [`Self::convert_to_posit`], but going through the
  /// field objects: the regime, exponent, and fraction are assigned one after another from the
  /// value, each consuming the bit budget the previous ones left, and a single rounding decision
  /// is taken at the end.
  ///
  /// The two functions always produce the same posit.
  pub fn round_from_fields(value: &Value) -> Self {
    match value.class() {
      ValueClass::Zero => return Self::ZERO,
      ValueClass::NaN | ValueClass::Infinite => return Self::NAR,
      ValueClass::Finite => (),
    }
    let sign = value.sign();
    let scale = value.scale();

    let mut regime = RegimeField::<N, ES>::new();
    match regime.assign(scale) {
      Rounding::GeometricRoundDown => return Self::maxpos_pattern(sign),
      Rounding::GeometricRoundUp => return Self::minpos_pattern(sign),
      _ => (),
    }

    let mut exponent = ExponentField::<N, ES>::new();
    let exponent_rounding = exponent.assign(scale, &regime);

    let source = value.fraction();
    let source_bits = value.fbits();
    let fraction_is_zero = source.is_zero();
    let remaining = RegimeField::<N, ES>::WIDTH - regime.nr_bits() - exponent.nr_bits();

    let mut fraction = FractionField::<N, ES>::new();
    let fraction_round_up =
      exponent_rounding == Rounding::ArithmeticRounding
      && remaining > 0
      && fraction.assign2(remaining, source, source_bits);

    let mut bits = Self::collect(&regime, &exponent, &fraction);
    let odd = bits.test(0);
    let rounding = match exponent_rounding {
      Rounding::ArithmeticRounding => {
        let round_up = if remaining > 0 {
          fraction_round_up
        } else if regime.k() == RegimeField::<N, ES>::MAX_K {
          // The regime of maxpos has no room for its terminating 0, which is then the round bit.
          false
        } else {
          // No room for any fraction bit: the first fraction bit is the round bit, and the last
          // kept bit is the last bit of the exponent or regime.
          let round = source_bits > 0 && source.test(source_bits - 1);
          let sticky = source.any_at_or_below(source_bits as i64 - 2);
          round && (sticky || odd)
        };
        if round_up { Rounding::ArithmeticRoundUp } else { Rounding::ArithmeticRoundDown }
      }
      Rounding::GeometricRoundUp => {
        // The first cut exponent bit is 1; it's a tie if nothing after it is.
        let cut = ES - exponent.nr_bits();
        let cut_exponent = scale.rem_euclid(1 << ES) - exponent.scale();
        let tie = cut_exponent == 1 << (cut - 1) && fraction_is_zero;
        if tie && !odd { Rounding::GeometricRoundDown } else { Rounding::GeometricRoundUp }
      }
      other => other,
    };

    if matches!(rounding, Rounding::ArithmeticRoundUp | Rounding::GeometricRoundUp) {
      bits.increment(N - 1);
    }
    log::trace!("fields {regime} {exponent} {fraction}: {rounding:?}");
    Self::from_bitblock(&Self::with_sign(bits, sign))
  }

  /// Concatenate the present bits of regime, exponent, and fraction into the `N-1` bits of a posit
  /// that follow the sign bit.
  pub fn collect(
    regime: &RegimeField<N, ES>,
    exponent: &ExponentField<N, ES>,
    fraction: &FractionField<N, ES>,
  ) -> BitBlock {
    let mut bits = *regime.bits();
    let mut free = RegimeField::<N, ES>::WIDTH - regime.nr_bits();

    let nr = exponent.nr_bits().min(free);
    free -= nr;
    bits |= (*exponent.bits() >> (ES - nr)) << free;

    let nr = fraction.nr_bits().min(free);
    free -= nr;
    bits |= (*fraction.bits() >> (FractionField::<N, ES>::FBITS - nr)) << free;

    bits
  }

  /// Build a posit from its fields: the inverse of [`Self::decode`].
  ///
  /// If the fields collect to all zero bits, this is [zero](Self::ZERO), or [NaR](Self::NAR) if
  /// `sign` is set.
  pub fn construct(
    sign: bool,
    regime: &RegimeField<N, ES>,
    exponent: &ExponentField<N, ES>,
    fraction: &FractionField<N, ES>,
  ) -> Self {
    let bits = Self::collect(regime, exponent, fraction);
    if bits.is_zero() {
      return if sign { Self::NAR } else { Self::ZERO }
    }
    Self::from_bitblock(&Self::with_sign(bits, sign))
  }

  /// The `N`-bit pattern of a posit with magnitude bits `bits`: negative posits are the two's
  /// complement of positive ones.
  fn with_sign(bits: BitBlock, sign: bool) -> BitBlock {
    if sign { bits.twos_complement(N) } else { bits }
  }
}

impl<const N: u32, const ES: u32> Decoded<N, ES> {
  /// Reassemble the fields into a posit. See [`Posit::construct`].
  pub fn to_posit<Int: crate::Int>(&self) -> Posit<N, ES, Int> {
    Posit::construct(self.sign(), self.regime(), self.exponent(), self.fraction())
  }
}
