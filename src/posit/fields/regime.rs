use crate::posit::Rounding;
use crate::underlying::BitBlock;
use crate::value::pow2;

/// The regime of an `N`-bit posit with `ES` exponent bits: a run-length code for the power `k`
/// of `useed = 2^(2^ES)`.
///
/// The pattern is stored msb first in the lowest `N-1` bits of a [`BitBlock`], i.e. bit `N-2` is
/// the first regime bit, the one right after the sign. For `k ≥ 0` it is `k+1` ones followed by a
/// terminating 0; for `k < 0`, `-k` zeros followed by a terminating 1. The terminator is omitted
/// when the run reaches the end of the posit.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct RegimeField<const N: u32, const ES: u32> {
  bits: BitBlock,
  k: i32,
  run: u32,
  nr_bits: u32,
}

impl<const N: u32, const ES: u32> RegimeField<N, ES> {
  /// Bits available to the regime: all but the sign.
  pub const WIDTH: u32 = N - 1;

  /// The largest `k`, that of maxpos; `-MAX_K` is that of minpos.
  pub const MAX_K: i32 = N as i32 - 2;

  /// The largest scale a posit can represent, `MAX_K × 2^ES`.
  pub const MAX_SCALE: i64 = (Self::MAX_K as i64) << ES;

  /// The state of a zero or NaR posit: no run, all `N-1` bits zero, `k = 0`.
  pub const fn new() -> Self {
    Self { bits: BitBlock::ZERO, k: 0, run: Self::WIDTH, nr_bits: Self::WIDTH }
  }

  /// Reset to the state of [`Self::new`].
  pub fn set_zero(&mut self) {
    *self = Self::new()
  }

  /// Set the regime to represent `useed^k`, clamping `k` to `[-(N-2), N-2]`. Returns the number
  /// of bits the pattern consumes.
  pub fn assign_regime_pattern(&mut self, k: i32) -> u32 {
    self.bits.reset();
    if k < 0 {
      // `-k` zeros, then a 1. At the clamp the terminating 1 lands exactly on bit 0.
      let k = k.max(-Self::MAX_K);
      self.run = k.unsigned_abs();
      self.bits.set(Self::WIDTH - 1 - self.run, true);
      self.k = k;
      self.nr_bits = self.run + 1;
    } else {
      // `k+1` ones, then a 0 if there is room for it.
      let k = k.min(Self::MAX_K);
      self.run = k as u32 + 1;
      for i in 0 .. self.run {
        self.bits.set(Self::WIDTH - 1 - i, true);
      }
      self.k = k;
      self.nr_bits = (self.run + 1).min(Self::WIDTH);
    }
    self.nr_bits
  }

  /// Read the regime of the (non-negative, `N`-bit) posit bit pattern `raw`: the length of the run
  /// of identical bits right after the sign bit.
  ///
  /// A run of `m` ones gives `k = m-1`, a run of `m` zeros gives `k = -m`.
  pub fn decode_regime(raw: &BitBlock) -> i32 {
    let first = raw.test(N - 2);
    let run = (0 .. Self::WIDTH)
      .take_while(|&i| raw.test(N - 2 - i) == first)
      .count() as i32;
    if first { run - 1 } else { -run }
  }

  /// Set the regime for a value of binary scale `scale`.
  ///
  /// Scales beyond the dynamic range are projected: above maxpos the regime saturates at
  /// `N-2` and [`Rounding::GeometricRoundDown`] is reported, below minpos it saturates at
  /// `-(N-2)` and [`Rounding::GeometricRoundUp`] is reported. Otherwise the result is
  /// [`Rounding::ArithmeticRounding`]: the regime itself lost nothing.
  pub fn assign(&mut self, scale: i64) -> Rounding {
    if scale > Self::MAX_SCALE {
      self.assign_regime_pattern(Self::MAX_K);
      Rounding::GeometricRoundDown
    } else if scale < -Self::MAX_SCALE {
      self.assign_regime_pattern(-Self::MAX_K);
      Rounding::GeometricRoundUp
    } else {
      // In range, so `scale >> ES` fits an `i32`.
      self.assign_regime_pattern((scale >> ES) as i32);
      Rounding::ArithmeticRounding
    }
  }

  /// Step to the next regime in bit order (`k+1`). Returns `true`, leaving the regime as it is,
  /// if it is already the largest.
  pub fn increment(&mut self) -> bool {
    if self.k >= Self::MAX_K {
      return true
    }
    self.assign_regime_pattern(self.k + 1);
    false
  }

  /// The power of `useed` this regime represents.
  pub fn k(&self) -> i32 { self.k }

  /// Length of the run of identical bits (excluding the terminator).
  pub fn run(&self) -> u32 { self.run }

  /// Bits consumed by the regime, terminator included.
  pub fn nr_bits(&self) -> u32 { self.nr_bits }

  /// The pattern, msb first from bit `N-2`.
  pub fn bits(&self) -> &BitBlock { &self.bits }

  /// Whether `k` is at one of its limits (the regime of maxpos or minpos).
  pub fn is_saturated(&self) -> bool {
    self.k.unsigned_abs() == Self::MAX_K as u32
  }

  /// Binary scale of the regime, `k × 2^ES`.
  pub fn scale(&self) -> i64 {
    (self.k as i64) << ES
  }

  /// `useed^k` as an `f64` (saturating to `∞` or `0` outside the range of `f64`).
  pub fn value(&self) -> f64 {
    pow2(self.scale())
  }
}

impl<const N: u32, const ES: u32> Default for RegimeField<N, ES> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: u32, const ES: u32> core::fmt::Display for RegimeField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    super::fmt_field(f, &self.bits, Self::WIDTH, self.nr_bits)
  }
}

impl<const N: u32, const ES: u32> core::fmt::Debug for RegimeField<N, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RegimeField")
      .field("bits", &format_args!("{self}"))
      .field("k", &self.k)
      .field("run", &self.run)
      .field("nr_bits", &self.nr_bits)
      .finish()
  }
}
