use super::*;
use crate::value::Value;
use crate::posit::fields::FractionField;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The exact value of `self`: [`Value::ZERO`] for zero, [`Value::NAN`] for NaR, otherwise the
  /// sign, scale and fraction of its fields.
  pub fn to_value(self) -> Value {
    if self == Self::ZERO {
      return Value::ZERO
    }
    if self == Self::NAR {
      return Value::NAN
    }
    let decoded = self.decode();
    Value::finite(
      decoded.sign(),
      decoded.scale(),
      *decoded.fraction().bits(),
      FractionField::<N, ES>::FBITS,
    )
  }

  /// The nearest `f64` to `self` (ties to even); NaN for [NaR](Self::NAR).
  ///
  /// ```
  /// # use tapered_posit::p16;
  /// assert_eq!(p16::from_bits(0b0_110_01_1000000000).to_f64(), 48.0);
  /// assert!(p16::NAR.to_f64().is_nan());
  /// ```
  pub fn to_f64(self) -> f64 {
    self.to_value().to_f64()
  }

  /// Convert a posit into a different one, rounding to nearest (see
  /// [Rounding](RoundFrom#rounding)).
  ///
  /// The conversion goes through the exact [`Value`] of `self`, so widening conversions (more
  /// bits and the same `ES`, for instance) are exact.
  ///
  /// # Examples
  ///
  /// ```
  /// # use tapered_posit::{p8, p16, p64, RoundInto};
  /// let pi: p64 = core::f64::consts::PI.round_into();
  /// let pi: p16 = pi.convert();
  /// assert_eq!(pi, core::f64::consts::PI.round_into());
  /// assert_eq!(p8::MAX.convert::<16, 2, i16>(), p16::from_bits(0x7f00));
  /// assert_eq!(p8::NAR.convert::<64, 2, i64>(), p64::NAR);
  /// ```
  pub fn convert<
    const N2: u32,
    const ES2: u32,
    Int2: crate::Int,
  >(self) -> Posit<N2, ES2, Int2> {
    Posit::<N2, ES2, Int2>::convert_to_posit(&self.to_value())
  }
}
