use super::*;
use crate::value::Value;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f32> for Posit<N, ES, Int> {
  /// Convert an `f32` into a `Posit`, rounding to nearest (see [Rounding](RoundFrom#rounding)):
  ///
  /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
  /// - Otherwise, the float value is rounded (if necessary).
  fn round_from(value: f32) -> Self {
    Self::convert_to_posit(&Value::from(value))
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f64> for Posit<N, ES, Int> {
  /// Convert an `f64` into a `Posit`, rounding to nearest (see [Rounding](RoundFrom#rounding)):
  ///
  /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
  /// - Otherwise, the float value is rounded (if necessary).
  fn round_from(value: f64) -> Self {
    Self::convert_to_posit(&Value::from(value))
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for f64 {
  /// Convert a `Posit` into an `f64`, rounding to nearest, ties to even:
  ///
  /// - [NaR](Posit::NAR) converts to NaN.
  /// - Values beyond the range of `f64` (only possible for very wide posits) overflow to infinity
  ///   or underflow to 0.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    value.to_f64()
  }
}
