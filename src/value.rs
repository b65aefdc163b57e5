//! The conversion intermediate between native numbers and posits.
//!
//! A [`Value`] is an exact, normalised binary number: a sign, an unbiased binary scale, and the
//! fraction bits after the hidden bit. Every conversion into a posit goes through one, and
//! [`Posit::to_value`](crate::Posit::to_value) produces one without loss.

use crate::underlying::BitBlock;

/// What kind of number a [`Value`] holds.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum ValueClass {
  Zero,
  NaN,
  Infinite,
  Finite,
}

/// A real number as `(-1)^sign × 2^scale × 1.fraction`, with `fbits` fraction bits.
///
/// Bit `fbits - 1` of the fraction weighs 2<sup>-1</sup>, bit 0 weighs 2<sup>-fbits</sup>; bits at
/// or above `fbits` are always clear. The sign and scale of non-finite values and zero are kept
/// but carry no meaning.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Value {
  class: ValueClass,
  sign: bool,
  scale: i64,
  fraction: BitBlock,
  fbits: u32,
}

impl Value {
  /// Zero.
  pub const ZERO: Self = Self::special(ValueClass::Zero, false);

  /// Not-a-number.
  pub const NAN: Self = Self::special(ValueClass::NaN, false);

  const fn special(class: ValueClass, sign: bool) -> Self {
    Self { class, sign, scale: 0, fraction: BitBlock::ZERO, fbits: 0 }
  }

  /// Positive (`sign == false`) or negative infinity.
  pub const fn infinite(sign: bool) -> Self {
    Self::special(ValueClass::Infinite, sign)
  }

  /// A finite, non-zero value. `fraction` is truncated to its lowest `fbits` bits.
  pub fn finite(sign: bool, scale: i64, fraction: BitBlock, fbits: u32) -> Self {
    debug_assert!(fbits < BitBlock::CAPACITY);
    Self { class: ValueClass::Finite, sign, scale, fraction: fraction.low(fbits), fbits }
  }

  /// The exact value of an unsigned integer magnitude, with the given sign.
  pub fn from_magnitude(sign: bool, magnitude: u128) -> Self {
    if magnitude == 0 {
      return Self::ZERO
    }
    // Position of the leading 1, which becomes the hidden bit.
    let msb = 127 - magnitude.leading_zeros();
    let fraction = BitBlock::from_u128(magnitude << (127 - msb)).low(127);
    Self::finite(sign, msb as i64, fraction, 127)
  }

  pub fn class(&self) -> ValueClass { self.class }
  pub fn sign(&self) -> bool { self.sign }
  pub fn scale(&self) -> i64 { self.scale }
  pub fn fraction(&self) -> &BitBlock { &self.fraction }
  pub fn fbits(&self) -> u32 { self.fbits }

  pub fn is_zero(&self) -> bool { self.class == ValueClass::Zero }
  pub fn is_nan(&self) -> bool { self.class == ValueClass::NaN }
  pub fn is_inf(&self) -> bool { self.class == ValueClass::Infinite }

  /// The nearest `f64`, ties to even. Values too large for an `f64` become infinite, values too
  /// small become zero or a subnormal.
  pub fn to_f64(&self) -> f64 {
    const MANTISSA: i64 = f64::MANTISSA_DIGITS as i64 - 1;
    const BIAS: i64 = f64::MAX_EXP as i64 - 1;
    let magnitude = match self.class {
      ValueClass::Zero => 0.0,
      ValueClass::NaN => return f64::NAN,
      ValueClass::Infinite => f64::INFINITY,
      ValueClass::Finite if self.scale > BIAS => f64::INFINITY,
      ValueClass::Finite => {
        // Fraction bits that fit: all 52 for a normal result, fewer for a subnormal one (possibly
        // a negative number of them, when even the hidden bit is below 2^-1074).
        let normal = self.scale > -BIAS;
        let kept = if normal { MANTISSA } else { self.scale + BIAS - 1 + MANTISSA };

        // `1.fraction` as an integer, and the number of its bits that don't fit.
        let fbits = self.fbits as i64;
        let mut full = self.fraction;
        full.set(self.fbits, true);
        let dropped = fbits - kept;

        let (mut significand, round, sticky) = if dropped <= 0 {
          ((full.to_u128() as u64) << -dropped, false, false)
        } else if dropped <= fbits + 1 {
          let dropped = dropped as u32;
          (
            full.extract(dropped, 64) as u64,
            full.test(dropped - 1),
            full.any_at_or_below(dropped as i64 - 2),
          )
        } else {
          (0, false, false)
        };
        if round && (sticky || significand & 1 == 1) {
          significand += 1
        }

        // The hidden bit of a normal significand adds one to the biased exponent, and a carry out
        // of the rounding adds one more (up to infinity).
        let exponent = if normal { (self.scale + BIAS - 1) as u64 } else { 0 };
        f64::from_bits((exponent << MANTISSA) + significand)
      }
    };
    if self.sign { -magnitude } else { magnitude }
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    const FBITS: u32 = f64::MANTISSA_DIGITS - 1;
    const BIAS: i64 = f64::MAX_EXP as i64 - 1;
    let sign = x.is_sign_negative();
    let bits = x.to_bits();
    let biased = ((bits >> FBITS) & 0x7ff) as i64;
    let mantissa = bits & ((1 << FBITS) - 1);
    match (biased, mantissa) {
      (0x7ff, 0) => Self::infinite(sign),
      (0x7ff, _) => Self::NAN,
      (0, 0) => Self::ZERO,
      (0, _) => {
        // Subnormal: the leading 1 of the mantissa becomes the hidden bit.
        let msb = 63 - mantissa.leading_zeros();
        let fraction = (mantissa << (FBITS - msb)) & ((1 << FBITS) - 1);
        let scale = msb as i64 - FBITS as i64 + 1 - BIAS;
        Self::finite(sign, scale, BitBlock::from_u128(fraction as u128), FBITS)
      }
      (_, _) => Self::finite(sign, biased - BIAS, BitBlock::from_u128(mantissa as u128), FBITS),
    }
  }
}

impl From<f32> for Value {
  fn from(x: f32) -> Self {
    const FBITS: u32 = f32::MANTISSA_DIGITS - 1;
    const BIAS: i64 = f32::MAX_EXP as i64 - 1;
    let sign = x.is_sign_negative();
    let bits = x.to_bits();
    let biased = ((bits >> FBITS) & 0xff) as i64;
    let mantissa = bits & ((1 << FBITS) - 1);
    match (biased, mantissa) {
      (0xff, 0) => Self::infinite(sign),
      (0xff, _) => Self::NAN,
      (0, 0) => Self::ZERO,
      (0, _) => {
        let msb = 31 - mantissa.leading_zeros();
        let fraction = (mantissa << (FBITS - msb)) & ((1 << FBITS) - 1);
        let scale = msb as i64 - FBITS as i64 + 1 - BIAS;
        Self::finite(sign, scale, BitBlock::from_u128(fraction as u128), FBITS)
      }
      (_, _) => Self::finite(sign, biased - BIAS, BitBlock::from_u128(mantissa as u128), FBITS),
    }
  }
}

macro_rules! impl_from_int {
  ($($int:ty),*) => {$(
    impl From<$int> for Value {
      fn from(x: $int) -> Self {
        Self::from_magnitude(x < 0, x.unsigned_abs() as u128)
      }
    }
  )*}
}

macro_rules! impl_from_uint {
  ($($uint:ty),*) => {$(
    impl From<$uint> for Value {
      fn from(x: $uint) -> Self {
        Self::from_magnitude(false, x as u128)
      }
    }
  )*}
}

impl_from_int!{i8, i16, i32, i64, i128}
impl_from_uint!{u8, u16, u32, u64, u128}

/// `2^scale` as an `f64`, going through the subnormals and saturating to `+∞` and `0`.
pub(crate) fn pow2(scale: i64) -> f64 {
  const BIAS: i64 = f64::MAX_EXP as i64 - 1;
  const FBITS: i64 = f64::MANTISSA_DIGITS as i64 - 1;
  if scale > BIAS {
    f64::INFINITY
  } else if scale >= 1 - BIAS {
    f64::from_bits(((scale + BIAS) as u64) << FBITS)
  } else if scale >= 1 - BIAS - FBITS {
    f64::from_bits(1 << (scale - (1 - BIAS - FBITS)))
  } else {
    0.0
  }
}
