use super::*;
use crate::value::Value;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal, IsPowerOf2};
use malachite::base::num::logic::traits::SignificantBits;

/// The error type returned when a [Posit] cannot be converted to a [Rational] because it is
/// [NaR](Posit::NAR).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the algorithm for decoding a
  /// posit, bit by bit, since this is what we will check the field-based decoder and encoders
  /// against!
  fn into_rational_regular(self) -> Rational {
    let n = Self::BITS;
    let mask = |width: u32| if width >= 128 { u128::MAX } else { (1u128 << width) - 1 };
    let bits = self.to_bits_unsigned();
    if bits == 0 || bits == 1 << (n - 1) { panic!("Should not pass {bits:b} to into_rational_regular") }

    // First extract the sign; the rest of the algorithm takes place with the two's complement
    // absolute value of the posit.
    let sign = bits >> (n - 1) & 1 == 1;
    let abs = if sign { bits.wrapping_neg() & mask(n) } else { bits };
    let bit = |i: i64| i >= 0 && abs >> i & 1 == 1;

    // Bit N-2 is the first bit of the regime. Count the run of identical bits after it, then skip
    // the terminating bit (which may be missing if the run goes all the way to the end).
    let mut i = n as i64 - 2;
    let regime_bit = bit(i);
    let mut run = 0;
    while i >= 0 && bit(i) == regime_bit {
      run += 1;
      i -= 1;
    }
    i -= 1;
    // The regime is
    //   -n  if it's a run of n 0s, or
    //   n-1 if it's a run of n 1s.
    let k: i64 = if regime_bit { run - 1 } else { -run };

    // The next ES bits are the exponent; those past the end of the posit are 0.
    let mut exponent: i64 = 0;
    for _ in 0 .. ES {
      exponent = exponent << 1 | bit(i) as i64;
      i -= 1;
    }

    // Whatever is left is the fraction, with an implicit 1 in front.
    let nf = (i + 1).max(0) as u32;
    let fraction = Rational::from(abs & mask(nf)) / Rational::power_of_2(nf as i64);

    let scale = (k << ES) + exponent;
    let magnitude = Rational::power_of_2(scale) * (Rational::from(1) + fraction);
    if sign { -magnitude } else { magnitude }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> TryFrom<Posit<N, ES, Int>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Int>) -> Result<Self, Self::Error> {
    if value == Posit::ZERO {
      Ok(Rational::from(0))
    } else if value == Posit::NAR {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

/// The exact [`Value`] of a dyadic rational (one whose denominator is a power of two), if its
/// numerator fits in a `u128`.
pub fn to_value(exact: &Rational) -> Option<Value> {
  let zero = Rational::from(0);
  if *exact == zero {
    return Some(Value::ZERO)
  }
  let sign = *exact < zero;
  let denominator = exact.to_denominator();
  if !denominator.is_power_of_2() {
    return None
  }
  let shift = denominator.significant_bits() as i64 - 1;
  let numerator = u128::try_from(&exact.to_numerator()).ok()?;
  let v = Value::from_magnitude(sign, numerator);
  Some(Value::finite(sign, v.scale() - shift, *v.fraction(), v.fbits()))
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (exponent < [Posit::MIN_EXP] or > [Posit::MAX_EXP]): round to
///     [Posit::MIN_POSITIVE] or [Posit::MAX] respectively (with the sign of `exact`).
///   - Geometric case (the nearest posits have exponent bits cut off): round to nearest posit in
///     terms of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
pub fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  let zero = Rational::from(0);
  // Only the exact number 0 is rounded to posit 0.
  if posit == Posit::<N, ES, Int>::ZERO { return exact == zero }
  // No number is rounded to posit NaR.
  if posit == Posit::<N, ES, Int>::NAR { return false }

  let rational = |p: Posit<N, ES, Int>| Rational::try_from(p).unwrap();

  // Overflow case: if exact is > MAX, < MIN, > 0 and < MIN_POSITIVE, or < 0 and > MAX_NEGATIVE
  if exact > zero {
    if exact >= rational(Posit::MAX) {
      return posit == Posit::<N, ES, Int>::MAX
    }
    else if exact <= rational(Posit::MIN_POSITIVE) {
      return posit == Posit::<N, ES, Int>::MIN_POSITIVE
    }
  } else if exact < zero {
    if exact <= rational(Posit::MIN) {
      return posit == Posit::<N, ES, Int>::MIN
    }
    else if exact >= rational(Posit::MAX_NEGATIVE) {
      return posit == Posit::<N, ES, Int>::MAX_NEGATIVE
    }
  } else {
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + ES > N`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding.
    //
    // So if `regime_len ≤ N - 2 - ES`, we are in the arithmetic rounding region, otherwise we're
    // on the geometric rounding region. This `regime_len` corresponds to a scale of
    // `(N - 2 - ES) << ES`. If `N - 2 - ES` is negative there is no arithmetic region at all.
    let geometric_cutoff = Rational::power_of_2((N as i64 - 2 - ES as i64) << ES);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else if x.abs() >= y.abs() {
        x / y
      } else {
        y / x
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = rational(posit);
  let next = Rational::try_from(posit.next());
  let posit_is_even = posit.to_bits() & Int::ONE == Int::ZERO;

  if exact == curr {
    // `exact` is exactly represented by `posit`
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]posit.prior(), posit[`: needs to be closer to `posit` than to
    // `posit.prior()`, or same distance if `posit` is even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]posit, posit.next()[`: needs to be closer to `posit` than to
    // `posit.next()`, or same distance if `posit` is even.
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    // Not in interval
    false
  }
}

pub fn try_is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually test all bit patterns for a 6-bit positive with 2-bit exponent (cf. Posit
  /// Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn exhaustive_posit_6_2() {
    type Posit = super::Posit<6, 2, i16>;

    assert_eq!(Rational::try_from(Posit::from_bits(0b000000)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Posit::from_bits(0b100000)), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b000001, (1, 65536)),
      (0b000010, (1, 4096)),
      (0b000011, (1, 1024)),
      (0b000100, (1, 256)),
      (0b000101, (1, 128)),
      (0b000110, (1, 64)),
      (0b000111, (1, 32)),
      (0b001000, (2, 32)),
      (0b001001, (3, 32)),
      (0b001010, (4, 32)),
      (0b001011, (6, 32)),
      (0b001100, (8, 32)),
      (0b001101, (12, 32)),
      (0b001110, (16, 32)),
      (0b001111, (24, 32)),
      (0b010000, (1, 1)),
      (0b010001, (3, 2)),
      (0b010010, (2, 1)),
      (0b010011, (3, 1)),
      (0b010100, (4, 1)),
      (0b010101, (6, 1)),
      (0b010110, (8, 1)),
      (0b010111, (12, 1)),
      (0b011000, (16, 1)),
      (0b011001, (32, 1)),
      (0b011010, (64, 1)),
      (0b011011, (128, 1)),
      (0b011100, (256, 1)),
      (0b011101, (1024, 1)),
      (0b011110, (4096, 1)),
      (0b011111, (65536, 1)),
    ] {
      assert_eq!(Posit::from_bits( bits).try_into(), Ok(Rational::from_signeds( num, den)));
      assert_eq!(Posit::from_bits(-bits).try_into(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  /// More manual examples.
  #[test]
  fn examples() {
    assert_eq!(Posit::<6, 1, i8>::from_bits(0b100001).try_into(), Ok(Rational::from(-256)));
    assert_eq!(Posit::<6, 1, i8>::from_bits(0b000001).try_into(), Ok(Rational::from_signeds(1, 256)));
    assert_eq!(Posit::<6, 1, i8>::from_bits(0b001101).try_into(), Ok(Rational::from_signeds(5, 8)));
    assert_eq!(Posit::<6, 1, i8>::from_bits(0b110010).try_into(), Ok(Rational::from_signeds(-3, 4)));

    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_01_00_10000001000).try_into(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_01_01_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_01_11_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_11110_10_11001000).try_into(), Ok(Rational::from(456 << 6)));
    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_11110_01_11001000).try_into(), Ok(Rational::from(456 << 5)));
    assert_eq!(Posit::<16, 2, i16>::from_bits(0b0_11111111110_00_10).try_into(), Ok(Rational::from(3i64 << 35)));

    assert_eq!(Posit::<16, 2, i16>::MAX.try_into(), Ok(Rational::from(1i64 << 56)));
    assert_eq!(Posit::<16, 2, i16>::MIN.try_into(), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(Posit::<16, 2, i16>::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!(Posit::<16, 2, i16>::MAX_NEGATIVE.try_into(), Ok(Rational::from_signeds(1, -1i64 << 56)));

    assert_eq!(Posit::<16, 2, i16>::ZERO.try_into(), Ok(Rational::from(0)));
    assert_eq!(Posit::<16, 2, i16>::ONE.try_into(), Ok(Rational::from(1)));
    assert_eq!(Posit::<16, 2, i16>::MINUS_ONE.try_into(), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Posit::<16, 2, i16>::NAR), Err(IsNaR));
  }

  /// `posit<4,0>` walked from NaR upwards through every pattern.
  #[test]
  fn table_4_0() {
    let expected = [
      None,
      Some((-4, 1)), Some((-2, 1)), Some((-3, 2)), Some((-1, 1)),
      Some((-3, 4)), Some((-1, 2)), Some((-1, 4)),
      Some((0, 1)),
      Some((1, 4)), Some((1, 2)), Some((3, 4)), Some((1, 1)),
      Some((3, 2)), Some((2, 1)), Some((4, 1)),
    ];
    let mut p = Posit::<4, 0, i8>::NAR;
    for expected in expected {
      let expected = expected.map(|(num, den)| Rational::from_signeds(num, den)).ok_or(IsNaR);
      assert_eq!(Rational::try_from(p), expected, "{p:?}");
      p = p.next();
    }
    assert_eq!(p, Posit::NAR);
  }

  /// The field decoder agrees with the bit-by-bit one.
  #[test]
  fn decode_agrees() {
    for p in Posit::<10, 2, i16>::cases_exhaustive() {
      let decoded = p.decode();
      let magnitude = Rational::power_of_2(decoded.scale())
        * (Rational::from(1) + Rational::from(decoded.fraction().bits().to_u128())
          / Rational::power_of_2(crate::FractionField::<10, 2>::FBITS as i64));
      let exact = if decoded.sign() { -magnitude } else { magnitude };
      assert_eq!(Rational::try_from(p), Ok(exact), "{p:?}");
    }
  }

  /// The order of bit patterns as signed integers is the order of the reals they represent.
  #[test]
  fn monotonic() {
    for p in Posit::<9, 1, i16>::cases_exhaustive() {
      if p == Posit::MAX { continue }
      assert!(Rational::try_from(p).unwrap() < Rational::try_from(p.next()).unwrap(), "{p:?}");
    }
    for p in Posit::<7, 3, i8>::cases_exhaustive() {
      if p == Posit::MAX { continue }
      assert!(Rational::try_from(p).unwrap() < Rational::try_from(p.next()).unwrap(), "{p:?}");
    }
  }

  #[test]
  fn dyadic_to_value() {
    let v = to_value(&Rational::from_signeds(-3, 8)).unwrap();
    assert_eq!((v.sign(), v.scale(), v.to_f64()), (true, -2, -0.375));
    assert_eq!(to_value(&Rational::from(0)), Some(Value::ZERO));
    assert_eq!(to_value(&Rational::from_signeds(1, 3)), None);
  }
}
