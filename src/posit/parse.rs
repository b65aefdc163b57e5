use super::*;
use super::convert::RoundFrom;

/// The error type returned when parsing a [`Posit`] from a string fails.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum ParsePositError {
  /// The input was empty.
  Empty,
  /// The input looked like a `N.ESxHEX` posit literal but its `N` or `ES` was not a number.
  MalformedLiteral,
  /// The hexadecimal bits of a posit literal were missing, had an invalid digit, or had more
  /// digits than the literal's `N` bits need.
  InvalidHex,
  /// The input was not a valid decimal float.
  InvalidFloat,
}

impl core::fmt::Display for ParsePositError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      ParsePositError::Empty => "cannot parse posit from empty string",
      ParsePositError::MalformedLiteral => "malformed posit literal, expected N.ESxHEX",
      ParsePositError::InvalidHex => "invalid hexadecimal digits in posit literal",
      ParsePositError::InvalidFloat => "invalid float literal",
    })
  }
}

impl core::error::Error for ParsePositError {}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Parse a `N.ESxHEX[p]` literal, as produced by [`Self::hex_format`].
  ///
  /// The `N` and `ES` of the literal are only checked for well-formedness: the hex digits are
  /// taken as a bit pattern of the literal's `N` bits, and shifted right to fit in this posit's `N`
  /// if the literal is wider (left if narrower).
  fn parse_literal(s: &str) -> Result<Self, ParsePositError> {
    let (config, hex) = s.split_once(['x', 'X']).ok_or(ParsePositError::MalformedLiteral)?;
    let (n, es) = config.split_once('.').ok_or(ParsePositError::MalformedLiteral)?;
    let n: u32 = n.parse().map_err(|_| ParsePositError::MalformedLiteral)?;
    let _es: u32 = es.parse().map_err(|_| ParsePositError::MalformedLiteral)?;
    if n == 0 || n > 128 {
      return Err(ParsePositError::MalformedLiteral)
    }

    let hex = hex.strip_suffix(['p', 'P']).unwrap_or(hex);
    if hex.is_empty() || hex.len() > n.div_ceil(4) as usize || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
      return Err(ParsePositError::InvalidHex)
    }
    let bits = u128::from_str_radix(hex, 16).map_err(|_| ParsePositError::InvalidHex)?;
    if n < 128 && bits >> n != 0 {
      return Err(ParsePositError::InvalidHex)
    }

    let bits =
      if n >= Self::BITS {
        bits >> (n - Self::BITS)
      } else {
        bits << (Self::BITS - n)
      };
    Ok(Self::from_bits(Int::of_u128_truncating(bits)))
  }
}

/// Parse a posit from either
///
///   - a posit literal `N.ESxHEX`, optionally followed by `p` (see [`Posit::hex_format`]), or
///   - a decimal float literal such as `3.25`, `-1e-3` or `nan`, rounded to the nearest posit
///     (`NaR` is also accepted).
///
/// ```
/// # use tapered_posit::{p16, p32, RoundFrom};
/// assert_eq!("16.2x4000p".parse::<p16>(), Ok(p16::ONE));
/// assert_eq!("-2.5".parse::<p32>(), Ok(p32::round_from(-2.5)));
/// assert_eq!("NaR".parse::<p32>(), Ok(p32::NAR));
/// assert!("16.2x".parse::<p16>().is_err());
/// ```
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> core::str::FromStr for Posit<N, ES, Int> {
  type Err = ParsePositError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() {
      return Err(ParsePositError::Empty)
    }
    if s.eq_ignore_ascii_case("nar") {
      return Ok(Self::NAR)
    }
    if s.contains(['x', 'X']) {
      return Self::parse_literal(s)
    }
    let float: f64 = s.parse().map_err(|_| ParsePositError::InvalidFloat)?;
    Ok(Self::round_from(float))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn literal() {
    assert_eq!("16.2x7fffp".parse(), Ok(crate::p16::MAX));
    assert_eq!("16.2x7FFF".parse(), Ok(crate::p16::MAX));
    assert_eq!("8.2x40p".parse(), Ok(crate::p8::ONE));
    assert_eq!("8.2xffp".parse(), Ok(crate::p8::MAX_NEGATIVE));
    assert_eq!("10.1x300p".parse(), Ok(Posit::<10, 1, i16>::MINUS_ONE));
  }

  #[test]
  fn literal_other_width() {
    // A 16-bit pattern into an 8-bit posit keeps the top 8 bits.
    assert_eq!("16.2x4080p".parse(), Ok(crate::p8::ONE));
    // An 8-bit pattern into a 16-bit one is padded with 0s.
    assert_eq!("8.2x40p".parse(), Ok(crate::p16::ONE));
  }

  #[test]
  fn hex_format_round_trip() {
    for p in Posit::<10, 1, i16>::cases_exhaustive_all() {
      assert_eq!(p.hex_format().to_string().parse(), Ok(p));
    }
  }

  #[test]
  fn float() {
    assert_eq!(" 1 ".parse(), Ok(crate::p8::ONE));
    assert_eq!("-1.0".parse(), Ok(crate::p8::MINUS_ONE));
    assert_eq!("1e100".parse(), Ok(crate::p8::MAX));
    assert_eq!("nan".parse(), Ok(crate::p8::NAR));
    assert_eq!("inf".parse(), Ok(crate::p8::NAR));
    assert_eq!("NaR".parse(), Ok(crate::p8::NAR));
    assert_eq!("0".parse(), Ok(crate::p8::ZERO));
  }

  #[test]
  fn errors() {
    assert_eq!("".parse::<crate::p8>(), Err(ParsePositError::Empty));
    assert_eq!("   ".parse::<crate::p8>(), Err(ParsePositError::Empty));
    assert_eq!("8x40".parse::<crate::p8>(), Err(ParsePositError::MalformedLiteral));
    assert_eq!("a.2x40".parse::<crate::p8>(), Err(ParsePositError::MalformedLiteral));
    assert_eq!("0.2x40".parse::<crate::p8>(), Err(ParsePositError::MalformedLiteral));
    assert_eq!("8.2x".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("8.2xp".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("8.2xfg".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("8.2x+40".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("8.2x-40".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("8.2x140".parse::<crate::p8>(), Err(ParsePositError::InvalidHex));
    assert_eq!("10.1x0300p".parse::<Posit<10, 1, i16>>(), Err(ParsePositError::InvalidHex));
    assert_eq!("10.1x400p".parse::<Posit<10, 1, i16>>(), Err(ParsePositError::InvalidHex));
    assert_eq!("128.2x800000000000000000000000000000000".parse::<crate::p64>(), Err(ParsePositError::InvalidHex));
    assert_eq!("1.2.3".parse::<crate::p8>(), Err(ParsePositError::InvalidFloat));
    assert_eq!("posit".parse::<crate::p8>(), Err(ParsePositError::InvalidFloat));
  }

  #[test]
  fn error_display() {
    assert_eq!(ParsePositError::Empty.to_string(), "cannot parse posit from empty string");
    let error: &dyn core::error::Error = &ParsePositError::InvalidHex;
    assert!(error.source().is_none());
  }
}
