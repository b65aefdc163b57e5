use super::*;

use core::fmt::{Debug, Display, Formatter, Result, Write};
use crate::underlying::BitBlock;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if const { Self::JUNK_BITS == 0 } {
      let bits = self.0;
      f.debug_tuple("Posit")
        .field(&format_args!("0b{bits:0w$b}", w=Int::BITS as usize))
        .finish()
    } else {
      let bits_junk = (self.0 >> Self::BITS).mask_lsb(Self::JUNK_BITS);
      let bits_significant = self.0.mask_lsb(Self::BITS);
      f.debug_tuple("Posit")
        .field(&format_args!("0b{bits_junk:0wj$b}_{bits_significant:0ws$b}", wj=Self::JUNK_BITS as usize, ws=Self::BITS as usize))
        .finish()
    }
  }
}

impl<const N: u32, const ES: u32> Debug for Decoded<N, ES> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Decoded")
      .field("sign", &(self.sign() as u8))
      .field("regime", &format_args!("{} (k = {:+})", self.regime(), self.regime().k()))
      .field("exponent", &format_args!("{}", self.exponent()))
      .field("fraction", &format_args!("{}", self.fraction()))
      .field("scale", &format_args!("{:+}", self.scale()))
      .finish()
  }
}

/// The decimal value of the posit, as the nearest `f64` (formatting options such as precision are
/// those of `f64`), or `NaR`.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Display for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if self.is_nar() {
      f.write_str("NaR")
    } else {
      Display::fmt(&self.to_f64(), f)
    }
  }
}

/// Write bits `msb`, `msb-1`, .. of `bits`, `count` of them.
fn write_bits(f: &mut Formatter<'_>, bits: &BitBlock, msb: u32, count: u32) -> Result {
  for i in 0 .. count {
    f.write_char(if bits.test(msb - i) { '1' } else { '0' })?;
  }
  Ok(())
}

/// A posit split into the widths of its fields, for rendering.
struct Layout {
  raw: BitBlock,
  widths: [u32; 4],
  n: u32,
}

impl Layout {
  fn of<const N: u32, const ES: u32, Int: crate::Int>(posit: Posit<N, ES, Int>) -> Self {
    let decoded = posit.decode();
    Self {
      raw: posit.to_bitblock(),
      widths: [
        1,
        decoded.regime().nr_bits(),
        decoded.exponent().nr_bits(),
        decoded.fraction().nr_bits(),
      ],
      n: N,
    }
  }

  /// Call `f` on each field as `(index, msb, width)`, sign first.
  fn for_each(&self, mut f: impl FnMut(usize, u32, u32) -> Result) -> Result {
    let mut msb = self.n - 1;
    for (i, &width) in self.widths.iter().enumerate() {
      f(i, msb, width)?;
      msb = msb.wrapping_sub(width);
    }
    Ok(())
  }
}

struct Binary(Layout);

impl Display for Binary {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    self.0.for_each(|i, msb, width| {
      if i > 0 {
        f.write_char('|')?;
      }
      write_bits(f, &self.0.raw, msb, width)
    })
  }
}

struct Colored(Layout);

impl Colored {
  const COLORS: [&'static str; 4] = ["\x1b[31m", "\x1b[33m", "\x1b[36m", "\x1b[35m"];
  const RESET: &'static str = "\x1b[0m";
}

impl Display for Colored {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    self.0.for_each(|i, msb, width| {
      if width == 0 {
        return Ok(())
      }
      f.write_str(Self::COLORS[i])?;
      write_bits(f, &self.0.raw, msb, width)?;
      f.write_str(Self::RESET)
    })
  }
}

struct Hex<const N: u32, const ES: u32>(u128);

impl<const N: u32, const ES: u32> Display for Hex<N, ES> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{N}.{ES}x{:0w$x}p", self.0, w=N.div_ceil(4) as usize)
  }
}

struct Scientific<const N: u32, const ES: u32> {
  special: Option<&'static str>,
  decoded: Decoded<N, ES>,
}

impl<const N: u32, const ES: u32> Display for Scientific<N, ES> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if let Some(special) = self.special {
      return f.write_str(special)
    }
    let fraction = self.decoded.fraction();
    f.write_str(if self.decoded.sign() { "-1." } else { "+1." })?;
    if fraction.nr_bits() == 0 {
      f.write_char('0')?;
    } else {
      let msb = crate::FractionField::<N, ES>::FBITS - 1;
      write_bits(f, fraction.bits(), msb, fraction.nr_bits())?;
    }
    write!(f, "e2^{:+}", self.decoded.scale())
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The bit pattern of `self` with a `|` between sign, regime, exponent and fraction. Fields
  /// absent from this encoding are empty.
  ///
  /// ```
  /// # use tapered_posit::p8;
  /// assert_eq!(p8::from_bits(0b0_10_11_010).to_binary().to_string(), "0|10|11|010");
  /// assert_eq!(p8::MAX.to_binary().to_string(), "0|1111111||");
  /// ```
  pub fn to_binary(self) -> impl Display {
    Binary(Layout::of(self))
  }

  /// The bit pattern of `self` with ANSI colours: sign in red, regime in yellow, exponent in cyan
  /// and fraction in magenta.
  pub fn color_print(self) -> impl Display {
    Colored(Layout::of(self))
  }

  /// The bit pattern of `self` as `N.ESxHEXp`, e.g. `16.2x4000p` for a [`crate::p16`] one. This
  /// is one of the formats accepted by [`str::parse`].
  pub fn hex_format(self) -> impl Display {
    Hex::<N, ES>(self.to_bits_unsigned())
  }

  /// `self` in binary scientific notation: `±1.fraction e2^±scale`, with the fraction bits present
  /// in the encoding.
  ///
  /// ```
  /// # use tapered_posit::p8;
  /// assert_eq!(p8::from_bits(0b0_10_11_010).to_base2_scientific().to_string(), "+1.010e2^+3");
  /// assert_eq!(p8::NAR.to_base2_scientific().to_string(), "NaR");
  /// ```
  pub fn to_base2_scientific(self) -> impl Display {
    let special = if self.is_zero() {
      Some("0")
    } else if self.is_nar() {
      Some("NaR")
    } else {
      None
    };
    Scientific { special, decoded: self.decode() }
  }
}
