//! The three variable-width fields that follow the sign bit of a posit.
//!
//! Each field owns a fixed-capacity [`BitBlock`](crate::BitBlock) and an explicit count of the
//! bits it actually occupies in a particular encoding. They cooperate through that count only: the
//! regime decides how many bits are left for the exponent, and regime plus exponent decide how
//! many are left for the fraction, so that for any decoded posit
//!
//! ```text
//! 1 + regime.nr_bits() + exponent.nr_bits() + fraction.nr_bits() == N
//! ```

mod regime;
mod exponent;
mod fraction;

pub use regime::RegimeField;
pub use exponent::ExponentField;
pub use fraction::FractionField;

/// Write `width` positions of `bits`, msb first from bit `width - 1`, of which the first
/// `nr_bits` are occupied; the rest render as `-`. An empty field renders as `~`.
fn fmt_field(
  f: &mut core::fmt::Formatter<'_>,
  bits: &crate::BitBlock,
  width: u32,
  nr_bits: u32,
) -> core::fmt::Result {
  use core::fmt::Write;
  if width == 0 {
    return f.write_char('~')
  }
  for i in 0 .. width {
    let c = if i >= nr_bits {'-'} else if bits.test(width - 1 - i) {'1'} else {'0'};
    f.write_char(c)?;
  }
  Ok(())
}
