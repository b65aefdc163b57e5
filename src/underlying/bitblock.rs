//! A fixed-capacity bit buffer, wide enough for every posit field and for the scratch space used
//! while encoding.
//!
//! Bit `i` has weight `2^i`, i.e. bit 0 is the lsb. Operations that take a `width` treat the
//! buffer as a `width`-bit unsigned integer and leave every bit at or above `width` cleared.

use core::ops::{BitAnd, BitOr, BitOrAssign, Shl, ShlAssign, Shr};

const WORDS: usize = 4;

/// A 256-bit buffer. Copyable and stack allocated.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash, Default)]
pub struct BitBlock([u64; WORDS]);

impl BitBlock {
  /// Number of bits the buffer holds. This is twice the widest posit (128 bits), which covers the
  /// `N + 3 + ES` bits of the encode scratch for every configuration the crate accepts.
  pub const CAPACITY: u32 = 64 * WORDS as u32;

  /// All bits cleared.
  pub const ZERO: Self = Self([0; WORDS]);

  /// A buffer holding the 128 bits of `x` in its lowest positions.
  pub const fn from_u128(x: u128) -> Self {
    Self([x as u64, (x >> 64) as u64, 0, 0])
  }

  /// The lowest 128 bits of the buffer.
  pub const fn to_u128(&self) -> u128 {
    self.0[0] as u128 | (self.0[1] as u128) << 64
  }

  /// A buffer with the lowest `width` bits set.
  pub fn ones(width: u32) -> Self {
    let mut x = Self::ZERO;
    for (i, word) in x.0.iter_mut().enumerate() {
      let lo = 64 * i as u32;
      if width >= lo + 64 {
        *word = u64::MAX;
      } else if width > lo {
        *word = (1u64 << (width - lo)) - 1;
      }
    }
    x
  }

  /// Value of bit `i`. Bits beyond [`Self::CAPACITY`] read as 0.
  #[inline]
  pub fn test(&self, i: u32) -> bool {
    i < Self::CAPACITY && (self.0[(i / 64) as usize] >> (i % 64)) & 1 == 1
  }

  /// Set bit `i` to `value`.
  #[inline]
  pub fn set(&mut self, i: u32, value: bool) {
    debug_assert!(i < Self::CAPACITY, "bit index {i} out of range");
    let word = &mut self.0[(i / 64) as usize];
    let mask = 1u64 << (i % 64);
    if value { *word |= mask } else { *word &= !mask }
  }

  /// Clear every bit.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::ZERO
  }

  /// Whether no bit is set.
  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0.iter().all(|&w| w == 0)
  }

  /// Whether any bit at index `msb` or below is set. A negative `msb` selects no bits at all.
  ///
  /// ```ignore
  /// let x = BitBlock::from_u128(0b0100);
  /// assert!(x.any_at_or_below(2));
  /// assert!(!x.any_at_or_below(1));
  /// assert!(!x.any_at_or_below(-1));
  /// ```
  pub fn any_at_or_below(&self, msb: i64) -> bool {
    if msb < 0 {
      return false
    }
    let width = (msb as u64 + 1).min(Self::CAPACITY as u64) as u32;
    !(*self & Self::ones(width)).is_zero()
  }

  /// Whether the lowest `width` bits are all set.
  pub fn all_ones(&self, width: u32) -> bool {
    let mask = Self::ones(width);
    *self & mask == mask
  }

  /// Keep only the lowest `width` bits.
  #[inline]
  pub fn low(&self, width: u32) -> Self {
    *self & Self::ones(width)
  }

  /// Bits `lsb .. lsb + width` as an integer (`width` at most 128).
  pub fn extract(&self, lsb: u32, width: u32) -> u128 {
    debug_assert!(width <= 128);
    (*self >> lsb).low(width).to_u128()
  }

  /// The top `width` bits of a `src_width`-bit value, moved down to the lowest positions.
  pub fn truncate_top(&self, src_width: u32, width: u32) -> Self {
    debug_assert!(width <= src_width);
    (*self >> (src_width - width)).low(width)
  }

  /// Add 1 as a `width`-bit unsigned integer. Returns the carry out of bit `width - 1`; on carry
  /// the buffer wraps to 0.
  pub fn increment(&mut self, width: u32) -> bool {
    let mut carry = true;
    for word in self.0.iter_mut() {
      if !carry { break }
      let (sum, overflow) = word.overflowing_add(1);
      *word = sum;
      carry = overflow;
    }
    let overflow = carry || self.test(width);
    *self = self.low(width);
    overflow
  }

  /// Two's complement negation as a `width`-bit integer.
  pub fn twos_complement(&self, width: u32) -> Self {
    let mut x = Self::ZERO;
    for (dst, src) in x.0.iter_mut().zip(self.0.iter()) {
      *dst = !src;
    }
    x.increment(width);
    x
  }
}

impl Shl<u32> for BitBlock {
  type Output = Self;

  fn shl(self, n: u32) -> Self {
    if n >= Self::CAPACITY {
      return Self::ZERO
    }
    let words = (n / 64) as usize;
    let bits = n % 64;
    let mut out = Self::ZERO;
    for i in (words..WORDS).rev() {
      let src = i - words;
      let mut w = self.0[src] << bits;
      if bits != 0 && src > 0 {
        w |= self.0[src - 1] >> (64 - bits);
      }
      out.0[i] = w;
    }
    out
  }
}

impl ShlAssign<u32> for BitBlock {
  fn shl_assign(&mut self, n: u32) {
    *self = *self << n
  }
}

impl Shr<u32> for BitBlock {
  type Output = Self;

  fn shr(self, n: u32) -> Self {
    if n >= Self::CAPACITY {
      return Self::ZERO
    }
    let words = (n / 64) as usize;
    let bits = n % 64;
    let mut out = Self::ZERO;
    for i in 0 .. WORDS - words {
      let src = i + words;
      let mut w = self.0[src] >> bits;
      if bits != 0 && src + 1 < WORDS {
        w |= self.0[src + 1] << (64 - bits);
      }
      out.0[i] = w;
    }
    out
  }
}

impl BitOr for BitBlock {
  type Output = Self;

  fn bitor(mut self, rhs: Self) -> Self {
    self |= rhs;
    self
  }
}

impl BitOrAssign for BitBlock {
  fn bitor_assign(&mut self, rhs: Self) {
    for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
      *a |= b;
    }
  }
}

impl BitAnd for BitBlock {
  type Output = Self;

  fn bitand(mut self, rhs: Self) -> Self {
    for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
      *a &= b;
    }
    self
  }
}

impl core::fmt::Debug for BitBlock {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "BitBlock(0x{:016x}_{:016x}_{:016x}_{:016x})", self.0[3], self.0[2], self.0[1], self.0[0])
  }
}
