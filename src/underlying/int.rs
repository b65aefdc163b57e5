use super::{Int, Sealed};

/// The implementation is the same for every width, only the types change.
macro_rules! impl_int {
  ($int:ty, $uint:ty) => {
    impl Int for $int {}

    impl Sealed for $int {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MIN: Self = <$int>::MIN;
      const MAX: Self = <$int>::MAX;
      const BITS: u32 = <$int>::BITS;

      #[inline]
      fn is_positive(self) -> bool {
        self >= 0
      }

      #[inline]
      fn lshr(self, n: u32) -> Self { ((self as $uint) >> n) as $int }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        if n >= Self::BITS {
          self
        } else {
          let mask = (1 as $int << n).wrapping_sub(1);
          self & mask
        }
      }

      #[inline]
      fn low_bits(self, n: u32) -> u128 {
        // Zero-extend (not sign-extend) through the unsigned type of the same width.
        let x = self as $uint as u128;
        if n >= 128 { x } else { x & ((1u128 << n) - 1) }
      }

      #[inline]
      fn of_u128_truncating(x: u128) -> Self {
        x as $uint as $int
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

      #[inline]
      fn wrapping_neg(self) -> Self { self.wrapping_neg() }

      #[inline]
      fn wrapping_abs(self) -> Self { self.wrapping_abs() }
    }
  }
}

impl_int!{i8, u8}
impl_int!{i16, u16}
impl_int!{i32, u32}
impl_int!{i64, u64}
impl_int!{i128, u128}
