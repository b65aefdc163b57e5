use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      let u = $x as $u;
      // SAFETY: `U` is sealed to the `iX` types, so `U::BITS == $u::BITS` means `U` is `$u` and
      // the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A `const` version of the keyword `as`, for casting an `i128` (the widest [`Int`]) down to any
/// [`Int`]. Bits that do not fit are dropped, exactly like `as`.
///
/// ```ignore
/// # use tapered_posit::underlying::const_as;
/// assert_eq!(const_as::<i16>(1234i128), 1234i16);
/// assert_eq!(const_as::<i8>(0x1ff_i128), -1i8);
/// ```
pub const fn const_as<U: Int>(x: i128) -> U {
  const_as_line!(x, i8);
  const_as_line!(x, i16);
  const_as_line!(x, i32);
  const_as_line!(x, i64);
  const_as_line!(x, i128);
  unreachable!() // cannot be const { unreachable!() }
}
