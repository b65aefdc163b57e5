use super::*;

/// Used to do value-to-value conversions that may *round* the input (see below). It is the
/// reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike what is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_.
///
/// Prefer implementing [`RoundFrom`] over [`RoundInto`], since implementing [`RoundFrom`]
/// automatically provides an implementation of [`RoundInto`], and prefer using [`RoundInto`] over
/// [`RoundFrom`] when specifying trait bounds on a generic function. There's also a blanket
/// implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// Every conversion into a posit goes through an exact [`Value`](crate::Value) and
/// [`Posit::convert_to_posit`]:
///
///   - If the value is greater in absolute value than the biggest posit, round to it (i.e., never
///     overflow).
///   - If the value is smaller in absolute value than the smallest positive posit, round to it
///     (i.e., never underflow).
///   - Otherwise, round to the nearest bit pattern, or in case of a tie, to the even bit pattern.
///
/// # Examples
///
/// Rounding from ints, floats:
/// ```
/// # use tapered_posit::*;
/// assert!(p16::round_from(1) == p16::round_from(1.00000001));
/// assert!(p32::round_from(1) <  p32::round_from(1.00000001));
///
/// assert_eq!(p32::round_from(f64::NAN), p32::NAR);
/// assert_eq!(p8::round_from(u128::MAX), p8::MAX);
/// ```
///
/// Rounding to floats:
/// ```
/// # use tapered_posit::*;
/// assert_eq!(f64::round_from(p16::MIN_POSITIVE), 1.0 / 72057594037927936.0);
/// assert!(f64::round_from(p32::NAR).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], and is implemented automatically for every [`RoundFrom`] implementation.
///
/// # Examples
///
/// ```
/// # use tapered_posit::*;
/// assert_eq!(p16::ONE.next(), 1.0004883_f64.round_into());
/// assert_eq!(p32::ONE.next(), 1.0000000075_f64.round_into());
///
/// assert_eq!(p32::NAR, f64::NAN.round_into());
/// assert_eq!(72057594037927936.0, p16::MAX.round_into());
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
mod posit;
