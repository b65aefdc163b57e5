use super::*;
use crate::value::Value;

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$signed> for Posit<N, ES, Int> {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a `Posit`, rounding to nearest (see [Rounding](RoundFrom#rounding)).")]
      ///
      #[doc = concat!("Every value converts to a real posit, [`", stringify!($signed), "::MIN`] included; integers never convert to [NaR](Posit::NAR).")]
      fn round_from(value: $signed) -> Self {
        Self::convert_to_posit(&Value::from(value))
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$unsigned> for Posit<N, ES, Int> {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a `Posit`, rounding to nearest (see [Rounding](RoundFrom#rounding)).")]
      fn round_from(value: $unsigned) -> Self {
        Self::convert_to_posit(&Value::from(value))
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}
make_impl!{i128, u128}
