/// The rounding decision a field reports after it has been assigned from a scale.
///
/// A posit is rounded *arithmetically* (to the nearest value) while all exponent bits fit in the
/// encoding, and *geometrically* (to the nearest power of two, by ratio) once the regime has
/// pushed some exponent bits out. Projection onto [maxpos](crate::Posit::MAX) or
/// [minpos](crate::Posit::MIN_POSITIVE) is a geometric rounding too.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum Rounding {
  /// Round towards zero by a power of two: the value was above maxpos and is projected onto it,
  /// or the dropped exponent bits are below their midpoint.
  GeometricRoundDown,
  /// Arithmetic rounding that was decided to go down.
  ArithmeticRoundDown,
  /// The dropped bits are all zero.
  NoAdditionalRounding,
  /// Arithmetic rounding that was decided to go up.
  ArithmeticRoundUp,
  /// Round away from zero by a power of two: the value was below minpos and is projected onto
  /// it, or the first dropped exponent bit is set.
  GeometricRoundUp,
  /// Nothing was dropped yet; rounding will be decided on the fraction bits.
  ArithmeticRounding,
}

impl Rounding {
  /// Whether this decision is a geometric one.
  pub fn is_geometric(self) -> bool {
    matches!(self, Self::GeometricRoundDown | Self::GeometricRoundUp)
  }
}
