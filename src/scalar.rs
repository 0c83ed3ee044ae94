use std::ops::{Add, Div, Mul, Neg, Sub};

/// Defines the scalar-like numeric type accepted by the curve evaluators
///
/// The same constitutive formulas run on plain floating point numbers or on
/// automatic-differentiation values carrying partial derivatives. The
/// evaluators only require arithmetic, a power function with constant
/// exponent, a minimum operation, and a way to lift plain constants into the
/// working representation.
///
/// The `value` function returns the plain floating point part of the number;
/// it is used for region branching and for debug assertions only, never
/// inside the formulas themselves, so derivative information is preserved.
pub trait ScalarLike:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lifts a plain floating point constant into this representation
    fn constant(value: f64) -> Self;

    /// Returns the plain floating point part of this value
    fn value(self) -> f64;

    /// Raises this value to a constant power
    fn powf(self, exponent: f64) -> Self;

    /// Returns the smaller of this value and another one
    fn min(self, other: Self) -> Self;
}

impl ScalarLike for f64 {
    fn constant(value: f64) -> Self {
        value
    }

    fn value(self) -> f64 {
        self
    }

    fn powf(self, exponent: f64) -> Self {
        f64::powf(self, exponent)
    }

    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
