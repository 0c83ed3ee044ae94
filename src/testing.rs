use crate::{Phase, ScalarLike, TwoPhaseState};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implements a first-order dual number for checking derivative propagation
///
/// Carries a value and the derivative with respect to a single independent
/// variable. Only the operations required by [`ScalarLike`] are provided.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Dual {
    value: f64,
    derivative: f64,
}

impl Dual {
    /// Creates the independent variable (derivative = 1)
    pub fn variable(value: f64) -> Self {
        Dual { value, derivative: 1.0 }
    }

    /// Returns the derivative part
    pub fn derivative(&self) -> f64 {
        self.derivative
    }
}

impl Add for Dual {
    type Output = Dual;
    fn add(self, other: Dual) -> Dual {
        Dual {
            value: self.value + other.value,
            derivative: self.derivative + other.derivative,
        }
    }
}

impl Sub for Dual {
    type Output = Dual;
    fn sub(self, other: Dual) -> Dual {
        Dual {
            value: self.value - other.value,
            derivative: self.derivative - other.derivative,
        }
    }
}

impl Mul for Dual {
    type Output = Dual;
    fn mul(self, other: Dual) -> Dual {
        Dual {
            value: self.value * other.value,
            derivative: self.derivative * other.value + self.value * other.derivative,
        }
    }
}

impl Div for Dual {
    type Output = Dual;
    fn div(self, other: Dual) -> Dual {
        Dual {
            value: self.value / other.value,
            derivative: (self.derivative * other.value - self.value * other.derivative)
                / (other.value * other.value),
        }
    }
}

impl Neg for Dual {
    type Output = Dual;
    fn neg(self) -> Dual {
        Dual {
            value: -self.value,
            derivative: -self.derivative,
        }
    }
}

impl ScalarLike for Dual {
    fn constant(value: f64) -> Self {
        Dual { value, derivative: 0.0 }
    }

    fn value(self) -> f64 {
        self.value
    }

    fn powf(self, exponent: f64) -> Self {
        Dual {
            value: f64::powf(self.value, exponent),
            derivative: exponent * f64::powf(self.value, exponent - 1.0) * self.derivative,
        }
    }

    fn min(self, other: Self) -> Self {
        if self.value <= other.value {
            self
        } else {
            other
        }
    }
}

/// Implements a plain two-phase fluid state for the tests
pub(crate) struct SimpleTwoPhaseState {
    sw: f64, // wetting phase saturation
    wa: f64, // dynamic coefficient
}

impl SimpleTwoPhaseState {
    pub fn new(sw: f64, wa: f64) -> Self {
        SimpleTwoPhaseState { sw, wa }
    }
}

impl TwoPhaseState<f64> for SimpleTwoPhaseState {
    fn saturation(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Wetting => self.sw,
            Phase::NonWetting => 1.0 - self.sw,
        }
    }

    fn wa(&self) -> f64 {
        self.wa
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Dual;
    use crate::ScalarLike;
    use russell_lab::approx_eq;

    #[test]
    fn dual_arithmetic_works() {
        let x = Dual::variable(3.0);
        let c = Dual::constant(2.0);

        let y = x * x + c * x; // y = x² + 2x, y' = 2x + 2
        approx_eq(y.value(), 15.0, 1e-15);
        approx_eq(y.derivative(), 8.0, 1e-15);

        let y = c / x; // y = 2/x, y' = -2/x²
        approx_eq(y.derivative(), -2.0 / 9.0, 1e-15);

        let y = x.powf(-0.5); // y' = -0.5 x^(-1.5)
        approx_eq(y.derivative(), -0.5 * f64::powf(3.0, -1.5), 1e-15);

        let y = (-x).min(Dual::constant(-4.0)); // min picks the constant
        approx_eq(y.value(), -4.0, 1e-15);
        approx_eq(y.derivative(), 0.0, 1e-15);
    }
}
