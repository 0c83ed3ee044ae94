use crate::{DynamicWaParams, ModelDynamicWa, Phase, ScalarLike, TwoPhaseState, N_PHASES};

/// Step size of the finite differences estimating the boundary slopes
const FD_EPS: f64 = 1e-7;

/// Holds the coefficients of the regularized Dynamic-Wa relations (setup phase)
///
/// Extends [`DynamicWaParams`] with the low saturation regularization
/// threshold (default 0.01). [`finalize`] freezes the coefficients and
/// precomputes the capillary pressure values and slopes at the two
/// regularization boundaries, which the evaluator then uses for linear
/// extrapolation.
///
/// [`finalize`]: RegularizedDynamicWaParams::finalize
#[derive(Clone, Copy, Debug)]
pub struct RegularizedDynamicWaParams {
    base: DynamicWaParams,
    pcnw_low_sw: f64, // regularization threshold saturation
}

impl RegularizedDynamicWaParams {
    /// Allocates a new instance with unset coefficients and the default threshold
    pub fn new() -> Self {
        RegularizedDynamicWaParams {
            base: DynamicWaParams::new(),
            pcnw_low_sw: 0.01,
        }
    }

    /// Sets the entry pressure pe
    pub fn set_entry_pressure(&mut self, value: f64) {
        self.base.set_entry_pressure(value);
    }

    /// Sets the final entry pressure pf
    pub fn set_final_entry_pressure(&mut self, value: f64) {
        self.base.set_final_entry_pressure(value);
    }

    /// Sets the capillary pressure shape coefficient λ
    pub fn set_lambda(&mut self, value: f64) {
        self.base.set_lambda(value);
    }

    /// Sets the relative permeability shape coefficient Λ
    pub fn set_llambda(&mut self, value: f64) {
        self.base.set_llambda(value);
    }

    /// Sets the Wa coupling coefficient β (capillary pressure)
    pub fn set_beta(&mut self, value: f64) {
        self.base.set_beta(value);
    }

    /// Sets the Wa coupling coefficient η (relative permeability)
    pub fn set_eta(&mut self, value: f64) {
        self.base.set_eta(value);
    }

    /// Sets the lower bound shape coefficient Ei (relative permeability)
    pub fn set_e_init(&mut self, value: f64) {
        self.base.set_e_init(value);
    }

    /// Sets the upper bound shape coefficient Ef (relative permeability)
    pub fn set_e_final(&mut self, value: f64) {
        self.base.set_e_final(value);
    }

    /// Sets the threshold saturation below which the capillary pressure is regularized
    pub fn set_pcnw_low_sw(&mut self, value: f64) {
        self.pcnw_low_sw = value;
    }

    /// Freezes the coefficients and computes the regularization boundary data
    ///
    /// Evaluates the raw capillary pressure curve and its slope (finite
    /// differences with step 1e-7) at the threshold saturation and at Sw = 1.
    /// The dynamic coefficient is pinned to Wa = 0 for these derived
    /// quantities; they are not re-derived per call. The computation is
    /// deterministic: repeated calls with unchanged coefficients yield
    /// identical boundary data.
    pub fn finalize(&self) -> ModelRegularizedDynamicWa {
        let raw = self.base.finalize();
        ModelRegularizedDynamicWa {
            pcnw_low_sw: self.pcnw_low_sw,
            pcnw_low: raw.calc_pcnw_sat(self.pcnw_low_sw, 0.0),
            pcnw_slope_low: dpcnw_dsw(&raw, self.pcnw_low_sw),
            pcnw_high: raw.calc_pcnw_sat(1.0, 0.0),
            pcnw_slope_high: dpcnw_dsw(&raw, 1.0),
            raw,
        }
    }
}

impl Default for RegularizedDynamicWaParams {
    fn default() -> Self {
        RegularizedDynamicWaParams::new()
    }
}

/// Estimates d(pc)/d(Sw) of the raw curve at Wa = 0 via finite differences
///
/// Uses a symmetric stencil, dropping the side that would leave [0, 1].
fn dpcnw_dsw(raw: &ModelDynamicWa, sw: f64) -> f64 {
    let mut delta = 0.0;
    let pc_fwd = if sw + FD_EPS < 1.0 {
        delta += FD_EPS;
        raw.calc_pcnw_sat(sw + FD_EPS, 0.0)
    } else {
        raw.calc_pcnw_sat(sw, 0.0)
    };
    let pc_bwd = if sw - FD_EPS > 0.0 {
        delta += FD_EPS;
        raw.calc_pcnw_sat(sw - FD_EPS, 0.0)
    } else {
        raw.calc_pcnw_sat(sw, 0.0)
    };
    (pc_fwd - pc_bwd) / delta
}

/// Implements the regularized Dynamic-Wa capillary pressure and relative permeability curves
///
/// The raw curves predict an infinite capillary pressure gradient for very
/// low wetting saturations, which Newton solvers cannot digest. This
/// evaluator therefore dispatches over three saturation regions:
///
/// * `Sw ≤ threshold` -- the capillary pressure follows a straight line
///   anchored at the precomputed boundary value and slope
/// * `threshold < Sw < 1` -- the raw curves are used unmodified
/// * `Sw ≥ 1` -- straight line anchored at the Sw = 1 boundary data
///
/// The relative permeabilities are only hard-clamped to their physical
/// limits (0 and 1) outside [0, 1] and follow the raw curves inside; unlike
/// the capillary pressure, no slope matching is performed, so the clamping
/// introduces a kink at the endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ModelRegularizedDynamicWa {
    raw: ModelDynamicWa,
    pcnw_low_sw: f64,    // regularization threshold saturation
    pcnw_low: f64,       // raw pc at the threshold (Wa = 0)
    pcnw_slope_low: f64, // raw curve slope at the threshold (Wa = 0)
    pcnw_high: f64,      // raw pc at Sw = 1 (Wa = 0)
    pcnw_slope_high: f64, // raw curve slope at Sw = 1 (Wa = 0)
}

impl ModelRegularizedDynamicWa {
    /// Creates a model from the entry pressure and λ only
    ///
    /// See [`ModelDynamicWa::new`] for the coefficient defaults; the
    /// regularization threshold takes its default value 0.01.
    pub fn new(entry_pressure: f64, lambda: f64) -> Self {
        let mut params = RegularizedDynamicWaParams::new();
        params.set_entry_pressure(entry_pressure);
        params.set_final_entry_pressure(entry_pressure);
        params.set_lambda(lambda);
        params.set_beta(1.0);
        params.set_eta(0.0);
        params.set_e_init(1.0);
        params.set_e_final(1.0);
        params.finalize()
    }

    /// Returns the raw (unregularized) model
    pub fn raw(&self) -> &ModelDynamicWa {
        &self.raw
    }

    /// Returns the threshold saturation below which the capillary pressure is regularized
    pub fn pcnw_low_sw(&self) -> f64 {
        self.pcnw_low_sw
    }

    /// Returns the capillary pressure at the threshold saturation (Wa = 0)
    pub fn pcnw_low(&self) -> f64 {
        self.pcnw_low
    }

    /// Returns the extrapolation slope used for Sw below the threshold
    pub fn pcnw_slope_low(&self) -> f64 {
        self.pcnw_slope_low
    }

    /// Returns the capillary pressure at Sw = 1 (Wa = 0)
    pub fn pcnw_high(&self) -> f64 {
        self.pcnw_high
    }

    /// Returns the extrapolation slope used for Sw above 1
    pub fn pcnw_slope_high(&self) -> f64 {
        self.pcnw_slope_high
    }

    /// Calculates the regularized capillary pressure pc(Sw, Wa)
    ///
    /// Unlike the raw curve, any saturation is acceptable; values outside
    /// the safe interval follow the linear extrapolations.
    pub fn calc_pcnw_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        if sw.value() <= self.pcnw_low_sw {
            T::constant(self.pcnw_low)
                + T::constant(self.pcnw_slope_low) * (sw - T::constant(self.pcnw_low_sw))
        } else if sw.value() >= 1.0 {
            T::constant(self.pcnw_high)
                + T::constant(self.pcnw_slope_high) * (sw - T::constant(1.0))
        } else {
            self.raw.calc_pcnw_sat(sw, wa)
        }
    }

    /// Calculates the regularized relative permeability of the wetting phase
    pub fn calc_krw_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        if sw.value() <= 0.0 {
            T::constant(0.0)
        } else if sw.value() >= 1.0 {
            T::constant(1.0)
        } else {
            self.raw.calc_krw_sat(sw, wa)
        }
    }

    /// Calculates the regularized relative permeability of the non-wetting phase
    ///
    /// The curve is evaluated at the complement saturation Sw = 1 - Sn.
    pub fn calc_krn_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        if sw.value() >= 1.0 {
            T::constant(0.0)
        } else if sw.value() <= 0.0 {
            T::constant(1.0)
        } else {
            self.raw.calc_krn_sat(sw, wa)
        }
    }

    /// Calculates the regularized capillary pressure from a fluid state
    pub fn calc_pcnw<T, S>(&self, state: &S) -> T
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        self.calc_pcnw_sat(state.saturation(Phase::Wetting), state.wa())
    }

    /// Calculates the regularized wetting phase relative permeability from a fluid state
    pub fn calc_krw<T, S>(&self, state: &S) -> T
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        self.calc_krw_sat(state.saturation(Phase::Wetting), state.wa())
    }

    /// Calculates the regularized non-wetting phase relative permeability from a fluid state
    pub fn calc_krn<T, S>(&self, state: &S) -> T
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        let sw = T::constant(1.0) - state.saturation(Phase::NonWetting);
        self.calc_krn_sat(sw, state.wa())
    }

    /// Fills the per-phase capillary pressures
    ///
    /// The wetting slot receives zero (reference phase) and the non-wetting
    /// slot receives the regularized pc(Sw, Wa).
    pub fn calc_capillary_pressures<T, S>(&self, values: &mut [T; N_PHASES], state: &S)
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        values[Phase::Wetting.index()] = T::constant(0.0);
        values[Phase::NonWetting.index()] = self.calc_pcnw(state);
    }

    /// Fills the per-phase relative permeabilities
    pub fn calc_relative_permeabilities<T, S>(&self, values: &mut [T; N_PHASES], state: &S)
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        values[Phase::Wetting.index()] = self.calc_krw(state);
        values[Phase::NonWetting.index()] = self.calc_krn(state);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
