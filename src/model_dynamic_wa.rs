use crate::{Phase, ScalarLike, TwoPhaseState, N_PHASES};

/// Holds the independent coefficients of the Dynamic-Wa relations (setup phase)
///
/// The parameter object follows a two-state lifecycle: an instance of this
/// builder is mutated through the setters and then frozen by [`finalize`],
/// which produces the read-only evaluator [`ModelDynamicWa`]. The setters
/// store the given values without validation; coefficients left unset remain
/// NaN and propagate silently through the formulas.
///
/// [`finalize`]: DynamicWaParams::finalize
#[derive(Clone, Copy, Debug)]
pub struct DynamicWaParams {
    entry_pressure: f64,       // entry pressure pe
    final_entry_pressure: f64, // final (fully altered) entry pressure pf
    lambda: f64,               // capillary pressure shape coefficient λ
    llambda: f64,              // relative permeability shape coefficient Λ
    beta: f64,                 // Wa coupling coefficient β (capillary pressure)
    eta: f64,                  // Wa coupling coefficient η (relative permeability)
    e_init: f64,               // lower bound shape coefficient Ei (relative permeability)
    e_final: f64,              // upper bound shape coefficient Ef (relative permeability)
}

impl DynamicWaParams {
    /// Allocates a new instance with all coefficients unset (NaN)
    pub fn new() -> Self {
        DynamicWaParams {
            entry_pressure: f64::NAN,
            final_entry_pressure: f64::NAN,
            lambda: f64::NAN,
            llambda: f64::NAN,
            beta: f64::NAN,
            eta: f64::NAN,
            e_init: f64::NAN,
            e_final: f64::NAN,
        }
    }

    /// Sets the entry pressure pe
    pub fn set_entry_pressure(&mut self, value: f64) {
        self.entry_pressure = value;
    }

    /// Sets the final entry pressure pf
    pub fn set_final_entry_pressure(&mut self, value: f64) {
        self.final_entry_pressure = value;
    }

    /// Sets the capillary pressure shape coefficient λ
    pub fn set_lambda(&mut self, value: f64) {
        self.lambda = value;
    }

    /// Sets the relative permeability shape coefficient Λ
    pub fn set_llambda(&mut self, value: f64) {
        self.llambda = value;
    }

    /// Sets the Wa coupling coefficient β (capillary pressure)
    pub fn set_beta(&mut self, value: f64) {
        self.beta = value;
    }

    /// Sets the Wa coupling coefficient η (relative permeability)
    pub fn set_eta(&mut self, value: f64) {
        self.eta = value;
    }

    /// Sets the lower bound shape coefficient Ei (relative permeability)
    pub fn set_e_init(&mut self, value: f64) {
        self.e_init = value;
    }

    /// Sets the upper bound shape coefficient Ef (relative permeability)
    pub fn set_e_final(&mut self, value: f64) {
        self.e_final = value;
    }

    /// Freezes the coefficients and returns the read-only evaluator
    ///
    /// May be called any number of times; each call snapshots the current
    /// coefficients. No derived quantity is computed at this level.
    pub fn finalize(&self) -> ModelDynamicWa {
        ModelDynamicWa { params: *self }
    }
}

impl Default for DynamicWaParams {
    fn default() -> Self {
        DynamicWaParams::new()
    }
}

/// Implements the raw Dynamic-Wa capillary pressure and relative permeability curves
///
/// The capillary pressure (non-wetting minus wetting; the wetting phase is
/// the reference at zero) extends the Brooks-Corey relation with an entry
/// pressure amplification driven by the dynamic coefficient Wa:
///
/// ```text
/// pc(Sw, Wa) = pe · Sw^(-1/λ) · [1 + (pf/pe - 1) · (Sw·Wa)/(β + Sw·Wa)]
/// ```
///
/// The relative permeabilities share the clamped coefficient
/// `C(Wa) = min(η·Wa + Ei, Ef)`:
///
/// ```text
/// krw(Sw, Wa) = C·Sw^Λ / (1 - Sw + C·Sw^Λ)
/// krn(Sw, Wa) = (1 - Sw) / (1 - Sw + C·Sw^Λ)     with Sw = 1 - Sn
/// ```
///
/// **Warning:** the curves are evaluated verbatim. The gradient of pc
/// diverges as Sw approaches zero and a zero entry pressure divides by zero;
/// non-finite results propagate silently. Use
/// [`ModelRegularizedDynamicWa`](crate::ModelRegularizedDynamicWa) inside
/// Newton solvers.
#[derive(Clone, Copy, Debug)]
pub struct ModelDynamicWa {
    params: DynamicWaParams,
}

impl ModelDynamicWa {
    /// Creates a model from the entry pressure and λ only
    ///
    /// Convenience path for the static (Wa-independent) capillary pressure
    /// curve: the coupling coefficients default to the limit in which the
    /// relation reduces to classic Brooks-Corey (pf = pe, β = 1, η = 0,
    /// Ei = Ef = 1). The relative permeability shape coefficient Λ is left
    /// unset; use the full builder when relative permeabilities are needed.
    pub fn new(entry_pressure: f64, lambda: f64) -> Self {
        let mut params = DynamicWaParams::new();
        params.set_entry_pressure(entry_pressure);
        params.set_final_entry_pressure(entry_pressure);
        params.set_lambda(lambda);
        params.set_beta(1.0);
        params.set_eta(0.0);
        params.set_e_init(1.0);
        params.set_e_final(1.0);
        params.finalize()
    }

    /// Returns the entry pressure pe
    pub fn entry_pressure(&self) -> f64 {
        self.params.entry_pressure
    }

    /// Returns the final entry pressure pf
    pub fn final_entry_pressure(&self) -> f64 {
        self.params.final_entry_pressure
    }

    /// Returns the capillary pressure shape coefficient λ
    pub fn lambda(&self) -> f64 {
        self.params.lambda
    }

    /// Returns the relative permeability shape coefficient Λ
    pub fn llambda(&self) -> f64 {
        self.params.llambda
    }

    /// Returns the Wa coupling coefficient β (capillary pressure)
    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    /// Returns the Wa coupling coefficient η (relative permeability)
    pub fn eta(&self) -> f64 {
        self.params.eta
    }

    /// Returns the lower bound shape coefficient Ei (relative permeability)
    pub fn e_init(&self) -> f64 {
        self.params.e_init
    }

    /// Returns the upper bound shape coefficient Ef (relative permeability)
    pub fn e_final(&self) -> f64 {
        self.params.e_final
    }

    /// Calculates the clamped relative permeability coefficient C(Wa)
    ///
    /// `C(Wa) = min(η·Wa + Ei, Ef)` is shared by both relative permeability
    /// curves; the wetting and non-wetting formulas must use the same value.
    pub fn calc_wa_coefficient<T>(&self, wa: T) -> T
    where
        T: ScalarLike,
    {
        (T::constant(self.params.eta) * wa + T::constant(self.params.e_init))
            .min(T::constant(self.params.e_final))
    }

    /// Calculates the capillary pressure pc(Sw, Wa)
    ///
    /// The wetting saturation must satisfy 0 ≤ Sw ≤ 1 (checked in debug
    /// builds only). Sw = 0 yields an infinite value.
    pub fn calc_pcnw_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        debug_assert!(0.0 <= sw.value() && sw.value() <= 1.0);
        let swa = sw * wa;
        let amplification = T::constant(1.0)
            + T::constant(self.params.final_entry_pressure / self.params.entry_pressure - 1.0)
                * swa
                / (T::constant(self.params.beta) + swa);
        amplification * T::constant(self.params.entry_pressure) * sw.powf(-1.0 / self.params.lambda)
    }

    /// Calculates the relative permeability of the wetting phase krw(Sw, Wa)
    pub fn calc_krw_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        debug_assert!(0.0 <= sw.value() && sw.value() <= 1.0);
        let cc = self.calc_wa_coefficient(wa);
        let num = cc * sw.powf(self.params.llambda);
        num / (T::constant(1.0) - sw + num)
    }

    /// Calculates the relative permeability of the non-wetting phase
    ///
    /// The curve is evaluated at the complement saturation Sw = 1 - Sn.
    pub fn calc_krn_sat<T>(&self, sw: T, wa: T) -> T
    where
        T: ScalarLike,
    {
        debug_assert!(0.0 <= sw.value() && sw.value() <= 1.0);
        let cc = self.calc_wa_coefficient(wa);
        (T::constant(1.0) - sw) / (T::constant(1.0) - sw + cc * sw.powf(self.params.llambda))
    }

    /// Calculates the capillary pressure from a fluid state
    pub fn calc_pcnw<T, S>(&self, state: &S) -> T
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        self.calc_pcnw_sat(state.saturation(Phase::Wetting), state.wa())
    }

    /// Calculates the wetting phase relative permeability from a fluid state
    pub fn calc_krw<T, S>(&self, state: &S) -> T
    where
        T: ScalarLike,
        S: TwoPhaseState<T>,
    {
        self.calc_krw_sat(state.saturation(Phase::Wetting), state.wa())
    }

    /// Calculates the non-wetting phase relative permeability from a fluid state
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
    /// slot receives pc(Sw, Wa).
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
