use crate::{DynamicWaParams, RegularizedDynamicWaParams};

/// Holds sample coefficient sets for the curve models
pub struct Samples;

impl Samples {
    /// Returns example coefficients for the Dynamic-Wa relations
    ///
    /// A moderately water-wet medium whose entry pressure is amplified up to
    /// five-fold by the dynamic coefficient Wa.
    pub fn dynamic_wa_params() -> DynamicWaParams {
        let mut params = DynamicWaParams::new();
        params.set_entry_pressure(1000.0); // Pa
        params.set_final_entry_pressure(5000.0); // Pa
        params.set_lambda(2.0); // [-]
        params.set_llambda(3.0); // [-]
        params.set_beta(0.1); // [-]
        params.set_eta(1.0); // [-]
        params.set_e_init(0.5); // [-]
        params.set_e_final(2.0); // [-]
        params
    }

    /// Returns example coefficients for the regularized Dynamic-Wa relations
    ///
    /// Same medium as [`Samples::dynamic_wa_params`] with the default
    /// regularization threshold (0.01).
    pub fn regularized_dynamic_wa_params() -> RegularizedDynamicWaParams {
        let mut params = RegularizedDynamicWaParams::new();
        params.set_entry_pressure(1000.0); // Pa
        params.set_final_entry_pressure(5000.0); // Pa
        params.set_lambda(2.0); // [-]
        params.set_llambda(3.0); // [-]
        params.set_beta(0.1); // [-]
        params.set_eta(1.0); // [-]
        params.set_e_init(0.5); // [-]
        params.set_e_final(2.0); // [-]
        params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
