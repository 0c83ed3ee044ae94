use pmcurves::{Phase, Samples, TwoPhaseState, N_PHASES};
use russell_lab::approx_eq;

/// Two-phase fluid state with a wetting saturation and a dynamic coefficient
struct State {
    sw: f64,
    wa: f64,
}

impl TwoPhaseState<f64> for State {
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

#[test]
fn documented_scenario_works() {
    // entry pressure = 1000, final entry pressure = 5000, λ = 2, β = 0.1,
    // η = 1, Ei = 0.5, Ef = 2, Λ = 3, threshold = 0.01
    let raw = Samples::dynamic_wa_params().finalize();
    let reg = Samples::regularized_dynamic_wa_params().finalize();

    // with Wa = 0 the amplification bracket vanishes:
    // pc(0.5, 0) = 1000 · 0.5^(-1/2) = 1414.2...
    approx_eq(raw.calc_pcnw_sat(0.5, 0.0), 1414.2135623730951, 1e-10);

    // the regularized curve passes through to the raw one in the mid region
    approx_eq(reg.calc_pcnw_sat(0.5, 0.0), raw.calc_pcnw_sat(0.5, 0.0), 1e-15);

    // the dynamic coefficient amplifies the capillary pressure
    assert!(raw.calc_pcnw_sat(0.5, 2.0) > raw.calc_pcnw_sat(0.5, 0.0));
}

#[test]
fn raw_curve_motivates_the_regularization() {
    let raw = Samples::dynamic_wa_params().finalize();
    let reg = Samples::regularized_dynamic_wa_params().finalize();

    // the raw capillary pressure blows up at zero wetting saturation
    assert!(raw.calc_pcnw_sat(0.0, 0.0).is_infinite());

    // the regularized curve stays finite there and matches the raw curve at
    // the threshold saturation
    assert!(reg.calc_pcnw_sat(0.0, 0.0).is_finite());
    approx_eq(
        reg.calc_pcnw_sat(0.01, 0.0),
        raw.calc_pcnw_sat(0.01, 0.0),
        1e-15,
    );
    approx_eq(
        reg.calc_pcnw_sat(1.0, 0.0),
        raw.calc_pcnw_sat(1.0, 0.0),
        1e-15,
    );
}

#[test]
fn regularized_curves_are_well_behaved_over_a_sweep() {
    let reg = Samples::regularized_dynamic_wa_params().finalize();
    let np = 141;
    for wa in [0.0, 1.0, 5.0] {
        let mut pc_previous = f64::INFINITY;
        for i in 0..np {
            // includes saturations below zero and above one, as produced by
            // intermediate Newton iterations
            let sw = -0.2 + 1.4 * (i as f64) / ((np - 1) as f64);
            let state = State { sw, wa };

            let mut pc = [0.0; N_PHASES];
            reg.calc_capillary_pressures(&mut pc, &state);
            assert_eq!(pc[Phase::Wetting.index()], 0.0);
            assert!(pc[Phase::NonWetting.index()].is_finite());

            let mut kr = [0.0; N_PHASES];
            reg.calc_relative_permeabilities(&mut kr, &state);
            for value in &kr {
                assert!(value.is_finite());
                assert!(*value >= 0.0 && *value <= 1.0);
            }

            // with Wa = 0 the capillary pressure decreases monotonically
            if wa == 0.0 {
                assert!(pc[Phase::NonWetting.index()] < pc_previous);
                pc_previous = pc[Phase::NonWetting.index()];
            }
        }
    }
}

#[test]
fn relative_permeability_endpoints_are_exact() {
    let reg = Samples::regularized_dynamic_wa_params().finalize();
    for wa in [0.0, 1.0, 5.0] {
        let dry = State { sw: 0.0, wa };
        let wet = State { sw: 1.0, wa };
        let mut kr = [0.0; N_PHASES];
        reg.calc_relative_permeabilities(&mut kr, &dry);
        assert_eq!(kr[Phase::Wetting.index()], 0.0);
        assert_eq!(kr[Phase::NonWetting.index()], 1.0);
        reg.calc_relative_permeabilities(&mut kr, &wet);
        assert_eq!(kr[Phase::Wetting.index()], 1.0);
        assert_eq!(kr[Phase::NonWetting.index()], 0.0);
    }
}
