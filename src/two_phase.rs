use crate::ScalarLike;

/// Defines the number of fluid phases handled by the curve evaluators
pub const N_PHASES: usize = 2;

// the Dynamic-Wa relations only apply to the case of two fluid phases
const _: () = assert!(N_PHASES == 2);

/// Identifies one of the two fluid phases
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The wetting phase (reference phase with zero capillary pressure)
    Wetting,

    /// The non-wetting phase
    NonWetting,
}

impl Phase {
    /// Returns the index of this phase in per-phase containers
    pub fn index(&self) -> usize {
        match self {
            Phase::Wetting => 0,
            Phase::NonWetting => 1,
        }
    }
}

/// Defines the fluid-state capability consumed by the curve evaluators
///
/// The implementor supplies the per-phase saturations and the dynamic
/// coefficient Wa, already converted (decayed) into the working scalar-like
/// representation `T`. The evaluators never mutate the fluid state.
pub trait TwoPhaseState<T>
where
    T: ScalarLike,
{
    /// Returns the saturation of the given phase
    fn saturation(&self, phase: Phase) -> T;

    /// Returns the dynamic coefficient Wa
    fn wa(&self) -> T;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Phase, N_PHASES};

    #[test]
    fn phase_indices_are_consistent() {
        assert_eq!(Phase::Wetting.index(), 0);
        assert_eq!(Phase::NonWetting.index(), 1);
        assert!(Phase::Wetting.index() < N_PHASES);
        assert!(Phase::NonWetting.index() < N_PHASES);
    }
}
