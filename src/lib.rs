//! Pmcurves implements constitutive curves for two-phase flow in porous media
//!
//! The crate provides the Dynamic-Wa capillary pressure and relative
//! permeability relations. These curves extend the classic Brooks-Corey
//! parameterization with a dynamic coefficient `Wa` supplied by the caller
//! (e.g., a wettability-alteration state variable) which amplifies the entry
//! pressure and modulates the relative permeability coefficient.
//!
//! Two evaluators are available:
//!
//! * [`ModelDynamicWa`] -- the raw closed-form curves; the capillary pressure
//!   gradient diverges as the wetting saturation approaches zero
//! * [`ModelRegularizedDynamicWa`] -- replaces the curves near the saturation
//!   endpoints with linear extrapolations (capillary pressure) or hard clamps
//!   (relative permeability) so that gradient-based (Newton) solvers always
//!   see finite, well-behaved values
//!
//! Both evaluators are generic over a scalar-like numeric type (see
//! [`ScalarLike`]), allowing the same formulas to run on plain `f64` values
//! or on automatic-differentiation values supplied by the caller.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod model_dynamic_wa;
mod model_regularized_dynamic_wa;
mod samples;
mod scalar;
mod two_phase;
pub use crate::model_dynamic_wa::*;
pub use crate::model_regularized_dynamic_wa::*;
pub use crate::samples::*;
pub use crate::scalar::*;
pub use crate::two_phase::*;

#[cfg(test)]
mod testing;
