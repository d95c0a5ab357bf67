//! Density/temperature compensation for petroleum products.
//!
//! The computation is a linear pipeline:
//!
//! 1. **Classify**: map an [`OilCategory`] to a [`CompensationRegime`].
//!    Refined products start in the provisional gasoline regime and are
//!    re-classified once a 15°C density is known.
//! 2. **Coefficients**: look up the regime's regression constants and
//!    evaluate the density-dependent expansion coefficient ([`alpha`]).
//! 3. **Solve**: fixed-point iteration for the self-consistent 15°C density
//!    ([`solve_density_15`]).
//! 4. **Project**: derive the 20°C density and the VCF from the actual
//!    temperature to 20°C ([`project_to_20c`], [`compute_final_vcf`]).
//!
//! Densities are in kg/m³ and temperatures in °C throughout.
//! Non-physical inputs (zero or negative density) are not rejected here and
//! produce non-finite results; validate before calling.

mod category;
mod coefficients;
mod compensate;
mod config;
mod correction;
mod error;
mod observer;
mod project;
mod solve;

#[cfg(test)]
mod test_support;

pub use category::{CompensationRegime, OilCategory, classify_regime, refine_product_regime};
pub use coefficients::{RegimeCoefficients, alpha};
pub use compensate::{
    CompensationResult, MeasurementSample, calc_compensated_density,
    calc_compensated_density_with,
};
pub use config::CompensationConfig;
pub use correction::{STANDARD_TEMP_15, STANDARD_TEMP_20, com_modulus, exp_factor};
pub use error::CompensationError;
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use project::{Projection, compute_final_vcf, project_to_20c};
pub use solve::{SolveStatus, Solution, solve_density_15};
