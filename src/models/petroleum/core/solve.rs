//! Fixed-point solver for the 15°C standard density.
//!
//! Finds `ρ15` satisfying
//!
//! ```text
//! ρ15 = ρt · M(t, 15) / E(α(ρ15), t − 15)
//! ```
//!
//! where `ρt` is the observed density at temperature `t`, `M` is the
//! [`com_modulus`] and `E` is the [`exp_factor`]. Iteration starts from the
//! observed density and stops once successive estimates agree within the
//! configured precision, or when the iteration cap is reached.

use super::{
    CompensationConfig, CompensationRegime, Observer, STANDARD_TEMP_15, alpha, com_modulus,
    exp_factor,
};

/// Outcome of a 15°C density solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveStatus {
    /// Successive estimates agreed within the configured precision.
    Converged,

    /// The iteration cap was reached first.
    MaxIters {
        /// Absolute change between the last two estimates.
        residual: f64,
    },
}

/// Result of [`solve_density_15`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Last computed 15°C density estimate, in kg/m³.
    pub density: f64,

    /// Number of iterations performed.
    pub iters: usize,

    pub status: SolveStatus,
}

/// Solves for the self-consistent 15°C density of a sample.
///
/// Never iterates more than `config.max_iters` times. Hitting the cap is not
/// an error here; the last estimate is returned with
/// [`SolveStatus::MaxIters`].
///
/// The observer receives a tick every `config.tick_interval` iterations and a
/// trace per iteration.
pub fn solve_density_15(
    regime: CompensationRegime,
    observed_density: f64,
    observed_temp: f64,
    config: &CompensationConfig,
    observer: &impl Observer,
) -> Solution {
    let apparent = observed_density * com_modulus(observed_temp, STANDARD_TEMP_15);
    let delta_temp = observed_temp - STANDARD_TEMP_15;

    let mut estimate = observed_density;
    let mut residual = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let alpha = alpha(regime, estimate);
        let next = apparent / exp_factor(alpha, delta_temp);

        if config.tick_due(iter) {
            observer.on_iteration_tick();
        }
        observer.on_trace(&format!(
            "solve_density_15: rho15={estimate}, next={next}, alpha={alpha}"
        ));

        residual = (estimate - next).abs();
        estimate = next;

        if residual <= config.precision {
            observer.on_trace(&format!(
                "solve_density_15: converged after {iter} iterations, rho15={estimate}"
            ));
            return Solution {
                density: estimate,
                iters: iter,
                status: SolveStatus::Converged,
            };
        }
    }

    observer.on_trace(&format!(
        "solve_density_15: iteration limit {} reached, rho15={estimate}, residual={residual}",
        config.max_iters
    ));

    Solution {
        density: estimate,
        iters: config.max_iters,
        status: SolveStatus::MaxIters { residual },
    }
}
