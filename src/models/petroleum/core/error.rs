use thiserror::Error;

/// Errors that can occur while compensating a density measurement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompensationError {
    /// The oil category code is not one of the supported categories.
    #[error("invalid oil category code: {code}")]
    InvalidOilCategory { code: u8 },

    /// A refined product's 15°C density lies outside every supported band.
    #[error("no compensation regime for refined product with 15°C density {density_15}")]
    NoMatchingRegime { density_15: f64 },

    /// The solver reached the iteration limit without converging.
    ///
    /// Only returned when
    /// [`CompensationConfig::fail_on_max_iters`](super::CompensationConfig::fail_on_max_iters)
    /// is set; otherwise the best estimate is reported as a success.
    #[error("solver hit iteration limit: residual={residual}")]
    NonConvergence {
        /// Absolute change between the last two estimates.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
