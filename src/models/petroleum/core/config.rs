/// Solver configuration for density compensation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensationConfig {
    /// Maximum iteration count for each 15°C density solve.
    ///
    /// The cap is always enforced; the last estimate is returned when it is hit.
    pub max_iters: usize,

    /// Absolute tolerance between successive density estimates, in kg/m³.
    pub precision: f64,

    /// Iterations between calls to [`Observer::on_iteration_tick`](super::Observer::on_iteration_tick).
    ///
    /// Zero disables the tick.
    pub tick_interval: usize,

    /// Report hitting the iteration cap as an error instead of a status.
    pub fail_on_max_iters: bool,
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            max_iters: 99,
            precision: 1e-6,
            tick_interval: 10,
            fail_on_max_iters: false,
        }
    }
}

impl CompensationConfig {
    /// Returns whether the liveness tick is due after `iter` iterations.
    pub(super) fn tick_due(&self, iter: usize) -> bool {
        self.tick_interval != 0 && iter % self.tick_interval == 0
    }
}
