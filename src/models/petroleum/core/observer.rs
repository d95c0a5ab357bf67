//! Side-effect hooks invoked during a computation.
//!
//! The numeric result never depends on an observer. Hooks must not block
//! and cannot fail.

/// Receives liveness ticks and diagnostic traces from the solver.
///
/// Both methods default to no-ops.
pub trait Observer {
    /// Called periodically during iteration so a host can service a watchdog.
    fn on_iteration_tick(&self) {}

    /// Called with a human-readable diagnostic message.
    fn on_trace(&self, _message: &str) {}
}

impl<T: Observer + ?Sized> Observer for &T {
    fn on_iteration_tick(&self) {
        (**self).on_iteration_tick();
    }

    fn on_trace(&self, message: &str) {
        (**self).on_trace(message);
    }
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// An observer that forwards events to [`tracing`].
///
/// Traces are emitted at `debug` level and ticks at `trace` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_iteration_tick(&self) {
        tracing::trace!(target: "petro_vcf", "solver iteration tick");
    }

    fn on_trace(&self, message: &str) {
        tracing::debug!(target: "petro_vcf", "{message}");
    }
}
