//! Hooks for watching a mesh tick progress.

/// Observer for mesh ticks.
///
/// Useful for debugging, visualization or profiling. All methods default to
/// no-ops.
pub trait StepObserver {
    /// Called after every particle has been integrated once.
    fn on_integrate(&mut self) {}

    /// Called after each full pass over the constraints.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a tick finished without error.
    fn on_tick_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
