//! Configuration for the tick driver.

/// How much work a mesh tick does.
///
/// # Builder Pattern
/// ```
/// use drape::config::SolverConfig;
///
/// let config = SolverConfig::new()
///     .with_iterations(4)
///     .with_substeps(2);
/// assert_eq!(config.iterations, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Relaxation passes over every constraint per sub-step.
    /// More passes = stiffer, more accurate cloth at a higher cost per tick. Default: 2.
    pub iterations: usize,
    /// Integrate-then-relax rounds per tick. Each round advances every
    /// particle by its own fixed time step. Default: 1.
    pub substeps: usize,
}

impl SolverConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 2,
            substeps: 1,
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_substeps(mut self, substeps: usize) -> Self {
        self.substeps = substeps.max(1);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
