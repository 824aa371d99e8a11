//! Error types for cloth simulation.

use core::fmt;

/// Errors raised when building or ticking a cloth mesh.
///
/// Every variant is a precondition violation: none of them is transient,
/// so callers should treat them as bugs in the mesh they supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrapeError {
    /// Mass must be positive and finite.
    NonPositiveMass,
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// The two endpoints of a constraint coincide (or are the same particle).
    DegenerateConstraint { p: usize, q: usize },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Grid coordinate lies outside the sheet.
    GridCoordinateOutOfBounds { col: usize, row: usize, cols: usize, rows: usize },
    /// Grid dimensions must be at least 2x2.
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Output buffer does not hold exactly two scalars per particle.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrapeError::NonPositiveMass => write!(f, "mass must be positive and finite"),
            DrapeError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            DrapeError::DegenerateConstraint { p, q } => {
                write!(f, "constraint between particles {} and {} has zero length", p, q)
            }
            DrapeError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            DrapeError::GridCoordinateOutOfBounds { col, row, cols, rows } => {
                write!(f, "grid coordinate ({}, {}) outside {}x{} sheet", col, row, cols, rows)
            }
            DrapeError::InvalidGridDimensions { cols, rows } => {
                write!(f, "grid must be at least 2x2, got {}x{}", cols, rows)
            }
            DrapeError::BufferSizeMismatch { expected, actual } => {
                write!(f, "position buffer needs {} scalars, got {}", expected, actual)
            }
        }
    }
}

impl core::error::Error for DrapeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_particles() {
        let err = DrapeError::DegenerateConstraint { p: 3, q: 7 };
        assert_eq!(err.to_string(), "constraint between particles 3 and 7 has zero length");
    }

    #[test]
    fn display_reports_grid_size() {
        let err = DrapeError::InvalidGridDimensions { cols: 1, rows: 4 };
        assert_eq!(err.to_string(), "grid must be at least 2x2, got 1x4");
    }
}
