//! Mass-spring cloth simulation with Verlet integration.
//!
//! `drape` animates a deformable 2D mesh of point masses joined by distance
//! constraints. Each tick integrates every particle with position Verlet and
//! then relaxes every constraint a configurable number of passes.
//!
//! # Features
//!
//! - **Verlet particles**: implicit velocity, constant external force, fixed time step
//! - **Distance constraints**: reduced-mass weighted projection, fail-fast on degenerate edges
//! - **Pinning**: explicit `Movable`/`Pinned` mobility, pinned points never drift
//! - **Cloth grids**: `ClothGrid` builds the particle layout, edges and render triangles
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: only `alloc`, `libm` and the `log` facade
//!
//! # Example
//! ```
//! use drape::{ClothGrid, GridConfig, NoOpStepObserver, SolverConfig};
//!
//! let mut cloth = ClothGrid::<f32>::new(&GridConfig::new(8, 8)).unwrap();
//! cloth.pin_anchors();
//! cloth.step(&SolverConfig::new(), &mut NoOpStepObserver).unwrap();
//! assert_eq!(cloth.positions().len(), 64);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod mesh;
pub mod grid;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{Mobility, Particle};
pub use constraint::DistanceConstraint;
pub use mesh::ClothMesh;
pub use grid::{AnimationMode, ClothGrid, GridConfig};
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::DrapeError;
