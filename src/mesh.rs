//! Cloth mesh: particles, the constraints between them, and the tick driver.

use crate::config::SolverConfig;
use crate::constraint::DistanceConstraint;
use crate::error::DrapeError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns every particle and constraint of a simulation.
///
/// Constraints address particles by index, so the same particle can be
/// shared by any number of constraints.
#[derive(Clone, Debug, Default)]
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
}

impl<F: Float> ClothMesh<F> {
    pub fn new() -> Self {
        ClothMesh {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    /// Build a mesh from particles and an edge list of index pairs.
    pub fn from_parts(
        particles: AllocVec<Particle<F>>,
        edges: &[[usize; 2]],
    ) -> Result<Self, DrapeError> {
        let mut mesh = ClothMesh {
            particles,
            constraints: AllocVec::with_capacity(edges.len()),
        };
        for &[p, q] in edges {
            mesh.connect(p, q)?;
        }
        log::debug!(
            "built cloth mesh: {} particles, {} constraints",
            mesh.particles.len(),
            mesh.constraints.len()
        );
        Ok(mesh)
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Add a constraint holding particles `p` and `q` at their current distance.
    pub fn connect(&mut self, p: usize, q: usize) -> Result<usize, DrapeError> {
        let constraint = DistanceConstraint::new(p, q, &self.particles)?;
        let idx = self.constraints.len();
        self.constraints.push(constraint);
        Ok(idx)
    }

    pub fn pin(&mut self, index: usize) -> Result<(), DrapeError> {
        self.particle_checked(index)?.pin();
        Ok(())
    }

    pub fn unpin(&mut self, index: usize, mass: F) -> Result<(), DrapeError> {
        self.particle_checked(index)?.unpin(mass)
    }

    /// Advance the simulation by one frame.
    ///
    /// For each sub-step: integrate every particle, then run
    /// `config.iterations` passes over the constraints in insertion order.
    /// A degenerate constraint aborts the tick; particles already corrected
    /// in that pass keep their new positions.
    pub fn tick<O: StepObserver>(
        &mut self,
        config: &SolverConfig,
        observer: &mut O,
    ) -> Result<(), DrapeError> {
        for _sub in 0..config.substeps {
            for p in self.particles.iter_mut() {
                p.integrate();
            }
            observer.on_integrate();

            for pass in 0..config.iterations {
                for c in self.constraints.iter() {
                    if let Err(err) = c.satisfy(&mut self.particles) {
                        log::warn!("aborting tick on relaxation pass {}: {}", pass, err);
                        return Err(err);
                    }
                }
                observer.on_relaxation_pass(pass);
            }
        }

        log::trace!(
            "tick complete: {} substeps x {} passes over {} constraints",
            config.substeps,
            config.iterations,
            self.constraints.len()
        );
        observer.on_tick_complete();
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.current).collect()
    }

    /// Copy positions into an interleaved `[x0, y0, x1, y1, ..]` buffer.
    pub fn write_positions(&self, out: &mut [F]) -> Result<(), DrapeError> {
        let expected = self.particles.len() * 2;
        if out.len() != expected {
            return Err(DrapeError::BufferSizeMismatch { expected, actual: out.len() });
        }
        for (slot, p) in out.chunks_exact_mut(2).zip(self.particles.iter()) {
            slot.copy_from_slice(&p.current.to_array());
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    /// # Panics
    /// If `index` is out of bounds; see [`ClothMesh::get_particle`].
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }

    /// # Panics
    /// If `index` is out of bounds; see [`ClothMesh::get_particle_mut`].
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }

    pub fn get_particle(&self, index: usize) -> Option<&Particle<F>> { self.particles.get(index) }

    pub fn get_particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    fn particle_checked(&mut self, index: usize) -> Result<&mut Particle<F>, DrapeError> {
        let count = self.particles.len();
        self.get_particle_mut(index)
            .ok_or(DrapeError::ParticleOutOfBounds { index, count })
    }
}
