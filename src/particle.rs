//! Verlet particles: position-based state with implicit velocity.

use crate::error::DrapeError;
use crate::float::Float;
use crate::vec::Vec2;

/// Whether a particle responds to forces and constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mobility<F: Float> {
    /// Finite mass; `inverse_mass` is always `1 / mass`.
    Movable { mass: F, inverse_mass: F },
    /// Zero inverse mass. Neither integration nor constraints move it, but
    /// the mass still weighs in on the reduced mass of its constraints.
    Pinned { mass: F },
}

impl<F: Float> Mobility<F> {
    fn movable(mass: F) -> Result<Self, DrapeError> {
        if !mass.is_positive_finite() {
            return Err(DrapeError::NonPositiveMass);
        }
        Ok(Mobility::Movable { mass, inverse_mass: F::one() / mass })
    }
}

/// A Verlet particle under a constant external force.
///
/// Velocity is never stored: it is `current - previous`, so anything that
/// moves `current` (a constraint pass) also changes the next step's velocity.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub current: Vec2<F>,
    pub previous: Vec2<F>,
    mobility: Mobility<F>,
    external_force: Vec2<F>,
    time_step: F,
}

impl<F: Float> Particle<F> {
    /// Create a particle at rest (`previous == current`).
    pub fn new(
        position: Vec2<F>,
        mass: F,
        external_force: Vec2<F>,
        time_step: F,
    ) -> Result<Self, DrapeError> {
        if !time_step.is_positive_finite() {
            return Err(DrapeError::InvalidTimeStep);
        }
        Ok(Particle {
            current: position,
            previous: position,
            mobility: Mobility::movable(mass)?,
            external_force,
            time_step,
        })
    }

    /// Advance one Verlet step:
    /// `next = 2*current - previous + external_force * dt^2 * inverse_mass`.
    ///
    /// Pinned particles return early, so their position is exactly preserved.
    pub fn integrate(&mut self) {
        let inverse_mass = match self.mobility {
            Mobility::Movable { inverse_mass, .. } => inverse_mass,
            Mobility::Pinned { .. } => return,
        };
        let gain = self.time_step * self.time_step * inverse_mass;
        let next = self.current * F::two() - self.previous + self.external_force * gain;
        self.previous = self.current;
        self.current = next;
    }

    /// Freeze the particle in place, keeping its mass. Any residual velocity
    /// is discarded.
    pub fn pin(&mut self) {
        self.mobility = Mobility::Pinned { mass: self.mass() };
        self.previous = self.current;
    }

    /// Release a pinned particle with the given mass, starting at rest.
    pub fn unpin(&mut self, mass: F) -> Result<(), DrapeError> {
        self.mobility = Mobility::movable(mass)?;
        self.previous = self.current;
        Ok(())
    }

    pub fn mobility(&self) -> Mobility<F> {
        self.mobility
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self.mobility, Mobility::Pinned { .. })
    }

    /// Mass given at construction (or the last `unpin`), pinned or not.
    pub fn mass(&self) -> F {
        match self.mobility {
            Mobility::Movable { mass, .. } | Mobility::Pinned { mass } => mass,
        }
    }

    /// Zero for pinned particles.
    pub fn inverse_mass(&self) -> F {
        match self.mobility {
            Mobility::Movable { inverse_mass, .. } => inverse_mass,
            Mobility::Pinned { .. } => F::zero(),
        }
    }

    pub fn external_force(&self) -> Vec2<F> {
        self.external_force
    }

    pub fn time_step(&self) -> F {
        self.time_step
    }

    /// Position change over the last step (`current - previous`).
    pub fn displacement(&self) -> Vec2<F> {
        self.current - self.previous
    }

    /// Implicit velocity, `displacement / dt`.
    pub fn velocity(&self) -> Vec2<F> {
        self.displacement().scale(F::one() / self.time_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(mass: f64) -> Particle<f64> {
        Particle::new(Vec2::new(1.0, 2.0), mass, Vec2::new(0.0, -9.81), 0.01).unwrap()
    }

    #[test]
    fn starts_at_rest() {
        let p = particle(1.0);
        assert_eq!(p.current, p.previous);
        assert_eq!(p.velocity(), Vec2::zero());
    }

    #[test]
    fn rejects_non_positive_mass() {
        let zero = Particle::new(Vec2::new(0.0f32, 0.0), 0.0, Vec2::zero(), 0.01);
        assert_eq!(zero.unwrap_err(), DrapeError::NonPositiveMass);
        let negative = Particle::new(Vec2::new(0.0f32, 0.0), -1.0, Vec2::zero(), 0.01);
        assert_eq!(negative.unwrap_err(), DrapeError::NonPositiveMass);
        let nan = Particle::new(Vec2::new(0.0f32, 0.0), f32::NAN, Vec2::zero(), 0.01);
        assert_eq!(nan.unwrap_err(), DrapeError::NonPositiveMass);
    }

    #[test]
    fn rejects_bad_time_step() {
        let p = Particle::new(Vec2::new(0.0f32, 0.0), 1.0, Vec2::zero(), 0.0);
        assert_eq!(p.unwrap_err(), DrapeError::InvalidTimeStep);
    }

    #[test]
    fn inverse_mass_tracks_mobility() {
        let mut p = particle(4.0);
        assert_eq!(p.inverse_mass(), 0.25);
        assert_eq!(p.mass(), 4.0);
        p.pin();
        assert_eq!(p.inverse_mass(), 0.0);
        assert_eq!(p.mass(), 4.0);
        assert_eq!(p.mobility(), Mobility::Pinned { mass: 4.0 });
        p.unpin(2.0).unwrap();
        assert_eq!(p.inverse_mass(), 0.5);
    }

    #[test]
    fn pin_discards_velocity() {
        let mut p = particle(1.0);
        p.integrate();
        p.integrate();
        assert_ne!(p.current, p.previous);
        p.pin();
        assert_eq!(p.current, p.previous);
    }

    #[test]
    fn failed_unpin_keeps_particle_pinned() {
        let mut p = particle(1.0);
        p.pin();
        assert_eq!(p.unpin(-3.0), Err(DrapeError::NonPositiveMass));
        assert!(p.is_pinned());
    }

    #[test]
    fn coasts_without_force() {
        let mut p = Particle::new(Vec2::new(0.0f64, 0.0), 1.0, Vec2::zero(), 0.1).unwrap();
        p.previous = Vec2::new(-1.0, 0.5);
        p.integrate();
        assert_eq!(p.current, Vec2::new(1.0, -0.5));
        assert_eq!(p.previous, Vec2::new(0.0, 0.0));
    }
}
