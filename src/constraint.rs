//! Distance constraints between pairs of particles.

use crate::error::DrapeError;
use crate::float::Float;
use crate::particle::Particle;

/// Keeps two particles near the distance they had when the constraint was made.
///
/// Endpoints are indices into the particle slice owned by the mesh; the
/// constraint itself never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    p: usize,
    q: usize,
    rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    /// Bind particles `p` and `q`, measuring the rest length from their
    /// current positions.
    pub fn new(p: usize, q: usize, particles: &[Particle<F>]) -> Result<Self, DrapeError> {
        let count = particles.len();
        for index in [p, q] {
            if index >= count {
                return Err(DrapeError::ParticleOutOfBounds { index, count });
            }
        }
        let rest_length = particles[p].current.distance(particles[q].current);
        if p == q || rest_length == F::zero() {
            return Err(DrapeError::DegenerateConstraint { p, q });
        }
        Ok(DistanceConstraint { p, q, rest_length })
    }

    pub fn p(&self) -> usize { self.p }
    pub fn q(&self) -> usize { self.q }
    pub fn endpoints(&self) -> [usize; 2] { [self.p, self.q] }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Current length minus rest length. Positive when stretched.
    ///
    /// # Panics
    /// If `particles` is shorter than the slice the constraint was built on.
    pub fn stretch(&self, particles: &[Particle<F>]) -> F {
        self.debug_check_bounds(particles.len());
        particles[self.p].current.distance(particles[self.q].current) - self.rest_length
    }

    /// One relaxation pass: move both endpoints toward the rest length.
    ///
    /// The correction `(q - p) * (d - rest) / d` is split with the reduced
    /// mass `mt = m_p * m_q / (m_p + m_q)`, so each endpoint moves by
    /// `mt * inverse_mass` of it. A pinned endpoint keeps its mass in `mt`
    /// but its own inverse mass is zero, so it takes none of the correction
    /// and the free endpoint moves `m_pinned / (m_p + m_q)` of it.
    ///
    /// Fails without touching either particle if the endpoints coincide.
    ///
    /// # Panics
    /// If `particles` is shorter than the slice the constraint was built on.
    pub fn satisfy(&self, particles: &mut [Particle<F>]) -> Result<(), DrapeError> {
        self.debug_check_bounds(particles.len());
        let (a, b) = (&particles[self.p], &particles[self.q]);
        if a.is_pinned() && b.is_pinned() {
            return Ok(());
        }
        let mt = reduced_mass(a.mass(), b.mass());
        let (a_inv, b_inv) = (a.inverse_mass(), b.inverse_mass());

        let delta = b.current - a.current;
        let dist = delta.length();
        if dist == F::zero() {
            return Err(DrapeError::DegenerateConstraint { p: self.p, q: self.q });
        }
        let correction = delta.scale((dist - self.rest_length) / dist);

        if !particles[self.p].is_pinned() {
            particles[self.p].current += correction.scale(mt * a_inv);
        }
        if !particles[self.q].is_pinned() {
            particles[self.q].current -= correction.scale(mt * b_inv);
        }
        Ok(())
    }

    fn debug_check_bounds(&self, count: usize) {
        debug_assert!(
            self.p < count && self.q < count,
            "constraint ({}, {}) used on a slice of {} particles",
            self.p,
            self.q,
            count,
        );
    }
}

fn reduced_mass<F: Float>(ma: F, mb: F) -> F {
    ma * mb / (ma + mb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    fn at(x: f64, y: f64, mass: f64) -> Particle<f64> {
        Particle::new(Vec2::new(x, y), mass, Vec2::zero(), 0.01).unwrap()
    }

    #[test]
    fn rest_length_is_initial_distance() {
        let particles = vec![at(0.0, 0.0, 1.0), at(3.0, 4.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        assert_eq!(c.rest_length(), 5.0);
        assert_eq!(c.stretch(&particles), 0.0);
    }

    #[test]
    fn rejects_out_of_bounds_index() {
        let particles = vec![at(0.0, 0.0, 1.0)];
        let err = DistanceConstraint::new(0, 4, &particles).unwrap_err();
        assert_eq!(err, DrapeError::ParticleOutOfBounds { index: 4, count: 1 });
    }

    #[test]
    fn rejects_self_and_coincident_endpoints() {
        let particles = vec![at(1.0, 1.0, 1.0), at(1.0, 1.0, 1.0)];
        assert_eq!(
            DistanceConstraint::new(0, 0, &particles).unwrap_err(),
            DrapeError::DegenerateConstraint { p: 0, q: 0 },
        );
        assert_eq!(
            DistanceConstraint::new(0, 1, &particles).unwrap_err(),
            DrapeError::DegenerateConstraint { p: 0, q: 1 },
        );
    }

    #[test]
    fn equal_masses_split_correction_evenly() {
        let mut particles = vec![at(0.0, 0.0, 1.0), at(2.0, 0.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        particles[1].current = Vec2::new(4.0, 0.0);
        c.satisfy(&mut particles).unwrap();
        assert_eq!(particles[0].current, Vec2::new(1.0, 0.0));
        assert_eq!(particles[1].current, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn pinned_endpoint_keeps_its_mass_share() {
        // Equal masses: the free end still moves only half the correction.
        let mut particles = vec![at(0.0, 0.0, 1.0), at(2.0, 0.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        particles[0].pin();
        particles[1].current = Vec2::new(4.0, 0.0);
        c.satisfy(&mut particles).unwrap();
        assert_eq!(particles[0].current, Vec2::new(0.0, 0.0));
        assert_eq!(particles[1].current, Vec2::new(3.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn satisfy_on_a_shorter_slice_panics() {
        let particles = vec![at(0.0, 0.0, 1.0), at(2.0, 0.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        let mut short = vec![at(0.0, 0.0, 1.0)];
        let _ = c.satisfy(&mut short);
    }

    #[test]
    fn both_pinned_is_a_no_op() {
        let mut particles = vec![at(0.0, 0.0, 1.0), at(2.0, 0.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        particles[1].current = Vec2::new(3.0, 0.0);
        particles[0].pin();
        particles[1].pin();
        c.satisfy(&mut particles).unwrap();
        assert_eq!(particles[1].current, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_fail_without_mutation() {
        let mut particles = vec![at(0.0, 0.0, 1.0), at(1.0, 0.0, 1.0)];
        let c = DistanceConstraint::new(0, 1, &particles).unwrap();
        particles[1].current = Vec2::new(0.0, 0.0);
        let err = c.satisfy(&mut particles).unwrap_err();
        assert_eq!(err, DrapeError::DegenerateConstraint { p: 0, q: 1 });
        assert_eq!(particles[0].current, Vec2::new(0.0, 0.0));
        assert_eq!(particles[1].current, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn reduced_mass_of_pair() {
        assert_eq!(reduced_mass(1.0f64, 3.0), 0.75);
        assert_eq!(reduced_mass(2.0f64, 2.0), 1.0);
    }
}
