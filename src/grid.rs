//! Rectangular cloth built from a grid of particles and structural edges.

use crate::config::SolverConfig;
use crate::error::DrapeError;
use crate::float::Float;
use crate::mesh::ClothMesh;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Layout and material of a cloth grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    /// Position of particle (0, 0).
    pub origin: Vec2<F>,
    /// Distance between neighbouring columns (x) and rows (y).
    pub spacing: Vec2<F>,
    pub particle_mass: F,
    pub time_step: F,
    pub external_force: Vec2<F>,
}

impl<F: Float> GridConfig<F> {
    /// A `cols` x `rows` sheet of about one unit square, centred horizontally,
    /// under gravity plus a light sideways breeze.
    pub fn new(cols: usize, rows: usize) -> Self {
        let particle_mass = F::from_f32(0.05);
        GridConfig {
            cols,
            rows,
            origin: Vec2::new(F::from_f32(-0.5), F::from_f32(-0.25)),
            spacing: Vec2::new(
                F::one() / F::from_usize(cols.max(1)),
                F::one() / F::from_usize(rows.max(1)),
            ),
            particle_mass,
            time_step: F::from_f32(5e-3),
            external_force: Vec2::new(F::from_f32(0.7), F::from_f32(-9.81) * particle_mass),
        }
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: Vec2<F>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_external_force(mut self, force: Vec2<F>) -> Self {
        self.external_force = force;
        self
    }
}

/// Horizontal sway of the scripted wave.
const WAVE_AMPLITUDE: f32 = 0.04;
/// Height at which the wave's `sin` factor changes sign.
const WAVE_PHASE: f32 = 0.75;
/// Wave clock advance per `update` in `AnimationMode::Wave`.
const WAVE_TIME_STEP: f32 = 0.1;

/// How `ClothGrid::update` moves the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Verlet integration plus constraint relaxation.
    #[default]
    Physics,
    /// Scripted sway, `x += 0.04 * cos(t) * sin(0.75 - y)`; ignores forces
    /// and constraints.
    Wave,
}

/// A cloth sheet: particle (col, row) has index `row * cols + col`.
///
/// Rows grow along +y, so with downward gravity the last row is the top edge.
pub struct ClothGrid<F: Float> {
    mesh: ClothMesh<F>,
    triangles: AllocVec<[usize; 3]>,
    params: AllocVec<Vec2<F>>,
    wave_time: F,
    cols: usize,
    rows: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Lay out the particles and connect structural neighbours.
    ///
    /// Edges are visited row by row: each particle links to its right
    /// neighbour, then to the one above.
    pub fn new(config: &GridConfig<F>) -> Result<Self, DrapeError> {
        let (cols, rows) = (config.cols, config.rows);
        if cols < 2 || rows < 2 {
            return Err(DrapeError::InvalidGridDimensions { cols, rows });
        }

        let mut particles = AllocVec::with_capacity(cols * rows);
        let mut params = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                params.push(Vec2::new(
                    F::from_usize(col) / F::from_usize(cols),
                    F::from_usize(row) / F::from_usize(rows),
                ));
                let offset = Vec2::new(
                    F::from_usize(col) * config.spacing.x,
                    F::from_usize(row) * config.spacing.y,
                );
                particles.push(Particle::new(
                    config.origin + offset,
                    config.particle_mass,
                    config.external_force,
                    config.time_step,
                )?);
            }
        }

        let mut edges = AllocVec::with_capacity(2 * cols * rows - cols - rows);
        for row in 0..rows {
            for col in 0..cols {
                let idx = row * cols + col;
                if col != cols - 1 {
                    edges.push([idx, idx + 1]);
                }
                if row != rows - 1 {
                    edges.push([idx, idx + cols]);
                }
            }
        }

        let mut triangles = AllocVec::with_capacity(2 * (cols - 1) * (rows - 1));
        for row in 0..(rows - 1) {
            for col in 0..(cols - 1) {
                let i0 = row * cols + col;
                let i1 = i0 + 1;
                let i2 = i0 + cols;
                let i3 = i2 + 1;
                triangles.push([i0, i1, i3]);
                triangles.push([i0, i3, i2]);
            }
        }

        let mesh = ClothMesh::from_parts(particles, &edges)?;
        log::debug!("built {}x{} cloth grid", cols, rows);
        Ok(ClothGrid { mesh, triangles, params, wave_time: F::zero(), cols, rows })
    }

    /// Particle index of (col, row), rejecting coordinates off the sheet.
    pub fn index(&self, col: usize, row: usize) -> Result<usize, DrapeError> {
        if col >= self.cols || row >= self.rows {
            return Err(DrapeError::GridCoordinateOutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn pin(&mut self, col: usize, row: usize) -> Result<(), DrapeError> {
        let idx = self.index(col, row)?;
        self.mesh.pin(idx)
    }

    pub fn unpin(&mut self, col: usize, row: usize, mass: F) -> Result<(), DrapeError> {
        let idx = self.index(col, row)?;
        self.mesh.unpin(idx, mass)
    }

    pub fn pin_row(&mut self, row: usize) -> Result<(), DrapeError> {
        for col in 0..self.cols {
            self.pin(col, row)?;
        }
        Ok(())
    }

    /// Pin the three anchor points of the classic hanging-sheet setup:
    /// the first particle, the one at `cols * (rows - 1) / 2` and the one at
    /// `rows * (cols - 1)`.
    pub fn pin_anchors(&mut self) {
        for idx in self.anchor_indices() {
            self.mesh.particle_mut(idx).pin();
        }
    }

    pub fn anchor_indices(&self) -> [usize; 3] {
        [0, self.cols * (self.rows - 1) / 2, self.rows * (self.cols - 1)]
    }

    pub fn step<O: StepObserver>(
        &mut self,
        config: &SolverConfig,
        observer: &mut O,
    ) -> Result<(), DrapeError> {
        self.mesh.tick(config, observer)
    }

    /// Advance one frame in the given mode. `Wave` moves the wave clock
    /// forward by 0.1 before applying it.
    pub fn update<O: StepObserver>(
        &mut self,
        mode: AnimationMode,
        config: &SolverConfig,
        observer: &mut O,
    ) -> Result<(), DrapeError> {
        match mode {
            AnimationMode::Physics => self.step(config, observer),
            AnimationMode::Wave => {
                self.wave_time = self.wave_time + F::from_f32(WAVE_TIME_STEP);
                self.animate(self.wave_time);
                Ok(())
            }
        }
    }

    /// Sway every free particle sideways by `0.04 * cos(time) * sin(0.75 - y)`.
    ///
    /// Pinned particles stay put. The previous position is set to the
    /// pre-sway one, so the implicit velocity follows the scripted motion.
    pub fn animate(&mut self, time: F) {
        let sway = F::from_f32(WAVE_AMPLITUDE) * time.cos();
        let phase = F::from_f32(WAVE_PHASE);
        for idx in 0..self.mesh.particle_count() {
            let p = self.mesh.particle_mut(idx);
            if p.is_pinned() {
                continue;
            }
            p.previous = p.current;
            p.current.x = p.current.x + sway * (phase - p.current.y).sin();
        }
    }

    /// Clock used by `AnimationMode::Wave`.
    pub fn wave_time(&self) -> F {
        self.wave_time
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.mesh.positions()
    }

    pub fn write_positions(&self, out: &mut [F]) -> Result<(), DrapeError> {
        self.mesh.write_positions(out)
    }

    /// # Panics
    /// If (col, row) is off the sheet.
    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        match self.index(col, row) {
            Ok(idx) => self.mesh.particle(idx).current,
            Err(err) => panic!("{}", err),
        }
    }

    /// Texture coordinates `(col / cols, row / rows)`, one per particle.
    pub fn params(&self) -> &[Vec2<F>] {
        &self.params
    }

    /// Triangle indices for filling the sheet, two per grid cell.
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Constraint endpoints, for drawing the wireframe.
    pub fn edges(&self) -> AllocVec<[usize; 2]> {
        self.mesh.constraints().iter().map(|c| c.endpoints()).collect()
    }

    pub fn mesh(&self) -> &ClothMesh<F> { &self.mesh }
    pub fn mesh_mut(&mut self) -> &mut ClothMesh<F> { &mut self.mesh }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.mesh.particle_count() }
    pub fn constraint_count(&self) -> usize { self.mesh.constraint_count() }
}
