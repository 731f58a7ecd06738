//! Explicit time stepping of the heat equation on the zero-boundary grid.
//!
//! Each step computes `velocity = dt² · L · u` over the interior cells, where `L` is
//! the α²-scaled five-point Laplacian, and then commits `u += velocity`. The scheme is
//! explicit and has no stability clamp: with unit grid spacing it stays bounded only
//! while `α²·dt² <= 0.25`.

mod laplacian;
mod parallel;
mod single;

pub use laplacian::{LaplacianOperator, RightEdgeBound};

use crate::error::{HeatError, Result};
use crate::grid::{Grid, VelocityField};

/// How the Laplacian is applied inside one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Serial,
    /// Row-parallel on rayon's global pool. Results are bit-identical to `Serial`.
    Parallel,
}

/// Owns the temperature grid and advances it in time.
#[derive(Debug, Clone)]
pub struct DiffusionStepper {
    grid: Grid,
    alpha: f64,
    execution: Execution,
    right_edge: RightEdgeBound,
}

impl DiffusionStepper {
    /// `alpha` must be finite and positive, and every boundary cell of `grid` zero.
    pub fn new(grid: Grid, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(HeatError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }
        if !grid.boundary_is_zero() {
            return Err(HeatError::InvalidGrid {
                rows: grid.rows(),
                cols: grid.cols(),
                reason: "boundary cells must be zero",
            });
        }

        Ok(DiffusionStepper {
            grid,
            alpha,
            execution: Execution::default(),
            right_edge: RightEdgeBound::default(),
        })
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_right_edge(mut self, right_edge: RightEdgeBound) -> Self {
        self.right_edge = right_edge;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    pub fn right_edge(&self) -> RightEdgeBound {
        self.right_edge
    }

    /// The interior operator for the current grid shape.
    pub fn operator(&self) -> LaplacianOperator {
        LaplacianOperator::build(
            self.grid.rows(),
            self.grid.cols(),
            self.alpha,
            self.right_edge,
        )
    }

    /// Change one step of `delta_time` would apply, without applying it.
    pub fn compute_velocity(&self, delta_time: f64) -> VelocityField {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut velocity = VelocityField::zeros(rows, cols);

        if self.grid.interior_len() == 0 {
            log::trace!("{rows}x{cols} grid has no interior, nothing to diffuse");
            return velocity;
        }

        let interior: Vec<f64> = (1..rows - 1)
            .flat_map(|i| self.grid.row(i)[1..cols - 1].iter().copied())
            .collect();

        let op = self.operator();
        let mut result = match self.execution {
            Execution::Serial => op.apply(&interior),
            Execution::Parallel => op.par_apply(&interior),
        };

        let scalar = delta_time * delta_time;
        for r in result.iter_mut() {
            *r *= scalar;
        }

        velocity.scatter_interior(&result);
        velocity
    }

    /// Advances the grid by one step. Boundary cells are never written.
    pub fn advance(&mut self, delta_time: f64) {
        let velocity = self.compute_velocity(delta_time);
        self.grid.accumulate(&velocity);
        log::trace!(
            "advanced {}x{} grid by dt = {delta_time}",
            self.grid.rows(),
            self.grid.cols()
        );
    }
}
