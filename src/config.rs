use crate::error::{HeatError, Result};
use crate::stepper::{Execution, RightEdgeBound};

/// Thermal diffusivity. Far above any real material so the field visibly evolves.
pub const ALPHA: f64 = 5.0;
/// Simulated seconds per step.
pub const DT: f64 = 0.1;
/// Grid width (cells along x).
pub const MESH_X: usize = 50;
/// Grid height (cells along y).
pub const MESH_Y: usize = 50;
/// Wall-clock seconds between rendered frames.
pub const FRAME_INTERVAL: f64 = 0.05;

/// Largest `α²·dt²` for which the explicit step stays bounded on a unit grid.
pub const STABILITY_LIMIT: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub alpha: f64,
    pub delta_time: f64,
    pub width: usize,
    pub height: usize,
    /// Only read by render loops that pace frames in real time.
    pub frame_interval: f64,
    pub execution: Execution,
    pub right_edge: RightEdgeBound,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            alpha: ALPHA,
            delta_time: DT,
            width: MESH_X,
            height: MESH_Y,
            frame_interval: FRAME_INTERVAL,
            execution: Execution::Serial,
            right_edge: RightEdgeBound::RowCount,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(HeatError::InvalidParameter {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.delta_time.is_finite() || self.delta_time <= 0.0 {
            return Err(HeatError::InvalidParameter {
                name: "delta_time",
                value: self.delta_time,
            });
        }
        if !self.frame_interval.is_finite() || self.frame_interval < 0.0 {
            return Err(HeatError::InvalidParameter {
                name: "frame_interval",
                value: self.frame_interval,
            });
        }
        if self.width < 3 || self.height < 3 {
            return Err(HeatError::InvalidGrid {
                rows: self.height,
                cols: self.width,
                reason: "need at least 3 cells per side for a non-empty interior",
            });
        }
        Ok(())
    }

    /// Coefficient `α²·dt²` multiplying each neighbour in the update.
    pub fn stability_factor(&self) -> f64 {
        self.alpha * self.alpha * self.delta_time * self.delta_time
    }

    pub fn is_stable(&self) -> bool {
        self.stability_factor() <= STABILITY_LIMIT
    }
}
