use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::point::Point;
use crate::sampler::GridSampler;
use crate::stepper::DiffusionStepper;
use crate::surface::{SurfaceFitter, SurfaceModel};

/// Owned snapshot handed to whatever draws the field.
///
/// A `Frame` is a copy taken after a step has completed, so it can be sent to a
/// render thread while the simulation keeps stepping.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub grid: Grid,
    /// Simulated seconds since setup.
    pub time: f64,
    pub step: u64,
}

/// Fitted initial condition plus the stepper that evolves it.
#[derive(Debug, Clone)]
pub struct Simulation {
    model: SurfaceModel,
    stepper: DiffusionStepper,
    delta_time: f64,
    time: f64,
    step: u64,
}

impl Simulation {
    /// Fits a surface through `points`, samples it onto the configured grid and
    /// wraps the result in a stepper.
    pub fn setup(points: &[Point], config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let model = SurfaceFitter::fit(points)?;
        log::info!("initial surface: {model}");

        if !config.is_stable() {
            log::warn!(
                "alpha^2 * dt^2 = {} exceeds {}, the explicit step will diverge",
                config.stability_factor(),
                crate::config::STABILITY_LIMIT
            );
        }

        let grid = GridSampler::sample(&model, config.width, config.height)?;
        let stepper = DiffusionStepper::new(grid, config.alpha)?
            .with_execution(config.execution)
            .with_right_edge(config.right_edge);

        Ok(Simulation {
            model,
            stepper,
            delta_time: config.delta_time,
            time: 0.0,
            step: 0,
        })
    }

    /// Advances one step without taking a snapshot.
    pub fn advance(&mut self) {
        self.stepper.advance(self.delta_time);
        self.step += 1;
        self.time = self.step as f64 * self.delta_time;
    }

    /// Advances one step and returns the resulting frame.
    pub fn step(&mut self) -> Frame {
        self.advance();
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            grid: self.stepper.grid().clone(),
            time: self.time,
            step: self.step,
        }
    }

    pub fn model(&self) -> &SurfaceModel {
        &self.model
    }

    pub fn stepper(&self) -> &DiffusionStepper {
        &self.stepper
    }

    pub fn grid(&self) -> &Grid {
        self.stepper.grid()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}
