//! Two-dimensional heat diffusion seeded from scattered temperature samples.
//!
//! A [`SurfaceFitter`] interpolates the samples with a separable polynomial, a
//! [`GridSampler`] projects it onto a grid with a zero boundary, and a
//! [`DiffusionStepper`] advances that grid with an explicit five-point scheme.
//!
//! ```no_run
//! use heat2d::{Point, Simulation, SimulationConfig};
//!
//! let points = [
//!     Point::new(0.0, 25.0, 240.0),
//!     Point::new(25.0, 0.0, 80.0),
//!     Point::new(49.0, 49.0, 192.0),
//!     Point::new(3.0, 1.0, 240.0),
//! ];
//! let mut sim = Simulation::setup(&points, &SimulationConfig::default())?;
//! let frame = sim.step();
//! println!("t = {}: {:?}", frame.time, frame.grid.min_max());
//! # Ok::<(), heat2d::HeatError>(())
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod point;
pub mod sampler;
pub mod simulation;
pub mod stepper;
pub mod surface;

pub use config::SimulationConfig;
pub use error::{HeatError, Result};
pub use grid::{Grid, VelocityField};
pub use point::Point;
pub use sampler::GridSampler;
pub use simulation::{Frame, Simulation};
pub use stepper::{DiffusionStepper, Execution, LaplacianOperator, RightEdgeBound};
pub use surface::{SurfaceFitter, SurfaceModel};
