//! Smooth initial conditions from scattered samples.
//!
//! The surface is separable: `z = c + Σ aₖ xᵏ + Σ bₖ yᵏ`, with no mixed `xᵃyᵇ`
//! terms. With one term per sample the fit is an exact interpolation.

mod fitter;
mod model;

pub use fitter::{SurfaceFitter, CONDITION_TOLERANCE};
pub use model::SurfaceModel;
