use crate::error::{HeatError, Result};
use crate::grid::Grid;
use crate::surface::SurfaceModel;

/// Projects a [`SurfaceModel`] onto a `height x width` grid.
///
/// Interior cell `[row][col]` takes `model.evaluate(col, row)`; grid indices are used
/// as coordinates directly. The outer ring is the zero boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSampler;

impl GridSampler {
    pub fn sample(model: &SurfaceModel, width: usize, height: usize) -> Result<Grid> {
        if width < 3 || height < 3 {
            return Err(HeatError::InvalidGrid {
                rows: height,
                cols: width,
                reason: "need at least 3 cells per side for a non-empty interior",
            });
        }

        let mut data = vec![0.0; width * height];
        for i in 1..height - 1 {
            let row = &mut data[i * width..(i + 1) * width];
            for (j, cell) in row.iter_mut().enumerate().take(width - 1).skip(1) {
                *cell = model.evaluate(j as f64, i as f64);
            }
        }

        log::debug!("sampled surface onto {height}x{width} grid");
        Ok(Grid::from_raw(height, width, data))
    }
}
