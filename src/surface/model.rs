use std::fmt;

/// Separable polynomial surface `c + Σ x_k·x^(k+1) + Σ y_k·y^(k+1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceModel {
    constant: f64,
    x_coefficients: Vec<f64>,
    y_coefficients: Vec<f64>,
}

impl SurfaceModel {
    /// `x_coefficients[i]` multiplies `x^(i+1)`; likewise for `y_coefficients`.
    pub fn new(constant: f64, x_coefficients: Vec<f64>, y_coefficients: Vec<f64>) -> Self {
        SurfaceModel {
            constant,
            x_coefficients,
            y_coefficients,
        }
    }

    /// How many x and y terms a model fitted through `samples` points carries.
    ///
    /// An even count gives x the extra slot: 4 samples -> (2, 1), 5 -> (2, 2).
    pub const fn term_split(samples: usize) -> (usize, usize) {
        if samples % 2 == 0 {
            (samples / 2, (samples / 2).saturating_sub(1))
        } else {
            (samples / 2, samples / 2)
        }
    }

    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let x_part: f64 = self
            .x_coefficients
            .iter()
            .enumerate()
            .map(|(k, c)| c * x.powi(k as i32 + 1))
            .sum();
        let y_part: f64 = self
            .y_coefficients
            .iter()
            .enumerate()
            .map(|(k, c)| c * y.powi(k as i32 + 1))
            .sum();
        self.constant + x_part + y_part
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn x_coefficients(&self) -> &[f64] {
        &self.x_coefficients
    }

    pub fn y_coefficients(&self) -> &[f64] {
        &self.y_coefficients
    }

    pub fn x_degree(&self) -> usize {
        self.x_coefficients.len()
    }

    pub fn y_degree(&self) -> usize {
        self.y_coefficients.len()
    }

    /// Total number of terms, constant included.
    pub fn term_count(&self) -> usize {
        1 + self.x_coefficients.len() + self.y_coefficients.len()
    }
}

impl fmt::Display for SurfaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constant)?;
        for (k, c) in self.x_coefficients.iter().enumerate() {
            if *c != 0.0 {
                write!(f, " + {}x^{}", c, k + 1)?;
            }
        }
        for (k, c) in self.y_coefficients.iter().enumerate() {
            if *c != 0.0 {
                write!(f, " + {}y^{}", c, k + 1)?;
            }
        }
        Ok(())
    }
}
