use std::str::FromStr;

use crate::error::HeatError;

/// A known temperature `z` at position `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new(x, y, z)
    }
}

/// Parses `"x,y,z"`.
impl FromStr for Point {
    type Err = HeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(HeatError::invalid_input(format!(
                "expected `x,y,z`, got `{s}`"
            )));
        }

        let mut coords = [0.0; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part.parse::<f64>().map_err(|e| {
                HeatError::invalid_input(format!("bad coordinate `{part}` in `{s}`: {e}"))
            })?;
        }

        Ok(Point::new(coords[0], coords[1], coords[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse() {
        let p: Point = "0, 25,240".parse().unwrap();
        assert_eq!(p, Point::new(0.0, 25.0, 240.0));

        let p: Point = "-1.5,2e1,3".parse().unwrap();
        assert_eq!(p, Point::new(-1.5, 20.0, 3.0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "1,2".parse::<Point>(),
            Err(HeatError::InvalidInput { .. })
        ));
        assert!(matches!(
            "1,2,3,4".parse::<Point>(),
            Err(HeatError::InvalidInput { .. })
        ));
        assert!(matches!(
            "1,hot,3".parse::<Point>(),
            Err(HeatError::InvalidInput { .. })
        ));
    }
}
