use crate::errors::AirfoilError;
use ncollide2d::na::{Point2, Point3};
use serde::Serialize;
use std::str::FromStr;

/// The coordinate axis a planar section is normal to. Embedding a 2D curve
/// on an axis holds that coordinate at zero and carries the curve values on
/// the remaining two, keeping their (x, y) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(AirfoilError::InvalidAxis(format!(
                "expected X, Y, or Z, got '{}'",
                s
            ))),
        }
    }
}

/// Lifts a planar contour into 3D space on the plane normal to the given
/// axis. Point order and count are preserved exactly.
pub fn embed_contour(points: &[Point2<f64>], normal: Axis) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| match normal {
            Axis::X => Point3::new(0.0, p.x, p.y),
            Axis::Y => Point3::new(p.x, 0.0, p.y),
            Axis::Z => Point3::new(p.x, p.y, 0.0),
        })
        .collect()
}

/// Rejects point sets that would be useless downstream: any non-finite
/// coordinate, or every point identical.
pub fn validate_points(points: &[Point3<f64>]) -> Result<(), AirfoilError> {
    if points.is_empty() {
        return Err(AirfoilError::DegenerateGeometry(
            "no points were generated".to_string(),
        ));
    }

    for p in points.iter() {
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(AirfoilError::DegenerateGeometry(
                "coordinates contain NaN or infinite values".to_string(),
            ));
        }
    }

    let first = points[0];
    if points.iter().all(|p| p == &first) {
        return Err(AirfoilError::DegenerateGeometry(
            "all output points are identical".to_string(),
        ));
    }

    Ok(())
}
