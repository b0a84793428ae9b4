//! # Shape Definitions
//!
//! Shapes are ordered lists of Cartesian waypoints in the arm's drawing
//! plane. They are pure data: the shape player walks them, this module never
//! moves anything.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use util::maths;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A point in the arm's drawing plane, relative to the base joint.
///
/// Serialises as a bare `[x, y]` pair so shape files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    /// Units: centimeters
    pub x_cm: f64,

    /// Units: centimeters
    pub y_cm: f64,
}

/// An ordered list of target points with a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,

    pub points_cm: Vec<Point2D>,
}

/// The on-disk format of a shapes parameter file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSet {
    pub shapes: Vec<Shape>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl From<[f64; 2]> for Point2D {
    fn from(point: [f64; 2]) -> Self {
        Self {
            x_cm: point[0],
            y_cm: point[1],
        }
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(point: Point2D) -> Self {
        [point.x_cm, point.y_cm]
    }
}

impl Shape {
    /// Build a circle approximated by `num_points` waypoints.
    ///
    /// The circle is traversed anticlockwise starting at the point of largest
    /// x. The last waypoint is one step short of the start, matching the
    /// parametrisation `phi = 2 pi i / num_points`.
    pub fn circle(name: &str, centre: Point2D, radius_cm: f64, num_points: u32) -> Self {
        let points_cm = (0..num_points)
            .map(|i| {
                let phi_rad = maths::lin_map(
                    (0.0, num_points as f64),
                    (0.0, std::f64::consts::TAU),
                    i as f64,
                );

                Point2D {
                    x_cm: centre.x_cm + radius_cm * phi_rad.cos(),
                    y_cm: centre.y_cm + radius_cm * phi_rad.sin(),
                }
            })
            .collect();

        Self {
            name: String::from(name),
            points_cm,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_circle() {
        let centre = Point2D { x_cm: 6.0, y_cm: 0.0 };
        let circle = Shape::circle("Circle", centre, 3.0, 50);

        assert_eq!(circle.points_cm.len(), 50);
        assert_eq!(circle.points_cm[0], Point2D { x_cm: 9.0, y_cm: 0.0 });

        // Every point sits on the circle
        for point in &circle.points_cm {
            let radius_cm = maths::norm(
                &[centre.x_cm, centre.y_cm],
                &[point.x_cm, point.y_cm],
            )
            .unwrap();
            assert!((radius_cm - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_point_from_pair() {
        let point = Point2D::from([5.0, 3.0]);
        assert_eq!(point, Point2D { x_cm: 5.0, y_cm: 3.0 });
    }
}
