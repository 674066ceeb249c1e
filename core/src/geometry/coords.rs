//! Coordinate geometry support
//!
//! Build triangles from vertex coordinates instead of side lengths

use crate::classify::{reject, validate, Triangle, TriangleResult, Violation};
use serde::{Deserialize, Serialize};

/// Relative tolerance for treating three vertices as collinear
const COLLINEAR_EPSILON: f64 = 1e-12;

/// 2D point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Cross product z-component of the vectors `self->q` and `self->r`
    fn cross_z(&self, q: &Point2D, r: &Point2D) -> f64 {
        (q.x - self.x) * (r.y - self.y) - (q.y - self.y) * (r.x - self.x)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Triangle<f64> {
    /// Validate and build a triangle from its three vertices
    ///
    /// Coincident vertices give a zero-length side and fail as
    /// `NonPositiveSide`. Collinear vertices fail as `InequalityViolated`,
    /// even when rounding in the side lengths would let them pass.
    pub fn from_points(p: Point2D, q: Point2D, r: Point2D) -> TriangleResult<Self> {
        let sides = [q.distance(&r), p.distance(&r), p.distance(&q)];
        let [x, y, z] = validate(sides[0], sides[1], sides[2])?;

        // |cross| is twice the area; compare against the longest side squared
        if p.cross_z(&q, &r).abs() <= COLLINEAR_EPSILON * z * z {
            return Err(reject([x, y, z], Violation::InequalityViolated));
        }

        Triangle::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{TriangleError, TriangleKind};

    #[test]
    fn test_point_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);

        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_points_right_triangle() {
        let t = Triangle::from_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 4.0),
        )
        .unwrap();

        let [x, y, z] = t.sides();
        assert!((x - 3.0).abs() < 1e-12);
        assert!((y - 4.0).abs() < 1e-12);
        assert!((z - 5.0).abs() < 1e-12);
        assert_eq!(t.kind(), TriangleKind::Scalene);
    }

    #[test]
    fn test_from_points_isosceles() {
        let t = Triangle::from_points(
            (-1.0, 0.0).into(),
            (1.0, 0.0).into(),
            (0.0, 3.0).into(),
        )
        .unwrap();

        assert_eq!(t.kind(), TriangleKind::Isosceles);
    }

    #[test]
    fn test_collinear_points_rejected() {
        // sqrt(2) + sqrt(2) vs sqrt(8) is not exact in floating point
        let err = Triangle::from_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
        )
        .unwrap_err();

        assert_eq!(err, TriangleError::InvalidTriangle(Violation::InequalityViolated));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let p = Point2D::new(1.0, 2.0);
        let err = Triangle::from_points(p, p, Point2D::new(5.0, 5.0)).unwrap_err();

        assert_eq!(err, TriangleError::InvalidTriangle(Violation::NonPositiveSide));
    }
}
