//! External tangents shared by two pulleys

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::pulley::Pulley;
use nalgebra::Point2;

/// One external tangent segment: a point on each pulley's circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPair {
    /// Polar angle of both tangent points about their own centers
    pub angle: Real,
    pub on_a: Point2<Real>,
    pub on_b: Point2<Real>,
}

impl TangentPair {
    pub fn length(&self) -> Real {
        (self.on_b - self.on_a).norm()
    }
}

/// Both external tangents. Seen from pulley A looking at pulley B, `upper`
/// lies on the left (CCW) side and `lower` on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPoints {
    pub upper: TangentPair,
    pub lower: TangentPair,
}

/// Computes the external tangent points of pulleys `a` and `b`.
///
/// With `φ` the direction from A's center to B's and
/// `θ = acos((R_a − R_b) / CD)`, the upper tangent touches both circles at
/// polar angle `φ + θ` and the lower one at `φ − θ`. The segments join
/// points of equal angle, so they never cross.
///
/// Fails with [`GeometryError::TangentUndefined`] when `|R_a − R_b| > CD` (one
/// circle contains the other) or the centers coincide.
pub fn tangent_points(a: &Pulley, b: &Pulley) -> Result<TangentPoints, GeometryError> {
    let axis = b.center - a.center;
    let center_distance = axis.norm();
    let undefined = || GeometryError::TangentUndefined {
        radius_a: a.radius,
        radius_b: b.radius,
        center_distance,
    };

    if center_distance <= 0.0 || (a.radius - b.radius).abs() > center_distance {
        return Err(undefined());
    }

    let phi = axis.y.atan2(axis.x);
    let theta = ((a.radius - b.radius) / center_distance).clamp(-1.0, 1.0).acos();
    tracing::debug!(phi, theta, center_distance, "tangent angles");

    let pair = |angle: Real| TangentPair {
        angle,
        on_a: a.point_at(angle),
        on_b: b.point_at(angle),
    };

    Ok(TangentPoints {
        upper: pair(phi + theta),
        lower: pair(phi - theta),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{EPSILON, FRAC_PI_2};

    #[test]
    fn equal_pulleys_have_horizontal_tangents() {
        let a = Pulley::new(Point2::origin(), 20.0).unwrap();
        let b = Pulley::new(Point2::new(50.0, 0.0), 20.0).unwrap();
        let t = tangent_points(&a, &b).unwrap();

        assert!((t.upper.angle - FRAC_PI_2).abs() < EPSILON);
        assert!((t.upper.on_a - Point2::new(0.0, 10.0)).norm() < EPSILON);
        assert!((t.upper.on_b - Point2::new(50.0, 10.0)).norm() < EPSILON);
        assert!((t.lower.on_a - Point2::new(0.0, -10.0)).norm() < EPSILON);
        assert!((t.lower.on_b - Point2::new(50.0, -10.0)).norm() < EPSILON);
        assert!((t.upper.length() - 50.0).abs() < EPSILON);
    }

    #[test]
    fn segments_touch_both_circles() {
        let a = Pulley::new(Point2::origin(), 300.0).unwrap();
        let b = Pulley::new(Point2::new(389.3, 0.0), 150.0).unwrap();
        let t = tangent_points(&a, &b).unwrap();

        for pair in [t.upper, t.lower] {
            let dir = (pair.on_b - pair.on_a).normalize();
            // radius at the tangent point is perpendicular to the segment
            assert!((pair.on_a - a.center).dot(&dir).abs() < 1e-6);
            assert!((pair.on_b - b.center).dot(&dir).abs() < 1e-6);
        }
    }

    #[test]
    fn nested_circles_have_no_tangent() {
        let a = Pulley::new(Point2::origin(), 300.0).unwrap();
        let b = Pulley::new(Point2::new(10.0, 0.0), 100.0).unwrap();
        assert!(matches!(
            tangent_points(&a, &b),
            Err(GeometryError::TangentUndefined { .. })
        ));

        let c = Pulley::new(Point2::origin(), 100.0).unwrap();
        assert!(tangent_points(&a, &c).is_err());
    }
}
