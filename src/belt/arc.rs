//! Counter-clockwise arc sampling

use crate::errors::{ConfigurationError, require_at_least, require_positive};
use crate::float_types::{Real, TAU};
use nalgebra::{Point2, Vector2};
use std::iter::FusedIterator;

/// Lazily evaluated points along a circular arc.
///
/// Holds only the arc parameters and a cursor, so cloning it restarts or
/// forks the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPoints {
    center: Point2<Real>,
    radius: Real,
    start_angle: Real,
    sweep: Real,
    segments: usize,
    front: usize,
    back: usize,
}

impl ArcPoints {
    /// Angle swept from the first to the last point, in `[0, 2π)`.
    pub const fn sweep(&self) -> Real {
        self.sweep
    }

    /// Arc length from the first to the last point.
    pub fn length(&self) -> Real {
        self.radius * self.sweep
    }

    fn point(&self, i: usize) -> Point2<Real> {
        let angle = self.start_angle + self.sweep * (i as Real) / (self.segments as Real);
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }
}

impl Iterator for ArcPoints {
    type Item = Point2<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let p = self.point(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for ArcPoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for ArcPoints {}
impl FusedIterator for ArcPoints {}

/// Samples the arc of the circle (`center`, `radius`) running counter-clockwise
/// from `start` to `end` into `segments + 1` points.
///
/// Only the polar angles of `start` and `end` matter: the emitted points lie
/// exactly on the circle. The sweep is `angle(end) − angle(start)`, plus `2π`
/// when that is negative.
///
/// # Example
/// ```
/// use beltloop::belt::arc_points;
/// use nalgebra::Point2;
///
/// let pts: Vec<_> = arc_points(Point2::origin(), 1.0, Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0), 4)
///     .unwrap()
///     .collect();
/// assert_eq!(pts.len(), 5);
/// assert!((pts[2] - Point2::new(0.0, 1.0)).norm() < 1e-12);
/// ```
pub fn arc_points(
    center: Point2<Real>,
    radius: Real,
    start: Point2<Real>,
    end: Point2<Real>,
    segments: usize,
) -> Result<ArcPoints, ConfigurationError> {
    let radius = require_positive("radius", radius)?;
    let segments = require_at_least("segments", segments, 1)?;

    let (s, e) = (start - center, end - center);
    let start_angle = s.y.atan2(s.x);
    let end_angle = e.y.atan2(e.x);
    let mut sweep = end_angle - start_angle;
    if sweep < 0.0 {
        sweep += TAU;
    }

    Ok(ArcPoints {
        center,
        radius,
        start_angle,
        sweep,
        segments,
        front: 0,
        back: segments + 1,
    })
}
