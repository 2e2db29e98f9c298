//! The closed polyline a belt follows around two pulleys

use crate::belt::arc::arc_points;
use crate::belt::tangent::TangentPoints;
use crate::errors::BeltError;
use crate::float_types::{EPSILON, Real};
use crate::pulley::Pulley;
use geo::{Coord, Intersects, Line, LineString};
use nalgebra::{Point2, Vector2};

/// Position and direction of travel at some distance along a [`BeltPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Point2<Real>,
    /// Unit vector pointing along the path
    pub direction: Vector2<Real>,
}

impl PathSample {
    /// Direction of travel as a polar angle (radians, CCW from +X).
    pub fn heading(&self) -> Real {
        self.direction.y.atan2(self.direction.x)
    }
}

/// Ordered closed polyline: the last point repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct BeltPath {
    line: LineString<Real>,
    /// `cumulative[i]` is the path length from point 0 to point `i`
    cumulative: Vec<Real>,
}

impl BeltPath {
    /// Builds a path from points, dropping consecutive duplicates and closing
    /// the loop if the last point does not already equal the first.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2<Real>>,
    {
        let mut coords: Vec<Coord<Real>> = Vec::new();
        for p in points {
            push_distinct(&mut coords, Coord { x: p.x, y: p.y });
        }
        if let Some(&first) = coords.first() {
            if coords.len() > 1 && distance(first, coords[coords.len() - 1]) <= EPSILON {
                coords.pop();
            }
            coords.push(first);
        }

        let mut cumulative = Vec::with_capacity(coords.len());
        let mut total = 0.0;
        for (i, c) in coords.iter().enumerate() {
            if i > 0 {
                total += distance(coords[i - 1], *c);
            }
            cumulative.push(total);
        }

        Self {
            line: LineString::new(coords),
            cumulative,
        }
    }

    pub fn line_string(&self) -> &LineString<Real> {
        &self.line
    }

    pub fn into_line_string(self) -> LineString<Real> {
        self.line
    }

    /// Points in order, the closing point included.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point2<Real>> + '_ {
        self.line.0.iter().map(|c| Point2::new(c.x, c.y))
    }

    /// Number of points, the closing point included.
    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    /// Total length of the loop.
    pub fn length(&self) -> Real {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// First and last points coincide.
    pub fn is_closed(&self) -> bool {
        match (self.line.0.first(), self.line.0.last()) {
            (Some(&first), Some(&last)) => self.len() > 1 && distance(first, last) <= EPSILON,
            _ => false,
        }
    }

    /// True if any two non-adjacent segments touch or cross.
    pub fn self_intersects(&self) -> bool {
        let segments: Vec<Line<Real>> = self.line.lines().collect();
        let n = segments.len();
        for i in 0..n {
            for j in (i + 2)..n {
                // first and last segments share the closing point
                if i == 0 && j == n - 1 {
                    continue;
                }
                if segments[i].intersects(&segments[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// Samples the path at `distance` from the first point, wrapping around
    /// the loop. Returns `None` for an empty or zero-length path.
    pub fn point_at(&self, distance: Real) -> Option<PathSample> {
        let total = self.length();
        if total <= 0.0 || !distance.is_finite() {
            return None;
        }
        let s = distance.rem_euclid(total);

        // first cumulative entry strictly past `s` ends the segment holding it
        let end = self
            .cumulative
            .partition_point(|&c| c <= s)
            .clamp(1, self.cumulative.len() - 1);
        let (a, b) = (self.line.0[end - 1], self.line.0[end]);
        let span = self.cumulative[end] - self.cumulative[end - 1];
        let t = if span > 0.0 {
            (s - self.cumulative[end - 1]) / span
        } else {
            0.0
        };

        let a = Point2::new(a.x, a.y);
        let b = Point2::new(b.x, b.y);
        let delta = b - a;
        Some(PathSample {
            position: a + delta * t,
            direction: delta.try_normalize(0.0).unwrap_or_else(Vector2::x),
        })
    }
}

/// Assembles the belt loop around `a` and `b`:
/// arc on A from the upper to the lower tangent point, the lower tangent
/// segment, arc on B from the lower to the upper tangent point, the upper
/// tangent segment, closed back to the start.
pub fn assemble_path(
    a: &Pulley,
    b: &Pulley,
    tangents: &TangentPoints,
    arc_segments: usize,
) -> Result<BeltPath, BeltError> {
    let arc_a = arc_points(a.center, a.radius, tangents.upper.on_a, tangents.lower.on_a, arc_segments)?;
    let arc_b = arc_points(b.center, b.radius, tangents.lower.on_b, tangents.upper.on_b, arc_segments)?;

    let points = arc_a
        .chain(std::iter::once(tangents.lower.on_b))
        .chain(arc_b)
        .chain(std::iter::once(tangents.upper.on_a));

    Ok(BeltPath::from_points(points))
}

fn distance(a: Coord<Real>, b: Coord<Real>) -> Real {
    (a.x - b.x).hypot(a.y - b.y)
}

fn push_distinct(coords: &mut Vec<Coord<Real>>, c: Coord<Real>) {
    match coords.last() {
        Some(&last) if distance(last, c) <= EPSILON => {},
        _ => coords.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belt::tangent::tangent_points;
    use crate::float_types::PI;

    fn stadium() -> BeltPath {
        let a = Pulley::new(Point2::origin(), 20.0).unwrap();
        let b = Pulley::new(Point2::new(50.0, 0.0), 20.0).unwrap();
        let t = tangent_points(&a, &b).unwrap();
        assemble_path(&a, &b, &t, 16).unwrap()
    }

    #[test]
    fn stadium_shape() {
        let path = stadium();
        assert!(path.is_closed());
        // 17 + 17 arc points, closing point
        assert_eq!(path.len(), 35);
        assert!(!path.self_intersects());

        // polygonal arcs are slightly shorter than the true circle
        let exact = 100.0 + 20.0 * PI;
        assert!(path.length() < exact);
        assert!(path.length() > exact * 0.99);
    }

    #[test]
    fn starts_on_upper_tangent_and_runs_ccw() {
        let path = stadium();
        let first = path.points().next().unwrap();
        assert!((first - Point2::new(0.0, 10.0)).norm() < EPSILON);

        // leaving the top of pulley A towards -X
        let sample = path.point_at(0.0).unwrap();
        assert!(sample.direction.x < 0.0);
    }

    #[test]
    fn point_at_wraps() {
        let path = stadium();
        let len = path.length();
        let a = path.point_at(len * 0.25).unwrap();
        let b = path.point_at(len * 1.25).unwrap();
        let c = path.point_at(-len * 0.75).unwrap();
        assert!((a.position - b.position).norm() < 1e-9);
        assert!((a.position - c.position).norm() < 1e-9);
    }

    #[test]
    fn detects_bow_tie() {
        let path = BeltPath::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        assert!(path.is_closed());
        assert!(path.self_intersects());
    }

    #[test]
    fn duplicate_points_collapse() {
        let p = Point2::new(2.0, 2.0);
        let path = BeltPath::from_points([Point2::origin(), p, p, Point2::new(0.0, 2.0), Point2::origin()]);
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
    }
}
