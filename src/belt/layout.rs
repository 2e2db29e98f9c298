//! The full drive layout computed from a [`BeltConfig`]

use crate::belt::ArcLengthCurve;
use crate::belt::arc::arc_points;
use crate::belt::center_distance::center_distance;
use crate::belt::path::{BeltPath, PathSample, assemble_path};
use crate::belt::tangent::{TangentPoints, tangent_points};
use crate::config::BeltConfig;
use crate::errors::BeltError;
use crate::float_types::Real;
use crate::pulley::Pulley;
use nalgebra::{Point2, Vector2};
use tracing::{info, warn};

/// Everything derived from one [`BeltConfig`]. Pulley A sits at the origin,
/// pulley B on the +X axis at `center_distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct BeltLayout {
    pub config: BeltConfig,
    pub center_distance: Real,
    pub belt_length: Real,
    /// Advisory tooth count of pulley A
    pub teeth_on_a: usize,
    /// Advisory tooth count of pulley B
    pub teeth_on_b: usize,
    pub pulley_a: Pulley,
    pub pulley_b: Pulley,
    pub tangents: TangentPoints,
    /// Angle the belt wraps around pulley A
    pub wrap_angle_a: Real,
    /// Angle the belt wraps around pulley B
    pub wrap_angle_b: Real,
    /// Sampled belt loop, counter-clockwise, closed
    pub path: BeltPath,
}

impl BeltLayout {
    /// Computes the drive layout.
    ///
    /// Configuration problems surface as [`BeltError::Configuration`], an
    /// infeasible belt/pulley combination as [`BeltError::Geometry`].
    ///
    /// # Example
    /// ```
    /// use beltloop::{BeltConfig, BeltLayout};
    ///
    /// let layout = BeltLayout::compute(&BeltConfig::new(10.0, 150, 300.0, 150.0)).unwrap();
    /// assert_eq!((layout.teeth_on_a, layout.teeth_on_b), (94, 47));
    /// assert!(layout.path.is_closed());
    /// ```
    pub fn compute(config: &BeltConfig) -> Result<Self, BeltError> {
        config.validate()?;
        let belt_length = config.belt_length();
        let cd = center_distance(config.method, belt_length, config.diameter_a, config.diameter_b)?;

        let pulley_a = Pulley::new(Point2::origin(), config.diameter_a)?;
        let pulley_b = Pulley::new(Point2::new(cd, 0.0), config.diameter_b)?;
        let tangents = tangent_points(&pulley_a, &pulley_b)?;

        let arc_a = arc_points(
            pulley_a.center,
            pulley_a.radius,
            tangents.upper.on_a,
            tangents.lower.on_a,
            config.arc_segments,
        )?;
        let arc_b = arc_points(
            pulley_b.center,
            pulley_b.radius,
            tangents.lower.on_b,
            tangents.upper.on_b,
            config.arc_segments,
        )?;
        let path = assemble_path(&pulley_a, &pulley_b, &tangents, config.arc_segments)?;

        let layout = Self {
            config: config.clone(),
            center_distance: cd,
            belt_length,
            teeth_on_a: pulley_a.teeth_for_pitch(config.tooth_pitch),
            teeth_on_b: pulley_b.teeth_for_pitch(config.tooth_pitch),
            pulley_a,
            pulley_b,
            tangents,
            wrap_angle_a: arc_a.sweep(),
            wrap_angle_b: arc_b.sweep(),
            path,
        };

        if layout.pulleys_overlap() {
            warn!(
                center_distance = cd,
                radius_sum = pulley_a.radius + pulley_b.radius,
                "pulleys overlap at this center distance"
            );
        }
        info!(
            center_distance = cd,
            belt_length,
            teeth_on_a = layout.teeth_on_a,
            teeth_on_b = layout.teeth_on_b,
            path_points = layout.path.len(),
            "belt layout computed"
        );
        Ok(layout)
    }

    /// Length of one straight tangent span.
    pub fn span_length(&self) -> Real {
        self.tangents.upper.length()
    }

    /// Belt length rebuilt from the two wrapped arcs and the two spans.
    pub fn wrap_length(&self) -> Real {
        self.pulley_a.radius * self.wrap_angle_a
            + self.pulley_b.radius * self.wrap_angle_b
            + self.tangents.upper.length()
            + self.tangents.lower.length()
    }

    /// The two pulley circles intersect.
    pub fn pulleys_overlap(&self) -> bool {
        self.center_distance < self.pulley_a.radius + self.pulley_b.radius
    }
}

impl ArcLengthCurve for BeltLayout {
    fn length(&self) -> Real {
        self.wrap_length()
    }

    /// Samples the true arcs and spans, not the polyline.
    fn sample(&self, distance: Real) -> Option<PathSample> {
        let total = self.wrap_length();
        if total <= 0.0 || !distance.is_finite() {
            return None;
        }
        let mut s = distance.rem_euclid(total);
        let (a, b) = (&self.pulley_a, &self.pulley_b);
        let (upper, lower) = (&self.tangents.upper, &self.tangents.lower);

        let on_arc = |pulley: &Pulley, start_angle: Real, s: Real| {
            let angle = start_angle + s / pulley.radius;
            PathSample {
                position: pulley.point_at(angle),
                direction: Vector2::new(-angle.sin(), angle.cos()),
            }
        };
        let on_span = |from: Point2<Real>, to: Point2<Real>, s: Real| {
            let direction = (to - from).try_normalize(0.0).unwrap_or_else(Vector2::x);
            PathSample {
                position: from + direction * s,
                direction,
            }
        };

        let arc_a = a.radius * self.wrap_angle_a;
        if s < arc_a {
            return Some(on_arc(a, upper.angle, s));
        }
        s -= arc_a;

        let span = lower.length();
        if s < span {
            return Some(on_span(lower.on_a, lower.on_b, s));
        }
        s -= span;

        let arc_b = b.radius * self.wrap_angle_b;
        if s < arc_b {
            return Some(on_arc(b, lower.angle, s));
        }
        s -= arc_b;

        Some(on_span(upper.on_b, upper.on_a, s.min(upper.length())))
    }
}

/// Computes a layout from bare numbers with the exact center distance.
///
/// # Example
/// ```
/// use beltloop::compute_belt;
///
/// let layout = compute_belt(10.0, 150, 300.0, 150.0, 64).unwrap();
/// assert!((layout.center_distance - 389.324).abs() < 1e-3);
/// assert!(compute_belt(10.0, 1, 300.0, 150.0, 64).is_err());
/// ```
pub fn compute_belt(
    tooth_pitch: Real,
    tooth_count: usize,
    diameter_a: Real,
    diameter_b: Real,
    arc_segments: usize,
) -> Result<BeltLayout, BeltError> {
    let config =
        BeltConfig::new(tooth_pitch, tooth_count, diameter_a, diameter_b).with_arc_segments(arc_segments);
    BeltLayout::compute(&config)
}
