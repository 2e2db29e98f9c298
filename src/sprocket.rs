//! Toothed sprocket outlines sized to mesh with the belt

use crate::belt::BeltLayout;
use crate::errors::{BeltError, GeometryError, require_at_least, require_positive};
use crate::float_types::{Real, TAU};
use crate::pulley::Pulley;
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Tooth depth as a fraction of the belt pitch when none is given.
pub const DEFAULT_DEPTH_RATIO: Real = 0.45;

/// Fractions of one angular pitch: root land, rising flank, tip land. The
/// falling flank takes the rest.
const ROOT_FRACTION: Real = 0.5;
const FLANK_FRACTION: Real = 0.1;
const TIP_FRACTION: Real = 0.3;

/// A sprocket whose tips lie on its pulley's pitch circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprocket {
    pub center: Point2<Real>,
    pub teeth: usize,
    pub pitch_radius: Real,
    pub tooth_depth: Real,
    /// Rotation of the first tooth gap, radians CCW
    pub phase: Real,
}

impl Sprocket {
    /// Sprocket for `pulley` meshing with a belt of `tooth_pitch`: as many
    /// teeth as the pulley's advisory count, depth
    /// `DEFAULT_DEPTH_RATIO · tooth_pitch`.
    pub fn for_pulley(pulley: &Pulley, tooth_pitch: Real) -> Result<Self, BeltError> {
        let tooth_pitch = require_positive("tooth_pitch", tooth_pitch)?;
        let teeth = require_at_least("sprocket teeth", pulley.teeth_for_pitch(tooth_pitch), 3)?;
        let sprocket = Self {
            center: pulley.center,
            teeth,
            pitch_radius: pulley.radius,
            tooth_depth: DEFAULT_DEPTH_RATIO * tooth_pitch,
            phase: 0.0,
        };
        sprocket.check()?;
        Ok(sprocket)
    }

    pub fn with_tooth_depth(self, tooth_depth: Real) -> Result<Self, BeltError> {
        let tooth_depth = require_positive("tooth_depth", tooth_depth)?;
        let sprocket = Self { tooth_depth, ..self };
        sprocket.check()?;
        Ok(sprocket)
    }

    pub const fn with_phase(self, phase: Real) -> Self {
        Self { phase, ..self }
    }

    pub fn root_radius(&self) -> Real {
        self.pitch_radius - self.tooth_depth
    }

    /// Angle between neighbouring teeth.
    pub fn angular_pitch(&self) -> Real {
        TAU / self.teeth as Real
    }

    fn check(&self) -> Result<(), GeometryError> {
        if self.root_radius() <= 0.0 {
            return Err(GeometryError::DegenerateSprocket {
                pitch_radius: self.pitch_radius,
                tooth_depth: self.tooth_depth,
            });
        }
        Ok(())
    }

    /// Closed counter-clockwise outline with `segments_per_tooth` edges per
    /// tooth (at least 4).
    ///
    /// Each tooth is a root land on the root circle, a straight flank up to a
    /// tip land on the pitch circle, and a straight flank back down.
    pub fn outline(&self, segments_per_tooth: usize) -> Result<GeoPolygon<Real>, BeltError> {
        let segments_per_tooth = require_at_least("segments_per_tooth", segments_per_tooth, 4)?;
        self.check()?;

        let root_steps = (segments_per_tooth - 1) / 2;
        let tip_steps = segments_per_tooth - 2 - root_steps;
        let ang_pitch = self.angular_pitch();
        let rf = self.root_radius();
        let ra = self.pitch_radius;

        // One tooth, starting at the beginning of its root land
        let mut tooth = Vec::<(Real, Real)>::with_capacity(segments_per_tooth);
        let root_end = ROOT_FRACTION * ang_pitch;
        for i in 0..=root_steps {
            let ang = root_end * (i as Real) / (root_steps as Real);
            tooth.push((rf, ang));
        }
        let tip_start = (ROOT_FRACTION + FLANK_FRACTION) * ang_pitch;
        let tip_span = TIP_FRACTION * ang_pitch;
        for i in 0..=tip_steps {
            let ang = if tip_steps == 0 {
                tip_start + 0.5 * tip_span
            } else {
                tip_start + tip_span * (i as Real) / (tip_steps as Real)
            };
            tooth.push((ra, ang));
        }

        // Replicate the tooth around the sprocket
        let mut outline = Vec::<(Real, Real)>::with_capacity(tooth.len() * self.teeth + 1);
        for k in 0..self.teeth {
            let rot = self.phase + (k as Real) * ang_pitch;
            for &(r, ang) in &tooth {
                let a = ang + rot;
                outline.push((self.center.x + r * a.cos(), self.center.y + r * a.sin()));
            }
        }
        // Close path
        outline.push(outline[0]);

        Ok(GeoPolygon::new(LineString::from(outline), vec![]))
    }
}

/// Sprockets for both pulleys of `layout`.
pub fn sprockets_for(layout: &BeltLayout) -> Result<[Sprocket; 2], BeltError> {
    let pitch = layout.config.tooth_pitch;
    Ok([
        Sprocket::for_pulley(&layout.pulley_a, pitch)?,
        Sprocket::for_pulley(&layout.pulley_b, pitch)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    fn sprocket() -> Sprocket {
        let pulley = Pulley::new(Point2::new(10.0, 20.0), 150.0).unwrap();
        Sprocket::for_pulley(&pulley, 10.0).unwrap()
    }

    #[test]
    fn teeth_follow_pulley() {
        let s = sprocket();
        assert_eq!(s.teeth, 47);
        assert!((s.root_radius() - 70.5).abs() < 1e-12);
    }

    #[test]
    fn outline_is_closed_ccw_and_bounded() {
        let s = sprocket();
        let poly = s.outline(6).unwrap();
        let ring = poly.exterior();
        assert_eq!(ring.0.len(), 6 * 47 + 1);
        assert!(ring.is_closed());
        assert!(poly.signed_area() > 0.0);

        for c in ring.coords() {
            let r = (c.x - 10.0).hypot(c.y - 20.0);
            assert!(r >= s.root_radius() - 1e-9 && r <= s.pitch_radius + 1e-9);
        }
    }

    #[test]
    fn too_deep_teeth_are_rejected() {
        let err = sprocket().with_tooth_depth(100.0).unwrap_err();
        assert!(matches!(err, BeltError::Geometry(GeometryError::DegenerateSprocket { .. })));
    }

    #[test]
    fn too_few_teeth() {
        let pulley = Pulley::new(Point2::origin(), 5.0).unwrap();
        assert!(Sprocket::for_pulley(&pulley, 10.0).is_err());
    }

    #[test]
    fn minimal_resolution() {
        let poly = sprocket().outline(4).unwrap();
        assert_eq!(poly.exterior().0.len(), 4 * 47 + 1);
        assert!(sprocket().outline(3).is_err());
    }
}
