//! Pulleys (sprocket pitch circles) in the working plane

use crate::errors::{ConfigurationError, require_positive};
use crate::float_types::{PI, Real};
use nalgebra::{Point2, Vector2};

/// A circle the belt wraps around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulley {
    pub center: Point2<Real>,
    pub radius: Real,
}

impl Pulley {
    /// Creates a pulley of the given **diameter** centered at `center`.
    pub fn new(center: Point2<Real>, diameter: Real) -> Result<Self, ConfigurationError> {
        let diameter = require_positive("diameter", diameter)?;
        Ok(Self {
            center,
            radius: 0.5 * diameter,
        })
    }

    pub fn diameter(&self) -> Real {
        2.0 * self.radius
    }

    pub fn circumference(&self) -> Real {
        PI * self.diameter()
    }

    /// Point on the circumference at polar angle `angle` (radians, CCW from +X).
    pub fn point_at(&self, angle: Real) -> Point2<Real> {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Polar angle of `point` as seen from the center, in `(-π, π]`.
    pub fn angle_of(&self, point: &Point2<Real>) -> Real {
        let v = point - self.center;
        v.y.atan2(v.x)
    }

    /// Number of belt teeth that fit on the circumference: `round(π·D / pitch)`.
    ///
    /// Advisory; it labels the pulley and sizes its sprocket outline but
    /// never feeds back into the center distance.
    pub fn teeth_for_pitch(&self, tooth_pitch: Real) -> usize {
        (self.circumference() / tooth_pitch).round() as usize
    }
}

/// Advisory tooth count for a pulley of `diameter` and a belt of `tooth_pitch`.
///
/// # Example
/// ```
/// use beltloop::pulley::teeth_on_pulley;
/// assert_eq!(teeth_on_pulley(300.0, 10.0).unwrap(), 94);
/// assert_eq!(teeth_on_pulley(150.0, 10.0).unwrap(), 47);
/// ```
pub fn teeth_on_pulley(diameter: Real, tooth_pitch: Real) -> Result<usize, ConfigurationError> {
    let pulley = Pulley::new(Point2::origin(), diameter)?;
    let tooth_pitch = require_positive("tooth_pitch", tooth_pitch)?;
    Ok(pulley.teeth_for_pitch(tooth_pitch))
}
