//! Where each copy of the tooth unit goes
//!
//! The tooth unit is modelled once and instanced around the belt. A placement
//! is the instance's origin and the direction it faces along the belt.

use crate::belt::ArcLengthCurve;
use crate::errors::{BeltError, GeometryError, require_at_least, require_positive};
use crate::float_types::{EPSILON, FRAC_PI_2, Real, TAU};
use nalgebra::{Point2, Rotation2, Vector2};

/// One instance of the tooth unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothPlacement {
    pub index: usize,
    pub position: Point2<Real>,
    /// Direction of travel, radians CCW from +X
    pub heading: Real,
}

impl ToothPlacement {
    /// Rotation taking the unit's local +X onto the direction of travel.
    pub fn rotation(&self) -> Rotation2<Real> {
        Rotation2::new(self.heading)
    }

    /// Maps a point of the unit's local frame into the belt plane.
    pub fn transform_point(&self, local: &Point2<Real>) -> Point2<Real> {
        self.position + self.rotation() * local.coords
    }
}

/// Places `count` units `pitch` apart along `curve`, starting at its origin.
///
/// Fails with [`GeometryError::TeethOverflowPath`] when the units need more
/// length than the curve has.
pub fn place_along<C: ArcLengthCurve + ?Sized>(
    curve: &C,
    count: usize,
    pitch: Real,
) -> Result<Vec<ToothPlacement>, BeltError> {
    let count = require_at_least("count", count, 1)?;
    let pitch = require_positive("pitch", pitch)?;

    let available = curve.length();
    let required = pitch * count as Real;
    if required - available > EPSILON * available.max(1.0) {
        return Err(GeometryError::TeethOverflowPath { required, available }.into());
    }
    sample_every(curve, count, pitch)
}

/// Places `count` units evenly around the whole of `curve`.
pub fn place_evenly<C: ArcLengthCurve + ?Sized>(
    curve: &C,
    count: usize,
) -> Result<Vec<ToothPlacement>, BeltError> {
    let count = require_at_least("count", count, 1)?;
    let length = require_positive("curve length", curve.length())?;
    sample_every(curve, count, length / count as Real)
}

fn sample_every<C: ArcLengthCurve + ?Sized>(
    curve: &C,
    count: usize,
    spacing: Real,
) -> Result<Vec<ToothPlacement>, BeltError> {
    (0..count)
        .map(|index| -> Result<ToothPlacement, BeltError> {
            let sample = curve.sample(spacing * index as Real).ok_or(
                GeometryError::TeethOverflowPath {
                    required: spacing * count as Real,
                    available: curve.length(),
                },
            )?;
            Ok(ToothPlacement {
                index,
                position: sample.position,
                heading: sample.heading(),
            })
        })
        .collect()
}

/// Lays `count` units of length `pitch` on a circle whose circumference is
/// the full belt length, each one tangent to the circle.
///
/// The ring radius is `count · pitch / 2π` and unit `i` sits at angle
/// `i · 2π / count`.
pub fn place_on_ring(pitch: Real, count: usize) -> Result<Vec<ToothPlacement>, BeltError> {
    let pitch = require_positive("pitch", pitch)?;
    let count = require_at_least("count", count, 1)?;

    let radius = ring_radius(pitch, count);
    let angle_step = TAU / count as Real;
    Ok((0..count)
        .map(|index| {
            let angle = angle_step * index as Real;
            ToothPlacement {
                index,
                position: Point2::origin() + Vector2::new(angle.cos(), angle.sin()) * radius,
                heading: angle + FRAC_PI_2,
            }
        })
        .collect())
}

/// Radius of the ring [`place_on_ring`] lays units on.
pub fn ring_radius(pitch: Real, count: usize) -> Real {
    pitch * count as Real / TAU
}
