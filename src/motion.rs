//! Belt travel and sprocket rotation over an animation frame range

use crate::belt::BeltLayout;
use crate::errors::ConfigurationError;
use crate::float_types::Real;

/// First frame of the default animation range.
pub const DEFAULT_FRAME_START: i32 = 1;
/// Last frame of the default animation range.
pub const DEFAULT_FRAME_END: i32 = 250;

/// Animated quantities at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub frame: i32,
    /// Distance the belt has moved along its path
    pub belt_offset: Real,
    /// Rotation of sprocket A, radians CCW
    pub rotation_a: Real,
    /// Rotation of sprocket B, radians CCW
    pub rotation_b: Real,
}

/// Linear belt motion between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveMotion {
    pub frame_start: i32,
    pub frame_end: i32,
    /// Belt travel over the whole range; `None` means one full loop
    pub travel: Option<Real>,
}

impl Default for DriveMotion {
    fn default() -> Self {
        Self {
            frame_start: DEFAULT_FRAME_START,
            frame_end: DEFAULT_FRAME_END,
            travel: None,
        }
    }
}

impl DriveMotion {
    pub fn new(frame_start: i32, frame_end: i32) -> Result<Self, ConfigurationError> {
        let motion = Self {
            frame_start,
            frame_end,
            travel: None,
        };
        motion.validate()?;
        Ok(motion)
    }

    pub const fn with_travel(mut self, travel: Real) -> Self {
        self.travel = Some(travel);
        self
    }

    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if self.frame_end <= self.frame_start {
            return Err(ConfigurationError::FrameRange {
                start: self.frame_start,
                end: self.frame_end,
            });
        }
        Ok(())
    }

    /// Belt travel over the whole range for `layout`.
    pub fn travel_for(&self, layout: &BeltLayout) -> Real {
        self.travel.unwrap_or(layout.belt_length)
    }

    /// Start and end keyframes. Sprockets turn without slip, so each one
    /// rotates by `travel / radius`; both turn CCW because the belt path runs
    /// CCW.
    pub fn keyframes(&self, layout: &BeltLayout) -> Result<[Keyframe; 2], ConfigurationError> {
        self.validate()?;
        let travel = self.travel_for(layout);
        Ok([
            Keyframe {
                frame: self.frame_start,
                belt_offset: 0.0,
                rotation_a: 0.0,
                rotation_b: 0.0,
            },
            Keyframe {
                frame: self.frame_end,
                belt_offset: travel,
                rotation_a: travel / layout.pulley_a.radius,
                rotation_b: travel / layout.pulley_b.radius,
            },
        ])
    }

    /// Linearly interpolated state at `frame`, held constant outside the range.
    pub fn sample(&self, layout: &BeltLayout, frame: Real) -> Result<Keyframe, ConfigurationError> {
        let [start, end] = self.keyframes(layout)?;
        let t = ((frame - start.frame as Real) / (end.frame - start.frame) as Real).clamp(0.0, 1.0);
        let lerp = |a: Real, b: Real| a + (b - a) * t;
        Ok(Keyframe {
            frame: frame.round() as i32,
            belt_offset: lerp(start.belt_offset, end.belt_offset),
            rotation_a: lerp(start.rotation_a, end.rotation_a),
            rotation_b: lerp(start.rotation_b, end.rotation_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BeltConfig;

    fn layout() -> BeltLayout {
        BeltLayout::compute(&BeltConfig::new(10.0, 150, 300.0, 150.0)).unwrap()
    }

    #[test]
    fn one_loop_by_default() {
        let layout = layout();
        let [start, end] = DriveMotion::default().keyframes(&layout).unwrap();
        assert_eq!((start.frame, end.frame), (1, 250));
        assert_eq!(end.belt_offset, 1500.0);
        assert!((end.rotation_a - 10.0).abs() < 1e-12);
        assert!((end.rotation_b - 20.0).abs() < 1e-12);
    }

    #[test]
    fn small_sprocket_turns_faster() {
        let layout = layout();
        let motion = DriveMotion::new(0, 100).unwrap().with_travel(300.0);
        let mid = motion.sample(&layout, 50.0).unwrap();
        assert!((mid.belt_offset - 150.0).abs() < 1e-12);
        assert!((mid.rotation_b / mid.rotation_a - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_range() {
        let layout = layout();
        let motion = DriveMotion::new(10, 20).unwrap();
        assert_eq!(motion.sample(&layout, -5.0).unwrap().belt_offset, 0.0);
        assert_eq!(motion.sample(&layout, 99.0).unwrap().belt_offset, 1500.0);
    }

    #[test]
    fn empty_range() {
        assert_eq!(
            DriveMotion::new(5, 5).unwrap_err(),
            ConfigurationError::FrameRange { start: 5, end: 5 }
        );
    }
}
