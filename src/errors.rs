//! Error kinds

use crate::float_types::Real;

/// The inputs describe a drive that cannot exist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (BeltTooShort) The belt cannot wrap both pulleys at these diameters
    #[error(
        "(BeltTooShort) a belt of length {belt_length} cannot wrap pulleys of diameter {diameter_a} and {diameter_b}"
    )]
    BeltTooShort {
        belt_length: Real,
        diameter_a: Real,
        diameter_b: Real,
    },
    /// (TangentUndefined) No external tangent exists for these circles
    #[error(
        "(TangentUndefined) no external tangent for radii {radius_a} and {radius_b} at center distance {center_distance}"
    )]
    TangentUndefined {
        radius_a: Real,
        radius_b: Real,
        center_distance: Real,
    },
    /// (TeethOverflowPath) The teeth need more room than the loop offers
    #[error("(TeethOverflowPath) teeth need {required} of path but the loop is {available} long")]
    TeethOverflowPath { required: Real, available: Real },
    /// (DegenerateSprocket) The root circle vanishes
    #[error(
        "(DegenerateSprocket) tooth depth {tooth_depth} leaves no root circle inside pitch radius {pitch_radius}"
    )]
    DegenerateSprocket { pitch_radius: Real, tooth_depth: Real },
    /// (NoConvergence) The center distance solver ran out of iterations
    #[error("(NoConvergence) center distance for belt length {belt_length} did not converge")]
    NoConvergence { belt_length: Real },
}

/// A required numeric input is missing or out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// (NonPositive) Value must be finite and strictly positive
    #[error("(NonPositive) `{name}` must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: Real },
    /// (TooFew) A count is below its minimum
    #[error("(TooFew) `{name}` must be at least {min}, got {value}")]
    TooFew {
        name: &'static str,
        value: usize,
        min: usize,
    },
    /// (FrameRange) Animation range is empty or reversed
    #[error("(FrameRange) frame range {start}..={end} is empty")]
    FrameRange { start: i32, end: i32 },
}

/// Everything a drive computation or scene assembly can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BeltError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Reported by a [`SceneHost`](crate::scene::SceneHost) implementation
    #[error("host rejected `{operation}`: {message}")]
    Host {
        operation: &'static str,
        message: String,
    },
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: Real) -> Result<Real, ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NonPositive { name, value })
    }
}

/// Checks that `value >= min`.
pub(crate) const fn require_at_least(
    name: &'static str,
    value: usize,
    min: usize,
) -> Result<usize, ConfigurationError> {
    if value >= min {
        Ok(value)
    } else {
        Err(ConfigurationError::TooFew { name, value, min })
    }
}
