//! Drive configuration

use crate::errors::{ConfigurationError, require_at_least, require_positive};
use crate::float_types::Real;

/// Default number of segments each pulley arc is sampled with.
pub const DEFAULT_ARC_SEGMENTS: usize = 64;

/// How the pulley center distance is derived from the belt length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CenterDistanceMethod {
    /// Solve the open-belt length equation so the assembled path is exactly
    /// as long as the belt.
    #[default]
    Exact,
    /// Closed-form approximation; the path length differs from the belt
    /// length by a small amount.
    ClosedForm,
}

/// Inputs of a two-pulley belt drive. Lengths share one unit (millimetres in
/// the examples).
#[derive(Debug, Clone, PartialEq)]
pub struct BeltConfig {
    /// Length of one tooth unit along the belt
    pub tooth_pitch: Real,
    /// Number of tooth units on the belt
    pub tooth_count: usize,
    /// Diameter of pulley A (placed at the origin)
    pub diameter_a: Real,
    /// Diameter of pulley B
    pub diameter_b: Real,
    /// Segments per pulley arc in the belt path
    pub arc_segments: usize,
    pub method: CenterDistanceMethod,
}

impl BeltConfig {
    /// Creates a config with the default arc resolution and the exact
    /// center-distance method.
    ///
    /// # Example
    /// ```
    /// use beltloop::config::BeltConfig;
    /// let config = BeltConfig::new(10.0, 150, 300.0, 150.0);
    /// assert_eq!(config.belt_length(), 1500.0);
    /// ```
    pub const fn new(tooth_pitch: Real, tooth_count: usize, diameter_a: Real, diameter_b: Real) -> Self {
        Self {
            tooth_pitch,
            tooth_count,
            diameter_a,
            diameter_b,
            arc_segments: DEFAULT_ARC_SEGMENTS,
            method: CenterDistanceMethod::Exact,
        }
    }

    pub const fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments;
        self
    }

    pub const fn with_method(mut self, method: CenterDistanceMethod) -> Self {
        self.method = method;
        self
    }

    /// Total wrap length: pitch times tooth count.
    pub fn belt_length(&self) -> Real {
        self.tooth_pitch * self.tooth_count as Real
    }

    /// Same drive with the two pulleys exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            diameter_a: self.diameter_b,
            diameter_b: self.diameter_a,
            ..self.clone()
        }
    }

    /// Rejects non-positive, NaN or infinite lengths and zero counts.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("tooth_pitch", self.tooth_pitch)?;
        require_at_least("tooth_count", self.tooth_count, 1)?;
        require_positive("diameter_a", self.diameter_a)?;
        require_positive("diameter_b", self.diameter_b)?;
        require_at_least("arc_segments", self.arc_segments, 1)?;
        Ok(())
    }
}
