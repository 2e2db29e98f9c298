//! Belt geometry: center distance, tangents, arcs and the closed belt loop

use crate::float_types::Real;

pub mod arc;
pub mod center_distance;
pub mod layout;
pub mod path;
pub mod tangent;

pub use arc::{ArcPoints, arc_points};
pub use center_distance::{
    center_distance, closed_form_center_distance, exact_center_distance, open_belt_length,
};
pub use layout::{BeltLayout, compute_belt};
pub use path::{BeltPath, PathSample, assemble_path};
pub use tangent::{TangentPair, TangentPoints, tangent_points};

/// A closed curve that can be walked by arc length.
pub trait ArcLengthCurve {
    /// Total length of one loop.
    fn length(&self) -> Real;

    /// Position and direction of travel at `distance` from the start, taken
    /// modulo [`length`](ArcLengthCurve::length). `None` if the curve is
    /// empty or `distance` is not finite.
    fn sample(&self, distance: Real) -> Option<PathSample>;
}

impl ArcLengthCurve for BeltPath {
    fn length(&self) -> Real {
        BeltPath::length(self)
    }

    fn sample(&self, distance: Real) -> Option<PathSample> {
        self.point_at(distance)
    }
}
