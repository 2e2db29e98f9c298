//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use beltloop::{BeltConfig, BeltLayout, float_types::Real};
use geo::{Intersects, Line, coord};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison, for values whose magnitude depends on the inputs.
pub fn rel_eq(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

/// 150 teeth of pitch 10 around a 300 and a 150 pulley.
pub fn reference_config() -> BeltConfig {
    BeltConfig::new(10.0, 150, 300.0, 150.0)
}

pub fn reference_layout() -> BeltLayout {
    BeltLayout::compute(&reference_config()).expect("reference drive is feasible")
}

/// Closed or touching segments.
pub fn segments_intersect(a0: Point2<Real>, a1: Point2<Real>, b0: Point2<Real>, b1: Point2<Real>) -> bool {
    let a = Line::new(coord! { x: a0.x, y: a0.y }, coord! { x: a1.x, y: a1.y });
    let b = Line::new(coord! { x: b0.x, y: b0.y }, coord! { x: b1.x, y: b1.y });
    a.intersects(&b)
}
