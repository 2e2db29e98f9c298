//! Pulley center distance from belt length
//!
//! For an open belt of length `L` around pulleys of radius `R1`, `R2` whose
//! centers are `C` apart, with `d = R1 − R2`:
//! ```text
//! L(C) = 2·√(C² − d²) + π(R1 + R2) + 2·d·asin(d / C)
//! ```
//! `L(C)` is strictly increasing for `C > |d|` (`dL/dC = 2√(C² − d²) / C`),
//! so the inverse is unique whenever it exists.

use crate::config::CenterDistanceMethod;
use crate::errors::{BeltError, GeometryError, require_positive};
use crate::float_types::{FRAC_PI_2, PI, Real, tolerance};
use tracing::{debug, trace};

const MAX_ITERATIONS: usize = 200;

/// Exact length of an open belt around two pulleys of radius `radius_a` and
/// `radius_b` whose centers are `center_distance` apart.
///
/// Requires `center_distance >= |radius_a − radius_b|`; shorter distances are
/// clamped to that limit, where one pulley sits inside the other and the belt
/// wraps the larger one completely.
pub fn open_belt_length(center_distance: Real, radius_a: Real, radius_b: Real) -> Real {
    let d = radius_a - radius_b;
    let c = center_distance.max(d.abs());
    let straight = (c * c - d * d).max(0.0).sqrt();
    let ratio = if c > 0.0 { (d / c).clamp(-1.0, 1.0) } else { 0.0 };
    2.0 * straight + PI * (radius_a + radius_b) + 2.0 * d * ratio.asin()
}

/// Closed-form center distance.
///
/// ```text
/// term1 = (L − (π/2)(D1 + D2)) / 4
/// term2 = √(term1² − ((D1 − D2)/2)²)
/// CD    = term1 + term2
/// ```
///
/// Fails with [`GeometryError::BeltTooShort`] when the radicand is negative or
/// `term1` is not positive (both mean the belt cannot wrap the pulleys).
///
/// # Example
/// ```
/// use beltloop::belt::closed_form_center_distance;
/// let cd = closed_form_center_distance(1500.0, 300.0, 150.0).unwrap();
/// assert!((cd - 381.839_506).abs() < 1e-5);
/// assert!(closed_form_center_distance(500.0, 300.0, 150.0).is_err());
/// ```
pub fn closed_form_center_distance(
    belt_length: Real,
    diameter_a: Real,
    diameter_b: Real,
) -> Result<Real, BeltError> {
    require_positive("belt_length", belt_length)?;
    require_positive("diameter_a", diameter_a)?;
    require_positive("diameter_b", diameter_b)?;

    let too_short = || GeometryError::BeltTooShort {
        belt_length,
        diameter_a,
        diameter_b,
    };

    let term1 = (belt_length - FRAC_PI_2 * (diameter_a + diameter_b)) / 4.0;
    let half_difference = (diameter_a - diameter_b) / 2.0;
    let radicand = term1 * term1 - half_difference * half_difference;
    debug!(term1, radicand, "closed-form center distance terms");

    if term1 <= 0.0 || radicand < 0.0 {
        return Err(too_short().into());
    }
    Ok(term1 + radicand.sqrt())
}

/// Center distance at which [`open_belt_length`] equals `belt_length`.
///
/// The input domain is the one accepted by [`closed_form_center_distance`],
/// whose result seeds a bracketed Newton iteration.
pub fn exact_center_distance(
    belt_length: Real,
    diameter_a: Real,
    diameter_b: Real,
) -> Result<Real, BeltError> {
    let seed = closed_form_center_distance(belt_length, diameter_a, diameter_b)?;
    let (radius_a, radius_b) = (0.5 * diameter_a, 0.5 * diameter_b);
    let d = (radius_a - radius_b).abs();

    // L(|d|) = 2π·max(R) < L is implied by the closed-form preconditions,
    // and L(L/2 + |d|) >= 2·(L/2) = L, so the root is bracketed.
    let mut lo = d;
    let mut hi = 0.5 * belt_length + d;
    let mut c = seed.clamp(lo, hi);
    let tol = tolerance();

    for iteration in 0..MAX_ITERATIONS {
        let residual = open_belt_length(c, radius_a, radius_b) - belt_length;
        trace!(iteration, c, residual, "center distance iteration");
        if residual.abs() <= tol * belt_length {
            debug!(seed, center_distance = c, iteration, "center distance converged");
            return Ok(c);
        }
        if residual > 0.0 {
            hi = c;
        } else {
            lo = c;
        }
        if hi - lo <= tol * hi.max(1.0) {
            return Ok(0.5 * (lo + hi));
        }

        let slope = 2.0 * (c * c - d * d).max(0.0).sqrt() / c;
        let newton = c - residual / slope;
        c = if slope > 0.0 && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };
    }

    Err(GeometryError::NoConvergence { belt_length }.into())
}

/// Dispatches on `method`.
pub fn center_distance(
    method: CenterDistanceMethod,
    belt_length: Real,
    diameter_a: Real,
    diameter_b: Real,
) -> Result<Real, BeltError> {
    match method {
        CenterDistanceMethod::Exact => exact_center_distance(belt_length, diameter_a, diameter_b),
        CenterDistanceMethod::ClosedForm => {
            closed_form_center_distance(belt_length, diameter_a, diameter_b)
        },
    }
}
