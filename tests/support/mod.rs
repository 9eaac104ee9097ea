//! Test support library
//! Provides various helper functions & utilities for tests.

use pivotrs::{LatLng, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison for quantities whose magnitude varies widely.
pub fn approx_eq_rel(a: Real, b: Real, rel: Real) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() < rel * scale
}

/// Field center shared by most tests.
pub fn field_center() -> LatLng {
    LatLng::new(31.25, 34.791)
}
