//! Angle arithmetic on the 0°..360° dial
//!
//! Pivot arcs are described by a start and end angle in degrees. An arc
//! always runs from start toward increasing angle, wrapping through 0°
//! when the end angle is numerically smaller than the start.

use crate::float_types::Real;

/// Normalize an angle in degrees onto `[0, 360)`.
///
/// `rem_euclid` can round up to exactly `360.0` for tiny negative
/// inputs, so that case is folded back to `0.0`.
pub fn normalize_degrees(angle: Real) -> Real {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// **Mathematical Foundation: Directed Angular Span**
///
/// Measures how far an arc travels from `start` to `end`, always in the
/// direction of increasing angle. Every angular quantity in the crate is
/// derived through this one function, so arcs that cross the 0°/360°
/// seam measure identically to arcs that do not.
///
/// ## **Span Mathematics**
/// For normalized angles s, e ∈ [0, 360):
/// ```text
/// span(s, e) = e − s           if e ≥ s
/// span(s, e) = (360 − s) + e   if e < s
/// ```
/// Examples:
/// ```text
/// span(0, 180)  = 180     plain half circle
/// span(270, 90) = 180     half circle across the seam
/// span(350, 10) = 20      narrow wedge across the seam
/// ```
///
/// The result lies in [0, 360) and is 0 only when s = e. A span of
/// exactly 360 is unreachable; "all the way around" is modelled by
/// [`crate::pivot::PivotKind::FullCircle`] rather than by a degenerate
/// arc.
///
/// Inputs are expected to be normalized already (see
/// [`normalize_degrees`]); this function does not re-normalize.
pub fn arc_span(start: Real, end: Real) -> Real {
    if end >= start {
        end - start
    } else {
        (360.0 - start) + end
    }
}
