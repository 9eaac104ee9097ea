//! Boundary sampling: map-ready outlines of the irrigated footprint

use super::{Pivot, PivotKind};
use crate::angle::{arc_span, normalize_degrees};
use crate::float_types::Real;
use crate::geodesy::{LatLng, position_at_angle};

impl Pivot {
    /// Sample the outline of the irrigated footprint every
    /// `step_degrees`.
    ///
    /// Full circles yield a closed ring: the sweep runs 0°..=360°, and
    /// since 360° normalizes back to 0° the last point equals the first
    /// exactly. The center appears nowhere in a full-circle outline.
    ///
    /// Arcs yield a closed wedge: the center, the sampled rim from the
    /// start angle through the whole span (crossing the 0°/360° seam
    /// when the end angle is numerically smaller), then the center
    /// again.
    ///
    /// The rim always ends exactly on the end angle; when the step does
    /// not divide the span evenly an extra point is appended rather
    /// than letting the outline fall short.
    ///
    /// A non-positive or non-finite `step_degrees` yields an empty
    /// outline.
    pub fn boundary_points(&self, step_degrees: Real) -> Vec<LatLng> {
        if !step_degrees.is_finite() || step_degrees <= 0.0 {
            return Vec::new();
        }
        match self.kind {
            PivotKind::FullCircle => {
                sample_arc(self.center, self.radius, 0.0, 360.0, step_degrees)
            },
            PivotKind::SemiCircle { start_angle, end_angle } => {
                let span = arc_span(start_angle, end_angle);
                let arc =
                    sample_arc(self.center, self.radius, start_angle, span, step_degrees);
                let mut points = Vec::with_capacity(arc.len() + 2);
                points.push(self.center);
                points.extend(arc);
                points.push(self.center);
                points
            },
        }
    }

    /// Sample a concentric ring or arc at `radius_m`, e.g. the wheel
    /// track of a tower. Full circles yield a closed ring, arcs an open
    /// rim between the pivot's angles; neither includes the center.
    pub fn arc_points_at_radius(&self, radius_m: Real, step_degrees: Real) -> Vec<LatLng> {
        if !step_degrees.is_finite() || step_degrees <= 0.0 {
            return Vec::new();
        }
        match self.kind {
            PivotKind::FullCircle => {
                sample_arc(self.center, radius_m, 0.0, 360.0, step_degrees)
            },
            PivotKind::SemiCircle { start_angle, end_angle } => sample_arc(
                self.center,
                radius_m,
                start_angle,
                arc_span(start_angle, end_angle),
                step_degrees,
            ),
        }
    }
}

/// Walk from `start_deg` toward increasing angle in `step_deg`
/// increments for `span_deg` degrees, projecting every sample. The
/// generated angles are re-normalized, which lets a sweep cross the
/// 0°/360° seam. Expects a finite `step_deg > 0`.
fn sample_arc(
    center: LatLng,
    radius_m: Real,
    start_deg: Real,
    span_deg: Real,
    step_deg: Real,
) -> Vec<LatLng> {
    let mut points = Vec::new();
    let mut sampled = 0.0;
    let mut k = 0_usize;
    loop {
        // multiply rather than accumulate so offsets stay exact
        let offset = k as Real * step_deg;
        if offset > span_deg {
            break;
        }
        sampled = offset;
        points.push(position_at_angle(
            center,
            radius_m,
            normalize_degrees(start_deg + offset),
        ));
        k += 1;
    }
    if sampled != span_deg {
        points.push(position_at_angle(
            center,
            radius_m,
            normalize_degrees(start_deg + span_deg),
        ));
    }
    points
}
