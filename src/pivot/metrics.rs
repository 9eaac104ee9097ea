//! Derived metrics: irrigated area, outer arc length, inverse sizing

use super::Pivot;
use crate::errors::ValidationError;
use crate::float_types::{HECTARE, PI, Real};

impl Pivot {
    /// Recompute the irrigated area in hectares from the current
    /// geometry.
    ///
    /// ```text
    /// full circle:  π·r² / 10000
    /// arc:          (span/360) · π·r² / 10000
    /// ```
    ///
    /// Pure in the geometry fields, so a wraparound arc and a plain arc
    /// of equal span always measure the same.
    pub fn compute_area_hectares(&self) -> Real {
        let full = PI * self.radius * self.radius / HECTARE;
        match self.arc_span_degrees() {
            None => full,
            Some(span) => (span / 360.0) * full,
        }
    }

    /// Recompute the outer arc length `r·span·π/180` in meters; `None`
    /// for full circles.
    pub fn compute_arc_length_meters(&self) -> Option<Real> {
        self.arc_span_degrees()
            .map(|span| self.radius * span * PI / 180.0)
    }

    /// Radius in meters whose footprint covers `target_hectares` with
    /// the current shape. Closed-form inverse of
    /// [`Self::compute_area_hectares`].
    pub fn radius_for_area(&self, target_hectares: Real) -> Result<Real, ValidationError> {
        if !target_hectares.is_finite() || target_hectares <= 0.0 {
            return Err(ValidationError::InvalidArea(target_hectares));
        }
        let square_meters = target_hectares * HECTARE;
        let radius = match self.arc_span_degrees() {
            None => (square_meters / PI).sqrt(),
            Some(span) => (square_meters * 360.0 / (span * PI)).sqrt(),
        };
        Ok(radius)
    }
}
