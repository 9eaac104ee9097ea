//! An irrigation plan: every placed pivot plus the land they sit on

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::geodesy::LatLng;
use crate::pivot::{
    DEFAULT_END_ANGLE_DEG, DEFAULT_RADIUS_M, DEFAULT_START_ANGLE_DEG, Pivot, PivotId,
};
use geo::LineString;

/// Collection of pivots with an optional land parcel outline.
///
/// Pivot ids come from a monotonic counter, so an id is never reused
/// within one plan even after removals.
#[derive(Debug, Clone)]
pub struct Plan {
    pivots: Vec<Pivot>,
    next_id: PivotId,
    land_boundary: Option<LineString<Real>>,
}

impl Plan {
    pub const fn new() -> Self {
        Plan {
            pivots: Vec::new(),
            next_id: 1,
            land_boundary: None,
        }
    }

    /// Place a full-circle pivot at `center` with the default radius,
    /// labeled `Pivot {id}`. Returns the assigned id.
    pub fn place_full_circle(&mut self, center: LatLng) -> Result<PivotId, ValidationError> {
        let id = self.next_id;
        let mut pivot = Pivot::full_circle(id, center, DEFAULT_RADIUS_M)?;
        pivot.specification.label = format!("Pivot {}", id);
        self.next_id += 1;
        self.pivots.push(pivot);
        Ok(id)
    }

    /// Place a semi-circle pivot at `center` with the default radius
    /// and arc, labeled `Semi-Pivot {id}`. Returns the assigned id.
    pub fn place_semi_circle(&mut self, center: LatLng) -> Result<PivotId, ValidationError> {
        let id = self.next_id;
        let mut pivot = Pivot::semi_circle(
            id,
            center,
            DEFAULT_RADIUS_M,
            DEFAULT_START_ANGLE_DEG,
            DEFAULT_END_ANGLE_DEG,
        )?;
        pivot.specification.label = format!("Semi-Pivot {}", id);
        self.next_id += 1;
        self.pivots.push(pivot);
        Ok(id)
    }

    pub fn get(&self, id: PivotId) -> Option<&Pivot> {
        self.pivots.iter().find(|pivot| pivot.id() == id)
    }

    pub fn get_mut(&mut self, id: PivotId) -> Option<&mut Pivot> {
        self.pivots.iter_mut().find(|pivot| pivot.id() == id)
    }

    /// Remove a pivot and hand it back. Its id is retired, not
    /// recycled.
    pub fn remove(&mut self, id: PivotId) -> Result<Pivot, ValidationError> {
        let index = self
            .pivots
            .iter()
            .position(|pivot| pivot.id() == id)
            .ok_or(ValidationError::UnknownPivot(id))?;
        Ok(self.pivots.remove(index))
    }

    /// Drop every pivot. The id counter keeps counting and the land
    /// boundary stays in place.
    pub fn clear(&mut self) {
        self.pivots.clear();
    }

    /// Pivots in placement order.
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// Sum of every pivot's irrigated area in hectares.
    pub fn total_area_hectares(&self) -> Real {
        self.pivots.iter().map(Pivot::area_hectares).sum()
    }

    /// Land parcel outline, if one was provided or imported.
    pub const fn land_boundary(&self) -> Option<&LineString<Real>> {
        self.land_boundary.as_ref()
    }

    /// Replace the land parcel outline.
    pub fn set_land_boundary(&mut self, ring: LineString<Real>) {
        self.land_boundary = Some(ring);
    }

    /// Remove the land parcel outline.
    pub fn clear_land_boundary(&mut self) {
        self.land_boundary = None;
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}
