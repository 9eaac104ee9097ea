//! Center-pivot machines: shape, validated edits, derived metrics

mod boundary;
mod metrics;
pub mod towers;

use crate::angle::{arc_span, normalize_degrees};
use crate::errors::ValidationError;
use crate::float_types::{EPSILON, Real};
use crate::geodesy::LatLng;
use core::str::FromStr;
use std::sync::OnceLock;

use self::towers::{TowerConfig, TowerSector, TowerSpacing};

/// Identifier a [`crate::plan::Plan`] assigns to a pivot; never reused
/// within one plan.
pub type PivotId = u32;

/// Default radius for newly placed pivots, in meters.
pub const DEFAULT_RADIUS_M: Real = 400.0;
/// Smallest radius a pivot may have, in meters.
pub const MIN_RADIUS_M: Real = 50.0;
/// Smallest diameter a pivot may have, in meters.
pub const MIN_DIAMETER_M: Real = 100.0;
/// Default start angle for newly placed semi-circle pivots, in degrees.
pub const DEFAULT_START_ANGLE_DEG: Real = 0.0;
/// Default end angle for newly placed semi-circle pivots, in degrees.
pub const DEFAULT_END_ANGLE_DEG: Real = 180.0;
/// Fallback minimum irrigated area in hectares when no override is set.
pub const DEFAULT_MIN_AREA_HECTARES: Real = 0.1;

/// Lazily-initialized minimum irrigated area used by [`Pivot::set_area`].
/// Defaults to [`DEFAULT_MIN_AREA_HECTARES`], but can be overridden:
///  1) **Build-time**: set env var `PIVOTRS_MIN_AREA` (e.g. `PIVOTRS_MIN_AREA=0.5 cargo build`)
///  2) **Runtime**: call [`set_min_area_hectares`] once before using the library
static MIN_AREA_CELL: OnceLock<Real> = OnceLock::new();

/// Returns the current minimum area in hectares.
/// If not set yet, it tries `PIVOTRS_MIN_AREA` (parsed as the active
/// `Real`) and falls back to the default.
pub fn min_area_hectares() -> Real {
    *MIN_AREA_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("PIVOTRS_MIN_AREA") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_MIN_AREA_HECTARES
    })
}

/// Set the minimum area programmatically once (subsequent calls are ignored).
/// Call near program start: `pivotrs::pivot::set_min_area_hectares(0.5);`
pub fn set_min_area_hectares(value: Real) {
    let _ = MIN_AREA_CELL.set(value.max(Real::EPSILON));
}

/// Shape of the irrigated footprint.
///
/// Arc angles are stored normalized to `[0, 360)`. An arc whose end is
/// numerically smaller than its start wraps through 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotKind {
    FullCircle,
    SemiCircle { start_angle: Real, end_angle: Real },
}

/// Operator-entered metadata carried along with a pivot. The geometry
/// code never interprets these fields; they only flow into exports.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Specification {
    pub label: String,
    /// Water flow in m³/h; 0 means unspecified.
    pub flow_rate: Real,
    /// Drive power in kW; 0 means unspecified.
    pub power: Real,
    pub notes: String,
}

/// A single center-pivot irrigation machine.
///
/// Geometry fields are private and only change through the validating
/// setters, which refresh the derived area, arc length, and tower
/// sectors before returning. A setter that fails leaves the pivot
/// untouched. [`Specification`] is opaque operator data and stays
/// public.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    id: PivotId,
    kind: PivotKind,
    center: LatLng,
    radius: Real,
    area_hectares: Real,
    arc_length_meters: Option<Real>,
    towers: Option<TowerConfig>,
    pub specification: Specification,
}

impl Pivot {
    /// Full-circle pivot sweeping the whole dial.
    pub fn full_circle(
        id: PivotId,
        center: LatLng,
        radius: Real,
    ) -> Result<Self, ValidationError> {
        validate_center(center)?;
        validate_radius(radius)?;
        let mut pivot = Pivot {
            id,
            kind: PivotKind::FullCircle,
            center,
            radius,
            area_hectares: 0.0,
            arc_length_meters: None,
            towers: None,
            specification: Specification::default(),
        };
        pivot.recompute();
        Ok(pivot)
    }

    /// Semi-circle pivot sweeping from `start_angle` toward increasing
    /// angle until `end_angle`, in degrees. Angles are normalized onto
    /// `[0, 360)`; the arc may wrap through 0°.
    pub fn semi_circle(
        id: PivotId,
        center: LatLng,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
    ) -> Result<Self, ValidationError> {
        validate_center(center)?;
        validate_radius(radius)?;
        let (start_angle, end_angle) = validate_angles(start_angle, end_angle)?;
        let mut pivot = Pivot {
            id,
            kind: PivotKind::SemiCircle { start_angle, end_angle },
            center,
            radius,
            area_hectares: 0.0,
            arc_length_meters: None,
            towers: None,
            specification: Specification::default(),
        };
        pivot.recompute();
        Ok(pivot)
    }

    pub const fn id(&self) -> PivotId {
        self.id
    }

    pub const fn kind(&self) -> PivotKind {
        self.kind
    }

    pub const fn center(&self) -> LatLng {
        self.center
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    /// Irrigated area in hectares, kept current by the setters.
    pub const fn area_hectares(&self) -> Real {
        self.area_hectares
    }

    /// Outer arc length in meters; `None` for full circles.
    pub const fn arc_length_meters(&self) -> Option<Real> {
        self.arc_length_meters
    }

    /// Start and end angles in degrees; `None` for full circles.
    pub const fn angles(&self) -> Option<(Real, Real)> {
        match self.kind {
            PivotKind::FullCircle => None,
            PivotKind::SemiCircle { start_angle, end_angle } => {
                Some((start_angle, end_angle))
            },
        }
    }

    /// Angular span in degrees; `None` for full circles.
    pub fn arc_span_degrees(&self) -> Option<Real> {
        self.angles().map(|(start, end)| arc_span(start, end))
    }

    pub const fn towers(&self) -> Option<&TowerConfig> {
        self.towers.as_ref()
    }

    /// Tower sectors if towers have been applied.
    pub fn tower_sectors(&self) -> Option<&[TowerSector]> {
        self.towers.as_ref().map(|config| config.sectors())
    }

    /// Set the outer radius in meters.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ValidationError> {
        validate_radius(radius)?;
        self.radius = radius;
        self.recompute();
        Ok(())
    }

    /// Set the radius, flooring the request at [`MIN_RADIUS_M`] instead
    /// of rejecting it. Non-finite requests floor to the minimum too.
    /// Suits interactive resizing, where dragging inward past the
    /// minimum should stick at the minimum rather than error out.
    pub fn set_radius_clamped(&mut self, radius: Real) {
        self.radius = if radius.is_finite() {
            radius.max(MIN_RADIUS_M)
        } else {
            MIN_RADIUS_M
        };
        self.recompute();
    }

    /// Set the radius via a diameter in meters.
    pub fn set_diameter(&mut self, diameter: Real) -> Result<(), ValidationError> {
        if diameter.is_finite() && diameter < MIN_DIAMETER_M {
            return Err(ValidationError::DiameterTooSmall {
                diameter,
                min: MIN_DIAMETER_M,
            });
        }
        self.set_radius(diameter / 2.0)
    }

    /// Drive the radius from a target irrigated area in hectares.
    ///
    /// Solves [`Self::radius_for_area`] for the current shape, so a
    /// subsequent [`Self::area_hectares`] read returns the target up to
    /// rounding. Targets below [`min_area_hectares`] are rejected. The
    /// solved radius is applied as-is, even when it lands below
    /// [`MIN_RADIUS_M`].
    pub fn set_area(&mut self, target_hectares: Real) -> Result<(), ValidationError> {
        let min = min_area_hectares();
        if !target_hectares.is_finite() {
            return Err(ValidationError::InvalidArea(target_hectares));
        }
        if target_hectares < min {
            return Err(ValidationError::AreaTooSmall { area: target_hectares, min });
        }
        self.radius = self.radius_for_area(target_hectares)?;
        self.recompute();
        Ok(())
    }

    /// Re-aim a semi-circle's arc.
    pub fn set_angles(&mut self, start: Real, end: Real) -> Result<(), ValidationError> {
        match self.kind {
            PivotKind::FullCircle => Err(ValidationError::NotSemiCircle),
            PivotKind::SemiCircle { .. } => {
                let (start_angle, end_angle) = validate_angles(start, end)?;
                self.kind = PivotKind::SemiCircle { start_angle, end_angle };
                self.recompute();
                Ok(())
            },
        }
    }

    /// Move the pivot without touching its shape.
    pub fn set_center(&mut self, center: LatLng) -> Result<(), ValidationError> {
        validate_center(center)?;
        self.center = center;
        self.recompute();
        Ok(())
    }

    /// Attach `count` towers spaced per `spacing`, replacing any
    /// previous configuration. Returns the computed sectors.
    pub fn apply_towers(
        &mut self,
        count: usize,
        spacing: TowerSpacing,
    ) -> Result<&[TowerSector], ValidationError> {
        if count == 0 {
            return Err(ValidationError::InvalidTowerCount);
        }
        self.towers = Some(TowerConfig::new(count, spacing, self.radius));
        Ok(self.tower_sectors().unwrap_or(&[]))
    }

    /// Detach all towers.
    pub fn remove_towers(&mut self) {
        self.towers = None;
    }

    /// Refresh every derived field from the current geometry.
    fn recompute(&mut self) {
        self.area_hectares = self.compute_area_hectares();
        self.arc_length_meters = self.compute_arc_length_meters();
        let radius = self.radius;
        if let Some(config) = self.towers.as_mut() {
            config.refresh(radius);
        }
    }
}

fn validate_center(center: LatLng) -> Result<(), ValidationError> {
    if center.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoordinate(center))
    }
}

fn validate_radius(radius: Real) -> Result<(), ValidationError> {
    if !radius.is_finite() {
        return Err(ValidationError::InvalidRadius(radius));
    }
    if radius < MIN_RADIUS_M {
        return Err(ValidationError::RadiusTooSmall { radius, min: MIN_RADIUS_M });
    }
    Ok(())
}

fn validate_angles(start: Real, end: Real) -> Result<(Real, Real), ValidationError> {
    for angle in [start, end] {
        if !angle.is_finite() {
            return Err(ValidationError::InvalidAngle(angle));
        }
    }
    let start = normalize_degrees(start);
    let end = normalize_degrees(end);
    if arc_span(start, end) <= EPSILON {
        return Err(ValidationError::DegenerateArc { start, end });
    }
    Ok((start, end))
}
