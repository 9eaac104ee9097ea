//! Validation errors

use crate::float_types::Real;
use crate::geodesy::LatLng;
use crate::pivot::PivotId;
use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    InvalidCoordinate(LatLng),
    /// (InvalidRadius) The radius is NaN or infinite
    InvalidRadius(Real),
    /// (RadiusTooSmall) The radius is below the minimum
    RadiusTooSmall { radius: Real, min: Real },
    /// (DiameterTooSmall) The diameter is below the minimum
    DiameterTooSmall { diameter: Real, min: Real },
    /// (InvalidArea) The target area is NaN, infinite, or not positive
    InvalidArea(Real),
    /// (AreaTooSmall) The target area is below the minimum
    AreaTooSmall { area: Real, min: Real },
    /// (InvalidAngle) The angle is NaN or infinite
    InvalidAngle(Real),
    /// (DegenerateArc) Start and end normalize to the same angle
    DegenerateArc { start: Real, end: Real },
    /// (NotSemiCircle) An arc operation was applied to a full circle
    NotSemiCircle,
    /// (InvalidTowerCount) Zero towers were requested
    InvalidTowerCount,
    /// (UnknownPivot) No pivot with this id exists in the plan
    UnknownPivot(PivotId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidCoordinate(center) => write!(f, "(InvalidCoordinate) The coordinate ({}) has a NaN or infinite", center),
            ValidationError::InvalidRadius(radius) => write!(f, "(InvalidRadius) The radius ({}) is NaN or infinite", radius),
            ValidationError::RadiusTooSmall { radius, min } => write!(f, "(RadiusTooSmall) The radius ({} m) is below the minimum of {} m", radius, min),
            ValidationError::DiameterTooSmall { diameter, min } => write!(f, "(DiameterTooSmall) The diameter ({} m) is below the minimum of {} m", diameter, min),
            ValidationError::InvalidArea(area) => write!(f, "(InvalidArea) The target area ({}) is NaN, infinite, or not positive", area),
            ValidationError::AreaTooSmall { area, min } => write!(f, "(AreaTooSmall) The target area ({} ha) is below the minimum of {} ha", area, min),
            ValidationError::InvalidAngle(angle) => write!(f, "(InvalidAngle) The angle ({}) is NaN or infinite", angle),
            ValidationError::DegenerateArc { start, end } => write!(f, "(DegenerateArc) Start ({}°) and end ({}°) normalize to the same angle", start, end),
            ValidationError::NotSemiCircle => write!(f, "(NotSemiCircle) An arc operation was applied to a full circle"),
            ValidationError::InvalidTowerCount => write!(f, "(InvalidTowerCount) At least one tower is required"),
            ValidationError::UnknownPivot(id) => write!(f, "(UnknownPivot) No pivot with id {} exists in the plan", id),
        }
    }
}
