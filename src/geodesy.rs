//! Local equirectangular geodesy around a pivot center
//!
//! Field-scale distances are tiny compared to the Earth's radius, so
//! positions are projected with a local equirectangular approximation:
//! one degree of latitude is a fixed number of meters, and a degree of
//! longitude shrinks by the cosine of the center latitude.

use crate::angle::normalize_degrees;
use crate::float_types::Real;
use nalgebra::Vector2;
use std::fmt::Display;

/// Meters per degree of latitude in the equirectangular approximation.
pub const METERS_PER_DEGREE: Real = 111_000.0;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: Real,
    pub lng: Real,
}

impl LatLng {
    pub const fn new(lat: Real, lng: Real) -> Self {
        LatLng { lat, lng }
    }

    /// Both components are finite.
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Position `radius_m` meters out from `center` along `angle_deg`.
///
/// Angles follow the trigonometric convention of the local projection:
/// 0° points along increasing longitude, 90° along increasing latitude,
/// growing counterclockwise when north is up.
pub fn position_at_angle(center: LatLng, radius_m: Real, angle_deg: Real) -> LatLng {
    let theta = angle_deg.to_radians();
    let offset = Vector2::new(radius_m * theta.cos(), radius_m * theta.sin());
    LatLng {
        lat: center.lat + offset.y / METERS_PER_DEGREE,
        lng: center.lng + offset.x / (METERS_PER_DEGREE * center.lat.to_radians().cos()),
    }
}

/// Offset of `point` from `origin` in meters, x east and y north.
pub fn local_offset(origin: LatLng, point: LatLng) -> Vector2<Real> {
    Vector2::new(
        (point.lng - origin.lng) * METERS_PER_DEGREE * origin.lat.to_radians().cos(),
        (point.lat - origin.lat) * METERS_PER_DEGREE,
    )
}

/// Straight-line distance between two positions in meters.
pub fn distance_between(a: LatLng, b: LatLng) -> Real {
    local_offset(a, b).norm()
}

/// Angle in degrees from `center` toward `point`, normalized to [0, 360).
///
/// Inverse of [`position_at_angle`]: the bearing of a sampled boundary
/// point recovers the angle it was sampled at.
pub fn bearing_between(center: LatLng, point: LatLng) -> Real {
    let offset = local_offset(center, point);
    normalize_degrees(offset.y.atan2(offset.x).to_degrees())
}
