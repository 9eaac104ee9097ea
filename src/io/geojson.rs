//! GeoJSON import of land boundaries

use crate::float_types::Real;
use crate::io::IoError;
use geo::{Coord, LineString, coord};
use serde_json::Value;

/// Read the outer ring of the first polygon found in a GeoJSON
/// document. Accepts a bare geometry, a Feature, or a
/// FeatureCollection; a MultiPolygon contributes its first polygon.
pub(crate) fn parse_land_ring(contents: &str) -> Result<LineString<Real>, IoError> {
    let document: Value = serde_json::from_str(contents)?;
    let geometry = find_polygon(&document).ok_or_else(|| {
        IoError::MalformedInput("no Polygon or MultiPolygon geometry found".into())
    })?;
    let positions = outer_ring(geometry)
        .ok_or_else(|| IoError::MalformedInput("polygon has no outer ring".into()))?;

    let mut coords = Vec::with_capacity(positions.len());
    for position in positions {
        coords.push(read_position(position)?);
    }
    if coords.len() < 3 {
        return Err(IoError::MalformedInput(
            "land boundary needs at least 3 points".into(),
        ));
    }
    Ok(LineString::new(coords))
}

fn find_polygon(value: &Value) -> Option<&Value> {
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => value
            .get("features")?
            .as_array()?
            .iter()
            .find_map(find_polygon),
        Some("Feature") => find_polygon(value.get("geometry")?),
        Some("Polygon") | Some("MultiPolygon") => Some(value),
        _ => None,
    }
}

fn outer_ring(geometry: &Value) -> Option<&Vec<Value>> {
    let coordinates = geometry.get("coordinates")?;
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => coordinates.as_array()?.first()?.as_array(),
        Some("MultiPolygon") => {
            coordinates.as_array()?.first()?.as_array()?.first()?.as_array()
        },
        _ => None,
    }
}

/// GeoJSON positions are `[lng, lat]` with an optional altitude, which
/// is dropped.
#[allow(clippy::unnecessary_cast)]
fn read_position(position: &Value) -> Result<Coord<Real>, IoError> {
    let components = position
        .as_array()
        .ok_or_else(|| IoError::MalformedInput("coordinate position is not an array".into()))?;
    match (
        components.first().and_then(Value::as_f64),
        components.get(1).and_then(Value::as_f64),
    ) {
        (Some(lng), Some(lat)) => Ok(coord! { x: lng as Real, y: lat as Real }),
        _ => Err(IoError::MalformedInput(
            "coordinate position needs a numeric lng and lat".into(),
        )),
    }
}
