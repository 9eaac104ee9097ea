//! KML export of the whole plan, KML import of land boundaries
//!
//! KML has no circle primitive, so pivot outlines go out as sampled
//! polygons. Colors are in KML's aabbggrr order.

use crate::float_types::Real;
use crate::io::IoError;
use crate::pivot::{Pivot, PivotKind};
use crate::plan::Plan;
use core::str::FromStr;
use geo::{LineString, coord};
use nom::IResult;
use nom::bytes::complete::{tag, take_until};

/// Degrees between rim samples of an exported full circle.
const CIRCLE_STEP_DEG: Real = 10.0;
/// Degrees between rim samples of an exported arc.
const ARC_STEP_DEG: Real = 5.0;
/// Degrees between samples of a tower wheel track.
const TOWER_STEP_DEG: Real = 30.0;

const STYLES: &str = r#"    <Style id="landStyle">
      <LineStyle>
        <color>ff60ae27</color>
        <width>3</width>
      </LineStyle>
      <PolyStyle>
        <color>1a60ae27</color>
      </PolyStyle>
    </Style>
    <Style id="pivotStyle">
      <LineStyle>
        <color>ffdb9834</color>
        <width>2</width>
      </LineStyle>
      <PolyStyle>
        <color>33db9834</color>
      </PolyStyle>
    </Style>
    <Style id="labelStyle">
      <IconStyle>
        <scale>0</scale>
      </IconStyle>
      <LabelStyle>
        <scale>1.2</scale>
      </LabelStyle>
    </Style>
    <Style id="towerStyle">
      <LineStyle>
        <color>ff8d7f8c</color>
        <width>1</width>
      </LineStyle>
    </Style>
"#;

impl Plan {
    /// Render the whole plan as a KML document: shared styles, the land
    /// boundary when present, then per pivot its outline polygon, a
    /// label at the center, and the wheel track of every tower.
    ///
    /// Fails with [`IoError::NothingToExport`] when no pivots have been
    /// placed.
    pub fn to_kml(&self) -> Result<String, IoError> {
        if self.is_empty() {
            return Err(IoError::NothingToExport);
        }

        let mut kml = String::new();
        kml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        kml.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n");
        kml.push_str("  <Document>\n");
        kml.push_str("    <name>Center Pivot Irrigation Plan</name>\n");
        kml.push_str(STYLES);
        if let Some(ring) = self.land_boundary() {
            push_land_polygon(&mut kml, ring);
        }
        for pivot in self.pivots() {
            push_pivot(&mut kml, pivot);
        }
        kml.push_str("  </Document>\n");
        kml.push_str("</kml>");
        Ok(kml)
    }
}

fn push_land_polygon(kml: &mut String, ring: &LineString<Real>) {
    kml.push_str("    <Placemark>\n");
    kml.push_str("      <name>Land Boundary</name>\n");
    kml.push_str("      <styleUrl>#landStyle</styleUrl>\n");
    kml.push_str("      <Polygon>\n");
    kml.push_str("        <outerBoundaryIs>\n");
    kml.push_str("          <LinearRing>\n");
    kml.push_str("            <coordinates>\n");
    for coord in ring.coords() {
        kml.push_str(&format!("              {},{},0\n", coord.x, coord.y));
    }
    kml.push_str("            </coordinates>\n");
    kml.push_str("          </LinearRing>\n");
    kml.push_str("        </outerBoundaryIs>\n");
    kml.push_str("      </Polygon>\n");
    kml.push_str("    </Placemark>\n");
}

fn push_pivot(kml: &mut String, pivot: &Pivot) {
    kml.push_str("    <Placemark>\n");
    kml.push_str(&format!("      <name>{}</name>\n", pivot.specification.label));
    kml.push_str("      <styleUrl>#pivotStyle</styleUrl>\n");
    push_description(kml, pivot);
    push_outline_polygon(kml, pivot);
    kml.push_str("    </Placemark>\n");

    // the label rides in its own placemark so the icon can be hidden
    kml.push_str("    <Placemark>\n");
    kml.push_str(&format!("      <name>{}</name>\n", pivot.specification.label));
    kml.push_str("      <styleUrl>#labelStyle</styleUrl>\n");
    kml.push_str("      <Point>\n");
    kml.push_str(&format!(
        "        <coordinates>{},{},0</coordinates>\n",
        pivot.center().lng,
        pivot.center().lat
    ));
    kml.push_str("      </Point>\n");
    kml.push_str("    </Placemark>\n");

    push_tower_tracks(kml, pivot);
}

fn push_description(kml: &mut String, pivot: &Pivot) {
    let spec = &pivot.specification;
    kml.push_str("      <description><![CDATA[\n");
    let kind_name = match pivot.kind() {
        PivotKind::FullCircle => "Full Circle",
        PivotKind::SemiCircle { .. } => "Semi-Circle",
    };
    kml.push_str(&format!("        Type: {}<br>\n", kind_name));
    kml.push_str(&format!("        Radius: {:.1} m<br>\n", pivot.radius()));
    if let Some(arc_length) = pivot.arc_length_meters() {
        kml.push_str(&format!("        Arc Length: {:.1} m<br>\n", arc_length));
    }
    kml.push_str(&format!("        Area: {:.2} ha<br>\n", pivot.area_hectares()));
    if spec.flow_rate > 0.0 {
        kml.push_str(&format!("        Flow Rate: {} m³/h<br>\n", spec.flow_rate));
    }
    if spec.power > 0.0 {
        kml.push_str(&format!("        Power: {} kW<br>\n", spec.power));
    }
    if !spec.notes.is_empty() {
        kml.push_str(&format!("        Notes: {}<br>\n", spec.notes));
    }
    if let Some(config) = pivot.towers() {
        if !config.sectors().is_empty() {
            kml.push_str(&format!("        Towers: {}<br>\n", config.count()));
            kml.push_str("        Tower Distances: ");
            for (index, sector) in config.sectors().iter().enumerate() {
                if index > 0 {
                    kml.push_str(", ");
                }
                kml.push_str(&format!("{:.1}m", sector.spacing_m));
            }
            kml.push_str("<br>\n");
        }
    }
    kml.push_str("      ]]></description>\n");
}

fn push_outline_polygon(kml: &mut String, pivot: &Pivot) {
    let step = match pivot.kind() {
        PivotKind::FullCircle => CIRCLE_STEP_DEG,
        PivotKind::SemiCircle { .. } => ARC_STEP_DEG,
    };
    kml.push_str("      <Polygon>\n");
    kml.push_str("        <outerBoundaryIs>\n");
    kml.push_str("          <LinearRing>\n");
    kml.push_str("            <coordinates>\n");
    for point in pivot.boundary_points(step) {
        kml.push_str(&format!("              {},{},0\n", point.lng, point.lat));
    }
    kml.push_str("            </coordinates>\n");
    kml.push_str("          </LinearRing>\n");
    kml.push_str("        </outerBoundaryIs>\n");
    kml.push_str("      </Polygon>\n");
}

fn push_tower_tracks(kml: &mut String, pivot: &Pivot) {
    let Some(sectors) = pivot.tower_sectors() else {
        return;
    };
    for sector in sectors {
        kml.push_str("    <Placemark>\n");
        kml.push_str(&format!("      <name>Tower {}</name>\n", sector.number));
        kml.push_str("      <styleUrl>#towerStyle</styleUrl>\n");
        kml.push_str("      <LineString>\n");
        kml.push_str("        <coordinates>\n");
        for point in pivot.arc_points_at_radius(sector.distance_m, TOWER_STEP_DEG) {
            kml.push_str(&format!("          {},{},0\n", point.lng, point.lat));
        }
        kml.push_str("        </coordinates>\n");
        kml.push_str("      </LineString>\n");
        kml.push_str("    </Placemark>\n");
    }
}

fn coordinates_block(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_until("<coordinates>")(input)?;
    let (input, _) = tag("<coordinates>")(input)?;
    take_until("</coordinates>")(input)
}

/// Pull the first `<coordinates>` block out of a KML document and read
/// it as a land boundary ring. Entries are `lng,lat[,alt]` tuples
/// separated by whitespace.
pub(crate) fn parse_land_ring(contents: &str) -> Result<LineString<Real>, IoError> {
    let (_, block) = coordinates_block(contents)
        .map_err(|_| IoError::MalformedInput("no <coordinates> block found".into()))?;

    let mut coords = Vec::new();
    for tuple in block.split_whitespace() {
        let mut parts = tuple.split(',');
        let (lng, lat) = match (parts.next(), parts.next()) {
            (Some(lng), Some(lat)) => (lng, lat),
            _ => {
                return Err(IoError::MalformedInput(format!(
                    "coordinate tuple `{tuple}` is missing a component"
                )));
            },
        };
        coords.push(coord! { x: Real::from_str(lng)?, y: Real::from_str(lat)? });
    }
    if coords.len() < 3 {
        return Err(IoError::MalformedInput(
            "land boundary needs at least 3 points".into(),
        ));
    }
    Ok(LineString::new(coords))
}
