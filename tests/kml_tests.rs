#![cfg(feature = "kml-io")]

use geo::line_string;
use pivotrs::{LatLng, Plan, TowerSpacing};

mod support;

use crate::support::field_center;

fn demo_plan() -> Plan {
    let mut plan = Plan::new();
    let full = plan.place_full_circle(field_center()).unwrap();
    {
        let pivot = plan.get_mut(full).unwrap();
        pivot.apply_towers(4, TowerSpacing::Equal).unwrap();
        pivot.specification.flow_rate = 120.0;
        pivot.specification.notes = "North block".into();
    }
    let semi = plan.place_semi_circle(LatLng::new(31.2568, 34.8005)).unwrap();
    let pivot = plan.get_mut(semi).unwrap();
    pivot.set_radius(300.0).unwrap();
    pivot.set_angles(270.0, 90.0).unwrap();
    plan
}

#[test]
fn exports_a_document_with_styles_and_placemarks() {
    let kml = demo_plan().to_kml().unwrap();
    assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml"));
    assert!(kml.ends_with("</kml>"));
    assert!(kml.contains("<name>Center Pivot Irrigation Plan</name>"));
    for style in ["landStyle", "pivotStyle", "labelStyle", "towerStyle"] {
        assert!(
            kml.contains(&format!("<Style id=\"{style}\">")),
            "missing {style}"
        );
    }
    assert!(kml.contains("<name>Pivot 1</name>"));
    assert!(kml.contains("<name>Semi-Pivot 2</name>"));
    // shape + label for each pivot, plus one track per tower
    assert_eq!(kml.matches("<Placemark>").count(), 8);
}

#[test]
fn descriptions_carry_the_specifications() {
    let kml = demo_plan().to_kml().unwrap();
    assert!(kml.contains("Type: Full Circle<br>"));
    assert!(kml.contains("Type: Semi-Circle<br>"));
    assert!(kml.contains("Radius: 400.0 m<br>"));
    assert!(kml.contains("Radius: 300.0 m<br>"));
    assert!(kml.contains("Flow Rate: 120 m³/h<br>"));
    assert!(kml.contains("Notes: North block<br>"));
    assert!(kml.contains("Towers: 4<br>"));
    assert!(kml.contains("Tower Distances: 100.0m, 100.0m, 100.0m, 100.0m<br>"));
    // 300 m over 180°: arc length 300π ≈ 942.5 m, area 4.5π ≈ 14.14 ha
    assert!(kml.contains("Arc Length: 942.5 m<br>"));
    assert!(kml.contains("Area: 14.14 ha<br>"));
    // power was never specified, so the line is skipped
    assert!(!kml.contains("Power:"));
}

#[test]
fn labels_ride_on_the_pivot_center() {
    let mut plan = Plan::new();
    plan.place_full_circle(field_center()).unwrap();
    let kml = plan.to_kml().unwrap();
    assert!(kml.contains("<coordinates>34.791,31.25,0</coordinates>"));
}

#[test]
fn wedge_coordinates_start_and_end_at_the_center() {
    let mut plan = Plan::new();
    let id = plan.place_semi_circle(field_center()).unwrap();
    let center = plan.get(id).unwrap().center();
    let kml = plan.to_kml().unwrap();
    let center_line = format!("              {},{},0\n", center.lng, center.lat);
    assert_eq!(kml.matches(center_line.as_str()).count(), 2);
}

#[test]
fn land_boundary_appears_when_present() {
    let mut plan = demo_plan();
    plan.set_land_boundary(line_string![
        (x: 34.78, y: 31.24),
        (x: 34.81, y: 31.24),
        (x: 34.81, y: 31.26),
        (x: 34.78, y: 31.24),
    ]);
    let kml = plan.to_kml().unwrap();
    assert!(kml.contains("<name>Land Boundary</name>"));
    assert!(kml.contains("              34.78,31.24,0\n"));
    assert!(kml.contains("<styleUrl>#landStyle</styleUrl>"));
}

#[test]
fn tower_tracks_export_for_semi_circles_too() {
    let mut plan = Plan::new();
    let id = plan.place_semi_circle(field_center()).unwrap();
    plan.get_mut(id)
        .unwrap()
        .apply_towers(2, TowerSpacing::Equal)
        .unwrap();
    let kml = plan.to_kml().unwrap();
    assert!(kml.contains("<name>Tower 1</name>"));
    assert!(kml.contains("<name>Tower 2</name>"));
    assert!(kml.contains("<styleUrl>#towerStyle</styleUrl>"));
}

#[test]
fn empty_plans_have_nothing_to_export() {
    assert!(Plan::new().to_kml().is_err());
}
