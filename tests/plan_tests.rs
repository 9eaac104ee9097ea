use geo::line_string;
use pivotrs::{
    LatLng, PivotKind, Plan,
    errors::ValidationError,
    float_types::{EPSILON, PI, Real},
    pivot::DEFAULT_RADIUS_M,
};

mod support;

use crate::support::{approx_eq, field_center};

#[test]
fn placement_assigns_sequential_ids_and_labels() {
    let mut plan = Plan::new();
    let first = plan.place_full_circle(field_center()).unwrap();
    let second = plan.place_semi_circle(field_center()).unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(plan.get(first).unwrap().specification.label, "Pivot 1");
    assert_eq!(plan.get(second).unwrap().specification.label, "Semi-Pivot 2");
}

#[test]
fn placed_pivots_start_with_defaults() {
    let mut plan = Plan::new();
    let id = plan.place_semi_circle(field_center()).unwrap();
    let pivot = plan.get(id).unwrap();
    assert_eq!(pivot.radius(), DEFAULT_RADIUS_M);
    assert_eq!(pivot.angles(), Some((0.0, 180.0)));
    assert!(matches!(pivot.kind(), PivotKind::SemiCircle { .. }));
}

#[test]
fn ids_are_never_reused() {
    let mut plan = Plan::new();
    let first = plan.place_full_circle(field_center()).unwrap();
    let removed = plan.remove(first).unwrap();
    assert_eq!(removed.id(), first);
    let second = plan.place_full_circle(field_center()).unwrap();
    assert_eq!(second, 2);
    assert!(plan.get(first).is_none());
}

#[test]
fn removing_an_unknown_pivot_fails() {
    let mut plan = Plan::new();
    assert!(matches!(
        plan.remove(7),
        Err(ValidationError::UnknownPivot(7))
    ));
}

#[test]
fn failed_placement_consumes_no_id() {
    let mut plan = Plan::new();
    assert!(plan.place_full_circle(LatLng::new(Real::NAN, 34.0)).is_err());
    let id = plan.place_full_circle(field_center()).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn edits_reach_pivots_through_get_mut() {
    let mut plan = Plan::new();
    let id = plan.place_full_circle(field_center()).unwrap();
    plan.get_mut(id).unwrap().set_radius(250.0).unwrap();
    assert_eq!(plan.get(id).unwrap().radius(), 250.0);
}

#[test]
fn totals_sum_every_pivot() {
    let mut plan = Plan::new();
    let first = plan.place_full_circle(field_center()).unwrap();
    let first_area = plan.get(first).unwrap().area_hectares();
    assert_eq!(plan.total_area_hectares(), first_area);
    let second = plan.place_semi_circle(field_center()).unwrap();
    plan.get_mut(second).unwrap().set_radius(300.0).unwrap();
    // 16π + 4.5π
    assert!(approx_eq(plan.total_area_hectares(), 20.5 * PI, EPSILON));
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.pivots().len(), 2);
}

#[test]
fn clear_drops_pivots_but_keeps_counting() {
    let mut plan = Plan::new();
    plan.place_full_circle(field_center()).unwrap();
    plan.place_full_circle(field_center()).unwrap();
    plan.set_land_boundary(line_string![
        (x: 34.78, y: 31.24),
        (x: 34.81, y: 31.24),
        (x: 34.81, y: 31.26),
        (x: 34.78, y: 31.24),
    ]);
    plan.clear();
    assert!(plan.is_empty());
    assert!(plan.land_boundary().is_some());
    let id = plan.place_full_circle(field_center()).unwrap();
    assert_eq!(id, 3);
}

#[test]
fn land_boundary_round_trips() {
    let mut plan = Plan::new();
    assert!(plan.land_boundary().is_none());
    plan.set_land_boundary(line_string![
        (x: 34.78, y: 31.24),
        (x: 34.81, y: 31.24),
        (x: 34.81, y: 31.26),
        (x: 34.78, y: 31.24),
    ]);
    assert_eq!(plan.land_boundary().unwrap().coords().count(), 4);
    plan.clear_land_boundary();
    assert!(plan.land_boundary().is_none());
}

#[test]
fn empty_plans_report_empty() {
    let plan = Plan::default();
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
    assert_eq!(plan.total_area_hectares(), 0.0);
}
