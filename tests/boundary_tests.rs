use pivotrs::{
    Pivot,
    float_types::Real,
    geodesy::{bearing_between, distance_between},
};

mod support;

use crate::support::{approx_eq, field_center};

#[test]
fn full_circle_ring_closes_exactly() {
    let pivot = Pivot::full_circle(1, field_center(), 400.0).unwrap();
    let ring = pivot.boundary_points(10.0);
    assert_eq!(ring.len(), 37);
    assert_eq!(ring.first(), ring.last());
    // the center belongs to no full-circle outline
    assert!(ring.iter().all(|point| *point != pivot.center()));
}

#[test]
fn full_circle_points_sit_on_the_rim() {
    let pivot = Pivot::full_circle(1, field_center(), 400.0).unwrap();
    for point in pivot.boundary_points(10.0) {
        assert!(approx_eq(
            distance_between(pivot.center(), point),
            400.0,
            1e-6
        ));
    }
}

#[test]
fn wedge_starts_and_ends_at_the_center() {
    let pivot = Pivot::semi_circle(1, field_center(), 300.0, 0.0, 180.0).unwrap();
    let wedge = pivot.boundary_points(5.0);
    // center + 37 rim points + center
    assert_eq!(wedge.len(), 39);
    assert_eq!(wedge.first(), Some(&pivot.center()));
    assert_eq!(wedge.last(), Some(&pivot.center()));
}

#[test]
fn rim_lands_exactly_on_the_end_angle() {
    let pivot = Pivot::semi_circle(1, field_center(), 300.0, 0.0, 100.0).unwrap();
    let wedge = pivot.boundary_points(7.0);
    // rim samples at 0, 7, …, 98 plus the appended end point
    let rim = &wedge[1..wedge.len() - 1];
    assert_eq!(rim.len(), 16);
    let last = rim[rim.len() - 1];
    assert!(approx_eq(
        bearing_between(pivot.center(), last),
        100.0,
        1e-6
    ));
}

#[test]
fn wraparound_rim_crosses_the_seam() {
    let pivot = Pivot::semi_circle(1, field_center(), 300.0, 270.0, 90.0).unwrap();
    let wedge = pivot.boundary_points(10.0);
    let rim = &wedge[1..wedge.len() - 1];
    assert_eq!(rim.len(), 19);
    // every rim point keeps the full radius even across 0°
    for point in rim {
        assert!(approx_eq(
            distance_between(pivot.center(), *point),
            300.0,
            1e-6
        ));
    }
    // and the sweep passes through due east
    let crosses = rim
        .iter()
        .any(|point| approx_eq(bearing_between(pivot.center(), *point), 0.0, 1e-6));
    assert!(crosses);
}

#[test]
fn degenerate_steps_produce_no_outline() {
    let pivot = Pivot::full_circle(1, field_center(), 400.0).unwrap();
    assert!(pivot.boundary_points(0.0).is_empty());
    assert!(pivot.boundary_points(-5.0).is_empty());
    assert!(pivot.boundary_points(Real::NAN).is_empty());
}

#[test]
fn concentric_arcs_follow_the_pivot_shape() {
    let full = Pivot::full_circle(1, field_center(), 400.0).unwrap();
    let track = full.arc_points_at_radius(200.0, 30.0);
    assert_eq!(track.len(), 13);
    assert_eq!(track.first(), track.last());

    let semi = Pivot::semi_circle(2, field_center(), 400.0, 0.0, 180.0).unwrap();
    let arc = semi.arc_points_at_radius(200.0, 30.0);
    // open rim between the arc angles, no center, no closure
    assert_eq!(arc.len(), 7);
    assert_ne!(arc.first(), arc.last());
    for point in &arc {
        assert!(approx_eq(
            distance_between(semi.center(), *point),
            200.0,
            1e-6
        ));
    }
}
