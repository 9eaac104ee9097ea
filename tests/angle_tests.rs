use pivotrs::{
    angle::{arc_span, normalize_degrees},
    float_types::EPSILON,
};

mod support;

use crate::support::approx_eq;

#[test]
fn normalize_wraps_negative_angles() {
    assert!(approx_eq(normalize_degrees(-90.0), 270.0, EPSILON));
    assert!(approx_eq(normalize_degrees(-360.0), 0.0, EPSILON));
    assert!(approx_eq(normalize_degrees(-450.0), 270.0, EPSILON));
}

#[test]
fn normalize_wraps_past_full_turns() {
    assert!(approx_eq(normalize_degrees(360.0), 0.0, EPSILON));
    assert!(approx_eq(normalize_degrees(725.0), 5.0, EPSILON));
    assert!(approx_eq(normalize_degrees(45.0), 45.0, EPSILON));
}

#[test]
fn normalize_never_returns_the_seam() {
    // a negative angle below half an ulp of 360 rounds up to a full turn
    // inside rem_euclid and must fold back to zero
    let wrapped = normalize_degrees(-1e-14);
    assert!(
        (0.0..360.0).contains(&wrapped),
        "expected a value in [0, 360), got {wrapped}"
    );
}

#[test]
fn span_measures_plain_arcs() {
    assert!(approx_eq(arc_span(0.0, 180.0), 180.0, EPSILON));
    assert!(approx_eq(arc_span(45.0, 135.0), 90.0, EPSILON));
    assert!(approx_eq(arc_span(0.0, 359.0), 359.0, EPSILON));
}

#[test]
fn span_measures_wraparound_arcs() {
    assert!(approx_eq(arc_span(270.0, 90.0), 180.0, EPSILON));
    assert!(approx_eq(arc_span(350.0, 10.0), 20.0, EPSILON));
    assert!(approx_eq(arc_span(90.0, 45.0), 315.0, EPSILON));
}

#[test]
fn span_of_equal_angles_is_zero() {
    assert_eq!(arc_span(10.0, 10.0), 0.0);
    assert_eq!(arc_span(0.0, 0.0), 0.0);
}
