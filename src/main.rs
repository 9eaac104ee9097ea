// main.rs
//
// Minimal example of each function of pivotrs: placing pivots, editing their
// geometry, spacing towers, and exporting the finished plan.

use geo::line_string;
use pivotrs::{LatLng, Plan, TowerSpacing};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the /plans folder exists
    let _ = fs::create_dir_all("plans");

    let mut plan = Plan::new();

    // A field boundary around the demo pivots
    plan.set_land_boundary(line_string![
        (x: 34.7800, y: 31.2400),
        (x: 34.8120, y: 31.2400),
        (x: 34.8120, y: 31.2650),
        (x: 34.7800, y: 31.2650),
        (x: 34.7800, y: 31.2400),
    ]);

    // 1) a full circle with the default radius and five equal towers
    let first = plan.place_full_circle(LatLng::new(31.2500, 34.7910))?;
    let pivot = plan.get_mut(first).ok_or("first pivot missing")?;
    pivot.apply_towers(5, TowerSpacing::Equal)?;
    pivot.specification.flow_rate = 120.0;
    pivot.specification.power = 18.5;

    // 2) a tighter circle sized by target area instead of radius
    let second = plan.place_full_circle(LatLng::new(31.2432, 34.8005))?;
    let pivot = plan.get_mut(second).ok_or("second pivot missing")?;
    pivot.set_area(20.0)?;
    pivot.specification.notes = "Sized for the 20 ha east block".into();

    // 3) a semi-circle sweeping from 270° through 0° to 90°, with
    //    hand-picked tower spacings
    let third = plan.place_semi_circle(LatLng::new(31.2568, 34.8005))?;
    let pivot = plan.get_mut(third).ok_or("third pivot missing")?;
    pivot.set_radius(300.0)?;
    pivot.set_angles(270.0, 90.0)?;
    pivot.apply_towers(3, TowerSpacing::Custom(vec![80.0, 90.0, 100.0]))?;

    #[cfg(feature = "kml-io")]
    fs::write("plans/irrigation_plan.kml", plan.to_kml()?)?;
    fs::write("plans/irrigation_plan.txt", plan.plan_report("2025-07-14")?)?;

    // Done!
    println!(
        "{} pivots irrigating {:.2} ha; files written to the 'plans' folder.",
        plan.len(),
        plan.total_area_hectares()
    );
    Ok(())
}
