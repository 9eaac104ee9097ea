//! A geometry engine for laying out **center-pivot irrigation** machines:
//! full circles and arbitrary arcs on real-world coordinates, with validated
//! editing, tower spacing, and KML / plain-text export.
//!
//! A [`Plan`] collects [`Pivot`]s over an optional land boundary. Every
//! angular quantity runs through [`angle::arc_span`], so arcs crossing the
//! 0°/360° seam behave exactly like arcs that do not.
//!
//! ```
//! use pivotrs::{LatLng, Plan, TowerSpacing};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut plan = Plan::new();
//! let id = plan.place_full_circle(LatLng::new(31.25, 34.75))?;
//! plan.get_mut(id).ok_or("missing pivot")?.set_radius(350.0)?;
//! plan.get_mut(id).ok_or("missing pivot")?.apply_towers(5, TowerSpacing::Equal)?;
//! let kml = plan.to_kml()?;
//! assert!(kml.contains("<name>Pivot 1</name>"));
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**kml-io**](https://en.wikipedia.org/wiki/Keyhole_Markup_Language): KML export of plans and import of land boundaries
//! - **geojson-io**: GeoJSON import of land boundaries
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod angle;
pub mod geodesy;
pub mod pivot;
pub mod plan;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use geodesy::LatLng;
pub use pivot::towers::{TowerConfig, TowerSector, TowerSpacing};
pub use pivot::{Pivot, PivotId, PivotKind, Specification};
pub use plan::Plan;
