// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// Comparison tolerance for angles in degrees and for relative
/// metric checks, sized to the active precision.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Comparison tolerance for angles in degrees and for relative
/// metric checks, sized to the active precision.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-6;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Square meters per hectare
pub const HECTARE: Real = 10_000.0;
