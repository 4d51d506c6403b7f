//! # Constants and type definitions for sightline
//!
//! This module centralizes the **angle conversion factors** and **common type
//! definitions** used throughout the `sightline` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, degrees ↔ arcseconds, arcminutes ↔ degrees)
//! - Core type aliases used across the crate
//! - The container type for batch estimation results
//!
//! All sky coordinates handled by the crate are right ascension / declination
//! pairs in **decimal degrees**; radians appear only transiently inside
//! trigonometric corrections.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds per decimal degree
pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// Arcminutes per decimal degree
pub const ARCMIN_PER_DEG: f64 = 60.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in decimal degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in arcminutes
pub type ArcMin = f64;
/// Angle in radians
pub type Radian = f64;

/// Estimated line-of-sight probabilities, one entry per target in catalog order.
pub type LosResults = Vec<f64>;
