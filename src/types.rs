//! Core constants, unit conversions and shared labels for the orbital engine.
//!
//! Units throughout the crate: kilometres, kilometres per second, seconds,
//! and degrees at the public boundary (radians internally).

use bevy::prelude::*;

/// System set for ordering the per-tick simulation systems.
///
/// The clock must advance before positions are propagated, and positions
/// must be current before pairs are checked for collisions.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Simulated time advancement (runs first)
    Clock,
    /// Position propagation for all active bodies
    Propagate,
    /// Pairwise collision detection (runs last)
    Detect,
}

/// Physical constants (kilometre-based units)

/// Astronomical unit in kilometres
pub const AU_KM: f64 = 149_597_870.7;

/// Sun's standard gravitational parameter (GM) in km³/s²
pub const GM_SUN_KM3: f64 = 1.32712440018e11;

/// Earth's standard gravitational parameter (GM) in km³/s²
pub const GM_EARTH_KM3: f64 = 3.986004418e5;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Height of the atmosphere shell used for entry classification, in kilometres
pub const ATMOSPHERE_HEIGHT_KM: f64 = 100.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap an angle in radians into `[0, 2π)`.
pub fn normalize_radians(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(std::f64::consts::TAU);
    if wrapped >= std::f64::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle in degrees and convert it to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    normalize_degrees(degrees) * DEG_TO_RAD
}

/// Convert a Julian date to seconds since the Unix epoch.
pub fn julian_date_to_unix_seconds(julian_date: f64) -> f64 {
    (julian_date - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Convert seconds since the Unix epoch to a Julian date.
pub fn unix_seconds_to_julian_date(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}
