//! Impact classification: entry angle, severity and collision kind.

use std::fmt;

use bevy::math::DVec3;

use crate::body::Body;
use crate::config::DetectorConfig;
use crate::types::RAD_TO_DEG;

/// Vectors shorter than this are treated as zero-length.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Angle reported when the entry geometry is undefined.
pub const UNKNOWN_ENTRY_ANGLE_DEG: f64 = 90.0;

/// Severity bucket derived from the entry angle.
///
/// Lower angles between the relative velocity and the line of centres mean
/// a more head-on approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImpactSeverity {
    /// Below 15°
    DirectImpact,
    /// 15° to 30°
    SevereImpact,
    /// 30° to 45°
    ModerateImpact,
    /// 45° to 60°
    LightImpact,
    /// 60° and above
    AtmosphericGrazing,
}

impl ImpactSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactSeverity::DirectImpact => "DIRECT_IMPACT",
            ImpactSeverity::SevereImpact => "SEVERE_IMPACT",
            ImpactSeverity::ModerateImpact => "MODERATE_IMPACT",
            ImpactSeverity::LightImpact => "LIGHT_IMPACT",
            ImpactSeverity::AtmosphericGrazing => "ATMOSPHERIC_GRAZING",
        }
    }
}

impl fmt::Display for ImpactSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of encounter an event is, relative to an Earth-like planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// Bodies touch at Earth's surface
    SurfaceImpact,
    /// Inside the atmosphere shell but above the surface
    AtmosphericEntry,
    /// Any other overlap, or no Earth-like planet involved
    CloseApproach,
}

impl CollisionKind {
    pub fn label(&self) -> &'static str {
        match self {
            CollisionKind::SurfaceImpact => "SURFACE_IMPACT",
            CollisionKind::AtmosphericEntry => "ATMOSPHERIC_ENTRY",
            CollisionKind::CloseApproach => "CLOSE_APPROACH",
        }
    }
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Angle between the relative velocity and the relative position, folded
/// into `[0, 90]` degrees.
///
/// The absolute value of the dot product makes approaching and receding
/// geometry identical: a shallow pass from either side lands in the same
/// bucket. Zero-length inputs give [`UNKNOWN_ENTRY_ANGLE_DEG`].
pub fn entry_angle_deg(relative_velocity: DVec3, relative_position: DVec3) -> f64 {
    let v_len = relative_velocity.length();
    let p_len = relative_position.length();
    if !(v_len > DEGENERATE_LENGTH && p_len > DEGENERATE_LENGTH) {
        return UNKNOWN_ENTRY_ANGLE_DEG;
    }
    let cos_angle = (relative_velocity / v_len).dot(relative_position / p_len).abs().min(1.0);
    cos_angle.acos() * RAD_TO_DEG
}

/// Severity bucket for an entry angle (upper bounds exclusive).
pub fn impact_severity(entry_angle_deg: f64) -> ImpactSeverity {
    if entry_angle_deg < 15.0 {
        ImpactSeverity::DirectImpact
    } else if entry_angle_deg < 30.0 {
        ImpactSeverity::SevereImpact
    } else if entry_angle_deg < 45.0 {
        ImpactSeverity::ModerateImpact
    } else if entry_angle_deg < 60.0 {
        ImpactSeverity::LightImpact
    } else {
        ImpactSeverity::AtmosphericGrazing
    }
}

/// Collision kind with the default Earth radius, tolerance and atmosphere.
pub fn collision_kind(body_a: &Body, body_b: &Body, center_distance_km: f64) -> CollisionKind {
    collision_kind_with(body_a, body_b, center_distance_km, &DetectorConfig::default())
}

/// Collision kind for a configured detector.
///
/// Only encounters involving an Earth-like planet can be surface impacts or
/// atmospheric entries. If both bodies are Earth-like, `body_b` is the
/// "other" body.
pub fn collision_kind_with(
    body_a: &Body,
    body_b: &Body,
    center_distance_km: f64,
    config: &DetectorConfig,
) -> CollisionKind {
    let earth_like = |b: &Body| b.is_earth_like(config.earth_radius_km, config.earth_radius_tolerance_km);

    let other = if earth_like(body_a) {
        body_b
    } else if earth_like(body_b) {
        body_a
    } else {
        return CollisionKind::CloseApproach;
    };

    let earth_radius = config.earth_radius_km;
    if center_distance_km <= earth_radius + other.radius_km {
        CollisionKind::SurfaceImpact
    } else if center_distance_km <= earth_radius + config.atmosphere_height_km {
        CollisionKind::AtmosphericEntry
    } else {
        CollisionKind::CloseApproach
    }
}
