//! State propagation: body + elapsed time → inertial position and velocity.
//!
//! Every function here is a pure function of its inputs. Nothing is cached,
//! so bodies can be propagated from several threads at once.

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::math::{DMat3, DVec3};

use super::elements::OrbitalElements;
use super::kepler::{solve_eccentric_anomaly, true_anomaly};
use crate::body::{Body, BodyId};
use crate::types::{degrees_to_radians, normalize_radians};

/// Semi-major axes below this (km) are treated as a body sitting at the origin.
pub const DEGENERATE_AXIS_KM: f64 = 1e-6;

/// Default number of segments when sampling an orbit ring for drawing.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 256;

/// Position (km) and velocity (km/s) of a body in the inertial frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateVector {
    pub position: DVec3,
    pub velocity: DVec3,
}

/// Rotation from the orbital (perifocal) plane to the inertial frame.
///
/// Applied right to left: argument of periapsis about Z, then inclination
/// about X, then longitude of the ascending node about Z. Changing the order
/// changes the 3D shape of inclined orbits.
pub fn perifocal_to_inertial(elements: &OrbitalElements) -> DMat3 {
    let omega = degrees_to_radians(elements.argument_of_periapsis_deg);
    let inclination = degrees_to_radians(elements.inclination_deg);
    let big_omega = degrees_to_radians(elements.longitude_of_ascending_node_deg);

    DMat3::from_rotation_z(big_omega) * DMat3::from_rotation_x(inclination) * DMat3::from_rotation_z(omega)
}

/// Whether the body is pinned to the origin.
fn is_fixed_at_origin(body: &Body) -> bool {
    body.is_stationary || body.elements.semi_major_axis_km.abs() < DEGENERATE_AXIS_KM
}

/// Mean anomaly at `elapsed_seconds`, wrapped into `[0, 2π)`.
pub fn mean_anomaly_at(elements: &OrbitalElements, elapsed_seconds: f64) -> f64 {
    let mean_motion = TAU / elements.period_seconds();
    let m0 = degrees_to_radians(elements.mean_anomaly_at_epoch_deg);
    normalize_radians(m0 + mean_motion * elapsed_seconds)
}

/// True anomaly at `elapsed_seconds`.
pub fn true_anomaly_at(elements: &OrbitalElements, elapsed_seconds: f64) -> f64 {
    let m = mean_anomaly_at(elements, elapsed_seconds);
    let e_anomaly = solve_eccentric_anomaly(m, elements.eccentricity);
    true_anomaly(e_anomaly, elements.eccentricity)
}

/// Position in the orbital plane for a given true anomaly (km).
fn perifocal_position(elements: &OrbitalElements, nu: f64) -> DVec3 {
    let e = elements.eccentricity;
    let r = elements.semi_latus_rectum_km() / (1.0 + e * nu.cos());
    DVec3::new(r * nu.cos(), r * nu.sin(), 0.0)
}

/// Velocity in the orbital plane for a given true anomaly (km/s).
///
/// Vis-viva decomposition with p = a(1 - e²):
/// radial `v_r = √(μ/p)·e·sin ν`, tangential `v_t = √(μ/p)·(1 + e·cos ν)`.
fn perifocal_velocity(elements: &OrbitalElements, nu: f64) -> DVec3 {
    let e = elements.eccentricity;
    let scale = (elements.gravitational_parameter / elements.semi_latus_rectum_km()).sqrt();
    let v_r = scale * e * nu.sin();
    let v_t = scale * (1.0 + e * nu.cos());
    let (sin_nu, cos_nu) = nu.sin_cos();
    DVec3::new(v_r * cos_nu - v_t * sin_nu, v_r * sin_nu + v_t * cos_nu, 0.0)
}

/// Get the inertial position of a body at the given elapsed time.
///
/// # Arguments
/// * `body` - The body to propagate
/// * `elapsed_seconds` - Simulated seconds since the epoch
///
/// # Returns
/// Position vector in km. Stationary bodies are always at the origin.
pub fn position_at(body: &Body, elapsed_seconds: f64) -> DVec3 {
    if is_fixed_at_origin(body) {
        return DVec3::ZERO;
    }
    let nu = true_anomaly_at(&body.elements, elapsed_seconds);
    perifocal_to_inertial(&body.elements) * perifocal_position(&body.elements, nu)
}

/// Get the inertial velocity of a body at the given elapsed time.
///
/// # Returns
/// Velocity vector in km/s. Stationary bodies have zero velocity.
pub fn velocity_at(body: &Body, elapsed_seconds: f64) -> DVec3 {
    if is_fixed_at_origin(body) {
        return DVec3::ZERO;
    }
    let nu = true_anomaly_at(&body.elements, elapsed_seconds);
    perifocal_to_inertial(&body.elements) * perifocal_velocity(&body.elements, nu)
}

/// Position and velocity together, sharing a single Kepler solve.
pub fn state_at(body: &Body, elapsed_seconds: f64) -> StateVector {
    if is_fixed_at_origin(body) {
        return StateVector::default();
    }
    let nu = true_anomaly_at(&body.elements, elapsed_seconds);
    let rotation = perifocal_to_inertial(&body.elements);
    StateVector {
        position: rotation * perifocal_position(&body.elements, nu),
        velocity: rotation * perifocal_velocity(&body.elements, nu),
    }
}

/// Positions of every body at the given elapsed time, keyed by id.
pub fn positions_at(bodies: &[Body], elapsed_seconds: f64) -> HashMap<BodyId, DVec3> {
    bodies
        .iter()
        .map(|body| (body.id.clone(), position_at(body, elapsed_seconds)))
        .collect()
}

/// Sample the orbit ring of a body for drawing.
///
/// Returns `segments + 1` points spaced uniformly in true anomaly; the last
/// point closes the ring. A stationary body's ring degenerates to a single
/// point at the origin.
pub fn orbit_path(body: &Body, segments: usize) -> Vec<DVec3> {
    if is_fixed_at_origin(body) || segments == 0 {
        return vec![DVec3::ZERO];
    }
    let rotation = perifocal_to_inertial(&body.elements);
    (0..=segments)
        .map(|i| {
            let nu = i as f64 / segments as f64 * TAU;
            rotation * perifocal_position(&body.elements, nu)
        })
        .collect()
}
