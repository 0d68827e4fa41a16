//! Common test utilities for integration tests.

#![allow(dead_code)]

use orbital_impact::body::{Body, BodyRole};
use orbital_impact::collision::CollisionEvent;
use orbital_impact::orbit::OrbitalElements;
use orbital_impact::simulation::Simulation;
use orbital_impact::types::GM_SUN_KM3;

/// A body on the given orbit.
pub fn orbiting(id: &str, role: BodyRole, radius_km: f64, elements: OrbitalElements) -> Body {
    Body::new(id, role, elements, radius_km).expect("valid test body")
}

/// Run `ticks` ticks of `wall_delta` seconds and collect every event.
pub fn run_ticks(simulation: &mut Simulation, ticks: usize, wall_delta: f64) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        let output = simulation.tick(wall_delta).expect("tick");
        events.extend(output.events);
    }
    events
}

/// Specific orbital energy about the Sun, in km²/s².
pub fn heliocentric_energy(position: bevy::math::DVec3, velocity: bevy::math::DVec3) -> f64 {
    0.5 * velocity.length_squared() - GM_SUN_KM3 / position.length()
}
