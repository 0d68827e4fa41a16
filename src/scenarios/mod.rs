//! Scenario system for predefined simulations.
//!
//! Provides a collection of preset body sets:
//! - Earth re-entry (Earth-centred frame)
//! - Shared-orbit impactor (heliocentric, guaranteed collision)
//! - Inner planets (free running)

pub mod presets;

use crate::body::Body;

pub use presets::SCENARIOS;

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial time scale (simulated seconds per real second).
    pub time_scale: f64,
    /// Whether the first collision stops simulated time.
    pub freeze_on_collision: bool,
    /// Builds the scenario's bodies.
    pub bodies: fn() -> Vec<Body>,
}

impl Scenario {
    /// Fresh copies of the scenario's bodies.
    pub fn bodies(&self) -> Vec<Body> {
        (self.bodies)()
    }
}

/// Look up a preset scenario by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}
