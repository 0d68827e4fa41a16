//! Orbital Impact - Keplerian propagation and collision detection
//!
//! Bodies move on fixed two-body orbits described by classical elements.
//! Each tick the simulation clock advances by a scaled wall-clock delta,
//! every body is propagated analytically, and each pair of bodies is checked
//! for overlap. Overlaps become classified [`collision::CollisionEvent`]s.
//!
//! [`simulation::Simulation`] is the entry point for hosts;
//! [`simulation::SimulationPlugin`] runs it inside a Bevy app.

pub mod body;
pub mod classify;
pub mod collision;
pub mod config;
pub mod orbit;
pub mod scenarios;
pub mod simulation;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
