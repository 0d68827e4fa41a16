//! Keplerian orbit model and propagation.
//!
//! Coordinate frame:
//! - 3D inertial frame centred on the central mass (Sun or Earth).
//! - Orbital-plane vectors are rotated by ω (about Z), i (about X), Ω (about Z).

pub mod elements;
pub mod kepler;
pub mod propagator;

#[cfg(test)]
mod proptest_orbit;

pub use elements::OrbitalElements;
pub use kepler::{solve_eccentric_anomaly, solve_kepler, true_anomaly, KeplerSolution};
pub use propagator::{
    orbit_path, position_at, positions_at, state_at, velocity_at, StateVector, DEFAULT_ORBIT_SEGMENTS,
};
