//! Property-based tests for orbit propagation using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::elements::OrbitalElements;
use super::kepler::solve_eccentric_anomaly;
use super::propagator::{position_at, state_at, velocity_at};
use crate::test_utils::fixtures;
use crate::types::{AU_KM, DEG_TO_RAD, SECONDS_PER_DAY};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver satisfies Kepler's equation to 1e-4 for every valid
    /// eccentricity and mean anomaly.
    #[test]
    fn prop_kepler_residual_bounded(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..=0.99,
    ) {
        let m = mean_anomaly_normalized * TAU;
        let e_anom = solve_eccentric_anomaly(m, eccentricity);
        let residual = (e_anom - eccentricity * e_anom.sin() - m).abs();
        prop_assert!(
            residual < 1e-4,
            "Kepler solver failed: M={}, e={}, E={}, residual={}",
            m, eccentricity, e_anom, residual
        );
    }

    /// After exactly one orbital period, the body returns to its starting position.
    #[test]
    fn prop_position_periodic(
        eccentricity in 0.0f64..0.9,
        inclination in -180.0f64..180.0,
        periapsis in 0.0f64..360.0,
        node in 0.0f64..360.0,
        start_time_days in 0.0f64..3650.0,
    ) {
        let body = fixtures::body_with_elements(
            "rock",
            OrbitalElements::new(AU_KM, eccentricity, inclination, periapsis, node, 45.0, 365.25),
        );
        let t = start_time_days * SECONDS_PER_DAY;
        let pos_start = position_at(&body, t);
        let pos_end = position_at(&body, t + body.elements.period_seconds());

        // Within 1 km at 1 AU
        let distance = (pos_end - pos_start).length();
        prop_assert!(distance < 1.0, "Position not periodic: drift {} km", distance);
    }

    /// A circular orbit at epoch with M0 = 0 sits at distance a, in the
    /// direction fixed by (ω, i, Ω) alone.
    #[test]
    fn prop_circular_orbit_at_epoch(
        inclination in 0.0f64..180.0,
        periapsis in 0.0f64..360.0,
        node in 0.0f64..360.0,
        semi_major_axis_au in 0.3f64..30.0,
    ) {
        let a = semi_major_axis_au * AU_KM;
        let body = fixtures::body_with_elements(
            "ring",
            OrbitalElements::new(a, 0.0, inclination, periapsis, node, 0.0, 365.25),
        );
        let pos = position_at(&body, 0.0);
        prop_assert!(((pos.length() - a) / a).abs() < 1e-12);

        let (w, i, o) = (periapsis * DEG_TO_RAD, inclination * DEG_TO_RAD, node * DEG_TO_RAD);
        let expected_x = o.cos() * w.cos() - o.sin() * i.cos() * w.sin();
        let expected_y = o.sin() * w.cos() + o.cos() * i.cos() * w.sin();
        let expected_z = i.sin() * w.sin();
        let unit = pos / a;
        prop_assert!((unit.x - expected_x).abs() < 1e-9);
        prop_assert!((unit.y - expected_y).abs() < 1e-9);
        prop_assert!((unit.z - expected_z).abs() < 1e-9);
    }

    /// For e=0, r · v is always 0.
    #[test]
    fn prop_velocity_perpendicular_for_circular(
        time_days in 0.0f64..365.25,
        inclination in 0.0f64..90.0,
    ) {
        let body = fixtures::body_with_elements(
            "ring",
            OrbitalElements::new(AU_KM, 0.0, inclination, 30.0, 60.0, 0.0, 365.25),
        );
        let t = time_days * SECONDS_PER_DAY;
        let pos = position_at(&body, t);
        let vel = velocity_at(&body, t);
        let cos_angle = pos.dot(vel) / (pos.length() * vel.length());
        prop_assert!(cos_angle.abs() < 1e-9, "cos(angle)={}", cos_angle);
    }

    /// Specific orbital energy from the propagated state matches -μ/2a.
    #[test]
    fn prop_vis_viva_energy_constant(
        eccentricity in 0.0f64..0.9,
        time_days in 0.0f64..365.25,
    ) {
        let elements = OrbitalElements::new(AU_KM, eccentricity, 10.0, 20.0, 30.0, 0.0, 365.25);
        let mu = elements.gravitational_parameter;
        let body = fixtures::body_with_elements("rock", elements);
        let state = state_at(&body, time_days * SECONDS_PER_DAY);
        let energy = 0.5 * state.velocity.length_squared() - mu / state.position.length();
        let expected = -mu / (2.0 * AU_KM);
        prop_assert!(((energy - expected) / expected).abs() < 1e-6);
    }
}
