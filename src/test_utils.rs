//! Test utilities for propagation and collision tests.
//!
//! Provides body fixtures and a headless Bevy app builder.

/// Fixtures for building test bodies.
pub mod fixtures {
    use crate::body::{Body, BodyRole};
    use crate::orbit::OrbitalElements;
    use crate::types::EARTH_RADIUS_KM;

    /// Period long enough that a body does not move measurably during a test.
    const FROZEN_PERIOD_DAYS: f64 = 1e12;

    /// A 1 km near-Earth object on the given orbit.
    pub fn body_with_elements(id: &str, elements: OrbitalElements) -> Body {
        Body {
            id: id.into(),
            elements,
            radius_km: 1.0,
            is_stationary: false,
            role: BodyRole::NearEarthObject,
        }
    }

    /// Earth pinned at the origin with its mean radius.
    pub fn stationary_earth() -> Body {
        Body {
            id: "Earth".into(),
            elements: OrbitalElements::default(),
            radius_km: EARTH_RADIUS_KM,
            is_stationary: true,
            role: BodyRole::Planet,
        }
    }

    /// A stationary object at the origin.
    pub fn rock(id: &str, radius_km: f64) -> Body {
        Body {
            id: id.into(),
            elements: OrbitalElements::default(),
            radius_km,
            is_stationary: true,
            role: BodyRole::NearEarthObject,
        }
    }

    /// An object sitting at `(x_km, 0, 0)` for the duration of a test.
    ///
    /// It is on a circular, uninclined orbit at periapsis with a period so
    /// long that it effectively stays put.
    pub fn rock_at(id: &str, radius_km: f64, x_km: f64) -> Body {
        Body {
            radius_km,
            ..body_with_elements(
                id,
                OrbitalElements::new(x_km, 0.0, 0.0, 0.0, 0.0, 0.0, FROZEN_PERIOD_DAYS),
            )
        }
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    use crate::simulation::{Simulation, SimulationPlugin};

    /// Create an app running the simulation plugin without a window.
    ///
    /// `Time` is inserted by hand so tests control the frame delta with
    /// `Time::advance_by`.
    pub fn headless_app(simulation: Simulation) -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(simulation)
            .add_plugins(SimulationPlugin);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::position_at;
    use approx::assert_relative_eq;

    #[test]
    fn test_rock_at_stays_put() {
        let body = fixtures::rock_at("B", 1.0, 42.0);
        for t in [0.0, 10.0, 1000.0] {
            let pos = position_at(&body, t);
            assert_relative_eq!(pos.x, 42.0, epsilon = 1e-6);
            assert!(pos.y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_fixtures_validate() {
        assert!(fixtures::stationary_earth().validate().is_ok());
        assert!(fixtures::rock("A", 1.0).validate().is_ok());
        assert!(fixtures::rock_at("B", 1.0, 5.0).validate().is_ok());
        assert!(fixtures::stationary_earth().is_earth_like(6371.0, 1.0));
    }
}
