//! Preset scenario definitions.
//!
//! Heliocentric elements are J2000 mean elements (JPL approximate planetary
//! positions), with ω = ϖ − Ω and M = L − ϖ.

use crate::body::{Body, BodyRole};
use crate::orbit::OrbitalElements;
use crate::types::{AU_KM, EARTH_RADIUS_KM, GM_EARTH_KM3};

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[EARTH_REENTRY, SHARED_ORBIT_IMPACTOR, INNER_PLANETS];

/// Scenario 1: Earth Re-entry (Earth-centred frame)
///
/// Earth is pinned at the origin and an object circles it on the default
/// Earth-centred orbit (a = 7000 km, e = 0.2). Perigee is 5600 km from the
/// centre, below the surface, so the object strikes at t = 0.
pub static EARTH_REENTRY: Scenario = Scenario {
    id: "earth_reentry",
    name: "Earth Re-entry",
    description: "Low orbit with perigee below the surface. Immediate surface impact.",
    time_scale: 60.0,
    freeze_on_collision: true,
    bodies: earth_reentry_bodies,
};

/// Scenario 2: Shared-Orbit Impactor (MOID = 0)
///
/// The impactor flies Earth's own heliocentric orbit, a few thousand km
/// along-track. Identical orbits mean the orbits intersect everywhere.
pub static SHARED_ORBIT_IMPACTOR: Scenario = Scenario {
    id: "shared_orbit_impactor",
    name: "Shared-Orbit Impactor",
    description: "Impactor on Earth's orbit, ~2600 km behind. Guaranteed collision.",
    time_scale: 3600.0,
    freeze_on_collision: true,
    bodies: shared_orbit_bodies,
};

/// Scenario 3: Inner Planets (Free Running)
///
/// Mercury to Mars plus Apophis, propagated around the Sun. No encounters
/// within a typical session.
pub static INNER_PLANETS: Scenario = Scenario {
    id: "inner_planets",
    name: "Inner Planets",
    description: "Mercury to Mars and Apophis on J2000 elements.",
    time_scale: 86400.0,
    freeze_on_collision: false,
    bodies: inner_planet_bodies,
};

/// Name the impactor goes by in the shared-orbit scenario.
pub const IMPACTOR_NAME: &str = "IMPACTOR-2025";

/// Mean anomaly lag of the shared-orbit impactor behind Earth, in degrees.
const IMPACTOR_LAG_DEG: f64 = 0.001;

fn orbiting(id: &str, role: BodyRole, radius_km: f64, elements: OrbitalElements) -> Body {
    Body {
        id: id.into(),
        elements,
        radius_km,
        is_stationary: false,
        role,
    }
}

fn earth_elements() -> OrbitalElements {
    OrbitalElements::new(1.00000261 * AU_KM, 0.01671123, -0.00001531, 102.93768193, 0.0, 357.52688973, 365.256)
}

fn earth_reentry_bodies() -> Vec<Body> {
    let earth = Body {
        id: "Earth".into(),
        elements: OrbitalElements::default().with_gravitational_parameter(GM_EARTH_KM3),
        radius_km: EARTH_RADIUS_KM,
        is_stationary: true,
        role: BodyRole::Planet,
    };
    let object = orbiting(
        "REENTRY-7000",
        BodyRole::Impactor,
        0.5,
        OrbitalElements::from_gravitational_parameter(7000.0, 0.2, 28.5, 0.0, 0.0, 0.0, GM_EARTH_KM3),
    );
    vec![earth, object]
}

fn shared_orbit_bodies() -> Vec<Body> {
    let earth = orbiting("Earth", BodyRole::Planet, EARTH_RADIUS_KM, earth_elements());
    let mut impactor_elements = earth_elements();
    impactor_elements.mean_anomaly_at_epoch_deg -= IMPACTOR_LAG_DEG;
    let impactor = orbiting(IMPACTOR_NAME, BodyRole::Impactor, 0.5, impactor_elements);
    vec![earth, impactor]
}

fn inner_planet_bodies() -> Vec<Body> {
    vec![
        orbiting(
            "Mercury",
            BodyRole::Planet,
            2439.7,
            OrbitalElements::new(0.38709927 * AU_KM, 0.20563593, 7.00497902, 29.12703035, 48.33076593, 174.79252722, 87.969),
        ),
        orbiting(
            "Venus",
            BodyRole::Planet,
            6051.8,
            OrbitalElements::new(0.72333566 * AU_KM, 0.00677672, 3.39467605, 54.92262463, 76.67984255, 50.37663232, 224.701),
        ),
        orbiting("Earth", BodyRole::Planet, EARTH_RADIUS_KM, earth_elements()),
        orbiting(
            "Mars",
            BodyRole::Planet,
            3389.5,
            OrbitalElements::new(1.52371034 * AU_KM, 0.09339410, 1.84969142, -73.50316850, 49.55953891, 19.39019754, 686.980),
        ),
        orbiting(
            "Apophis",
            BodyRole::NearEarthObject,
            0.17,
            OrbitalElements::new(0.9224 * AU_KM, 0.1911, 3.339, 126.42, 204.43, 215.54, 323.6),
        ),
    ]
}
