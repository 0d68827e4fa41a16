//! Classical orbital elements describing a closed Keplerian orbit.

use std::f64::consts::TAU;

use crate::types::{normalize_degrees, DEG_TO_RAD, GM_SUN_KM3, RAD_TO_DEG, SECONDS_PER_DAY};

/// Keplerian orbital elements for computing positions analytically.
///
/// Distances are in kilometres and angles in degrees. Angles may hold any real
/// value; they are wrapped into `[0, 360)` before any trigonometry.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in km
    pub semi_major_axis_km: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    pub eccentricity: f64,
    /// Inclination to the reference plane in degrees
    pub inclination_deg: f64,
    /// Argument of periapsis in degrees
    pub argument_of_periapsis_deg: f64,
    /// Longitude of the ascending node in degrees
    pub longitude_of_ascending_node_deg: f64,
    /// Mean anomaly at the simulation epoch in degrees
    pub mean_anomaly_at_epoch_deg: f64,
    /// Orbital period in days
    pub orbital_period_days: f64,
    /// Standard gravitational parameter of the central mass in km³/s²
    pub gravitational_parameter: f64,
}

impl Default for OrbitalElements {
    /// A degenerate orbit at the origin around the Sun. Only meaningful for
    /// stationary bodies.
    fn default() -> Self {
        Self {
            semi_major_axis_km: 0.0,
            eccentricity: 0.0,
            inclination_deg: 0.0,
            argument_of_periapsis_deg: 0.0,
            longitude_of_ascending_node_deg: 0.0,
            mean_anomaly_at_epoch_deg: 0.0,
            orbital_period_days: 0.0,
            gravitational_parameter: GM_SUN_KM3,
        }
    }
}

impl OrbitalElements {
    /// Create orbital elements with an explicit period around the Sun.
    ///
    /// # Arguments
    /// * `semi_major_axis_km` - Semi-major axis in km
    /// * `eccentricity` - Orbital eccentricity (0-1 for elliptical orbits)
    /// * `inclination_deg` - Inclination in degrees
    /// * `argument_of_periapsis_deg` - Argument of periapsis in degrees
    /// * `longitude_of_ascending_node_deg` - Longitude of ascending node in degrees
    /// * `mean_anomaly_at_epoch_deg` - Mean anomaly at epoch in degrees
    /// * `orbital_period_days` - Orbital period in days
    pub fn new(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
        argument_of_periapsis_deg: f64,
        longitude_of_ascending_node_deg: f64,
        mean_anomaly_at_epoch_deg: f64,
        orbital_period_days: f64,
    ) -> Self {
        Self {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
            argument_of_periapsis_deg,
            longitude_of_ascending_node_deg,
            mean_anomaly_at_epoch_deg,
            orbital_period_days,
            gravitational_parameter: GM_SUN_KM3,
        }
    }

    /// Create orbital elements whose period follows from Kepler's third law.
    ///
    /// Mean motion is `n = √(μ/a³)` and the period `T = 2π/n`. This is how
    /// catalogue elements (which carry `a` and `μ` but no period) enter the
    /// engine.
    pub fn from_gravitational_parameter(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
        argument_of_periapsis_deg: f64,
        longitude_of_ascending_node_deg: f64,
        mean_anomaly_at_epoch_deg: f64,
        gravitational_parameter: f64,
    ) -> Self {
        let mean_motion = (gravitational_parameter / semi_major_axis_km.powi(3)).sqrt();
        Self {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
            argument_of_periapsis_deg,
            longitude_of_ascending_node_deg,
            mean_anomaly_at_epoch_deg,
            orbital_period_days: TAU / mean_motion / SECONDS_PER_DAY,
            gravitational_parameter,
        }
    }

    /// Override the gravitational parameter (e.g. Earth's μ for an
    /// Earth-centred orbit).
    pub fn with_gravitational_parameter(mut self, gravitational_parameter: f64) -> Self {
        self.gravitational_parameter = gravitational_parameter;
        self
    }

    /// Orbital period in seconds.
    pub fn period_seconds(&self) -> f64 {
        self.orbital_period_days * SECONDS_PER_DAY
    }

    /// Mean motion in radians per second, derived from the period.
    pub fn mean_motion_rad_per_s(&self) -> f64 {
        TAU / self.period_seconds()
    }

    /// Semi-latus rectum `p = a(1 - e²)` in km.
    pub fn semi_latus_rectum_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Periapsis distance (closest approach to the central mass) in km.
    pub fn periapsis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance (farthest from the central mass) in km.
    pub fn apoapsis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 + self.eccentricity)
    }

    /// Move the epoch forward by `delta_seconds`.
    ///
    /// Returns elements whose mean anomaly at epoch has been advanced by
    /// `n·Δt` and wrapped into `[0, 360)`. Used to align elements published
    /// at a catalogue epoch with the simulation's reference time.
    pub fn advanced_by(&self, delta_seconds: f64) -> Self {
        let advanced_rad =
            self.mean_anomaly_at_epoch_deg * DEG_TO_RAD + self.mean_motion_rad_per_s() * delta_seconds;
        Self {
            mean_anomaly_at_epoch_deg: normalize_degrees(advanced_rad * RAD_TO_DEG),
            ..self.clone()
        }
    }
}
