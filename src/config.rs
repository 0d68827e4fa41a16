//! Tunable parameters for detection and for the tick-driven simulation.
//!
//! Both structs default to the engine's standard parameters; hosts
//! override individual fields with the `with_*` setters and call
//! `validate()` (done automatically by [`crate::simulation::Simulation::new`]).

use crate::time::MAX_TIME_SCALE;
use crate::types::{ATMOSPHERE_HEIGHT_KM, EARTH_RADIUS_KM};

/// Minimum simulated seconds between two events for the same pair.
pub const DEFAULT_COOLDOWN_SECONDS: f64 = 2.0;

/// Number of recent collisions kept for display.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Reasons a configuration is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("initial time scale {scale} outside [0, {max}]")]
    InitialTimeScale { scale: f64, max: f64 },

    #[error("history capacity must be at least 1")]
    EmptyHistory,
}

/// Collision detector and classifier parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Simulated seconds a pair stays quiet after an event
    pub cooldown_seconds: f64,
    /// Radius identifying an Earth-like planet (km)
    pub earth_radius_km: f64,
    /// Allowed deviation from `earth_radius_km` (km)
    pub earth_radius_tolerance_km: f64,
    /// Thickness of the atmosphere shell above the surface (km)
    pub atmosphere_height_km: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            earth_radius_km: EARTH_RADIUS_KM,
            earth_radius_tolerance_km: 1.0,
            atmosphere_height_km: ATMOSPHERE_HEIGHT_KM,
        }
    }
}

impl DetectorConfig {
    pub fn with_cooldown_seconds(mut self, cooldown_seconds: f64) -> Self {
        self.cooldown_seconds = cooldown_seconds;
        self
    }

    pub fn with_atmosphere_height_km(mut self, atmosphere_height_km: f64) -> Self {
        self.atmosphere_height_km = atmosphere_height_km;
        self
    }

    pub fn with_earth_radius_km(mut self, earth_radius_km: f64, tolerance_km: f64) -> Self {
        self.earth_radius_km = earth_radius_km;
        self.earth_radius_tolerance_km = tolerance_km;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("cooldown_seconds", self.cooldown_seconds)?;
        non_negative("earth_radius_km", self.earth_radius_km)?;
        non_negative("earth_radius_tolerance_km", self.earth_radius_tolerance_km)?;
        non_negative("atmosphere_height_km", self.atmosphere_height_km)
    }
}

/// Parameters of a [`crate::simulation::Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub detector: DetectorConfig,
    /// Time scale at start and after reset
    pub initial_time_scale: f64,
    /// Upper bound accepted by `set_time_scale`
    pub max_time_scale: f64,
    /// Number of recent collision events kept in the log
    pub history_capacity: usize,
    /// Stop simulated time at the first detected collision
    pub freeze_on_collision: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            initial_time_scale: 1.0,
            max_time_scale: MAX_TIME_SCALE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            freeze_on_collision: false,
        }
    }
}

impl SimulationConfig {
    pub fn with_detector(mut self, detector: DetectorConfig) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_initial_time_scale(mut self, initial_time_scale: f64) -> Self {
        self.initial_time_scale = initial_time_scale;
        self
    }

    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    pub fn with_freeze_on_collision(mut self, freeze_on_collision: bool) -> Self {
        self.freeze_on_collision = freeze_on_collision;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detector.validate()?;
        non_negative("max_time_scale", self.max_time_scale)?;
        if !(0.0..=self.max_time_scale).contains(&self.initial_time_scale) {
            return Err(ConfigError::InitialTimeScale {
                scale: self.initial_time_scale,
                max: self.max_time_scale,
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(DetectorConfig::default().validate().is_ok());
        assert!(SimulationConfig::default().validate().is_ok());
        assert_eq!(DetectorConfig::default().cooldown_seconds, 2.0);
        assert_eq!(SimulationConfig::default().history_capacity, 10);
    }

    #[test]
    fn test_negative_cooldown_rejected() {
        let config = DetectorConfig::default().with_cooldown_seconds(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative { field: "cooldown_seconds", value: -1.0 })
        );
    }

    #[test]
    fn test_initial_time_scale_bounds() {
        let config = SimulationConfig::default().with_initial_time_scale(MAX_TIME_SCALE * 2.0);
        assert!(matches!(config.validate(), Err(ConfigError::InitialTimeScale { .. })));

        let paused = SimulationConfig::default().with_initial_time_scale(0.0);
        assert!(paused.validate().is_ok());
    }

    #[test]
    fn test_zero_history_rejected() {
        let config = SimulationConfig::default().with_history_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyHistory));
    }

    #[test]
    fn test_nested_detector_errors_surface() {
        let config = SimulationConfig::default()
            .with_detector(DetectorConfig::default().with_atmosphere_height_km(f64::NAN));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "atmosphere_height_km", .. })
        ));
    }
}
