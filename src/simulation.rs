//! Tick-driven simulation: clock → propagation → detection → classification.
//!
//! [`Simulation`] owns everything that changes between ticks (clock, time
//! scale, cooldown map, collision log) so a host only has to call
//! [`Simulation::tick`] once per frame, or add [`SimulationPlugin`] to a Bevy
//! app and read the [`BodyPositions`] resource and [`CollisionEvent`]
//! messages.

use std::collections::{HashMap, HashSet};

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::body::{Body, BodyId, BodyRole, ElementsError};
use crate::collision::{check_all_pairs_with, CollisionEvent, CollisionLog, CollisionPlugin, CooldownMap};
use crate::config::{ConfigError, SimulationConfig};
use crate::orbit::positions_at;
use crate::scenarios::Scenario;
use crate::time::{ClockError, SimulationClock, TimePlugin};
use crate::types::SimulationSet;

/// Errors raised by the simulation's mutating operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid body '{id}': {source}")]
    InvalidBody {
        id: BodyId,
        #[source]
        source: ElementsError,
    },

    #[error("a body named '{0}' already exists")]
    DuplicateBody(BodyId),

    #[error("no body named '{0}'")]
    UnknownBody(BodyId),

    #[error("time scale {scale} outside [0, {max}]")]
    TimeScaleOutOfRange { scale: f64, max: f64 },

    #[error("simulation is frozen after a collision; reset to continue")]
    Frozen,

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Which bodies take part in propagation and detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
    /// Every body
    #[default]
    All,
    /// Only Earth-like planets and impactors (collision analysis)
    EarthAndImpactors,
}

/// Why simulated time is currently stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Freeze {
    Manual,
    Collision,
}

/// Output of one simulation tick for the presentation layer.
#[derive(Clone, Debug, Default)]
pub struct TickOutput {
    /// Elapsed simulated seconds after the tick
    pub elapsed_seconds: f64,
    /// Position of every active body in km
    pub positions: HashMap<BodyId, DVec3>,
    /// Events detected during the tick
    pub events: Vec<CollisionEvent>,
}

/// Resource holding the latest propagated positions, for rendering.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyPositions(pub HashMap<BodyId, DVec3>);

/// A set of bodies advancing through simulated time.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    clock: SimulationClock,
    time_scale: f64,
    cooldowns: CooldownMap,
    log: CollisionLog,
    config: SimulationConfig,
    focus: FocusMode,
    freeze: Option<Freeze>,
}

impl Simulation {
    /// Create a simulation, validating the configuration and every body.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut seen = HashSet::new();
        for body in &bodies {
            validate_body(body)?;
            if !seen.insert(body.id.clone()) {
                return Err(SimulationError::DuplicateBody(body.id.clone()));
            }
        }

        Ok(Self {
            bodies,
            clock: SimulationClock::default(),
            time_scale: config.initial_time_scale,
            cooldowns: CooldownMap::new(),
            log: CollisionLog::with_capacity(config.history_capacity),
            config,
            focus: FocusMode::All,
            freeze: None,
        })
    }

    /// Create a simulation from a preset scenario.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SimulationError> {
        debug!("Loading scenario '{}'", scenario.id);
        let config = SimulationConfig::default()
            .with_initial_time_scale(scenario.time_scale)
            .with_freeze_on_collision(scenario.freeze_on_collision);
        Self::new(scenario.bodies(), config)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: &BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| &body.id == id)
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn log(&self) -> &CollisionLog {
        &self.log
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the time scale (simulated seconds per real second).
    pub fn set_time_scale(&mut self, scale: f64) -> Result<(), SimulationError> {
        if !(0.0..=self.config.max_time_scale).contains(&scale) {
            return Err(SimulationError::TimeScaleOutOfRange {
                scale,
                max: self.config.max_time_scale,
            });
        }
        self.time_scale = scale;
        Ok(())
    }

    pub fn focus_mode(&self) -> FocusMode {
        self.focus
    }

    pub fn set_focus_mode(&mut self, focus: FocusMode) {
        self.focus = focus;
    }

    /// Whether simulated time is stopped (manually or by a collision).
    pub fn is_frozen(&self) -> bool {
        self.freeze.is_some()
    }

    /// Stop simulated time without changing the time scale.
    pub fn pause(&mut self) {
        if self.freeze.is_none() {
            self.freeze = Some(Freeze::Manual);
        }
    }

    /// Resume after a manual pause. A collision freeze holds until `reset`.
    pub fn resume(&mut self) -> Result<(), SimulationError> {
        match self.freeze {
            Some(Freeze::Collision) => Err(SimulationError::Frozen),
            _ => {
                self.freeze = None;
                Ok(())
            }
        }
    }

    /// Epoch reset: clock to zero, cooldowns and history cleared, unfrozen.
    pub fn reset(&mut self) {
        debug!("Simulation reset at t = {:.1} s", self.clock.elapsed_seconds);
        self.clock.reset();
        self.cooldowns.clear();
        self.log.clear();
        self.freeze = None;
        self.time_scale = self.config.initial_time_scale;
    }

    /// Add a body, validating it and rejecting duplicate ids.
    pub fn add_body(&mut self, body: Body) -> Result<(), SimulationError> {
        validate_body(&body)?;
        if self.body(&body.id).is_some() {
            return Err(SimulationError::DuplicateBody(body.id));
        }
        self.bodies.push(body);
        Ok(())
    }

    /// Remove a body and forget its cooldown entries.
    pub fn remove_body(&mut self, id: &BodyId) -> Result<Body, SimulationError> {
        let index = self
            .bodies
            .iter()
            .position(|body| &body.id == id)
            .ok_or_else(|| SimulationError::UnknownBody(id.clone()))?;
        self.cooldowns.retain(|key, _| key.low() != id && key.high() != id);
        Ok(self.bodies.remove(index))
    }

    /// Bodies taking part in propagation and detection under the focus mode.
    pub fn active_bodies(&self) -> Vec<Body> {
        match self.focus {
            FocusMode::All => self.bodies.clone(),
            FocusMode::EarthAndImpactors => {
                let detector = &self.config.detector;
                self.bodies
                    .iter()
                    .filter(|body| {
                        body.role == BodyRole::Impactor
                            || body.is_earth_like(detector.earth_radius_km, detector.earth_radius_tolerance_km)
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    /// Positions of the active bodies at the current elapsed time.
    pub fn positions(&self) -> HashMap<BodyId, DVec3> {
        positions_at(&self.active_bodies(), self.clock.elapsed_seconds)
    }

    /// Advance the clock by one wall-clock delta under the current time scale.
    ///
    /// While frozen the effective time scale is zero.
    pub fn advance(&mut self, wall_delta_seconds: f64) -> Result<(), SimulationError> {
        let scale = if self.is_frozen() { 0.0 } else { self.time_scale };
        self.clock.advance(wall_delta_seconds, scale)?;
        Ok(())
    }

    /// Detect collisions among the active bodies at the current elapsed time.
    ///
    /// New events are logged and recorded in the history. With
    /// `freeze_on_collision`, the first event stops simulated time.
    pub fn detect(&mut self) -> Vec<CollisionEvent> {
        let active = self.active_bodies();
        let events = check_all_pairs_with(&active, &self.clock, &mut self.cooldowns, &self.config.detector);

        for event in &events {
            info!(
                "{}: {} ↔ {} at {:.1} km ({:.2} km/s, {:.1}°, {})",
                event.collision_kind,
                event.body_a.id,
                event.body_b.id,
                event.distance_km,
                event.relative_speed_km_s,
                event.entry_angle_deg,
                event.impact_severity,
            );
            self.log.push(event.clone());
        }

        if !events.is_empty() && self.config.freeze_on_collision && self.freeze != Some(Freeze::Collision) {
            info!("Simulation frozen at t = {:.1} s after collision", self.clock.elapsed_seconds);
            self.freeze = Some(Freeze::Collision);
        }
        events
    }

    /// Run one full tick: advance, propagate, detect.
    pub fn tick(&mut self, wall_delta_seconds: f64) -> Result<TickOutput, SimulationError> {
        self.advance(wall_delta_seconds)?;
        let positions = self.positions();
        let events = self.detect();
        Ok(TickOutput {
            elapsed_seconds: self.clock.elapsed_seconds,
            positions,
            events,
        })
    }
}

fn validate_body(body: &Body) -> Result<(), SimulationError> {
    body.validate().map_err(|source| SimulationError::InvalidBody {
        id: body.id.clone(),
        source,
    })
}

/// Plugin running a [`Simulation`] resource once per frame.
///
/// The host inserts the `Simulation` resource; this plugin advances its
/// clock from frame time, refreshes [`BodyPositions`] and publishes
/// [`CollisionEvent`] messages.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyPositions>()
            .configure_sets(
                Update,
                (SimulationSet::Clock, SimulationSet::Propagate, SimulationSet::Detect).chain(),
            )
            .add_plugins((TimePlugin, CollisionPlugin))
            .add_systems(Update, update_body_positions.in_set(SimulationSet::Propagate));
    }
}

/// Refresh the positions resource from the simulation's current time.
fn update_body_positions(simulation: Res<Simulation>, mut positions: ResMut<BodyPositions>) {
    positions.0 = simulation.positions();
}
