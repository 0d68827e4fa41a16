//! Pairwise collision detection with a per-pair cooldown.
//!
//! Each tick every unordered pair of bodies is compared at the current
//! elapsed time. When two bodies overlap (centre distance below the sum of
//! their radii) an event is emitted, unless the same pair already produced
//! one within the cooldown window. Without the cooldown, two bodies that
//! stay overlapping would emit an event every tick.
//!
//! The cooldown map is owned by the caller and passed in by mutable
//! reference; detection touches no other state.

use std::collections::{HashMap, VecDeque};

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::body::{Body, BodyId};
use crate::classify::{collision_kind_with, entry_angle_deg, impact_severity, CollisionKind, ImpactSeverity};
use crate::config::{DetectorConfig, DEFAULT_HISTORY_CAPACITY};
use crate::orbit::state_at;
use crate::simulation::Simulation;
use crate::time::SimulationClock;
use crate::types::{SimulationSet, SECONDS_PER_DAY};

/// Canonical key of an unordered body pair: `(min(id), max(id))`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: BodyId,
    high: BodyId,
}

impl PairKey {
    pub fn new(a: &BodyId, b: &BodyId) -> Self {
        if a <= b {
            Self { low: a.clone(), high: b.clone() }
        } else {
            Self { low: b.clone(), high: a.clone() }
        }
    }

    pub fn low(&self) -> &BodyId {
        &self.low
    }

    pub fn high(&self) -> &BodyId {
        &self.high
    }
}

/// Elapsed time at which each pair last produced an event.
pub type CooldownMap = HashMap<PairKey, f64>;

/// A detected overlap between two bodies.
///
/// Emitted once per qualifying pair crossing (subject to cooldown) and never
/// modified afterwards.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub body_a: Body,
    pub body_b: Body,
    /// Centre-to-centre distance in km
    pub distance_km: f64,
    /// Sum of the two radii in km
    pub threshold_km: f64,
    /// Simulated time of detection (seconds since epoch)
    pub at_elapsed_seconds: f64,
    /// Magnitude of the relative velocity in km/s
    pub relative_speed_km_s: f64,
    /// Entry angle in `[0, 90]` degrees
    pub entry_angle_deg: f64,
    pub impact_severity: ImpactSeverity,
    pub collision_kind: CollisionKind,
}

impl CollisionEvent {
    pub fn pair(&self) -> PairKey {
        PairKey::new(&self.body_a.id, &self.body_b.id)
    }

    /// Get the simulation time of the event in days since epoch.
    pub fn time_days(&self) -> f64 {
        self.at_elapsed_seconds / SECONDS_PER_DAY
    }

    /// How deep the bodies overlap, in km.
    pub fn penetration_km(&self) -> f64 {
        self.threshold_km - self.distance_km
    }
}

/// Check every unordered pair with the default 2 s cooldown.
pub fn check_all_pairs(
    bodies: &[Body],
    clock: &SimulationClock,
    last_flagged: &mut CooldownMap,
) -> Vec<CollisionEvent> {
    check_all_pairs_with(bodies, clock, last_flagged, &DetectorConfig::default())
}

/// Check every unordered pair for overlap and emit classified events.
///
/// A pair qualifies when `distance < radius_a + radius_b` and more than
/// `config.cooldown_seconds` of simulated time have passed since it last
/// qualified (a pair never flagged before always passes). The only side
/// effect is recording the detection time in `last_flagged`.
pub fn check_all_pairs_with(
    bodies: &[Body],
    clock: &SimulationClock,
    last_flagged: &mut CooldownMap,
    config: &DetectorConfig,
) -> Vec<CollisionEvent> {
    let now = clock.elapsed_seconds;
    let states: Vec<_> = bodies.iter().map(|body| state_at(body, now)).collect();

    let mut events = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (body_a, body_b) = (&bodies[i], &bodies[j]);
            let relative_position: DVec3 = states[j].position - states[i].position;
            let distance = relative_position.length();
            let threshold = body_a.radius_km + body_b.radius_km;
            let overlapping = distance < threshold;
            if !overlapping {
                continue;
            }

            let key = PairKey::new(&body_a.id, &body_b.id);
            let cooled_down = last_flagged
                .get(&key)
                .is_none_or(|last| now - last > config.cooldown_seconds);
            if !cooled_down {
                continue;
            }
            last_flagged.insert(key, now);

            let relative_velocity = states[j].velocity - states[i].velocity;
            let angle = entry_angle_deg(relative_velocity, relative_position);
            events.push(CollisionEvent {
                body_a: body_a.clone(),
                body_b: body_b.clone(),
                distance_km: distance,
                threshold_km: threshold,
                at_elapsed_seconds: now,
                relative_speed_km_s: relative_velocity.length(),
                entry_angle_deg: angle,
                impact_severity: impact_severity(angle),
                collision_kind: collision_kind_with(body_a, body_b, distance, config),
            });
        }
    }
    events
}

/// Bounded history of recent collisions, newest first.
#[derive(Clone, Debug)]
pub struct CollisionLog {
    events: VecDeque<CollisionEvent>,
    capacity: usize,
}

impl Default for CollisionLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CollisionLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Record an event, dropping the oldest one when full.
    pub fn push(&mut self, event: CollisionEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_back();
        }
        self.events.push_front(event);
    }

    /// Most recent collision, if any.
    pub fn last_collision(&self) -> Option<&CollisionEvent> {
        self.events.front()
    }

    /// Check if any collision has been recorded.
    pub fn has_collision(&self) -> bool {
        !self.events.is_empty()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the history (e.g. when resetting the simulation).
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Plugin providing collision detection for the [`Simulation`] resource.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CollisionEvent>()
            .add_systems(Update, detect_collisions.in_set(SimulationSet::Detect));
    }
}

/// Run pair detection for the current tick and publish each event.
fn detect_collisions(mut simulation: ResMut<Simulation>, mut collisions: MessageWriter<CollisionEvent>) {
    for event in simulation.detect() {
        collisions.write(event);
    }
}
