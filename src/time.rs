//! Simulation clock: accumulates simulated time from scaled wall-clock ticks.
//!
//! The time scale is "simulated seconds per real second". A scale of zero
//! freezes simulated time (pause); negative scales are rejected.

use bevy::prelude::*;

use crate::simulation::Simulation;
use crate::types::SimulationSet;

/// Time scale presets offered to the presentation layer
/// (1 s, 1 min, 1 h, 1 day, 1 week, 30 days per real second).
pub const TIME_SCALE_PRESETS: [f64; 6] = [1.0, 60.0, 3600.0, 86400.0, 604_800.0, 2_592_000.0];

/// Largest accepted time scale (30 simulated days per real second).
pub const MAX_TIME_SCALE: f64 = 2_592_000.0;

/// Reasons a clock advance is rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ClockError {
    #[error("time scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f64),

    #[error("wall-clock delta must be finite and non-negative, got {0} s")]
    InvalidWallDelta(f64),
}

/// Simulated time elapsed since the epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationClock {
    /// Seconds since the simulation epoch
    pub elapsed_seconds: f64,
}

impl SimulationClock {
    /// A clock positioned at a given elapsed time.
    pub fn at(elapsed_seconds: f64) -> Self {
        Self { elapsed_seconds }
    }

    /// Advance by `wall_delta_seconds × time_scale` simulated seconds.
    ///
    /// Rejected inputs leave the clock untouched.
    pub fn advance(&mut self, wall_delta_seconds: f64, time_scale: f64) -> Result<(), ClockError> {
        advance(self, wall_delta_seconds, time_scale)
    }

    /// Epoch reset.
    pub fn reset(&mut self) {
        reset(self);
    }

    /// Elapsed simulated time in days.
    pub fn days(&self) -> f64 {
        self.elapsed_seconds / crate::types::SECONDS_PER_DAY
    }
}

/// Advance the clock by `wall_delta_seconds × time_scale`.
pub fn advance(
    clock: &mut SimulationClock,
    wall_delta_seconds: f64,
    time_scale: f64,
) -> Result<(), ClockError> {
    if !time_scale.is_finite() || time_scale < 0.0 {
        return Err(ClockError::InvalidTimeScale(time_scale));
    }
    if !wall_delta_seconds.is_finite() || wall_delta_seconds < 0.0 {
        return Err(ClockError::InvalidWallDelta(wall_delta_seconds));
    }
    clock.elapsed_seconds += wall_delta_seconds * time_scale;
    Ok(())
}

/// Reset the clock to the epoch.
pub fn reset(clock: &mut SimulationClock) {
    clock.elapsed_seconds = 0.0;
}

/// Human-readable label for a time scale, e.g. `"1.0 h"` or `"30 days"`.
///
/// One decimal is shown below ten units of the chosen magnitude.
pub fn format_time_scale(scale: f64) -> String {
    if scale < 60.0 {
        format!("{scale:.0} s")
    } else if scale < 3600.0 {
        let minutes = scale / 60.0;
        if scale >= 600.0 {
            format!("{minutes:.0} min")
        } else {
            format!("{minutes:.1} min")
        }
    } else if scale < 86400.0 {
        let hours = scale / 3600.0;
        if scale >= 36_000.0 {
            format!("{hours:.0} h")
        } else {
            format!("{hours:.1} h")
        }
    } else {
        let days = scale / 86400.0;
        if scale >= 864_000.0 {
            format!("{days:.0} days")
        } else {
            format!("{days:.1} days")
        }
    }
}

/// Plugin advancing the [`Simulation`] clock from Bevy's frame time.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_simulation_clock.in_set(SimulationSet::Clock));
    }
}

/// Advance simulated time by the real frame delta times the time scale.
fn advance_simulation_clock(mut simulation: ResMut<Simulation>, time: Res<Time>) {
    if let Err(err) = simulation.advance(time.delta_secs_f64()) {
        warn!("Simulation clock not advanced: {err}");
    }
}
