//! PhysicsSettings - tunables loaded from a JSON bundle
//!
//! Every field has a default, so hosts only send what they override:
//! `{"gravity": [0, 4.9], "boundSizeDp": null}`.

use serde::{Deserialize, Serialize};

use crate::core::error::{PhysicsError, PhysicsResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsSettings {
    /// Fixed simulation step, matched to the host tick cadence
    pub timestep_ms: f32,
    /// Upper bound of catch-up steps per host tick
    pub max_steps_per_tick: u32,
    /// Meters per second squared, +y points down the screen
    pub gravity: [f32; 2],
    /// Density-independent pixels spanned by one meter
    pub dp_per_meter: f32,
    /// Upper bound of the velocity change a random impulse imparts (m/s)
    pub impulse_speed_max: f32,
    pub seed: u64,
    pub give_initial_random_impulse: bool,
    /// Wall thickness in dp; `None` disables the frame
    pub bound_size_dp: Option<f32>,
    pub wall_friction: f32,
    pub wall_restitution: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            timestep_ms: 16.0,
            max_steps_per_tick: 5,
            gravity: [0.0, 9.8],
            dp_per_meter: 10.0,
            impulse_speed_max: 10.0,
            seed: 0x5eed_1234,
            give_initial_random_impulse: true,
            bound_size_dp: Some(20.0),
            wall_friction: 0.3,
            wall_restitution: 0.0,
        }
    }
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        let settings: PhysicsSettings = serde_json::from_str(json)
            .map_err(|e| PhysicsError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if !(self.timestep_ms.is_finite() && self.timestep_ms > 0.0) {
            return Err(invalid("timestepMs must be positive"));
        }
        if self.max_steps_per_tick == 0 {
            return Err(invalid("maxStepsPerTick must be at least 1"));
        }
        if !(self.dp_per_meter.is_finite() && self.dp_per_meter > 0.0) {
            return Err(invalid("dpPerMeter must be positive"));
        }
        if !(self.impulse_speed_max.is_finite() && self.impulse_speed_max >= 0.0) {
            return Err(invalid("impulseSpeedMax must be non-negative"));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(invalid("gravity must be finite"));
        }
        Ok(())
    }

    /// Fixed step in seconds
    pub fn dt(&self) -> f32 {
        self.timestep_ms / 1000.0
    }
}

fn invalid(msg: &str) -> PhysicsError {
    PhysicsError::InvalidSettings(msg.to_string())
}
