//! Forager configuration.

use crate::{AgentError, AgentResult};

/// Static per-forager settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Forward speed in units per second.
    pub move_speed: f32,

    /// Yaw rate in degrees per second.
    pub turn_speed: f32,

    /// Step budget per episode.  `0` means unlimited and disables the
    /// per-step penalty.
    pub max_steps: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_speed: 180.0,
            max_steps:  0,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> AgentResult<()> {
        for (name, value) in [("move_speed", self.move_speed), ("turn_speed", self.turn_speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        Ok(())
    }

    /// Reward added every step: `-1 / max_steps`, or `0` without a budget.
    #[inline]
    pub fn step_penalty(&self) -> f32 {
        if self.max_steps > 0 { -1.0 / self.max_steps as f32 } else { 0.0 }
    }
}
