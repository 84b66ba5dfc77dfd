//! Wanderer configuration.

use forage_core::{Sector, Vec3};

use crate::{WanderError, WanderResult};

/// Static configuration for one [`Wanderer`][crate::Wanderer].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Nominal walking speed in units per second.  `0` makes the wanderer
    /// inert: it never picks a destination and never moves.
    pub base_speed: f32,

    /// Home point destinations are sampled around (usually the area centre).
    pub anchor: Vec3,

    /// Where, relative to `anchor`, destinations may land.
    pub sector: Sector,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.0,
            anchor:     Vec3::ZERO,
            sector:     Sector::new(-45.0, 45.0, 4.0, 9.0),
        }
    }
}

impl WanderConfig {
    /// Convenience constructor with the default sector.
    pub fn new(base_speed: f32, anchor: Vec3) -> Self {
        Self { base_speed, anchor, ..Self::default() }
    }

    pub fn with_sector(mut self, sector: Sector) -> Self {
        self.sector = sector;
        self
    }

    /// Reject configurations the state machine cannot run with.
    pub fn validate(&self) -> WanderResult<()> {
        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return Err(WanderError::InvalidSpeed(self.base_speed));
        }
        if !self.sector.is_valid() {
            return Err(WanderError::InvalidSector(self.sector));
        }
        Ok(())
    }
}
