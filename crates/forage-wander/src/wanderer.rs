//! The `Wanderer` state machine.

use forage_core::{Sampler, Transform, Vec3, sample_in_sector};
use tracing::debug;

use crate::{WanderConfig, WanderResult};

/// Speed multiplier bounds applied to `base_speed` once per leg.
const SPEED_FACTOR_MIN: f32 = 0.5;
const SPEED_FACTOR_MAX: f32 = 1.5;

/// A leg whose scheduled end falls within this many seconds after the current
/// tick finishes on this tick.  Absorbs `f32` rounding between `now + dt` and
/// the next tick's timestamp.
const LEG_END_TOLERANCE_SECS: f32 = 1e-4;

/// Which of the two states a wanderer is in at a given time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WanderPhase {
    /// The current leg is over (or none has started); the next tick picks a
    /// new destination.
    SelectingDestination,
    /// Walking a straight line toward the current target.
    Moving,
}

/// What one [`Wanderer::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WanderStep {
    /// `base_speed <= 0`; nothing happened.
    Inert,
    /// Moved one full step toward the target.
    Advanced { leg_started: bool },
    /// The step reached the target or the leg's duration ran out; the body was
    /// placed exactly on the target and the leg ended.
    Arrived { leg_started: bool },
}

/// A non-learning creature that walks between randomly chosen destinations.
///
/// The wanderer owns only its leg state; the body transform is host-owned and
/// lent to [`tick`][Self::tick] each update.
#[derive(Clone, Debug)]
pub struct Wanderer {
    config:             WanderConfig,
    current_speed:      f32,
    target:             Vec3,
    next_decision_time: f32,
    legs_started:       u64,
}

impl Wanderer {
    /// Validate `config` and create a wanderer that will pick its first
    /// destination on its first tick.
    pub fn new(config: WanderConfig) -> WanderResult<Self> {
        config.validate()?;
        Ok(Self {
            current_speed:      config.base_speed,
            target:             config.anchor,
            next_decision_time: -1.0,
            legs_started:       0,
            config,
        })
    }

    /// Advance the state machine by one tick of `dt` seconds ending at `now`.
    ///
    /// `sampler` supplies the per-leg speed factor and destination.
    pub fn tick<S: Sampler + ?Sized>(
        &mut self,
        body:    &mut Transform,
        now:     f32,
        dt:      f32,
        sampler: &mut S,
    ) -> WanderStep {
        if self.config.base_speed <= 0.0 {
            return WanderStep::Inert;
        }

        let leg_started = self.phase(now) == WanderPhase::SelectingDestination;
        if leg_started {
            self.start_leg(body, now, sampler);
        }

        let step = self.current_speed * dt;
        let remaining = body.distance_to(self.target);
        let leg_elapsed = now + dt + LEG_END_TOLERANCE_SECS >= self.next_decision_time;
        if step < remaining && !leg_elapsed {
            body.translate(body.forward() * step);
            WanderStep::Advanced { leg_started }
        } else {
            // Either the step reaches the destination or the leg's duration is
            // used up: land exactly on it and let the next tick pick a new one.
            body.position = self.target;
            self.next_decision_time = now;
            WanderStep::Arrived { leg_started }
        }
    }

    /// Re-roll speed and destination together, face the destination, and
    /// schedule the end of the leg.
    fn start_leg<S: Sampler + ?Sized>(&mut self, body: &mut Transform, now: f32, sampler: &mut S) {
        self.current_speed = self.config.base_speed * sampler.range(SPEED_FACTOR_MIN, SPEED_FACTOR_MAX);
        self.target = sample_in_sector(sampler, self.config.anchor, &self.config.sector);
        body.look_at(self.target);

        let distance = body.distance_to(self.target);
        self.next_decision_time = now + distance / self.current_speed;
        self.legs_started += 1;

        debug!(
            leg = self.legs_started,
            speed = self.current_speed,
            distance,
            arrive_at = self.next_decision_time,
            "wanderer started leg",
        );
    }

    /// The state the wanderer is in at simulation time `now`.
    #[inline]
    pub fn phase(&self, now: f32) -> WanderPhase {
        if now >= self.next_decision_time {
            WanderPhase::SelectingDestination
        } else {
            WanderPhase::Moving
        }
    }

    #[inline]
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Speed of the current leg.
    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Destination of the current leg.  Meaningless before the first leg.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn next_decision_time(&self) -> f32 {
        self.next_decision_time
    }

    /// Number of legs started since creation.
    #[inline]
    pub fn legs_started(&self) -> u64 {
        self.legs_started
    }
}
