//! `forage-wander`: timed random-walk state machine for wildlife.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `WanderConfig`: base speed, home anchor, sampling sector   |
//! | [`wanderer`] | `Wanderer`, `WanderPhase`, `WanderStep`                    |
//! | [`error`]    | `WanderError`, `WanderResult<T>`                           |
//!
//! # Movement model (legs)
//!
//! A wanderer alternates between two states:
//!
//! 1. **SelectingDestination**: instantaneous.  When the simulation time
//!    reaches `next_decision_time` the wanderer re-rolls its speed, samples a
//!    destination in its sector around the home anchor, turns to face it, and
//!    schedules `next_decision_time = now + distance / speed`.
//! 2. **Moving**: every tick the body advances `speed * dt` along its facing
//!    direction.  A step that would pass the destination snaps onto it instead
//!    and ends the leg early.
//!
//! Selection collapses into `Moving` within the same tick, so a leg of
//! `distance / speed` seconds is covered by exactly that many seconds of
//! steps.  Wanderers never learn and carry no reward.

pub mod config;
pub mod error;
pub mod wanderer;


pub use config::WanderConfig;
pub use error::{WanderError, WanderResult};
pub use wanderer::{WanderPhase, WanderStep, Wanderer};
