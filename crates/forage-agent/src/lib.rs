//! `forage-agent`: the learning forager's decision/motion/reward loop.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`action`]      | `Decision`, `ForwardIntent`, `TurnDirection`, `KeyState`        |
//! | [`observation`] | `Observation`: the fixed 8-value input to the decision source   |
//! | [`collision`]   | `Collision` categories, `CollisionOutcome`                      |
//! | [`env`]         | `Area`, `DecisionProvider`, `EffectSink`, `EnvironmentParams`   |
//! | [`config`]      | `AgentConfig`                                                   |
//! | [`agent`]       | `ForagingAgent`, its builder, episode status and tick outcomes  |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Tick contract
//!
//! The host calls, once per simulation tick and in its own order:
//!
//! 1. [`ForagingAgent::tick`]: decision request on every fifth step,
//!    motion, step penalty, proximity delivery, step budget;
//! 2. [`ForagingAgent::on_collision`]: once for each contact that started
//!    this tick.
//!
//! Pickup while carrying and delivery while empty are silent no-ops: they
//! are the expected outcome when proximity and contact checks race within a
//! tick.  Once an episode has ended every call is ignored until
//! [`ForagingAgent::begin_episode`].

pub mod action;
pub mod agent;
pub mod collision;
pub mod config;
pub mod env;
pub mod error;
pub mod observation;

#[cfg(test)]
mod tests;

pub use action::{Decision, ForwardIntent, KeyState, TurnDirection};
pub use agent::{
    AgentContext, AgentState, DECISION_PERIOD, EndReason, EpisodeStatus, ForagingAgent,
    ForagingAgentBuilder, StepReport, TickOutcome,
};
pub use collision::{Collision, CollisionOutcome};
pub use config::AgentConfig;
pub use env::{
    Area, DecisionProvider, EFFECT_TTL_SECS, EffectKind, EffectSink, EnvironmentParams,
    HeuristicProvider, NoEffects,
};
pub use error::{AgentError, AgentResult};
pub use observation::{OBSERVATION_SIZE, Observation};
