//! Simulation observer trait for progress reporting and data collection.

use forage_agent::EndReason;
use forage_core::{EntityId, Tick};

/// What an agent achieved in one finished episode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// 1-based episode counter of the agent.
    pub episode:           u32,
    /// Tick during which the episode ended.
    pub end_tick:          Tick,
    pub steps:             u32,
    pub cumulative_reward: f32,
    pub reason:            EndReason,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: success counter
///
/// ```rust,ignore
/// struct Successes(u32);
///
/// impl SimObserver for Successes {
///     fn on_episode_end(&mut self, _agent: EntityId, summary: &EpisodeSummary) {
///         if summary.reason == EndReason::ResourcesExhausted {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `contacts` is the number of collision events dispatched to agents
    /// this tick.
    fn on_tick_end(&mut self, _tick: Tick, _contacts: usize) {}

    /// Called once for every episode that ended, in the tick it ended.
    /// `agent` is the agent's body id.
    fn on_episode_end(&mut self, _agent: EntityId, _summary: &EpisodeSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
