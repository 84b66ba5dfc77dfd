//! Plain data row types written by output backends.

use forage_agent::EndReason;

/// One finished episode of one forager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeRow {
    /// The forager's body id.
    pub agent_id:          u32,
    pub episode:           u32,
    pub end_tick:          u64,
    pub steps:             u32,
    pub cumulative_reward: f32,
    pub end_reason:        EndReason,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub sim_secs: f32,
    /// Collision events dispatched to foragers this tick.
    pub contacts: u64,
}
