//! Transient markers spawned by agents, expired by simulation time.

use forage_agent::{EffectKind, EffectSink};
use forage_core::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveEffect {
    pub kind:       EffectKind,
    pub position:   Vec3,
    /// Simulation second at which the effect is removed.
    pub expires_at: f32,
}

/// The host's [`EffectSink`].
///
/// The sim stamps the current time with [`set_now`][Self::set_now] before
/// agents run, and calls [`expire`][Self::expire] at the end of every tick.
#[derive(Default)]
pub struct EffectLog {
    now:           f32,
    active:        Vec<ActiveEffect>,
    spawned_total: u64,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set_now(&mut self, now: f32) {
        self.now = now;
    }

    /// Drop every effect whose lifetime has elapsed at `now`.  Returns the
    /// number removed.
    pub fn expire(&mut self, now: f32) -> usize {
        let before = self.active.len();
        self.active.retain(|e| e.expires_at > now);
        before - self.active.len()
    }

    #[inline]
    pub fn active(&self) -> &[ActiveEffect] {
        &self.active
    }

    /// Effects spawned since creation, expired or not.
    #[inline]
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }
}

impl EffectSink for EffectLog {
    fn spawn(&mut self, kind: EffectKind, position: Vec3, ttl_secs: f32) {
        self.active.push(ActiveEffect { kind, position, expires_at: self.now + ttl_secs });
        self.spawned_total += 1;
    }
}
