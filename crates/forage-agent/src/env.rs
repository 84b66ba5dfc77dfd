//! Collaborator traits the forager is driven through.
//!
//! The forager never owns the world: the area, the decision source and the
//! effect spawner are lent to it for the duration of a call.  Hosts implement
//! these traits; tests implement them with small scripted doubles.

use forage_core::{ResourceId, Sector, Vec3};

use crate::{Decision, KeyState, Observation};

/// How long transient delivery markers live, in simulation seconds.
pub const EFFECT_TTL_SECS: f32 = 4.0;

// ── Area ──────────────────────────────────────────────────────────────────────

/// The episode manager that owns resources, obstacles and the dependent
/// target.
///
/// All calls are synchronous: when `reset_layout` returns the new layout is
/// in place and the next tick sees it.
pub trait Area {
    /// Re-seed resources and obstacles for a new episode.
    fn reset_layout(&mut self);

    /// Remove one resource instance.  Unknown or already-removed ids are
    /// ignored.
    fn remove_resource(&mut self, resource: ResourceId);

    /// Resources still available in the area.
    fn remaining_resources(&self) -> usize;

    /// Current position of the dependent target.
    fn target_position(&self) -> Vec3;

    /// Random point in `sector` around `anchor`.
    ///
    /// Hosts use this to place bodies inside the area.  `Wanderer` draws its
    /// destinations with `forage_core::sample_in_sector` over its own RNG
    /// stream instead, which yields the same distribution without borrowing
    /// the area, so wanderers can be updated in parallel.
    fn sample_random_point(&mut self, anchor: Vec3, sector: &Sector) -> Vec3;
}

// ── Decisions ─────────────────────────────────────────────────────────────────

/// Source of discrete decisions (a trained policy, a trainer, a human).
///
/// Called synchronously on decision ticks; the returned action is applied in
/// the same tick.
pub trait DecisionProvider {
    fn request_decision(&mut self, observation: &Observation) -> Decision;
}

impl<F> DecisionProvider for F
where
    F: FnMut(&Observation) -> Decision,
{
    fn request_decision(&mut self, observation: &Observation) -> Decision {
        self(observation)
    }
}

/// Manual control: polls a key-state source and ignores the observation.
pub struct HeuristicProvider<K: FnMut() -> KeyState> {
    keys: K,
}

impl<K: FnMut() -> KeyState> HeuristicProvider<K> {
    pub fn new(keys: K) -> Self {
        Self { keys }
    }
}

impl<K: FnMut() -> KeyState> DecisionProvider for HeuristicProvider<K> {
    fn request_decision(&mut self, _observation: &Observation) -> Decision {
        (self.keys)().to_decision()
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Kinds of transient markers the forager asks the host to show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// The delivered resource, dropped at the target.
    DeliveredResource,
    /// Acknowledgment marker shown above the target.
    Acknowledgment,
}

/// Fire-and-forget effect spawner.  The forager never tracks what it spawns;
/// the host expires each effect after `ttl_secs`.
pub trait EffectSink {
    fn spawn(&mut self, kind: EffectKind, position: Vec3, ttl_secs: f32);
}

/// An [`EffectSink`] that drops every request.
pub struct NoEffects;

impl EffectSink for NoEffects {
    fn spawn(&mut self, _kind: EffectKind, _position: Vec3, _ttl_secs: f32) {}
}

// ── Environment parameters ────────────────────────────────────────────────────

/// Per-episode parameters injected by the host at reset.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvironmentParams {
    /// Proximity within which a carrying forager delivers without touching
    /// the target.  `0` disables proximity delivery.
    pub feed_radius: f32,
}

impl EnvironmentParams {
    pub fn with_feed_radius(feed_radius: f32) -> Self {
        Self { feed_radius }
    }
}
