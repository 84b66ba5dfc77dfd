//! Decision sources shipped with the reference host.

use forage_agent::{Decision, DecisionProvider, Observation};
use forage_core::{AgentRng, EntityId};

/// Raw action space sizes: `forward ∈ {0, 1}`, `turn ∈ {0, 1, 2}`.
const FORWARD_CHOICES: u8 = 2;
const TURN_CHOICES: u8 = 3;

/// Picks uniformly among the six discrete actions, ignoring the observation.
///
/// Samples the same integer pair a learning runtime would emit and decodes it
/// with [`Decision::from_raw`].  Seeded per body, so a run with the same
/// global seed replays exactly.
pub struct RandomProvider {
    rng: AgentRng,
}

impl RandomProvider {
    pub fn new(global_seed: u64, body: EntityId) -> Self {
        Self { rng: AgentRng::new(global_seed, body) }
    }

    /// Draw one raw `(forward, turn)` pair.
    pub fn sample_raw(&mut self) -> (u8, u8) {
        (self.rng.gen_range(0..FORWARD_CHOICES), self.rng.gen_range(0..TURN_CHOICES))
    }
}

impl DecisionProvider for RandomProvider {
    fn request_decision(&mut self, _observation: &Observation) -> Decision {
        let (forward, turn) = self.sample_raw();
        // Both components are drawn inside the valid ranges.
        Decision::from_raw(forward, turn).unwrap_or(Decision::IDLE)
    }
}
