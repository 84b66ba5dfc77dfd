//! The `Sim` struct and its tick loop.

use std::collections::HashSet;

use forage_agent::{
    AgentContext, Area, Collision, DecisionProvider, EnvironmentParams, EpisodeStatus,
    ForagingAgent,
};
use forage_core::{
    AgentRng, EntityId, ForageError, ForageResult, ResourceId, SimClock, SimConfig, Tick,
    Transform, Vec3,
};
use forage_wander::Wanderer;
use tracing::info;

use crate::{AreaLayout, EffectLog, EpisodeSummary, FeedingArea, SimObserver};

// ── Slots ─────────────────────────────────────────────────────────────────────

/// A wanderer bound to its body and its own RNG stream.
pub struct WandererSlot {
    pub body:     EntityId,
    pub wanderer: Wanderer,
    pub(crate) rng: AgentRng,
}

/// A forager bound to its body and its decision source, plus the contact
/// state used for enter detection.
pub struct AgentSlot {
    pub body:  EntityId,
    pub agent: ForagingAgent,
    pub(crate) provider: Box<dyn DecisionProvider>,
    pub(crate) contacts: Contacts,
    /// The current episode's end has been handed to the observer.
    pub(crate) reported: bool,
}

/// Everything an agent overlapped at the end of the previous tick.
#[derive(Default)]
pub(crate) struct Contacts {
    resources: HashSet<ResourceId>,
    target:    bool,
    hazards:   HashSet<EntityId>,
}

/// Sums of contact radii, copied out of the layout once per tick.
#[derive(Copy, Clone)]
struct Reach {
    resource: f32,
    target:   f32,
    hazard:   f32,
}

impl Reach {
    fn from_layout(layout: &AreaLayout) -> Self {
        Self {
            resource: layout.agent_radius + layout.resource_radius,
            target:   layout.agent_radius + layout.target_radius,
            hazard:   layout.agent_radius + layout.hazard_radius,
        }
    }
}

#[inline]
fn overlaps(a: Vec3, b: Vec3, reach: f32) -> bool {
    a.distance_squared(b) < reach * reach
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The reference host.
///
/// `Sim` owns every body transform, the wanderers, the foragers with their
/// decision providers, and one [`FeedingArea`].  Each tick runs six phases:
///
/// 1. **Episodes**: foragers that are fresh or whose episode ended begin a
///    new one; their bodies are placed in the area's spawn sector.
/// 2. **Wanderers**: every wanderer advances (in parallel with the
///    `parallel` feature).
/// 3. **Agents**: every running forager ticks (decision, motion, penalty,
///    proximity delivery, step budget).
/// 4. **Contacts**: sphere overlaps between each forager and resources, the
///    target and wanderers.  Only contacts that *start* this tick are
///    dispatched, in the order resource, target, hazard.
/// 5. **Report**: episodes that ended this tick go to the observer.
/// 6. **Effects**: markers whose lifetime elapsed are removed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and maps to seconds.
    pub clock: SimClock,

    /// Body transforms, indexed by `EntityId`.
    pub bodies: Vec<Transform>,

    pub area: FeedingArea,

    /// Read by every forager when its episode begins.  Changing it takes
    /// effect at the next reset.
    pub params: EnvironmentParams,

    pub effects: EffectLog,

    pub(crate) wanderers: Vec<WandererSlot>,
    pub(crate) agents:    Vec<AgentSlot>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            agents = self.agents.len(),
            wanderers = self.wanderers.len(),
            start = %self.clock.current_tick,
            end = %self.config.end_tick(),
            "simulation started",
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(clock = %self.clock, "simulation finished");
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    pub fn body(&self, id: EntityId) -> ForageResult<&Transform> {
        self.bodies.get(id.index()).ok_or(ForageError::EntityNotFound(id))
    }

    /// Foragers in registration order.
    pub fn agents(&self) -> impl Iterator<Item = &ForagingAgent> {
        self.agents.iter().map(|s| &s.agent)
    }

    /// The forager driving body `id`, if any.
    pub fn agent(&self, id: EntityId) -> Option<&ForagingAgent> {
        self.agents.iter().find(|s| s.body == id).map(|s| &s.agent)
    }

    pub fn wanderers(&self) -> &[WandererSlot] {
        &self.wanderers
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let contacts = self.process_tick(now, observer);
        observer.on_tick_end(now, contacts);
        self.clock.advance();
    }

    /// One tick.  Returns the number of collision events dispatched.
    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let now_secs = self.clock.secs_at(now);
        let dt = self.clock.tick_duration_secs;

        // ── Phase 1: begin episodes ───────────────────────────────────────
        self.begin_pending_episodes();

        // ── Phase 2: wanderers ────────────────────────────────────────────
        self.tick_wanderers(now_secs, dt);

        // ── Phase 3: agents ───────────────────────────────────────────────
        self.effects.set_now(now_secs);
        for slot in &mut self.agents {
            let body = &mut self.bodies[slot.body.index()];
            let mut ctx = AgentContext::new(&mut self.area, &mut self.effects);
            slot.agent.tick(body, dt, slot.provider.as_mut(), &mut ctx);
        }

        // ── Phase 4: contacts ─────────────────────────────────────────────
        //
        // Agents are handled one after another so a resource taken by an
        // earlier agent is already gone when a later one is checked.
        let reach = Reach::from_layout(self.area.layout());
        let mut dispatched = 0;
        for slot in &mut self.agents {
            dispatched += dispatch_contacts(
                slot, &self.bodies, &self.wanderers, reach, &mut self.area, &mut self.effects,
            );
        }

        // ── Phase 5: report ended episodes ────────────────────────────────
        for slot in &mut self.agents {
            if slot.reported {
                continue;
            }
            if let EpisodeStatus::Ended(reason) = slot.agent.status() {
                let summary = EpisodeSummary {
                    episode:           slot.agent.episodes(),
                    end_tick:          now,
                    steps:             slot.agent.step_count(),
                    cumulative_reward: slot.agent.cumulative_reward(),
                    reason,
                };
                observer.on_episode_end(slot.body, &summary);
                slot.reported = true;
            }
        }

        // ── Phase 6: expire effects ───────────────────────────────────────
        self.effects.expire(now_secs);

        dispatched
    }

    fn begin_pending_episodes(&mut self) {
        for slot in &mut self.agents {
            if slot.agent.is_running() {
                continue;
            }
            slot.agent.begin_episode(&mut self.area, &self.params);

            let centre = self.area.layout().centre;
            let spawn = self.area.layout().agent_spawn;
            let mut body = Transform::at(self.area.sample_random_point(centre, &spawn));
            body.yaw_degrees(self.area.random_yaw());
            self.bodies[slot.body.index()] = body;

            slot.contacts = Contacts::default();
            slot.reported = false;
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn tick_wanderers(&mut self, now: f32, dt: f32) {
        for slot in &mut self.wanderers {
            let body = &mut self.bodies[slot.body.index()];
            slot.wanderer.tick(body, now, dt, &mut slot.rng);
        }
    }

    #[cfg(feature = "parallel")]
    fn tick_wanderers(&mut self, now: f32, dt: f32) {
        use rayon::prelude::*;

        // Bodies are read in parallel and written back sequentially; every
        // wanderer owns a distinct body (checked by the builder).
        let bodies = &self.bodies;
        let moved: Vec<(EntityId, Transform)> = self
            .wanderers
            .par_iter_mut()
            .map(|slot| {
                let mut body = bodies[slot.body.index()];
                slot.wanderer.tick(&mut body, now, dt, &mut slot.rng);
                (slot.body, body)
            })
            .collect();

        for (id, body) in moved {
            self.bodies[id.index()] = body;
        }
    }
}

// ── Contact detection ─────────────────────────────────────────────────────────

/// Detect the contacts `slot` starts this tick and hand them to its agent.
/// Returns the number of events dispatched.
fn dispatch_contacts(
    slot:      &mut AgentSlot,
    bodies:    &[Transform],
    wanderers: &[WandererSlot],
    reach:     Reach,
    area:      &mut FeedingArea,
    effects:   &mut EffectLog,
) -> usize {
    if !slot.agent.is_running() {
        slot.contacts = Contacts::default();
        return 0;
    }
    let position = bodies[slot.body.index()].position;

    let resources: HashSet<ResourceId> = area
        .resources()
        .iter()
        .filter(|r| overlaps(position, r.position, reach.resource))
        .map(|r| r.id)
        .collect();
    let target = overlaps(position, area.target_position(), reach.target);
    let hazards: HashSet<EntityId> = wanderers
        .iter()
        .map(|w| w.body)
        .filter(|&b| overlaps(position, bodies[b.index()].position, reach.hazard))
        .collect();

    let mut new_resources: Vec<ResourceId> =
        resources.difference(&slot.contacts.resources).copied().collect();
    new_resources.sort_unstable();
    let mut new_hazards: Vec<EntityId> =
        hazards.difference(&slot.contacts.hazards).copied().collect();
    new_hazards.sort_unstable();

    let mut events: Vec<Collision> = new_resources.into_iter().map(Collision::Resource).collect();
    if target && !slot.contacts.target {
        events.push(Collision::DependentTarget);
    }
    events.extend(new_hazards.into_iter().map(|_| Collision::Hazard));

    slot.contacts = Contacts { resources, target, hazards };

    let mut ctx = AgentContext::new(area, effects);
    for &event in &events {
        slot.agent.on_collision(event, &mut ctx);
    }
    events.len()
}
