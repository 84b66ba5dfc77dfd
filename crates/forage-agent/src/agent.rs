//! The `ForagingAgent`: decision cadence, motion, inventory and reward.

use forage_core::{AreaId, EntityId, Transform, Vec3};
use tracing::{debug, info};

use crate::env::EFFECT_TTL_SECS;
use crate::{
    AgentConfig, AgentError, AgentResult, Area, Collision, CollisionOutcome, Decision,
    DecisionProvider, EffectKind, EffectSink, EnvironmentParams, Observation,
};

/// A new decision is requested every this many processed steps.
pub const DECISION_PERIOD: u32 = 5;

const PICKUP_REWARD:   f32 = 1.0;
const DELIVERY_REWARD: f32 = 1.0;
const HAZARD_REWARD:   f32 = -4.0;

/// Height of the acknowledgment marker above the target.
const ACK_OFFSET: Vec3 = Vec3::Y;

// ── Episode bookkeeping ───────────────────────────────────────────────────────

/// Why an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Touched a hazard.
    Hazard,
    /// A delivery left the area without resources (success).
    ResourcesExhausted,
    /// `max_steps` steps were processed.
    StepBudget,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::Hazard             => "hazard",
            EndReason::ResourcesExhausted => "resources_exhausted",
            EndReason::StepBudget         => "step_budget",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// `begin_episode` has never been called.
    NotStarted,
    Running,
    Ended(EndReason),
}

/// Inventory/termination state derived from the agent's fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// Running with an empty slot.
    Normal,
    /// Running and holding one resource.
    Carrying,
    /// The episode is over (or has not begun); nothing is processed.
    Terminated,
}

/// Result of one [`ForagingAgent::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The episode is not running; nothing happened.
    Idle,
    Stepped(StepReport),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// A fresh decision was requested this step.
    pub decided:   bool,
    /// The proximity check delivered a resource.
    pub delivered: bool,
    /// Set when this step ended the episode.
    pub ended:     Option<EndReason>,
}

/// Collaborators lent to the forager for one call.
pub struct AgentContext<'a> {
    pub area:    &'a mut dyn Area,
    pub effects: &'a mut dyn EffectSink,
}

impl<'a> AgentContext<'a> {
    #[inline]
    pub fn new(area: &'a mut dyn Area, effects: &'a mut dyn EffectSink) -> Self {
        Self { area, effects }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Wires a forager to its area and physics body.
///
/// Both handles are required; a forager without them is a configuration
/// error, surfaced at build time.
pub struct ForagingAgentBuilder {
    config: AgentConfig,
    area:   Option<AreaId>,
    body:   Option<EntityId>,
}

impl ForagingAgentBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self { config, area: None, body: None }
    }

    pub fn area(mut self, area: AreaId) -> Self {
        self.area = Some(area);
        self
    }

    pub fn body(mut self, body: EntityId) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> AgentResult<ForagingAgent> {
        self.config.validate()?;
        let area = self.area.ok_or(AgentError::MissingCollaborator("area"))?;
        let body = self.body.ok_or(AgentError::MissingCollaborator("body"))?;
        Ok(ForagingAgent {
            config:            self.config,
            area,
            body,
            has_resource:      false,
            delivery_radius:   0.0,
            pending:           Decision::IDLE,
            step_count:        0,
            reward:            0.0,
            cumulative_reward: 0.0,
            tick_event_reward: 0.0,
            status:            EpisodeStatus::NotStarted,
            episodes:          0,
        })
    }
}

// ── ForagingAgent ─────────────────────────────────────────────────────────────

/// A learning forager: collects one resource at a time and delivers it to the
/// area's dependent target.
///
/// State machine: `Normal → Carrying` on pickup, `Carrying → Normal` on
/// delivery, either → `Terminated` on hazard contact, on a delivery that
/// exhausts the area, or when the step budget runs out.
#[derive(Clone, Debug)]
pub struct ForagingAgent {
    config:            AgentConfig,
    area:              AreaId,
    body:              EntityId,
    has_resource:      bool,
    delivery_radius:   f32,
    pending:           Decision,
    step_count:        u32,
    /// Reward since the learning runtime last drained it.
    reward:            f32,
    cumulative_reward: f32,
    /// Reward granted by pickups/deliveries since the current tick began.
    tick_event_reward: f32,
    status:            EpisodeStatus,
    episodes:          u32,
}

impl ForagingAgent {
    pub fn builder(config: AgentConfig) -> ForagingAgentBuilder {
        ForagingAgentBuilder::new(config)
    }

    // ── Episode lifecycle ─────────────────────────────────────────────────

    /// Start a fresh episode: empty the slot, reset the area layout, and
    /// re-read the delivery radius.
    pub fn begin_episode(&mut self, area: &mut dyn Area, params: &EnvironmentParams) {
        self.has_resource = false;
        area.reset_layout();
        self.delivery_radius = params.feed_radius;

        self.pending = Decision::IDLE;
        self.step_count = 0;
        self.reward = 0.0;
        self.cumulative_reward = 0.0;
        self.tick_event_reward = 0.0;
        self.status = EpisodeStatus::Running;
        self.episodes += 1;

        debug!(body = %self.body, episode = self.episodes, delivery_radius = self.delivery_radius, "episode started");
    }

    fn end_episode(&mut self, reason: EndReason) {
        self.status = EpisodeStatus::Ended(reason);
        info!(
            body = %self.body,
            episode = self.episodes,
            steps = self.step_count,
            reward = self.cumulative_reward,
            %reason,
            "episode ended",
        );
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// The 8-value observation for the current state.
    #[inline]
    pub fn observe(&self, body: &Transform, target: Vec3) -> Observation {
        Observation::collect(self.has_resource, body, target)
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Process one tick of `dt` seconds.
    ///
    /// Every [`DECISION_PERIOD`]-th step asks `decisions` for a new action;
    /// the other steps re-apply the pending one.  Motion is applied, the step
    /// penalty charged, and then a carrying forager within the delivery
    /// radius of the target delivers.
    pub fn tick(
        &mut self,
        body:      &mut Transform,
        dt:        f32,
        decisions: &mut dyn DecisionProvider,
        ctx:       &mut AgentContext<'_>,
    ) -> TickOutcome {
        if self.status != EpisodeStatus::Running {
            return TickOutcome::Idle;
        }
        self.tick_event_reward = 0.0;

        let decided = self.step_count % DECISION_PERIOD == 0;
        if decided {
            let observation = self.observe(body, ctx.area.target_position());
            self.pending = decisions.request_decision(&observation);
        }

        self.apply_motion(body, dt);
        let penalty = self.config.step_penalty();
        if penalty != 0.0 {
            self.add_reward(penalty);
        }
        self.step_count += 1;

        let mut delivered = false;
        if body.distance_to(ctx.area.target_position()) < self.delivery_radius {
            delivered = self.try_deliver(ctx);
        }

        if self.status == EpisodeStatus::Running
            && self.config.max_steps > 0
            && self.step_count >= self.config.max_steps
        {
            self.end_episode(EndReason::StepBudget);
        }

        let ended = match self.status {
            EpisodeStatus::Ended(reason) => Some(reason),
            _ => None,
        };
        TickOutcome::Stepped(StepReport { decided, delivered, ended })
    }

    fn apply_motion(&self, body: &mut Transform, dt: f32) {
        let Decision { forward, turn } = self.pending;
        let advance = forward.factor() * self.config.move_speed * dt;
        if advance != 0.0 {
            let heading = body.forward();
            body.translate(heading * advance);
        }
        body.yaw_degrees(turn.sign() * self.config.turn_speed * dt);
    }

    // ── Collisions ────────────────────────────────────────────────────────

    /// Handle a contact reported by the host.
    pub fn on_collision(&mut self, collision: Collision, ctx: &mut AgentContext<'_>) -> CollisionOutcome {
        if self.status != EpisodeStatus::Running {
            return CollisionOutcome::Ignored;
        }
        match collision {
            Collision::Resource(resource) => {
                if self.has_resource {
                    debug!(body = %self.body, %resource, "already carrying; pickup ignored");
                    return CollisionOutcome::Ignored;
                }
                self.has_resource = true;
                ctx.area.remove_resource(resource);
                self.grant_event_reward(PICKUP_REWARD);
                debug!(body = %self.body, %resource, "picked up resource");
                CollisionOutcome::PickedUp(resource)
            }
            Collision::DependentTarget => {
                if self.try_deliver(ctx) {
                    CollisionOutcome::Delivered
                } else {
                    CollisionOutcome::Ignored
                }
            }
            Collision::Hazard => {
                // The hazard's reward replaces whatever this tick's events
                // already granted.
                let rollback = self.tick_event_reward;
                self.add_reward(HAZARD_REWARD - rollback);
                self.tick_event_reward = HAZARD_REWARD;
                self.end_episode(EndReason::Hazard);
                CollisionOutcome::Caught
            }
            Collision::Other => CollisionOutcome::Ignored,
        }
    }

    /// Deliver the held resource, if any.  Returns `true` when a delivery
    /// happened.
    fn try_deliver(&mut self, ctx: &mut AgentContext<'_>) -> bool {
        if !self.has_resource {
            return false;
        }
        self.has_resource = false;

        let target = ctx.area.target_position();
        ctx.effects.spawn(EffectKind::DeliveredResource, target, EFFECT_TTL_SECS);
        ctx.effects.spawn(EffectKind::Acknowledgment, target + ACK_OFFSET, EFFECT_TTL_SECS);
        self.grant_event_reward(DELIVERY_REWARD);

        let remaining = ctx.area.remaining_resources();
        debug!(body = %self.body, remaining, "delivered resource");
        if remaining == 0 {
            self.end_episode(EndReason::ResourcesExhausted);
        }
        true
    }

    // ── Reward ────────────────────────────────────────────────────────────

    #[inline]
    fn add_reward(&mut self, amount: f32) {
        self.reward += amount;
        self.cumulative_reward += amount;
    }

    #[inline]
    fn grant_event_reward(&mut self, amount: f32) {
        self.add_reward(amount);
        self.tick_event_reward += amount;
    }

    /// Drain the reward accumulated since the last call.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::take(&mut self.reward)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Reward accumulated since the last [`take_reward`][Self::take_reward].
    #[inline]
    pub fn reward(&self) -> f32 {
        self.reward
    }

    /// Total reward of the current (or last) episode.
    #[inline]
    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    #[inline]
    pub fn has_resource(&self) -> bool {
        self.has_resource
    }

    #[inline]
    pub fn delivery_radius(&self) -> f32 {
        self.delivery_radius
    }

    /// The decision applied on the current and following non-decision steps.
    #[inline]
    pub fn pending_decision(&self) -> Decision {
        self.pending
    }

    /// Steps processed in the current episode.
    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    #[inline]
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == EpisodeStatus::Running
    }

    pub fn state(&self) -> AgentState {
        match (self.status, self.has_resource) {
            (EpisodeStatus::Running, false) => AgentState::Normal,
            (EpisodeStatus::Running, true)  => AgentState::Carrying,
            _                               => AgentState::Terminated,
        }
    }

    /// Episodes begun since creation.
    #[inline]
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    #[inline]
    pub fn area(&self) -> AreaId {
        self.area
    }

    #[inline]
    pub fn body(&self) -> EntityId {
        self.body
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
