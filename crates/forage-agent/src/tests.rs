//! Unit tests for forage-agent.

use std::collections::VecDeque;

use forage_core::{AreaId, EntityId, ResourceId, Sector, Transform, Vec3, sample_in_sector};

use crate::{
    AgentConfig, AgentContext, Area, Decision, DecisionProvider, EffectKind, EffectSink,
    EnvironmentParams, ForagingAgent, ForwardIntent, Observation, TurnDirection,
};

// ── Test doubles ──────────────────────────────────────────────────────────────

/// An area with a fixed list of resources and a stationary target.
struct ScriptedArea {
    resources: Vec<ResourceId>,
    removed:   Vec<ResourceId>,
    target:    Vec3,
    resets:    u32,
    initial:   usize,
}

impl ScriptedArea {
    fn new(resource_count: u32, target: Vec3) -> Self {
        Self {
            resources: (0..resource_count).map(ResourceId).collect(),
            removed:   Vec::new(),
            target,
            resets:    0,
            initial:   resource_count as usize,
        }
    }
}

impl Area for ScriptedArea {
    fn reset_layout(&mut self) {
        self.resets += 1;
        self.resources = (0..self.initial as u32).map(ResourceId).collect();
        self.removed.clear();
    }

    fn remove_resource(&mut self, resource: ResourceId) {
        self.removed.push(resource);
        self.resources.retain(|&r| r != resource);
    }

    fn remaining_resources(&self) -> usize {
        self.resources.len()
    }

    fn target_position(&self) -> Vec3 {
        self.target
    }

    fn sample_random_point(&mut self, anchor: Vec3, sector: &Sector) -> Vec3 {
        sample_in_sector(&mut forage_core::SimRng::new(0), anchor, sector)
    }
}

#[derive(Default)]
struct RecordingEffects(Vec<(EffectKind, Vec3, f32)>);

impl EffectSink for RecordingEffects {
    fn spawn(&mut self, kind: EffectKind, position: Vec3, ttl_secs: f32) {
        self.0.push((kind, position, ttl_secs));
    }
}

/// Hands out queued decisions (idle once empty) and records every
/// observation it was shown.
#[derive(Default)]
struct ScriptedProvider {
    queue: VecDeque<Decision>,
    seen:  Vec<Observation>,
}

impl ScriptedProvider {
    fn with(decisions: &[Decision]) -> Self {
        Self { queue: decisions.iter().copied().collect(), seen: Vec::new() }
    }
}

impl DecisionProvider for ScriptedProvider {
    fn request_decision(&mut self, observation: &Observation) -> Decision {
        self.seen.push(*observation);
        self.queue.pop_front().unwrap_or(Decision::IDLE)
    }
}

const FORWARD: Decision = Decision::new(ForwardIntent::Move, TurnDirection::None);
const TURN_POS: Decision = Decision::new(ForwardIntent::Stay, TurnDirection::TurnPositive);

fn agent_with(config: AgentConfig) -> ForagingAgent {
    ForagingAgent::builder(config)
        .area(AreaId(0))
        .body(EntityId(0))
        .build()
        .unwrap()
}

/// A running agent (episode begun) with the default config.
fn running_agent(area: &mut ScriptedArea, feed_radius: f32) -> ForagingAgent {
    let mut agent = agent_with(AgentConfig::default());
    agent.begin_episode(area, &EnvironmentParams::with_feed_radius(feed_radius));
    agent
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use crate::AgentError;

    use super::*;

    #[test]
    fn missing_area_is_fatal() {
        let result = ForagingAgent::builder(AgentConfig::default()).body(EntityId(1)).build();
        assert!(matches!(result, Err(AgentError::MissingCollaborator("area"))));
    }

    #[test]
    fn missing_body_is_fatal() {
        let result = ForagingAgent::builder(AgentConfig::default()).area(AreaId(0)).build();
        assert!(matches!(result, Err(AgentError::MissingCollaborator("body"))));
    }

    #[test]
    fn negative_speed_rejected() {
        let cfg = AgentConfig { move_speed: -1.0, ..AgentConfig::default() };
        let result = ForagingAgent::builder(cfg).area(AreaId(0)).body(EntityId(0)).build();
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[test]
    fn fresh_agent_is_not_started() {
        let agent = agent_with(AgentConfig::default());
        assert_eq!(agent.status(), crate::EpisodeStatus::NotStarted);
        assert_eq!(agent.state(), crate::AgentState::Terminated);
        assert_eq!(agent.pending_decision(), Decision::IDLE);
        assert_eq!(agent.body(), EntityId(0));
        assert_eq!(agent.area(), AreaId(0));
    }
}

// ── Decisions ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use crate::{AgentError, HeuristicProvider, KeyState};

    use super::*;

    #[test]
    fn turn_table() {
        assert_eq!(Decision::from_raw(0, 0).unwrap().turn, TurnDirection::None);
        assert_eq!(Decision::from_raw(0, 1).unwrap().turn, TurnDirection::TurnNegative);
        assert_eq!(Decision::from_raw(0, 2).unwrap().turn, TurnDirection::TurnPositive);
        assert_eq!(TurnDirection::TurnNegative.sign(), -1.0);
        assert_eq!(TurnDirection::TurnPositive.sign(), 1.0);
        assert_eq!(TurnDirection::None.sign(), 0.0);
    }

    #[test]
    fn out_of_range_actions_rejected() {
        assert!(matches!(Decision::from_raw(2, 0), Err(AgentError::InvalidAction { forward: 2, turn: 0 })));
        assert!(matches!(Decision::from_raw(1, 3), Err(AgentError::InvalidAction { forward: 1, turn: 3 })));
    }

    #[test]
    fn raw_encoding_is_preserved() {
        let d = Decision::from_raw(1, 2).unwrap();
        assert_eq!(d.forward, ForwardIntent::Move);
        assert_eq!(d.to_raw(), (1, 2));
    }

    #[test]
    fn keys_map_to_decisions() {
        let keys = KeyState { forward: true, left: false, right: true };
        assert_eq!(keys.to_decision(), Decision::new(ForwardIntent::Move, TurnDirection::TurnPositive));

        let both = KeyState { forward: false, left: true, right: true };
        assert_eq!(both.to_decision(), Decision::new(ForwardIntent::Stay, TurnDirection::TurnNegative));

        assert_eq!(KeyState::default().to_decision(), Decision::IDLE);
    }

    #[test]
    fn heuristic_provider_polls_keys() {
        let mut presses = vec![
            KeyState { forward: true, ..KeyState::default() },
            KeyState { left: true, ..KeyState::default() },
        ]
        .into_iter();
        let mut provider = HeuristicProvider::new(move || presses.next().unwrap_or_default());
        let obs = Observation::default();
        assert_eq!(provider.request_decision(&obs), FORWARD);
        assert_eq!(provider.request_decision(&obs).turn, TurnDirection::TurnNegative);
        assert_eq!(provider.request_decision(&obs), Decision::IDLE);
    }

    #[test]
    fn closures_are_providers() {
        let mut always_forward = |_: &Observation| FORWARD;
        assert_eq!(always_forward.request_decision(&Observation::default()), FORWARD);
    }
}

// ── Observation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod observation_tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn layout_is_order_stable() {
        let body = Transform::default();
        let obs = Observation::collect(true, &body, Vec3::new(3.0, 0.0, 4.0));
        let expected = [1.0, 5.0, 0.6, 0.0, 0.8, 0.0, 0.0, 1.0];
        for (got, want) in obs.as_slice().iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
        }
        assert!(obs.has_resource());
        assert_abs_diff_eq!(obs.target_distance(), 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(obs.forward(), Vec3::Z, epsilon = 1e-6);
    }

    #[test]
    fn coincident_target_has_zero_direction() {
        let body = Transform::at(Vec3::ONE);
        let obs = Observation::collect(false, &body, Vec3::ONE);
        assert_eq!(obs.target_distance(), 0.0);
        assert_eq!(obs.target_direction(), Vec3::ZERO);
        assert!(!obs.has_resource());
    }

    #[test]
    fn agent_observes_its_inventory() {
        let mut area = ScriptedArea::new(2, Vec3::new(0.0, 0.0, 10.0));
        let mut agent = running_agent(&mut area, 0.0);
        let body = Transform::default();
        assert_eq!(agent.observe(&body, area.target).0[0], 0.0);

        let mut effects = RecordingEffects::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);
        agent.on_collision(crate::Collision::Resource(ResourceId(0)), &mut ctx);
        assert_eq!(agent.observe(&body, Vec3::ZERO).0[0], 1.0);
    }
}

// ── Episode lifecycle ─────────────────────────────────────────────────────────

#[cfg(test)]
mod episode_tests {
    use crate::{AgentState, Collision, EpisodeStatus, TickOutcome};

    use super::*;

    #[test]
    fn begin_episode_resets_area_and_reads_radius() {
        let mut area = ScriptedArea::new(3, Vec3::ZERO);
        let mut agent = agent_with(AgentConfig::default());
        agent.begin_episode(&mut area, &EnvironmentParams::with_feed_radius(1.5));
        assert_eq!(area.resets, 1);
        assert_eq!(agent.delivery_radius(), 1.5);
        assert_eq!(agent.state(), AgentState::Normal);
        assert_eq!(agent.episodes(), 1);
    }

    #[test]
    fn radius_defaults_to_zero() {
        let mut area = ScriptedArea::new(3, Vec3::ZERO);
        let mut agent = agent_with(AgentConfig::default());
        agent.begin_episode(&mut area, &EnvironmentParams::default());
        assert_eq!(agent.delivery_radius(), 0.0);
    }

    #[test]
    fn tick_before_first_episode_is_idle() {
        let mut area = ScriptedArea::new(1, Vec3::ZERO);
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::with(&[FORWARD]);
        let mut agent = agent_with(AgentConfig::default());
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);
        assert_eq!(agent.tick(&mut body, 0.1, &mut provider, &mut ctx), TickOutcome::Idle);
        assert!(provider.seen.is_empty());
        assert_eq!(body, Transform::default());
    }

    #[test]
    fn new_episode_clears_carry_and_termination() {
        let mut area = ScriptedArea::new(2, Vec3::new(0.0, 0.0, 50.0));
        let mut agent = running_agent(&mut area, 0.0);
        let mut effects = RecordingEffects::default();
        {
            let mut ctx = AgentContext::new(&mut area, &mut effects);
            agent.on_collision(Collision::Resource(ResourceId(1)), &mut ctx);
            agent.on_collision(Collision::Hazard, &mut ctx);
        }
        assert_eq!(agent.state(), AgentState::Terminated);
        assert!(agent.has_resource());

        agent.begin_episode(&mut area, &EnvironmentParams::with_feed_radius(3.0));
        assert_eq!(agent.status(), EpisodeStatus::Running);
        assert!(!agent.has_resource());
        assert_eq!(agent.delivery_radius(), 3.0);
        assert_eq!(agent.cumulative_reward(), 0.0);
        assert_eq!(agent.step_count(), 0);
        assert_eq!(area.remaining_resources(), 2);
    }
}

// ── Decision cadence & motion ─────────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use approx::assert_abs_diff_eq;

    use crate::{DECISION_PERIOD, TickOutcome};

    use super::*;

    #[test]
    fn decisions_requested_every_fifth_step() {
        let mut area = ScriptedArea::new(1, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::with(&[FORWARD, TURN_POS, FORWARD]);
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        let mut applied = Vec::new();
        for step in 0..11u32 {
            let outcome = agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
            let TickOutcome::Stepped(report) = outcome else { panic!("idle at {step}") };
            assert_eq!(report.decided, step % DECISION_PERIOD == 0, "step {step}");
            applied.push(agent.pending_decision());
        }
        assert_eq!(provider.seen.len(), 3);
        assert!(applied[0..5].iter().all(|d| *d == FORWARD));
        assert!(applied[5..10].iter().all(|d| *d == TURN_POS));
        assert_eq!(applied[10], FORWARD);
    }

    #[test]
    fn forward_moves_along_facing() {
        let mut area = ScriptedArea::new(1, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::with(&[FORWARD]);
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        for _ in 0..4 {
            agent.tick(&mut body, 0.1, &mut provider, &mut ctx);
        }
        // 4 ticks * 5 u/s * 0.1 s
        assert_abs_diff_eq!(body.position, Vec3::new(0.0, 0.0, 2.0), epsilon = 1e-5);
        assert_abs_diff_eq!(body.forward(), Vec3::Z, epsilon = 1e-6);
    }

    #[test]
    fn turn_rotates_about_up() {
        let mut area = ScriptedArea::new(1, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::with(&[TURN_POS]);
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        // 180 deg/s for 0.5 s = a quarter turn toward +X.
        agent.tick(&mut body, 0.5, &mut provider, &mut ctx);
        assert_abs_diff_eq!(body.forward(), Vec3::X, epsilon = 1e-5);
        assert_eq!(body.position, Vec3::ZERO);
    }

    #[test]
    fn step_penalty_follows_budget() {
        let mut area = ScriptedArea::new(1, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut budgeted = agent_with(AgentConfig { max_steps: 100, ..AgentConfig::default() });
        let mut unbounded = agent_with(AgentConfig::default());
        budgeted.begin_episode(&mut area, &EnvironmentParams::default());
        unbounded.begin_episode(&mut area, &EnvironmentParams::default());

        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);
        budgeted.tick(&mut body, 0.02, &mut provider, &mut ctx);
        unbounded.tick(&mut body, 0.02, &mut provider, &mut ctx);

        assert_eq!(budgeted.reward(), -1.0 / 100.0);
        assert_eq!(unbounded.reward(), 0.0);
    }

    #[test]
    fn step_budget_ends_episode() {
        let mut area = ScriptedArea::new(1, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = agent_with(AgentConfig { max_steps: 3, ..AgentConfig::default() });
        agent.begin_episode(&mut area, &EnvironmentParams::default());
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        for _ in 0..2 {
            let TickOutcome::Stepped(report) = agent.tick(&mut body, 0.02, &mut provider, &mut ctx) else {
                panic!("idle")
            };
            assert_eq!(report.ended, None);
        }
        let TickOutcome::Stepped(report) = agent.tick(&mut body, 0.02, &mut provider, &mut ctx) else {
            panic!("idle")
        };
        assert_eq!(report.ended, Some(crate::EndReason::StepBudget));
        assert_eq!(agent.tick(&mut body, 0.02, &mut provider, &mut ctx), TickOutcome::Idle);
        assert_abs_diff_eq!(agent.cumulative_reward(), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn take_reward_drains() {
        let mut area = ScriptedArea::new(2, Vec3::new(100.0, 0.0, 0.0));
        let mut effects = RecordingEffects::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut ctx = AgentContext::new(&mut area, &mut effects);
        agent.on_collision(crate::Collision::Resource(ResourceId(0)), &mut ctx);
        assert_eq!(agent.take_reward(), 1.0);
        assert_eq!(agent.take_reward(), 0.0);
        assert_eq!(agent.cumulative_reward(), 1.0);
    }
}

// ── Collisions, pickup & delivery ─────────────────────────────────────────────

#[cfg(test)]
mod collision_tests {
    use crate::{
        AgentState, Collision, CollisionOutcome, EFFECT_TTL_SECS, EndReason, EpisodeStatus,
        StepReport, TickOutcome,
    };

    use super::*;

    #[test]
    fn pickup_sets_carry_and_removes_once() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 20.0));
        let mut effects = RecordingEffects::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        let outcome = agent.on_collision(Collision::Resource(ResourceId(2)), &mut ctx);
        assert_eq!(outcome, CollisionOutcome::PickedUp(ResourceId(2)));
        assert_eq!(agent.state(), AgentState::Carrying);
        assert_eq!(agent.reward(), 1.0);

        // Capacity is one: a second resource is left alone.
        let outcome = agent.on_collision(Collision::Resource(ResourceId(1)), &mut ctx);
        assert_eq!(outcome, CollisionOutcome::Ignored);
        assert_eq!(agent.reward(), 1.0);
        drop(ctx);
        assert_eq!(area.removed, vec![ResourceId(2)]);
        assert_eq!(area.remaining_resources(), 2);
    }

    #[test]
    fn delivery_while_empty_is_noop() {
        let mut area = ScriptedArea::new(1, Vec3::ZERO);
        let mut effects = RecordingEffects::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        let outcome = agent.on_collision(Collision::DependentTarget, &mut ctx);
        assert_eq!(outcome, CollisionOutcome::Ignored);
        assert_eq!(agent.reward(), 0.0);
        drop(ctx);
        assert!(effects.0.is_empty());
    }

    #[test]
    fn proximity_delivery_of_last_resource_ends_episode() {
        let target = Vec3::new(0.0, 0.0, 1.0);
        let mut area = ScriptedArea::new(1, target);
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 2.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        assert_eq!(ctx.area.remaining_resources(), 0);

        let outcome = agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        assert_eq!(
            outcome,
            TickOutcome::Stepped(StepReport {
                decided:   true,
                delivered: true,
                ended:     Some(EndReason::ResourcesExhausted),
            })
        );
        assert!(!agent.has_resource());
        assert_eq!(agent.cumulative_reward(), 2.0);
        assert_eq!(agent.status(), EpisodeStatus::Ended(EndReason::ResourcesExhausted));
        drop(ctx);

        assert_eq!(effects.0, vec![
            (EffectKind::DeliveredResource, target, EFFECT_TTL_SECS),
            (EffectKind::Acknowledgment, target + Vec3::Y, EFFECT_TTL_SECS),
        ]);
    }

    #[test]
    fn outside_radius_does_not_deliver() {
        let mut area = ScriptedArea::new(2, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 2.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        let TickOutcome::Stepped(report) = agent.tick(&mut body, 0.02, &mut provider, &mut ctx) else {
            panic!("idle")
        };
        assert!(!report.delivered);
        assert_eq!(agent.state(), AgentState::Carrying);
    }

    #[test]
    fn target_contact_delivers_and_continues_when_resources_remain() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        let outcome = agent.on_collision(Collision::DependentTarget, &mut ctx);
        assert_eq!(outcome, CollisionOutcome::Delivered);
        assert_eq!(agent.state(), AgentState::Normal);
        assert_eq!(agent.cumulative_reward(), 2.0);
        drop(ctx);
        assert_eq!(effects.0.len(), 2);
    }

    #[test]
    fn hazard_while_carrying_scores_minus_four_and_ends() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        agent.take_reward();

        let outcome = agent.on_collision(Collision::Hazard, &mut ctx);
        assert_eq!(outcome, CollisionOutcome::Caught);
        assert_eq!(agent.take_reward(), -4.0);
        assert_eq!(agent.status(), EpisodeStatus::Ended(EndReason::Hazard));

        // Nothing after termination counts.
        assert_eq!(agent.on_collision(Collision::DependentTarget, &mut ctx), CollisionOutcome::Ignored);
        assert_eq!(agent.on_collision(Collision::Resource(ResourceId(1)), &mut ctx), CollisionOutcome::Ignored);
        assert_eq!(agent.tick(&mut body, 0.02, &mut provider, &mut ctx), TickOutcome::Idle);
        assert_eq!(agent.reward(), 0.0);
        drop(ctx);
        assert!(effects.0.is_empty());
    }

    #[test]
    fn hazard_overrides_same_tick_pickup_reward() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        agent.on_collision(Collision::Hazard, &mut ctx);

        assert_eq!(agent.cumulative_reward(), -4.0);
        drop(ctx);
        // The pickup's side effect on the area stands.
        assert_eq!(area.removed, vec![ResourceId(0)]);
    }

    #[test]
    fn pickup_after_same_tick_hazard_is_ignored() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        assert_eq!(agent.on_collision(Collision::Hazard, &mut ctx), CollisionOutcome::Caught);
        assert_eq!(
            agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx),
            CollisionOutcome::Ignored,
        );

        assert_eq!(agent.cumulative_reward(), -4.0);
        assert!(!agent.has_resource());
        drop(ctx);
        assert!(area.removed.is_empty());
        assert_eq!(area.remaining_resources(), 3);
    }

    #[test]
    fn earlier_tick_rewards_survive_hazard() {
        let mut area = ScriptedArea::new(3, Vec3::new(0.0, 0.0, 5.0));
        let mut effects = RecordingEffects::default();
        let mut provider = ScriptedProvider::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut body = Transform::default();
        let mut ctx = AgentContext::new(&mut area, &mut effects);

        agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        agent.on_collision(Collision::Resource(ResourceId(0)), &mut ctx);
        agent.tick(&mut body, 0.02, &mut provider, &mut ctx);
        agent.on_collision(Collision::Hazard, &mut ctx);

        assert_eq!(agent.cumulative_reward(), -3.0);
    }

    #[test]
    fn other_contacts_are_ignored() {
        let mut area = ScriptedArea::new(1, Vec3::ZERO);
        let mut effects = RecordingEffects::default();
        let mut agent = running_agent(&mut area, 0.0);
        let mut ctx = AgentContext::new(&mut area, &mut effects);
        assert_eq!(agent.on_collision(Collision::Other, &mut ctx), CollisionOutcome::Ignored);
        assert_eq!(agent.state(), AgentState::Normal);
        assert_eq!(agent.reward(), 0.0);
    }
}
