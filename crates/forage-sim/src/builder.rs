//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use forage_agent::{AgentConfig, DecisionProvider, EnvironmentParams, ForagingAgent};
use forage_core::{AgentRng, AreaId, EntityId, SimConfig, SimRng, Transform};
use forage_wander::{WanderConfig, Wanderer};
use tracing::{info, warn};

use crate::sim::{AgentSlot, Contacts, WandererSlot};
use crate::{AreaLayout, EffectLog, FeedingArea, Sim, SimError, SimResult};

/// RNG stream offset reserved for the area layout.
const AREA_STREAM: u64 = 0;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration
/// - [`AreaLayout`]: placement sectors and contact radii
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                       |
/// |---------------------------|-----------------------------------------------|
/// | `.params(p)`              | `EnvironmentParams::default()` (no proximity) |
/// | `.bodies(v)`              | Default transforms up to the highest used id  |
/// | `.wanderer(body, cfg)`    | none                                          |
/// | `.agent(body, cfg, prov)` | none                                          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AreaLayout::default())
///     .params(EnvironmentParams::with_feed_radius(1.0))
///     .wanderer(EntityId(0), WanderConfig::new(2.0, Vec3::ZERO))
///     .agent(EntityId(1), AgentConfig::default(), RandomProvider::new(42, EntityId(1)))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    layout:    AreaLayout,
    params:    EnvironmentParams,
    bodies:    Option<Vec<Transform>>,
    wanderers: Vec<(EntityId, WanderConfig)>,
    agents:    Vec<(EntityId, AgentConfig, Box<dyn DecisionProvider>)>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, layout: AreaLayout) -> Self {
        Self {
            config,
            layout,
            params:    EnvironmentParams::default(),
            bodies:    None,
            wanderers: Vec::new(),
            agents:    Vec::new(),
        }
    }

    pub fn params(mut self, params: EnvironmentParams) -> Self {
        self.params = params;
        self
    }

    /// Supply initial body transforms, indexed by `EntityId`.
    ///
    /// Agent bodies are re-placed at every episode start, so only wanderer
    /// entries matter in practice.
    pub fn bodies(mut self, bodies: Vec<Transform>) -> Self {
        self.bodies = Some(bodies);
        self
    }

    /// Register a wanderer driving `body`.  It is a hazard to every agent.
    pub fn wanderer(mut self, body: EntityId, config: WanderConfig) -> Self {
        self.wanderers.push((body, config));
        self
    }

    /// Register a forager driving `body`, fed by `provider`.
    pub fn agent<P>(mut self, body: EntityId, config: AgentConfig, provider: P) -> Self
    where
        P: DecisionProvider + 'static,
    {
        self.agents.push((body, config, Box::new(provider)));
        self
    }

    /// Validate inputs, wire every entity to its body and the area, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        // ── Validate configuration ────────────────────────────────────────
        let dt = self.config.tick_duration_secs;
        if !dt.is_finite() || dt <= 0.0 {
            warn!(tick_duration_secs = dt, "rejected simulation config");
            return Err(SimError::Config(format!("tick_duration_secs must be finite and > 0, got {dt}")));
        }
        if let Err(e) = self.layout.validate() {
            warn!(error = %e, "rejected area layout");
            return Err(e);
        }

        // ── Resolve bodies and check ownership ────────────────────────────
        let used: Vec<EntityId> = self
            .wanderers
            .iter()
            .map(|(b, _)| *b)
            .chain(self.agents.iter().map(|(b, _, _)| *b))
            .collect();

        let bodies = match self.bodies {
            Some(b) => b,
            None => {
                let count = used.iter().map(|b| b.index() + 1).max().unwrap_or(0);
                vec![Transform::default(); count]
            }
        };

        let mut owned = HashSet::with_capacity(used.len());
        for &body in &used {
            if body.index() >= bodies.len() {
                return Err(SimError::UnknownBody { body, bodies: bodies.len() });
            }
            if !owned.insert(body) {
                return Err(SimError::DuplicateBody(body));
            }
        }

        // ── Build entities ────────────────────────────────────────────────
        let seed = self.config.seed;
        let mut root_rng = SimRng::new(seed);
        let area = FeedingArea::new(AreaId(0), self.layout, root_rng.child(AREA_STREAM));

        let wanderers = self
            .wanderers
            .into_iter()
            .map(|(body, cfg)| -> SimResult<WandererSlot> {
                Ok(WandererSlot {
                    body,
                    wanderer: Wanderer::new(cfg)?,
                    rng:      AgentRng::new(seed, body),
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let agents = self
            .agents
            .into_iter()
            .map(|(body, cfg, provider)| -> SimResult<AgentSlot> {
                let agent = ForagingAgent::builder(cfg).area(area.id()).body(body).build()?;
                Ok(AgentSlot {
                    body,
                    agent,
                    provider,
                    contacts: Contacts::default(),
                    reported: false,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        info!(
            bodies = bodies.len(),
            wanderers = wanderers.len(),
            agents = agents.len(),
            seed,
            "simulation built",
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            bodies,
            area,
            params: self.params,
            effects: EffectLog::new(),
            wanderers,
            agents,
        })
    }
}
