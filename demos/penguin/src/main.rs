//! penguin: foragers fetching fish for a chick while a bear roams.
//!
//! Usage: `penguin [scenario.json]`
//!
//! Without an argument the built-in scenario is used.  A scenario file may
//! override any subset of its fields; see [`Scenario`].  Per-episode results
//! are written to `<output_dir>/episodes.csv`, and log verbosity follows
//! `RUST_LOG`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use forage_agent::{AgentConfig, EndReason, EnvironmentParams};
use forage_core::{EntityId, SimConfig, Transform};
use forage_output::{CsvWriter, EpisodeLogObserver, OutputWriter};
use forage_sim::{AreaLayout, EpisodeSummary, RandomProvider, SimBuilder, SimObserver};
use forage_wander::WanderConfig;

// ── Scenario ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    sim:         SimConfig,
    layout:      AreaLayout,
    environment: EnvironmentParams,
    agent:       AgentConfig,
    /// Number of foragers.
    agents:      u32,
    /// One wanderer per entry.  Each starts on its own anchor.
    wanderers:   Vec<WanderConfig>,
    output_dir:  PathBuf,
}

impl Default for Scenario {
    fn default() -> Self {
        let layout = AreaLayout::default();
        Self {
            sim:         SimConfig { total_ticks: 20_000, ..SimConfig::default() },
            environment: EnvironmentParams::with_feed_radius(1.0),
            agent:       AgentConfig { max_steps: 5_000, ..AgentConfig::default() },
            agents:      4,
            wanderers:   vec![WanderConfig::new(2.0, layout.centre)],
            output_dir:  PathBuf::from("output/penguin"),
            layout,
        }
    }
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

// ── Observer wrapper to tally outcomes ────────────────────────────────────────

struct TallyObserver<W: OutputWriter> {
    inner:   EpisodeLogObserver<W>,
    reasons: BTreeMap<&'static str, u32>,
    reward:  f64,
}

impl<W: OutputWriter> TallyObserver<W> {
    fn new(inner: EpisodeLogObserver<W>) -> Self {
        Self { inner, reasons: BTreeMap::new(), reward: 0.0 }
    }

    fn episodes(&self) -> u32 {
        self.reasons.values().sum()
    }
}

impl<W: OutputWriter> SimObserver for TallyObserver<W> {
    fn on_tick_end(&mut self, tick: forage_core::Tick, contacts: usize) {
        self.inner.on_tick_end(tick, contacts);
    }

    fn on_episode_end(&mut self, agent: EntityId, summary: &EpisodeSummary) {
        *self.reasons.entry(summary.reason.as_str()).or_default() += 1;
        self.reward += summary.cumulative_reward as f64;
        self.inner.on_episode_end(agent, summary);
    }

    fn on_sim_end(&mut self, final_tick: forage_core::Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let scenario = load_scenario(path.as_deref())?;

    println!("=== penguin: forage simulation ===");
    println!(
        "Foragers: {}  |  Wanderers: {}  |  Ticks: {}  |  Seed: {}",
        scenario.agents,
        scenario.wanderers.len(),
        scenario.sim.total_ticks,
        scenario.sim.seed,
    );
    println!();

    // 1. Bodies: wanderers first, then foragers.  Wanderers start on their
    //    anchor; foragers are placed by the area at each episode start.
    let wanderer_count = scenario.wanderers.len() as u32;
    let bodies: Vec<Transform> = scenario
        .wanderers
        .iter()
        .map(|w| Transform::at(w.anchor))
        .chain((0..scenario.agents).map(|_| Transform::default()))
        .collect();

    // 2. Build sim.
    let seed = scenario.sim.seed;
    let mut builder = SimBuilder::new(scenario.sim.clone(), scenario.layout.clone())
        .params(scenario.environment)
        .bodies(bodies);
    for (i, cfg) in scenario.wanderers.iter().enumerate() {
        builder = builder.wanderer(EntityId(i as u32), cfg.clone());
    }
    for i in 0..scenario.agents {
        let body = EntityId(wanderer_count + i);
        builder = builder.agent(body, scenario.agent.clone(), RandomProvider::new(seed, body));
    }
    let mut sim = builder.build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&scenario.output_dir)?;
    let writer = CsvWriter::new(&scenario.output_dir)?;
    let mut obs = TallyObserver::new(EpisodeLogObserver::new(writer, &scenario.sim));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    info!(episodes = obs.episodes(), "run complete");
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  episodes.csv : {} rows", obs.episodes());
    if obs.episodes() > 0 {
        println!("  mean reward  : {:.3}", obs.reward / obs.episodes() as f64);
    }
    println!();

    println!("{:<22} {:>8}", "End reason", "Episodes");
    println!("{}", "-".repeat(31));
    for reason in [EndReason::ResourcesExhausted, EndReason::Hazard, EndReason::StepBudget] {
        let n = obs.reasons.get(reason.as_str()).copied().unwrap_or(0);
        println!("{:<22} {:>8}", reason.as_str(), n);
    }

    Ok(())
}
