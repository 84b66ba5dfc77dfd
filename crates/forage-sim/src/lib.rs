//! `forage-sim`: kinematic reference host for the forage simulation core.
//!
//! The host owns every body transform and drives wanderers and foragers
//! through their public contracts.  It applies position deltas and detects
//! sphere overlaps; there is no physics engine behind it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`area`]     | `AreaLayout`, `FeedingArea` (implements `forage_agent::Area`)|
//! | [`effects`]  | `EffectLog`: the ttl-expiring `EffectSink`                   |
//! | [`provider`] | `RandomProvider`                                             |
//! | [`observer`] | `SimObserver`, `NoopObserver`, `EpisodeSummary`              |
//! | [`builder`]  | `SimBuilder`                                                 |
//! | [`sim`]      | `Sim` and its six-phase tick loop                            |
//! | [`error`]    | `SimError`, `SimResult<T>`                                   |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Updates wanderers on Rayon's thread pool.              |
//! | `serde`    | `Serialize`/`Deserialize` on `AreaLayout` and configs. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use forage_agent::AgentConfig;
//! use forage_core::{EntityId, SimConfig};
//! use forage_sim::{AreaLayout, NoopObserver, RandomProvider, SimBuilder};
//!
//! let config = SimConfig::default();
//! let mut sim = SimBuilder::new(config.clone(), AreaLayout::default())
//!     .agent(EntityId(0), AgentConfig::default(), RandomProvider::new(config.seed, EntityId(0)))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod area;
pub mod builder;
pub mod effects;
pub mod error;
pub mod observer;
pub mod provider;
pub mod sim;


pub use area::{AreaLayout, FeedingArea, Resource};
pub use builder::SimBuilder;
pub use effects::{ActiveEffect, EffectLog};
pub use error::{SimError, SimResult};
pub use observer::{EpisodeSummary, NoopObserver, SimObserver};
pub use provider::RandomProvider;
pub use sim::{AgentSlot, Sim, WandererSlot};
