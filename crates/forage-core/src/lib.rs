//! `forage-core`: foundational types for the `forage` simulation core.
//!
//! This crate is a dependency of every other `forage-*` crate.  It has no
//! `forage-*` dependencies and only a handful of external ones (`glam`,
//! `rand`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `ResourceId`, `AreaId`                        |
//! | [`geo`]         | `Transform`: position + orientation, look-at, yaw         |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]         | `AgentRng` (per-entity), `SimRng` (global)                |
//! | [`sample`]      | `Sampler` trait, `Sector`, `sample_in_sector`             |
//! | [`error`]       | `ForageError`, `ForageResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod sample;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ForageError, ForageResult};
pub use geo::Transform;
pub use glam::{Quat, Vec3};
pub use ids::{AreaId, EntityId, ResourceId};
pub use rng::{AgentRng, SimRng};
pub use sample::{Sampler, Sector, sample_in_sector};
pub use time::{SimClock, SimConfig, Tick};
