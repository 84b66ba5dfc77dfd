//! Framework error type.
//!
//! Lookups against host-owned state fail with `ForageError`; sub-crates define
//! their own enums for everything else.

use thiserror::Error;

use crate::{EntityId, ResourceId};

/// The top-level error type for `forage-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ForageError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),
}

/// Shorthand result type for all `forage-*` crates.
pub type ForageResult<T> = Result<T, ForageError>;
