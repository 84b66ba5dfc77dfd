use forage_agent::AgentError;
use forage_core::EntityId;
use forage_wander::WanderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("body {body} does not exist (sim has {bodies} bodies)")]
    UnknownBody {
        body:   EntityId,
        bodies: usize,
    },

    #[error("body {0} is driven by more than one entity")]
    DuplicateBody(EntityId),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("wanderer error: {0}")]
    Wander(#[from] WanderError),
}

pub type SimResult<T> = Result<T, SimError>;
