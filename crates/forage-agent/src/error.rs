use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A required collaborator handle was not wired before `build()`.
    #[error("forager is missing its {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid discrete action: forward={forward}, turn={turn}")]
    InvalidAction { forward: u8, turn: u8 },

    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
