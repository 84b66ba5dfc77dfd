//! Discrete decisions and their mapping to motion.
//!
//! The learning runtime speaks in small integers: a pair
//! `(forward ∈ {0, 1}, turn ∈ {0, 1, 2})`.  Those are decoded once, through
//! explicit tables, into [`Decision`] so the rest of the agent never branches
//! on magic numbers.

use crate::{AgentError, AgentResult};

/// Whether to move along the facing direction this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForwardIntent {
    #[default]
    Stay,
    Move,
}

impl ForwardIntent {
    /// Movement multiplier: 0 or 1.
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            ForwardIntent::Stay => 0.0,
            ForwardIntent::Move => 1.0,
        }
    }

    #[inline]
    pub fn as_raw(self) -> u8 {
        match self {
            ForwardIntent::Stay => 0,
            ForwardIntent::Move => 1,
        }
    }
}

/// Yaw direction to apply this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    #[default]
    None,
    /// Raw action 1; yaw sign −1.
    TurnNegative,
    /// Raw action 2; yaw sign +1.
    TurnPositive,
}

/// Raw turn action → direction.  Index is the raw value.
const TURN_TABLE: [TurnDirection; 3] = [
    TurnDirection::None,
    TurnDirection::TurnNegative,
    TurnDirection::TurnPositive,
];

impl TurnDirection {
    /// Signed yaw multiplier: −1, 0 or +1.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            TurnDirection::None         => 0.0,
            TurnDirection::TurnNegative => -1.0,
            TurnDirection::TurnPositive => 1.0,
        }
    }

    #[inline]
    pub fn as_raw(self) -> u8 {
        match self {
            TurnDirection::None         => 0,
            TurnDirection::TurnNegative => 1,
            TurnDirection::TurnPositive => 2,
        }
    }
}

/// One discrete action pair, held and re-applied until the next decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub forward: ForwardIntent,
    pub turn:    TurnDirection,
}

impl Decision {
    /// Stand still, no turn: the state before the first decision arrives.
    pub const IDLE: Decision = Decision {
        forward: ForwardIntent::Stay,
        turn:    TurnDirection::None,
    };

    #[inline]
    pub const fn new(forward: ForwardIntent, turn: TurnDirection) -> Self {
        Self { forward, turn }
    }

    /// Decode the runtime's integer encoding.
    ///
    /// # Errors
    ///
    /// [`AgentError::InvalidAction`] if either component is out of range.
    pub fn from_raw(forward: u8, turn: u8) -> AgentResult<Self> {
        let fwd = match forward {
            0 => ForwardIntent::Stay,
            1 => ForwardIntent::Move,
            _ => return Err(AgentError::InvalidAction { forward, turn }),
        };
        let turn_dir = TURN_TABLE
            .get(turn as usize)
            .copied()
            .ok_or(AgentError::InvalidAction { forward, turn })?;
        Ok(Self::new(fwd, turn_dir))
    }

    /// Encode back to `(forward, turn)`.
    #[inline]
    pub fn to_raw(self) -> (u8, u8) {
        (self.forward.as_raw(), self.turn.as_raw())
    }
}

// ── Human override ────────────────────────────────────────────────────────────

/// Raw directional key state for manual control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyState {
    pub forward: bool,
    pub left:    bool,
    pub right:   bool,
}

impl KeyState {
    /// Map keys to the same discrete action pair the policy produces.
    /// Left wins when both turn keys are held.
    pub fn to_decision(self) -> Decision {
        let forward = if self.forward { ForwardIntent::Move } else { ForwardIntent::Stay };
        let turn = if self.left {
            TurnDirection::TurnNegative
        } else if self.right {
            TurnDirection::TurnPositive
        } else {
            TurnDirection::None
        };
        Decision::new(forward, turn)
    }
}
