//! Paddle actions.
use spiel_core::{Action, SpielError};
use std::{convert::TryFrom, fmt};

/// The number of paddle actions.
pub const NUM_ACTIONS: usize = 3;

/// Move of the paddle in one turn.
///
/// All three moves are legal in every turn, also against a wall: the paddle
/// stays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleAction {
    /// Move one column to the left.
    Left = 0,

    /// Keep the column.
    Stay = 1,

    /// Move one column to the right.
    Right = 2,
}

impl PaddleAction {
    /// All actions, in the order of their indices.
    pub const ALL: [PaddleAction; NUM_ACTIONS] =
        [PaddleAction::Left, PaddleAction::Stay, PaddleAction::Right];

    /// Column change of the paddle.
    pub fn delta(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Stay => 0,
            Self::Right => 1,
        }
    }
}

impl From<PaddleAction> for Action {
    fn from(a: PaddleAction) -> Self {
        a as Action
    }
}

impl TryFrom<Action> for PaddleAction {
    type Error = SpielError;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        match action {
            0 => Ok(Self::Left),
            1 => Ok(Self::Stay),
            2 => Ok(Self::Right),
            _ => Err(SpielError::InvalidAction {
                action,
                reason: format!("paddle action must be in [0, {})", NUM_ACTIONS),
            }),
        }
    }
}

impl fmt::Display for PaddleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "LEFT",
            Self::Stay => "STAY",
            Self::Right => "RIGHT",
        };
        write!(f, "{}", s)
    }
}
