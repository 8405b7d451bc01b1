//! Episode state.
use crate::error::SpielError;
use std::fmt::{self, Debug, Display};

/// Index of an action or a chance outcome.
pub type Action = usize;

/// The entity that acts in a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Chance node, the next action is sampled from [`State::chance_outcomes`].
    Chance,

    /// A decision node of the player with the given index.
    Id(usize),

    /// No one acts, the episode is over.
    Terminal,
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chance => write!(f, "chance"),
            Self::Id(id) => write!(f, "{}", id),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

/// One episode of a game.
///
/// A state is an exclusively owned value. Search drivers that explore several
/// futures from the same position clone it; the clone shares nothing with the
/// original. [`Display`] renders the state for humans.
pub trait State: Clone + Debug + Display {
    /// Returns the entity acting in this state.
    fn current_player(&self) -> Player;

    /// Returns the actions the current player may take, in ascending order.
    ///
    /// Empty at chance nodes and at terminal states.
    fn legal_actions(&self) -> Vec<Action>;

    /// Returns the chance outcomes and their probabilities.
    ///
    /// Fails with [`SpielError::InvalidPhase`] when the state is not a chance node.
    fn chance_outcomes(&self) -> Result<Vec<(Action, f32)>, SpielError>;

    /// Applies an action or a chance outcome.
    ///
    /// On error the state is left unchanged.
    fn apply_action(&mut self, action: Action) -> Result<(), SpielError>;

    /// Reverts the last action, which must have been `action` taken by `player`.
    fn undo_action(&mut self, player: Player, action: Action) -> Result<(), SpielError>;

    /// Returns `true` when the episode is over.
    fn is_terminal(&self) -> bool;

    /// Returns `true` when the next action is a chance outcome.
    fn is_chance_node(&self) -> bool {
        self.current_player() == Player::Chance
    }

    /// Returns the cumulative reward of each player. All zero until the episode ends.
    fn returns(&self) -> Vec<f32>;

    /// Returns every action applied so far, chance outcomes included.
    fn history(&self) -> Vec<Action>;

    /// Describes `action` as taken by `player`.
    fn action_to_string(&self, player: Player, action: Action) -> String;

    /// Text form of what the player observes.
    fn observation_string(&self) -> String;

    /// Text form of the information state of the player.
    fn information_state_string(&self) -> String;

    /// Flattened observation, shaped as [`Game::observation_tensor_shape`].
    ///
    /// [`Game::observation_tensor_shape`]: crate::Game::observation_tensor_shape
    fn observation_tensor(&self) -> Vec<f32>;

    /// Flattened information state, shaped as [`Game::information_state_tensor_shape`].
    ///
    /// [`Game::information_state_tensor_shape`]: crate::Game::information_state_tensor_shape
    fn information_state_tensor(&self) -> Vec<f32>;
}
