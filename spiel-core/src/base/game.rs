//! Game.
use super::State;
use crate::error::SpielError;

/// Static description of a game, shared by all of its episodes.
pub trait Game {
    /// Configurations.
    type Config: Clone;

    /// Episode state created by this game.
    type State: State;

    /// Builds a game from a configuration.
    fn build(config: &Self::Config) -> Result<Self, SpielError>
    where
        Self: Sized;

    /// Creates an episode at its root.
    fn new_initial_state(&self) -> Self::State;

    /// The number of distinct player actions.
    fn num_distinct_actions(&self) -> usize;

    /// The maximum number of outcomes of a chance node.
    fn max_chance_outcomes(&self) -> usize;

    /// The number of players, chance excluded.
    fn num_players(&self) -> usize;

    /// The lowest return a player can get.
    fn min_utility(&self) -> f32;

    /// The highest return a player can get.
    fn max_utility(&self) -> f32;

    /// The maximum number of player actions in an episode.
    fn max_game_length(&self) -> usize;

    /// Shape of [`State::observation_tensor`].
    fn observation_tensor_shape(&self) -> Vec<usize>;

    /// Shape of [`State::information_state_tensor`].
    fn information_state_tensor_shape(&self) -> Vec<usize>;
}
