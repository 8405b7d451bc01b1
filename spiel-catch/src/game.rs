//! Game descriptor of Catch.
use crate::{act::NUM_ACTIONS, config::CatchConfig, grid::Board, state::CatchState};
use log::debug;
use spiel_core::{Game, GameParameters, SpielError};

/// The number of players, chance excluded.
pub const NUM_PLAYERS: usize = 1;

/// Catch on a board of fixed size.
///
/// The game is immutable and cheap to copy; every episode created by
/// [`Game::new_initial_state`] gets its own copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchGame {
    board: Board,
}

impl CatchGame {
    /// Builds the game from named parameters `rows` and `columns`.
    pub fn from_params(params: &GameParameters) -> Result<Self, SpielError> {
        Self::build(&CatchConfig::from_params(params)?)
    }

    /// Board shared by the episodes.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.board.rows()
    }

    /// The number of columns.
    pub fn num_columns(&self) -> usize {
        self.board.columns()
    }
}

impl Game for CatchGame {
    type Config = CatchConfig;
    type State = CatchState;

    fn build(config: &Self::Config) -> Result<Self, SpielError> {
        let board = config.board()?;
        debug!("Catch on a {}x{} board", board.rows(), board.columns());
        Ok(Self { board })
    }

    fn new_initial_state(&self) -> CatchState {
        CatchState::new(self.board)
    }

    fn num_distinct_actions(&self) -> usize {
        NUM_ACTIONS
    }

    fn max_chance_outcomes(&self) -> usize {
        self.board.columns()
    }

    fn num_players(&self) -> usize {
        NUM_PLAYERS
    }

    fn min_utility(&self) -> f32 {
        -1.0
    }

    fn max_utility(&self) -> f32 {
        1.0
    }

    fn max_game_length(&self) -> usize {
        self.board.rows()
    }

    fn observation_tensor_shape(&self) -> Vec<usize> {
        vec![self.board.rows(), self.board.columns()]
    }

    fn information_state_tensor_shape(&self) -> Vec<usize> {
        vec![self.board.columns() + NUM_ACTIONS * self.board.rows()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game() {
        let game = CatchGame::build(&CatchConfig::default()).unwrap();
        assert_eq!(game.num_rows(), 10);
        assert_eq!(game.num_columns(), 5);
        assert_eq!(game.num_distinct_actions(), 3);
        assert_eq!(game.max_chance_outcomes(), 5);
        assert_eq!(game.num_players(), 1);
        assert_eq!(game.min_utility(), -1.0);
        assert_eq!(game.max_utility(), 1.0);
        assert_eq!(game.max_game_length(), 10);
        assert_eq!(game.observation_tensor_shape(), vec![10, 5]);
        assert_eq!(game.information_state_tensor_shape(), vec![35]);
    }

    #[test]
    fn test_from_params() {
        let params = GameParameters::new().with("rows", 4).with("columns", 2);
        let game = CatchGame::from_params(&params).unwrap();
        assert_eq!(game.observation_tensor_shape(), vec![4, 2]);

        let params = GameParameters::new().with("rows", 0);
        assert!(matches!(
            CatchGame::from_params(&params),
            Err(SpielError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_zero_columns_from_config() {
        let config = CatchConfig::default().columns(0);
        assert!(matches!(
            CatchGame::build(&config),
            Err(SpielError::InvalidConfiguration(_))
        ));
    }
}
