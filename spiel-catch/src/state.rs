//! Episode of Catch.
use crate::{
    act::{PaddleAction, NUM_ACTIONS},
    grid::{cell_at, render, Board, CellState, Positions},
};
use log::{debug, trace};
use spiel_core::{Action, Player, SpielError, State};
use std::{convert::TryFrom, fmt};

/// Lifecycle of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The ball column has not been drawn yet.
    Uninitialized,

    /// The ball is falling.
    InProgress,

    /// The ball has reached the last row.
    Terminal,
}

/// State of an episode of Catch.
///
/// The episode starts at a chance node that drops the ball in one of the
/// columns. Each action of the player then moves the paddle and lets the ball
/// fall one row. The episode ends when the ball reaches the last row, after
/// `rows - 1` actions.
///
/// Every applied action is kept with the positions it replaced, so that
/// [`State::undo_action`] can walk back to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchState {
    board: Board,
    positions: Option<Positions>,
    history: Vec<(Action, Option<Positions>)>,
}

impl CatchState {
    /// Creates an episode at its root.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            positions: None,
            history: Vec::new(),
        }
    }

    /// Board of the episode.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase of the episode.
    pub fn phase(&self) -> Phase {
        match self.positions {
            None => Phase::Uninitialized,
            Some(p) if p.ball_row == self.board.last_row() => Phase::Terminal,
            Some(_) => Phase::InProgress,
        }
    }

    /// Row of the ball, `None` before it is dropped.
    pub fn ball_row(&self) -> Option<usize> {
        self.positions.map(|p| p.ball_row)
    }

    /// Column of the ball, `None` before it is dropped.
    pub fn ball_col(&self) -> Option<usize> {
        self.positions.map(|p| p.ball_col)
    }

    /// Column of the paddle, `None` before the ball is dropped.
    pub fn paddle_col(&self) -> Option<usize> {
        self.positions.map(|p| p.paddle_col)
    }

    /// Content of a cell. The cell must lie on the board.
    pub fn board_at(&self, row: usize, col: usize) -> CellState {
        cell_at(&self.board, self.positions, row, col)
    }

    fn next_positions(&self, action: Action) -> Result<Positions, SpielError> {
        match self.positions {
            None => {
                if action >= self.board.columns() {
                    return Err(SpielError::InvalidAction {
                        action,
                        reason: format!(
                            "chance outcome must be a column in [0, {})",
                            self.board.columns()
                        ),
                    });
                }
                Ok(Positions {
                    ball_row: 0,
                    ball_col: action,
                    paddle_col: self.board.center_column(),
                })
            }
            Some(p) if p.ball_row == self.board.last_row() => Err(SpielError::InvalidPhase(
                "the episode is over, no action can be applied".to_string(),
            )),
            Some(p) => {
                let paddle = PaddleAction::try_from(action)?;
                Ok(Positions {
                    ball_row: p.ball_row + 1,
                    ball_col: p.ball_col,
                    paddle_col: self.board.shift_column(p.paddle_col, paddle.delta()),
                })
            }
        }
    }
}

impl State for CatchState {
    fn current_player(&self) -> Player {
        match self.phase() {
            Phase::Uninitialized => Player::Chance,
            Phase::InProgress => Player::Id(0),
            Phase::Terminal => Player::Terminal,
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        match self.phase() {
            Phase::InProgress => PaddleAction::ALL.iter().map(|&a| a.into()).collect(),
            Phase::Uninitialized | Phase::Terminal => Vec::new(),
        }
    }

    fn chance_outcomes(&self) -> Result<Vec<(Action, f32)>, SpielError> {
        if self.phase() != Phase::Uninitialized {
            return Err(SpielError::InvalidPhase(
                "chance outcomes exist only before the ball is dropped".to_string(),
            ));
        }
        let n = self.board.columns();
        let prob = 1.0 / n as f32;
        Ok((0..n).map(|col| (col, prob)).collect())
    }

    fn apply_action(&mut self, action: Action) -> Result<(), SpielError> {
        let next = self.next_positions(action)?;
        if self.positions.is_none() {
            trace!("ball dropped in column {}", next.ball_col);
        }
        self.history.push((action, self.positions));
        self.positions = Some(next);

        if self.is_terminal() {
            debug!(
                "ball in column {}, paddle in column {}, return = {}",
                next.ball_col,
                next.paddle_col,
                self.returns()[0]
            );
        }
        Ok(())
    }

    fn undo_action(&mut self, player: Player, action: Action) -> Result<(), SpielError> {
        let (last, prev) = match self.history.last() {
            Some(&entry) => entry,
            None => {
                return Err(SpielError::InvalidPhase(
                    "no action to undo at the root".to_string(),
                ))
            }
        };
        let last_player = if prev.is_none() {
            Player::Chance
        } else {
            Player::Id(0)
        };
        if last != action || player != last_player {
            return Err(SpielError::InvalidAction {
                action,
                reason: format!(
                    "the last move was {} by player {}, not by player {}",
                    last, last_player, player
                ),
            });
        }

        self.history.pop();
        self.positions = prev;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.phase() == Phase::Terminal
    }

    fn returns(&self) -> Vec<f32> {
        match self.positions {
            Some(p) if p.ball_row == self.board.last_row() => {
                if p.paddle_col == p.ball_col {
                    vec![1.0]
                } else {
                    vec![-1.0]
                }
            }
            _ => vec![0.0],
        }
    }

    fn history(&self) -> Vec<Action> {
        self.history.iter().map(|&(action, _)| action).collect()
    }

    fn action_to_string(&self, player: Player, action: Action) -> String {
        match player {
            Player::Chance => format!("Initialized ball to {}", action),
            _ => match PaddleAction::try_from(action) {
                Ok(a) => a.to_string(),
                Err(_) => format!("Out of range action {}", action),
            },
        }
    }

    fn observation_string(&self) -> String {
        self.to_string()
    }

    fn information_state_string(&self) -> String {
        self.history()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-hot grid of shape `[rows, columns]` marking the ball and the paddle.
    fn observation_tensor(&self) -> Vec<f32> {
        let mut values = vec![0f32; self.board.num_cells()];
        if let Some(p) = self.positions {
            values[self.board.index(p.ball_row, p.ball_col)] = 1.0;
            values[self.board.index(self.board.last_row(), p.paddle_col)] = 1.0;
        }
        values
    }

    /// One-hot ball column followed by one one-hot block of width 3 per row,
    /// holding the paddle action taken in that turn. Turns not played yet are
    /// all zero.
    fn information_state_tensor(&self) -> Vec<f32> {
        let columns = self.board.columns();
        let mut values = vec![0f32; columns + NUM_ACTIONS * self.board.rows()];
        if let Some(p) = self.positions {
            values[p.ball_col] = 1.0;
            for (turn, &(action, _)) in self.history.iter().skip(1).enumerate() {
                values[columns + turn * NUM_ACTIONS + action] = 1.0;
            }
        }
        values
    }
}

impl fmt::Display for CatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.board, self.positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: usize, columns: usize) -> CatchState {
        CatchState::new(Board::new(rows, columns).unwrap())
    }

    fn apply_all(state: &mut CatchState, actions: &[Action]) {
        for &a in actions {
            state.apply_action(a).unwrap();
        }
    }

    #[test]
    fn test_root_is_chance_node() {
        let s = state(10, 5);
        assert_eq!(s.phase(), Phase::Uninitialized);
        assert_eq!(s.current_player(), Player::Chance);
        assert!(s.is_chance_node());
        assert!(s.legal_actions().is_empty());
        assert_eq!(s.returns(), vec![0.0]);
        assert_eq!(s.ball_row(), None);
        assert_eq!(s.ball_col(), None);
        assert_eq!(s.paddle_col(), None);
    }

    #[test]
    fn test_chance_outcomes_are_uniform() {
        for columns in 1..8 {
            let outcomes = state(4, columns).chance_outcomes().unwrap();
            assert_eq!(outcomes.len(), columns);
            for (i, &(action, prob)) in outcomes.iter().enumerate() {
                assert_eq!(action, i);
                assert!((prob - 1.0 / columns as f32).abs() < 1e-6);
            }
            let total: f32 = outcomes.iter().map(|&(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_chance_outcomes_after_drop_fail() {
        let mut s = state(10, 5);
        s.apply_action(0).unwrap();
        assert!(matches!(
            s.chance_outcomes(),
            Err(SpielError::InvalidPhase(_))
        ));
    }

    #[test]
    fn test_drop_ball() {
        for col in 0..5 {
            let mut s = state(10, 5);
            s.apply_action(col).unwrap();
            assert_eq!(s.ball_row(), Some(0));
            assert_eq!(s.ball_col(), Some(col));
            assert_eq!(s.paddle_col(), Some(2));
            assert_eq!(s.phase(), Phase::InProgress);
            assert_eq!(s.current_player(), Player::Id(0));
            assert_eq!(s.legal_actions(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_out_of_range_chance_outcome_leaves_state() {
        let mut s = state(10, 5);
        let before = s.clone();
        assert!(matches!(
            s.apply_action(5),
            Err(SpielError::InvalidAction { action: 5, .. })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_out_of_range_paddle_action_leaves_state() {
        let mut s = state(10, 5);
        s.apply_action(1).unwrap();
        let before = s.clone();
        assert!(matches!(
            s.apply_action(3),
            Err(SpielError::InvalidAction { action: 3, .. })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let mut s = state(10, 5);
        apply_all(&mut s, &[0, 0, 0, 0]);
        assert_eq!(s.paddle_col(), Some(0));
        assert_eq!(s.legal_actions(), vec![0, 1, 2]);

        let mut s = state(10, 5);
        apply_all(&mut s, &[0, 2, 2, 2, 2]);
        assert_eq!(s.paddle_col(), Some(4));
        assert_eq!(s.ball_row(), Some(4));
    }

    #[test]
    fn test_single_row_board_ends_at_drop() {
        let mut s = state(1, 3);
        s.apply_action(1).unwrap();
        assert!(s.is_terminal());
        assert_eq!(s.current_player(), Player::Terminal);
        assert_eq!(s.returns(), vec![1.0]);

        let mut s = state(1, 3);
        s.apply_action(0).unwrap();
        assert!(s.is_terminal());
        assert_eq!(s.returns(), vec![-1.0]);
    }

    #[test]
    fn test_apply_after_terminal_fails() {
        let mut s = state(2, 3);
        apply_all(&mut s, &[1, 1]);
        assert!(s.is_terminal());
        let before = s.clone();
        assert!(matches!(
            s.apply_action(1),
            Err(SpielError::InvalidPhase(_))
        ));
        assert_eq!(s, before);
        assert!(s.legal_actions().is_empty());
    }

    #[test]
    fn test_undo_restores_previous_positions() {
        let mut s = state(10, 5);
        apply_all(&mut s, &[4, 2, 2]);
        assert_eq!(s.paddle_col(), Some(4));

        // Clamped move: paddle stays at 4, undo must still rewind the row.
        s.apply_action(2).unwrap();
        s.undo_action(Player::Id(0), 2).unwrap();
        assert_eq!(s.ball_row(), Some(2));
        assert_eq!(s.paddle_col(), Some(4));

        s.undo_action(Player::Id(0), 2).unwrap();
        s.undo_action(Player::Id(0), 2).unwrap();
        s.undo_action(Player::Chance, 4).unwrap();
        assert_eq!(s, state(10, 5));
    }

    #[test]
    fn test_undo_mismatch_fails() {
        let mut s = state(10, 5);
        assert!(matches!(
            s.undo_action(Player::Chance, 0),
            Err(SpielError::InvalidPhase(_))
        ));

        apply_all(&mut s, &[3, 0]);
        let before = s.clone();
        assert!(matches!(
            s.undo_action(Player::Id(0), 1),
            Err(SpielError::InvalidAction { action: 1, .. })
        ));
        assert!(matches!(
            s.undo_action(Player::Chance, 0),
            Err(SpielError::InvalidAction { action: 0, .. })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_observation_tensor() {
        let mut s = state(10, 5);
        assert_eq!(s.observation_tensor(), vec![0.0; 50]);

        apply_all(&mut s, &[2, 2, 2, 2]);
        assert_eq!(s.ball_row(), Some(3));
        assert_eq!(s.ball_col(), Some(2));
        assert_eq!(s.paddle_col(), Some(4));

        let obs = s.observation_tensor();
        assert_eq!(obs.len(), 50);
        let ones: Vec<usize> = obs
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ones, vec![17, 49]);
        assert_eq!(obs.iter().sum::<f32>(), 2.0);
    }

    #[test]
    fn test_observation_tensor_when_ball_meets_paddle() {
        let mut s = state(2, 3);
        apply_all(&mut s, &[1, 1]);
        let obs = s.observation_tensor();
        assert_eq!(obs, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_information_state_tensor() {
        let mut s = state(3, 3);
        assert_eq!(s.information_state_tensor(), vec![0.0; 12]);

        s.apply_action(1).unwrap();
        assert_eq!(
            s.information_state_tensor(),
            vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );

        apply_all(&mut s, &[2, 0]);
        assert_eq!(
            s.information_state_tensor(),
            vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_strings() {
        let mut s = state(3, 3);
        assert_eq!(s.to_string(), "...\n...\n...\n");
        assert_eq!(s.action_to_string(Player::Chance, 2), "Initialized ball to 2");

        apply_all(&mut s, &[0, 2]);
        assert_eq!(s.to_string(), "...\no..\n..x\n");
        assert_eq!(s.observation_string(), s.to_string());
        assert_eq!(s.information_state_string(), "0, 2");
        assert_eq!(s.action_to_string(Player::Id(0), 0), "LEFT");
        assert_eq!(s.action_to_string(Player::Id(0), 1), "STAY");
        assert_eq!(s.action_to_string(Player::Id(0), 2), "RIGHT");
    }

    #[test]
    fn test_board_at() {
        let mut s = state(3, 3);
        assert_eq!(s.board_at(2, 1), CellState::Empty);
        apply_all(&mut s, &[0]);
        assert_eq!(s.board_at(0, 0), CellState::Ball);
        assert_eq!(s.board_at(2, 1), CellState::Paddle);
        assert_eq!(s.board_at(1, 1), CellState::Empty);
    }
}
