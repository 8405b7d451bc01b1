//! A tiny game used for tests and documentation.
//!
//! A die with `n_faces` faces is rolled by chance, then the single player sees
//! the face and guesses it. The return is `+1` for a right guess and `-1`
//! otherwise.
use crate::{error::SpielError, Action, Game, Player, Policy, State};
use std::fmt;

/// Guess-the-die game, configured with the number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DummyGame {
    n_faces: usize,
}

/// Episode of [`DummyGame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyState {
    n_faces: usize,
    face: Option<usize>,
    guess: Option<usize>,
}

impl DummyState {
    /// The rolled face, `None` before the roll.
    pub fn face(&self) -> Option<usize> {
        self.face
    }

    fn out_of_range(&self, action: Action) -> SpielError {
        SpielError::InvalidAction {
            action,
            reason: format!("must be in [0, {})", self.n_faces),
        }
    }
}

impl State for DummyState {
    fn current_player(&self) -> Player {
        match (self.face, self.guess) {
            (None, _) => Player::Chance,
            (Some(_), None) => Player::Id(0),
            (Some(_), Some(_)) => Player::Terminal,
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        match self.current_player() {
            Player::Id(_) => (0..self.n_faces).collect(),
            _ => Vec::new(),
        }
    }

    fn chance_outcomes(&self) -> Result<Vec<(Action, f32)>, SpielError> {
        match self.face {
            None => Ok((0..self.n_faces)
                .map(|a| (a, 1.0 / self.n_faces as f32))
                .collect()),
            Some(_) => Err(SpielError::InvalidPhase("the die is already rolled".to_string())),
        }
    }

    fn apply_action(&mut self, action: Action) -> Result<(), SpielError> {
        if self.guess.is_some() {
            return Err(SpielError::InvalidPhase("the game is over".to_string()));
        }
        if action >= self.n_faces {
            return Err(self.out_of_range(action));
        }
        match self.face {
            None => self.face = Some(action),
            Some(_) => self.guess = Some(action),
        }
        Ok(())
    }

    fn undo_action(&mut self, player: Player, action: Action) -> Result<(), SpielError> {
        match (self.face, self.guess, player) {
            (Some(_), Some(g), Player::Id(0)) if g == action => self.guess = None,
            (Some(f), None, Player::Chance) if f == action => self.face = None,
            (None, _, _) => return Err(SpielError::InvalidPhase("nothing to undo".to_string())),
            _ => {
                return Err(SpielError::InvalidAction {
                    action,
                    reason: format!("not the last move of player {}", player),
                })
            }
        }
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.guess.is_some()
    }

    fn returns(&self) -> Vec<f32> {
        match (self.face, self.guess) {
            (Some(f), Some(g)) if f == g => vec![1.0],
            (Some(_), Some(_)) => vec![-1.0],
            _ => vec![0.0],
        }
    }

    fn history(&self) -> Vec<Action> {
        self.face.into_iter().chain(self.guess).collect()
    }

    fn action_to_string(&self, player: Player, action: Action) -> String {
        match player {
            Player::Chance => format!("Face {}", action),
            _ => format!("Guess {}", action),
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

    fn observation_tensor(&self) -> Vec<f32> {
        let mut values = vec![0f32; self.n_faces];
        if let Some(f) = self.face {
            values[f] = 1.0;
        }
        values
    }

    fn information_state_tensor(&self) -> Vec<f32> {
        let mut values = vec![0f32; 2 * self.n_faces];
        if let Some(f) = self.face {
            values[f] = 1.0;
        }
        if let Some(g) = self.guess {
            values[self.n_faces + g] = 1.0;
        }
        values
    }
}

impl fmt::Display for DummyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<usize>| v.map_or("?".to_string(), |v| v.to_string());
        write!(f, "face={} guess={}", show(self.face), show(self.guess))
    }
}

impl Game for DummyGame {
    type Config = usize;
    type State = DummyState;

    fn build(config: &Self::Config) -> Result<Self, SpielError> {
        if *config == 0 {
            return Err(SpielError::InvalidConfiguration(
                "the die needs at least one face".to_string(),
            ));
        }
        Ok(Self { n_faces: *config })
    }

    fn new_initial_state(&self) -> DummyState {
        DummyState {
            n_faces: self.n_faces,
            face: None,
            guess: None,
        }
    }

    fn num_distinct_actions(&self) -> usize {
        self.n_faces
    }

    fn max_chance_outcomes(&self) -> usize {
        self.n_faces
    }

    fn num_players(&self) -> usize {
        1
    }

    fn min_utility(&self) -> f32 {
        -1.0
    }

    fn max_utility(&self) -> f32 {
        1.0
    }

    fn max_game_length(&self) -> usize {
        1
    }

    fn observation_tensor_shape(&self) -> Vec<usize> {
        vec![self.n_faces]
    }

    fn information_state_tensor_shape(&self) -> Vec<usize> {
        vec![2 * self.n_faces]
    }
}

/// Guesses the face it sees, so it always wins [`DummyGame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PeekPolicy;

impl Policy<DummyGame> for PeekPolicy {
    fn sample(&mut self, state: &DummyState) -> Action {
        state.face().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_faces() {
        assert!(matches!(
            DummyGame::build(&0),
            Err(SpielError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_apply_and_undo() {
        let game = DummyGame::build(&3).unwrap();
        let mut state = game.new_initial_state();
        assert!(state.is_chance_node());
        assert_eq!(state.chance_outcomes().unwrap().len(), 3);

        state.apply_action(1).unwrap();
        assert_eq!(state.legal_actions(), vec![0, 1, 2]);
        state.apply_action(0).unwrap();
        assert_eq!(state.returns(), vec![-1.0]);
        assert_eq!(state.information_state_string(), "1, 0");
        assert!(state.apply_action(0).is_err());

        assert!(state.undo_action(Player::Id(0), 1).is_err());
        state.undo_action(Player::Id(0), 0).unwrap();
        state.undo_action(Player::Chance, 1).unwrap();
        assert_eq!(state, game.new_initial_state());
    }
}
