#![warn(missing_docs)]
//! Catch, a single player game often used for unit testing reinforcement
//! learning algorithms.
//!
//! The player moves a paddle on the last row of a grid to intercept a falling
//! ball. The column of the ball is decided by chance at the start of the
//! episode, then the ball falls one row per turn while staying in its column.
//! The return is `+1` if the paddle is under the ball when it reaches the last
//! row and `-1` otherwise.
//!
//! In each turn all three actions (left, stay, right) are legal; moving into a
//! wall leaves the paddle where it is.
//!
//! The game is configured with two parameters, `rows` (default 10) and
//! `columns` (default 5).
//!
//! ```rust
//! use spiel_catch::{CatchConfig, CatchGame, PaddleAction};
//! use spiel_core::{Game, Player, State};
//!
//! # fn main() -> anyhow::Result<()> {
//! let game = CatchGame::build(&CatchConfig::default().rows(3).columns(3))?;
//! let mut state = game.new_initial_state();
//! assert_eq!(state.current_player(), Player::Chance);
//!
//! // Drop the ball in the middle column, then move right and back.
//! state.apply_action(1)?;
//! state.apply_action(PaddleAction::Right.into())?;
//! state.apply_action(PaddleAction::Left.into())?;
//!
//! assert!(state.is_terminal());
//! assert_eq!(state.returns(), vec![1.0]);
//! # Ok(())
//! # }
//! ```
mod act;
mod config;
mod game;
pub mod grid;
mod policy;
mod state;
pub use act::{PaddleAction, NUM_ACTIONS};
pub use config::{CatchConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use game::{CatchGame, NUM_PLAYERS};
pub use grid::{Board, CellState};
pub use policy::BallTrackingPolicy;
pub use state::{CatchState, Phase};
