#![warn(missing_docs)]
//! Traits and tools for sequential decision environments with chance events.
//!
//! An environment is described by two objects. A [`Game`] holds the static
//! description shared by all episodes (number of actions, utility range, shapes
//! of the encoded vectors) and creates fresh episodes. A [`State`] owns one
//! episode and advances it one action at a time. Chance events are exposed
//! through [`State::chance_outcomes`] and applied like actions, so the driver
//! decides how they are sampled.
//!
//! ```rust
//! use spiel_core::{dummy::DummyGame, util::sample_chance_outcome, Game, Player, State};
//!
//! # fn main() -> anyhow::Result<()> {
//! let game = DummyGame::build(&6)?;
//! let mut rng = fastrand::Rng::with_seed(42);
//! let mut state = game.new_initial_state();
//! while !state.is_terminal() {
//!     let action = match state.current_player() {
//!         Player::Chance => sample_chance_outcome(&mut rng, &state.chance_outcomes()?)?,
//!         _ => state.legal_actions()[0],
//!     };
//!     state.apply_action(action)?;
//! }
//! assert_eq!(state.history().len(), 2);
//! assert!(state.returns()[0] == 1.0 || state.returns()[0] == -1.0);
//! # Ok(())
//! # }
//! ```
pub mod dummy;
pub mod error;
pub mod evaluator;
pub mod record;
pub mod util;

mod base;
pub use base::{
    Action, Configurable, Game, GameParameter, GameParameters, Player, Policy, RandomPolicy,
    RandomPolicyConfig, State,
};
pub use error::SpielError;
pub use evaluator::{DefaultEvaluator, Evaluator};
