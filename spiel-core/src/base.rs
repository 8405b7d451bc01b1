//! Core functionalities.
mod game;
mod params;
mod policy;
mod state;
pub use game::Game;
pub use params::{GameParameter, GameParameters};
pub use policy::{Configurable, Policy, RandomPolicy, RandomPolicyConfig};
pub use state::{Action, Player, State};
