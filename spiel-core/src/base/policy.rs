//! Policy.
use super::{Action, Game, State};
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

/// A policy on a game.
///
/// Policy is a mapping from a decision state to one of its legal actions.
/// The mapping can be either of deterministic or stochastic.
/// It is never asked to act at chance nodes or terminal states.
pub trait Policy<G: Game> {
    /// Sample an action given a state.
    fn sample(&mut self, state: &G::State) -> Action;
}

/// A configurable object, having type parameter.
pub trait Configurable<G: Game> {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the object.
    fn build(config: Self::Config) -> Self;

    /// Build the object with the configuration in the yaml file of the given path.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let file = std::fs::File::open(path)?;
        let rdr = std::io::BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(Self::build(config))
    }
}

/// Configuration of [`RandomPolicy`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RandomPolicyConfig {
    /// Seed of the random number generator.
    pub seed: u64,
}

/// Picks one of the legal actions uniformly at random.
///
/// Panics when sampled at a chance node or a terminal state, where there is no
/// legal action.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Creates a policy with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<G: Game> Policy<G> for RandomPolicy {
    fn sample(&mut self, state: &G::State) -> Action {
        let actions = state.legal_actions();
        assert!(
            !actions.is_empty(),
            "RandomPolicy asked to act in a state without legal actions (player {})",
            state.current_player()
        );
        actions[self.rng.usize(..actions.len())]
    }
}

impl<G: Game> Configurable<G> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self::new(config.seed)
    }
}
