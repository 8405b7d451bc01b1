//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return across all episodes.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    util::play_episode,
    Game, Policy, State,
};
use anyhow::Result;
use log::info;

/// A default implementation of the [`Evaluator`] trait.
///
/// This evaluator runs a specified number of episodes and calculates the average
/// return of player 0 and the average number of actions per episode, chance
/// outcomes included. Chance outcomes are sampled with a random number generator
/// seeded at construction, so two evaluators with the same seed see the same
/// chance events as long as their policies do not differ.
///
/// ```rust
/// use spiel_core::{
///     dummy::{DummyGame, PeekPolicy},
///     DefaultEvaluator, Evaluator, Game,
/// };
///
/// # fn main() -> anyhow::Result<()> {
/// let game = DummyGame::build(&6)?;
/// let mut evaluator = DefaultEvaluator::new(game, 42, 10);
/// let record = evaluator.evaluate(&mut PeekPolicy)?;
/// assert_eq!(record.get_scalar("Episode return")?, 1.0);
/// assert_eq!(record.get_scalar("Episode length")?, 2.0);
/// # Ok(())
/// # }
/// ```
pub struct DefaultEvaluator<G: Game> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The game whose episodes are played.
    game: G,

    /// Source of chance outcomes.
    rng: fastrand::Rng,
}

impl<G: Game> Evaluator<G> for DefaultEvaluator<G> {
    /// Runs the episodes and returns a [`Record`] with the keys
    /// `Episode return` and `Episode length`.
    ///
    /// Fails if a policy returns an action the state rejects.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<G>,
    {
        let mut r_total = 0f32;
        let mut len_total = 0usize;

        for _ in 0..self.n_episodes {
            let state = play_episode(&self.game, policy, &mut self.rng)?;
            r_total += state.returns()[0];
            len_total += state.history().len();
        }

        let n = self.n_episodes.max(1) as f32;
        let r_mean = r_total / n;
        info!("Evaluated {} episodes, mean return = {}", self.n_episodes, r_mean);

        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_mean)),
            ("Episode length", RecordValue::Scalar(len_total as f32 / n)),
        ]))
    }
}

impl<G: Game> DefaultEvaluator<G> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `game` - The game to evaluate on
    /// * `seed` - Random seed for chance outcomes
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(game: G, seed: u64, n_episodes: usize) -> Self {
        Self {
            n_episodes,
            game,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Builds the game from its configuration and wraps it in an evaluator.
    pub fn from_config(config: &G::Config, seed: u64, n_episodes: usize) -> Result<Self> {
        Ok(Self::new(G::build(config)?, seed, n_episodes))
    }

    /// Returns the game being evaluated.
    pub fn game(&self) -> &G {
        &self.game
    }
}
