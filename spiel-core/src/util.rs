//! Utilities for interaction of policies and games.
use crate::{
    error::SpielError,
    record::{Record, RecordValue, Recorder},
    Action, Game, Player, Policy, State,
};
use anyhow::Result;
use log::{debug, trace};

/// Draws one outcome from a list of `(outcome, probability)` pairs.
///
/// Probabilities are expected to sum to one. Rounding slack falls on the last
/// outcome.
pub fn sample_chance_outcome(
    rng: &mut fastrand::Rng,
    outcomes: &[(Action, f32)],
) -> Result<Action, SpielError> {
    let last = match outcomes.last() {
        Some((action, _)) => *action,
        None => {
            return Err(SpielError::InvalidPhase(
                "no chance outcome to sample from".to_string(),
            ))
        }
    };

    let u = rng.f32();
    let mut acc = 0f32;
    for (action, prob) in outcomes.iter() {
        acc += prob;
        if u < acc {
            return Ok(*action);
        }
    }
    Ok(last)
}

/// Plays a single episode to its end and returns the final state.
///
/// Chance outcomes are drawn with `rng`, player actions with `policy`.
pub fn play_episode<G, P>(game: &G, policy: &mut P, rng: &mut fastrand::Rng) -> Result<G::State>
where
    G: Game,
    P: Policy<G>,
{
    let mut state = game.new_initial_state();
    while !state.is_terminal() {
        let action = next_action::<G, P>(&state, policy, rng)?;
        state.apply_action(action)?;
    }
    Ok(state)
}

fn next_action<G, P>(state: &G::State, policy: &mut P, rng: &mut fastrand::Rng) -> Result<Action>
where
    G: Game,
    P: Policy<G>,
{
    match state.current_player() {
        Player::Chance => {
            let action = sample_chance_outcome(rng, &state.chance_outcomes()?)?;
            trace!("chance outcome {}", action);
            Ok(action)
        }
        Player::Id(_) => Ok(policy.sample(state)),
        Player::Terminal => Err(SpielError::InvalidPhase(
            "no action can be taken in a terminal state".to_string(),
        )
        .into()),
    }
}

/// Run episodes with a policy and recorder.
///
/// One record is written per player action with the keys `episode`, `step`,
/// `action`, `reward`, `obs` (the observation tensor before the action) and
/// `board` (the observation string before the action).
/// Returns the return of player 0 for each episode.
pub fn eval_with_recorder<G, P, R>(
    game: &G,
    policy: &mut P,
    n_episodes: usize,
    seed: u64,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    G: Game,
    P: Policy<G>,
    R: Recorder,
{
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut state = game.new_initial_state();
        let mut count_step = 0;

        while !state.is_terminal() {
            let is_chance = state.is_chance_node();
            let obs = state.observation_tensor();
            let board = state.observation_string();
            let action = next_action::<G, P>(&state, policy, &mut rng)?;
            state.apply_action(action)?;

            if !is_chance {
                let mut record = Record::empty();
                record.insert("episode", RecordValue::Scalar(episode as _));
                record.insert("step", RecordValue::Scalar(count_step as _));
                record.insert("action", RecordValue::Scalar(action as _));
                record.insert("reward", RecordValue::Scalar(state.returns()[0]));
                record.insert("obs", RecordValue::Array1(obs));
                record.insert("board", RecordValue::String(board));
                recorder.write(record);
                count_step += 1;
            }
        }

        let r = state.returns()[0];
        debug!("Episode {}, {} steps, return = {}", episode, count_step, r);
        rs.push(r);
    }

    Ok(rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dummy::{DummyGame, PeekPolicy},
        record::{BufferedRecorder, NullRecorder},
        RandomPolicy,
    };

    #[test]
    fn test_sample_chance_outcome_empty() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert!(matches!(
            sample_chance_outcome(&mut rng, &[]),
            Err(SpielError::InvalidPhase(_))
        ));
    }

    #[test]
    fn test_sample_chance_outcome_covers_support() {
        let mut rng = fastrand::Rng::with_seed(7);
        let outcomes = vec![(0, 0.25), (1, 0.25), (2, 0.5)];
        let mut counts = [0usize; 3];
        for _ in 0..4000 {
            counts[sample_chance_outcome(&mut rng, &outcomes).unwrap()] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0));
        assert!(counts[2] > counts[0]);
        assert!(counts[2] > counts[1]);
    }

    #[test]
    fn test_sample_chance_outcome_degenerate() {
        let mut rng = fastrand::Rng::with_seed(1);
        for _ in 0..100 {
            assert_eq!(sample_chance_outcome(&mut rng, &[(3, 1.0)]), Ok(3));
        }
    }

    #[test]
    fn test_eval_with_buffered_recorder() -> Result<()> {
        let game = DummyGame::build(&3)?;
        let mut recorder = BufferedRecorder::new();
        assert!(recorder.is_empty());

        let rs = eval_with_recorder(&game, &mut PeekPolicy, 4, 0, &mut recorder)?;
        assert_eq!(rs, vec![1.0; 4]);
        assert_eq!(recorder.len(), 4);
        for record in recorder.iter() {
            let obs = record.get_array1("obs")?;
            assert_eq!(obs.iter().sum::<f32>(), 1.0);
            assert!(record.get_string("board")?.ends_with("guess=?"));
            assert_eq!(record.get_scalar("step")?, 0.0);
            assert_eq!(record.get_scalar("reward")?, 1.0);
        }
        Ok(())
    }

    #[test]
    fn test_eval_with_null_recorder() -> Result<()> {
        let game = DummyGame::build(&2)?;
        let mut recorder = NullRecorder::new();
        let rs = eval_with_recorder(&game, &mut RandomPolicy::new(3), 10, 5, &mut recorder)?;
        assert_eq!(rs.len(), 10);
        assert!(rs.iter().all(|&r| r == 1.0 || r == -1.0));
        Ok(())
    }

    #[test]
    fn test_play_episode_reaches_terminal() -> Result<()> {
        let game = DummyGame::build(&5)?;
        let mut rng = fastrand::Rng::with_seed(9);
        let state = play_episode(&game, &mut PeekPolicy, &mut rng)?;
        assert!(state.is_terminal());
        assert_eq!(state.current_player(), Player::Terminal);
        assert_eq!(state.returns(), vec![1.0]);
        Ok(())
    }
}
