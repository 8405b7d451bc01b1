//! Scripted policy for Catch.
use crate::{act::PaddleAction, CatchGame, CatchState};
use spiel_core::{Action, Policy};

/// Moves the paddle toward the column of the ball.
///
/// It catches every ball whose column is at most `rows - 1` columns away from
/// the starting column of the paddle, which holds on the default board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BallTrackingPolicy;

impl Policy<CatchGame> for BallTrackingPolicy {
    fn sample(&mut self, state: &CatchState) -> Action {
        let a = match (state.ball_col(), state.paddle_col()) {
            (Some(ball), Some(paddle)) if ball < paddle => PaddleAction::Left,
            (Some(ball), Some(paddle)) if ball > paddle => PaddleAction::Right,
            _ => PaddleAction::Stay,
        };
        a.into()
    }
}
