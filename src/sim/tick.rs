//! Fixed-step simulation tick
//!
//! One call advances the game by one implicit time unit. There is no delta
//! time: speeds are expressed in pixels per tick and the host decides how
//! often to call.

use super::collision::{ball_exit, ball_paddle_collision, ball_wall_collision};
use super::state::{GameEvent, GameState, Side};
use crate::consts::AI_SPEED;

/// Advance the game state by one tick.
///
/// Order matters: integrate, walls, left paddle, right paddle, scoring, then
/// the AI paddle. The left paddle is only ever moved by
/// [`GameState::set_left_paddle_target`].
pub fn tick(state: &mut GameState) {
    state.events.clear();
    state.time_ticks += 1;

    state.ball.pos += state.ball.vel;

    if ball_wall_collision(&mut state.ball, &state.arena) {
        state.events.push(GameEvent::WallBounce);
    }

    if ball_paddle_collision(&mut state.ball, &state.left) {
        state.events.push(GameEvent::PaddleHit(Side::Left));
    }
    if ball_paddle_collision(&mut state.ball, &state.right) {
        state.events.push(GameEvent::PaddleHit(Side::Right));
    }

    check_scoring(state);
    drive_ai_paddle(state);
}

/// Award a point and re-serve if the ball has fully left the arena.
///
/// The serve re-centres the ball, so at most one point is scored per tick.
fn check_scoring(state: &mut GameState) {
    if let Some(winner) = ball_exit(&state.ball, &state.arena) {
        state.score.award(winner);
        state.events.push(GameEvent::Scored(winner));
        log::debug!(
            "{:?} scores at tick {} ({}-{})",
            winner,
            state.time_ticks,
            state.score.left,
            state.score.right
        );
        state.reset_ball();
    }
}

/// Track the ball's centre with the right paddle, capped at `AI_SPEED` per
/// tick. Pure position matching, no trajectory prediction.
fn drive_ai_paddle(state: &mut GameState) {
    let target = state.ball.center().y - state.right.height / 2.0;
    state.right.move_toward(target, AI_SPEED);
    state.right.clamp_to(&state.arena);
}
