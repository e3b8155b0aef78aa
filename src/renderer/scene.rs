//! Frame composition: turns a read-only game state into a triangle list

use glam::Vec2;

use super::shapes;
use super::vertex::{Palette, Vertex};
use crate::sim::{GameState, Side};

/// Dashed centre line pattern (pixels)
pub const CENTER_DASH: f32 = 10.0;
pub const CENTER_GAP: f32 = 15.0;
pub const CENTER_LINE_WIDTH: f32 = 2.0;

/// Score digits: height and top edge (pixels)
pub const SCORE_HEIGHT: f32 = 32.0;
pub const SCORE_TOP: f32 = 18.0;

/// Where a side's score is drawn: one quarter in from its own edge
pub fn score_origin(side: Side, arena_width: f32) -> Vec2 {
    let x = match side {
        Side::Left => arena_width / 4.0,
        Side::Right => 3.0 * arena_width / 4.0,
    };
    Vec2::new(x, SCORE_TOP)
}

/// Build every vertex for one frame: centre line, scores, paddles, ball.
pub fn build_scene(state: &GameState, palette: &Palette, circle_segments: u32) -> Vec<Vertex> {
    let arena = &state.arena;
    let mut vertices = shapes::dashed_vline(
        arena.width / 2.0,
        0.0,
        arena.height,
        CENTER_DASH,
        CENTER_GAP,
        CENTER_LINE_WIDTH,
        palette.center_line,
    );

    for side in [Side::Left, Side::Right] {
        vertices.extend(shapes::number(
            state.score.get(side),
            score_origin(side, arena.width),
            SCORE_HEIGHT,
            palette.score,
        ));
    }

    for paddle in [&state.left, &state.right] {
        vertices.extend(shapes::rect(
            paddle.x,
            paddle.y,
            paddle.width,
            paddle.height,
            palette.paddle,
        ));
    }

    vertices.extend(shapes::circle(
        state.ball.center(),
        state.ball.radius(),
        palette.ball,
        circle_segments,
    ));

    vertices
}
