//! Pixel Pong - classic pointer-vs-AI Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, score, AI)
//! - `renderer`: Scene building and the WebGPU pipeline that draws it
//! - `settings`: Display preferences (never gameplay rules)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// All distances are arena pixels, all speeds are pixels per tick.
pub mod consts {
    /// Arena dimensions used when no drawing surface dictates them
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 16.0;
    /// Base ball speed, restored on every serve after a point
    pub const BALL_SPEED: f32 = 6.0;

    /// Maximum distance the AI paddle travels in one tick
    pub const AI_SPEED: f32 = 4.0;

    /// Steepest outgoing angle off a paddle edge (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}

/// Clamp a paddle's top edge so the paddle stays fully inside `[0, arena_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, arena_height: f32) -> f32 {
    y.min(arena_height - paddle_height).max(0.0)
}
