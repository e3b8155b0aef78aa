//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One fixed step per tick, no delta time
//! - Seeded RNG only
//! - No rendering, scheduling or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    ball_exit, ball_paddle_collision, ball_wall_collision, bounce_angle, deflect,
};
pub use state::{Arena, Ball, GameEvent, GameState, Paddle, Score, Side, Snapshot};
pub use tick::tick;
