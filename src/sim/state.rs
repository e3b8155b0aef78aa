//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the host owns it
//! and lends it to `tick` and to the renderer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_paddle_y;
use crate::consts::*;

/// Which half of the arena something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the horizontal direction pointing away from this side's wall
    pub fn away_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball struck the given side's paddle
    PaddleHit(Side),
    /// The given side won a point
    Scored(Side),
}

/// The rectangular playfield, sized from the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `x` is fixed by its side, only `y` (top edge) moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical displacement applied by the most recent move
    pub dy: f32,
}

impl Paddle {
    /// Create a paddle vertically centred against its side wall
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => arena.width - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            side,
            x,
            y: arena.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dy: 0.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = clamp_paddle_y(self.y, self.height, arena.height);
    }

    /// Place the paddle's top edge directly, clamped into the arena
    pub fn set_top(&mut self, y: f32, arena: &Arena) {
        let previous = self.y;
        self.y = clamp_paddle_y(y, self.height, arena.height);
        self.dy = self.y - previous;
    }

    /// Move the top edge toward `target_y` by at most `max_step`, never past it
    pub fn move_toward(&mut self, target_y: f32, max_step: f32) {
        let step = (target_y - self.y).clamp(-max_step, max_step);
        self.y += step;
        self.dy = step;
    }
}

/// The ball. `pos` is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// A motionless ball in the centre of the arena
    pub fn new(arena: &Arena) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        };
        ball.recenter(arena);
        ball
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn recenter(&mut self, arena: &Arena) {
        self.pos = arena.center() - Vec2::splat(self.size / 2.0);
    }

    /// Serve after a point: centred, random side, random angle within the
    /// bounce cone, exactly the base speed.
    pub fn serve(&mut self, arena: &Arena, rng: &mut Pcg32) {
        self.recenter(arena);
        let angle: f32 = rng.random_range(-MAX_BOUNCE_ANGLE..=MAX_BOUNCE_ANGLE);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            direction * BALL_SPEED * angle.cos(),
            BALL_SPEED * angle.sin(),
        );
    }

    /// Opening serve at startup: full base speed horizontally, a random
    /// vertical component in `[-BALL_SPEED, BALL_SPEED)`.
    pub fn opening_serve(&mut self, arena: &Arena, rng: &mut Pcg32) {
        self.recenter(arena);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let spread: f32 = rng.random_range(-1.0..1.0);
        self.vel = Vec2::new(direction * BALL_SPEED, BALL_SPEED * spread);
    }
}

/// Running score, kept for the lifetime of the process only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub arena: Arena,
    /// Pointer-controlled paddle
    pub left: Paddle,
    /// AI-controlled paddle
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game in the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_arena(Arena::default(), seed)
    }

    /// Create a new game sized to the given arena
    pub fn with_arena(arena: Arena, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(&arena);
        ball.opening_serve(&arena, &mut rng);

        Self {
            seed,
            arena,
            left: Paddle::new(Side::Left, &arena),
            right: Paddle::new(Side::Right, &arena),
            ball,
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Pointer moved to vertical coordinate `y`: centre the left paddle on it.
    ///
    /// Applied immediately, independent of tick cadence; the last call before
    /// a tick wins.
    pub fn set_left_paddle_target(&mut self, y: f32) {
        let top = y - self.left.height / 2.0;
        self.left.set_top(top, &self.arena);
    }

    /// Re-serve the ball from the centre at base speed
    pub fn reset_ball(&mut self) {
        self.ball.serve(&self.arena, &mut self.rng);
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            arena: self.arena,
            left_paddle_y: self.left.y,
            right_paddle_y: self.right.y,
            ball: self.ball,
            score: self.score,
        }
    }
}

/// Plain-data copy of a [`GameState`], for logging and the headless CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub arena: Arena,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball: Ball,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1);
        assert_eq!(state.left.x, 10.0);
        assert_eq!(state.right.x, 800.0 - 15.0 - 10.0);
        assert_eq!(state.left.y, 200.0);
        assert_eq!(state.right.y, 200.0);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_opening_serve_bounds() {
        for seed in 0..64 {
            let state = GameState::new(seed);
            assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
            assert!(state.ball.vel.y >= -BALL_SPEED && state.ball.vel.y < BALL_SPEED);
        }
    }

    #[test]
    fn test_serve_restores_base_speed() {
        let mut state = GameState::new(7);
        state.ball.vel = Vec2::new(40.0, -13.0);
        state.ball.pos = Vec2::new(-50.0, 3.0);

        state.reset_ball();

        assert!((state.ball.speed() - BALL_SPEED).abs() < 1e-4);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));
        let angle = (state.ball.vel.y / state.ball.speed()).asin();
        assert!(angle.abs() <= MAX_BOUNCE_ANGLE + 1e-5);
    }

    #[test]
    fn test_serve_direction_uses_both_sides() {
        let mut state = GameState::new(2024);
        let mut rightward = 0;
        for _ in 0..1000 {
            state.reset_ball();
            if state.ball.vel.x > 0.0 {
                rightward += 1;
            }
        }
        assert!(
            (400..=600).contains(&rightward),
            "serve direction should be roughly even, got {} of 1000 rightward",
            rightward
        );
    }

    #[test]
    fn test_set_left_paddle_target_centres_and_clamps() {
        let mut state = GameState::new(1);

        state.set_left_paddle_target(250.0);
        assert_eq!(state.left.y, 200.0);

        state.set_left_paddle_target(10.0);
        assert_eq!(state.left.y, 0.0);

        state.set_left_paddle_target(1000.0);
        assert_eq!(state.left.y, 400.0);
        assert_eq!(state.left.dy, 400.0);
    }

    #[test]
    fn test_move_toward_never_overshoots() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(Side::Right, &arena);

        paddle.move_toward(201.5, AI_SPEED);
        assert_eq!(paddle.y, 201.5);

        paddle.move_toward(300.0, AI_SPEED);
        assert_eq!(paddle.y, 205.5);
        assert_eq!(paddle.dy, AI_SPEED);

        paddle.move_toward(0.0, AI_SPEED);
        assert_eq!(paddle.y, 201.5);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_same_seed_same_opening() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let state = GameState::new(5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.snapshot());
    }
}
