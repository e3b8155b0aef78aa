//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is treated as its bounding square and
//! paddles as rectangles. Checks are discrete per tick, so a fast enough ball
//! can tunnel through a paddle.

use glam::Vec2;

use super::state::{Arena, Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Reflect the ball off the top or bottom edge.
///
/// Top takes precedence; at most one reflection per call. Returns true if the
/// ball was reflected.
pub fn ball_wall_collision(ball: &mut Ball, arena: &Arena) -> bool {
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + ball.size >= arena.height {
        ball.pos.y = arena.height - ball.size;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Ball's vertical extent overlaps the paddle's (touching edges don't count)
pub fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size > paddle.y && ball.pos.y < paddle.bottom()
}

/// Ball has reached the paddle's face from the playfield side
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let reached = match paddle.side {
        Side::Left => ball.pos.x <= paddle.right(),
        Side::Right => ball.pos.x + ball.size >= paddle.x,
    };
    reached && overlaps_vertically(ball, paddle)
}

/// Outgoing angle for a ball striking `paddle`.
///
/// Linear in the offset between ball centre and paddle centre, normalised by
/// half the paddle height: 0 at the centre, ±45° at the edges.
pub fn bounce_angle(ball: &Ball, paddle: &Paddle) -> f32 {
    let offset = (ball.center().y - paddle.center_y()) / (paddle.height / 2.0);
    offset.clamp(-1.0, 1.0) * MAX_BOUNCE_ANGLE
}

/// Velocity leaving a paddle: same speed, new angle, horizontal component
/// pointing away from `side`.
pub fn deflect(vel: Vec2, angle: f32, side: Side) -> Vec2 {
    let speed = vel.length();
    let out = Vec2::new(speed * angle.cos(), speed * angle.sin());
    Vec2::new(out.x.abs() * side.away_sign(), out.y)
}

/// Bounce the ball off `paddle` if they touch.
///
/// The ball is placed flush against the paddle face before its velocity is
/// redirected. Returns true on a hit.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !touches_paddle(ball, paddle) {
        return false;
    }

    ball.pos.x = match paddle.side {
        Side::Left => paddle.right(),
        Side::Right => paddle.x - ball.size,
    };
    let angle = bounce_angle(ball, paddle);
    ball.vel = deflect(ball.vel, angle, paddle.side);
    true
}

/// Side that wins the point if the ball has left the arena
pub fn ball_exit(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x + ball.size > arena.width {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn setup() -> (Arena, Paddle, Paddle) {
        let arena = Arena::default();
        let left = Paddle::new(Side::Left, &arena);
        let right = Paddle::new(Side::Right, &arena);
        (arena, left, right)
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            size: 16.0,
        }
    }

    #[test]
    fn test_top_wall_reflection() {
        let (arena, _, _) = setup();
        let mut ball = ball_at(100.0, -3.0, Vec2::new(3.0, -4.0));

        assert!(ball_wall_collision(&mut ball, &arena));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let (arena, _, _) = setup();
        let mut ball = ball_at(100.0, 490.0, Vec2::new(-2.0, 5.0));

        assert!(ball_wall_collision(&mut ball, &arena));
        assert_eq!(ball.pos.y, 500.0 - 16.0);
        assert_eq!(ball.vel, Vec2::new(-2.0, -5.0));
    }

    #[test]
    fn test_top_wall_takes_precedence() {
        // Arena shorter than the ball: both edges crossed at once
        let arena = Arena::new(800.0, 10.0);
        let mut ball = ball_at(100.0, -1.0, Vec2::new(1.0, -2.0));

        assert!(ball_wall_collision(&mut ball, &arena));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_no_wall_contact_in_open_field() {
        let (arena, _, _) = setup();
        let mut ball = ball_at(100.0, 100.0, Vec2::new(3.0, -4.0));
        assert!(!ball_wall_collision(&mut ball, &arena));
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_vertical_overlap_is_strict() {
        let (_, left, _) = setup();
        // Ball bottom exactly on paddle top
        let touching = ball_at(20.0, left.y - 16.0, Vec2::ZERO);
        assert!(!overlaps_vertically(&touching, &left));

        let inside = ball_at(20.0, left.y - 15.0, Vec2::ZERO);
        assert!(overlaps_vertically(&inside, &left));

        let below = ball_at(20.0, left.bottom(), Vec2::ZERO);
        assert!(!overlaps_vertically(&below, &left));
    }

    #[test]
    fn test_left_paddle_center_hit_goes_straight() {
        let (_, left, _) = setup();
        let mut ball = ball_at(22.0, left.center_y() - 8.0, Vec2::new(-6.0, 0.0));

        assert!(ball_paddle_collision(&mut ball, &left));
        assert_eq!(ball.pos.x, left.right());
        assert_eq!(ball.vel, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_left_paddle_edge_hit_is_45_degrees() {
        let (_, left, _) = setup();
        // Ball centre level with the paddle's top edge
        let mut ball = ball_at(22.0, left.y - 8.0, Vec2::new(-6.0, 0.0));

        assert!(ball_paddle_collision(&mut ball, &left));
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle + FRAC_PI_4).abs() < 1e-5, "got angle {}", angle);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_right_paddle_bounce_sends_ball_left() {
        let (_, _, right) = setup();
        let mut ball = ball_at(
            right.x - 10.0,
            right.bottom() - 8.0,
            Vec2::new(6.0, 0.0),
        );

        assert!(ball_paddle_collision(&mut ball, &right));
        assert_eq!(ball.pos.x, right.x - 16.0);
        assert!(ball.vel.x < 0.0);
        let angle = ball.vel.y.atan2(-ball.vel.x);
        assert!((angle - FRAC_PI_4).abs() < 1e-5, "got angle {}", angle);
    }

    #[test]
    fn test_paddle_bounce_preserves_speed() {
        let (_, left, right) = setup();
        let vel = Vec2::new(-4.5, 2.7);
        let mut ball = ball_at(20.0, left.y + 13.0, vel);
        assert!(ball_paddle_collision(&mut ball, &left));
        assert!((ball.speed() - vel.length()).abs() < 1e-4);

        let vel = Vec2::new(5.1, -3.3);
        let mut ball = ball_at(right.x - 12.0, right.y + 70.0, vel);
        assert!(ball_paddle_collision(&mut ball, &right));
        assert!((ball.speed() - vel.length()).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_angle_clamped_beyond_edge() {
        let (_, left, _) = setup();
        // Ball mostly above the paddle but still overlapping by one pixel
        let ball = ball_at(22.0, left.y - 15.0, Vec2::new(-6.0, 0.0));
        assert_eq!(bounce_angle(&ball, &left), -MAX_BOUNCE_ANGLE);
    }

    #[test]
    fn test_miss_when_paddle_elsewhere() {
        let (_, left, right) = setup();
        let mut ball = ball_at(5.0, 20.0, Vec2::new(-6.0, 0.0));
        assert!(!ball_paddle_collision(&mut ball, &left));

        let mut ball = ball_at(780.0, 20.0, Vec2::new(6.0, 0.0));
        assert!(!ball_paddle_collision(&mut ball, &right));
        assert_eq!(ball.vel, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_ball_exit() {
        let (arena, _, _) = setup();
        assert_eq!(ball_exit(&ball_at(-0.1, 50.0, Vec2::ZERO), &arena), Some(Side::Right));
        assert_eq!(ball_exit(&ball_at(784.5, 50.0, Vec2::ZERO), &arena), Some(Side::Left));
        assert_eq!(ball_exit(&ball_at(0.0, 50.0, Vec2::ZERO), &arena), None);
        assert_eq!(ball_exit(&ball_at(784.0, 50.0, Vec2::ZERO), &arena), None);
    }
}
