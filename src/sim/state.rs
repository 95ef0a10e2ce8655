//! Game state and core simulation types
//!
//! Paddles, ball and scoreboard. All mutation goes through bounds-checked
//! methods so invariants hold by construction.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use crate::config::FieldConfig;

/// Which side of the field scored or is being referred to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The human player, defending the left edge
    Player,
    /// The AI opponent, defending the right edge
    Opponent,
}

/// Events emitted by the simulation, routed to collaborators by a dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallHit,
    /// Ball reflected off a paddle
    PaddleHit,
    /// A point was scored for the given side
    Scored(Side),
}

/// A paddle: vertical position plus fixed dimensions
///
/// Invariant: `0 <= y <= field_height - height` at all times. Moves clamp,
/// nothing sets `y` out of range directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Movement per tick; scaled by the AI difficulty on the opponent side
    pub speed: f32,
    /// Largest legal `y` (field height minus paddle height)
    max_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, cfg: &FieldConfig) -> Self {
        Self {
            x,
            y,
            width: cfg.paddle_width,
            height: cfg.paddle_height,
            speed: cfg.paddle_speed,
            max_y: cfg.height - cfg.paddle_height,
        }
    }

    /// Move up by one speed step, clamped at the top edge
    pub fn move_up(&mut self) {
        if self.y > 0.0 {
            self.y = (self.y - self.speed).max(0.0);
        }
    }

    /// Move down by one speed step, clamped at the bottom edge
    pub fn move_down(&mut self) {
        if self.y < self.max_y {
            self.y = (self.y + self.speed).min(self.max_y);
        }
    }

    /// Vertical center of the paddle
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The ball: square of side `size`, free-moving
///
/// Vertical position reflects off the walls; horizontal position is never
/// clamped - leaving the field horizontally is the scoring signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Movement per tick; components stay nonzero on the reset paths
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Create a ball at field center, already scaled and with random signs
    pub fn new(cfg: &FieldConfig, profile: &DifficultyProfile, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(cfg.ball_speed_x, cfg.ball_speed_y),
            size: cfg.ball_size,
        };
        ball.reset(cfg, profile, rng);
        ball
    }

    /// Advance by one tick and reflect off the horizontal walls
    ///
    /// At most one vertical reflection per tick. Returns the wall-hit event
    /// when a reflection happened.
    pub fn advance(&mut self, cfg: &FieldConfig) -> Option<GameEvent> {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y >= cfg.height - self.size {
            self.vel.y = -self.vel.y;
            return Some(GameEvent::WallHit);
        }
        None
    }

    /// Rescale velocity magnitudes for a profile, preserving direction
    pub fn apply_difficulty(&mut self, cfg: &FieldConfig, profile: &DifficultyProfile) {
        self.vel.x = cfg.ball_speed_x * profile.ball_speed_multiplier * self.vel.x.signum();
        self.vel.y = cfg.ball_speed_y * profile.ball_speed_multiplier * self.vel.y.signum();
    }

    /// Re-center the ball, rescale speed and randomize direction
    ///
    /// Each velocity axis flips sign with probability 0.5, independent of
    /// the other axis and of the prior direction.
    pub fn reset(&mut self, cfg: &FieldConfig, profile: &DifficultyProfile, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            cfg.width / 2.0 - self.size / 2.0,
            cfg.height / 2.0 - self.size / 2.0,
        );
        self.apply_difficulty(cfg, profile);

        if rng.random_bool(0.5) {
            self.vel.x = -self.vel.x;
        }
        if rng.random_bool(0.5) {
            self.vel.y = -self.vel.y;
        }
    }

    /// Axis-aligned bounding-box overlap with a paddle
    pub fn overlaps(&self, paddle: &Paddle) -> bool {
        self.pos.x < paddle.x + paddle.width
            && self.pos.x + self.size > paddle.x
            && self.pos.y < paddle.y + paddle.height
            && self.pos.y + self.size > paddle.y
    }

    /// Vertical center of the ball
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Point tally for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player: u32,
    pub opponent: u32,
}

impl Scoreboard {
    /// Increment the named side's counter by exactly one
    pub fn record_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Zero both counters (difficulty (re)selection only)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::Difficulty;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn cfg() -> FieldConfig {
        FieldConfig::default()
    }

    #[test]
    fn paddle_clamps_at_top() {
        let cfg = cfg();
        let mut paddle = Paddle::new(30.0, 3.0, &cfg);
        paddle.move_up();
        assert_eq!(paddle.y, 0.0);
        paddle.move_up();
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn paddle_clamps_at_bottom() {
        let cfg = cfg();
        let max_y = cfg.height - cfg.paddle_height;
        let mut paddle = Paddle::new(30.0, max_y - 3.0, &cfg);
        paddle.move_down();
        assert_eq!(paddle.y, max_y);
        paddle.move_down();
        assert_eq!(paddle.y, max_y);
    }

    #[test]
    fn ball_reflects_off_top_wall_once() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);
        ball.pos = Vec2::new(400.0, 2.0);
        ball.vel = Vec2::new(6.0, -4.0);

        let event = ball.advance(&cfg);
        assert_eq!(event, Some(GameEvent::WallHit));
        assert_eq!(ball.vel.y, 4.0);

        // Moving away now, no second reflection
        assert_eq!(ball.advance(&cfg), None);
        assert_eq!(ball.vel.y, 4.0);
    }

    #[test]
    fn ball_reflects_off_bottom_wall() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);
        ball.pos = Vec2::new(400.0, cfg.height - cfg.ball_size - 2.0);
        ball.vel = Vec2::new(6.0, 4.0);

        assert_eq!(ball.advance(&cfg), Some(GameEvent::WallHit));
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn ball_horizontal_position_is_never_clamped() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);
        ball.pos = Vec2::new(cfg.width - 1.0, 300.0);
        ball.vel = Vec2::new(6.0, 1.0);

        ball.advance(&cfg);
        assert!(ball.pos.x > cfg.width);
    }

    #[test]
    fn apply_difficulty_preserves_signs() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);
        ball.vel = Vec2::new(-6.0, 4.0);

        ball.apply_difficulty(&cfg, Difficulty::Hard.profile());
        assert!((ball.vel.x - (-7.8)).abs() < 1e-4);
        assert!((ball.vel.y - 5.2).abs() < 1e-4);
    }

    #[test]
    fn reset_centers_and_rescales() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);
        ball.pos = Vec2::new(-50.0, 10.0);

        ball.reset(&cfg, Difficulty::Easy.profile(), &mut rng);
        assert_eq!(ball.pos, Vec2::new(392.5, 292.5));
        assert!((ball.vel.x.abs() - 4.8).abs() < 1e-4);
        assert!((ball.vel.y.abs() - 3.2).abs() < 1e-4);
    }

    #[test]
    fn reset_direction_signs_are_independent() {
        let cfg = cfg();
        let mut rng = Pcg32::seed_from_u64(1234);
        let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);

        let n = 1000;
        let mut x_positive = 0;
        let mut y_positive = 0;
        let mut both_positive = 0;
        for _ in 0..n {
            ball.reset(&cfg, Difficulty::Medium.profile(), &mut rng);
            if ball.vel.x > 0.0 {
                x_positive += 1;
            }
            if ball.vel.y > 0.0 {
                y_positive += 1;
            }
            if ball.vel.x > 0.0 && ball.vel.y > 0.0 {
                both_positive += 1;
            }
        }

        // Each axis ~50/50, joint ~25%
        assert!((400..=600).contains(&x_positive), "x sign skewed: {x_positive}");
        assert!((400..=600).contains(&y_positive), "y sign skewed: {y_positive}");
        assert!((175..=325).contains(&both_positive), "signs correlated: {both_positive}");
    }

    #[test]
    fn scoreboard_records_one_point_per_event() {
        let mut score = Scoreboard::default();
        score.record_point(Side::Player);
        score.record_point(Side::Opponent);
        score.record_point(Side::Player);
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 1);

        score.reset();
        assert_eq!(score, Scoreboard::default());
    }

    proptest! {
        /// The paddle bound invariant holds for arbitrary move sequences.
        #[test]
        fn paddle_stays_in_bounds(moves in proptest::collection::vec(any::<bool>(), 0..500)) {
            let cfg = FieldConfig::default();
            let mut paddle = Paddle::new(30.0, cfg.paddle_center_y(), &cfg);
            for up in moves {
                if up {
                    paddle.move_up();
                } else {
                    paddle.move_down();
                }
                prop_assert!(paddle.y >= 0.0);
                prop_assert!(paddle.y <= cfg.height - cfg.paddle_height);
            }
        }

        /// After a reset, speed magnitude equals base speed times the profile
        /// multiplier on both axes, for any difficulty and seed.
        #[test]
        fn reset_speed_matches_profile(seed in any::<u64>(), level in 0u8..3) {
            let cfg = FieldConfig::default();
            let difficulty = match level {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            };
            let profile = difficulty.profile();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = Ball::new(&cfg, Difficulty::Medium.profile(), &mut rng);

            ball.reset(&cfg, profile, &mut rng);
            let expected_x = cfg.ball_speed_x * profile.ball_speed_multiplier;
            let expected_y = cfg.ball_speed_y * profile.ball_speed_multiplier;
            prop_assert!((ball.vel.x.abs() - expected_x).abs() < 1e-4);
            prop_assert!((ball.vel.y.abs() - expected_y).abs() < 1e-4);
            prop_assert!(ball.vel.x != 0.0 && ball.vel.y != 0.0);
        }
    }
}
