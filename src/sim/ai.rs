//! Rule-based opponent
//!
//! The controller reads the ball and its own paddle each tick and issues at
//! most one move. It never mutates state itself; the engine applies the
//! returned move so mutation ordering stays total within a tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::state::{Ball, Paddle};
use crate::config::FieldConfig;
use crate::consts::AI_DEAD_ZONE;

/// A single paddle move decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Controller for the opponent paddle on the right side of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiController {
    /// Probability of reacting on a tick where the ball approaches
    reaction_probability: f32,
}

impl AiController {
    pub fn new(profile: &DifficultyProfile) -> Self {
        Self {
            reaction_probability: profile.ai_reaction_probability,
        }
    }

    /// Apply a new difficulty: reaction probability here, movement speed on
    /// the paddle itself.
    pub fn set_difficulty(
        &mut self,
        profile: &DifficultyProfile,
        paddle: &mut Paddle,
        cfg: &FieldConfig,
    ) {
        self.reaction_probability = profile.ai_reaction_probability;
        paddle.speed = cfg.paddle_speed * profile.ai_speed_multiplier;
    }

    /// Decide this tick's move, if any
    ///
    /// Only acts while the ball moves toward the right side. The reaction
    /// roll models imperfect reflexes; within the dead-zone around the ball
    /// center the paddle holds still to avoid jitter.
    pub fn decide(&self, paddle: &Paddle, ball: &Ball, rng: &mut impl Rng) -> Option<PaddleMove> {
        if ball.vel.x <= 0.0 {
            return None;
        }
        if !rng.random_bool(f64::from(self.reaction_probability)) {
            return None;
        }

        let paddle_center = paddle.center_y();
        let ball_center = ball.center_y();
        if paddle_center < ball_center - AI_DEAD_ZONE {
            Some(PaddleMove::Down)
        } else if paddle_center > ball_center + AI_DEAD_ZONE {
            Some(PaddleMove::Up)
        } else {
            None
        }
    }
}
