//! Playfield configuration
//!
//! One immutable value passed into component constructors instead of
//! process-wide globals. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Dimensions and base speeds of the playfield and its entities
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,
    /// Paddle dimensions
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle movement per tick before difficulty scaling
    pub paddle_speed: f32,
    /// Horizontal inset of each paddle from its field edge
    pub paddle_inset: f32,
    /// Ball edge length (the ball is square)
    pub ball_size: f32,
    /// Ball movement per tick before difficulty scaling
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            ball_size: BALL_SIZE,
            ball_speed_x: BALL_SPEED_X,
            ball_speed_y: BALL_SPEED_Y,
        }
    }
}

impl FieldConfig {
    /// X position of the left (human) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// X position of the right (AI) paddle
    pub fn opponent_paddle_x(&self) -> f32 {
        self.width - self.paddle_inset - self.paddle_width
    }

    /// Y position that centers a paddle vertically
    pub fn paddle_center_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }
}
