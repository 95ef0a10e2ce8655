//! Retro Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, AI, game state)
//! - `config`: Playfield configuration passed to component constructors
//! - `audio`: Sound-effect interface for the audio collaborator
//!
//! Rendering, window management and input polling live outside this crate;
//! collaborators consume [`sim::Snapshot`] values and feed [`sim::FrameInput`]
//! back in once per frame.

pub mod audio;
pub mod config;
pub mod sim;

pub use config::FieldConfig;
pub use sim::{Difficulty, GameSession, MatchEngine};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - speeds are units per tick
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Horizontal inset of each paddle from its field edge
    pub const PADDLE_INSET: f32 = 30.0;

    /// Ball defaults - base speeds before difficulty scaling
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED_X: f32 = 6.0;
    pub const BALL_SPEED_Y: f32 = 4.0;

    /// Tolerance band in which the AI makes no correction
    pub const AI_DEAD_ZONE: f32 = 15.0;
    /// Vertical velocity per normalized strike offset on paddle hits
    pub const DEFLECTION_SCALE: f32 = 8.0;
}
