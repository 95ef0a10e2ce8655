//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod difficulty;
pub mod engine;
pub mod session;
pub mod state;

pub use ai::{AiController, PaddleMove};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use engine::{MatchEngine, TickInput};
pub use session::{FrameInput, GameSession, RectView, SessionState, Snapshot};
pub use state::{Ball, GameEvent, Paddle, Scoreboard, Side};
