//! Menu/playing state machine
//!
//! Top-level per-frame dispatch: in the menu only input handling runs, in
//! play every frame is input -> tick -> snapshot. Quit is not a state here;
//! process exit is driven by the platform layer.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::engine::{MatchEngine, TickInput};
use super::state::GameEvent;
use crate::config::FieldConfig;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Menu,
    Playing,
}

/// One frame's worth of input, polled once at the top of the frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Difficulty selector pressed this frame (menu only)
    pub select: Option<Difficulty>,
    /// Escape pressed this frame
    pub escape: bool,
    /// Movement keys currently held
    pub move_up: bool,
    pub move_down: bool,
}

/// Axis-aligned rectangle in a render snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of the session for the render collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub difficulty: Difficulty,
    pub player_paddle: RectView,
    pub opponent_paddle: RectView,
    pub ball: RectView,
    pub player_score: u32,
    pub opponent_score: u32,
}

/// Owns one match and sequences menu <-> playing transitions
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    engine: MatchEngine,
}

impl GameSession {
    /// Start in the menu with the default difficulty staged
    pub fn new(cfg: FieldConfig, seed: u64) -> Self {
        Self {
            state: SessionState::Menu,
            engine: MatchEngine::new(cfg, Difficulty::default(), seed),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Enter play with the chosen difficulty
    ///
    /// Re-applies the profile to the ball and the AI, zeroes the scoreboard
    /// and re-centers the ball.
    pub fn select(&mut self, difficulty: Difficulty) {
        log::info!("starting match on {}", difficulty.as_str());
        self.engine.set_difficulty(difficulty);
        self.engine.reset_ball();
        self.engine.score.reset();
        self.state = SessionState::Playing;
    }

    /// Return to the menu. Scores and positions persist but are only
    /// observable again after `select`, which resets them.
    pub fn escape(&mut self) {
        log::info!("returning to menu");
        self.state = SessionState::Menu;
    }

    /// Dispatch one frame. No physics runs while in the menu.
    pub fn frame(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        match self.state {
            SessionState::Menu => {
                if let Some(difficulty) = input.select {
                    self.select(difficulty);
                }
                Vec::new()
            }
            SessionState::Playing => {
                if input.escape {
                    self.escape();
                    return Vec::new();
                }
                self.engine.tick(&TickInput {
                    move_up: input.move_up,
                    move_down: input.move_down,
                })
            }
        }
    }

    /// Capture a read-only snapshot for the render collaborator
    pub fn snapshot(&self) -> Snapshot {
        let engine = &self.engine;
        let paddle_view = |p: &super::state::Paddle| RectView {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
        };
        Snapshot {
            state: self.state,
            difficulty: engine.difficulty,
            player_paddle: paddle_view(&engine.player),
            opponent_paddle: paddle_view(&engine.opponent),
            ball: RectView {
                x: engine.ball.pos.x,
                y: engine.ball.pos.y,
                width: engine.ball.size,
                height: engine.ball.size,
            },
            player_score: engine.score.player,
            opponent_score: engine.score.opponent,
        }
    }
}
