//! Fixed timestep match simulation
//!
//! One [`MatchEngine::tick`] call advances the match by exactly one step:
//! input, ball movement, AI, collision resolution, scoring. Mutation order
//! is total and deterministic; with a fixed seed a whole match replays
//! identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ai::{AiController, PaddleMove};
use super::difficulty::Difficulty;
use super::state::{Ball, GameEvent, Paddle, Scoreboard, Side};
use crate::config::FieldConfig;
use crate::consts::DEFLECTION_SCALE;

/// Input commands for a single tick (held movement keys)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
}

/// Owns the entities of one match and runs the per-tick simulation
#[derive(Debug, Clone)]
pub struct MatchEngine {
    pub cfg: FieldConfig,
    pub difficulty: Difficulty,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub ai: AiController,
    pub score: Scoreboard,
    rng: Pcg32,
}

impl MatchEngine {
    pub fn new(cfg: FieldConfig, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let profile = difficulty.profile();

        let player = Paddle::new(cfg.player_paddle_x(), cfg.paddle_center_y(), &cfg);
        let mut opponent = Paddle::new(cfg.opponent_paddle_x(), cfg.paddle_center_y(), &cfg);
        let mut ai = AiController::new(profile);
        ai.set_difficulty(profile, &mut opponent, &cfg);
        let ball = Ball::new(&cfg, profile, &mut rng);

        Self {
            cfg,
            difficulty,
            player,
            opponent,
            ball,
            ai,
            score: Scoreboard::default(),
            rng,
        }
    }

    /// Switch difficulty: rescale the ball and retune the AI in place
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        let profile = difficulty.profile();
        self.ball.apply_difficulty(&self.cfg, profile);
        self.ai.set_difficulty(profile, &mut self.opponent, &self.cfg);
    }

    /// Re-center the ball with the active profile
    pub fn reset_ball(&mut self) {
        self.ball
            .reset(&self.cfg, self.difficulty.profile(), &mut self.rng);
    }

    /// Advance the match by one fixed timestep
    ///
    /// Returns the events this tick produced, for the dispatcher to route
    /// to the audio/render collaborators.
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        // 1. Human paddle intent. Both keys may apply on the same tick.
        if input.move_up {
            self.player.move_up();
        }
        if input.move_down {
            self.player.move_down();
        }

        // 2. Ball movement and wall bounce
        if let Some(event) = self.ball.advance(&self.cfg) {
            events.push(event);
        }

        // 3. AI decision, applied immediately
        match self.ai.decide(&self.opponent, &self.ball, &mut self.rng) {
            Some(PaddleMove::Up) => self.opponent.move_up(),
            Some(PaddleMove::Down) => self.opponent.move_down(),
            None => {}
        }

        // 4. Paddle collisions, player then opponent. The velocity-sign gate
        //    stops repeated reflection while the boxes still overlap.
        if self.ball.overlaps(&self.player) && self.ball.vel.x < 0.0 {
            deflect(&mut self.ball, &self.player);
            events.push(GameEvent::PaddleHit);
        }
        if self.ball.overlaps(&self.opponent) && self.ball.vel.x > 0.0 {
            deflect(&mut self.ball, &self.opponent);
            events.push(GameEvent::PaddleHit);
        }

        // 5. Scoring. The checks are mutually exclusive per tick.
        if self.ball.pos.x < 0.0 {
            events.push(self.score_point(Side::Opponent));
        } else if self.ball.pos.x > self.cfg.width {
            events.push(self.score_point(Side::Player));
        }

        events
    }

    fn score_point(&mut self, side: Side) -> GameEvent {
        self.score.record_point(side);
        log::debug!(
            "point for {side:?}, score {}-{}",
            self.score.player,
            self.score.opponent
        );
        self.reset_ball();
        GameEvent::Scored(side)
    }
}

/// Reflect the ball off a paddle
///
/// The horizontal velocity flips; the vertical velocity is replaced by a
/// direct function of the strike position. `hit_offset` is deliberately not
/// clamped - partial overlap at a paddle edge steepens the deflection.
fn deflect(ball: &mut Ball, paddle: &Paddle) {
    ball.vel.x = -ball.vel.x;
    let hit_offset = (ball.pos.y - paddle.y) / paddle.height;
    ball.vel.y = (hit_offset - 0.5) * DEFLECTION_SCALE;
}
