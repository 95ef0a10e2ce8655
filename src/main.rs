//! Retro Pong headless demo
//!
//! Runs the full simulation core without a renderer: a scripted pilot
//! drives the human paddle against the built-in AI for a fixed number of
//! ticks, then prints the final snapshot as JSON.
//!
//! Usage: `retro-pong [seed] [easy|medium|hard]`
//! Set `RUST_LOG=debug` to see per-event output.

use retro_pong::FieldConfig;
use retro_pong::audio::{LogAudio, route_events};
use retro_pong::consts::{AI_DEAD_ZONE, TICK_RATE};
use retro_pong::sim::{Difficulty, FrameInput, GameEvent, GameSession, Snapshot};

/// Demo length: one simulated minute
const DEMO_TICKS: u32 = 60 * TICK_RATE;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();

    log::info!(
        "demo: seed {seed}, difficulty {}, {DEMO_TICKS} ticks",
        difficulty.as_str()
    );

    let mut session = GameSession::new(FieldConfig::default(), seed);
    let mut audio = LogAudio;

    // Menu frame: pick the difficulty, as if the player pressed 1/2/3
    session.frame(&FrameInput {
        select: Some(difficulty),
        ..FrameInput::default()
    });

    for _ in 0..DEMO_TICKS {
        let input = pilot_input(&session.snapshot());
        let events = session.frame(&input);
        route_events(&events, &mut audio);

        for event in &events {
            if let GameEvent::Scored(side) = event {
                let snap = session.snapshot();
                log::info!(
                    "{side:?} scored ({}-{})",
                    snap.player_score,
                    snap.opponent_score
                );
            }
        }
    }

    let snap = session.snapshot();
    log::info!(
        "final score {}-{}",
        snap.player_score,
        snap.opponent_score
    );
    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

/// Scripted pilot for the human paddle: track the ball center, with the
/// same dead-zone the AI uses so the paddle does not oscillate.
fn pilot_input(snap: &Snapshot) -> FrameInput {
    let paddle_center = snap.player_paddle.y + snap.player_paddle.height / 2.0;
    let ball_center = snap.ball.y + snap.ball.height / 2.0;

    FrameInput {
        move_up: paddle_center > ball_center + AI_DEAD_ZONE,
        move_down: paddle_center < ball_center - AI_DEAD_ZONE,
        ..FrameInput::default()
    }
}
