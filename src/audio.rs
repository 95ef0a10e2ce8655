//! Audio collaborator interface
//!
//! The simulation emits typed [`GameEvent`]s; [`route_events`] maps them to
//! sound kinds and hands them to whatever [`AudioSink`] the platform layer
//! provides. Playback is fire-and-forget: sinks must swallow their own
//! failures and never feed anything back into the simulation.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallHit,
    /// A point was scored
    Score,
}

/// Playback endpoint implemented by the platform layer
pub trait AudioSink {
    /// Best-effort playback; must not panic or block the simulation
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that discards every effect (headless runs, muted audio)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that logs each effect, for demo runs without an audio device
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sound: {effect:?}");
    }
}

/// Route one tick's events to the audio sink
pub fn route_events(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for event in events {
        let effect = match event {
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::Scored(_) => SoundEffect::Score,
        };
        sink.play(effect);
    }
}
