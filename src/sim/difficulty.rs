//! Difficulty presets
//!
//! A fixed enumerated variant with an associated-data table resolved at
//! compile time - looking up a profile cannot fail.

use serde::{Deserialize, Serialize};

/// Difficulty tier selected from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Scaling constants for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Scales the AI paddle's movement speed
    pub ai_speed_multiplier: f32,
    /// Probability the AI reacts on a given tick (models imperfect reaction)
    pub ai_reaction_probability: f32,
    /// Scales the ball's base speed on both axes
    pub ball_speed_multiplier: f32,
}

const EASY: DifficultyProfile = DifficultyProfile {
    ai_speed_multiplier: 0.5,
    ai_reaction_probability: 0.6,
    ball_speed_multiplier: 0.8,
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    ai_speed_multiplier: 0.8,
    ai_reaction_probability: 0.8,
    ball_speed_multiplier: 1.0,
};

const HARD: DifficultyProfile = DifficultyProfile {
    ai_speed_multiplier: 1.2,
    ai_reaction_probability: 0.95,
    ball_speed_multiplier: 1.3,
};

impl Difficulty {
    /// The scaling profile for this tier
    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Map the menu's numeric selector keys (1/2/3) to a tier
    pub fn from_selector(key: u8) -> Option<Self> {
        match key {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}
