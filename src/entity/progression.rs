//! Butler experience and level progression

use serde::{Deserialize, Serialize};

use crate::core::config::{level_name, EXP_PER_LEVEL, MAX_LEVEL};

/// What a single experience grant did to the level track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelUpResult {
    NoChange,
    /// Advanced to `level`; experience reset to zero
    LevelUp { level: u8 },
    /// Threshold met again at the top level
    GameComplete,
}

/// Experience towards the next level and the level itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    experience: f32,
    level: u8,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    pub fn new() -> Self {
        Self {
            experience: 0.0,
            level: 0,
        }
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn level_name(&self) -> &'static str {
        level_name(self.level)
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Add experience and advance at most one level.
    ///
    /// On level-up the experience resets to 0 and any excess over the
    /// threshold is discarded. At the top level crossing the threshold
    /// completes the game instead and the experience is left in place.
    pub fn add_experience(&mut self, amount: f32) -> LevelUpResult {
        if amount > 0.0 {
            self.experience += amount;
        }

        if self.experience < EXP_PER_LEVEL {
            return LevelUpResult::NoChange;
        }

        if self.level < MAX_LEVEL {
            self.level += 1;
            self.experience = 0.0;
            LevelUpResult::LevelUp { level: self.level }
        } else {
            LevelUpResult::GameComplete
        }
    }

    /// Fraction of the current level cleared (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        (self.experience / EXP_PER_LEVEL).clamp(0.0, 1.0)
    }
}
