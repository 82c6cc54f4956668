//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pet (one per engine instance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub Uuid);

impl PetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game clock value supplied by the host (time units, usually seconds)
pub type GameTime = f64;

/// The four wellbeing stats of the cat
///
/// Each stat has exactly one caretaker action associated with it, so the
/// same enum keys the cooldown and reward tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatType {
    Hunger,
    Cleanliness,
    Fun,
    Health,
}

impl StatType {
    /// All stats in notification order
    pub const ALL: [StatType; 4] = [
        StatType::Hunger,
        StatType::Cleanliness,
        StatType::Fun,
        StatType::Health,
    ];

    pub fn all() -> impl Iterator<Item = StatType> {
        Self::ALL.into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Hunger => "hunger",
            StatType::Cleanliness => "cleanliness",
            StatType::Fun => "fun",
            StatType::Health => "health",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle phase of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Decay and actions suspended; stats and cooldowns untouched
    Paused,
    /// A stat reached zero
    GameOver,
    /// Max level reached and the threshold met once more
    GameComplete,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameComplete)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game over",
            GamePhase::GameComplete => "game complete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::GameComplete.is_terminal());
    }

    #[test]
    fn test_pet_ids_are_unique() {
        assert_ne!(PetId::new(), PetId::new());
    }
}
