//! Aggregate state of one pet

use serde::{Deserialize, Serialize};

use crate::entity::progression::Progression;
use crate::entity::stats::PetStats;
use crate::core::types::{GamePhase, StatType};

/// Everything the engine mutates for a single pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub stats: PetStats,
    pub progression: Progression,
    pub phase: GamePhase,
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(PetStats::default())
    }
}

impl PetState {
    pub fn new(stats: PetStats) -> Self {
        Self {
            stats,
            progression: Progression::new(),
            phase: GamePhase::Playing,
        }
    }

    pub fn stat(&self, stat: StatType) -> f32 {
        self.stats.get(stat)
    }

    pub fn level(&self) -> u8 {
        self.progression.level()
    }

    pub fn experience(&self) -> f32 {
        self.progression.experience()
    }

    pub fn level_name(&self) -> &'static str {
        self.progression.level_name()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
