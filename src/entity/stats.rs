//! The cat's wellbeing stats and their decay

use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_STAT_VALUE, STAT_MAX, STAT_MIN};
use crate::core::types::StatType;

/// Four bounded stats, each always within [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStats {
    /// 0.0 = starving, 100.0 = full
    hunger: f32,
    /// 0.0 = filthy, 100.0 = spotless
    cleanliness: f32,
    /// 0.0 = bored, 100.0 = delighted
    fun: f32,
    /// 0.0 = dying, 100.0 = healthy
    health: f32,
}

impl Default for PetStats {
    fn default() -> Self {
        Self::uniform(DEFAULT_STAT_VALUE)
    }
}

impl PetStats {
    /// All stats at the same (clamped) value
    pub fn uniform(value: f32) -> Self {
        let value = clamp_stat(value);
        Self {
            hunger: value,
            cleanliness: value,
            fun: value,
            health: value,
        }
    }

    /// Current value of a stat
    pub fn get(&self, stat: StatType) -> f32 {
        match stat {
            StatType::Hunger => self.hunger,
            StatType::Cleanliness => self.cleanliness,
            StatType::Fun => self.fun,
            StatType::Health => self.health,
        }
    }

    fn slot(&mut self, stat: StatType) -> &mut f32 {
        match stat {
            StatType::Hunger => &mut self.hunger,
            StatType::Cleanliness => &mut self.cleanliness,
            StatType::Fun => &mut self.fun,
            StatType::Health => &mut self.health,
        }
    }

    /// Add `amount` (either sign) to a stat, clamp, and return the new value
    pub fn apply_delta(&mut self, stat: StatType, amount: f32) -> f32 {
        let slot = self.slot(stat);
        *slot = clamp_stat(*slot + amount);
        *slot
    }

    /// Decay every stat by `rate`, floored at 0. Never raises a stat.
    pub fn decay_all(&mut self, rate: f32) {
        let rate = if rate > 0.0 { rate } else { 0.0 };
        for stat in StatType::ALL {
            let slot = self.slot(stat);
            *slot = (*slot - rate).max(STAT_MIN);
        }
    }

    /// First stat (in notification order) that has hit zero
    pub fn depleted(&self) -> Option<StatType> {
        StatType::all().find(|&stat| self.get(stat) <= STAT_MIN)
    }

    /// Get most pressing stat
    pub fn lowest(&self) -> (StatType, f32) {
        let mut lowest = (StatType::Hunger, self.hunger);
        for stat in StatType::ALL {
            let value = self.get(stat);
            if value < lowest.1 {
                lowest = (stat, value);
            }
        }
        lowest
    }

    /// (stat, value) pairs in notification order
    pub fn iter(&self) -> impl Iterator<Item = (StatType, f32)> + '_ {
        StatType::all().map(move |stat| (stat, self.get(stat)))
    }
}

/// Clamp to the stat range; NaN collapses to 0
fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}
