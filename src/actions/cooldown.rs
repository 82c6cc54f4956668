//! Per-action cooldown tracking

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::{StatTable, NEVER_PERFORMED};
use crate::core::types::{GameTime, StatType};

/// Readiness of one action kind at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownStatus {
    pub stat: StatType,
    pub ready: bool,
    pub remaining: GameTime,
}

/// Remembers when each action last succeeded and gates the next attempt
#[derive(Debug, Clone)]
pub struct CooldownGate {
    /// Action kind -> time of last successful performance
    last_performed: AHashMap<StatType, GameTime>,
    durations: StatTable<GameTime>,
}

impl CooldownGate {
    /// Gate with every action immediately available
    pub fn new(durations: StatTable<GameTime>) -> Self {
        let last_performed = StatType::all()
            .map(|stat| (stat, NEVER_PERFORMED))
            .collect();

        Self {
            last_performed,
            durations,
        }
    }

    pub fn duration(&self, stat: StatType) -> GameTime {
        self.durations.get(stat)
    }

    /// True once the cooldown since the last success has fully elapsed
    pub fn can_perform(&self, stat: StatType, now: GameTime) -> bool {
        match self.last_performed.get(&stat) {
            Some(&last) => now - last >= self.duration(stat),
            None => true,
        }
    }

    /// Time left before the action is allowed again (0 when ready)
    pub fn remaining(&self, stat: StatType, now: GameTime) -> GameTime {
        match self.last_performed.get(&stat) {
            Some(&last) => (self.duration(stat) - (now - last)).max(0.0),
            None => 0.0,
        }
    }

    /// Mark a successful performance. Only call after the action was applied.
    pub fn record(&mut self, stat: StatType, now: GameTime) {
        self.last_performed.insert(stat, now);
    }

    /// Readiness of every action kind, in stat order
    pub fn status(&self, now: GameTime) -> Vec<CooldownStatus> {
        StatType::all()
            .map(|stat| CooldownStatus {
                stat,
                ready: self.can_perform(stat, now),
                remaining: self.remaining(stat, now),
            })
            .collect()
    }
}
