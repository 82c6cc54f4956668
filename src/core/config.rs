//! Game configuration with documented constants
//!
//! The fixed tables (level names, level cap) are constants. Everything the
//! host may want to tune (decay pace, cooldowns, rewards) lives in
//! [`GameConfig`], whose defaults reproduce the shipped balance exactly.

use serde::{Deserialize, Serialize};

use crate::core::error::{ButlerError, Result};
use crate::core::types::{GameTime, StatType};

// ============================================================================
// Constants
// ============================================================================

/// Display names for each butler level, indexed by level
pub const LEVEL_NAMES: [&str; 5] = ["novice", "apprentice", "competent", "skilled", "perfect"];

/// Highest reachable level (0-based, five tiers)
pub const MAX_LEVEL: u8 = 4;

/// Experience needed to clear one level
pub const EXP_PER_LEVEL: f32 = 100.0;

/// Lower bound of every stat
pub const STAT_MIN: f32 = 0.0;

/// Upper bound of every stat
pub const STAT_MAX: f32 = 100.0;

/// Value every stat starts at
pub const DEFAULT_STAT_VALUE: f32 = 80.0;

/// Amount subtracted from every stat per tick
pub const DEFAULT_DECAY_RATE: f32 = 0.5;

/// Game time between two ticks
pub const DEFAULT_TICK_INTERVAL: GameTime = 1.0;

/// "Last performed" value for actions never performed yet
///
/// Far enough in the past that the longest cooldown has always elapsed.
pub const NEVER_PERFORMED: GameTime = -1000.0;

/// Name of a level, clamped to the table
pub fn level_name(level: u8) -> &'static str {
    LEVEL_NAMES[usize::from(level.min(MAX_LEVEL))]
}

// ============================================================================
// Per-stat table
// ============================================================================

/// One value per stat, keyed by name in TOML
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatTable<T> {
    pub hunger: T,
    pub cleanliness: T,
    pub fun: T,
    pub health: T,
}

impl<T: Copy> StatTable<T> {
    pub fn get(&self, stat: StatType) -> T {
        match stat {
            StatType::Hunger => self.hunger,
            StatType::Cleanliness => self.cleanliness,
            StatType::Fun => self.fun,
            StatType::Health => self.health,
        }
    }

    pub fn set(&mut self, stat: StatType, value: T) {
        match stat {
            StatType::Hunger => self.hunger = value,
            StatType::Cleanliness => self.cleanliness = value,
            StatType::Fun => self.fun = value,
            StatType::Health => self.health = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatType, T)> + '_ {
        StatType::all().map(move |stat| (stat, self.get(stat)))
    }
}

// ============================================================================
// GameConfig
// ============================================================================

/// Tunable balance values for one pet
///
/// Deserializes through [`GameConfigFile`], so a document only needs the
/// keys it changes, including single entries of the per-stat tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GameConfigFile")]
pub struct GameConfig {
    /// Value all four stats start at
    pub starting_value: f32,

    /// Amount removed from every stat by one default tick
    pub decay_rate: f32,

    /// Game time that passes per tick when the host advances its clock
    pub tick_interval: GameTime,

    /// Minimum game time between two successful actions of the same kind
    ///
    /// Cleanliness is 0: cleaning is always available and only keeps the
    /// model uniform across action kinds.
    pub cooldowns: StatTable<GameTime>,

    /// Base experience granted by each stat's action
    ///
    /// Fun is the "normal" minigame grade; the actual reward varies with
    /// the minigame result.
    pub rewards: StatTable<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_value: DEFAULT_STAT_VALUE,
            decay_rate: DEFAULT_DECAY_RATE,
            tick_interval: DEFAULT_TICK_INTERVAL,
            cooldowns: StatTable {
                hunger: 60.0,
                cleanliness: 0.0,
                fun: 60.0,
                health: 180.0,
            },
            rewards: StatTable {
                hunger: 5.0,
                cleanliness: 3.0,
                fun: 10.0,
                health: 15.0,
            },
        }
    }
}

/// Per-stat overrides as written in a TOML table
#[derive(Debug, Default, Deserialize)]
struct StatOverrides<T> {
    hunger: Option<T>,
    cleanliness: Option<T>,
    fun: Option<T>,
    health: Option<T>,
}

impl<T: Copy> StatOverrides<T> {
    fn get(&self, stat: StatType) -> Option<T> {
        match stat {
            StatType::Hunger => self.hunger,
            StatType::Cleanliness => self.cleanliness,
            StatType::Fun => self.fun,
            StatType::Health => self.health,
        }
    }

    fn apply_to(&self, table: &mut StatTable<T>) {
        for stat in StatType::all() {
            if let Some(value) = self.get(stat) {
                table.set(stat, value);
            }
        }
    }
}

/// On-disk shape of [`GameConfig`]: every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GameConfigFile {
    starting_value: Option<f32>,
    decay_rate: Option<f32>,
    tick_interval: Option<GameTime>,
    cooldowns: StatOverrides<GameTime>,
    rewards: StatOverrides<f32>,
}

impl From<GameConfigFile> for GameConfig {
    fn from(file: GameConfigFile) -> Self {
        let mut config = GameConfig::default();
        if let Some(value) = file.starting_value {
            config.starting_value = value;
        }
        if let Some(rate) = file.decay_rate {
            config.decay_rate = rate;
        }
        if let Some(interval) = file.tick_interval {
            config.tick_interval = interval;
        }
        file.cooldowns.apply_to(&mut config.cooldowns);
        file.rewards.apply_to(&mut config.rewards);
        config
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Cooldown duration for a stat's action
    pub fn cooldown(&self, stat: StatType) -> GameTime {
        self.cooldowns.get(stat)
    }

    /// Base experience reward for a stat's action
    pub fn reward(&self, stat: StatType) -> f32 {
        self.rewards.get(stat)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.starting_value > STAT_MIN && self.starting_value <= STAT_MAX) {
            return Err(ButlerError::InvalidConfig(format!(
                "starting_value ({}) must be in ({}, {}]",
                self.starting_value, STAT_MIN, STAT_MAX
            )));
        }

        if !(self.decay_rate >= 0.0) {
            return Err(ButlerError::InvalidConfig(format!(
                "decay_rate ({}) must not be negative",
                self.decay_rate
            )));
        }

        if !(self.tick_interval > 0.0) {
            return Err(ButlerError::InvalidConfig(format!(
                "tick_interval ({}) must be positive",
                self.tick_interval
            )));
        }

        for (stat, cooldown) in self.cooldowns.iter() {
            if !(cooldown >= 0.0) {
                return Err(ButlerError::InvalidConfig(format!(
                    "cooldown for {} ({}) must not be negative",
                    stat, cooldown
                )));
            }
            if cooldown > -NEVER_PERFORMED {
                return Err(ButlerError::InvalidConfig(format!(
                    "cooldown for {} ({}) exceeds {}",
                    stat, cooldown, -NEVER_PERFORMED
                )));
            }
        }

        for (stat, reward) in self.rewards.iter() {
            if !(reward >= 0.0) {
                return Err(ButlerError::InvalidConfig(format!(
                    "reward for {} ({}) must not be negative",
                    stat, reward
                )));
            }
        }

        Ok(())
    }
}
