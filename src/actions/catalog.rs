//! Caretaker action definitions and catalog

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::types::StatType;

/// A request to change one stat and earn experience
///
/// Built per call by whatever decides the magnitude (a button, a minigame);
/// the engine only validates and applies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub stat: StatType,
    pub delta: f32,
    pub exp_reward: f32,
    pub label: String,
}

impl ActionRequest {
    pub fn new(stat: StatType, delta: f32, exp_reward: f32, label: impl Into<String>) -> Self {
        Self {
            stat,
            delta,
            exp_reward,
            label: label.into(),
        }
    }
}

/// The standard caretaker actions, one per stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Feed,
    Clean,
    Play,
    Hospital,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Feed,
        ActionKind::Clean,
        ActionKind::Play,
        ActionKind::Hospital,
    ];

    /// The action that restores `stat`
    pub fn for_stat(stat: StatType) -> Self {
        match stat {
            StatType::Hunger => ActionKind::Feed,
            StatType::Cleanliness => ActionKind::Clean,
            StatType::Fun => ActionKind::Play,
            StatType::Health => ActionKind::Hospital,
        }
    }

    pub fn stat(&self) -> StatType {
        match self {
            ActionKind::Feed => StatType::Hunger,
            ActionKind::Clean => StatType::Cleanliness,
            ActionKind::Play => StatType::Fun,
            ActionKind::Hospital => StatType::Health,
        }
    }

    /// How much the action restores
    pub fn stat_delta(&self) -> f32 {
        match self {
            ActionKind::Feed => 25.0,
            ActionKind::Clean => 10.0,
            ActionKind::Play => 15.0,
            // A hospital visit always fully heals
            ActionKind::Hospital => 100.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Clean => "clean",
            ActionKind::Play => "play",
            ActionKind::Hospital => "hospital",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "feed" => Some(ActionKind::Feed),
            "clean" => Some(ActionKind::Clean),
            "play" => Some(ActionKind::Play),
            "hospital" => Some(ActionKind::Hospital),
            _ => None,
        }
    }

    /// Request with the configured base reward
    pub fn request(&self, config: &GameConfig) -> ActionRequest {
        ActionRequest::new(
            self.stat(),
            self.stat_delta(),
            config.reward(self.stat()),
            self.label(),
        )
    }

    /// Play request whose reward depends on how the minigame went
    pub fn play(result: MiniGameResult) -> ActionRequest {
        ActionRequest::new(
            StatType::Fun,
            ActionKind::Play.stat_delta(),
            result.exp_reward(),
            ActionKind::Play.label(),
        )
    }
}

/// Grade of a finished minigame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MiniGameResult {
    /// Failing still earns something
    Fail,
    #[default]
    Normal,
    Perfect,
}

impl MiniGameResult {
    pub fn exp_reward(&self) -> f32 {
        match self {
            MiniGameResult::Fail => 5.0,
            MiniGameResult::Normal => 10.0,
            MiniGameResult::Perfect => 20.0,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fail" => Some(MiniGameResult::Fail),
            "normal" => Some(MiniGameResult::Normal),
            "perfect" => Some(MiniGameResult::Perfect),
            _ => None,
        }
    }
}
