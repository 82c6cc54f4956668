//! Pet engine - owns one pet's state and runs every game rule against it
//!
//! The engine never drives its own timing: the host calls [`PetEngine::tick`]
//! on its cadence and passes its clock value to action requests. Every
//! observable change is published to subscribers in the order it happened.

use serde::{Deserialize, Serialize};

use crate::actions::catalog::{ActionKind, ActionRequest};
use crate::actions::cooldown::{CooldownGate, CooldownStatus};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{GamePhase, GameTime, PetId, StatType};
use crate::entity::pet::PetState;
use crate::entity::progression::LevelUpResult;
use crate::entity::stats::PetStats;
use crate::simulation::events::{PetEvent, PetObserver, SubscriptionId};

/// Result of a decay tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Stats decayed, the pet is still fine
    Decayed,
    /// Stats decayed and `stat` hit zero
    GameOver(StatType),
    /// Not playing; nothing changed
    Skipped(GamePhase),
}

/// Result of an action request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Performed {
        stat: StatType,
        value: f32,
        level_up: LevelUpResult,
    },
    /// Rejected without side effects
    OnCooldown { remaining: GameTime },
    /// Paused or finished; nothing changed
    NotPlaying(GamePhase),
}

impl ActionOutcome {
    pub fn performed(&self) -> bool {
        matches!(self, ActionOutcome::Performed { .. })
    }

    /// Remaining cooldown when the request was rejected for it
    pub fn remaining(&self) -> Option<GameTime> {
        match self {
            ActionOutcome::OnCooldown { remaining } => Some(*remaining),
            _ => None,
        }
    }
}

/// Orchestrates the stat store, cooldown gate and progression for one pet
pub struct PetEngine {
    id: PetId,
    config: GameConfig,
    state: PetState,
    cooldowns: CooldownGate,
    subscribers: Vec<(SubscriptionId, Box<dyn PetObserver>)>,
    next_subscription: u64,
}

impl std::fmt::Debug for PetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetEngine")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for PetEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl PetEngine {
    /// Create an engine with a fresh pet. The config is taken as-is.
    pub fn new(config: GameConfig) -> Self {
        let state = PetState::new(PetStats::uniform(config.starting_value));
        let cooldowns = CooldownGate::new(config.cooldowns);

        Self {
            id: PetId::new(),
            config,
            state,
            cooldowns,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Validate the config first
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn stat(&self, stat: StatType) -> f32 {
        self.state.stat(stat)
    }

    // === SUBSCRIPTIONS ===

    pub fn subscribe(&mut self, observer: impl PetObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: PetEvent) {
        for (_, observer) in &mut self.subscribers {
            observer.on_event(&event);
        }
    }

    // === DECAY ===

    /// Decay every stat by `rate`. Only runs while playing.
    pub fn tick(&mut self, rate: f32) -> TickOutcome {
        if !self.state.is_playing() {
            return TickOutcome::Skipped(self.state.phase);
        }

        self.state.stats.decay_all(rate);
        for stat in StatType::ALL {
            let value = self.state.stats.get(stat);
            self.emit(PetEvent::StatChanged { stat, value });
        }

        match self.check_game_over() {
            Some(stat) => TickOutcome::GameOver(stat),
            None => TickOutcome::Decayed,
        }
    }

    /// Tick with the configured decay rate
    pub fn tick_default(&mut self) -> TickOutcome {
        self.tick(self.config.decay_rate)
    }

    // === ACTIONS ===

    /// Validate an action against the phase and its cooldown, then apply it
    pub fn try_perform_action(&mut self, request: &ActionRequest, now: GameTime) -> ActionOutcome {
        if !self.state.is_playing() {
            return ActionOutcome::NotPlaying(self.state.phase);
        }

        let stat = request.stat;
        if !self.cooldowns.can_perform(stat, now) {
            let remaining = self.cooldowns.remaining(stat, now);
            tracing::debug!(
                "{} on cooldown, {:.1} remaining",
                request.label,
                remaining
            );
            return ActionOutcome::OnCooldown { remaining };
        }

        let value = self.apply_stat_change(stat, request.delta);
        let level_up = if self.state.is_playing() {
            self.apply_experience(request.exp_reward)
        } else {
            LevelUpResult::NoChange
        };

        self.cooldowns.record(stat, now);

        ActionOutcome::Performed {
            stat,
            value,
            level_up,
        }
    }

    /// Perform one of the standard actions with its configured reward
    pub fn perform(&mut self, kind: ActionKind, now: GameTime) -> ActionOutcome {
        let request = kind.request(&self.config);
        self.try_perform_action(&request, now)
    }

    /// Change a stat outside the action system (no cooldown, no experience)
    pub fn adjust_stat(&mut self, stat: StatType, amount: f32) -> Option<f32> {
        if !self.state.is_playing() {
            return None;
        }
        Some(self.apply_stat_change(stat, amount))
    }

    /// Award experience outside the action system
    pub fn grant_experience(&mut self, amount: f32) -> Option<LevelUpResult> {
        if !self.state.is_playing() {
            return None;
        }
        Some(self.apply_experience(amount))
    }

    pub fn can_perform(&self, stat: StatType, now: GameTime) -> bool {
        self.cooldowns.can_perform(stat, now)
    }

    pub fn remaining_cooldown(&self, stat: StatType, now: GameTime) -> GameTime {
        self.cooldowns.remaining(stat, now)
    }

    pub fn cooldown_status(&self, now: GameTime) -> Vec<CooldownStatus> {
        self.cooldowns.status(now)
    }

    // === LIFECYCLE ===

    /// Suspend decay and actions. Cooldown timestamps stay absolute.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        tracing::debug!(pet = %self.id, "Paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Playing;
        tracing::debug!(pet = %self.id, "Resumed");
        true
    }

    fn apply_stat_change(&mut self, stat: StatType, amount: f32) -> f32 {
        let value = self.state.stats.apply_delta(stat, amount);
        self.emit(PetEvent::StatChanged { stat, value });
        self.check_game_over();
        value
    }

    fn apply_experience(&mut self, amount: f32) -> LevelUpResult {
        let result = self.state.progression.add_experience(amount);
        match result {
            LevelUpResult::NoChange => {}
            LevelUpResult::LevelUp { level } => {
                let event = PetEvent::LevelChanged {
                    level,
                    experience: self.state.progression.experience(),
                    level_name: self.state.progression.level_name().to_string(),
                };
                self.emit(event);
            }
            LevelUpResult::GameComplete => {
                self.state.phase = GamePhase::GameComplete;
                self.emit(PetEvent::GameComplete);
            }
        }
        result
    }

    /// Enter GameOver if a stat is depleted; fires at most once
    fn check_game_over(&mut self) -> Option<StatType> {
        if !self.state.is_playing() {
            return None;
        }
        let stat = self.state.stats.depleted()?;
        self.state.phase = GamePhase::GameOver;
        self.emit(PetEvent::GameOver);
        Some(stat)
    }
}
