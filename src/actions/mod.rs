//! Caretaker actions and their cooldowns

pub mod catalog;
pub mod cooldown;

pub use catalog::{ActionKind, ActionRequest, MiniGameResult};
pub use cooldown::{CooldownGate, CooldownStatus};
