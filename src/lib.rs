//! Perfect Butler - cat-care simulation core
//!
//! Four decaying stats, cooldown-gated caretaker actions and a five-tier
//! butler progression, driven by an external tick source.

pub mod actions;
pub mod core;
pub mod entity;
pub mod rules;
pub mod simulation;
