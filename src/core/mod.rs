pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, StatTable};
pub use error::{ButlerError, Result};
pub use types::{GamePhase, GameTime, PetId, StatType};
