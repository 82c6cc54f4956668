pub mod pet;
pub mod progression;
pub mod stats;

pub use pet::PetState;
pub use progression::{LevelUpResult, Progression};
pub use stats::PetStats;
