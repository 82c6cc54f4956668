//! Runtime balance rules loaded from TOML

mod loader;

pub use loader::{load_config, load_config_or_default};
