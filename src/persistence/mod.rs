//! Persistence module
//!
//! Configuration save/load using serde_json.

pub mod codec;
pub mod config_file;

pub use codec::{from_json, to_json};
pub use config_file::{load_values, save_values, ConfigError, ConfigFile};
