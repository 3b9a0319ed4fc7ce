pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, EngineConfig};
pub use error::{MeerasError, Result};
pub use types::{DeceasedGender, Share};
