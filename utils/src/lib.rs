//! Shared utilities: structured logging and TOML configuration.

pub mod config;
pub mod error;
pub mod logging;

pub use config::MeshConfig;
pub use error::ConfigError;
pub use logging::{init_logging, LogFormat};
