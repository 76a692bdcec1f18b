use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("logging setup failed: {0}")]
    Logging(String),
}
