use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] roster_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] roster_core::StorageError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Extra line to show under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Storage(e) => Some(e.recovery_hint()),
            _ => None,
        }
    }

    /// Whether running the same command again may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
