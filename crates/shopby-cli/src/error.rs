use shopby_core::{ConfigError, ShopbyError, ShopbyErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{failed} of {total} products failed validation")]
    ValidationFailed { failed: usize, total: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ShopbyError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::ValidationFailed { .. } => 3,
            Self::Serialization(_) => 4,
            Self::Config(_) => 6,
            Self::Io(_) => 10,
            Self::Api(error) => match error.kind() {
                ShopbyErrorKind::InvalidRequest | ShopbyErrorKind::Temporal => 2,
                ShopbyErrorKind::Serialization => 4,
                ShopbyErrorKind::Config => 6,
                ShopbyErrorKind::Transport
                | ShopbyErrorKind::Status
                | ShopbyErrorKind::Decode => 7,
            },
        }
    }
}
