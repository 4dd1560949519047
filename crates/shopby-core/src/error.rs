use thiserror::Error;

use crate::http_client::{HttpError, HttpMethod};

/// Failure to interpret a value as a KST date or date/time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("invalid {target} format (expected {}): '{value}'", .accepted.join(", "))]
    InvalidFormat {
        target: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },
    #[error("invalid type for {target}: expected a string, got {found}")]
    InvalidType {
        target: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },
    #[error("invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("failed to read env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

/// A string did not name any variant of an API enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} value '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Coarse classification of [`ShopbyError`] for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopbyErrorKind {
    Transport,
    Status,
    Decode,
    Serialization,
    InvalidRequest,
    Temporal,
    Config,
}

#[derive(Debug, Error)]
pub enum ShopbyError {
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
    #[error("{method} {url} returned status {status}")]
    Status {
        status: u16,
        method: HttpMethod,
        url: String,
        body: String,
    },
    #[error("response from {url} failed validation: {message}")]
    Decode {
        url: String,
        message: String,
        body: String,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Temporal(#[from] TemporalError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ShopbyError {
    pub const fn kind(&self) -> ShopbyErrorKind {
        match self {
            Self::Transport(_) => ShopbyErrorKind::Transport,
            Self::Status { .. } => ShopbyErrorKind::Status,
            Self::Decode { .. } => ShopbyErrorKind::Decode,
            Self::Serialization(_) => ShopbyErrorKind::Serialization,
            Self::InvalidRequest(_) => ShopbyErrorKind::InvalidRequest,
            Self::Temporal(_) => ShopbyErrorKind::Temporal,
            Self::Config(_) => ShopbyErrorKind::Config,
        }
    }

    /// True for transport failures flagged retryable and for 429 / 5xx responses.
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.retryable(),
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporal_error_lists_accepted_patterns() {
        let error = TemporalError::InvalidFormat {
            target: "KstDate",
            value: String::from("2025/03/01"),
            accepted: &["YYYY-MM-DD"],
        };
        assert_eq!(
            error.to_string(),
            "invalid KstDate format (expected YYYY-MM-DD): '2025/03/01'"
        );
    }

    #[test]
    fn server_errors_and_throttling_are_retryable() {
        let status = |status| ShopbyError::Status {
            status,
            method: HttpMethod::Get,
            url: String::from("https://server-api.e-ncp.com/orders"),
            body: String::new(),
        };
        assert!(status(503).retryable());
        assert!(status(429).retryable());
        assert!(!status(404).retryable());
        assert_eq!(status(404).status(), Some(404));
        assert_eq!(status(404).kind(), ShopbyErrorKind::Status);
    }

    #[test]
    fn transport_retryability_follows_http_error() {
        assert!(ShopbyError::from(HttpError::new("timed out")).retryable());
        assert!(!ShopbyError::from(HttpError::non_retryable("bad url")).retryable());
    }
}
