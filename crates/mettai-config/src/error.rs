use thiserror::Error;

/// Errors raised while resolving settings.
///
/// Configuration errors are fatal: they surface once at startup and always
/// name the offending key, so there is nothing to retry or recover from.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{key}`")]
    MissingKey { key: &'static str },

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("conflicting settings: {reason}")]
    ConflictingSettings { reason: String },
}

impl ConfigError {
    pub fn missing(key: &'static str) -> Self {
        Self::MissingKey { key }
    }

    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            reason: reason.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::ConflictingSettings {
            reason: reason.into(),
        }
    }
}
