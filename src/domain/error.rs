use thiserror::Error;

/// Errors raised while loading tuning or resolving effects
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("unknown effect `{0}`")]
    UnknownEffect(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
