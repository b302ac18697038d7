use thiserror::Error;

/// Top-level error type for the ClawChat runtime.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("reply provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChatError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ChatError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
