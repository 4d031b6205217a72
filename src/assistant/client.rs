use std::fmt;
use thiserror::Error;

/// Failure from a completion call. The kind is recorded in logs; the gateway
/// falls back on either.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The tier could not answer right now: network, timeout, rate limit,
    /// server error, or the model is not available to this key.
    #[error("{message}")]
    Transient {
        status: Option<u16>,
        message: String,
    },

    /// The request itself is bad (auth, malformed request or response).
    #[error("{message}")]
    Permanent {
        status: Option<u16>,
        message: String,
    },
}

impl CompletionError {
    pub fn transient(message: impl Into<String>) -> Self {
        CompletionError::Transient {
            status: None,
            message: message.into(),
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        CompletionError::Permanent {
            status: None,
            message: message.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, CompletionError::Transient { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::Transient { status, .. } | CompletionError::Permanent { status, .. } => {
                *status
            }
        }
    }
}

/// A remote text-completion backend addressed by model name.
pub trait CompletionClient {
    /// Send `text` to `model` and return the reply text. Blocks until the
    /// remote service answers or fails.
    fn generate(&self, model: &str, text: &str) -> Result<String, CompletionError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn generate(&self, model: &str, text: &str) -> Result<String, CompletionError> {
        (**self).generate(model, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Primary,
    Fallback,
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelTier::Primary => f.write_str("primary"),
            ModelTier::Fallback => f.write_str("fallback"),
        }
    }
}

/// Model names for the two tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTiers {
    pub primary: String,
    pub fallback: String,
}

impl ModelTiers {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub fn model(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Primary => &self.primary,
            ModelTier::Fallback => &self.fallback,
        }
    }
}
