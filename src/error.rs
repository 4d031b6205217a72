use crate::assistant::CompletionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BizOsError {
    #[error("Unknown page: {0} (expected one of Landing, Dashboard, AI_Bot, Inventory)")]
    UnknownPage(String),

    #[error("Missing GEMINI_API_KEY. Add it to {0:?} or set the GEMINI_API_KEY environment variable.")]
    MissingApiKey(PathBuf),

    #[error("Invalid {column} value: {value:?}")]
    InvalidInventoryValue { column: &'static str, value: String },

    #[error("Assistant request failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BizOsError>;
