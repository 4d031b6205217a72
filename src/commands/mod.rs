//! CLI command handlers for bizos.
//!
//! # Commands
//!
//! - [`run`] - Launch the dashboard
//! - [`models`] - List models available to the API key
//! - [`ping`] - Send a test prompt to the primary model
//! - [`config`] - Show the effective configuration
//! - [`init`] - Create the config directory and templates

mod config;
mod init;
mod models;
mod ping;
mod run;

pub use config::config_command;
pub use init::init_command;
pub use models::models_command;
pub use ping::{ping_command, PING_PROMPT};
pub use run::{build_app, run_command};

use crate::assistant::GeminiClient;
use crate::config::{self as app_config, Config};
use crate::error::{BizOsError, Result};

/// Build a Gemini client or fail with [`BizOsError::MissingApiKey`].
///
/// One-shot commands have nothing to show without a key, unlike the
/// dashboard, which starts anyway and shows a banner.
fn require_client(config: &Config) -> Result<GeminiClient> {
    match app_config::load_api_key()? {
        Some(key) => GeminiClient::from_config(key, config),
        None => Err(BizOsError::MissingApiKey(app_config::secrets_path()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_path_comes_from_app_config() {
        let path = app_config::secrets_path().unwrap();
        assert!(path.ends_with("bizos/secrets.toml"));
        assert_eq!(path.parent(), app_config::config_path().unwrap().parent());
    }
}
