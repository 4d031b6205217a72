//! Run command handler.
//!
//! Launches the dashboard TUI.

use crate::assistant::{AssistantGateway, GeminiClient};
use crate::config::{self, Config};
use crate::error::{BizOsError, Result};
use crate::logging::init_file_logging;
use crate::session::{Page, Session};
use crate::ui::{run_dashboard, App};
use std::path::Path;
use tracing::{info, warn};

/// Launch the dashboard, optionally with a stored starting page.
///
/// A missing API key is not an error here: the dashboard starts with a
/// banner and the AI Guru page disabled.
pub fn run_command(page: Option<&str>) -> Result<()> {
    // Parse before touching the terminal so a typo fails fast
    let start_page = page.map(str::parse::<Page>).transpose()?;

    let config = config::load_config()?;
    init_file_logging(&config::log_path()?, &config.log_level)?;

    let api_key = config::load_api_key()?;
    let app = build_app(&config, start_page, api_key, &config::secrets_path()?)?;
    run_dashboard(app)
}

/// Assemble the dashboard from config, starting page and optional key.
pub fn build_app(
    config: &Config,
    start_page: Option<Page>,
    api_key: Option<String>,
    secrets_path: &Path,
) -> Result<App> {
    let session = match start_page {
        Some(page) => Session::with_page(page),
        None => Session::new(),
    };
    info!(
        session = %session.id(),
        started_at = %session.started_at(),
        page = %session.page(),
        primary = %config.primary_model,
        fallback = %config.fallback_model,
        "session started"
    );

    let (assistant, banner) = match api_key {
        Some(key) => {
            let client = GeminiClient::from_config(key, config)?;
            let gateway = AssistantGateway::new(Box::new(client), config.model_tiers());
            (Some(gateway), None)
        }
        None => {
            let missing = BizOsError::MissingApiKey(secrets_path.to_path_buf());
            warn!(error = %missing, "assistant disabled");
            (None, Some(missing.to_string()))
        }
    };

    Ok(App::new(session, assistant, banner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::resolve_view;
    use std::path::PathBuf;

    #[test]
    fn test_build_app_without_key_shows_banner() {
        let secrets = PathBuf::from("/tmp/bizos/secrets.toml");
        let app = build_app(&Config::default(), None, None, &secrets).unwrap();
        assert_eq!(app.session().page(), Page::Landing);
        assert!(!app.session().logged_in());
    }

    #[test]
    fn test_build_app_with_start_page_still_gated() {
        let secrets = PathBuf::from("/tmp/bizos/secrets.toml");
        let app = build_app(
            &Config::default(),
            Some(Page::Inventory),
            Some("test-key".to_string()),
            &secrets,
        )
        .unwrap();
        assert_eq!(app.session().page(), Page::Inventory);
        assert_eq!(resolve_view(app.session()), Page::Landing);
    }

    #[test]
    fn test_run_command_rejects_unknown_page() {
        let err = run_command(Some("Settings")).unwrap_err();
        assert!(matches!(err, BizOsError::UnknownPage(ref p) if p == "Settings"));
    }
}
