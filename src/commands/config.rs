//! Config command handler.
//!
//! Displays the effective configuration and where each value comes from.

use crate::config::{self, Config, API_KEY_VAR};
use crate::error::Result;
use crate::logging::LOG_ENV_VAR;
use crate::output::{print_field, print_header, print_warning, BOLD, RESET};
use std::env;

pub fn config_command() -> Result<()> {
    let config = config::load_config()?;
    let key = config::load_api_key()?;

    print_header();
    println!("{BOLD}Files{RESET}");
    print_field("config", &config::config_path()?.display().to_string());
    print_field("secrets", &config::secrets_path()?.display().to_string());
    print_field("log", &config::log_path()?.display().to_string());
    println!();

    println!("{BOLD}Settings{RESET}");
    for (name, value) in settings(&config) {
        print_field(name, &value);
    }
    if let Ok(filter) = env::var(LOG_ENV_VAR) {
        print_field("log_level (env)", &filter);
    }
    println!();

    println!("{BOLD}API key{RESET}");
    match key {
        Some(key) => {
            let source = if env::var(API_KEY_VAR).is_ok_and(|v| !v.trim().is_empty()) {
                "environment"
            } else {
                "secrets.toml"
            };
            print_field(API_KEY_VAR, &format!("{} ({})", config::mask_key(&key), source));
        }
        None => {
            print_field(API_KEY_VAR, "not set");
            print_warning("AI Guru is disabled until a key is configured. Run `bizos init` for a template.");
        }
    }
    Ok(())
}

/// Name/value pairs for every config field, in file order.
fn settings(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("primary_model", config.primary_model.clone()),
        ("fallback_model", config.fallback_model.clone()),
        ("api_base_url", config.api_base_url.clone()),
        (
            "request_timeout_secs",
            config
                .request_timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "client default".to_string()),
        ),
        ("log_level", config.log_level.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_lists_every_field() {
        let rows = settings(&Config::default());
        let names: Vec<&str> = rows.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "primary_model",
                "fallback_model",
                "api_base_url",
                "request_timeout_secs",
                "log_level"
            ]
        );
        assert_eq!(rows[3].1, "client default");
    }
}
