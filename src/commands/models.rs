//! Models command handler.
//!
//! Lists the models the API key can call, marking the configured tiers.

use super::require_client;
use crate::assistant::ModelInfo;
use crate::config::{self, Config};
use crate::error::Result;
use crate::output::{print_header, print_warning, BOLD, CYAN, DIM, GREEN, RESET};
use crate::progress::Spinner;
use tracing::info;

/// List models that support `generateContent`.
///
/// With `json`, prints the raw listing instead of the table.
pub fn models_command(json: bool) -> Result<()> {
    let config = config::load_config()?;
    let client = require_client(&config)?;

    let spinner = if json {
        Spinner::hidden()
    } else {
        Spinner::new("Listing models")
    };
    let models = match client.list_models() {
        Ok(models) => models,
        Err(err) => {
            spinner.finish_error("Could not list models");
            return Err(err.into());
        }
    };
    spinner.clear();
    info!(count = models.len(), "listed models");

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    print_header();
    if models.is_empty() {
        print_warning("No models support generateContent for this key.");
        return Ok(());
    }
    for model in &models {
        println!("{}", format_model_line(model, &config));
    }
    println!();
    println!(
        "{DIM}Set primary_model / fallback_model in {}{RESET}",
        config::config_path()?.display()
    );
    Ok(())
}

/// The bare model id, without the `models/` prefix.
fn short_name(model: &ModelInfo) -> &str {
    model.name.strip_prefix("models/").unwrap_or(&model.name)
}

fn format_model_line(model: &ModelInfo, config: &Config) -> String {
    let name = short_name(model);
    let tag = if name == config.primary_model {
        format!(" {GREEN}[primary]{RESET}")
    } else if name == config.fallback_model {
        format!(" {CYAN}[fallback]{RESET}")
    } else {
        String::new()
    };
    match &model.display_name {
        Some(display) => format!("  {BOLD}{name}{RESET} {DIM}{display}{RESET}{tag}"),
        None => format!("  {BOLD}{name}{RESET}{tag}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, display: Option<&str>) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            display_name: display.map(str::to_string),
            supported_generation_methods: vec!["generateContent".to_string()],
        }
    }

    #[test]
    fn test_short_name_strips_prefix() {
        assert_eq!(short_name(&model("models/gemini-2.5-flash", None)), "gemini-2.5-flash");
        assert_eq!(short_name(&model("gemini-2.5-flash", None)), "gemini-2.5-flash");
    }

    #[test]
    fn test_format_model_line_marks_tiers() {
        let config = Config::default();
        let primary = format_model_line(&model("models/gemini-2.5-flash", Some("Gemini 2.5 Flash")), &config);
        assert!(primary.contains("[primary]"));
        assert!(primary.contains("Gemini 2.5 Flash"));

        let fallback = format_model_line(&model("models/gemini-1.5-flash", None), &config);
        assert!(fallback.contains("[fallback]"));

        let other = format_model_line(&model("models/gemini-pro", None), &config);
        assert!(!other.contains("[primary]"));
        assert!(!other.contains("[fallback]"));
    }
}
