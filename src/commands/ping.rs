//! Ping command handler.
//!
//! Sends a fixed prompt to the primary model to check the key and model.

use super::require_client;
use crate::assistant::CompletionClient;
use crate::config;
use crate::error::Result;
use crate::output::print_header;
use crate::progress::Spinner;
use tracing::info;

pub const PING_PROMPT: &str = "Say hello in a friendly way";

pub fn ping_command() -> Result<()> {
    let config = config::load_config()?;
    let client = require_client(&config)?;
    let model = config.primary_model.as_str();

    print_header();
    let spinner = Spinner::new(format!("Asking {}", model));
    match client.generate(model, PING_PROMPT) {
        Ok(reply) => {
            spinner.finish_success(&format!("{} answered", model));
            info!(model, reply_len = reply.len(), "ping succeeded");
            println!();
            println!("{}", reply.trim());
            Ok(())
        }
        Err(err) => {
            spinner.finish_error(&format!("{} did not answer", model));
            Err(err.into())
        }
    }
}
