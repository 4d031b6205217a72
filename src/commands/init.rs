//! Init command handler.
//!
//! Creates `~/.config/bizos/` with a commented `config.toml` and a
//! `secrets.toml` template.

use crate::config;
use crate::error::Result;
use crate::output::{print_header, CYAN, DIM, GREEN, RESET, YELLOW};

pub fn init_command() -> Result<()> {
    print_header();

    let (config_dir, created) = config::ensure_config_dir()?;
    report(created, &config_dir.display().to_string());

    let config_path = config::config_path()?;
    let config_existed = config_path.exists();
    // Writes the commented default when missing and validates an existing file
    config::load_config_from(&config_path)?;
    report(!config_existed, &config_path.display().to_string());

    let secrets_path = config::secrets_path()?;
    let secrets_created = config::write_secrets_template(&secrets_path)?;
    report(secrets_created, &secrets_path.display().to_string());

    println!();
    println!("{GREEN}Initialization complete!{RESET}");
    if config::load_api_key()?.is_none() {
        println!();
        println!(
            "{YELLOW}Next:{RESET} add your key to {CYAN}{}{RESET} or export {}",
            secrets_path.display(),
            config::API_KEY_VAR
        );
    }
    Ok(())
}

fn report(created: bool, path: &str) {
    if created {
        println!("  {GREEN}Created{RESET} {}", path);
    } else {
        println!("  {DIM}Exists{RESET}  {}", path);
    }
}
