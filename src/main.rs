//! bizos CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use bizos::commands::{config_command, init_command, models_command, ping_command, run_command};
use bizos::logging::init_stderr_logging;
use bizos::output::print_error;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bizos")]
#[command(
    version,
    about = "Bharat Biz OS: an AI growth dashboard for small Indian businesses",
    after_help = "EXAMPLES:
    # Open the dashboard
    bizos

    # Restore a stored page. Protected pages stay behind the landing page,
    # and logging in always opens the Dashboard.
    bizos --page Inventory

    # Set up ~/.config/bizos/ and check the API key
    bizos init
    bizos ping"
)]
struct Cli {
    /// Stored page to restore: Landing, Dashboard, AI_Bot or Inventory.
    /// Logged out, it only shows the landing gate; login opens the Dashboard.
    #[arg(long)]
    page: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard (the default)
    Run {
        /// Stored page to restore: Landing, Dashboard, AI_Bot or Inventory.
    /// Logged out, it only shows the landing gate; login opens the Dashboard.
        #[arg(long)]
        page: Option<String>,
    },

    /// List the Gemini models available to your API key
    Models {
        /// Print the raw listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a test prompt to the primary model
    Ping,

    /// Show the effective configuration
    Config,

    /// Create ~/.config/bizos/ with config and secrets templates
    Init,
}

fn main() {
    let cli = Cli::parse();

    // The dashboard logs to a file once its config is loaded
    if !matches!(cli.command, None | Some(Commands::Run { .. })) {
        init_stderr_logging("warn");
    }

    let result = match cli.command {
        None => run_command(cli.page.as_deref()),
        Some(Commands::Run { page }) => run_command(page.or(cli.page).as_deref()),
        Some(Commands::Models { json }) => models_command(json),
        Some(Commands::Ping) => ping_command(),
        Some(Commands::Config) => config_command(),
        Some(Commands::Init) => init_command(),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
