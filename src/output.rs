//! Terminal output formatting for the CLI subcommands.

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{YELLOW}Warning:{RESET} {}", msg);
}

/// Print a `key: value` line with the key dimmed.
pub fn print_field(key: &str, value: &str) {
    println!("  {DIM}{:<22}{RESET} {}", key, value);
}

/// Print the product header used by the CLI commands.
pub fn print_header() {
    println!("{CYAN}{BOLD}Bharat Biz OS{RESET} {DIM}- the AI engine for small Indian businesses{RESET}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_smoke() {
        print_header();
        print_warning("warning");
        print_field("primary_model", "gemini-2.5-flash");
        print_error("error");
    }
}
