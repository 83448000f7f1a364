//! Obscura CLI — capture the screen, pixelate every visible window, and
//! write the result to a file.
//!
//! Usage:
//!   obscura out.png            Capture, obscure, write out.png
//!   obscura --list-windows     Print discovered window rectangles as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod obscure;

#[derive(Parser)]
#[command(
    name = "obscura",
    about = "Screenshot the display with every visible window pixelated",
    version,
    author
)]
struct Cli {
    /// Destination image file; the format is inferred from the extension
    #[arg(required_unless_present = "list_windows")]
    dest: Option<PathBuf>,

    /// Print visible window rectangles as JSON lines and exit
    #[arg(long)]
    list_windows: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    obscura_common::logging::init_logging(&obscura_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    let result = if cli.list_windows {
        obscure::list_windows()
    } else {
        // clap guarantees dest is present when --list-windows is absent.
        obscure::run(cli.dest.expect("DEST is required"))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("obscura: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dest_is_a_usage_error() {
        assert!(Cli::try_parse_from(["obscura"]).is_err());
    }

    #[test]
    fn test_dest_positional_parses() {
        let cli = Cli::try_parse_from(["obscura", "out.png"]).unwrap();
        assert_eq!(cli.dest, Some(PathBuf::from("out.png")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_windows_does_not_require_dest() {
        let cli = Cli::try_parse_from(["obscura", "--list-windows"]).unwrap();
        assert!(cli.list_windows);
        assert_eq!(cli.dest, None);
    }

    #[test]
    fn test_unrecognized_flag_is_a_usage_error() {
        // Unlike -h/--help, a flag typo must not exit 0: a scripted
        // caller would take that as "output written".
        assert!(Cli::try_parse_from(["obscura", "--bogus", "out.png"]).is_err());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["obscura", "-v", "out.png"]).unwrap();
        assert!(cli.verbose);
    }
}
