//! Session/break countdown clock CLI
//!
//! The clock alternates between two configurable durations:
//! - A focused session (default 25 minutes)
//! - A break (default 5 minutes)
//!
//! When a duration expires the mode flips automatically and a completion
//! tone plays. The countdown itself runs in a background daemon; every CLI
//! command is a thin IPC client call.

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use pomoclock::cli::{Cli, Commands, Display, IpcClient};
use pomoclock::daemon;
use pomoclock::sound::{self, SoundPlayer};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Toggle) => {
            let client = IpcClient::new()?;
            let response = client.toggle().await?;
            Display::show_toggle_success(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new()?;
            let response = client.reset().await?;
            Display::show_reset_success(&response);
        }
        Some(Commands::BreakPlus) => {
            let client = IpcClient::new()?;
            let response = client.break_plus().await?;
            Display::show_adjust_success(&response);
        }
        Some(Commands::BreakMinus) => {
            let client = IpcClient::new()?;
            let response = client.break_minus().await?;
            Display::show_adjust_success(&response);
        }
        Some(Commands::SessionPlus) => {
            let client = IpcClient::new()?;
            let response = client.session_plus().await?;
            Display::show_adjust_success(&response);
        }
        Some(Commands::SessionMinus) => {
            let client = IpcClient::new()?;
            let response = client.session_minus().await?;
            Display::show_adjust_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Daemon { no_sound }) => {
            let socket_path = daemon::ipc::default_socket_path()?;
            let player = sound::try_create_player(no_sound)
                .map(|p| p as Arc<dyn SoundPlayer + Send + Sync>);
            daemon::run_daemon(&socket_path, player).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pomoclock"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["pomoclock", "status"]);
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_cli_parse_toggle() {
        let cli = Cli::parse_from(["pomoclock", "toggle"]);
        assert!(matches!(cli.command, Some(Commands::Toggle)));
    }

    #[test]
    fn test_cli_parse_adjustments() {
        let cli = Cli::parse_from(["pomoclock", "session-plus"]);
        assert!(matches!(cli.command, Some(Commands::SessionPlus)));

        let cli = Cli::parse_from(["pomoclock", "break-minus"]);
        assert!(matches!(cli.command, Some(Commands::BreakMinus)));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["pomoclock", "--verbose", "status"]);
        assert!(cli.verbose);
    }
}
