//! Command definitions for the session/break clock CLI.
//!
//! Uses clap derive macro for argument parsing. The six clock commands map
//! 1:1 onto the daemon's IPC commands (and onto the six UI controls).

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Session/break countdown clock CLI
#[derive(Parser, Debug)]
#[command(
    name = "pomoclock",
    version,
    about = "セッション/休憩カウントダウンタイマーCLI",
    long_about = "セッションと休憩を交互にカウントダウンするシンプルなタイマー。\n\
                  時間切れで自動的にモードが切り替わり、完了音が鳴ります。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start or pause the countdown
    Toggle,

    /// Reset durations, mode, and countdown to defaults
    Reset,

    /// Increase the break length by one minute
    BreakPlus,

    /// Decrease the break length by one minute
    BreakMinus,

    /// Increase the session length by one minute
    SessionPlus,

    /// Decrease the session length by one minute
    SessionMinus,

    /// Show current clock status
    Status,

    /// Run as daemon (background service)
    #[command(hide = true)]
    Daemon {
        /// Disable the completion tone
        #[arg(long)]
        no_sound: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================
