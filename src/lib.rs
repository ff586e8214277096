//! Session/Break Clock Library
//!
//! This library provides the core functionality for the pomoclock CLI.
//! It includes:
//! - The countdown state machine alternating session and break durations
//! - Timer engine with a scoped 1 Hz tick source
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Completion-tone playback at every duration expiry

pub mod cli;
pub mod daemon;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    ClockConfig, ClockState, IpcRequest, IpcResponse, ResponseData, StepDirection, TimerMode,
};

// Re-export daemon types
pub use daemon::{run_daemon, run_ticker, TimerEngine, TimerEvent};

// Re-export CLI types
pub use cli::{Cli, Commands, Display, IpcClient};

// Re-export sound types
pub use sound::{
    get_completion_tone, play_completion_tone, try_create_player, MockSoundPlayer,
    RodioSoundPlayer, SoundError, SoundPlayer,
};
