//! Core data types for the session/break clock.
//!
//! This module defines the data structures used for:
//! - The countdown state machine (mode, remaining time, running flag)
//! - Duration configuration with clamped step adjustment
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Minimum configurable duration (1 minute).
pub const MIN_DURATION_SECS: u32 = 60;

/// Maximum configurable duration (60 minutes).
pub const MAX_DURATION_SECS: u32 = 60 * 60;

/// Adjustment step (1 minute).
pub const DURATION_STEP_SECS: u32 = 60;

/// Default session duration (25 minutes).
pub const DEFAULT_SESSION_SECS: u32 = 25 * 60;

/// Default break duration (5 minutes).
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

// ============================================================================
// TimerMode
// ============================================================================

/// The two countdown phases the clock alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Focused session time
    Session,
    /// Break time
    Break,
}

impl TimerMode {
    /// Returns the display label for the mode.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Session => "Session",
            TimerMode::Break => "Break",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub fn other(&self) -> TimerMode {
        match self {
            TimerMode::Session => TimerMode::Break,
            TimerMode::Break => TimerMode::Session,
        }
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Session
    }
}

// ============================================================================
// StepDirection
// ============================================================================

/// Direction of a one-step duration adjustment.
///
/// Adjustments only ever move by [`DURATION_STEP_SECS`]; using an enum keeps
/// arbitrary deltas unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Add one step
    Up,
    /// Subtract one step
    Down,
}

// ============================================================================
// ClockConfig
// ============================================================================

/// Configured durations for both modes, in seconds.
///
/// Both values stay within `[MIN_DURATION_SECS, MAX_DURATION_SECS]` and are
/// always multiples of [`DURATION_STEP_SECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Session duration in seconds
    pub session_secs: u32,
    /// Break duration in seconds
    pub break_secs: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            session_secs: DEFAULT_SESSION_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

impl ClockConfig {
    /// Returns the configured duration for the given mode.
    #[must_use]
    pub fn duration_secs(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Session => self.session_secs,
            TimerMode::Break => self.break_secs,
        }
    }

    /// Returns the session duration in whole minutes.
    #[must_use]
    pub fn session_minutes(&self) -> u32 {
        self.session_secs / 60
    }

    /// Returns the break duration in whole minutes.
    #[must_use]
    pub fn break_minutes(&self) -> u32 {
        self.break_secs / 60
    }

    /// Steps the given mode's duration by one minute in the given direction.
    ///
    /// A step that would leave the `[MIN_DURATION_SECS, MAX_DURATION_SECS]`
    /// range is silently ignored. Returns true if the value changed.
    pub fn step(&mut self, target: TimerMode, direction: StepDirection) -> bool {
        let current = self.duration_secs(target);
        let next = match direction {
            StepDirection::Up => current + DURATION_STEP_SECS,
            StepDirection::Down => current.saturating_sub(DURATION_STEP_SECS),
        };

        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&next) {
            return false;
        }

        match target {
            TimerMode::Session => self.session_secs = next,
            TimerMode::Break => self.break_secs = next,
        }
        true
    }
}

// ============================================================================
// ClockState
// ============================================================================

/// The complete state of the countdown clock.
///
/// This is a closed, total state machine: every operation is defined for
/// every reachable state and none of them can fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockState {
    /// Which phase is currently active
    pub mode: TimerMode,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Configured durations
    pub config: ClockConfig,
}

impl ClockState {
    /// Creates a new clock: session mode, full session duration, not running.
    #[must_use]
    pub fn new() -> Self {
        let config = ClockConfig::default();
        Self {
            mode: TimerMode::Session,
            remaining_seconds: config.session_secs,
            running: false,
            config,
        }
    }

    /// Flips the running flag.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Steps the target mode's duration by one minute.
    ///
    /// If the target is the currently active mode and the value actually
    /// changed, the remaining time snaps to the new full duration, whether
    /// the clock is running or paused. Adjusting the inactive mode leaves
    /// the current countdown untouched; the new duration takes effect when
    /// that mode is next entered.
    ///
    /// Returns true if the configured duration changed.
    pub fn adjust(&mut self, target: TimerMode, direction: StepDirection) -> bool {
        let changed = self.config.step(target, direction);
        if changed && target == self.mode {
            self.remaining_seconds = self.config.duration_secs(self.mode);
        }
        changed
    }

    /// Advances the countdown by one second.
    ///
    /// When the remaining time is already zero at the start of the tick, the
    /// mode flips and the entered mode's full duration is loaded; the return
    /// value is true for exactly that zero-crossing tick. "00:00" is thus
    /// displayed for one full tick interval before the switch.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            false
        } else {
            self.mode = self.mode.other();
            self.remaining_seconds = self.config.duration_secs(self.mode);
            true
        }
    }

    /// Restores all state to construction defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Formats the remaining time as `MM:SS`.
    #[must_use]
    pub fn format_display(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// Returns the display label for the active mode.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a second count as `MM:SS`, both fields zero-padded to two digits.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// IPC Types
// ============================================================================

/// IPC request from client to daemon.
///
/// The adjustment commands map 1:1 onto the four UI duration controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum IpcRequest {
    /// Start or pause the countdown
    Toggle,
    /// Restore everything to defaults
    Reset,
    /// Decrease the break duration by one minute
    BreakMinus,
    /// Increase the break duration by one minute
    BreakPlus,
    /// Decrease the session duration by one minute
    SessionMinus,
    /// Increase the session duration by one minute
    SessionPlus,
    /// Query the current state
    Status,
}

/// Observable clock state carried in every successful IPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Active mode label ("Session" or "Break")
    #[serde(rename = "modeLabel")]
    pub mode_label: String,
    /// Remaining time formatted as MM:SS
    #[serde(rename = "displayText")]
    pub display_text: String,
    /// Whether the countdown is advancing
    #[serde(rename = "isRunning")]
    pub is_running: bool,
    /// Configured break duration in minutes
    #[serde(rename = "breakMinutes")]
    pub break_minutes: u32,
    /// Configured session duration in minutes
    #[serde(rename = "sessionMinutes")]
    pub session_minutes: u32,
}

impl ResponseData {
    /// Creates response data from the clock state.
    #[must_use]
    pub fn from_clock_state(state: &ClockState) -> Self {
        Self {
            mode_label: state.mode_label().to_string(),
            display_text: state.format_display(),
            is_running: state.running,
            break_minutes: state.config.break_minutes(),
            session_minutes: state.config.session_minutes(),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Observable state (absent only for transport errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerMode Tests
    // ------------------------------------------------------------------------

    mod timer_mode_tests {
        use super::*;

        #[test]
        fn test_default_is_session() {
            assert_eq!(TimerMode::default(), TimerMode::Session);
        }

        #[test]
        fn test_label() {
            assert_eq!(TimerMode::Session.label(), "Session");
            assert_eq!(TimerMode::Break.label(), "Break");
        }

        #[test]
        fn test_other() {
            assert_eq!(TimerMode::Session.other(), TimerMode::Break);
            assert_eq!(TimerMode::Break.other(), TimerMode::Session);
        }

        #[test]
        fn test_other_is_involution() {
            assert_eq!(TimerMode::Session.other().other(), TimerMode::Session);
            assert_eq!(TimerMode::Break.other().other(), TimerMode::Break);
        }

        #[test]
        fn test_serialize_deserialize() {
            let json = serde_json::to_string(&TimerMode::Session).unwrap();
            assert_eq!(json, "\"session\"");

            let deserialized: TimerMode = serde_json::from_str("\"break\"").unwrap();
            assert_eq!(deserialized, TimerMode::Break);
        }
    }

    // ------------------------------------------------------------------------
    // ClockConfig Tests
    // ------------------------------------------------------------------------

    mod clock_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = ClockConfig::default();
            assert_eq!(config.session_secs, 25 * 60);
            assert_eq!(config.break_secs, 5 * 60);
        }

        #[test]
        fn test_duration_secs() {
            let config = ClockConfig::default();
            assert_eq!(config.duration_secs(TimerMode::Session), 1500);
            assert_eq!(config.duration_secs(TimerMode::Break), 300);
        }

        #[test]
        fn test_minutes() {
            let config = ClockConfig::default();
            assert_eq!(config.session_minutes(), 25);
            assert_eq!(config.break_minutes(), 5);
        }

        #[test]
        fn test_step_up() {
            let mut config = ClockConfig::default();
            assert!(config.step(TimerMode::Session, StepDirection::Up));
            assert_eq!(config.session_secs, 1560);
            assert_eq!(config.break_secs, 300);
        }

        #[test]
        fn test_step_down() {
            let mut config = ClockConfig::default();
            assert!(config.step(TimerMode::Break, StepDirection::Down));
            assert_eq!(config.break_secs, 240);
            assert_eq!(config.session_secs, 1500);
        }

        #[test]
        fn test_step_down_at_minimum_is_noop() {
            let mut config = ClockConfig {
                session_secs: 1500,
                break_secs: MIN_DURATION_SECS,
            };
            assert!(!config.step(TimerMode::Break, StepDirection::Down));
            assert_eq!(config.break_secs, MIN_DURATION_SECS);
        }

        #[test]
        fn test_step_up_at_maximum_is_noop() {
            let mut config = ClockConfig {
                session_secs: MAX_DURATION_SECS,
                break_secs: 300,
            };
            assert!(!config.step(TimerMode::Session, StepDirection::Up));
            assert_eq!(config.session_secs, MAX_DURATION_SECS);
        }

        #[test]
        fn test_bounds_hold_for_any_step_sequence() {
            let mut config = ClockConfig::default();

            // Drive both fields well past each bound in both directions.
            for _ in 0..100 {
                config.step(TimerMode::Session, StepDirection::Up);
                config.step(TimerMode::Break, StepDirection::Down);
            }
            assert_eq!(config.session_secs, MAX_DURATION_SECS);
            assert_eq!(config.break_secs, MIN_DURATION_SECS);

            for _ in 0..100 {
                config.step(TimerMode::Session, StepDirection::Down);
                config.step(TimerMode::Break, StepDirection::Up);
            }
            assert_eq!(config.session_secs, MIN_DURATION_SECS);
            assert_eq!(config.break_secs, MAX_DURATION_SECS);
        }

        #[test]
        fn test_values_stay_multiples_of_step() {
            let mut config = ClockConfig::default();
            let moves = [
                (TimerMode::Session, StepDirection::Up),
                (TimerMode::Break, StepDirection::Up),
                (TimerMode::Session, StepDirection::Down),
                (TimerMode::Break, StepDirection::Down),
                (TimerMode::Session, StepDirection::Down),
                (TimerMode::Break, StepDirection::Up),
            ];
            for (target, direction) in moves {
                config.step(target, direction);
                assert_eq!(config.session_secs % DURATION_STEP_SECS, 0);
                assert_eq!(config.break_secs % DURATION_STEP_SECS, 0);
            }
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = ClockConfig {
                session_secs: 1800,
                break_secs: 600,
            };
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: ClockConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // ClockState Tests
    // ------------------------------------------------------------------------

    mod clock_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let state = ClockState::new();
            assert_eq!(state.mode, TimerMode::Session);
            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.running);
            assert_eq!(state.config, ClockConfig::default());
        }

        #[test]
        fn test_toggle_running() {
            let mut state = ClockState::new();

            state.toggle_running();
            assert!(state.running);

            state.toggle_running();
            assert!(!state.running);
        }

        #[test]
        fn test_toggle_preserves_everything_else() {
            let mut state = ClockState::new();
            state.remaining_seconds = 42;

            state.toggle_running();

            assert_eq!(state.mode, TimerMode::Session);
            assert_eq!(state.remaining_seconds, 42);
        }

        #[test]
        fn test_tick_decrements() {
            let mut state = ClockState::new();
            state.running = true;

            let crossed = state.tick();

            assert!(!crossed);
            assert_eq!(state.remaining_seconds, 1499);
        }

        #[test]
        fn test_tick_monotonic_decrement() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 10;

            for expected in (0..10).rev() {
                let crossed = state.tick();
                assert!(!crossed);
                assert_eq!(state.remaining_seconds, expected);
            }
        }

        #[test]
        fn test_tick_at_zero_flips_mode() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 0;

            let crossed = state.tick();

            assert!(crossed);
            assert_eq!(state.mode, TimerMode::Break);
            assert_eq!(state.remaining_seconds, 300);
            assert!(state.running, "running flag must survive the mode flip");
        }

        #[test]
        fn test_tick_at_zero_from_break_returns_to_session() {
            let mut state = ClockState::new();
            state.running = true;
            state.mode = TimerMode::Break;
            state.remaining_seconds = 0;

            let crossed = state.tick();

            assert!(crossed);
            assert_eq!(state.mode, TimerMode::Session);
            assert_eq!(state.remaining_seconds, 1500);
        }

        #[test]
        fn test_zero_displayed_for_one_full_tick() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 1;

            // The tick that reaches zero is not yet the crossing.
            assert!(!state.tick());
            assert_eq!(state.remaining_seconds, 0);
            assert_eq!(state.mode, TimerMode::Session);

            // The next tick is.
            assert!(state.tick());
            assert_eq!(state.mode, TimerMode::Break);
        }

        #[test]
        fn test_flip_uses_entered_modes_configured_duration() {
            let mut state = ClockState::new();
            state.running = true;
            state.adjust(TimerMode::Break, StepDirection::Up); // 300 -> 360
            state.remaining_seconds = 0;

            state.tick();

            assert_eq!(state.mode, TimerMode::Break);
            assert_eq!(state.remaining_seconds, 360);
        }

        #[test]
        fn test_adjust_active_mode_snaps_remaining() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 10;

            let changed = state.adjust(TimerMode::Session, StepDirection::Up);

            assert!(changed);
            assert_eq!(state.config.session_secs, 1560);
            // Snaps to the new full value, not a delta-preserving one.
            assert_eq!(state.remaining_seconds, 1560);
        }

        #[test]
        fn test_adjust_active_mode_snaps_while_paused() {
            let mut state = ClockState::new();
            state.remaining_seconds = 700;

            state.adjust(TimerMode::Session, StepDirection::Down);

            assert_eq!(state.remaining_seconds, 1440);
        }

        #[test]
        fn test_adjust_inactive_mode_leaves_remaining() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 900;

            let changed = state.adjust(TimerMode::Break, StepDirection::Up);

            assert!(changed);
            assert_eq!(state.config.break_secs, 360);
            assert_eq!(state.remaining_seconds, 900);
        }

        #[test]
        fn test_adjust_at_bound_does_not_snap() {
            let mut state = ClockState::new();
            state.config.session_secs = MAX_DURATION_SECS;
            state.remaining_seconds = 123;

            let changed = state.adjust(TimerMode::Session, StepDirection::Up);

            assert!(!changed);
            assert_eq!(state.remaining_seconds, 123);
        }

        #[test]
        fn test_adjust_never_changes_mode_or_running() {
            let mut state = ClockState::new();
            state.running = true;

            state.adjust(TimerMode::Break, StepDirection::Up);
            state.adjust(TimerMode::Session, StepDirection::Down);

            assert_eq!(state.mode, TimerMode::Session);
            assert!(state.running);
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut state = ClockState::new();
            state.running = true;
            state.mode = TimerMode::Break;
            state.remaining_seconds = 17;
            state.adjust(TimerMode::Break, StepDirection::Up);
            state.adjust(TimerMode::Session, StepDirection::Down);

            state.reset();

            assert_eq!(state.mode, TimerMode::Session);
            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.running);
            assert_eq!(state.config, ClockConfig::default());
        }

        #[test]
        fn test_reset_is_idempotent() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 5;

            state.reset();
            let once = state.clone();
            state.reset();

            assert_eq!(state.mode, once.mode);
            assert_eq!(state.remaining_seconds, once.remaining_seconds);
            assert_eq!(state.running, once.running);
            assert_eq!(state.config, once.config);
        }

        #[test]
        fn test_serialize_deserialize() {
            let mut state = ClockState::new();
            state.running = true;
            state.mode = TimerMode::Break;
            state.remaining_seconds = 123;

            let json = serde_json::to_string(&state).unwrap();
            let deserialized: ClockState = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized.mode, TimerMode::Break);
            assert_eq!(deserialized.remaining_seconds, 123);
            assert!(deserialized.running);
        }
    }

    // ------------------------------------------------------------------------
    // Display Format Tests
    // ------------------------------------------------------------------------

    mod format_tests {
        use super::*;

        #[test]
        fn test_format_zero() {
            assert_eq!(format_mmss(0), "00:00");
        }

        #[test]
        fn test_format_seconds_only() {
            assert_eq!(format_mmss(9), "00:09");
            assert_eq!(format_mmss(59), "00:59");
        }

        #[test]
        fn test_format_minutes() {
            assert_eq!(format_mmss(60), "01:00");
            assert_eq!(format_mmss(90), "01:30");
            assert_eq!(format_mmss(25 * 60), "25:00");
        }

        #[test]
        fn test_format_maximum() {
            assert_eq!(format_mmss(3600), "60:00");
        }

        #[test]
        fn test_format_round_trips() {
            fn parse_mmss(s: &str) -> u32 {
                let (min, sec) = s.split_once(':').unwrap();
                min.parse::<u32>().unwrap() * 60 + sec.parse::<u32>().unwrap()
            }

            for secs in 0..=3600 {
                assert_eq!(parse_mmss(&format_mmss(secs)), secs);
            }
        }

        #[test]
        fn test_state_format_display() {
            let mut state = ClockState::new();
            assert_eq!(state.format_display(), "25:00");

            state.remaining_seconds = 61;
            assert_eq!(state.format_display(), "01:01");
        }
    }

    // ------------------------------------------------------------------------
    // IPC Types Tests
    // ------------------------------------------------------------------------

    mod ipc_tests {
        use super::*;

        #[test]
        fn test_ipc_request_serialize() {
            let json = serde_json::to_string(&IpcRequest::Toggle).unwrap();
            assert_eq!(json, r#"{"command":"toggle"}"#);

            let json = serde_json::to_string(&IpcRequest::BreakMinus).unwrap();
            assert_eq!(json, r#"{"command":"break_minus"}"#);

            let json = serde_json::to_string(&IpcRequest::SessionPlus).unwrap();
            assert_eq!(json, r#"{"command":"session_plus"}"#);
        }

        #[test]
        fn test_ipc_request_all_commands_deserialize() {
            let commands = vec![
                (r#"{"command":"toggle"}"#, IpcRequest::Toggle),
                (r#"{"command":"reset"}"#, IpcRequest::Reset),
                (r#"{"command":"break_minus"}"#, IpcRequest::BreakMinus),
                (r#"{"command":"break_plus"}"#, IpcRequest::BreakPlus),
                (r#"{"command":"session_minus"}"#, IpcRequest::SessionMinus),
                (r#"{"command":"session_plus"}"#, IpcRequest::SessionPlus),
                (r#"{"command":"status"}"#, IpcRequest::Status),
            ];

            for (json, expected) in commands {
                let request: IpcRequest = serde_json::from_str(json).unwrap();
                assert_eq!(request, expected, "json: {}", json);
            }
        }

        #[test]
        fn test_ipc_request_unknown_command_fails() {
            let result = serde_json::from_str::<IpcRequest>(r#"{"command":"explode"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn test_response_data_from_clock_state() {
            let mut state = ClockState::new();
            state.running = true;
            state.remaining_seconds = 90;

            let data = ResponseData::from_clock_state(&state);

            assert_eq!(data.mode_label, "Session");
            assert_eq!(data.display_text, "01:30");
            assert!(data.is_running);
            assert_eq!(data.break_minutes, 5);
            assert_eq!(data.session_minutes, 25);
        }

        #[test]
        fn test_response_data_wire_names() {
            let data = ResponseData::from_clock_state(&ClockState::new());
            let json = serde_json::to_string(&data).unwrap();

            assert!(json.contains("\"modeLabel\":\"Session\""));
            assert!(json.contains("\"displayText\":\"25:00\""));
            assert!(json.contains("\"isRunning\":false"));
            assert!(json.contains("\"breakMinutes\":5"));
            assert!(json.contains("\"sessionMinutes\":25"));
        }

        #[test]
        fn test_ipc_response_success() {
            let response = IpcResponse::success(
                "ok",
                Some(ResponseData::from_clock_state(&ClockState::new())),
            );

            assert_eq!(response.status, "success");
            assert_eq!(response.message, "ok");
            assert!(response.data.is_some());
        }

        #[test]
        fn test_ipc_response_error() {
            let response = IpcResponse::error("接続に失敗しました");

            assert_eq!(response.status, "error");
            assert_eq!(response.message, "接続に失敗しました");
            assert!(response.data.is_none());
        }

        #[test]
        fn test_ipc_response_serialize_omits_missing_data() {
            let response = IpcResponse::error("oops");
            let json = serde_json::to_string(&response).unwrap();
            assert!(!json.contains("data"));
        }

        #[test]
        fn test_ipc_response_deserialize() {
            let json = r#"{"status":"success","message":"","data":{"modeLabel":"Break","displayText":"05:00","isRunning":true,"breakMinutes":5,"sessionMinutes":25}}"#;
            let response: IpcResponse = serde_json::from_str(json).unwrap();

            assert_eq!(response.status, "success");
            let data = response.data.unwrap();
            assert_eq!(data.mode_label, "Break");
            assert_eq!(data.display_text, "05:00");
            assert!(data.is_running);
        }
    }
}
