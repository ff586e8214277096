//! Display utilities for the session/break clock CLI.
//!
//! This module provides formatted output for:
//! - Command acknowledgements
//! - Error messages
//! - The status panel

use crate::types::{IpcResponse, ResponseData};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the outcome of a toggle command.
    pub fn show_toggle_success(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if data.is_running {
                println!("> タイマーを開始しました");
            } else {
                println!("|| タイマーを一時停止しました");
            }
            println!("  {} {}", Self::mode_display(data), data.display_text);
        } else {
            println!("{}", response.message);
        }
    }

    /// Shows the outcome of a reset command.
    pub fn show_reset_success(_response: &IpcResponse) {
        println!("[] タイマーをリセットしました");
    }

    /// Shows the outcome of a duration adjustment.
    pub fn show_adjust_success(response: &IpcResponse) {
        println!("* {}", response.message);

        if let Some(data) = &response.data {
            println!("  セッション: {}分 / 休憩: {}分", data.session_minutes, data.break_minutes);
        }
    }

    /// Shows the current clock status.
    pub fn show_status(response: &IpcResponse) {
        println!("ポモクロック ステータス");
        println!("─────────────────────────────");

        if let Some(data) = &response.data {
            println!("モード: {}", Self::mode_display(data));
            println!("残り時間: {}", data.display_text);
            println!(
                "状態: {}",
                if data.is_running { "計測中" } else { "停止中" }
            );
            println!("セッション長: {}分", data.session_minutes);
            println!("休憩長: {}分", data.break_minutes);
        } else {
            println!("タイマーは起動していません");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Maps the wire mode label to its display form.
    fn mode_display(data: &ResponseData) -> &'static str {
        match data.mode_label.as_str() {
            "Session" => "セッション",
            "Break" => "休憩",
            _ => "不明",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
