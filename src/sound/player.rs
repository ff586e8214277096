//! Completion-tone player implementation using rodio.
//!
//! This module provides the `RodioSoundPlayer` which uses the rodio v0.20
//! audio library for cross-platform playback of the embedded tone.
//!
//! The rodio output stream is not `Send`, so it lives on a dedicated audio
//! thread; the player itself is a thread-safe handle that forwards play/stop
//! commands over a channel.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, unbounded, Sender};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::embedded::get_completion_tone;
use super::error::SoundError;

/// Commands accepted by the audio thread.
enum PlayerCommand {
    /// Start the tone from the beginning, stopping any previous playback
    Play,
    /// Stop and rewind any playing tone
    Stop,
}

/// A completion-tone player backed by rodio.
///
/// The player retains the sink of the most recent playback so a tone that is
/// still sounding can be stopped (the reset behavior). Each `play` starts a
/// fresh sink from the beginning of the tone, which is the "rewind": the
/// tone never resumes mid-way.
///
/// This handle is `Send + Sync` and can be shared across tasks via `Arc`.
pub struct RodioSoundPlayer {
    /// Command channel to the audio thread.
    command_tx: Sender<PlayerCommand>,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// Spawns the audio thread and waits for it to open the output stream.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all sound playback will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (command_tx, command_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        thread::Builder::new()
            .name("pomoclock-audio".to_string())
            .spawn(move || audio_thread(command_rx, ready_tx))
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|e| SoundError::StreamError(e.to_string()))??;

        debug!("Audio output stream initialized");

        Ok(Self {
            command_tx,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Creates a disabled sound player.
    ///
    /// All calls to `play` will silently succeed without producing sound.
    ///
    /// # Errors
    ///
    /// May still fail if unable to initialize the audio stream.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }

    /// Plays the completion tone from the beginning.
    ///
    /// Non-blocking; the tone continues in the background. A tone that is
    /// already sounding is stopped first so playback always starts at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio thread is gone.
    pub fn play(&self) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        self.command_tx
            .send(PlayerCommand::Play)
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;

        debug!("Completion tone playback requested");
        Ok(())
    }

    /// Stops and rewinds any playing tone.
    ///
    /// Safe to call when nothing is playing.
    pub fn stop(&self) {
        if self.command_tx.send(PlayerCommand::Stop).is_err() {
            warn!("Audio thread is gone, cannot stop playback");
        }
    }

    /// Returns true if sound playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables sound playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
        debug!("Sound playback enabled");
    }

    /// Disables sound playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
        debug!("Sound playback disabled");
    }

    /// Returns true if the audio system is available.
    ///
    /// This always returns true if the player was successfully created,
    /// as the audio stream is initialized during construction.
    #[must_use]
    pub fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Body of the dedicated audio thread.
///
/// Owns the output stream and the sink of the current playback. Reports the
/// outcome of opening the stream through `ready_tx`, then serves commands
/// until every player handle is dropped.
fn audio_thread(
    command_rx: crossbeam_channel::Receiver<PlayerCommand>,
    ready_tx: Sender<Result<(), SoundError>>,
) {
    let (stream, stream_handle): (OutputStream, OutputStreamHandle) =
        match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                let _ = ready_tx.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
                return;
            }
        };
    // The stream must stay alive for playback.
    let _stream = stream;
    let _ = ready_tx.send(Ok(()));

    let mut current: Option<Sink> = None;

    while let Ok(command) = command_rx.recv() {
        match command {
            PlayerCommand::Play => {
                if let Some(old) = current.take() {
                    old.stop();
                }

                let cursor = Cursor::new(get_completion_tone());
                let decoder = match Decoder::new(cursor) {
                    Ok(decoder) => decoder,
                    Err(e) => {
                        warn!("Failed to decode completion tone: {}", e);
                        continue;
                    }
                };

                match Sink::try_new(&stream_handle) {
                    Ok(sink) => {
                        sink.append(decoder);
                        current = Some(sink);
                        debug!("Completion tone playback started");
                    }
                    Err(e) => warn!("Failed to create audio sink: {}", e),
                }
            }
            PlayerCommand::Stop => {
                if let Some(old) = current.take() {
                    old.stop();
                    debug!("Completion tone playback stopped");
                }
            }
        }
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// This is a convenience function for optional sound support.
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, sound disabled: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests may fail in environments without audio hardware
    // (e.g., CI containers). Tests are designed to handle this gracefully.

    #[test]
    fn test_player_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RodioSoundPlayer>();
    }

    #[test]
    fn test_disabled_player_skips_playback() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return, // Skip test if no audio
        };

        assert!(player.is_disabled());
        assert!(player.play().is_ok());
    }

    #[test]
    fn test_enable_disable() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };

        assert!(player.is_disabled());

        player.enable();
        assert!(!player.is_disabled());

        player.disable();
        assert!(player.is_disabled());
    }

    #[test]
    fn test_stop_without_play_is_safe() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };

        player.stop();
        player.stop();
    }

    #[test]
    fn test_try_create_player_with_disabled() {
        // Should return None or Some depending on audio availability
        let _result = try_create_player(true);
        // Just verify it doesn't panic
    }

    #[test]
    fn test_debug_impl() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };

        let debug_str = format!("{:?}", player);
        assert!(debug_str.contains("RodioSoundPlayer"));
    }

    #[test]
    fn test_is_available() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };

        // Player is always "available" if successfully created
        assert!(player.is_available());
    }

    #[test]
    fn test_play_then_stop() {
        let player = match RodioSoundPlayer::new(false) {
            Ok(p) => p,
            Err(_) => return,
        };

        let _ = player.play();
        player.stop();
    }
}
