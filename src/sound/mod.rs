//! Completion-tone playback for the session/break clock.
//!
//! This module provides the audio collaborator the timer engine signals at
//! every zero-crossing:
//!
//! - Non-blocking playback of the embedded tone
//! - Stop-and-rewind on clock reset
//! - Graceful degradation when audio is unavailable
//!
//! The engine itself performs no audio I/O; the daemon forwards its
//! `Expired` and `Reset` events here.

mod embedded;
mod error;
mod player;

pub use embedded::{get_completion_tone, get_completion_tone_format, COMPLETION_TONE_DATA};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for completion-tone playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays the completion tone from the beginning.
    ///
    /// This method should be non-blocking; the tone plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self) -> Result<(), SoundError>;

    /// Stops and rewinds any playing tone. Safe to call when nothing plays.
    fn stop(&self);

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;

    /// Returns true if sound playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables sound playback.
    fn enable(&self);

    /// Disables sound playback.
    fn disable(&self);
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self)
    }

    fn stop(&self) {
        RodioSoundPlayer::stop(self)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::atomic::AtomicUsize,
    stop_calls: std::sync::atomic::AtomicUsize,
    available: std::sync::atomic::AtomicBool,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: std::sync::atomic::AtomicUsize::new(0),
            stop_calls: std::sync::atomic::AtomicUsize::new(0),
            available: std::sync::atomic::AtomicBool::new(true),
            disabled: std::sync::atomic::AtomicBool::new(false),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn clear_calls(&self) {
        self.play_calls.store(0, std::sync::atomic::Ordering::SeqCst);
        self.stop_calls.store(0, std::sync::atomic::Ordering::SeqCst);
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.stop_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Plays the completion tone once.
///
/// This is a convenience function that creates a temporary player and plays
/// the tone. For repeated playback, prefer creating a `RodioSoundPlayer`
/// and reusing it.
///
/// # Errors
///
/// Returns an error if audio initialization or playback fails.
pub fn play_completion_tone() -> Result<(), SoundError> {
    let player = RodioSoundPlayer::new(false)?;
    player.play()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify all public entry points are accessible
        let _: fn(bool) -> Result<RodioSoundPlayer, SoundError> = RodioSoundPlayer::new;
        let _: fn() -> &'static [u8] = get_completion_tone;
        let _: fn() -> Result<(), SoundError> = play_completion_tone;
    }

    #[test]
    fn test_embedded_tone_data() {
        let data = get_completion_tone();
        assert!(!data.is_empty());
        // Verify WAV header
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[test]
    fn test_mock_counts_plays_and_stops() {
        let mock = MockSoundPlayer::new();

        mock.play().unwrap();
        mock.play().unwrap();
        mock.stop();

        assert_eq!(mock.play_count(), 2);
        assert_eq!(mock.stop_count(), 1);

        mock.clear_calls();
        assert_eq!(mock.play_count(), 0);
        assert_eq!(mock.stop_count(), 0);
    }

    #[test]
    fn test_mock_disabled_skips_play() {
        let mock = MockSoundPlayer::new();
        mock.disable();

        mock.play().unwrap();

        assert_eq!(mock.play_count(), 0);
        assert!(mock.is_disabled());

        mock.enable();
        mock.play().unwrap();
        assert_eq!(mock.play_count(), 1);
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockSoundPlayer::new();
        mock.set_should_fail(true);

        assert!(mock.play().is_err());
    }

    #[test]
    fn test_mock_availability() {
        let mock = MockSoundPlayer::new();
        assert!(mock.is_available());

        mock.set_available(false);
        assert!(!mock.is_available());
    }

    #[test]
    fn test_play_completion_tone_graceful_failure() {
        // May fail in container without audio, that's expected
        let _ = play_completion_tone();
    }
}
