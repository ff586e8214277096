//! Embedded completion tone data.
//!
//! This module provides the tone that is compiled into the binary and played
//! at every zero-crossing (duration expiry).
//!
//! Note: In a production build, this would contain actual audio data.
//! For now, we provide a minimal valid WAV file header for testing.

/// Embedded completion tone (minimal WAV format for testing).
///
/// WAV format structure:
/// - RIFF header (12 bytes)
/// - fmt chunk (24 bytes)
/// - data chunk header (8 bytes)
/// - audio data (variable)
pub const COMPLETION_TONE_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x24, 0x00, 0x00, 0x00, // File size - 8 (36 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk header
    0x64, 0x61, 0x74, 0x61, // "data"
    0x00, 0x00, 0x00, 0x00, // Data size (0 bytes - silent)
];

/// Returns the embedded completion tone data.
#[must_use]
pub const fn get_completion_tone() -> &'static [u8] {
    COMPLETION_TONE_DATA
}

/// Returns the format description of the embedded tone.
#[must_use]
pub const fn get_completion_tone_format() -> &'static str {
    "WAV (16-bit PCM, 44.1kHz, Mono)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_data_exists() {
        let data = get_completion_tone();
        assert!(!data.is_empty());
    }

    #[test]
    fn test_tone_has_riff_header() {
        let data = get_completion_tone();
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[test]
    fn test_tone_has_wave_format() {
        let data = get_completion_tone();
        assert_eq!(&data[8..12], b"WAVE");
    }

    #[test]
    fn test_tone_has_fmt_chunk() {
        let data = get_completion_tone();
        assert_eq!(&data[12..16], b"fmt ");
    }

    #[test]
    fn test_tone_format_description() {
        let format = get_completion_tone_format();
        assert!(format.contains("WAV"));
        assert!(format.contains("PCM"));
    }
}
