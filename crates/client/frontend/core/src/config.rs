//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use crate::audio::ToneSpec;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub audio: AudioConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, audio: AudioConfig) -> Self {
        Self { messages, audio }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `TWENTY48_AUDIO` - Move cue: `off`, `bell` or `tone` (default: tone)
    /// - `TWENTY48_TONE_HZ` - Tone frequency in Hz (default: 440)
    /// - `TWENTY48_TONE_MS` - Tone length in milliseconds, at most 1000 (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Ok(raw) = env::var("TWENTY48_AUDIO") {
            match raw.trim().parse::<AudioMode>() {
                Ok(mode) => config.audio.mode = mode,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = %config.audio.mode,
                    "Unknown TWENTY48_AUDIO value, keeping default"
                ),
            }
        }
        if let Some(frequency) = read_env::<f32>("TWENTY48_TONE_HZ")
            && frequency.is_finite()
            && frequency > 0.0
        {
            config.audio.tone.frequency_hz = frequency;
        }
        if let Some(duration) = read_env::<u32>("TWENTY48_TONE_MS") {
            config.audio.tone.duration_ms = clamp_tone_duration(duration);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Which cue is played after every accepted move.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AudioMode {
    Off,
    Bell,
    #[default]
    Tone,
}

#[derive(Clone, Debug, Default)]
pub struct AudioConfig {
    pub mode: AudioMode,
    pub tone: ToneSpec,
}

fn clamp_tone_duration(duration_ms: u32) -> u32 {
    if duration_ms > ToneSpec::MAX_DURATION_MS {
        tracing::warn!(
            requested = duration_ms,
            max = ToneSpec::MAX_DURATION_MS,
            "TWENTY48_TONE_MS too long, clamping"
        );
    }
    duration_ms.min(ToneSpec::MAX_DURATION_MS)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_mode_parses_case_insensitively() {
        assert_eq!("off".parse::<AudioMode>(), Ok(AudioMode::Off));
        assert_eq!("Bell".parse::<AudioMode>(), Ok(AudioMode::Bell));
        assert_eq!("TONE".parse::<AudioMode>(), Ok(AudioMode::Tone));
        assert!("loud".parse::<AudioMode>().is_err());
        assert_eq!(AudioMode::Bell.to_string(), "bell");
    }

    #[test]
    fn defaults_match_the_classic_buzz() {
        let config = FrontendConfig::default();
        assert_eq!(config.messages.capacity, 64);
        assert_eq!(config.audio.mode, AudioMode::Tone);
        assert_eq!(config.audio.tone.frequency_hz, 440.0);
        assert_eq!(config.audio.tone.duration_ms, 10);
    }

    #[test]
    fn tone_duration_is_clamped_to_a_short_cue() {
        assert_eq!(clamp_tone_duration(10), 10);
        assert_eq!(clamp_tone_duration(1_000), 1_000);
        assert_eq!(clamp_tone_duration(u32::MAX), ToneSpec::MAX_DURATION_MS);
    }
}
