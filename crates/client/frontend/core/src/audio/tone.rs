//! Sine tone synthesis as signed 16-bit PCM.
use std::f32::consts::TAU;

/// Output sample rate for synthesized tones.
pub const SAMPLE_RATE: u32 = 44_100;

/// Peak sample value.
pub const AMPLITUDE: f32 = 32_767.0;

/// Frequency and length of a tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

impl ToneSpec {
    /// Longest cue worth synthesizing; longer requests are cut to this.
    pub const MAX_DURATION_MS: u32 = 1_000;

    pub const fn new(frequency_hz: f32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Number of mono samples the tone occupies at [`SAMPLE_RATE`].
    pub fn sample_count(&self) -> usize {
        let duration = self.duration_ms.min(Self::MAX_DURATION_MS);
        (u64::from(duration) * u64::from(SAMPLE_RATE) / 1000) as usize
    }
}

impl Default for ToneSpec {
    /// A 10 ms buzz at 440 Hz.
    fn default() -> Self {
        Self::new(440.0, 10)
    }
}

/// Renders `tone` as mono PCM samples, starting at phase zero.
pub fn synthesize(tone: ToneSpec) -> Vec<i16> {
    let step = tone.frequency_hz * TAU / SAMPLE_RATE as f32;
    (0..tone.sample_count())
        .map(|index| ((index as f32 * step).sin() * AMPLITUDE) as i16)
        .collect()
}
