//! Audio cues available to the terminal client.
//!
//! [`build_cue`] turns the configured [`AudioMode`] into a concrete cue. A
//! tone that cannot be played falls back to the terminal bell.
use std::io::{self, Write};

use client_frontend_core::{AudioConfig, AudioCue, AudioMode, SilentCue};

/// Whether this build can play the synthesized tone through an audio device.
pub const TONE_PLAYBACK: bool = cfg!(feature = "audio");

/// Rings the terminal bell.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play(&self) {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::trace!(%err, "Terminal bell failed");
        }
    }

    fn name(&self) -> &'static str {
        "bell"
    }
}

/// Picks the cue for `config`, logging what was chosen.
pub fn build_cue(config: &AudioConfig) -> Box<dyn AudioCue> {
    let cue: Box<dyn AudioCue> = match config.mode {
        AudioMode::Off => Box::new(SilentCue),
        AudioMode::Bell => Box::new(TerminalBell),
        AudioMode::Tone => tone_cue(config),
    };
    tracing::info!(
        mode = %config.mode,
        cue = cue.name(),
        tone_playback = TONE_PLAYBACK,
        "Audio cue ready"
    );
    cue
}

#[cfg(feature = "audio")]
fn tone_cue(config: &AudioConfig) -> Box<dyn AudioCue> {
    match tone::RodioCue::open(config.tone) {
        Ok(cue) => Box::new(cue),
        Err(err) => {
            tracing::warn!(error = %err, "Audio device unavailable, using terminal bell");
            Box::new(TerminalBell)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn tone_cue(_config: &AudioConfig) -> Box<dyn AudioCue> {
    tracing::warn!("Built without the `audio` feature, using terminal bell");
    Box::new(TerminalBell)
}

#[cfg(feature = "audio")]
pub use tone::{AudioError, RodioCue};

#[cfg(feature = "audio")]
mod tone {
    use std::sync::mpsc;
    use std::thread;

    use client_frontend_core::{
        AudioCue, ToneSpec,
        audio::{synthesize, tone::SAMPLE_RATE},
    };
    use rodio::{OutputStream, Sink, buffer::SamplesBuffer};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum AudioError {
        #[error("failed to open audio output: {0}")]
        Stream(#[from] rodio::StreamError),

        #[error("failed to start audio thread: {0}")]
        Thread(#[from] std::io::Error),

        #[error("audio thread exited during startup")]
        Startup,
    }

    /// Plays a synthesized tone through the default output device.
    ///
    /// The output stream cannot leave the thread that opened it, so a
    /// dedicated thread owns it and plays one tone per request.
    pub struct RodioCue {
        requests: mpsc::Sender<()>,
    }

    impl RodioCue {
        /// Opens the default device and starts the playback thread.
        pub fn open(tone: ToneSpec) -> Result<Self, AudioError> {
            let samples = synthesize(tone);
            let (requests, incoming) = mpsc::channel::<()>();
            let (ready_tx, ready_rx) = mpsc::sync_channel(1);

            thread::Builder::new()
                .name("audio-cue".into())
                .spawn(move || {
                    let (_stream, handle) = match OutputStream::try_default() {
                        Ok(output) => output,
                        Err(err) => {
                            let _ = ready_tx.send(Err(err));
                            return;
                        }
                    };
                    let _ = ready_tx.send(Ok(()));

                    // Ends when the cue is dropped.
                    while incoming.recv().is_ok() {
                        match Sink::try_new(&handle) {
                            Ok(sink) => {
                                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
                                sink.detach();
                            }
                            Err(err) => tracing::debug!(%err, "Dropped audio cue"),
                        }
                    }
                })?;

            ready_rx.recv().map_err(|_| AudioError::Startup)??;
            Ok(Self { requests })
        }
    }

    impl AudioCue for RodioCue {
        fn play(&self) {
            // Only fails when the audio thread is gone; the cue then stays silent.
            let _ = self.requests.send(());
        }

        fn name(&self) -> &'static str {
            "tone"
        }
    }
}
