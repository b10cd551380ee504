//! Fire-and-forget feedback played after a move.
//!
//! Frontends pick a concrete [`AudioCue`] at startup. Playback failures are
//! the cue's own business: `play` never reports back to the caller.
pub mod tone;

pub use tone::{ToneSpec, synthesize};

/// Short sound emitted after every accepted move.
pub trait AudioCue: Send {
    /// Starts the cue and returns immediately.
    fn play(&self);

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Cue that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&self) {}

    fn name(&self) -> &'static str {
        "silent"
    }
}

impl<C: AudioCue + ?Sized> AudioCue for Box<C> {
    fn play(&self) {
        (**self).play();
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
