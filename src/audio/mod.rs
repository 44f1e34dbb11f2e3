//! Best-effort sound feedback.
//!
//! Cues are fire-and-forget: nothing here returns an error to the caller.
//! Playback problems are logged and dropped.

use std::io::{self, Write};

/// Oscillator shape for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// One tone within a cue, `offset_ms` after the cue starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub offset_ms: u32,
    pub waveform: Waveform,
}

const fn note(frequency_hz: u32, duration_ms: u32, offset_ms: u32, waveform: Waveform) -> Note {
    Note {
        frequency_hz,
        duration_ms,
        offset_ms,
        waveform,
    }
}

/// A short named sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub name: &'static str,
    pub notes: &'static [Note],
    /// Whether a terminal without a synthesizer should ring the bell for it.
    pub ring_bell: bool,
}

impl Cue {
    pub fn total_duration_ms(&self) -> u32 {
        self.notes
            .iter()
            .map(|n| n.offset_ms + n.duration_ms)
            .max()
            .unwrap_or(0)
    }
}

/// Ascending C5-E5-G5.
pub const CORRECT_CUE: Cue = Cue {
    name: "correct",
    notes: &[
        note(523, 200, 0, Waveform::Sine),
        note(659, 200, 100, Waveform::Sine),
        note(784, 300, 200, Waveform::Sine),
    ],
    ring_bell: true,
};

pub const INCORRECT_CUE: Cue = Cue {
    name: "incorrect",
    notes: &[note(200, 500, 0, Waveform::Square)],
    ring_bell: true,
};

pub const CLICK_CUE: Cue = Cue {
    name: "click",
    notes: &[note(800, 100, 0, Waveform::Triangle)],
    ring_bell: false,
};

/// Victory fanfare C5-E5-G5-C6.
pub const COMPLETE_CUE: Cue = Cue {
    name: "complete",
    notes: &[
        note(523, 300, 0, Waveform::Sine),
        note(659, 300, 150, Waveform::Sine),
        note(784, 300, 300, Waveform::Sine),
        note(1047, 300, 450, Waveform::Sine),
    ],
    ring_bell: true,
};

/// Sound triggers used by the game.
pub trait AudioFeedback {
    fn play_correct(&mut self);
    fn play_incorrect(&mut self);
    fn play_click(&mut self);
    fn play_complete(&mut self);
    fn toggle_music(&mut self);
    fn is_music_playing(&self) -> bool;
}

/// Plays cues as terminal bells on the given writer.
pub struct TerminalAudio<W: Write> {
    out: W,
    music_playing: bool,
}

impl TerminalAudio<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalAudio<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            music_playing: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn play(&mut self, cue: &Cue) {
        tracing::debug!(
            cue = cue.name,
            notes = cue.notes.len(),
            duration_ms = cue.total_duration_ms(),
            "Playing cue"
        );
        if !cue.ring_bell {
            return;
        }
        let result = self
            .out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::debug!("Ignoring audio failure for {}: {}", cue.name, e);
        }
    }
}

impl<W: Write> AudioFeedback for TerminalAudio<W> {
    fn play_correct(&mut self) {
        self.play(&CORRECT_CUE);
    }

    fn play_incorrect(&mut self) {
        self.play(&INCORRECT_CUE);
    }

    fn play_click(&mut self) {
        self.play(&CLICK_CUE);
    }

    fn play_complete(&mut self) {
        self.play(&COMPLETE_CUE);
    }

    fn toggle_music(&mut self) {
        self.music_playing = !self.music_playing;
        tracing::info!(playing = self.music_playing, "Background music toggled");
    }

    fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}

/// Audio that never makes a sound (`--mute`).
#[derive(Debug, Default)]
pub struct SilentAudio {
    music_playing: bool,
}

impl AudioFeedback for SilentAudio {
    fn play_correct(&mut self) {}
    fn play_incorrect(&mut self) {}
    fn play_click(&mut self) {}
    fn play_complete(&mut self) {}

    fn toggle_music(&mut self) {
        self.music_playing = !self.music_playing;
    }

    fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}
