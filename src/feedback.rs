use std::io::Write;

use tracing::debug;

/// Audible cue for something that just happened
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum Sound {
    Correct,
    Wrong,
    Click,
}

/// Where the app sends its sound cues
pub trait FeedbackSink {
    fn play(&mut self, sound: Sound);
}

/// Rings the terminal bell for answers, clicks stay quiet
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> FeedbackSink for TerminalBell<W> {
    fn play(&mut self, sound: Sound) {
        debug!(%sound, "feedback");
        let rings = match sound {
            Sound::Correct => 1,
            Sound::Wrong => 2,
            Sound::Click => 0,
        };
        let rung = (0..rings)
            .try_for_each(|_| self.out.write_all(b"\x07"))
            .and_then(|_| self.out.flush());
        if let Err(error) = rung {
            debug!(%sound, %error, "terminal bell failed");
        }
    }
}

/// Used with `--mute` and in tests
#[derive(Debug, Default)]
pub struct Silent;

impl FeedbackSink for Silent {
    fn play(&mut self, sound: Sound) {
        debug!(%sound, "feedback muted");
    }
}
