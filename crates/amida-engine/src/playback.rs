//! Caller-side playback sequencing.
//!
//! A [`Playback`] walks the lines of a round left to right. For each line
//! it yields a [`FrameEvent::Show`] carrying that line's trace, held for
//! [`PlaybackTimings::hold`], then a [`FrameEvent::Clear`], followed by
//! [`PlaybackTimings::gap`]. It never sleeps: each [`Frame`] states the
//! delay the caller should wait before asking for the next one.

use std::time::Duration;

use amida_core::LineId;
use amida_trace::{Trace, TraceError};

use crate::config::PlaybackTimings;
use crate::round::Round;

// ── Frames ─────────────────────────────────────────────────────────

/// What the presentation layer should do for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    /// Display the trace of one line.
    Show(Trace),
    /// Remove the trace of one line.
    Clear(LineId),
}

/// One step of playback and the pause that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The action for this frame.
    pub event: FrameEvent,
    /// How long to wait before requesting the next frame.
    pub delay: Duration,
}

// ── Playback ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cue {
    Show(u32),
    Clear(u32),
    Done,
}

/// Show-then-clear sequencing over every line of a round.
///
/// # Examples
///
/// ```
/// use amida_engine::{FrameEvent, Playback, PlaybackTimings, Round, RoundConfig};
///
/// let mut round = Round::new(RoundConfig { line_count: 2, rung_count: 1, seed: 3 }).unwrap();
/// let mut playback = Playback::new(PlaybackTimings::default());
///
/// let mut shown = 0;
/// while let Some(frame) = playback.next_frame(&mut round).unwrap() {
///     if let FrameEvent::Show(_) = frame.event {
///         shown += 1;
///     }
/// }
/// assert_eq!(shown, 2);
/// assert!(playback.is_finished());
/// ```
#[derive(Clone, Debug)]
pub struct Playback {
    timings: PlaybackTimings,
    cue: Cue,
}

impl Playback {
    /// Start playback at line 0.
    pub fn new(timings: PlaybackTimings) -> Self {
        Self {
            timings,
            cue: Cue::Show(0),
        }
    }

    /// The delays this playback uses.
    pub fn timings(&self) -> PlaybackTimings {
        self.timings
    }

    /// Produce the next frame, tracing the next line when it is due.
    ///
    /// Returns `Ok(None)` once every line has been shown and cleared.
    /// A failed trace returns its [`TraceError`] and moves on to the
    /// following line, so the caller may keep calling.
    pub fn next_frame(&mut self, round: &mut Round) -> Result<Option<Frame>, TraceError> {
        match self.cue {
            Cue::Show(i) if (i as usize) < round.line_count() => match round.trace(LineId(i)) {
                Ok(trace) => {
                    self.cue = Cue::Clear(i);
                    Ok(Some(Frame {
                        event: FrameEvent::Show(trace),
                        delay: self.timings.hold,
                    }))
                }
                Err(e) => {
                    self.cue = Cue::Show(i + 1);
                    Err(e)
                }
            },
            Cue::Show(_) => {
                self.cue = Cue::Done;
                Ok(None)
            }
            Cue::Clear(i) => {
                self.cue = Cue::Show(i + 1);
                Ok(Some(Frame {
                    event: FrameEvent::Clear(LineId(i)),
                    delay: self.timings.gap,
                }))
            }
            Cue::Done => Ok(None),
        }
    }

    /// Whether every line has been played.
    pub fn is_finished(&self) -> bool {
        self.cue == Cue::Done
    }
}
