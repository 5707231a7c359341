//! Background playback driver.
//!
//! [`PlaybackDriver`] moves a [`Round`] onto a dedicated thread, runs a
//! [`Playback`] over it, and streams [`DriverEvent`]s back on a bounded
//! crossbeam channel. Each frame's delay is spent blocked on a stop
//! channel, so [`stop()`](PlaybackDriver::stop) interrupts a pending delay
//! immediately. The thread hands the `Round` back when it exits.
//!
//! The frame channel is sized to hold a whole playback, so the driver
//! thread never blocks on a slow consumer.

use std::error::Error;
use std::fmt;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use amida_trace::TraceError;

use crate::config::PlaybackTimings;
use crate::playback::{Frame, Playback};
use crate::round::Round;

// ── PlaybackError ──────────────────────────────────────────────────

/// Errors from starting or recovering the background driver.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackError {
    /// The driver thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// The driver thread panicked, so the round could not be recovered.
    DriverPanicked,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
            Self::DriverPanicked => write!(f, "playback driver thread panicked"),
        }
    }
}

impl Error for PlaybackError {}

// ── PlaybackDriver ─────────────────────────────────────────────────

/// Messages sent from the driver thread.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverEvent {
    /// A playback frame, sent before its delay starts.
    Frame(Frame),
    /// A line's trace failed and was skipped.
    Skipped(TraceError),
    /// Every line has been played.
    Finished,
}

/// Handle to a playback running on a background thread.
///
/// Dropping the handle stops playback and joins the thread; use
/// [`stop()`](Self::stop) or [`join()`](Self::join) to get the round back.
pub struct PlaybackDriver {
    events: Receiver<DriverEvent>,
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<Round>>,
}

impl PlaybackDriver {
    /// Spawn the driver thread and start playing `round`.
    pub fn spawn(round: Round, timings: PlaybackTimings) -> Result<Self, PlaybackError> {
        // Show + clear per line, a possible skip per line, and Finished.
        let capacity = round.line_count().saturating_mul(3).saturating_add(1);
        let (event_tx, event_rx) = crossbeam_channel::bounded(capacity);
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let thread = thread::Builder::new()
            .name("amida-playback".into())
            .spawn(move || run(round, timings, event_tx, stop_rx))
            .map_err(|e| PlaybackError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            events: event_rx,
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }

    /// Events emitted by the driver thread, in order.
    pub fn events(&self) -> &Receiver<DriverEvent> {
        &self.events
    }

    /// Interrupt playback and recover the round.
    pub fn stop(mut self) -> Result<Round, PlaybackError> {
        self.stop_tx.take();
        self.take_round()
    }

    /// Wait for playback to finish on its own and recover the round.
    ///
    /// Blocks for the sum of all remaining frame delays.
    pub fn join(mut self) -> Result<Round, PlaybackError> {
        self.take_round()
    }

    fn take_round(&mut self) -> Result<Round, PlaybackError> {
        self.thread
            .take()
            .ok_or(PlaybackError::DriverPanicked)?
            .join()
            .map_err(|_| PlaybackError::DriverPanicked)
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

fn run(
    mut round: Round,
    timings: PlaybackTimings,
    events: Sender<DriverEvent>,
    stop: Receiver<()>,
) -> Round {
    let mut playback = Playback::new(timings);
    loop {
        match playback.next_frame(&mut round) {
            Ok(Some(frame)) => {
                let delay = frame.delay;
                if events.send(DriverEvent::Frame(frame)).is_err() {
                    break;
                }
                match stop.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            Ok(None) => {
                let _ = events.send(DriverEvent::Finished);
                break;
            }
            Err(e) => {
                if events.send(DriverEvent::Skipped(e)).is_err() {
                    break;
                }
            }
        }
    }
    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundConfig;
    use crate::playback::FrameEvent;
    use amida_core::LineId;
    use amida_test_utils::tied_cycle_ladder;
    use std::time::Duration;

    fn round(line_count: u32, rung_count: u32) -> Round {
        Round::new(RoundConfig {
            line_count,
            rung_count,
            seed: 11,
        })
        .unwrap()
    }

    #[test]
    fn immediate_playback_runs_to_completion() {
        let driver = PlaybackDriver::spawn(round(3, 4), PlaybackTimings::immediate()).unwrap();
        let mut shows = 0;
        let mut clears = 0;
        loop {
            match driver.events().recv_timeout(Duration::from_secs(5)).unwrap() {
                DriverEvent::Frame(Frame {
                    event: FrameEvent::Show(_),
                    ..
                }) => shows += 1,
                DriverEvent::Frame(Frame {
                    event: FrameEvent::Clear(_),
                    ..
                }) => clears += 1,
                DriverEvent::Skipped(e) => panic!("unexpected skip: {e}"),
                DriverEvent::Finished => break,
            }
        }
        assert_eq!((shows, clears), (3, 3));
        let round = driver.join().unwrap();
        assert_eq!(round.ladder().rungs().count(), 4);
    }

    #[test]
    fn cycling_line_is_reported_then_playback_finishes() {
        let mut round = round(2, 0);
        for (_, rung) in tied_cycle_ladder().rungs().iter() {
            round.add_rung(*rung).unwrap();
        }
        let driver = PlaybackDriver::spawn(round, PlaybackTimings::immediate()).unwrap();

        let mut events = Vec::new();
        loop {
            let event = driver.events().recv_timeout(Duration::from_secs(5)).unwrap();
            let finished = event == DriverEvent::Finished;
            events.push(event);
            if finished {
                break;
            }
        }

        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            DriverEvent::Frame(Frame {
                event: FrameEvent::Show(trace),
                ..
            }) if trace.start() == LineId(0)
        ));
        assert!(matches!(
            &events[1],
            DriverEvent::Frame(Frame {
                event: FrameEvent::Clear(LineId(0)),
                ..
            })
        ));
        assert_eq!(
            events[2],
            DriverEvent::Skipped(TraceError::CycleDetected {
                start: LineId(1),
                line: LineId(1),
                position: 0.5,
                crossings: 6,
            })
        );
        assert_eq!(events[3], DriverEvent::Finished);
        assert_eq!(driver.join().unwrap().ladder().rungs().count(), 3);
    }

    #[test]
    fn error_display() {
        let e = PlaybackError::ThreadSpawnFailed {
            reason: "no threads left".into(),
        };
        assert_eq!(e.to_string(), "thread spawn failed: no threads left");
        assert!(e.source().is_none());
        assert_eq!(
            PlaybackError::DriverPanicked.to_string(),
            "playback driver thread panicked"
        );
    }

    #[test]
    fn stop_interrupts_long_hold() {
        let timings = PlaybackTimings {
            hold: Duration::from_secs(60),
            gap: Duration::from_secs(60),
        };
        let driver = PlaybackDriver::spawn(round(4, 2), timings).unwrap();
        let first = driver.events().recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(first, DriverEvent::Frame(_)));

        let round = driver.stop().unwrap();
        assert_eq!(round.line_count(), 4);
    }

    #[test]
    fn drop_does_not_hang() {
        let timings = PlaybackTimings {
            hold: Duration::from_secs(60),
            gap: Duration::from_secs(60),
        };
        let driver = PlaybackDriver::spawn(round(2, 0), timings).unwrap();
        drop(driver);
    }
}
