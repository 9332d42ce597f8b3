//! Sequential player: drives a sink through a compiled table, one note at a time.

use std::time::Duration;
use tracing::{debug, info};

use crate::compiler::CompiledNote;
use crate::sink::ToneSink;

/// Blocks the calling thread between notes.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// `std::thread::sleep` backed delay
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    NotStarted,
    /// Index of the note currently sounding
    Playing(usize),
    Finished,
}

/// Plays compiled notes in order on a single sink.
///
/// A rest emits nothing but still waits out its duration. The wait after
/// every note is done here, so a sink that returns immediately still gets
/// correctly spaced notes. There is no drift correction.
pub struct Player<S: ToneSink, D: Delay = ThreadDelay> {
    sink: S,
    delay: D,
    state: PlayerState,
}

impl<S: ToneSink> Player<S, ThreadDelay> {
    pub fn new(sink: S) -> Self {
        Self::with_delay(sink, ThreadDelay)
    }
}

impl<S: ToneSink, D: Delay> Player<S, D> {
    pub fn with_delay(sink: S, delay: D) -> Self {
        Self {
            sink,
            delay,
            state: PlayerState::NotStarted,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Play every note to completion, blocking for the whole song.
    pub fn play(&mut self, notes: &[CompiledNote]) {
        let total_ms: u64 = notes.iter().map(|n| n.duration_ms as u64).sum();
        info!(notes = notes.len(), total_ms, "playback started");

        for (index, note) in notes.iter().enumerate() {
            self.state = PlayerState::Playing(index);
            if note.is_rest() {
                debug!(index, duration_ms = note.duration_ms, "rest");
            } else {
                self.sink.emit_tone(note.frequency_hz, note.duration_ms);
            }
            self.delay.delay_ms(note.duration_ms);
        }

        self.state = PlayerState::Finished;
        info!("playback finished");
    }

    pub fn into_parts(self) -> (S, D) {
        (self.sink, self.delay)
    }
}
