//! Songs: a note sheet plus the table compiled from it.

use crate::compiler::{CompiledNote, compile};
use crate::error::Result;
use crate::note::NoteSymbol;
use crate::player::{Delay, Player};
use crate::sink::ToneSink;

/// A song as written: symbolic notes with tempo and octave shift.
#[derive(Debug, Clone, Copy)]
pub struct SongSheet {
    pub id: &'static str,
    pub name: &'static str,
    /// Beats per minute, quarter note = 1 beat
    pub tempo: u32,
    pub shift: i32,
    pub notes: &'static [NoteSymbol],
}

impl SongSheet {
    pub const fn new(id: &'static str, name: &'static str, tempo: u32, notes: &'static [NoteSymbol]) -> Self {
        Self { id, name, tempo, shift: 0, notes }
    }

    /// Same sheet transposed by `shift` octaves.
    pub const fn shifted(self, shift: i32) -> Self {
        Self { shift, ..self }
    }
}

/// A compiled song. The note table is fixed once built.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: &'static str,
    pub name: &'static str,
    pub tempo: u32,
    pub shift: i32,
    notes: Vec<CompiledNote>,
}

impl Song {
    /// Compile a sheet at its own tempo and shift.
    pub fn compile(sheet: &SongSheet) -> Result<Self> {
        Self::compile_with(sheet, sheet.tempo, sheet.shift)
    }

    /// Compile a sheet with a different tempo or shift.
    pub fn compile_with(sheet: &SongSheet, tempo: u32, shift: i32) -> Result<Self> {
        let notes = compile(sheet.notes, tempo, shift)?;
        Ok(Self {
            id: sheet.id,
            name: sheet.name,
            tempo,
            shift,
            notes,
        })
    }

    pub fn notes(&self) -> &[CompiledNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total playback time in milliseconds
    pub fn total_duration_ms(&self) -> u64 {
        self.notes.iter().map(|n| n.duration_ms as u64).sum()
    }

    /// Play the whole song on `player`, blocking until it ends.
    pub fn play<S: ToneSink, D: Delay>(&self, player: &mut Player<S, D>) {
        tracing::info!(id = self.id, tempo = self.tempo, shift = self.shift, "playing {}", self.name);
        player.play(&self.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::note::{PitchClass::*, n, r};
    use crate::sink::LogSink;

    static SCENARIO: &[NoteSymbol] = &[n(C, 4, 2), r(2), n(C, 5, 1)];

    #[test]
    fn test_compile_sheet() {
        let sheet = SongSheet::new("scenario", "Scenario", 60, SCENARIO);
        let song = Song::compile(&sheet).unwrap();
        assert_eq!(song.id, "scenario");
        assert_eq!(song.len(), 3);
        assert!(!song.is_empty());
        assert_eq!(song.total_duration_ms(), 4000);
        assert_eq!(song.notes()[2].frequency_hz, 523);
    }

    #[test]
    fn test_shifted_sheet() {
        let sheet = SongSheet::new("scenario", "Scenario", 60, SCENARIO).shifted(-1);
        assert_eq!(sheet.shift, -1);
        let song = Song::compile(&sheet).unwrap();
        assert_eq!(song.notes()[0].frequency_hz, 131);
        assert_eq!(song.notes()[0].duration_ms, 1000);
    }

    #[test]
    fn test_compile_with_tempo_override() {
        let sheet = SongSheet::new("scenario", "Scenario", 60, SCENARIO);
        let song = Song::compile_with(&sheet, 120, 0).unwrap();
        assert_eq!(song.tempo, 120);
        assert_eq!(song.total_duration_ms(), 2000);
    }

    #[test]
    fn test_zero_tempo_sheet_rejected() {
        let sheet = SongSheet::new("broken", "Broken", 0, SCENARIO);
        assert!(matches!(Song::compile(&sheet), Err(Error::InvalidTempo)));
    }

    #[test]
    fn test_play_through_player() {
        let sheet = SongSheet::new("fast", "Fast", 60_000, SCENARIO);
        let song = Song::compile(&sheet).unwrap();
        let mut player = Player::new(LogSink::new());
        song.play(&mut player);
        let (sink, _) = player.into_parts();
        assert_eq!(sink.emitted(), 2);
    }
}
