//! Note-table compiler: symbolic sheets to (Hz, ms) pairs.

use crate::error::{Error, Result};
use crate::note::{MAX_EXPONENT, NoteSymbol};

/// A note ready for playback. `frequency_hz == 0` is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledNote {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl CompiledNote {
    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Milliseconds for a note of `units` length units at `tempo_bpm`,
/// truncated toward zero.
pub fn note_duration_ms(tempo_bpm: u32, units: f64) -> u32 {
    (4.0 * 60.0 * 1000.0 / tempo_bpm as f64 / units) as u32
}

/// Compile a sheet into playable notes.
///
/// Output has the same length and order as `symbols`. The octave shift only
/// touches frequencies; durations depend on tempo and length code alone.
pub fn compile(symbols: &[NoteSymbol], tempo_bpm: u32, octave_shift: i32) -> Result<Vec<CompiledNote>> {
    if tempo_bpm == 0 {
        return Err(Error::InvalidTempo);
    }
    if symbols.is_empty() {
        return Err(Error::EmptySheet);
    }

    symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            let exponent = symbol.length.max_exponent();
            if exponent > MAX_EXPONENT {
                return Err(Error::InvalidLength {
                    index,
                    exponent,
                    max: MAX_EXPONENT,
                });
            }
            Ok(CompiledNote {
                frequency_hz: symbol.frequency_hz(octave_shift),
                duration_ms: note_duration_ms(tempo_bpm, symbol.length.units()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{PitchClass::*, n, r, t, tr};

    fn sample_sheet() -> Vec<NoteSymbol> {
        vec![
            n(C, 4, 2),
            r(2),
            n(C, 5, 1),
            t(D, 3, 3, 1),
            tr(3, 1),
            n(A, 3, 4),
            n(ASharp, 4, 3),
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        let notes = compile(&[n(C, 4, 2), r(2), n(C, 5, 1)], 60, 0).unwrap();
        assert_eq!(
            notes,
            vec![
                CompiledNote { frequency_hz: 262, duration_ms: 1000 },
                CompiledNote { frequency_hz: 0, duration_ms: 1000 },
                CompiledNote { frequency_hz: 523, duration_ms: 2000 },
            ]
        );
        let total: u32 = notes.iter().map(|n| n.duration_ms).sum();
        assert_eq!(total, 4000);
    }

    #[test]
    fn test_negative_shift_keeps_duration() {
        let notes = compile(&[n(C, 4, 2)], 60, -1).unwrap();
        assert_eq!(notes[0], CompiledNote { frequency_hz: 131, duration_ms: 1000 });
    }

    #[test]
    fn test_deterministic() {
        let sheet = sample_sheet();
        assert_eq!(compile(&sheet, 138, 1).unwrap(), compile(&sheet, 138, 1).unwrap());
    }

    #[test]
    fn test_length_preserved() {
        let sheet = sample_sheet();
        for tempo in [1, 60, 145, 300] {
            for shift in -2..=2 {
                assert_eq!(compile(&sheet, tempo, shift).unwrap().len(), sheet.len());
            }
        }
    }

    #[test]
    fn test_rests_are_silent() {
        let sheet = sample_sheet();
        for shift in -2..=2 {
            let notes = compile(&sheet, 120, shift).unwrap();
            for (symbol, note) in sheet.iter().zip(&notes) {
                if symbol.is_rest() {
                    assert!(note.is_rest());
                    assert!(note.duration_ms > 0);
                }
            }
        }
    }

    #[test]
    fn test_octave_shift_doubles_frequency() {
        let sheet = sample_sheet();
        let base = compile(&sheet, 120, 0).unwrap();
        for k in 0..3 {
            let lower = compile(&sheet, 120, k).unwrap();
            let upper = compile(&sheet, 120, k + 1).unwrap();
            for (lo, hi) in lower.iter().zip(&upper) {
                assert!((hi.frequency_hz as i64 - 2 * lo.frequency_hz as i64).abs() <= 1);
                assert_eq!(lo.duration_ms, hi.duration_ms);
            }
        }
        let down = compile(&sheet, 120, -1).unwrap();
        for (b, d) in base.iter().zip(&down) {
            assert!((2 * d.frequency_hz as i64 - b.frequency_hz as i64).abs() <= 1);
            assert_eq!(b.duration_ms, d.duration_ms);
        }
    }

    #[test]
    fn test_doubling_tempo_halves_durations() {
        let sheet = sample_sheet();
        let slow = compile(&sheet, 75, 0).unwrap();
        let fast = compile(&sheet, 150, 0).unwrap();
        for (s, f) in slow.iter().zip(&fast) {
            assert!((s.duration_ms as i64 - 2 * f.duration_ms as i64).abs() <= 1);
            assert_eq!(s.frequency_hz, f.frequency_hz);
        }
    }

    #[test]
    fn test_tuplet_duration() {
        // L = 2^3 * 3 = 24 at 145 BPM: 240000 / 145 / 24 = 68.96
        let notes = compile(&[t(D, 3, 3, 1)], 145, 0).unwrap();
        assert_eq!(notes[0].duration_ms, 68);
        assert_eq!(notes[0].frequency_hz, 147);
    }

    #[test]
    fn test_duration_truncates() {
        // 240000 / 138 / 8 = 217.39
        assert_eq!(note_duration_ms(138, 8.0), 217);
        assert_eq!(note_duration_ms(60, 4.0), 1000);
    }

    #[test]
    fn test_zero_tempo_rejected() {
        assert!(matches!(compile(&[n(C, 4, 2)], 0, 0), Err(Error::InvalidTempo)));
    }

    #[test]
    fn test_empty_sheet_rejected() {
        assert!(matches!(compile(&[], 120, 0), Err(Error::EmptySheet)));
    }

    #[test]
    fn test_oversized_exponent_rejected() {
        let sheet = [n(C, 4, 2), t(C, 4, 2, MAX_EXPONENT + 1)];
        match compile(&sheet, 120, 0) {
            Err(Error::InvalidLength { index, exponent, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(exponent, MAX_EXPONENT + 1);
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }
}
