/// Pitch classes of the chromatic scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Frequency in Hz at octave 0, rounded to two decimals.
    pub fn base_freq(self) -> f64 {
        match self {
            PitchClass::C => 16.35,
            PitchClass::CSharp => 17.32,
            PitchClass::D => 18.35,
            PitchClass::DSharp => 19.45,
            PitchClass::E => 20.6,
            PitchClass::F => 21.83,
            PitchClass::FSharp => 23.12,
            PitchClass::G => 24.5,
            PitchClass::GSharp => 25.96,
            PitchClass::A => 27.5,
            PitchClass::ASharp => 29.14,
            PitchClass::B => 30.87,
        }
    }

    /// Display symbol, flats for the black keys.
    pub fn symbol(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "Db",
            PitchClass::D => "D",
            PitchClass::DSharp => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "Gb",
            PitchClass::G => "G",
            PitchClass::GSharp => "Ab",
            PitchClass::A => "A",
            PitchClass::ASharp => "Bb",
            PitchClass::B => "B",
        }
    }
}

/// Largest exponent accepted in a length code.
pub const MAX_EXPONENT: u8 = 16;

pub fn pow2(n: u32) -> f64 {
    2.0_f64.powi(n as i32)
}

/// Power-of-three helper used by tuplet lengths.
///
/// Kept identical to the helper the jingle tables were written against:
/// for n >= 2 this yields 3 * 2^(n-1) rather than 3^n.
pub fn pow3(n: u32) -> f64 {
    if n == 0 { 1.0 } else { 3.0 * pow2(n - 1) }
}

/// How long a note lasts, as a divisor of a whole note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCode {
    /// `L = 2^size`: 0 = whole, 2 = quarter, 4 = sixteenth
    Binary(u8),
    /// `L = pow2(halfs) * pow3(thirds)`
    Tuplet { halfs: u8, thirds: u8 },
}

impl LengthCode {
    /// Length-unit value `L`
    pub fn units(self) -> f64 {
        match self {
            LengthCode::Binary(size) => pow2(size as u32),
            LengthCode::Tuplet { halfs, thirds } => pow2(halfs as u32) * pow3(thirds as u32),
        }
    }

    /// Largest exponent in the code, checked against `MAX_EXPONENT`.
    pub fn max_exponent(self) -> u8 {
        match self {
            LengthCode::Binary(size) => size,
            LengthCode::Tuplet { halfs, thirds } => halfs.max(thirds),
        }
    }
}

/// One note or rest as written on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSymbol {
    /// `None` is a rest
    pub pitch: Option<PitchClass>,
    pub octave: i32,
    pub length: LengthCode,
}

impl NoteSymbol {
    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }

    /// Frequency in Hz after applying an octave shift. Rests are always 0.
    pub fn frequency_hz(&self, shift: i32) -> u32 {
        match self.pitch {
            Some(pitch) => {
                let freq = pitch.base_freq() * 2.0_f64.powi(self.octave) * shift_factor(shift);
                freq.round() as u32
            }
            None => 0,
        }
    }
}

/// `2^shift` for non-negative shifts, `1 / 2^-shift` otherwise.
pub fn shift_factor(shift: i32) -> f64 {
    if shift >= 0 {
        pow2(shift as u32)
    } else {
        1.0 / pow2(shift.unsigned_abs())
    }
}

// Sheet shorthands: a note is (pitch, octave, size), a rest is (size).

pub const fn n(pitch: PitchClass, octave: i32, size: u8) -> NoteSymbol {
    NoteSymbol {
        pitch: Some(pitch),
        octave,
        length: LengthCode::Binary(size),
    }
}

pub const fn r(size: u8) -> NoteSymbol {
    NoteSymbol {
        pitch: None,
        octave: 0,
        length: LengthCode::Binary(size),
    }
}

pub const fn t(pitch: PitchClass, octave: i32, halfs: u8, thirds: u8) -> NoteSymbol {
    NoteSymbol {
        pitch: Some(pitch),
        octave,
        length: LengthCode::Tuplet { halfs, thirds },
    }
}

pub const fn tr(halfs: u8, thirds: u8) -> NoteSymbol {
    NoteSymbol {
        pitch: None,
        octave: 0,
        length: LengthCode::Tuplet { halfs, thirds },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_c_frequency() {
        assert_eq!(n(PitchClass::C, 4, 2).frequency_hz(0), 262);
        assert_eq!(n(PitchClass::C, 5, 1).frequency_hz(0), 523);
    }

    #[test]
    fn test_a4_frequency() {
        assert_eq!(n(PitchClass::A, 4, 2).frequency_hz(0), 440);
    }

    #[test]
    fn test_shift_factor() {
        assert_eq!(shift_factor(0), 1.0);
        assert_eq!(shift_factor(2), 4.0);
        assert_eq!(shift_factor(-1), 0.5);
        assert_eq!(n(PitchClass::C, 4, 2).frequency_hz(-1), 131);
    }

    #[test]
    fn test_rest_is_silent_at_any_shift() {
        let rest = NoteSymbol {
            pitch: None,
            octave: 7,
            length: LengthCode::Binary(2),
        };
        assert!(rest.is_rest());
        for shift in -3..=3 {
            assert_eq!(rest.frequency_hz(shift), 0);
        }
    }

    #[test]
    fn test_length_units() {
        assert_eq!(LengthCode::Binary(0).units(), 1.0);
        assert_eq!(LengthCode::Binary(2).units(), 4.0);
        assert_eq!(LengthCode::Binary(4).units(), 16.0);
        assert_eq!(LengthCode::Tuplet { halfs: 3, thirds: 1 }.units(), 24.0);
        assert_eq!(LengthCode::Tuplet { halfs: 2, thirds: 0 }.units(), 4.0);
    }

    #[test]
    fn test_pow3_matches_table_helper() {
        assert_eq!(pow3(0), 1.0);
        assert_eq!(pow3(1), 3.0);
        // 3 * 2^(n-1), not 3^n
        assert_eq!(pow3(2), 6.0);
        assert_eq!(pow3(3), 12.0);
    }

    #[test]
    fn test_max_exponent() {
        assert_eq!(LengthCode::Binary(5).max_exponent(), 5);
        assert_eq!(LengthCode::Tuplet { halfs: 2, thirds: 9 }.max_exponent(), 9);
    }
}
