//! Built-in jingles.
//!
//! Sheets use the shorthands from [`crate::note`]: `n(pitch, octave, size)`
//! for a note of `4 / 2^size` beats, `r(size)` for a rest, and `t`/`tr` for
//! tuplet lengths `(halfs, thirds)`. Flats are written as the sharp below
//! (Eb is `DSharp`, Bb is `ASharp`).

use crate::error::{Error, Result};
use crate::note::PitchClass::*;
use crate::note::{NoteSymbol, n, r, t, tr};
use crate::song::{Song, SongSheet};

/// All built-in sheets, in listing order.
pub static ALL_SHEETS: &[SongSheet] = &[
    SongSheet::new("c_scale", "C Scale", 60, C_SCALE),
    SongSheet::new("vitality", "Vitality", 300, VITALITY),
    SongSheet::new("industry_baby", "Industry Baby", 145, INDUSTRY_BABY),
    SongSheet::new("bad_apple", "Bad Apple!!", 138, BAD_APPLE),
    SongSheet::new("bad_apple_intro", "Bad Apple!! (Intro)", 138, BAD_APPLE_INTRO),
    SongSheet::new("bad_apple_bridge", "Bad Apple!! (Bridge)", 138, BAD_APPLE_BRIDGE).shifted(1),
    SongSheet::new("imperial_march", "Imperial March", 80, IMPERIAL_MARCH),
    SongSheet::new("mean_one", "You're A Mean One", 104, MEAN_ONE).shifted(1),
    SongSheet::new("virtual_insanity", "Virtual Insanity", 93, VIRTUAL_INSANITY),
];

/// Look up a sheet by id.
pub fn sheet(id: &str) -> Option<&'static SongSheet> {
    ALL_SHEETS.iter().find(|s| s.id == id)
}

/// Every built-in song, compiled once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Compile all built-in sheets.
    pub fn builtin() -> Result<Self> {
        Self::from_sheets(ALL_SHEETS)
    }

    pub fn from_sheets(sheets: &[SongSheet]) -> Result<Self> {
        let songs = sheets.iter().map(Song::compile).collect::<Result<Vec<_>>>()?;
        tracing::debug!(songs = songs.len(), "catalog compiled");
        Ok(Self { songs })
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&Song> {
        self.get(id).ok_or_else(|| Error::UnknownSong(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.songs.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

// ========== Sheets ==========

static C_SCALE: &[NoteSymbol] = &[
    n(C, 4, 1), n(D, 4, 2), n(E, 4, 2),
    n(F, 4, 2), n(G, 4, 2), n(A, 4, 2), n(B, 4, 2),
    n(C, 5, 1), n(B, 4, 2), n(A, 4, 2),
    n(G, 4, 2), n(F, 4, 2), n(E, 4, 2), n(D, 4, 2), n(C, 4, 1),
];

static VITALITY: &[NoteSymbol] = &[
    n(C, 4, 2), r(2), n(G, 4, 2), n(DSharp, 4, 2), r(2), n(C, 4, 2), r(2), n(C, 5, 2),
    r(2), n(C, 4, 2), r(2), n(DSharp, 4, 2), r(2), n(C, 4, 2), n(D, 4, 2), n(DSharp, 4, 2),
    n(G, 4, 2), r(2), n(C, 5, 2), n(D, 5, 2), r(2), n(G, 4, 2), r(2), n(B, 4, 2),
    r(2), n(G, 4, 2), r(2), n(DSharp, 4, 2), r(2), n(G, 4, 2), n(F, 4, 2), n(DSharp, 4, 2),

    n(C, 4, 2), r(2), n(G, 4, 2), n(DSharp, 4, 2), r(2), n(C, 4, 2), r(2), n(D, 4, 2),
    r(2), n(C, 4, 2), r(2), n(DSharp, 4, 2), r(2), n(C, 4, 2), n(D, 4, 2), n(DSharp, 4, 2),
    n(G, 4, 2), r(2), n(DSharp, 4, 2), n(G, 4, 2), r(2), n(DSharp, 4, 2), r(2), n(G, 4, 2),
    r(2), n(DSharp, 4, 2), r(2), n(ASharp, 4, 3), n(G, 4, 3), n(F, 4, 3), n(DSharp, 4, 3), n(D, 4, 2), n(DSharp, 4, 2), n(D, 4, 2),
];

static INDUSTRY_BABY: &[NoteSymbol] = &[
    n(D, 3, 3), r(3), t(D, 3, 3, 1), tr(3, 1), t(D, 3, 3, 1), tr(3, 1), t(D, 3, 3, 1), tr(3, 1), n(D, 3, 3), r(3), n(D, 3, 3), r(3),
    n(A, 3, 3), r(3), t(A, 3, 3, 1), tr(3, 1), t(A, 3, 3, 1), tr(3, 1), t(A, 3, 3, 1), tr(3, 1), n(A, 3, 3), r(3), n(A, 3, 3), r(3),
    n(D, 4, 3), r(3), t(D, 4, 3, 1), tr(3, 1), t(D, 4, 3, 1), tr(3, 1), t(D, 4, 3, 1), tr(3, 1), n(D, 4, 3), r(3), n(D, 4, 3), r(3),
    n(D, 4, 1), n(D, 4, 2), r(2),

    n(A, 3, 3), n(G, 3, 3), n(F, 3, 1), n(G, 3, 3), n(F, 3, 3),
    n(E, 3, 2), n(E, 3, 3), r(3), n(E, 3, 4), r(4), n(E, 3, 4), r(4), n(E, 3, 4), r(4), n(E, 3, 4), r(4),
    n(F, 3, 3), n(E, 3, 3), n(D, 3, 1), n(D, 3, 2),
    r(2), n(D, 3, 2), n(E, 3, 2), n(F, 3, 2),

    n(A, 3, 3), n(G, 3, 3), n(F, 3, 1), n(G, 3, 3), n(F, 3, 3),
    n(E, 3, 2), n(E, 3, 3), r(3), n(E, 3, 4), r(4), n(E, 3, 4), r(4), n(E, 3, 4), r(4), n(E, 3, 4), r(4),
    n(F, 3, 3), n(E, 3, 3), n(D, 3, 1), n(D, 3, 2),
];

static BAD_APPLE: &[NoteSymbol] = &[
    n(DSharp, 3, 3), n(F, 3, 3), n(FSharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(DSharp, 4, 3), n(CSharp, 4, 3),
    n(ASharp, 3, 2), n(DSharp, 3, 2), n(ASharp, 3, 3), n(GSharp, 3, 3), n(FSharp, 3, 3), n(F, 3, 3),
    n(DSharp, 3, 3), n(F, 3, 3), n(FSharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(FSharp, 3, 3),
    n(F, 3, 3), n(DSharp, 3, 3), n(F, 3, 3), n(FSharp, 3, 3), n(F, 3, 3), n(DSharp, 3, 3), n(D, 3, 3), n(F, 3, 3),
    n(DSharp, 3, 3), n(F, 3, 3), n(FSharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(DSharp, 4, 3), n(CSharp, 4, 3),
    n(ASharp, 3, 2), n(DSharp, 3, 2), n(ASharp, 3, 3), n(GSharp, 3, 3), n(FSharp, 3, 3), n(F, 3, 3),
    n(DSharp, 3, 3), n(F, 3, 3), n(FSharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(FSharp, 3, 3),
    n(F, 3, 2), n(FSharp, 3, 2), n(GSharp, 3, 2), n(ASharp, 3, 2),
];

static BAD_APPLE_INTRO: &[NoteSymbol] = &[
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(FSharp, 4, 3), n(DSharp, 4, 4), n(FSharp, 4, 4), n(GSharp, 4, 3), n(FSharp, 4, 4), n(GSharp, 4, 4),

    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(GSharp, 4, 3), n(FSharp, 4, 4), n(GSharp, 4, 4), n(FSharp, 4, 3), n(DSharp, 4, 4), n(FSharp, 4, 4),

    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(FSharp, 4, 3), n(DSharp, 4, 4), n(FSharp, 4, 4), n(GSharp, 4, 3), n(FSharp, 4, 4), n(GSharp, 4, 4),

    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    n(DSharp, 3, 4), n(DSharp, 3, 5), r(5), n(DSharp, 3, 4), n(DSharp, 4, 4), r(4), n(DSharp, 4, 4), n(CSharp, 4, 4), n(DSharp, 4, 4),
    t(GSharp, 4, 2, 1), t(FSharp, 4, 2, 1), t(GSharp, 4, 2, 1), t(FSharp, 4, 2, 1), t(DSharp, 4, 2, 1), t(FSharp, 4, 2, 1),
];

static BAD_APPLE_BRIDGE: &[NoteSymbol] = &[
    n(CSharp, 4, 3), n(DSharp, 4, 3), n(ASharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(ASharp, 3, 3),
    n(CSharp, 4, 3), n(DSharp, 4, 3), n(ASharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(ASharp, 3, 3),
    n(GSharp, 3, 3), n(FSharp, 3, 3), n(F, 3, 3), n(CSharp, 3, 3), n(DSharp, 3, 2), n(CSharp, 3, 3), n(DSharp, 3, 3),
    n(F, 3, 3), n(FSharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 3), n(DSharp, 3, 2), n(ASharp, 3, 3), n(CSharp, 4, 3),
    n(CSharp, 4, 3), n(DSharp, 4, 3), n(ASharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(ASharp, 3, 3),
    n(CSharp, 4, 3), n(DSharp, 4, 3), n(ASharp, 3, 3), n(GSharp, 3, 3), n(ASharp, 3, 2), n(DSharp, 4, 3), n(F, 4, 3),
    n(FSharp, 4, 3), n(F, 4, 3), n(DSharp, 4, 3), n(CSharp, 4, 3), n(ASharp, 3, 2), n(GSharp, 3, 3), n(ASharp, 3, 3),
    n(GSharp, 3, 3), n(FSharp, 3, 3), n(F, 3, 3), n(CSharp, 3, 3), n(DSharp, 3, 2), r(2),
];

static IMPERIAL_MARCH: &[NoteSymbol] = &[
    n(G, 3, 3), r(3), n(G, 3, 3), r(3), n(G, 3, 3), r(3), n(DSharp, 3, 3), r(4), n(ASharp, 3, 4),
    n(G, 3, 2), n(DSharp, 3, 3), r(4), n(ASharp, 3, 4), n(G, 3, 2), r(2),
    n(D, 4, 3), r(3), n(D, 4, 3), r(3), n(D, 4, 3), r(3), n(DSharp, 4, 3), r(4), n(ASharp, 3, 4),
    n(FSharp, 3, 2), n(DSharp, 3, 3), r(4), n(ASharp, 3, 4), n(G, 3, 2), r(2),

    n(G, 4, 2), n(G, 3, 3), r(4), n(G, 3, 4), n(G, 4, 2), n(FSharp, 4, 3), n(FSharp, 4, 4), n(F, 4, 4),
    n(E, 4, 4), n(DSharp, 4, 4), n(E, 4, 3), r(3), n(GSharp, 3, 3), n(CSharp, 4, 2), n(C, 4, 3), n(C, 4, 4), n(B, 3, 4),
    n(ASharp, 3, 4), n(A, 3, 4), n(ASharp, 3, 3), r(3), n(DSharp, 3, 3), n(FSharp, 3, 2), n(DSharp, 3, 3), n(DSharp, 3, 4), n(FSharp, 3, 4), n(ASharp, 3, 2), n(G, 3, 3), n(G, 3, 4), n(ASharp, 3, 4), n(D, 4, 2), r(2),
];

static MEAN_ONE: &[NoteSymbol] = &[
    n(D, 4, 1), n(B, 3, 1), n(ASharp, 3, 1), t(A, 3, 2, 1), tr(1, 1),
    t(F, 3, 2, 1), tr(2, 1), t(G, 3, 2, 1), t(A, 3, 1, 1), t(D, 3, 1, 1), tr(1, 1), r(2),
    t(F, 3, 2, 1), tr(2, 1), t(A, 3, 2, 1), t(G, 3, 1, 1), tr(2, 1), r(1), t(F, 3, 2, 1), tr(2, 1), t(G, 3, 2, 1),
    n(A, 3, 2), t(A, 3, 1, 1), t(D, 3, 2, 1), n(B, 3, 2), t(B, 3, 1, 1), t(E, 3, 2, 1),
    n(CSharp, 4, 1), r(2), t(A, 3, 2, 1), tr(2, 1), t(A, 3, 2, 1),

    t(D, 4, 1, 1), t(C, 4, 2, 1), t(ASharp, 3, 1, 1), t(A, 3, 2, 1), t(ASharp, 3, 1, 1), t(G, 3, 2, 1), t(G, 3, 2, 1), tr(2, 1), t(G, 3, 2, 1),
    t(C, 4, 1, 1), t(ASharp, 3, 2, 1), t(A, 3, 1, 1), t(G, 3, 2, 1), n(A, 3, 2), t(F, 3, 1, 1), t(E, 3, 2, 1),
    n(D, 3, 1), t(D, 4, 2, 1), tr(1, 1), r(2),
    t(ASharp, 3, 2, 1), tr(2, 1), t(ASharp, 3, 3, 1), tr(3, 1), t(ASharp, 3, 2, 1), tr(2, 1), t(ASharp, 3, 3, 1), tr(3, 1),
    t(ASharp, 3, 2, 1), tr(2, 1), t(ASharp, 3, 3, 1), tr(3, 1), t(ASharp, 3, 2, 1), tr(2, 1), t(ASharp, 3, 2, 1),
    r(1), t(CSharp, 4, 1, 1), t(ASharp, 3, 2, 1), n(CSharp, 4, 2),
    n(D, 4, 1), n(D, 4, 2), r(2),
];

static VIRTUAL_INSANITY: &[NoteSymbol] = &[
    r(2), t(G, 4, 2, 1), t(A, 4, 3, 1), t(B, 4, 3, 1), tr(3, 1), t(B, 4, 3, 1),
    n(B, 4, 3), n(A, 4, 3), n(E, 4, 3), t(D, 4, 2, 1), t(E, 4, 3, 1),
    t(E, 4, 3, 1), tr(3, 1), t(E, 4, 3, 1), tr(2, 1), t(G, 4, 3, 1), n(G, 4, 3), t(G, 4, 2, 1), t(E, 4, 3, 1),
    t(A, 4, 2, 1), tr(3, 1), t(A, 4, 3, 1), tr(3, 1), t(G, 4, 2, 1), tr(3, 1), t(D, 4, 3, 1), tr(2, 1), t(E, 4, 3, 1),
    t(E, 4, 3, 1), tr(3, 1), t(E, 4, 3, 1), tr(2, 1), t(E, 4, 3, 1), t(E, 4, 1, 1), tr(2, 1),
];
