use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("jingle: tempo must be greater than zero")]
    InvalidTempo,

    #[error("jingle: note sheet is empty")]
    EmptySheet,

    #[error("jingle: note {index}: length exponent {exponent} exceeds {max}")]
    InvalidLength { index: usize, exponent: u8, max: u8 },

    #[error("jingle: unknown song: {0:?}")]
    UnknownSong(String),

    #[error("jingle: unknown user: {0:?}")]
    UnknownUser(String),

    #[error("jingle: duplicate user: {0:?}")]
    DuplicateUser(String),

    #[error("jingle: line {line}: {message}")]
    Config { line: usize, message: String },

    #[error("jingle: io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("jingle: audio error: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, Error>;
