//! Doorbell jingles for a single square-wave output.
//!
//! Songs are written as symbolic note sheets ([`note`]), compiled once into
//! `(Hz, ms)` tables ([`compiler`]) and played note by note on a
//! [`sink::ToneSink`] by the blocking [`player::Player`].

pub mod catalog;
pub mod compiler;
pub mod error;
pub mod favorites;
pub mod note;
pub mod player;
pub mod sink;
pub mod song;

pub use error::{Error, Result};
