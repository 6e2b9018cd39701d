//! librhymer-core
//!
//! Phone classification, syllable parsing and the rhyme-key word model
//! shared by format-specific dictionary readers (currently `cmudict`).
//!
//! The pipeline has three layers, leaf first:
//! - [`PhoneTable`]: immutable phone symbol -> category mapping; the only
//!   authority on which symbols are vowels.
//! - [`SyllableParser`]: bound to a table, turns one phoneme sequence into
//!   up to three word-final rhyme keys (last one, two and three syllable
//!   nuclei).
//! - [`Dictionary`] / [`WordVariant`]: the word -> pronunciations map a
//!   reader accumulates, with rhyme keys precomputed per variant.
//!
//! Everything is built once during a load phase and read-only afterward;
//! there is no global state and no internal parallelism.
//!
//! Public API:
//! - `PhoneType`, `PhoneTable` - phone classification
//! - `SyllableParser`, `RhymeKeys` - rhyme-key derivation
//! - `WordVariant`, `Dictionary` - the loaded word model
//! - `RhymerError`, `Result` - typed error surface

pub mod error;
pub use error::{Result, RhymerError};

pub mod phone;
pub use phone::{PhoneTable, PhoneType};

pub mod syllable;
pub use syllable::{strip_stress, RhymeKeys, SyllableParser};

pub mod word;
pub use word::{Dictionary, WordVariant};
