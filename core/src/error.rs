//! Error types for librhymer-core.
//!
//! The error kinds split into two severity classes, and callers rely on the
//! distinction:
//! - table-level errors (`MalformedPhoneEntry`, `Io`) abort the load that
//!   produced them; a partial phone table is never usable,
//! - line-level errors (`UnknownPhone`, `EmptyPhonemeSequence`,
//!   `MalformedDictionaryLine`) are recoverable: dictionary readers skip the
//!   offending line and keep going.

use thiserror::Error;

/// Errors produced while loading phone tables or parsing dictionary lines.
#[derive(Error, Debug)]
pub enum RhymerError {
    /// A phone-table line did not parse or carried an unrecognized category
    /// label. Fatal for the whole table load.
    #[error("malformed phone entry at line {line_number}: {line:?}")]
    MalformedPhoneEntry { line_number: usize, line: String },

    /// A phoneme symbol has no entry in the phone table. The word it came
    /// from cannot be segmented.
    #[error("unknown phone symbol {symbol:?}")]
    UnknownPhone { symbol: String },

    /// A word with no phonemes at all cannot be parsed.
    #[error("empty phoneme sequence")]
    EmptyPhonemeSequence,

    /// A dictionary line did not split into a word and at least one phoneme.
    #[error("malformed dictionary line {line_number}: {line:?}")]
    MalformedDictionaryLine { line_number: usize, line: String },

    /// I/O failure on an underlying stream. Always fatal for the current
    /// load operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary cache (de)serialization failure.
    #[error("codec error: {0}")]
    Codec(String),
}

impl RhymerError {
    /// True for the per-line error kinds a dictionary reader may skip over
    /// without aborting the whole read.
    pub fn is_line_recoverable(&self) -> bool {
        matches!(
            self,
            RhymerError::UnknownPhone { .. }
                | RhymerError::EmptyPhonemeSequence
                | RhymerError::MalformedDictionaryLine { .. }
        )
    }
}

/// Result alias used throughout librhymer.
pub type Result<T> = std::result::Result<T, RhymerError>;
