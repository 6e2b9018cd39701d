//! cmudict
//!
//! Reader for the CMU pronouncing dictionary file format, built on top of
//! `librhymer-core`. Two streams go in, one word model comes out:
//!
//! - the `.phones` file (39 entries for the reference set) becomes a
//!   [`PhoneTable`](librhymer_core::PhoneTable),
//! - the dictionary text becomes a
//!   [`Dictionary`](librhymer_core::Dictionary) of rhyme-keyed
//!   [`WordVariant`](librhymer_core::WordVariant)s.
//!
//! The phone-table load is fail-fast; the dictionary read skips unusable
//! lines and keeps going, recording a diagnostic per skip. Typical wiring:
//!
//! ```
//! use librhymer_core::SyllableParser;
//!
//! let phones = "K\tstop\nAE\tvowel\nT\tstop\n";
//! let dict = "CAT  K AE1 T\n";
//!
//! let table = cmudict::read_phones(phones.as_bytes()).unwrap();
//! let parser = SyllableParser::new(&table);
//! let dictionary = cmudict::read_words(&parser, dict.as_bytes()).unwrap();
//! assert_eq!(
//!     dictionary.variants_of("cat")[0].last_rhyming_syllable(),
//!     Some("AET")
//! );
//! ```

pub mod reader;
pub use reader::{
    read_phones, read_words, read_words_detailed, DictionaryLoad, SkippedLine, COMMENT_MARKER,
};
