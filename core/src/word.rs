// core/src/word.rs
//
// Word-variant records and the dictionary map that owns them.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RhymerError};
use crate::syllable::RhymeKeys;

/// One pronunciation of one word.
///
/// Holds the phoneme sequence exactly as given in the source (stress digits
/// retained) and the three rhyme keys derived from it. Immutable once
/// constructed; the keys are always stress-free regardless of the stored
/// phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordVariant {
    phonemes: Vec<String>,
    last_rhyming_syllable: Option<String>,
    last_two_rhyming_syllables: Option<String>,
    last_three_rhyming_syllables: Option<String>,
}

impl WordVariant {
    /// Build a variant from its phoneme sequence and derived keys.
    pub fn new(phonemes: Vec<String>, keys: RhymeKeys) -> Self {
        Self {
            phonemes,
            last_rhyming_syllable: keys.last_syllable,
            last_two_rhyming_syllables: keys.last_two_syllables,
            last_three_rhyming_syllables: keys.last_three_syllables,
        }
    }

    /// The phoneme sequence as read from the source.
    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    /// Rhyme key covering the last syllable nucleus, if the word has one.
    pub fn last_rhyming_syllable(&self) -> Option<&str> {
        self.last_rhyming_syllable.as_deref()
    }

    /// Rhyme key covering the last two syllable nuclei.
    pub fn last_two_rhyming_syllables(&self) -> Option<&str> {
        self.last_two_rhyming_syllables.as_deref()
    }

    /// Rhyme key covering the last three syllable nuclei.
    pub fn last_three_rhyming_syllables(&self) -> Option<&str> {
        self.last_three_rhyming_syllables.as_deref()
    }
}

/// Mapping from lower-cased word to its pronunciation variants.
///
/// Built once by a dictionary reader and read-only afterward. Every key is
/// non-empty lower-case text; every value is a non-empty sequence of
/// variants in source order (alternate pronunciations of a word append to
/// the same entry). The map is safe to share across threads once built.
///
/// Loading the same source twice yields equal content, but iteration order
/// varies with the hash seed: compare dictionaries with `==`, never by the
/// order [`iter`](Dictionary::iter) happens to produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    words: AHashMap<String, Vec<WordVariant>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            words: AHashMap::new(),
        }
    }

    /// Append a variant under a canonical (lower-case) word key, creating
    /// the entry on first sight.
    pub fn push_variant<K: Into<String>>(&mut self, word: K, variant: WordVariant) {
        self.words.entry(word.into()).or_default().push(variant);
    }

    /// All pronunciation variants of a word, in source order. Empty when
    /// the word is absent. Lookup is by canonical key: callers pass
    /// lower-case text.
    pub fn variants_of(&self, word: &str) -> &[WordVariant] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the dictionary has an entry for the word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct word keys.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, variants)` entries in unspecified order
    /// (hash-seed dependent between runs).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordVariant])> {
        self.words.iter().map(|(w, v)| (w.as_str(), v.as_slice()))
    }

    /// Save the parsed dictionary to a bincode file, so consumers can
    /// cache the parse instead of re-reading the source text.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self).map_err(|e| RhymerError::Codec(e.to_string()))
    }

    /// Load a dictionary from a bincode file produced by `save_binary`.
    pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader).map_err(|e| RhymerError::Codec(e.to_string()))
    }
}
