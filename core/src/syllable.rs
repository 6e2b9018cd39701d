// core/src/syllable.rs
//
// Syllable-nucleus location and rhyme-key derivation. This is the
// algorithmic heart of the crate: a pure function from a phoneme sequence
// and a phone table to up to three word-final rhyme keys.

use crate::error::{Result, RhymerError};
use crate::phone::PhoneTable;

/// The rhyme keys derived from one phoneme sequence.
///
/// Key `k` covers the last `k` syllable nuclei: it is the concatenation of
/// the stress-stripped phone symbols from the k-th vowel counted from the
/// end of the word through the final phoneme, with no separators. A key is
/// `None` when the word has fewer than `k` vowels. When keys `k` and `k+1`
/// both exist, `k` is always a suffix of `k+1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeKeys {
    pub last_syllable: Option<String>,
    pub last_two_syllables: Option<String>,
    pub last_three_syllables: Option<String>,
}

/// Parser that segments phoneme sequences against a bound [`PhoneTable`].
///
/// The table is borrowed, not owned: the caller builds it once at load time
/// and threads the same instance through every dictionary-reading call.
#[derive(Debug, Clone, Copy)]
pub struct SyllableParser<'a> {
    table: &'a PhoneTable,
}

impl<'a> SyllableParser<'a> {
    /// Bind a parser to a phone table.
    pub fn new(table: &'a PhoneTable) -> Self {
        Self { table }
    }

    /// The table this parser classifies against.
    pub fn phone_table(&self) -> &PhoneTable {
        self.table
    }

    /// Compute the rhyme keys for one phoneme sequence.
    ///
    /// Each symbol may carry a trailing stress digit (0, 1 or 2); the digit
    /// is stripped before classification and never appears in a key. The
    /// slice for key `k` starts *at* the chosen vowel index, so onset
    /// consonants before that vowel are excluded by construction.
    ///
    /// A sequence with no vowels at all is valid and yields three absent
    /// keys (acronym-like entries). An empty sequence is an error, as is
    /// any symbol the table cannot classify.
    ///
    /// ```
    /// use librhymer_core::{PhoneTable, PhoneType, SyllableParser};
    ///
    /// let table = PhoneTable::from_entries([
    ///     ("Z", PhoneType::Fricative),
    ///     ("IH", PhoneType::Vowel),
    ///     ("N", PhoneType::Nasal),
    ///     ("D", PhoneType::Stop),
    ///     ("AH", PhoneType::Vowel),
    /// ]);
    /// let parser = SyllableParser::new(&table);
    ///
    /// // ZYNDA: Z IH1 N D AH0, vowel nuclei at indices 1 and 4.
    /// let keys = parser.rhyme_keys(&["Z", "IH1", "N", "D", "AH0"]).unwrap();
    /// assert_eq!(keys.last_syllable.as_deref(), Some("AH"));
    /// assert_eq!(keys.last_two_syllables.as_deref(), Some("IHNDAH"));
    /// assert_eq!(keys.last_three_syllables, None);
    /// ```
    pub fn rhyme_keys<S: AsRef<str>>(&self, phonemes: &[S]) -> Result<RhymeKeys> {
        if phonemes.is_empty() {
            return Err(RhymerError::EmptyPhonemeSequence);
        }

        let mut bases: Vec<&str> = Vec::with_capacity(phonemes.len());
        let mut vowel_indices: Vec<usize> = Vec::new();
        for (i, phoneme) in phonemes.iter().enumerate() {
            let base = strip_stress(phoneme.as_ref());
            let phone_type =
                self.table
                    .category_of(base)
                    .ok_or_else(|| RhymerError::UnknownPhone {
                        symbol: phoneme.as_ref().to_string(),
                    })?;
            if phone_type.is_vowel() {
                vowel_indices.push(i);
            }
            bases.push(base);
        }

        let key = |k: usize| -> Option<String> {
            if vowel_indices.len() < k {
                return None;
            }
            let start = vowel_indices[vowel_indices.len() - k];
            Some(bases[start..].concat())
        };

        Ok(RhymeKeys {
            last_syllable: key(1),
            last_two_syllables: key(2),
            last_three_syllables: key(3),
        })
    }
}

/// Strip a trailing stress digit (0, 1 or 2) from a phoneme symbol,
/// yielding the base symbol used for classification and key building.
/// Symbols without a stress digit pass through unchanged.
pub fn strip_stress(symbol: &str) -> &str {
    match symbol.as_bytes().last() {
        Some(b'0'..=b'2') => &symbol[..symbol.len() - 1],
        _ => symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneType;

    fn test_table() -> PhoneTable {
        PhoneTable::from_entries([
            ("AE", PhoneType::Vowel),
            ("AH", PhoneType::Vowel),
            ("AY", PhoneType::Vowel),
            ("EH", PhoneType::Vowel),
            ("EY", PhoneType::Vowel),
            ("IH", PhoneType::Vowel),
            ("B", PhoneType::Stop),
            ("D", PhoneType::Stop),
            ("K", PhoneType::Stop),
            ("T", PhoneType::Stop),
            ("L", PhoneType::Liquid),
            ("R", PhoneType::Liquid),
            ("M", PhoneType::Nasal),
            ("N", PhoneType::Nasal),
            ("S", PhoneType::Fricative),
            ("Z", PhoneType::Fricative),
        ])
    }

    #[test]
    fn strip_stress_handles_all_digits() {
        assert_eq!(strip_stress("AE1"), "AE");
        assert_eq!(strip_stress("AH0"), "AH");
        assert_eq!(strip_stress("EY2"), "EY");
        assert_eq!(strip_stress("K"), "K");
        assert_eq!(strip_stress(""), "");
    }

    #[test]
    fn two_vowel_word() {
        // ZYNDA: Z IH1 N D AH0
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser.rhyme_keys(&["Z", "IH1", "N", "D", "AH0"]).unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("AH"));
        assert_eq!(keys.last_two_syllables.as_deref(), Some("IHNDAH"));
        assert_eq!(keys.last_three_syllables, None);
    }

    #[test]
    fn trailing_consonant_after_final_vowel() {
        // ZYMAN: Z AY1 M AH0 N
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser.rhyme_keys(&["Z", "AY1", "M", "AH0", "N"]).unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("AHN"));
        assert_eq!(keys.last_two_syllables.as_deref(), Some("AYMAHN"));
        assert_eq!(keys.last_three_syllables, None);
    }

    #[test]
    fn single_vowel_word() {
        // CAT: K AE1 T
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser.rhyme_keys(&["K", "AE1", "T"]).unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("AET"));
        assert_eq!(keys.last_two_syllables, None);
        assert_eq!(keys.last_three_syllables, None);
    }

    #[test]
    fn three_vowel_word_excludes_onset() {
        // CELEBRATE: S EH1 L AH0 B R EY2 T; the initial S is onset and
        // stays out of even the longest key.
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser
            .rhyme_keys(&["S", "EH1", "L", "AH0", "B", "R", "EY2", "T"])
            .unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("EYT"));
        assert_eq!(keys.last_two_syllables.as_deref(), Some("AHBREYT"));
        assert_eq!(keys.last_three_syllables.as_deref(), Some("EHLAHBREYT"));
    }

    #[test]
    fn four_vowel_word_keeps_three_key_window() {
        // Sequence with four nuclei; key 3 starts at the second vowel, not
        // the first.
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser
            .rhyme_keys(&["AE1", "N", "AH0", "M", "AH0", "L", "IH0", "Z"])
            .unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("IHZ"));
        assert_eq!(keys.last_two_syllables.as_deref(), Some("AHLIHZ"));
        assert_eq!(keys.last_three_syllables.as_deref(), Some("AHMAHLIHZ"));
    }

    #[test]
    fn word_starting_with_vowel() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser.rhyme_keys(&["AE1", "T"]).unwrap();
        assert_eq!(keys.last_syllable.as_deref(), Some("AET"));
        assert_eq!(keys.last_two_syllables, None);
    }

    #[test]
    fn zero_vowel_sequence_yields_absent_keys() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let keys = parser.rhyme_keys(&["K", "T", "S"]).unwrap();
        assert_eq!(keys.last_syllable, None);
        assert_eq!(keys.last_two_syllables, None);
        assert_eq!(keys.last_three_syllables, None);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let err = parser.rhyme_keys::<&str>(&[]).unwrap_err();
        assert!(matches!(err, RhymerError::EmptyPhonemeSequence));
    }

    #[test]
    fn unknown_symbol_fails_the_word() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let err = parser.rhyme_keys(&["K", "QQ1", "T"]).unwrap_err();
        match err {
            RhymerError::UnknownPhone { symbol } => assert_eq!(symbol, "QQ1"),
            other => panic!("expected UnknownPhone, got {other:?}"),
        }
    }

    #[test]
    fn shorter_keys_are_suffixes_of_longer_ones() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let sequences: &[&[&str]] = &[
            &["Z", "IH1", "N", "D", "AH0"],
            &["S", "EH1", "L", "AH0", "B", "R", "EY2", "T"],
            &["K", "AE1", "T"],
            &["AE1", "N", "AH0", "M", "AH0", "L", "IH0", "Z"],
        ];
        for seq in sequences {
            let keys = parser.rhyme_keys(seq).unwrap();
            if let (Some(one), Some(two)) = (&keys.last_syllable, &keys.last_two_syllables) {
                assert!(two.ends_with(one.as_str()), "{two} should end with {one}");
            }
            if let (Some(two), Some(three)) =
                (&keys.last_two_syllables, &keys.last_three_syllables)
            {
                assert!(three.ends_with(two.as_str()), "{three} should end with {two}");
            }
        }
    }

    #[test]
    fn computation_is_pure() {
        let table = test_table();
        let parser = SyllableParser::new(&table);
        let seq = ["S", "EH1", "L", "AH0", "B", "R", "EY2", "T"];
        let first = parser.rhyme_keys(&seq).unwrap();
        let second = parser.rhyme_keys(&seq).unwrap();
        assert_eq!(first, second);
    }
}
