// cmudict/src/reader.rs
//
// Line-oriented readers for the CMU pronouncing dictionary file format:
// the `.phones` classification table and the dictionary text itself.

use std::io::{self, BufRead};

use tracing::warn;

use librhymer_core::{
    Dictionary, PhoneTable, PhoneType, Result, RhymerError, SyllableParser, WordVariant,
};

/// Marker that opens a comment line in the dictionary file.
pub const COMMENT_MARKER: &str = ";;;";

/// One dictionary line the reader skipped, with the error that caused it.
///
/// Recoverable per-line failures only; I/O errors abort the read instead of
/// landing here.
#[derive(Debug)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: RhymerError,
}

/// Result of a detailed dictionary read: the dictionary plus the skip
/// diagnostics recorded along the way, in line order.
#[derive(Debug)]
pub struct DictionaryLoad {
    pub dictionary: Dictionary,
    pub skipped: Vec<SkippedLine>,
}

/// Read a phone classification table.
///
/// Each non-blank line holds a phone symbol and a lowercase category label
/// separated by whitespace (a tab in the reference file). Any line that
/// does not split into exactly those two fields, or whose label is not a
/// known category, aborts the load with
/// [`RhymerError::MalformedPhoneEntry`]; a partial table is never
/// returned. Duplicate symbols follow the table's last-write-wins policy.
pub fn read_phones<R: BufRead>(reader: R) -> Result<PhoneTable> {
    let mut entries: Vec<(String, PhoneType)> = Vec::new();
    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let malformed = || RhymerError::MalformedPhoneEntry {
            line_number: index + 1,
            line: trimmed.to_string(),
        };
        let mut fields = trimmed.split_whitespace();
        let symbol = fields.next().ok_or_else(malformed)?;
        let label = fields.next().ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }
        let phone_type = PhoneType::from_label(label).ok_or_else(malformed)?;
        entries.push((symbol.to_string(), phone_type));
    }
    Ok(PhoneTable::from_entries(entries))
}

/// Read a pronouncing dictionary, skipping unusable lines.
///
/// Convenience wrapper over [`read_words_detailed`] for callers that do
/// not need the skip diagnostics; each skipped line still emits a
/// `tracing` warning.
pub fn read_words<R: BufRead>(parser: &SyllableParser<'_>, reader: R) -> Result<Dictionary> {
    Ok(read_words_detailed(parser, reader)?.dictionary)
}

/// Read a pronouncing dictionary and report every line that was skipped.
///
/// Per non-comment, non-blank line: the word token is split from the
/// whitespace-delimited phoneme tokens, an alternate-pronunciation suffix
/// (`WORD(2)`) is stripped, the key is lower-cased, and the rhyme keys are
/// computed for the variant. Lines that fail to split
/// ([`RhymerError::MalformedDictionaryLine`]) or to classify
/// ([`RhymerError::UnknownPhone`]) are skipped with a warning and recorded;
/// isolated bad lines never block the rest of the corpus. I/O errors are
/// fatal and abort the read with no dictionary returned.
pub fn read_words_detailed<R: BufRead>(
    parser: &SyllableParser<'_>,
    reader: R,
) -> Result<DictionaryLoad> {
    let mut dictionary = Dictionary::new();
    let mut skipped: Vec<SkippedLine> = Vec::new();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }
        match parse_word_line(parser, trimmed, line_number) {
            Ok((word, variant)) => dictionary.push_variant(word, variant),
            Err(reason) if reason.is_line_recoverable() => {
                warn!(line_number, %reason, "skipping dictionary line");
                skipped.push(SkippedLine {
                    line_number,
                    line: trimmed.to_string(),
                    reason,
                });
            }
            Err(fatal) => return Err(fatal),
        }
    }

    Ok(DictionaryLoad { dictionary, skipped })
}

/// Parse one dictionary line into its canonical word key and variant.
fn parse_word_line(
    parser: &SyllableParser<'_>,
    line: &str,
    line_number: usize,
) -> Result<(String, WordVariant)> {
    let mut tokens = line.split_whitespace();
    let malformed = || RhymerError::MalformedDictionaryLine {
        line_number,
        line: line.to_string(),
    };

    let word_token = tokens.next().ok_or_else(malformed)?;
    let phonemes: Vec<&str> = tokens.collect();
    if phonemes.is_empty() {
        return Err(malformed());
    }

    let word = canonical_word_key(word_token);
    if word.is_empty() {
        return Err(malformed());
    }

    let keys = parser.rhyme_keys(&phonemes)?;
    let variant = WordVariant::new(phonemes.iter().map(|p| p.to_string()).collect(), keys);
    Ok((word, variant))
}

/// Iterate over lines as lossily-decoded text.
///
/// The reference dictionary is ISO-8859-1, not UTF-8: its few accented
/// entries carry raw Latin-1 bytes that would make `BufRead::lines` return
/// a fatal decode error and forfeit the rest of the corpus. Reading raw
/// bytes up to each newline and decoding with `from_utf8_lossy` keeps
/// those lines parseable (undecodable bytes become U+FFFD in the word
/// key); only genuine I/O failures surface as errors.
fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Err(err) => Some(Err(err)),
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
        }
    }
}

/// Lower-case a word token and drop an alternate-pronunciation suffix.
///
/// `WORD(2)` and `WORD` both canonicalize to `word`; the suffix only
/// signals "append to the existing entry" and never reaches the key. A
/// parenthesis at position zero is part of the word itself (the reference
/// dictionary spells punctuation entries like `(BEGIN-PARENS` that way),
/// so only a suffix after at least one leading character is stripped.
fn canonical_word_key(token: &str) -> String {
    let base = match token.find('(') {
        Some(pos) if pos > 0 => &token[..pos],
        _ => token,
    };
    base.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_strips_variant_suffix() {
        assert_eq!(canonical_word_key("READ(2)"), "read");
        assert_eq!(canonical_word_key("READ"), "read");
        assert_eq!(canonical_word_key("ZYNDA"), "zynda");
        // Leading parenthesis belongs to the word.
        assert_eq!(canonical_word_key("(BEGIN-PARENS"), "(begin-parens");
    }
}
