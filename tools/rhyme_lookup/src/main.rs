// tools/rhyme_lookup/src/main.rs
//
// Dictionary-consumer demo: load the phone table and dictionary, print the
// rhyme keys of a query word, and optionally scan the dictionary for words
// sharing those keys. The grouping scan lives here, not in the library;
// downstream consumers are expected to build their own indexes over the
// keys.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use librhymer_core::{Dictionary, SyllableParser, WordVariant};

#[derive(Parser, Debug)]
#[command(about = "Look up the rhyme keys and rhyming words for a dictionary word")]
struct Args {
    /// Path to the phone classification file (e.g. cmudict-0.7b.phones)
    #[arg(long)]
    phones: PathBuf,

    /// Path to the pronouncing dictionary file (e.g. cmudict-0.7b)
    #[arg(long)]
    dict: PathBuf,

    /// Word to look up (case-insensitive)
    word: String,

    /// Also list the words sharing each rhyme key
    #[arg(long)]
    rhymes: bool,

    /// Cap on listed rhyming words per key
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let phones_file = File::open(&args.phones)
        .with_context(|| format!("opening phone table {}", args.phones.display()))?;
    let table = cmudict::read_phones(BufReader::new(phones_file))
        .with_context(|| format!("loading phone table {}", args.phones.display()))?;

    let parser = SyllableParser::new(&table);
    let dict_file = File::open(&args.dict)
        .with_context(|| format!("opening dictionary {}", args.dict.display()))?;
    let load = cmudict::read_words_detailed(&parser, BufReader::new(dict_file))
        .with_context(|| format!("loading dictionary {}", args.dict.display()))?;

    if !load.skipped.is_empty() {
        eprintln!("note: {} dictionary line(s) skipped", load.skipped.len());
    }

    let word = args.word.to_lowercase();
    let variants = load.dictionary.variants_of(&word);
    if variants.is_empty() {
        bail!("word {:?} not found in dictionary", word);
    }

    for (i, variant) in variants.iter().enumerate() {
        println!("{} [{}]  {}", word, i + 1, variant.phonemes().join(" "));
        println!("  last syllable:        {}", key_or_dash(variant.last_rhyming_syllable()));
        println!("  last two syllables:   {}", key_or_dash(variant.last_two_rhyming_syllables()));
        println!("  last three syllables: {}", key_or_dash(variant.last_three_rhyming_syllables()));

        if args.rhymes {
            print_rhymes(&load.dictionary, &word, variant, args.limit);
        }
    }

    Ok(())
}

fn key_or_dash(key: Option<&str>) -> &str {
    key.unwrap_or("-")
}

/// Linear scan for words whose variants share one of the query's keys,
/// most specific key first. Fine for a one-shot CLI; an interactive
/// consumer would index by key instead.
fn print_rhymes(dict: &Dictionary, query: &str, variant: &WordVariant, limit: usize) {
    type KeyFn = fn(&WordVariant) -> Option<&str>;
    let scopes: [(&str, KeyFn); 3] = [
        ("three-syllable rhymes", WordVariant::last_three_rhyming_syllables),
        ("two-syllable rhymes", WordVariant::last_two_rhyming_syllables),
        ("one-syllable rhymes", WordVariant::last_rhyming_syllable),
    ];

    for (label, key_of) in scopes {
        let Some(key) = key_of(variant) else { continue };
        let mut matches: Vec<&str> = dict
            .iter()
            .filter(|(word, _)| *word != query)
            .filter(|(_, variants)| variants.iter().any(|v| key_of(v) == Some(key)))
            .map(|(word, _)| word)
            .collect();
        matches.sort_unstable();

        println!("  {} ({} total):", label, matches.len());
        for word in matches.iter().take(limit) {
            println!("    {word}");
        }
        if matches.len() > limit {
            println!("    ... and {} more", matches.len() - limit);
        }
    }
}
