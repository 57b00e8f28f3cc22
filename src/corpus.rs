use crate::error::TwResult;
use crate::model::LanguageModel;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Common words, the top English words and bigrams, and everyday short
/// messages. Repeats are weighted roughly by log frequency.
pub const SEED_CORPUS_TSV: &str = include_str!("../data/seed_corpus.tsv");

/// Short business messages used to check end-to-end typing accuracy.
pub const TEST_PHRASES_TXT: &str = include_str!("../data/test_phrases.txt");

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub phrase: String,
    pub count: u32,
}

/// Reads `phrase[\tcount]` rows. A missing count means 1; rows with an empty
/// phrase or an unreadable or zero count are skipped.
pub fn load_corpus<R: Read>(reader: R) -> TwResult<Vec<CorpusEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        let phrase = rec.get(0).map(str::trim).unwrap_or("");
        if phrase.is_empty() {
            skipped += 1;
            continue;
        }
        let count = match rec.get(1).map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(c) if c > 0 => c,
                _ => {
                    skipped += 1;
                    continue;
                }
            },
        };
        entries.push(CorpusEntry {
            phrase: phrase.to_string(),
            count,
        });
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} invalid corpus rows", skipped);
    }
    Ok(entries)
}

pub fn load_corpus_file<P: AsRef<Path>>(path: P) -> TwResult<Vec<CorpusEntry>> {
    let file = File::open(path.as_ref())?;
    let entries = load_corpus(file)?;
    info!(
        "📖 Loaded {} corpus entries from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

pub fn seed_corpus() -> TwResult<Vec<CorpusEntry>> {
    load_corpus(SEED_CORPUS_TSV.as_bytes())
}

/// One phrase per line; blank lines are ignored.
pub fn load_phrases<R: Read>(reader: R) -> TwResult<Vec<String>> {
    let mut phrases = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            phrases.push(trimmed.to_string());
        }
    }
    Ok(phrases)
}

pub fn test_phrases() -> TwResult<Vec<String>> {
    load_phrases(TEST_PHRASES_TXT.as_bytes())
}

/// Feeds every entry to the model `count` times. Returns the number of
/// sentences learned.
pub fn learn_corpus(model: &mut LanguageModel, entries: &[CorpusEntry]) -> usize {
    let mut learned = 0;
    for entry in entries {
        for _ in 0..entry.count {
            model.learn(&entry.phrase);
        }
        learned += entry.count as usize;
    }
    learned
}
