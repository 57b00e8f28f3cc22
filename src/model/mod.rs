pub mod ngram;

pub use self::ngram::{Distribution, NGramTable};

use crate::alphabet::{is_symbol, ALPHABET, ALPHABET_SIZE};
use crate::consts::{ASCII_RANGE, MAX_CONTEXT, SPACE_PROB_HIGH, SPACE_PROB_LOW};
use crate::error::{TapwiseError, TwResult};
use crate::util::{add, array_sum, count_non_zero, scale};

/// Character n-gram model over the fixed alphabet plus space, smoothed with
/// Witten-Bell interpolation down to the unigram distribution.
///
/// Contexts of up to [`MAX_CONTEXT`] characters are recorded. A context made
/// of rare evidence (e.g. "x this") leans on its shorter suffixes (" this",
/// "this", ...) in proportion to how little it has seen.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    unigrams: Distribution,
    unigram_total: f64,
    ngrams: NGramTable,
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self {
            unigrams: [0.0; ASCII_RANGE],
            unigram_total: 0.0,
            ngrams: NGramTable::new(),
        }
    }
}

impl LanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns a whole sentence. Runs of characters outside the alphabet
    /// become single word breaks, and the sentence is padded with a space on
    /// each side so word starts and ends are modelled.
    pub fn learn(&mut self, text: &str) {
        let filtered = filter_text(text);
        if filtered.is_empty() {
            return;
        }
        let padded = format!(" {} ", filtered);
        let bytes = padded.as_bytes();

        for (i, &c) in bytes.iter().enumerate() {
            self.unigrams[c as usize] += 1.0;
            self.unigram_total += 1.0;
            for j in i.saturating_sub(MAX_CONTEXT)..i {
                self.ngrams.learn(&padded[j..i], c);
            }
        }
    }

    /// Smoothed next-character distribution for `context` (only its last
    /// [`MAX_CONTEXT`] characters are used). Sums to 1 over all entries.
    pub fn witten_bell(&self, context: &str) -> TwResult<Distribution> {
        let chars: Vec<char> = context.chars().collect();
        let tail = &chars[chars.len().saturating_sub(MAX_CONTEXT)..];

        // Shortest suffix first: each longer context that has evidence is
        // blended over the distribution of the one below it.
        let mut dist = self.unigram_distribution();
        for k in 1..=tail.len() {
            let suffix: String = tail[tail.len() - k..].iter().collect();
            let Some(matches) = self.ngrams.get(&suffix) else {
                continue;
            };
            let total = array_sum(matches);
            if total == 0.0 {
                continue;
            }
            let types = count_non_zero(matches) as f64;
            let lambda = 1.0 - types / (types + total);
            let blended = add(&scale(lambda / total, matches), &scale(1.0 - lambda, &dist))?;
            dist = to_distribution(blended)?;
        }
        Ok(dist)
    }

    /// Unsmoothed P(space | context) rescaled into `[0.1, 1.0]`, so a
    /// hypothesis is never ruled in or out as a complete word. The context is
    /// looked up exactly; unseen contexts give the floor.
    pub fn probability_before_space(&self, context: &str) -> f64 {
        let matches = self.ngrams.frequencies(context);
        let total = array_sum(matches);
        if total == 0.0 {
            return SPACE_PROB_LOW;
        }
        (matches[b' ' as usize] / total) * (SPACE_PROB_HIGH - SPACE_PROB_LOW) + SPACE_PROB_LOW
    }

    /// Unigram distribution. Uniform over the alphabet before anything is learned.
    pub fn unigram_distribution(&self) -> Distribution {
        let mut dist = [0.0; ASCII_RANGE];
        if self.unigram_total == 0.0 {
            for &c in ALPHABET.iter() {
                dist[c as usize] = 1.0 / ALPHABET_SIZE as f64;
            }
            return dist;
        }
        for (d, u) in dist.iter_mut().zip(self.unigrams.iter()) {
            *d = u / self.unigram_total;
        }
        dist
    }

    pub fn ngrams(&self) -> &NGramTable {
        &self.ngrams
    }

    pub fn unigram_count(&self, c: char) -> f64 {
        self.unigrams.get(c as usize).copied().unwrap_or(0.0)
    }

    /// Characters learned so far, word breaks included.
    pub fn symbols_learned(&self) -> f64 {
        self.unigram_total
    }
}

fn to_distribution(v: Vec<f64>) -> TwResult<Distribution> {
    let len = v.len();
    v.try_into().map_err(|_| TapwiseError::DimensionMismatch {
        left: len,
        right: ASCII_RANGE,
    })
}

/// Lowercases the alphabet symbols and collapses every run of other
/// characters into one space, trimmed at both ends.
pub fn filter_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_space = true;
    for c in s.chars() {
        if is_symbol(c) {
            out.push(c.to_ascii_lowercase());
            prev_was_space = false;
        } else if !prev_was_space {
            out.push(' ');
            prev_was_space = true;
        }
    }
    out.trim().to_string()
}
