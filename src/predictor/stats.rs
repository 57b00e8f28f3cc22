use crate::error::TwResult;
use serde::{Deserialize, Serialize};

/// Summary of one typed sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub final_phrase: String,
    pub elapsed_ms: u64,
    pub backspace_count: u32,
    pub suggestion_pick_count: u32,
    pub valid: bool,
}

impl TextStats {
    /// A record is valid only when something was typed over a measurable time.
    pub fn new(
        final_phrase: &str,
        elapsed_ms: u64,
        backspace_count: u32,
        suggestion_pick_count: u32,
    ) -> Self {
        let final_phrase = final_phrase.trim().to_string();
        let valid = !final_phrase.is_empty() && elapsed_ms > 0;
        Self {
            final_phrase,
            elapsed_ms,
            backspace_count,
            suggestion_pick_count,
            valid,
        }
    }

    pub fn input_time_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }

    /// Five characters per word, spaces included.
    pub fn words_per_minute(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        let words = self.final_phrase.chars().count() as f64 / 5.0;
        words / (self.elapsed_ms as f64 / 60_000.0)
    }

    /// `phrase, seconds, wpm, backspaces, suggestions`, tab separated.
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{:.1}\t{:.2}\t{}\t{}",
            self.final_phrase,
            self.input_time_secs(),
            self.words_per_minute(),
            self.backspace_count,
            self.suggestion_pick_count
        )
    }

    pub fn to_json(&self) -> TwResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
