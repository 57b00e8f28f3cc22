use super::hypotheses::HypothesisSet;
use super::PredictionResult;
use crate::geometry::Point;

/// Everything that belongs to the sentence being typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Committed words joined by spaces, always ending in a space.
    /// A lone space at sentence start.
    pub history: String,
    pub committed: Vec<String>,
    /// Raw taps of the current word, oldest first.
    pub taps: Vec<Point>,
    pub hypotheses: HypothesisSet,
    pub last_result: PredictionResult,
    pub first_tap_ms: Option<u64>,
    pub last_tap_ms: Option<u64>,
    pub backspaces: u32,
    pub suggestions_picked: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            history: " ".to_string(),
            committed: Vec::new(),
            taps: Vec::new(),
            hypotheses: HypothesisSet::default(),
            last_result: PredictionResult::default(),
            first_tap_ms: None,
            last_tap_ms: None,
            backspaces: 0,
            suggestions_picked: 0,
        }
    }
}

impl SessionState {
    pub fn recompute_history(&mut self) {
        self.history = format!("{} ", self.committed.join(" "));
    }

    /// Committed text as shown before the current word: empty, or the words
    /// followed by one space.
    pub fn display_prefix(&self) -> String {
        let trimmed = self.history.trim();
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{} ", trimmed)
        }
    }

    pub fn touch(&mut self, now_ms: u64) {
        self.last_tap_ms = Some(now_ms);
        if self.first_tap_ms.is_none() {
            self.first_tap_ms = Some(now_ms);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        match (self.first_tap_ms, self.last_tap_ms) {
            (Some(first), Some(last)) => last.saturating_sub(first),
            _ => 0,
        }
    }

    pub fn clear_word(&mut self) {
        self.taps.clear();
        self.hypotheses = HypothesisSet::default();
    }
}
