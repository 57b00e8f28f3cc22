use super::weighted::{Weighted, WeightedString};
use std::collections::HashSet;

/// The live partial words after the latest tap, heaviest first and unique by
/// text. Never edited in place: each transition builds a new set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HypothesisSet {
    ranked: Vec<WeightedString>,
}

impl HypothesisSet {
    /// The single empty word every new word grows from.
    pub fn seed() -> Self {
        Self {
            ranked: vec![WeightedString::new("", 1.0)],
        }
    }

    /// Sorts heaviest first (stable on ties) and drops repeated texts,
    /// keeping the heavier copy.
    pub fn from_candidates(mut candidates: Vec<WeightedString>) -> Self {
        candidates.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
        let mut seen = HashSet::new();
        candidates.retain(|c| seen.insert(c.text().to_string()));
        Self { ranked: candidates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedString> {
        self.ranked.iter()
    }

    pub fn best(&self) -> Option<&WeightedString> {
        self.ranked.first()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ranked.iter().map(|h| h.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
