use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Anything ranked by a scalar weight.
pub trait Weighted {
    fn weight(&self) -> f64;
    fn scale_weight(&mut self, factor: f64);
}

/// A candidate partial word. Identity is the text alone: two hypotheses with
/// the same text are the same hypothesis whatever their weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedString {
    text: String,
    weight: f64,
}

impl WeightedString {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Weighted for WeightedString {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn scale_weight(&mut self, factor: f64) {
        self.weight *= factor;
    }
}

impl PartialEq for WeightedString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for WeightedString {}

impl Hash for WeightedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for WeightedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.4})", self.text, self.weight)
    }
}
