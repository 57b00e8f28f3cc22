use crate::consts::ASCII_RANGE;
use std::collections::HashMap;

/// Next-character frequencies, indexed by character code.
pub type Distribution = [f64; ASCII_RANGE];

static EMPTY: Distribution = [0.0; ASCII_RANGE];

/// Context string -> frequency of each character seen right after it.
/// Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct NGramTable {
    store: HashMap<String, Box<Distribution>>,
}

impl NGramTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learn(&mut self, context: &str, next: u8) {
        let freqs = self
            .store
            .entry(context.to_string())
            .or_insert_with(|| Box::new([0.0; ASCII_RANGE]));
        freqs[next as usize] += 1.0;
    }

    pub fn get(&self, context: &str) -> Option<&Distribution> {
        self.store.get(context).map(|b| b.as_ref())
    }

    /// Frequencies after `context`; all zeros for an unseen context.
    pub fn frequencies(&self, context: &str) -> &Distribution {
        self.get(context).unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
