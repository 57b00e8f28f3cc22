use crate::config::{LayoutParams, PredictorParams};
use crate::error::TwResult;
use crate::model::LanguageModel;
use crate::predictor::{ManualClock, PredictorBuildParams, TextStats};
use crate::util::levenshtein_ignore_case_and_padding;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Simulated time between two keystrokes.
const KEYSTROKE_MS: u64 = 300;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseOutcome {
    pub target: String,
    pub typed: String,
    pub exact: bool,
    pub edit_distance: usize,
    pub stats: Option<TextStats>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub outcomes: Vec<PhraseOutcome>,
}

impl VerificationReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.exact).count()
    }

    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64
    }

    pub fn mean_edit_distance(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let sum: usize = self.outcomes.iter().map(|o| o.edit_distance).sum();
        sum as f64 / self.total() as f64
    }

    pub fn failures(&self) -> impl Iterator<Item = &PhraseOutcome> {
        self.outcomes.iter().filter(|o| !o.exact)
    }
}

/// Types phrases perfectly (every tap on its key center, a space between
/// words) and checks what the predictor makes of them.
pub struct PhraseVerifier {
    layout: LayoutParams,
    predictor: PredictorParams,
    model: Arc<LanguageModel>,
}

impl PhraseVerifier {
    pub fn new(layout: LayoutParams, predictor: PredictorParams, model: Arc<LanguageModel>) -> Self {
        Self {
            layout,
            predictor,
            model,
        }
    }

    /// Runs one phrase through a fresh session. Fails if the phrase holds a
    /// character with no key.
    pub fn verify_phrase(&self, phrase: &str) -> TwResult<PhraseOutcome> {
        let clock = ManualClock::new(0);
        let mut predictor = PredictorBuildParams::builder()
            .layout(self.layout.clone())
            .predictor(self.predictor.clone())
            .model(self.model.clone())
            .clock(Arc::new(clock.clone()))
            .build()
            .build_predictor()?;

        for c in phrase.trim().chars() {
            clock.advance(KEYSTROKE_MS);
            if c == ' ' {
                predictor.space();
            } else {
                let p = predictor.layout().key_center(c)?;
                predictor.tap(p.x, p.y);
            }
        }
        let stats = predictor.finish_sentence();

        let target = phrase.trim().to_lowercase();
        let typed = stats.final_phrase.clone();
        let outcome = PhraseOutcome {
            exact: typed == target,
            edit_distance: levenshtein_ignore_case_and_padding(&typed, &target),
            target,
            typed,
            stats: Some(stats),
            error: None,
        };
        if !outcome.exact {
            debug!("Mismatch: {:?} typed as {:?}", outcome.target, outcome.typed);
        }
        Ok(outcome)
    }

    /// Verifies every phrase in parallel, each in its own session over the
    /// shared model. Phrases that cannot be typed count as misses.
    pub fn verify_all(&self, phrases: &[String]) -> VerificationReport {
        let outcomes: Vec<PhraseOutcome> = phrases
            .par_iter()
            .map(|phrase| {
                self.verify_phrase(phrase).unwrap_or_else(|e| PhraseOutcome {
                    target: phrase.trim().to_lowercase(),
                    typed: String::new(),
                    exact: false,
                    edit_distance: phrase.trim().chars().count(),
                    stats: None,
                    error: Some(e.to_string()),
                })
            })
            .collect();

        let report = VerificationReport { outcomes };
        info!(
            "🔎 Verified {} phrases: {} exact ({:.1}%)",
            report.total(),
            report.correct(),
            report.accuracy() * 100.0
        );
        report
    }
}
