pub mod builder;
pub mod clock;
pub mod hypotheses;
pub mod session;
pub mod stats;
pub mod topn;
pub mod weighted;

pub use self::builder::PredictorBuildParams;
pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::hypotheses::HypothesisSet;
pub use self::session::SessionState;
pub use self::stats::TextStats;
pub use self::topn::TopN;
pub use self::weighted::{Weighted, WeightedString};

use crate::alphabet::ALPHABET;
use crate::config::{LayoutParams, PredictorParams};
use crate::error::TwResult;
use crate::geometry::{KeyLayout, Point};
use crate::model::LanguageModel;
use crate::util::multiply;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::Display;
use tracing::{debug, warn};

/// What the caller shows after each transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Committed words plus the inline completion.
    pub full_display_text: String,
    pub best_completion: String,
    /// Ranked alternatives for the suggestion bar.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PredictorState {
    Idle,
    Typing,
}

/// Beam-search word predictor for one typing session.
///
/// Every tap expands each live hypothesis by every plausible next character,
/// weighting by tap likelihood times language model probability, and keeps
/// only the heaviest few. Backspace inside a word rebuilds the beam by
/// replaying the remaining taps, so it is an exact inverse of the last tap.
/// Backspace across a word boundary replays the popped word at its key
/// centers instead, which need not reproduce the beam the user saw.
///
/// Transitions run to completion and assume a single caller; wrap the
/// predictor in [`crate::api::TypingService`] to share it.
pub struct WordPredictor {
    pub(crate) layout: KeyLayout,
    pub(crate) model: Arc<LanguageModel>,
    pub(crate) params: PredictorParams,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) session: SessionState,
}

impl WordPredictor {
    pub fn state(&self) -> PredictorState {
        if self.session.taps.is_empty() {
            PredictorState::Idle
        } else {
            PredictorState::Typing
        }
    }

    /// Scores a tap against every live hypothesis. If scoring fails the
    /// session is left as it was and the previous result is returned.
    pub fn tap(&mut self, x: f64, y: f64) -> PredictionResult {
        match self.expand(Point::new(x, y)) {
            Ok(result) => {
                self.touch_clock();
                result
            }
            Err(e) => {
                warn!("⚠️  Tap ({:.1}, {:.1}) skipped: {}", x, y, e);
                self.session.last_result.clone()
            }
        }
    }

    fn expand(&mut self, tap: Point) -> TwResult<PredictionResult> {
        let seed = HypothesisSet::seed();
        let live = if self.session.hypotheses.is_empty() {
            &seed
        } else {
            &self.session.hypotheses
        };

        let likelihoods = self.layout.likelihoods_for_tap(tap.x, tap.y);
        let mut top = TopN::new(self.params.beam_width);

        for h in live.iter() {
            let context = format!("{}{}", self.session.history, h.text());
            let lm = self.model.witten_bell(&context)?;
            let joint = multiply(&likelihoods, &lm)?;
            for &c in ALPHABET.iter() {
                let i = c as usize;
                if likelihoods[i] <= self.params.tap_noise_floor {
                    continue;
                }
                let p = joint[i];
                if p > self.params.candidate_floor {
                    top.add(WeightedString::new(
                        format!("{}{}", h.text(), c),
                        h.weight() * p * p,
                    ));
                }
            }
        }

        // Favour candidates that look like whole words, so the inline
        // completion is what space would commit.
        let mut candidates = top.into_values();
        for c in candidates.iter_mut() {
            let factor = self
                .model
                .probability_before_space(&format!(" {}", c.text()));
            c.scale_weight(factor);
        }
        self.session.taps.push(tap);
        self.session.hypotheses = HypothesisSet::from_candidates(candidates);

        let best = self
            .session
            .hypotheses
            .best()
            .map(|h| h.text().to_string())
            .unwrap_or_default();
        let suggestions: Vec<String> = self
            .session
            .hypotheses
            .iter()
            .take(self.params.suggestion_count)
            .map(|h| h.text().to_string())
            .collect();

        debug!(
            "Tap ({:.1}, {:.1}) #{}: {} hypotheses, best {:?}",
            tap.x,
            tap.y,
            self.session.taps.len(),
            self.session.hypotheses.len(),
            best
        );

        self.session.last_result = PredictionResult {
            full_display_text: format!("{}{}", self.session.display_prefix(), best),
            best_completion: best,
            suggestions,
        };
        Ok(self.session.last_result.clone())
    }

    /// Commits the inline completion, if there is one, and ends the word.
    pub fn space(&mut self) -> PredictionResult {
        let best = std::mem::take(&mut self.session.last_result.best_completion);
        if !best.is_empty() {
            self.session.committed.push(best);
        }
        self.session.recompute_history();
        self.session.clear_word();

        self.session.last_result = PredictionResult {
            full_display_text: self.session.display_prefix(),
            best_completion: String::new(),
            suggestions: Vec::new(),
        };
        self.session.last_result.clone()
    }

    /// Deletes the last tap, or reopens the last committed word.
    ///
    /// Reopening replays the word through its key centers. If that word holds
    /// a character with no key the session is left exactly as it was and the
    /// error is returned.
    pub fn backspace(&mut self) -> TwResult<PredictionResult> {
        let snapshot = self.session.clone();
        if let Err(e) = self.delete_last() {
            warn!("⚠️  Backspace failed, session restored: {}", e);
            self.session = snapshot;
            return Err(e);
        }
        Ok(self.session.last_result.clone())
    }

    fn delete_last(&mut self) -> TwResult<()> {
        if !self.session.taps.is_empty() {
            self.touch_clock();
            self.session.backspaces += 1;
            self.session.taps.pop();

            let remaining = std::mem::take(&mut self.session.taps);
            self.session.hypotheses = HypothesisSet::default();

            if remaining.is_empty() {
                self.session.last_result = PredictionResult {
                    full_display_text: self.session.display_prefix(),
                    ..Default::default()
                };
            } else {
                for tap in remaining {
                    self.expand(tap)?;
                }
            }
            debug!(
                "Backspace in word: {} taps replayed",
                self.session.taps.len()
            );
            return Ok(());
        }

        let Some(word) = self.session.committed.pop() else {
            debug!("Backspace with nothing to delete");
            return Ok(());
        };

        self.touch_clock();
        self.session.backspaces += 1;
        self.session.recompute_history();
        self.session.clear_word();
        self.replay_word(&word)?;
        debug!("Backspace reopened word {:?}", word);
        Ok(())
    }

    fn replay_word(&mut self, word: &str) -> TwResult<()> {
        let centers = word
            .chars()
            .map(|c| self.layout.key_center(c))
            .collect::<TwResult<Vec<Point>>>()?;
        for p in centers {
            self.expand(p)?;
        }
        Ok(())
    }

    /// Commits `text` as the current word, in place of the inline completion.
    pub fn suggestion_picked(&mut self, text: &str) -> PredictionResult {
        self.session.last_result.best_completion = text.to_string();
        self.session.suggestions_picked += 1;
        self.space()
    }

    /// Closes the sentence and starts a new one.
    pub fn finish_sentence(&mut self) -> TextStats {
        let mut final_text = self.session.history.trim().to_string();
        if !self.session.taps.is_empty() {
            final_text.push(' ');
            final_text.push_str(&self.session.last_result.best_completion);
        }

        let stats = TextStats::new(
            &final_text,
            self.session.elapsed_ms(),
            self.session.backspaces,
            self.session.suggestions_picked,
        );
        debug!("Sentence finished: {}", stats.to_tsv());

        self.session = SessionState::default();
        stats
    }

    /// Adds a sentence to the model. A model shared with other predictors is
    /// copied first, so they are unaffected.
    pub fn learn(&mut self, sentence: &str) {
        Arc::make_mut(&mut self.model).learn(sentence);
    }

    /// Rebuilds the key layout for a new surface. On bad geometry the old
    /// layout stays in place and `false` is returned.
    pub fn configure_layout(&mut self, params: &LayoutParams) -> bool {
        match KeyLayout::from_params(params) {
            Ok(layout) => {
                self.layout = layout;
                true
            }
            Err(e) => {
                warn!("⚠️  Layout not changed: {}", e);
                false
            }
        }
    }

    fn touch_clock(&mut self) {
        let now = self.clock.now_ms();
        self.session.touch(now);
    }

    pub fn hypotheses(&self) -> &HypothesisSet {
        &self.session.hypotheses
    }

    pub fn taps(&self) -> &[Point] {
        &self.session.taps
    }

    pub fn history(&self) -> &str {
        &self.session.history
    }

    pub fn committed_words(&self) -> &[String] {
        &self.session.committed
    }

    pub fn last_result(&self) -> &PredictionResult {
        &self.session.last_result
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn model(&self) -> &Arc<LanguageModel> {
        &self.model
    }

    pub fn params(&self) -> &PredictorParams {
        &self.params
    }
}
