use super::clock::{Clock, SystemClock};
use super::session::SessionState;
use super::WordPredictor;
use crate::config::{LayoutParams, PredictorParams};
use crate::corpus::{learn_corpus, seed_corpus};
use crate::error::TwResult;
use crate::geometry::KeyLayout;
use crate::model::LanguageModel;
use std::sync::Arc;
use tracing::info;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct PredictorBuildParams {
    #[builder(default)]
    pub layout: LayoutParams,
    #[builder(default)]
    pub predictor: PredictorParams,
    /// Share an already trained model. When absent a fresh model is built.
    #[builder(default, setter(strip_option))]
    pub model: Option<Arc<LanguageModel>>,
    /// Train a fresh model on the built-in corpus.
    #[builder(default = true)]
    pub seed_corpus: bool,
    #[builder(default = Arc::new(SystemClock) as Arc<dyn Clock>)]
    pub clock: Arc<dyn Clock>,
}

impl PredictorBuildParams {
    pub fn build_predictor(self) -> TwResult<WordPredictor> {
        self.predictor.validate()?;
        let layout = KeyLayout::from_params(&self.layout)?;

        let model = match self.model {
            Some(model) => model,
            None => {
                let mut lm = LanguageModel::new();
                if self.seed_corpus {
                    let learned = learn_corpus(&mut lm, &seed_corpus()?);
                    info!(
                        "🌱 Seeded language model with {} sentences ({} contexts)",
                        learned,
                        lm.ngrams().len()
                    );
                }
                Arc::new(lm)
            }
        };

        Ok(WordPredictor {
            layout,
            model,
            params: self.predictor,
            clock: self.clock,
            session: SessionState::default(),
        })
    }
}
