#![allow(dead_code)]

use std::sync::{Arc, OnceLock};
use tapwise::corpus::{learn_corpus, seed_corpus};
use tapwise::model::LanguageModel;
use tapwise::predictor::{
    HypothesisSet, ManualClock, PredictionResult, PredictorBuildParams, Weighted, WordPredictor,
};

/// Built-in corpus plus a few extra "hello"s, learned once per test binary.
pub fn shared_model() -> Arc<LanguageModel> {
    static MODEL: OnceLock<Arc<LanguageModel>> = OnceLock::new();
    MODEL
        .get_or_init(|| {
            let mut lm = LanguageModel::new();
            learn_corpus(&mut lm, &seed_corpus().unwrap());
            for _ in 0..3 {
                lm.learn("hello");
            }
            Arc::new(lm)
        })
        .clone()
}

pub struct Fixture {
    pub predictor: WordPredictor,
    pub clock: ManualClock,
}

/// Default 320x320 layout over the shared model, on a manual clock at t=1000.
pub fn fixture() -> Fixture {
    let clock = ManualClock::new(1000);
    let predictor = PredictorBuildParams::builder()
        .model(shared_model())
        .clock(Arc::new(clock.clone()))
        .build()
        .build_predictor()
        .unwrap();
    Fixture { predictor, clock }
}

pub fn predictor() -> WordPredictor {
    fixture().predictor
}

/// Taps every character of `word` dead center.
pub fn type_word(p: &mut WordPredictor, word: &str) -> PredictionResult {
    let mut last = p.last_result().clone();
    for c in word.chars() {
        let (x, y) = center(p, c);
        last = p.tap(x, y);
    }
    last
}

pub fn center(p: &WordPredictor, c: char) -> (f64, f64) {
    let pt = p.layout().key_center(c).unwrap();
    (pt.x, pt.y)
}

/// `(text, weight)` pairs in rank order, for exact comparisons.
pub fn snapshot(h: &HypothesisSet) -> Vec<(String, f64)> {
    h.iter().map(|w| (w.text().to_string(), w.weight())).collect()
}
