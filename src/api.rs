use crate::config::LayoutParams;
use crate::error::{TapwiseError, TwResult};
use crate::predictor::{
    PredictionResult, PredictorBuildParams, SessionState, TextStats, WordPredictor,
};
use std::sync::Mutex;
use tracing::info;

/// Owns one typing session for a host that calls in from several threads.
/// Every call takes the lock for the whole transition.
pub struct TypingService {
    predictor: Mutex<Option<WordPredictor>>,
}

impl Default for TypingService {
    fn default() -> Self {
        Self {
            predictor: Mutex::new(None),
        }
    }
}

impl TypingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a predictor and replaces any running session.
    pub fn start(&self, params: PredictorBuildParams) -> TwResult<()> {
        let predictor = params.build_predictor()?;
        let mut guard = self.lock()?;
        *guard = Some(predictor);
        info!("⌨️  Typing session started");
        Ok(())
    }

    /// Tears the session down. Returns whether one was running.
    pub fn stop(&self) -> TwResult<bool> {
        let mut guard = self.lock()?;
        Ok(guard.take().is_some())
    }

    pub fn is_running(&self) -> TwResult<bool> {
        Ok(self.lock()?.is_some())
    }

    pub fn tap(&self, x: f64, y: f64) -> TwResult<PredictionResult> {
        self.with_predictor(|p| Ok(p.tap(x, y)))
    }

    pub fn space(&self) -> TwResult<PredictionResult> {
        self.with_predictor(|p| Ok(p.space()))
    }

    pub fn backspace(&self) -> TwResult<PredictionResult> {
        self.with_predictor(|p| p.backspace())
    }

    pub fn suggestion_picked(&self, text: &str) -> TwResult<PredictionResult> {
        self.with_predictor(|p| Ok(p.suggestion_picked(text)))
    }

    pub fn finish_sentence(&self) -> TwResult<TextStats> {
        self.with_predictor(|p| Ok(p.finish_sentence()))
    }

    pub fn learn(&self, sentence: &str) -> TwResult<()> {
        self.with_predictor(|p| {
            p.learn(sentence);
            Ok(())
        })
    }

    pub fn configure_layout(&self, params: &LayoutParams) -> TwResult<bool> {
        self.with_predictor(|p| Ok(p.configure_layout(params)))
    }

    /// Copy of the current session state.
    pub fn session(&self) -> TwResult<SessionState> {
        self.with_predictor(|p| Ok(p.session().clone()))
    }

    fn lock(&self) -> TwResult<std::sync::MutexGuard<'_, Option<WordPredictor>>> {
        self.predictor
            .lock()
            .map_err(|e| TapwiseError::InvalidState(format!("Session lock poisoned: {}", e)))
    }

    fn with_predictor<R>(
        &self,
        f: impl FnOnce(&mut WordPredictor) -> TwResult<R>,
    ) -> TwResult<R> {
        let mut guard = self.lock()?;
        let predictor = guard
            .as_mut()
            .ok_or_else(|| TapwiseError::InvalidState("No typing session. Start one first.".into()))?;
        f(predictor)
    }
}
