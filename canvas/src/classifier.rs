//! Classifier adapter: the model seam, its load state, and the top-1 result.
//!
//! The model itself lives outside this crate (in the browser it is a
//! transformers.js pipeline reached through the client's JS shim). The
//! engine only needs three things from it: whether it has finished loading,
//! a way to run it on a [`Frame`], and the single most likely label.

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::frame::Frame;

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("model failed to load: {0}")]
    Load(String),
    #[error("model call failed: {0}")]
    Model(String),
    #[error("could not decode model output: {0}")]
    Decode(String),
}

/// One `{label, score}` entry as returned by the model, most likely first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f32,
}

/// The model's current best guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

/// An image classifier that accepts single-channel frames.
///
/// Futures are `?Send` because browser promises are bound to the main thread.
#[async_trait(?Send)]
pub trait Classifier {
    /// Run the model on `frame`, returning at most `top_k` results ordered
    /// from most to least likely.
    async fn classify(&self, frame: &Frame, top_k: usize) -> Result<Vec<Classification>, ClassifyError>;
}

/// Keep the first (most likely) result, clamping its score into `[0, 1]`.
#[must_use]
pub fn top_prediction(results: Vec<Classification>) -> Option<Prediction> {
    let top = results.into_iter().next()?;
    Some(Prediction { label: top.label, confidence: top.score.clamp(0.0, 1.0) })
}

/// Load state of the session's model.
#[derive(Clone, Default)]
pub enum ClassifierState {
    /// Still downloading or initializing; guesses are skipped.
    #[default]
    Loading,
    Ready(Rc<dyn Classifier>),
    /// Loading failed for good; guesses are skipped.
    Failed(String),
}

impl ClassifierState {
    /// The loaded model, if any.
    #[must_use]
    pub fn ready(&self) -> Option<Rc<dyn Classifier>> {
        match self {
            Self::Ready(classifier) => Some(Rc::clone(classifier)),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

impl fmt::Debug for ClassifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Ready(_) => f.write_str("Ready"),
            Self::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
        }
    }
}

/// A classification request issued by the engine but not yet run.
///
/// The host spawns [`PendingGuess::run`] and hands the outcome back to
/// [`crate::engine::Engine::apply_guess`].
pub struct PendingGuess {
    pub id: u64,
    pub frame: Frame,
    classifier: Rc<dyn Classifier>,
    top_k: usize,
}

impl PendingGuess {
    #[must_use]
    pub fn new(id: u64, frame: Frame, classifier: Rc<dyn Classifier>, top_k: usize) -> Self {
        Self { id, frame, classifier, top_k }
    }

    /// Run the model and tag the result with this request's id.
    pub async fn run(self) -> GuessOutcome {
        let result = self.classifier.classify(&self.frame, self.top_k).await;
        GuessOutcome { id: self.id, result }
    }
}

impl fmt::Debug for PendingGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingGuess")
            .field("id", &self.id)
            .field("frame", &(self.frame.width(), self.frame.height()))
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

/// The resolved result of a [`PendingGuess`].
#[derive(Debug)]
pub struct GuessOutcome {
    pub id: u64,
    pub result: Result<Vec<Classification>, ClassifyError>,
}
