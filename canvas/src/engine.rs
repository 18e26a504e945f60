use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::classifier::{Classifier, ClassifierState, GuessOutcome, PendingGuess, Prediction, top_prediction};
use crate::config::{ConfigError, SessionConfig};
use crate::consts::TOP_K;
use crate::frame::{self, Frame, FrameConfig};
use crate::geometry::{BoundingBox, Point};
use crate::input::{InputTracker, Segment, Shortcut};
use crate::render::CanvasSurface;
use crate::surface::Surface;
use crate::throttle::Throttle;
use crate::words::WordList;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Surface work requested by input handlers for the engine to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    BeginStroke(Point),
    Stroke(Segment),
    /// The throttle admitted a classification attempt.
    RequestGuess,
}

/// Load state of the model, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed,
}

/// Read-only view of the session for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub target: String,
    pub prediction: Option<Prediction>,
    pub guessed_correctly: bool,
    pub model: ModelStatus,
}

impl SessionSnapshot {
    /// The prompt line, e.g. `Draw "cat" ✅`.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        if self.guessed_correctly {
            format!("Draw \"{}\" ✅", self.target)
        } else {
            format!("Draw \"{}\"", self.target)
        }
    }

    /// The guess line, e.g. `cat (93.10%)`. A zero-confidence guess reads the
    /// same as no guess.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.prediction {
            Some(p) if p.confidence > 0.0 => format!("{} ({:.2}%)", p.label, f64::from(p.confidence) * 100.0),
            _ => "Start drawing...".to_owned(),
        }
    }
}

/// Core session state: the logic that does not depend on the drawing surface.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub input: InputTracker,
    pub throttle: Throttle,
    frame_config: FrameConfig,
    words: WordList,
    target: String,
    prediction: Option<Prediction>,
    guessed_correctly: bool,
    classifier: ClassifierState,
    /// Id of the most recently issued guess.
    issued: u64,
    /// Outcomes with an id at or below this are stale.
    last_applied: u64,
}

impl EngineCore {
    /// Build a session from `config` with an empty target.
    ///
    /// # Errors
    ///
    /// Returns the [`SessionConfig::validate`] errors.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            input: InputTracker::new(config.brush_radius),
            throttle: Throttle::new(config.throttle_ms),
            frame_config: config.frame_config(),
            words: config.word_list()?,
            target: String::new(),
            prediction: None,
            guessed_correctly: false,
            classifier: ClassifierState::Loading,
            issued: 0,
            last_applied: 0,
        })
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        if self.input.pointer_down(point) {
            vec![Action::BeginStroke(point)]
        } else {
            Vec::new()
        }
    }

    /// Track a move and decide whether a guess is due at `now_ms`.
    pub fn on_pointer_move(&mut self, point: Point, now_ms: f64) -> Vec<Action> {
        let Some(segment) = self.input.pointer_move(point) else {
            return Vec::new();
        };
        let mut actions = vec![Action::Stroke(segment)];
        if self.throttle.try_acquire(now_ms) {
            actions.push(Action::RequestGuess);
        }
        actions
    }

    pub fn on_pointer_up(&mut self) {
        self.input.pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.input.pointer_leave();
    }

    // --- Classification ---

    /// Install the loaded model; guesses start flowing on the next move.
    pub fn install_classifier(&mut self, classifier: Rc<dyn Classifier>) {
        log::info!("engine: classifier ready");
        self.classifier = ClassifierState::Ready(classifier);
    }

    /// Record that the model could not be loaded.
    pub fn classifier_failed(&mut self, reason: String) {
        log::error!("engine: classifier failed to load: {reason}");
        self.classifier = ClassifierState::Failed(reason);
    }

    /// Wrap `frame` in a request for the loaded model, or `None` while the
    /// model is unavailable.
    pub fn begin_guess(&mut self, frame: Frame) -> Option<PendingGuess> {
        let Some(classifier) = self.classifier.ready() else {
            log::debug!("engine: classifier not ready, skipping guess");
            return None;
        };
        self.issued += 1;
        Some(PendingGuess::new(self.issued, frame, classifier, TOP_K))
    }

    /// Fold a resolved guess into the session.
    ///
    /// Returns `true` when the outcome was current. Outcomes older than one
    /// already applied, or issued before the last clear, are discarded. Errors
    /// and empty results leave the previous prediction in place.
    pub fn apply_guess(&mut self, outcome: GuessOutcome) -> bool {
        if outcome.id <= self.last_applied {
            log::debug!("engine: discarding stale guess {} (last applied {})", outcome.id, self.last_applied);
            return false;
        }
        self.last_applied = outcome.id;

        let results = match outcome.result {
            Ok(results) => results,
            Err(err) => {
                log::warn!("engine: guess {} failed: {err}", outcome.id);
                return true;
            }
        };
        let Some(prediction) = top_prediction(results) else {
            log::debug!("engine: guess {} returned no result", outcome.id);
            return true;
        };

        if prediction.label == self.target {
            self.guessed_correctly = true;
        }
        self.prediction = Some(prediction);
        true
    }

    // --- Session controls ---

    /// Forget the drawing, the guess, and any guesses still in flight.
    pub fn reset(&mut self) {
        self.input.reset();
        self.prediction = None;
        self.guessed_correctly = false;
        self.last_applied = self.issued;
    }

    pub fn set_target(&mut self, word: impl Into<String>) {
        self.target = word.into();
    }

    // --- Queries ---

    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.input.bounding_box()
    }

    #[must_use]
    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn guessed_correctly(&self) -> bool {
        self.guessed_correctly
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn frame_config(&self) -> &FrameConfig {
        &self.frame_config
    }

    #[must_use]
    pub fn model_status(&self) -> ModelStatus {
        match self.classifier {
            ClassifierState::Loading => ModelStatus::Loading,
            ClassifierState::Ready(_) => ModelStatus::Ready,
            ClassifierState::Failed(_) => ModelStatus::Failed,
        }
    }

    /// Number of guesses issued so far.
    #[must_use]
    pub fn issued_guesses(&self) -> u64 {
        self.issued
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            target: self.target.clone(),
            prediction: self.prediction.clone(),
            guessed_correctly: self.guessed_correctly,
            model: self.model_status(),
        }
    }
}

/// The full sketch engine. Wraps `EngineCore` and owns the drawing surface.
pub struct Engine<S: Surface = CanvasSurface> {
    surface: S,
    rng: SmallRng,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Create an engine drawing on `surface`, clear it, and pick the first
    /// target word. `seed` drives target word selection.
    ///
    /// # Errors
    ///
    /// Returns the [`SessionConfig::validate`] errors.
    pub fn new(surface: S, config: &SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        let core = EngineCore::new(config)?;
        let mut engine = Self { surface, rng: SmallRng::seed_from_u64(seed), core };
        engine.skip();
        Ok(engine)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, point: Point) {
        let actions = self.core.on_pointer_down(point);
        self.process_actions(actions);
    }

    /// Paint the move and, when the throttle admits it and a model is loaded,
    /// return a guess for the host to run.
    pub fn on_pointer_move(&mut self, point: Point, now_ms: f64) -> Option<PendingGuess> {
        let actions = self.core.on_pointer_move(point, now_ms);
        self.process_actions(actions)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    /// Handle a keyboard shortcut. Returns `true` when the key was consumed.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        match Shortcut::from_key(key) {
            Some(Shortcut::Clear) => {
                self.clear();
                true
            }
            Some(Shortcut::Skip) => {
                self.skip();
                true
            }
            Some(Shortcut::Exit) | None => false,
        }
    }

    // --- Session controls ---

    /// Wipe the surface and reset the drawing, the guess, and the
    /// correctness flag.
    pub fn clear(&mut self) {
        let background = self.core.frame_config().policy.background();
        if let Err(err) = self.surface.clear(background) {
            log::debug!("engine: surface clear skipped: {err}");
        }
        self.core.reset();
    }

    /// Clear, then draw a new target word. The same word may come up again.
    pub fn skip(&mut self) {
        self.clear();
        let word = self.core.words().pick(&mut self.rng).to_owned();
        log::info!("engine: new target \"{word}\"");
        self.core.set_target(word);
    }

    // --- Classification ---

    pub fn install_classifier(&mut self, classifier: Rc<dyn Classifier>) {
        self.core.install_classifier(classifier);
    }

    pub fn classifier_failed(&mut self, reason: String) {
        self.core.classifier_failed(reason);
    }

    pub fn apply_guess(&mut self, outcome: GuessOutcome) -> bool {
        self.core.apply_guess(outcome)
    }

    /// Extract the current frame, or `None` when there is no ink yet or the
    /// surface cannot be read.
    #[must_use]
    pub fn current_frame(&self) -> Option<Frame> {
        let bbox = self.core.bounding_box()?;
        match frame::extract(&self.surface, &bbox, self.core.frame_config()) {
            Ok(frame) => Some(frame),
            Err(err) => {
                log::debug!("engine: frame extraction skipped: {err}");
                None
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.core.snapshot()
    }

    fn process_actions(&mut self, actions: Vec<Action>) -> Option<PendingGuess> {
        let mut pending = None;
        for action in actions {
            match action {
                Action::BeginStroke(point) => {
                    if let Err(err) = self.surface.begin_stroke(point) {
                        log::debug!("engine: begin stroke skipped: {err}");
                    }
                }
                Action::Stroke(segment) => {
                    if let Err(err) = self.surface.stroke_to(segment.to) {
                        log::debug!("engine: stroke skipped: {err}");
                    }
                }
                Action::RequestGuess => {
                    if self.core.model_status() != ModelStatus::Ready {
                        log::debug!("engine: classifier not ready, skipping guess");
                        continue;
                    }
                    pending = self.current_frame().and_then(|frame| self.core.begin_guess(frame));
                }
            }
        }
        pending
    }
}
