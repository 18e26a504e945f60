#![allow(clippy::float_cmp)]

use std::cell::Cell;

use futures::executor::block_on;

use super::*;

struct Echo {
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl Classifier for Echo {
    async fn classify(&self, frame: &Frame, top_k: usize) -> Result<Vec<Classification>, ClassifyError> {
        self.calls.set(self.calls.get() + 1);
        let label = format!("{}x{}", frame.width(), frame.height());
        Ok(vec![Classification { label, score: 0.5 }; top_k])
    }
}

fn classification(label: &str, score: f32) -> Classification {
    Classification { label: label.to_owned(), score }
}

// =============================================================
// top_prediction
// =============================================================

#[test]
fn top_prediction_takes_first_entry() {
    let prediction = top_prediction(vec![classification("cat", 0.9), classification("dog", 0.05)]).unwrap();
    assert_eq!(prediction.label, "cat");
    assert_eq!(prediction.confidence, 0.9);
}

#[test]
fn top_prediction_of_empty_is_none() {
    assert!(top_prediction(Vec::new()).is_none());
}

#[test]
fn top_prediction_clamps_score() {
    assert_eq!(top_prediction(vec![classification("sun", 1.2)]).unwrap().confidence, 1.0);
    assert_eq!(top_prediction(vec![classification("sun", -0.1)]).unwrap().confidence, 0.0);
}

#[test]
fn classification_deserializes_from_model_json() {
    let parsed: Vec<Classification> = serde_json::from_str(r#"[{"label":"apple","score":0.75}]"#).unwrap();
    assert_eq!(parsed, vec![classification("apple", 0.75)]);
}

// =============================================================
// ClassifierState
// =============================================================

#[test]
fn state_defaults_to_loading() {
    let state = ClassifierState::default();
    assert!(state.ready().is_none());
    assert_eq!(format!("{state:?}"), "Loading");
}

#[test]
fn ready_state_hands_out_model() {
    let state = ClassifierState::Ready(Rc::new(Echo { calls: Cell::new(0) }));
    assert!(state.ready().is_some());
}

#[test]
fn failed_state_is_not_ready() {
    let state = ClassifierState::Failed("network".into());
    assert!(state.ready().is_none());
    assert!(format!("{state:?}").contains("network"));
}

// =============================================================
// PendingGuess
// =============================================================

#[test]
fn pending_guess_runs_model_and_keeps_id() {
    let echo = Rc::new(Echo { calls: Cell::new(0) });
    let frame = Frame::new(2, 3, vec![0; 6]).unwrap();
    let pending = PendingGuess::new(7, frame, echo.clone(), 1);

    let outcome = block_on(pending.run());

    assert_eq!(outcome.id, 7);
    assert_eq!(outcome.result.unwrap(), vec![classification("2x3", 0.5)]);
    assert_eq!(echo.calls.get(), 1);
}

#[test]
fn pending_guess_debug_omits_model() {
    let pending = PendingGuess::new(1, Frame::new(1, 1, vec![0]).unwrap(), Rc::new(Echo { calls: Cell::new(0) }), 1);
    let text = format!("{pending:?}");
    assert!(text.contains("PendingGuess"));
    assert!(text.contains("id: 1"));
}
