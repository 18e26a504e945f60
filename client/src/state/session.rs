//! Shared handle to the running sketch session.
//!
//! DESIGN
//! ======
//! The engine is `!Send` (it owns DOM handles and an `Rc` to the model), so it
//! lives in a locally-stored `StoredValue`. Every mutation goes through
//! [`SessionHandle::with_engine`], which republishes the engine's snapshot
//! into a signal for the view to read. Nothing outside this module touches the
//! engine directly.

use std::rc::Rc;

use canvas::classifier::{Classifier, PendingGuess};
use canvas::engine::{Engine, SessionSnapshot};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionHandle {
    engine: StoredValue<Option<Engine>, LocalStorage>,
    pub snapshot: RwSignal<Option<SessionSnapshot>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { engine: StoredValue::new_local(None), snapshot: RwSignal::new(None) }
    }

    /// Whether an engine has been mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.engine.with_value(Option::is_some)
    }

    /// Install a freshly built engine and publish its first snapshot.
    pub fn mount(&self, engine: Engine) {
        self.engine.set_value(Some(engine));
        self.publish();
    }

    /// Run `f` against the engine, then republish the snapshot.
    ///
    /// Returns `None` while no engine is mounted.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        let out = self.engine.try_update_value(|slot| slot.as_mut().map(f)).flatten();
        self.publish();
        out
    }

    pub fn clear(&self) {
        self.with_engine(Engine::clear);
    }

    pub fn skip(&self) {
        self.with_engine(Engine::skip);
    }

    pub fn install_classifier(&self, classifier: Rc<dyn Classifier>) {
        self.with_engine(|engine| engine.install_classifier(classifier));
    }

    pub fn classifier_failed(&self, reason: String) {
        self.with_engine(|engine| engine.classifier_failed(reason));
    }

    /// Run a guess in the background and fold its outcome into the session.
    ///
    /// Outcomes are applied whenever they resolve; the engine drops any that
    /// have been overtaken by a newer one or by a clear.
    pub fn spawn_guess(&self, pending: PendingGuess) {
        let handle = *self;
        leptos::task::spawn_local(async move {
            let outcome = pending.run().await;
            handle.with_engine(|engine| engine.apply_guess(outcome));
        });
    }

    fn publish(&self) {
        let snapshot = self.engine.with_value(|slot| slot.as_ref().map(Engine::snapshot));
        if snapshot.is_some() && self.snapshot.get_untracked() != snapshot {
            self.snapshot.set(snapshot);
        }
    }
}
