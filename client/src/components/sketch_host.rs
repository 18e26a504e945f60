//! Bridge component between Leptos and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The host owns the `<canvas>` element. Once it is in the DOM the host builds
//! the engine around it, mounts it into the session, and starts loading the
//! model in the background. Pointer and keyboard events are forwarded as-is;
//! any guess the engine asks for is spawned through the session handle.

use std::rc::Rc;

use canvas::config::SessionConfig;
use canvas::engine::Engine;
use canvas::render::CanvasSurface;
use leptos::ev;
use leptos::prelude::*;

use crate::model::JsClassifier;
use crate::state::session::SessionHandle;
use crate::util::pointer::{now_ms, pointer_point, session_seed};

#[component]
pub fn SketchHost(config: SessionConfig) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    {
        let config = config.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if session.is_mounted() {
                return;
            }

            let surface = match CanvasSurface::new(canvas, config.line_width) {
                Ok(surface) => surface,
                Err(err) => {
                    log::error!("sketch: canvas unavailable: {err}");
                    return;
                }
            };
            let engine = match Engine::new(surface, &config, session_seed()) {
                Ok(engine) => engine,
                Err(err) => {
                    log::error!("sketch: engine setup failed: {err}");
                    return;
                }
            };
            session.mount(engine);

            let model = config.model.clone();
            leptos::task::spawn_local(async move {
                match JsClassifier::load(&model).await {
                    Ok(classifier) => session.install_classifier(Rc::new(classifier)),
                    Err(err) => {
                        log::error!("sketch: {err}");
                        session.classifier_failed(err.to_string());
                    }
                }
            });
        });
    }

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let key = ev.key();
        if session.with_engine(|engine| engine.on_key_down(&key)) == Some(true) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let point = pointer_point(&ev);
        session.with_engine(|engine| engine.on_pointer_down(point));
    };

    let on_pointer_move = move |ev: ev::PointerEvent| {
        let point = pointer_point(&ev);
        let now = now_ms();
        if let Some(Some(pending)) = session.with_engine(|engine| engine.on_pointer_move(point, now)) {
            session.spawn_guess(pending);
        }
    };

    let on_pointer_up = move |_ev: ev::PointerEvent| {
        session.with_engine(Engine::on_pointer_up);
    };

    let on_pointer_leave = move |_ev: ev::PointerEvent| {
        session.with_engine(Engine::on_pointer_leave);
    };

    view! {
        <canvas
            class="sketch-canvas"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
