//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::session_controls::SessionControls;
use crate::components::sketch_host::SketchHost;
use crate::state::session::SessionHandle;
use crate::util::config::read_session_config;

/// Root application component.
///
/// Owns the session handle and provides it to the canvas host and controls.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = read_session_config();
    let session = SessionHandle::new();
    provide_context(session);

    let prompt = move || {
        session
            .snapshot
            .get()
            .map_or_else(|| "Loading...".to_owned(), |s| s.prompt_text())
    };
    let status = move || {
        session
            .snapshot
            .get()
            .map_or_else(|| "Start drawing...".to_owned(), |s| s.status_text())
    };

    view! {
        <Title text="sketch-guesser"/>
        <header class="header">
            <h1 class="header__title">"sketch-guesser"</h1>
        </header>
        <main class="main">
            <p class="prompt">{prompt}</p>
            <SketchHost config=config/>
            <p class="status">{status}</p>
            <SessionControls/>
        </main>
    }
}
