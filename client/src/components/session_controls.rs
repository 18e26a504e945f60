//! Clear / skip / exit buttons under the canvas.

use canvas::input::Shortcut;
use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn SessionControls() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <div class="controls">
            <button class="controls__button" on:click=move |_| session.clear()>
                "Clear " <kbd>{Shortcut::Clear.hint()}</kbd>
            </button>
            <button class="controls__button" on:click=move |_| session.skip()>
                "Skip " <kbd>{Shortcut::Skip.hint()}</kbd>
            </button>
            // Placeholder until there is somewhere to exit to.
            <button class="controls__button" disabled=true>
                "Exit " <kbd>{Shortcut::Exit.hint()}</kbd>
            </button>
        </div>
    }
}
