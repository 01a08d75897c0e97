//! Floating scroll-to-top / scroll-to-bottom buttons.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll;

/// The two scroll affordances. Visibility follows the flags the scroll
/// listener keeps current; both may show at once.
#[component]
pub fn ScrollButtons() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().show_scroll_top>
            <button
                class="scroll-fab scroll-fab--up"
                aria-label="Scroll to top"
                on:click=move |_| scroll::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
        <Show when=move || ui.get().show_scroll_bottom>
            <button
                class="scroll-fab scroll-fab--down"
                aria-label="Scroll to bottom"
                on:click=move |_| scroll::scroll_to_bottom()
            >
                "↓"
            </button>
        </Show>
    }
}
