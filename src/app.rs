//! Root application component and shared state context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared presentation-state signal and resolves the dark-mode
/// preference once at startup, before any toggle happens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Startup theme: stored preference if present, else the OS hint. The
    // document class and the state flag change together.
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark_mode::apply(initial);
        ui.update(|s| s.dark_mode = initial);
    });

    view! {
        <Title text="Bhargav Sunil | Portfolio"/>
        <HomePage/>
    }
}
