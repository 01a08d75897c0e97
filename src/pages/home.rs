//! The single portfolio page, composing every section.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::projects::ProjectsSection;
use crate::components::scroll_buttons::ScrollButtons;
use crate::components::skills::SkillsSection;

/// Home page — header, the four anchor sections, footer, and the floating
/// scroll buttons. Owns the window scroll listener that drives the
/// affordance flags.
#[component]
pub fn HomePage() -> impl IntoView {
    // Recompute affordance visibility on every scroll event. The listener
    // is removed when the page is torn down.
    #[cfg(feature = "browser")]
    {
        use crate::state::ui::UiState;
        use crate::util::scroll::{BrowserViewport, ScrollFlags};

        let ui = expect_context::<RwSignal<UiState>>();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let flags = ScrollFlags::read(&BrowserViewport);
            ui.update(|s| {
                s.show_scroll_top = flags.show_top;
                s.show_scroll_bottom = flags.show_bottom;
            });
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Header/>
        <main id="main">
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
        </main>
        <Footer/>
        <ScrollButtons/>
    }
}
