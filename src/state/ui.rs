#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Ephemeral presentation state: search query, mobile menu, dark mode, and
/// scroll-affordance visibility.
///
/// Held in a single `RwSignal<UiState>` provided via context; every mutation
/// is a synchronous `update` inside an event handler, so the next render
/// always reflects the latest input. None of these fields persist beyond the
/// session except `dark_mode`, whose persistence lives in
/// [`crate::util::dark_mode`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub query: String,
    pub mobile_open: bool,
    pub show_scroll_top: bool,
    pub show_scroll_bottom: bool,
}
