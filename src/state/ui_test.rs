use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_query_empty() {
    let state = UiState::default();
    assert!(state.query.is_empty());
}

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_open);
}

#[test]
fn ui_state_default_scroll_affordances_hidden() {
    let state = UiState::default();
    assert!(!state.show_scroll_top);
    assert!(!state.show_scroll_bottom);
}
