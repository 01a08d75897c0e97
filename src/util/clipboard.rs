//! Clipboard write for the copy-email button.
//!
//! The async clipboard API either succeeds or it doesn't; both outcomes
//! surface as an alert so the visitor always knows whether the email landed
//! on their clipboard.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Acknowledgment text for a clipboard write outcome. The failure message
/// asks for a manual copy instead of surfacing an error.
pub fn ack_message(ok: bool) -> &'static str {
    if ok {
        "Email copied to clipboard"
    } else {
        "Copy failed — please copy manually"
    }
}

/// Copy `email` to the system clipboard and alert the outcome.
pub fn copy_email(email: &str) {
    #[cfg(feature = "browser")]
    {
        let email = email.to_owned();
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&email);
            let ok = wasm_bindgen_futures::JsFuture::from(promise).await.is_ok();
            if !ok {
                log::warn!("clipboard write failed");
            }
            let _ = window.alert_with_message(ack_message(ok));
        });
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = email;
    }
}
