//! Contact form state and the mailto deep link it submits to.
//!
//! Submission never touches the network: the draft is percent-encoded into a
//! `mailto:` URI and the window navigates to it, handing off to whatever
//! mail client the OS has registered.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Subject used when the subject field is left blank.
pub const DEFAULT_SUBJECT: &str = "Contact from portfolio";

/// The three editable contact form fields. Never persisted, never sent over
/// a network; only encoded into the mailto link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub subject: String,
    pub message: String,
}

/// Form lifecycle: editing until submit, sent afterwards. Clearing the form
/// returns to editing. Field values survive a send so the visitor can resend
/// or adjust; only an explicit clear wipes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Sent,
}

/// Build the mailto deep link for a draft.
///
/// The body template is `Name: <name>\n\n<message>`; a blank subject falls
/// back to [`DEFAULT_SUBJECT`]. Encoding matches `encodeURIComponent`.
pub fn mailto_href(email: &str, draft: &ContactDraft) -> String {
    let subject = if draft.subject.is_empty() {
        DEFAULT_SUBJECT
    } else {
        draft.subject.as_str()
    };
    let body = format!("Name: {}\n\n{}", draft.name, draft.message);
    format!(
        "mailto:{email}?subject={}&body={}",
        encode_component(subject),
        encode_component(&body)
    )
}

/// Percent-encode a URI component with `encodeURIComponent` semantics:
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything
/// else is encoded byte-wise as `%XX`.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
