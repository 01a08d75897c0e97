use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn contact_draft_default_is_empty() {
    let draft = ContactDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.subject.is_empty());
    assert!(draft.message.is_empty());
}

#[test]
fn contact_status_default_is_editing() {
    assert_eq!(ContactStatus::default(), ContactStatus::Editing);
}

// =============================================================
// mailto_href
// =============================================================

#[test]
fn blank_subject_falls_back_to_default() {
    let draft = ContactDraft {
        name: "Ada".to_owned(),
        subject: String::new(),
        message: "Hi".to_owned(),
    };
    let href = mailto_href("test@example.com", &draft);
    assert_eq!(
        href,
        "mailto:test@example.com?subject=Contact%20from%20portfolio&body=Name%3A%20Ada%0A%0AHi"
    );
}

#[test]
fn explicit_subject_is_used() {
    let draft = ContactDraft {
        name: "Ada".to_owned(),
        subject: "Job offer".to_owned(),
        message: "Hi".to_owned(),
    };
    let href = mailto_href("test@example.com", &draft);
    assert!(href.contains("subject=Job%20offer"));
}

#[test]
fn body_interpolates_name_and_message() {
    let draft = ContactDraft {
        name: "Grace Hopper".to_owned(),
        subject: "Compilers".to_owned(),
        message: "Let's talk about COBOL.".to_owned(),
    };
    let href = mailto_href("test@example.com", &draft);
    assert!(href.contains("body=Name%3A%20Grace%20Hopper%0A%0ALet's%20talk%20about%20COBOL."));
}

#[test]
fn recipient_is_the_profile_email() {
    let email = crate::content::profile().email;
    let href = mailto_href(&email, &ContactDraft::default());
    assert!(href.starts_with(&format!("mailto:{email}?")));
}

#[test]
fn encoding_matches_encode_uri_component() {
    // Unreserved set passes through untouched.
    let draft = ContactDraft {
        name: String::new(),
        subject: "AZaz09-_.!~*'()".to_owned(),
        message: String::new(),
    };
    let href = mailto_href("a@b.c", &draft);
    assert!(href.contains("subject=AZaz09-_.!~*'()"));

    // Multi-byte UTF-8 is encoded per byte.
    let draft = ContactDraft {
        name: String::new(),
        subject: "café".to_owned(),
        message: String::new(),
    };
    let href = mailto_href("a@b.c", &draft);
    assert!(href.contains("subject=caf%C3%A9"));
}
