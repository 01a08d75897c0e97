use super::*;

#[test]
fn success_acknowledges_the_copy() {
    assert_eq!(ack_message(true), "Email copied to clipboard");
}

#[test]
fn failure_asks_for_a_manual_copy() {
    assert_eq!(ack_message(false), "Copy failed — please copy manually");
}
