use super::*;

#[test]
fn dummy_session_carries_reserved_id() {
    let s = Session::dummy("root", "localhost");
    assert_eq!(s.session_id, crate::time_fmt::DUMMY_SESSION_ID);
    assert_eq!(s.username, "root");
}

#[test]
fn new_session_has_no_capabilities_by_default() {
    let s = Session::new("S1", "alice", "client.example.com");
    assert!(s.capabilities.is_empty());
}
