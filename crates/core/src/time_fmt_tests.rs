use super::*;
use std::time::Duration;

#[test]
fn formats_unix_epoch() {
    assert_eq!(format_rfc3339(UNIX_EPOCH), "1970-01-01T00:00:00Z");
}

#[test]
fn formats_known_instant() {
    // 2021-01-01T00:00:00Z = 1609459200
    let t = UNIX_EPOCH + Duration::from_secs(1_609_459_200);
    assert_eq!(format_rfc3339(t), "2021-01-01T00:00:00Z");
}

#[test]
fn formats_with_time_of_day() {
    // 2026-07-31T02:15:30Z
    let t = UNIX_EPOCH + Duration::from_secs(1_785_464_130);
    let formatted = format_rfc3339(t);
    assert!(formatted.starts_with("2026-07-31T"), "{formatted}");
    assert!(formatted.ends_with('Z'));
}

#[test]
fn dummy_session_id_is_not_a_plausible_sid() {
    // lock()/unlock() must never assign this id to a real holder.
    assert!(DUMMY_SESSION_ID.contains("internal"));
}
