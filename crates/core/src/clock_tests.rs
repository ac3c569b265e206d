use super::*;

#[test]
fn fake_clock_returns_pinned_instant() {
    let clock = FakeClock::at_unix_secs(1_700_000_000);
    assert_eq!(clock.now(), clock.0);
}

#[test]
fn system_clock_moves_forward() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
