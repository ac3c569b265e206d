use super::*;
use dsf_core::{FakeClock, Session, Source, Target};
use dsf_nacm::{DefaultOperation, ErrorOption, PermissiveNacm};
use serial_test::serial;

fn open(dir: &tempfile::TempDir, name: &str, secs: u64) -> Datastore {
    let path = dir.path().join(name);
    Datastore::open_with(&path, Box::new(FakeClock::at_unix_secs(secs)), Box::new(PermissiveNacm)).unwrap()
}

fn session(id: &str) -> Session {
    Session::new(id, "tester", "localhost")
}

#[test]
#[serial]
fn fresh_bootstrap_yields_empty_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "a.xml", 0);
    let s1 = session("S1");
    let config = ds.get_config(&s1, Target::Candidate).unwrap();
    assert_eq!(config.trim(), "");
    let (sid, _) = ds.lockinfo(Target::Running).unwrap();
    assert!(sid.is_none());
}

#[test]
#[serial]
fn lock_and_observe() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "b.xml", 100);
    let s1 = session("S1");
    let s2 = session("S2");

    ds.lock(&s1, Target::Candidate).unwrap();
    let (sid, time) = ds.lockinfo(Target::Candidate).unwrap();
    assert_eq!(sid.as_deref(), Some("S1"));
    assert!(time.is_some());

    let err = ds.lock(&s2, Target::Candidate).unwrap_err();
    match err {
        DatastoreError::LockDenied { holder, .. } => assert_eq!(holder.as_deref(), Some("S1")),
        other => panic!("expected LockDenied, got {other:?}"),
    }
}

#[test]
#[serial]
fn modified_blocks_lock() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "c.xml", 200);
    let s1 = session("S1");

    ds.edit_config(
        &s1,
        Target::Candidate,
        "<foo/>",
        DefaultOperation::Merge,
        ErrorOption::StopOnError,
    )
    .unwrap();

    let err = ds.lock(&s1, Target::Candidate).unwrap_err();
    match err {
        DatastoreError::LockDenied { holder, message } => {
            assert!(holder.is_none());
            assert!(message.contains("not locked but already modified"));
        }
        other => panic!("expected LockDenied, got {other:?}"),
    }

    let err = ds.unlock(&s1, Target::Candidate).unwrap_err();
    assert!(matches!(err, DatastoreError::OperationFailed(_)));

    ds.copy_config(&s1, Target::Candidate, Source::Running).unwrap();
    ds.lock(&s1, Target::Candidate).unwrap();
}

#[test]
#[serial]
fn commit_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "d.xml", 300);
    let s1 = session("S1");

    ds.lock(&s1, Target::Running).unwrap();
    ds.lock(&s1, Target::Candidate).unwrap();
    ds.edit_config(
        &s1,
        Target::Candidate,
        "<x>1</x>",
        DefaultOperation::Merge,
        ErrorOption::StopOnError,
    )
    .unwrap();
    ds.copy_config(&s1, Target::Running, Source::Candidate).unwrap();
    ds.unlock(&s1, Target::Candidate).unwrap();
    ds.unlock(&s1, Target::Running).unwrap();

    let running = ds.get_config(&s1, Target::Running).unwrap();
    assert!(running.contains("<x>1</x>"));
    let candidate = ds.get_config(&s1, Target::Candidate).unwrap();
    assert_eq!(running.replace(char::is_whitespace, ""), candidate.replace(char::is_whitespace, ""));
}

#[test]
#[serial]
fn delete_running_is_always_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "e.xml", 400);
    let s1 = session("S1");
    let err = ds.delete_config(&s1, Target::Running).unwrap_err();
    assert!(matches!(err, DatastoreError::OperationFailed(_)));
    let running = ds.get_config(&s1, Target::Running).unwrap();
    assert_eq!(running.trim(), "");
}

#[test]
#[serial]
fn copy_empty_to_empty_is_not_applicable() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "f.xml", 500);
    let s1 = session("S1");
    let err = ds
        .copy_config(&s1, Target::Startup, Source::Candidate)
        .unwrap_err();
    assert!(matches!(err, DatastoreError::NotApplicable));
}

#[test]
#[serial]
fn copy_config_denied_when_target_locked_by_another_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "g.xml", 600);
    let s1 = session("S1");
    let s2 = session("S2");
    ds.lock(&s1, Target::Startup).unwrap();
    let err = ds
        .copy_config(&s2, Target::Startup, Source::Config("<a/>".to_string()))
        .unwrap_err();
    assert!(matches!(err, DatastoreError::InUse));
}

#[test]
#[serial]
fn edit_config_denied_when_target_locked_by_another_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut ds = open(&dir, "h.xml", 700);
    let s1 = session("S1");
    let s2 = session("S2");
    ds.lock(&s1, Target::Candidate).unwrap();
    let err = ds
        .edit_config(&s2, Target::Candidate, "<a/>", DefaultOperation::Merge, ErrorOption::StopOnError)
        .unwrap_err();
    assert!(matches!(err, DatastoreError::InUse));
}

#[test]
#[serial]
fn copy_running_to_startup_is_nacm_exempt() {
    use dsf_nacm::RecordingNacm;
    use std::sync::Arc;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("i.xml");
    let nacm = Arc::new(RecordingNacm::default());

    struct SharedRecording(Arc<RecordingNacm>);
    impl dsf_nacm::NacmEngine for SharedRecording {
        fn redact_unreadable(&self, doc: &mut xmltree::Element, ctx: &dsf_nacm::NacmContext) {
            self.0.redact_unreadable(doc, ctx);
        }
        fn check_write_permitted(
            &self,
            old: &[xmltree::Element],
            new: &[xmltree::Element],
            model: &dsf_core::DataModel,
            keys: &dsf_core::KeyList,
            ctx: &dsf_nacm::NacmContext,
        ) -> dsf_nacm::NacmVerdict {
            self.0.check_write_permitted(old, new, model, keys, ctx)
        }
    }

    let mut ds = Datastore::open_with(
        &path,
        Box::new(FakeClock::at_unix_secs(800)),
        Box::new(SharedRecording(nacm.clone())),
    )
    .unwrap();

    let s1 = session("S1");
    ds.edit_config(&s1, Target::Running, "<a/>", DefaultOperation::Merge, ErrorOption::StopOnError)
        .unwrap();
    ds.copy_config(&s1, Target::Startup, Source::Running).unwrap();

    assert!(nacm.calls().is_empty(), "running -> startup must bypass NACM entirely");
}
