use super::*;
use serial_test::serial;
use std::path::PathBuf;

#[test]
fn semaphore_name_replaces_slashes_and_keeps_leading_slash() {
    let name = semaphore_name(&PathBuf::from("/tmp/x.xml"));
    assert!(name.starts_with('/'));
    assert!(!name[1..].contains('/'));
    assert!(name.contains("DSF_DATASTORE_LOCK"));
    assert!(name.contains("tmp_x.xml"));
}

#[test]
#[serial]
fn open_creates_semaphore_unheld() {
    let path = PathBuf::from("/tmp/dsf-storage-mutex-test-a.xml");
    let mutex = Mutex::open(&path).expect("sem_open should succeed");
    assert!(!mutex.is_held());
}

#[test]
#[serial]
fn acquire_then_release_round_trips() {
    let path = PathBuf::from("/tmp/dsf-storage-mutex-test-b.xml");
    let mut mutex = Mutex::open(&path).expect("sem_open should succeed");
    mutex.acquire().expect("acquire should succeed");
    assert!(mutex.is_held());
    mutex.release();
    assert!(!mutex.is_held());
}

#[test]
#[serial]
fn nested_acquire_is_rejected() {
    let path = PathBuf::from("/tmp/dsf-storage-mutex-test-c.xml");
    let mut mutex = Mutex::open(&path).expect("sem_open should succeed");
    mutex.acquire().expect("first acquire should succeed");
    assert!(mutex.acquire().is_err());
    mutex.release();
}

#[test]
#[serial]
fn release_without_acquire_is_a_harmless_no_op() {
    let path = PathBuf::from("/tmp/dsf-storage-mutex-test-d.xml");
    let mut mutex = Mutex::open(&path).expect("sem_open should succeed");
    mutex.release();
    assert!(!mutex.is_held());
}
