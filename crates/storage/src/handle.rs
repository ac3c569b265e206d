// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The datastore handle tying C1 (bootstrap), C3 (mutex) and C4
//! (reload/sync) together, and its open/close lifecycle.

use crate::bootstrap::{self, DEFAULT_CREATE_MODE};
use crate::lockreg;
use crate::mutex::Mutex;
use crate::sync;
use dsf_core::{Clock, DataModel, DatastoreError, SystemClock};
use dsf_nacm::{NacmEngine, PermissiveNacm};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use xmltree::Element;

/// An open file-backed NETCONF configuration datastore.
///
/// Not `Send`/`Sync` by itself beyond what its fields allow — sharing
/// one `Datastore` across threads requires external synchronization
/// (e.g. `Arc<std::sync::Mutex<Datastore>>`), since every operation
/// takes `&mut self`.
pub struct Datastore {
    pub(crate) path: PathBuf,
    pub(crate) file: std::fs::File,
    pub(crate) doc: Element,
    pub(crate) mutex: Mutex,
    pub(crate) last_access: SystemTime,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) nacm: Box<dyn NacmEngine>,
    pub(crate) data_model: DataModel,
}

impl Datastore {
    /// Open (creating if necessary) the datastore backed by `path`,
    /// using a real wall clock and an always-permit NACM engine.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatastoreError> {
        Self::open_with(path, Box::new(SystemClock), Box::new(PermissiveNacm))
    }

    /// Open with an injected clock and NACM engine — the entry point
    /// tests and embedding applications use to pin time and assert on
    /// NACM calls.
    pub fn open_with(
        path: impl AsRef<Path>,
        clock: Box<dyn Clock>,
        nacm: Box<dyn NacmEngine>,
    ) -> Result<Self, DatastoreError> {
        Self::open_with_mode(path, clock, nacm, DEFAULT_CREATE_MODE)
    }

    /// Open with an explicit permission mask for a file this call creates
    /// (`DSF_FILE_MODE` in the CLI).
    pub fn open_with_mode(
        path: impl AsRef<Path>,
        clock: Box<dyn Clock>,
        nacm: Box<dyn NacmEngine>,
        create_mode: u32,
    ) -> Result<Self, DatastoreError> {
        let bootstrap::BootstrapResult { path, file, doc } =
            bootstrap::bootstrap(path.as_ref(), create_mode)?;
        let mutex = Mutex::open(&path)?;
        let last_access = file.metadata()?.modified()?;

        let mut handle = Self {
            path,
            file,
            doc,
            mutex,
            last_access,
            clock,
            nacm,
            data_model: DataModel,
        };

        // C1 step 6: a fresh process does not inherit NETCONF locks.
        handle.mutex.acquire()?;
        lockreg::clear_all_locks(&mut handle.doc);
        let result = sync::sync(
            &mut handle.file,
            &handle.doc,
            &mut handle.last_access,
            handle.mutex.is_held(),
        );
        handle.mutex.release();
        result?;

        tracing::info!(path = %handle.path.display(), "datastore opened");
        Ok(handle)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `changed`: a cheap mtime comparison without taking the mutex or
    /// reloading. Any failure to read metadata is reported as "changed"
    /// rather than silently treated as clean.
    pub fn changed(&self) -> bool {
        self.file
            .metadata()
            .and_then(|m| m.modified())
            .map(|mtime| mtime > self.last_access)
            .unwrap_or(true)
    }

    /// Acquire the mutex, reload, run `f`, and release the mutex on
    /// every exit path — the common skeleton shared by every operation
    /// in `ops.rs`.
    pub(crate) fn run_locked<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DatastoreError>,
    ) -> Result<T, DatastoreError> {
        self.mutex.acquire()?;
        let result = self.reload().and_then(|()| f(self));
        self.mutex.release();
        result
    }

    pub(crate) fn reload(&mut self) -> Result<(), DatastoreError> {
        sync::reload(
            &mut self.file,
            &self.path,
            &mut self.doc,
            &mut self.last_access,
            self.mutex.is_held(),
        )
    }

    pub(crate) fn sync(&mut self) -> Result<(), DatastoreError> {
        sync::sync(&mut self.file, &self.doc, &mut self.last_access, self.mutex.is_held())
    }
}

impl Drop for Datastore {
    fn drop(&mut self) {
        // `held` can only be true here if a prior operation panicked
        // mid-critical-section; release defensively rather than leak
        // the semaphore for the process's lifetime.
        self.mutex.release();
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
