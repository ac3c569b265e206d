// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C3: the inter-process mutex — a named, kernel-persistent binary
//! semaphore guarding all access to the backing file, with
//! signal-masked critical sections.
//!
//! POSIX named semaphores have no safe wrapper in this workspace's
//! dependency set (unlike the file-lock idiom `nix::fcntl::flock`
//! covers), so this module talks to `sem_open`/`sem_wait`/`sem_post`
//! directly through `libc`. Keep `unsafe` contained to this module.
#![allow(unsafe_code)]

use dsf_core::DatastoreError;
use nix::sys::signal::{pthread_sigmask, SigSet, SigmaskHow};
use std::ffi::CString;
use std::path::Path;

const SENTINEL: &str = "DSF_DATASTORE_LOCK";

/// Derive the POSIX semaphore name for a backing file path: a fixed
/// sentinel and the absolute path, with every `/` (including the
/// leading one) replaced by `_`, re-prefixed with a single `/` so the
/// result is a legal `sem_open` name.
fn semaphore_name(path: &Path) -> String {
    let combined = format!("/{SENTINEL}{}", path.display());
    let mut name: String = combined
        .chars()
        .map(|c| if c == '/' { '_' } else { c })
        .collect();
    name.replace_range(0..1, "/");
    name
}

/// The OS-level mutex serialising all access to one backing file
/// across every process that opens it.
pub struct Mutex {
    sem: *mut libc::sem_t,
    held: bool,
    saved_signal_mask: Option<SigSet>,
}

// `sem` is a kernel-backed handle; sem_wait/sem_post are safe to call
// from any thread, and this type is only ever mutated behind `&mut
// Datastore`, so moving it across threads is sound.
unsafe impl Send for Mutex {}

impl Mutex {
    /// Open (creating if needed) the named semaphore for `path`.
    pub fn open(path: &Path) -> Result<Self, DatastoreError> {
        let name = semaphore_name(path);
        let cname = CString::new(name).map_err(|e| {
            DatastoreError::OperationFailed(format!("invalid semaphore name: {e}"))
        })?;

        // SAFETY: umask/sem_open are plain libc calls; cname is a valid
        // NUL-terminated string for the duration of the call.
        let sem = unsafe {
            let old_umask = libc::umask(0);
            let sem = libc::sem_open(cname.as_ptr(), libc::O_CREAT, 0o666u32, 1u32);
            libc::umask(old_umask);
            sem
        };

        if sem == libc::SEM_FAILED {
            return Err(DatastoreError::OperationFailed(format!(
                "sem_open({:?}) failed: {}",
                cname,
                std::io::Error::last_os_error()
            )));
        }

        Ok(Self {
            sem,
            held: false,
            saved_signal_mask: None,
        })
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// `LOCK`: mask all blockable signals, then block on the
    /// semaphore. Non-reentrant — calling this while already held is a
    /// caller bug, surfaced as `OperationFailed` rather than a panic.
    pub fn acquire(&mut self) -> Result<(), DatastoreError> {
        if self.held {
            return Err(DatastoreError::OperationFailed(
                "named mutex acquired twice by the same handle".into(),
            ));
        }

        let full = SigSet::all();
        let mut old = SigSet::empty();
        pthread_sigmask(SigmaskHow::SIG_SETMASK, Some(&full), Some(&mut old))
            .map_err(|e| DatastoreError::OperationFailed(format!("sigprocmask failed: {e}")))?;
        self.saved_signal_mask = Some(old);

        // SAFETY: `self.sem` is a live semaphore for the lifetime of `self`.
        let rc = loop {
            let rc = unsafe { libc::sem_wait(self.sem) };
            if rc == 0 {
                break 0;
            }
            let errno = std::io::Error::last_os_error();
            if errno.kind() != std::io::ErrorKind::Interrupted {
                break -1;
            }
            // Signals are masked, so EINTR should not occur in practice;
            // retry defensively rather than leak the semaphore.
        };

        if rc != 0 {
            let _ = pthread_sigmask(SigmaskHow::SIG_SETMASK, self.saved_signal_mask.as_ref(), None);
            self.saved_signal_mask = None;
            return Err(DatastoreError::OperationFailed(format!(
                "sem_wait failed: {}",
                std::io::Error::last_os_error()
            )));
        }

        self.held = true;
        Ok(())
    }

    /// `UNLOCK`: post the semaphore and restore the pre-`acquire`
    /// signal mask. Safe to call unconditionally — a no-op if not held.
    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        // SAFETY: `self.sem` is valid and currently held by this handle.
        unsafe {
            libc::sem_post(self.sem);
        }
        self.held = false;
        if let Some(old) = self.saved_signal_mask.take() {
            let _ = pthread_sigmask(SigmaskHow::SIG_SETMASK, Some(&old), None);
        }
    }
}

impl Drop for Mutex {
    fn drop(&mut self) {
        // A handle going out of scope while still holding the mutex
        // (a logic error elsewhere) must not leak it process-wide.
        if self.held {
            unsafe {
                libc::sem_post(self.sem);
            }
        }
        // Close our reference; the named semaphore itself is
        // kernel-persistent and is never sem_unlink'd here — other
        // processes may still hold it open.
        unsafe {
            libc::sem_close(self.sem);
        }
    }
}

#[cfg(test)]
#[path = "mutex_tests.rs"]
mod tests;
