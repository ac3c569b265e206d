// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C1: path & file bootstrap — open, validate or create, and quarantine
//! a malformed backing file.

use crate::frame::{empty_frame, structure_check};
use dsf_core::DatastoreError;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use xmltree::Element;

/// Default permission mask used when creating a backing file that does
/// not yet exist (owner and group read-write, consistent with the
/// semaphore's 0666 creation mode).
pub const DEFAULT_CREATE_MODE: u32 = 0o660;

pub struct BootstrapResult {
    pub path: PathBuf,
    pub file: File,
    pub doc: Element,
}

/// Open or create the backing file at `requested_path`, returning a
/// parsed, structurally-valid document. Never overwrites a non-empty
/// file that fails to parse — it is quarantined instead.
pub fn bootstrap(requested_path: &Path, create_mode: u32) -> Result<BootstrapResult, DatastoreError> {
    if !requested_path.exists() {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .mode(create_mode)
            .open(requested_path)
            .map_err(|e| {
                DatastoreError::OperationFailed(format!(
                    "cannot create backing file {}: {e}",
                    requested_path.display()
                ))
            })?;
        tracing::info!(path = %requested_path.display(), "created new backing file");
        return finish_with_empty_frame(requested_path.to_path_buf(), file);
    }

    let metadata = fs::metadata(requested_path)?;
    if metadata.permissions().readonly() {
        return Err(DatastoreError::OperationFailed(format!(
            "backing file {} is not writable",
            requested_path.display()
        )));
    }

    let mut file = OpenOptions::new().read(true).write(true).open(requested_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let parsed = Element::parse(contents.as_bytes())
        .ok()
        .filter(structure_check);

    match parsed {
        Some(doc) => {
            file.rewind()?;
            Ok(BootstrapResult {
                path: requested_path.to_path_buf(),
                file,
                doc,
            })
        }
        None if contents.trim().is_empty() => finish_with_empty_frame(requested_path.to_path_buf(), file),
        None => {
            let quarantine_path = sibling_temp_path(requested_path)?;
            tracing::warn!(
                original = %requested_path.display(),
                quarantined = %quarantine_path.display(),
                "backing file malformed or unparsable; preserving original and starting fresh"
            );
            let new_file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .mode(create_mode)
                .open(&quarantine_path)?;
            finish_with_empty_frame(quarantine_path, new_file)
        }
    }
}

fn finish_with_empty_frame(path: PathBuf, mut file: File) -> Result<BootstrapResult, DatastoreError> {
    let doc = empty_frame()?;
    file.set_len(0)?;
    file.rewind()?;
    file.write_all(EMPTY_FRAME_BYTES)?;
    file.flush()?;
    file.rewind()?;
    Ok(BootstrapResult { path, file, doc })
}

const EMPTY_FRAME_BYTES: &[u8] = crate::frame::EMPTY_FRAME.as_bytes();

/// Allocate a sibling path `<path>.XXXXXX`-style that does not
/// currently exist, to quarantine an unparsable original file.
fn sibling_temp_path(path: &Path) -> Result<PathBuf, DatastoreError> {
    for _ in 0..32 {
        let suffix = random_suffix();
        let candidate = PathBuf::from(format!("{}.{suffix}", path.display()));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(DatastoreError::OperationFailed(format!(
        "could not allocate a quarantine path near {}",
        path.display()
    )))
}

fn random_suffix() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    nanos ^ std::process::id()
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
