// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C4: reload / sync — mtime-gated read-through and write-through
//! between the in-memory document and the backing file.
//!
//! Both routines are precondition-checked: the caller must already
//! hold the process-wide mutex (C3), surfaced here as a plain `held`
//! flag rather than a reference to the mutex type, keeping this module
//! decoupled from the signal-masking machinery.

use crate::frame::structure_check;
use dsf_core::DatastoreError;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;
use std::time::SystemTime;
use xmltree::{Element, EmitterConfig};

fn require_held(held: bool, what: &str) -> Result<(), DatastoreError> {
    if held {
        Ok(())
    } else {
        Err(DatastoreError::OperationFailed(format!(
            "{what} called without holding the datastore mutex"
        )))
    }
}

/// Read-through: re-parse the backing file into `doc` if its mtime has
/// advanced past `last_access`; otherwise a no-op. The old document is
/// left untouched on any failure.
pub fn reload(
    file: &mut File,
    path: &Path,
    doc: &mut Element,
    last_access: &mut SystemTime,
    held: bool,
) -> Result<(), DatastoreError> {
    require_held(held, "reload")?;

    let mtime = file.metadata()?.modified()?;
    if mtime <= *last_access {
        return Ok(());
    }

    let mut contents = String::new();
    file.rewind()?;
    file.read_to_string(&mut contents)?;

    let parsed = Element::parse(contents.as_bytes())
        .ok()
        .filter(structure_check)
        .ok_or_else(|| {
            DatastoreError::OperationFailed(format!(
                "backing file {} failed structure check on reload",
                path.display()
            ))
        })?;

    *doc = parsed;
    *last_access = mtime;
    tracing::debug!(path = %path.display(), "reloaded backing file");
    Ok(())
}

/// Write-through: truncate and rewrite the backing file from `doc`.
/// Failure to truncate or write is fatal to the current operation; the
/// in-memory document is left unchanged so the caller may retry.
pub fn sync(
    file: &mut File,
    doc: &Element,
    last_access: &mut SystemTime,
    held: bool,
) -> Result<(), DatastoreError> {
    require_held(held, "sync")?;

    let mut buf = Vec::new();
    let config = EmitterConfig::new().perform_indent(true);
    doc.write_with_config(&mut buf, config).map_err(|e| {
        DatastoreError::OperationFailed(format!("failed to serialize datastore document: {e}"))
    })?;

    file.set_len(0)?;
    file.rewind()?;
    file.write_all(&buf)?;
    file.flush()?;
    file.rewind()?;

    *last_access = file.metadata()?.modified()?;
    tracing::debug!("synced backing file, {} bytes", buf.len());
    Ok(())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
