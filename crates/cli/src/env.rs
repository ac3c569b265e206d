// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI binary.

use std::path::PathBuf;

/// `DSF_DATASTORE_PATH`: the backing XML file. Required — there is no
/// sensible default location for a configuration datastore.
pub fn datastore_path() -> anyhow::Result<PathBuf> {
    std::env::var("DSF_DATASTORE_PATH")
        .map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("DSF_DATASTORE_PATH must be set to the backing file path"))
}

/// `DSF_FILE_MODE`: octal permission mask applied when the backing file
/// does not exist yet (e.g. `640`). Falls back to
/// [`dsf_storage::DEFAULT_CREATE_MODE`] when unset or unparsable.
pub fn file_mode() -> u32 {
    std::env::var("DSF_FILE_MODE")
        .ok()
        .and_then(|raw| u32::from_str_radix(&raw, 8).ok())
        .unwrap_or(dsf_storage::DEFAULT_CREATE_MODE)
}
