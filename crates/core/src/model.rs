// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque handles into the YANG data model layer.
//!
//! Loading and validating YANG models is out of scope here. These
//! types exist only so the NACM collaborator's signature matches
//! `check_write_permitted(..., model, keys, ...)`, without this crate
//! pretending to understand YANG.

/// Placeholder for a loaded YANG data model. Carries nothing; NACM
/// engines that need real schema awareness would replace this with a
/// handle into their own model loader.
#[derive(Debug, Clone, Default)]
pub struct DataModel;

/// Placeholder for a "key-node list" accessor: the set of YANG list
/// key nodes a write-check uses to match old/new list entries by key
/// rather than by position.
#[derive(Debug, Clone, Default)]
pub struct KeyList {
    /// Element-name keys known to matter for identity comparisons.
    /// Empty by default, meaning "compare by position" (this crate's
    /// `PermissiveNacm` never consults it).
    pub key_names: Vec<String>,
}

impl KeyList {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
