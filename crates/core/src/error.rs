// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! NETCONF-shaped error kinds, shared by every crate that can fail.

use thiserror::Error;

/// The error kinds a datastore operation can fail with.
#[derive(Debug, Error)]
pub enum DatastoreError {
    /// `target`/`source` named a selector the datastore does not recognize.
    #[error("bad element: {0}")]
    BadElement(String),

    /// Target (or commit source) is NETCONF-locked by another session.
    #[error("in use")]
    InUse,

    /// Acquiring a NETCONF lock failed: someone else holds it, or the
    /// candidate is unlockably modified.
    #[error("lock denied: {message}")]
    LockDenied {
        /// Current holder's session id, when known.
        holder: Option<String>,
        message: String,
    },

    /// NACM write check denied the operation.
    #[error("access denied")]
    AccessDenied,

    /// Sync failure, parse failure, attempting to delete running, or a
    /// generic I/O error.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// The copy is a semantic no-op: both sides are empty.
    #[error("not applicable")]
    NotApplicable,
}

impl From<std::io::Error> for DatastoreError {
    fn from(e: std::io::Error) -> Self {
        DatastoreError::OperationFailed(e.to_string())
    }
}

impl DatastoreError {
    pub fn lock_denied_by(holder: impl Into<String>) -> Self {
        let holder = holder.into();
        DatastoreError::LockDenied {
            message: format!("datastore already locked by {holder}"),
            holder: Some(holder),
        }
    }

    pub fn lock_denied_message(message: impl Into<String>) -> Self {
        DatastoreError::LockDenied {
            holder: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
