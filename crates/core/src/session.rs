// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! NETCONF session identity, passed through to the datastore and the NACM
//! collaborator. Normally owned by a session-management crate; kept here
//! since this workspace has no such external crate to depend on.

/// Identity of the NETCONF session making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub username: String,
    pub hostname: String,
    pub capabilities: Vec<String>,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        username: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            username: username.into(),
            hostname: hostname.into(),
            capabilities: Vec::new(),
        }
    }

    /// Build a session carrying the reserved internal id used to probe
    /// "is this datastore locked by anyone" without claiming to hold the
    /// lock. See [`crate::time_fmt::DUMMY_SESSION_ID`].
    pub fn dummy(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::new(crate::time_fmt::DUMMY_SESSION_ID, username, hostname)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
