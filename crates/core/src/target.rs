// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Datastore selectors.

use std::fmt;

/// One of the three persistent datastore trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Running,
    Startup,
    Candidate,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Running, Target::Startup, Target::Candidate];

    /// The element name this target occupies under `<datastores>`.
    pub fn element_name(self) -> &'static str {
        match self {
            Target::Running => "running",
            Target::Startup => "startup",
            Target::Candidate => "candidate",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// Source of a `copy-config` operation: one of the three stored
/// datastores, or an inline configuration supplied by the caller.
#[derive(Debug, Clone)]
pub enum Source {
    Running,
    Startup,
    Candidate,
    /// `NC_DATASTORE_CONFIG` — `config` is a serialized XML fragment that
    /// becomes the source root.
    Config(String),
}

impl Source {
    /// The stored target this source reads from, if it is one of the three
    /// persisted datastores.
    pub fn as_target(&self) -> Option<Target> {
        match self {
            Source::Running => Some(Target::Running),
            Source::Startup => Some(Target::Startup),
            Source::Candidate => Some(Target::Candidate),
            Source::Config(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
