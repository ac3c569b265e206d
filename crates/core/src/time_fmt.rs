// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RFC 3339 timestamp formatting for `locktime`, and the reserved
//! internal session id used to probe lock state without claiming to
//! hold a lock.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::SystemTime;
#[cfg(test)]
use std::time::UNIX_EPOCH;

/// Session id reserved for internal "is anyone holding this lock"
/// checks. Never written to disk as a real holder, since `lock()` and
/// `unlock()` only ever compare against it, they never assign it.
pub const DUMMY_SESSION_ID: &str = "::dsf-internal-dummy::";

/// Format a `SystemTime` as an RFC 3339 UTC timestamp with second
/// precision, e.g. `2026-07-31T02:15:30Z`.
pub fn format_rfc3339(t: SystemTime) -> String {
    DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
