// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The NACM collaborator trait: `redact_unreadable` and
//! `check_write_permitted`.

use dsf_core::{DataModel, KeyList};
use xmltree::Element;

/// Whether an RPC carries NACM enforcement, and (eventually) who is
/// invoking it, as a small value type so a caller can opt out
/// explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NacmContext {
    pub enabled: bool,
}

impl NacmContext {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Outcome of a write-permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NacmVerdict {
    Permit,
    Deny,
    Error(String),
}

/// NACM read/write authorization, per RFC 6536.
///
/// Implementations MUST NOT mutate `doc`'s structure beyond removing
/// unreadable nodes in `redact_unreadable` — the datastore operation
/// layer relies on the tree otherwise matching the pre-redaction shape
/// for its own bookkeeping (e.g. deciding candidate's `modified` flag).
pub trait NacmEngine: Send + Sync {
    /// Remove nodes from `doc` that `ctx` does not have read access to,
    /// per RFC 6536 §3.2.4 ¶3. A no-op when `ctx.enabled` is false.
    fn redact_unreadable(&self, doc: &mut Element, ctx: &NacmContext);

    /// Check whether replacing `old` with `new` under `model`/`keys` is
    /// permitted for `ctx`, per RFC 6536 §3.2.4 ¶4. Always `Permit`
    /// when `ctx.enabled` is false.
    fn check_write_permitted(
        &self,
        old: &[Element],
        new: &[Element],
        model: &DataModel,
        keys: &KeyList,
        ctx: &NacmContext,
    ) -> NacmVerdict;
}
