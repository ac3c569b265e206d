// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake NACM engine for testing — records calls and returns a
//! configurable verdict instead of doing real policy work, for tests
//! that need to assert which calls were (or weren't) made.
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::engine::{NacmContext, NacmEngine, NacmVerdict};
use dsf_core::{DataModel, KeyList};
use parking_lot::Mutex;
use xmltree::Element;

/// A recorded call into [`RecordingNacm`].
#[derive(Debug, Clone, Copy)]
pub enum NacmCall {
    Redact { enabled: bool },
    CheckWrite { enabled: bool, old_len: usize, new_len: usize },
}

/// NACM test double: records every call it receives and always returns
/// a pre-configured verdict (default `Permit`).
pub struct RecordingNacm {
    calls: Mutex<Vec<NacmCall>>,
    verdict: NacmVerdict,
}

impl Default for RecordingNacm {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            verdict: NacmVerdict::Permit,
        }
    }
}

impl RecordingNacm {
    pub fn with_verdict(verdict: NacmVerdict) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            verdict,
        }
    }

    pub fn calls(&self) -> Vec<NacmCall> {
        self.calls.lock().clone()
    }
}

impl NacmEngine for RecordingNacm {
    fn redact_unreadable(&self, _doc: &mut Element, ctx: &NacmContext) {
        self.calls.lock().push(NacmCall::Redact { enabled: ctx.enabled });
    }

    fn check_write_permitted(
        &self,
        old: &[Element],
        new: &[Element],
        _model: &DataModel,
        _keys: &KeyList,
        ctx: &NacmContext,
    ) -> NacmVerdict {
        self.calls.lock().push(NacmCall::CheckWrite {
            enabled: ctx.enabled,
            old_len: old.len(),
            new_len: new.len(),
        });
        self.verdict.clone()
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
