// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permissive NACM engine: permits everything, redacts nothing.
//!
//! The default engine `Datastore::open` uses when the caller supplies
//! none — for deployments with no access-control policy of their own.

use crate::engine::{NacmContext, NacmEngine, NacmVerdict};
use dsf_core::{DataModel, KeyList};
use xmltree::Element;

/// NACM engine that never denies and never redacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveNacm;

impl NacmEngine for PermissiveNacm {
    fn redact_unreadable(&self, _doc: &mut Element, _ctx: &NacmContext) {}

    fn check_write_permitted(
        &self,
        _old: &[Element],
        _new: &[Element],
        _model: &DataModel,
        _keys: &KeyList,
        _ctx: &NacmContext,
    ) -> NacmVerdict {
        NacmVerdict::Permit
    }
}

#[cfg(test)]
#[path = "permissive_tests.rs"]
mod tests;
