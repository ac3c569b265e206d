// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C6: the operation layer — `get-config`, `copy-config`,
//! `delete-config`, `edit-config`, `lock`, `unlock`, `lockinfo`,
//! composing C3–C5 with the NACM and edit-config collaborators.

use crate::frame::{self, element_ref};
use crate::handle::Datastore;
use crate::lockreg;
use dsf_core::{DatastoreError, KeyList, Session, Source, Target};
use dsf_nacm::{self, DefaultOperation, ErrorOption, NacmContext, NacmVerdict};
use xmltree::{Element, EmitterConfig, XMLNode};

impl Datastore {
    /// `get-config(source)`: the serialised *children* of `source`, not
    /// the wrapping element. NACM redaction, if any, is the caller's
    /// responsibility — this layer never calls it for reads.
    pub fn get_config(&mut self, session: &Session, source: Target) -> Result<String, DatastoreError> {
        let _span =
            tracing::info_span!("get_config", session = %session.session_id, source = %source).entered();
        self.run_locked(|ds| {
            let el = frame::target_element(&ds.doc, source)
                .ok_or_else(|| DatastoreError::BadElement(source.to_string()))?;
            serialize_children(el)
        })
    }

    /// `copy-config(target, source, config, rpc_ctx)`.
    pub fn copy_config(
        &mut self,
        session: &Session,
        target: Target,
        source: Source,
    ) -> Result<(), DatastoreError> {
        let _span = tracing::info_span!(
            "copy_config", session = %session.session_id, target = %target
        )
        .entered();
        self.run_locked(|ds| ds.copy_config_locked(session, target, source))
    }

    fn copy_config_locked(
        &mut self,
        session: &Session,
        target: Target,
        source: Source,
    ) -> Result<(), DatastoreError> {
        let target_el = frame::target_element(&self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        if !lockreg::access_granted(target_el, &session.session_id) {
            return Err(DatastoreError::InUse);
        }

        let is_commit = matches!(source, Source::Candidate) && target == Target::Running;
        if is_commit {
            let source_el = frame::target_element(&self.doc, Target::Candidate)
                .ok_or_else(|| DatastoreError::BadElement(Target::Candidate.to_string()))?;
            if !lockreg::access_granted(source_el, &session.session_id) {
                return Err(DatastoreError::InUse);
            }
        }

        let mut working_children: Vec<XMLNode> = match &source {
            Source::Config(xml) => {
                let parsed = Element::parse(xml.as_bytes()).map_err(|e| {
                    DatastoreError::OperationFailed(format!("invalid source config xml: {e}"))
                })?;
                parsed.children
            }
            Source::Running | Source::Startup | Source::Candidate => {
                let t = source.as_target().ok_or_else(|| {
                    DatastoreError::OperationFailed("source has no backing target".to_string())
                })?;
                frame::target_element(&self.doc, t)
                    .ok_or_else(|| DatastoreError::BadElement(t.to_string()))?
                    .children
                    .clone()
            }
        };

        let target_is_empty = frame::target_element(&self.doc, target)
            .map(|e| e.children.is_empty())
            .unwrap_or(true);
        if working_children.is_empty() && target_is_empty {
            return Err(DatastoreError::NotApplicable);
        }

        let ctx = NacmContext::enabled();
        // Exemption: running -> startup bypasses NACM entirely (RFC 6536 §3.2.4 ¶2).
        let exempt = matches!(source, Source::Running) && target == Target::Startup;
        if !exempt {
            if source.as_target().is_some() {
                let mut working_doc = Element::new("working");
                working_doc.children = working_children;
                self.nacm.redact_unreadable(&mut working_doc, &ctx);
                working_children = working_doc.children;
            }

            let old_elems: Vec<Element> = frame::target_element(&self.doc, target)
                .map(|e| e.children.iter().filter_map(element_ref).cloned().collect())
                .unwrap_or_default();
            let new_elems: Vec<Element> =
                working_children.iter().filter_map(element_ref).cloned().collect();

            match self.nacm.check_write_permitted(
                &old_elems,
                &new_elems,
                &self.data_model,
                &KeyList::empty(),
                &ctx,
            ) {
                NacmVerdict::Permit => {}
                NacmVerdict::Deny => return Err(DatastoreError::AccessDenied),
                NacmVerdict::Error(message) => return Err(DatastoreError::OperationFailed(message)),
            }
        }

        let target_el = frame::target_element_mut(&mut self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        target_el.children = working_children;
        if target == Target::Candidate {
            let modified = !matches!(source, Source::Running);
            target_el
                .attributes
                .insert("modified".to_string(), modified.to_string());
        }

        self.sync()
    }

    /// `delete-config(target)`.
    pub fn delete_config(&mut self, session: &Session, target: Target) -> Result<(), DatastoreError> {
        let _span = tracing::info_span!(
            "delete_config", session = %session.session_id, target = %target
        )
        .entered();
        self.run_locked(|ds| ds.delete_config_locked(session, target))
    }

    fn delete_config_locked(&mut self, session: &Session, target: Target) -> Result<(), DatastoreError> {
        if target == Target::Running {
            return Err(DatastoreError::OperationFailed(
                "Cannot delete a running datastore.".to_string(),
            ));
        }

        let el = frame::target_element(&self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        if !lockreg::access_granted(el, &session.session_id) {
            return Err(DatastoreError::InUse);
        }

        let el = frame::target_element_mut(&mut self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        el.children.clear();
        if target == Target::Candidate {
            el.attributes.insert("modified".to_string(), "true".to_string());
        }

        self.sync()
    }

    /// `edit-config(target, config, defop, errop, rpc_ctx)`.
    pub fn edit_config(
        &mut self,
        session: &Session,
        target: Target,
        config: &str,
        defop: DefaultOperation,
        errop: ErrorOption,
    ) -> Result<(), DatastoreError> {
        let _span = tracing::info_span!(
            "edit_config", session = %session.session_id, target = %target
        )
        .entered();
        self.run_locked(|ds| ds.edit_config_locked(session, target, config, defop, errop))
    }

    fn edit_config_locked(
        &mut self,
        session: &Session,
        target: Target,
        config: &str,
        defop: DefaultOperation,
        errop: ErrorOption,
    ) -> Result<(), DatastoreError> {
        let el = frame::target_element(&self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        if !lockreg::access_granted(el, &session.session_id) {
            return Err(DatastoreError::InUse);
        }

        let patch_doc = Element::parse(config.as_bytes())
            .map_err(|e| DatastoreError::OperationFailed(format!("invalid edit-config xml: {e}")))?;

        let mut working = Element::new("working");
        working.children = frame::target_element(&self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?
            .children
            .clone();

        dsf_nacm::apply_edit(&mut working, &patch_doc, defop, errop)
            .map_err(|e| DatastoreError::OperationFailed(e.to_string()))?;

        let el = frame::target_element_mut(&mut self.doc, target)
            .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
        el.children = working.children;
        if target == Target::Candidate {
            el.attributes.insert("modified".to_string(), "true".to_string());
        }

        self.sync()
    }

    /// `lock(target, session)`.
    pub fn lock(&mut self, session: &Session, target: Target) -> Result<(), DatastoreError> {
        let _span =
            tracing::info_span!("lock", session = %session.session_id, target = %target).entered();
        self.run_locked(|ds| {
            let now = ds.clock.now();
            lockreg::lock(&mut ds.doc, target, session, now)?;
            ds.sync()
        })
    }

    /// `unlock(target, session)`.
    pub fn unlock(&mut self, session: &Session, target: Target) -> Result<(), DatastoreError> {
        let _span =
            tracing::info_span!("unlock", session = %session.session_id, target = %target).entered();
        self.run_locked(|ds| {
            lockreg::unlock(&mut ds.doc, target, session)?;
            ds.sync()
        })
    }

    /// `lockinfo(target)`.
    pub fn lockinfo(
        &mut self,
        target: Target,
    ) -> Result<(Option<String>, Option<String>), DatastoreError> {
        self.run_locked(|ds| lockreg::lockinfo(&ds.doc, target))
    }
}

fn serialize_children(el: &Element) -> Result<String, DatastoreError> {
    let mut buf = Vec::new();
    for child in el.children.iter().filter_map(element_ref) {
        let config = EmitterConfig::new()
            .perform_indent(true)
            .write_document_declaration(false);
        child
            .write_with_config(&mut buf, config)
            .map_err(|e| DatastoreError::OperationFailed(format!("failed to serialize config: {e}")))?;
    }
    String::from_utf8(buf)
        .map_err(|e| DatastoreError::OperationFailed(format!("serialized config was not valid utf-8: {e}")))
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
