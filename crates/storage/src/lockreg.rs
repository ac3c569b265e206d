// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C5: the NETCONF lock registry — a second, higher-level lock layered
//! on top of the OS mutex, recorded in the document itself so it
//! survives across operations and processes.
//!
//! These are pure functions over an already-reloaded document; the
//! surrounding reload/sync lifecycle belongs to the operation layer
//! (C6), which is the single place that decides when a reload is due
//! and when a mutation needs to be flushed.

use crate::frame::{target_element, target_element_mut};
use dsf_core::{format_rfc3339, DatastoreError, Session, Target, DUMMY_SESSION_ID};
use std::time::SystemTime;
use xmltree::Element;

const LOCK_ATTR: &str = "lock";
const LOCKTIME_ATTR: &str = "locktime";
const MODIFIED_ATTR: &str = "modified";

fn lock_value(el: &Element) -> &str {
    el.attributes.get(LOCK_ATTR).map(String::as_str).unwrap_or("")
}

/// `access_granted`: empty `lock` is always granted; otherwise only the
/// recorded holder is granted. A missing `lock` attribute is treated
/// the same as an empty one.
pub fn access_granted(target_el: &Element, session_id: &str) -> bool {
    let lock = lock_value(target_el);
    lock.is_empty() || lock == session_id
}

/// Clear `lock` and `locktime` on all three datastores. Called once at
/// bootstrap: a fresh process does not inherit NETCONF locks.
pub fn clear_all_locks(doc: &mut Element) {
    for target in Target::ALL {
        if let Some(el) = target_element_mut(doc, target) {
            el.attributes.insert(LOCK_ATTR.to_string(), String::new());
            el.attributes.insert(LOCKTIME_ATTR.to_string(), String::new());
        }
    }
}

fn is_candidate_modified(doc: &Element) -> bool {
    target_element(doc, Target::Candidate)
        .map(|c| c.attributes.get(MODIFIED_ATTR).map(String::as_str) == Some("true"))
        .unwrap_or(false)
}

/// `lock(target, session)`.
pub fn lock(
    doc: &mut Element,
    target: Target,
    session: &Session,
    now: SystemTime,
) -> Result<(), DatastoreError> {
    let candidate_modified = target == Target::Candidate && is_candidate_modified(doc);

    let el = target_element_mut(doc, target)
        .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;

    if !access_granted(el, DUMMY_SESSION_ID) {
        let holder = el.attributes.get(LOCK_ATTR).cloned();
        return Err(DatastoreError::LockDenied {
            message: format!(
                "datastore already locked by {}",
                holder.as_deref().unwrap_or("<unknown>")
            ),
            holder,
        });
    }

    if candidate_modified {
        return Err(DatastoreError::lock_denied_message(
            "Candidate datastore not locked but already modified.",
        ));
    }

    el.attributes
        .insert(LOCK_ATTR.to_string(), session.session_id.clone());
    el.attributes
        .insert(LOCKTIME_ATTR.to_string(), format_rfc3339(now));
    Ok(())
}

/// `unlock(target, session)`.
pub fn unlock(doc: &mut Element, target: Target, session: &Session) -> Result<(), DatastoreError> {
    let running_children = if target == Target::Candidate {
        Some(
            target_element(doc, Target::Running)
                .ok_or_else(|| DatastoreError::BadElement(Target::Running.to_string()))?
                .children
                .clone(),
        )
    } else {
        None
    };

    let el = target_element_mut(doc, target)
        .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;

    let lock = lock_value(el).to_string();
    if lock.is_empty() {
        return Err(DatastoreError::OperationFailed(format!(
            "{target} is not locked"
        )));
    }
    if lock != session.session_id {
        return Err(DatastoreError::OperationFailed(format!(
            "{target} is locked by another session"
        )));
    }

    if target == Target::Candidate {
        if let Some(children) = running_children {
            el.children = children;
        }
        el.attributes
            .insert(MODIFIED_ATTR.to_string(), "false".to_string());
    }

    el.attributes.insert(LOCK_ATTR.to_string(), String::new());
    el.attributes.insert(LOCKTIME_ATTR.to_string(), String::new());
    Ok(())
}

/// `lockinfo(target)`: `(Some(sid), Some(time))` or `(None, None)`.
pub fn lockinfo(doc: &Element, target: Target) -> Result<(Option<String>, Option<String>), DatastoreError> {
    let el = target_element(doc, target)
        .ok_or_else(|| DatastoreError::BadElement(target.to_string()))?;
    let lock = lock_value(el);
    if lock.is_empty() {
        Ok((None, None))
    } else {
        Ok((
            Some(lock.to_string()),
            el.attributes.get(LOCKTIME_ATTR).cloned(),
        ))
    }
}

#[cfg(test)]
#[path = "lockreg_tests.rs"]
mod tests;
