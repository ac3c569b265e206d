// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C2: the frame & node index — the parsed in-memory document and
//! direct handles to the three datastore subtrees.

use dsf_core::{DatastoreError, Target};
use xmltree::{Element, XMLNode};

pub const NAMESPACE: &str = "urn:cesnet:tmc:datastores:file";

/// The canonical empty frame: three empty datastore elements with
/// empty `lock`/`locktime` and `candidate.modified = "false"`.
pub const EMPTY_FRAME: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<datastores xmlns="urn:cesnet:tmc:datastores:file">"#,
    r#"<running lock=""/><startup lock=""/>"#,
    r#"<candidate modified="false" lock=""/>"#,
    r#"</datastores>"#,
);

pub fn element_ref(node: &XMLNode) -> Option<&Element> {
    match node {
        XMLNode::Element(e) => Some(e),
        _ => None,
    }
}

pub fn element_mut(node: &mut XMLNode) -> Option<&mut Element> {
    match node {
        XMLNode::Element(e) => Some(e),
        _ => None,
    }
}

/// `structure_check`: root is `datastores`, with exactly one of each of
/// `running`, `startup`, `candidate` among its element children.
/// Unknown siblings are tolerated and logged at trace level.
pub fn structure_check(doc: &Element) -> bool {
    if doc.name != "datastores" {
        return false;
    }

    let mut running = 0u8;
    let mut startup = 0u8;
    let mut candidate = 0u8;

    for child in doc.children.iter().filter_map(element_ref) {
        match child.name.as_str() {
            "running" => running += 1,
            "startup" => startup += 1,
            "candidate" => candidate += 1,
            other => tracing::trace!(element = other, "ignoring unrecognized datastores child"),
        }
    }

    running == 1 && startup == 1 && candidate == 1
}

/// Parse the canonical empty frame.
pub fn empty_frame() -> Result<Element, DatastoreError> {
    Element::parse(EMPTY_FRAME.as_bytes())
        .map_err(|e| DatastoreError::OperationFailed(format!("EMPTY_FRAME failed to parse: {e}")))
}

/// Re-derive a read-only handle onto `target`'s subtree. Node indices
/// are never cached across a reload — they are looked up fresh every
/// time, which is trivially correct since a reload always replaces the
/// whole document.
pub fn target_element<'a>(doc: &'a Element, target: Target) -> Option<&'a Element> {
    doc.get_child(target.element_name())
}

pub fn target_element_mut<'a>(doc: &'a mut Element, target: Target) -> Option<&'a mut Element> {
    doc.get_mut_child(target.element_name())
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
