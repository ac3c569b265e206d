// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `edit-config` operation-attribute merge, invoked as a black box by
//! the datastore operation layer.
//!
//! This is a deliberately simple implementation: children are matched
//! by (namespace, local name) pair at each nesting level, not by YANG
//! list keys. Real YANG-aware merge is out of scope.

use thiserror::Error;
use xmltree::{Element, XMLNode};

const NC_OPERATION_ATTR: &str = "operation";

/// Default operation applied to a patch node that carries no explicit
/// `nc:operation` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultOperation {
    #[default]
    Merge,
    Replace,
    None,
}

/// How to react to an edit operation that cannot be applied (e.g.
/// `delete` of a node that does not exist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorOption {
    #[default]
    StopOnError,
    ContinueOnError,
}

#[derive(Debug, Error)]
pub enum EditConfigError {
    #[error("delete of non-existent node '{0}'")]
    DeleteMissing(String),
    #[error("remove of non-existent node '{0}' with error-option stop-on-error")]
    RemoveMissing(String),
    #[error("unknown operation attribute '{0}'")]
    UnknownOperation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Merge,
    Replace,
    Create,
    Delete,
    Remove,
}

impl Operation {
    fn parse(raw: &str) -> Result<Self, EditConfigError> {
        match raw {
            "merge" => Ok(Operation::Merge),
            "replace" => Ok(Operation::Replace),
            "create" => Ok(Operation::Create),
            "delete" => Ok(Operation::Delete),
            "remove" => Ok(Operation::Remove),
            other => Err(EditConfigError::UnknownOperation(other.to_string())),
        }
    }

    fn from_default(defop: DefaultOperation) -> Self {
        match defop {
            DefaultOperation::Merge => Operation::Merge,
            DefaultOperation::Replace => Operation::Replace,
            DefaultOperation::None => Operation::Merge,
        }
    }
}

fn element_of(node: &XMLNode) -> Option<&Element> {
    match node {
        XMLNode::Element(e) => Some(e),
        _ => None,
    }
}

fn element_of_mut(node: &mut XMLNode) -> Option<&mut Element> {
    match node {
        XMLNode::Element(e) => Some(e),
        _ => None,
    }
}

fn find_match<'a>(target: &'a mut Element, patch: &Element) -> Option<usize> {
    target.children.iter().position(|c| {
        element_of(c)
            .map(|e| e.name == patch.name && e.namespace == patch.namespace)
            .unwrap_or(false)
    })
}

/// Recursively merge `patch`'s children into `target`, following each
/// child's `operation` attribute (or `defop` when absent).
///
/// `DefaultOperation::None` means "only nodes that carry an explicit
/// operation attribute are touched" — matching RFC 6241 §7.2's
/// `<default-operation>none</default-operation>`.
pub fn apply_edit(
    target: &mut Element,
    patch: &Element,
    defop: DefaultOperation,
    errop: ErrorOption,
) -> Result<(), EditConfigError> {
    for patch_node in &patch.children {
        let Some(patch_elem) = element_of(patch_node) else {
            continue;
        };
        apply_node(target, patch_elem, defop, errop)?;
    }
    Ok(())
}

fn apply_node(
    target: &mut Element,
    patch_elem: &Element,
    defop: DefaultOperation,
    errop: ErrorOption,
) -> Result<(), EditConfigError> {
    let op = match patch_elem.attributes.get(NC_OPERATION_ATTR) {
        Some(raw) => Operation::parse(raw)?,
        None if defop == DefaultOperation::None => return Ok(()),
        None => Operation::from_default(defop),
    };

    let existing = find_match(target, patch_elem);

    match op {
        Operation::Delete => match existing {
            Some(idx) => {
                target.children.remove(idx);
            }
            None if errop == ErrorOption::StopOnError => {
                return Err(EditConfigError::DeleteMissing(patch_elem.name.clone()));
            }
            None => {}
        },
        Operation::Remove => match existing {
            Some(idx) => {
                target.children.remove(idx);
            }
            None if errop == ErrorOption::StopOnError => {
                return Err(EditConfigError::RemoveMissing(patch_elem.name.clone()));
            }
            None => {}
        },
        Operation::Replace => {
            let mut replacement = strip_operation_attrs(patch_elem.clone());
            if let Some(idx) = existing {
                target.children[idx] = XMLNode::Element(replacement);
            } else {
                replacement.attributes.remove(NC_OPERATION_ATTR);
                target.children.push(XMLNode::Element(replacement));
            }
        }
        Operation::Create => {
            if existing.is_some() && errop == ErrorOption::StopOnError {
                return Err(EditConfigError::UnknownOperation(format!(
                    "create: node '{}' already exists",
                    patch_elem.name
                )));
            }
            if existing.is_none() {
                target
                    .children
                    .push(XMLNode::Element(strip_operation_attrs(patch_elem.clone())));
            }
        }
        Operation::Merge => match existing {
            Some(idx) => {
                if let Some(existing_elem) = element_of_mut(&mut target.children[idx]) {
                    for (k, v) in &patch_elem.attributes {
                        if k != NC_OPERATION_ATTR {
                            existing_elem.attributes.insert(k.clone(), v.clone());
                        }
                    }
                    let has_child_elements =
                        patch_elem.children.iter().any(|c| element_of(c).is_some());
                    if has_child_elements {
                        apply_edit(existing_elem, patch_elem, defop, errop)?;
                    } else if let Some(text) = patch_elem.get_text() {
                        existing_elem.children = vec![XMLNode::Text(text.into_owned())];
                    }
                }
            }
            None => {
                target
                    .children
                    .push(XMLNode::Element(strip_operation_attrs(patch_elem.clone())));
            }
        },
    }

    Ok(())
}

fn strip_operation_attrs(mut elem: Element) -> Element {
    elem.attributes.remove(NC_OPERATION_ATTR);
    elem
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
