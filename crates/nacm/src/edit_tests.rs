use super::*;
use std::io::Cursor;

fn parse(xml: &str) -> Element {
    Element::parse(Cursor::new(xml)).expect("valid test xml")
}

#[test]
fn merge_adds_new_child_under_default_merge() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse("<root><b>2</b></root>");
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError).unwrap();
    assert!(target.get_child("a").is_some());
    assert!(target.get_child("b").is_some());
}

#[test]
fn merge_overwrites_existing_child_text() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse("<root><a>2</a></root>");
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError).unwrap();
    assert_eq!(target.get_child("a").unwrap().get_text().as_deref(), Some("2"));
}

#[test]
fn replace_operation_swaps_whole_node() {
    let mut target = parse("<root><a><x>1</x></a></root>");
    let patch = parse(r#"<root><a operation="replace"><y>2</y></a></root>"#);
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError).unwrap();
    let a = target.get_child("a").unwrap();
    assert!(a.get_child("x").is_none());
    assert!(a.get_child("y").is_some());
}

#[test]
fn delete_removes_existing_node() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse(r#"<root><a operation="delete"/></root>"#);
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError).unwrap();
    assert!(target.get_child("a").is_none());
}

#[test]
fn delete_missing_node_errors_on_stop_on_error() {
    let mut target = parse("<root/>");
    let patch = parse(r#"<root><a operation="delete"/></root>"#);
    let result = apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError);
    assert!(matches!(result, Err(EditConfigError::DeleteMissing(_))));
}

#[test]
fn delete_missing_node_is_silent_under_continue_on_error() {
    let mut target = parse("<root/>");
    let patch = parse(r#"<root><a operation="delete"/></root>"#);
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::ContinueOnError).unwrap();
    assert!(target.get_child("a").is_none());
}

#[test]
fn create_rejects_duplicate_under_stop_on_error() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse(r#"<root><a operation="create">2</a></root>"#);
    let result = apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError);
    assert!(result.is_err());
}

#[test]
fn default_operation_none_ignores_unmarked_nodes() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse("<root><b>2</b></root>");
    apply_edit(&mut target, &patch, DefaultOperation::None, ErrorOption::StopOnError).unwrap();
    assert!(target.get_child("b").is_none());
}

#[test]
fn default_operation_none_still_honors_explicit_operation() {
    let mut target = parse("<root><a>1</a></root>");
    let patch = parse(r#"<root><b operation="merge">2</b></root>"#);
    apply_edit(&mut target, &patch, DefaultOperation::None, ErrorOption::StopOnError).unwrap();
    assert!(target.get_child("b").is_some());
}

#[test]
fn merge_recurses_into_nested_children() {
    let mut target = parse("<root><a><x>1</x></a></root>");
    let patch = parse("<root><a><y>2</y></a></root>");
    apply_edit(&mut target, &patch, DefaultOperation::Merge, ErrorOption::StopOnError).unwrap();
    let a = target.get_child("a").unwrap();
    assert!(a.get_child("x").is_some());
    assert!(a.get_child("y").is_some());
}
