use super::*;

#[test]
fn key_list_empty_has_no_keys() {
    assert!(KeyList::empty().key_names.is_empty());
}
