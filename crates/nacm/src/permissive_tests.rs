use super::*;
use dsf_core::{DataModel, KeyList};

#[test]
fn always_permits() {
    let nacm = PermissiveNacm;
    let verdict = nacm.check_write_permitted(&[], &[], &DataModel, &KeyList::empty(), &NacmContext::enabled());
    assert_eq!(verdict, NacmVerdict::Permit);
}

#[test]
fn redact_is_a_no_op() {
    let nacm = PermissiveNacm;
    let mut doc = Element::new("root");
    doc.children.push(xmltree::XMLNode::Element(Element::new("secret")));
    nacm.redact_unreadable(&mut doc, &NacmContext::enabled());
    assert_eq!(doc.children.len(), 1);
}
