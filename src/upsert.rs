use xmltree::{Element, XMLNode};

/// Ensures a `field_name` element exists in the tree with its text content
/// set to `new_value`.
///
/// The first matching element in document order is updated in place; later
/// duplicates keep their old content. When no match exists the field is
/// appended to the first `group_tag` child of the root, creating that
/// grouping element when the document has none.
///
/// Running this twice with the same value leaves the tree unchanged after
/// the first run.
pub fn upsert_field(root: &mut Element, field_name: &str, group_tag: &str, new_value: &str) {
    if let Some(field) = find_first_mut(root, field_name) {
        set_text(field, new_value);
        return;
    }
    if root.get_child(group_tag).is_none() {
        root.children.push(XMLNode::Element(Element::new(group_tag)));
    }
    if let Some(group) = root.get_mut_child(group_tag) {
        let mut field = Element::new(field_name);
        field.children.push(XMLNode::Text(new_value.to_owned()));
        group.children.push(XMLNode::Element(field));
    }
}

/// Pre-order search over the descendants of `element`, first match wins.
fn find_first_mut<'a>(element: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    for node in &mut element.children {
        if let XMLNode::Element(child) = node {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = find_first_mut(child, name) {
                return Some(found);
            }
        }
    }
    None
}

fn set_text(element: &mut Element, value: &str) {
    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
    element.children.insert(0, XMLNode::Text(value.to_owned()));
}
