mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find the first element (depth-first) whose data attribute `key` equals `value`.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_data(key).map(String::as_str) == Some(value) {
        return Some(root);
    }
    root.content
        .children()
        .iter()
        .find_map(|child| find_by_data(child, key, value))
}

/// The chain of elements from `root` down to the element with `id`, inclusive.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }
    for child in root.content.children() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }
    None
}

/// Whether `id` names `ancestor` itself or one of its descendants.
pub fn contains(ancestor: &Element, id: &str) -> bool {
    find_element(ancestor, id).is_some()
}
