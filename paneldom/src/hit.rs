use crate::element::{Content, Element};

/// Find the element with the given id anywhere in the tree.
pub fn find<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find(child, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Ancestor chain from the target element up to the root, target first.
/// Returns None if the target id is not in the tree.
///
/// This is the dispatch order for bubbling click events: handlers run
/// on the target, then on each enclosing element in turn.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    if element.id == id {
        path.push(element);
        return true;
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                path.push(element);
                return true;
            }
        }
    }
    false
}

/// Find the deepest clickable element on the path to `id`.
/// Skips elements hidden via `Display::None`.
pub fn hit_clickable<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let path = path_to(root, id)?;
    path.into_iter()
        .find(|e| e.clickable && e.display != crate::types::Display::None)
}
