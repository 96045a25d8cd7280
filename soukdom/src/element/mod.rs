mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::{Role, TextDirection};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Visit every element in document order.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    if let Content::Children(children) = &root.content {
        for child in children {
            walk(child, visit);
        }
    }
}

/// All elements with the given role, in document order.
pub fn find_by_role(root: &Element, role: Role) -> Vec<&Element> {
    let mut found = Vec::new();
    walk(root, &mut |el| {
        if el.role == role {
            found.push(el);
        }
    });
    found
}

pub fn count_role(root: &Element, role: Role) -> usize {
    find_by_role(root, role).len()
}

/// Concatenated text of an element and its descendants.
///
/// Text inputs contribute their value, not their placeholder.
pub fn text_content(element: &Element) -> String {
    let mut out = String::new();
    walk(element, &mut |el| match &el.content {
        Content::Text(text) => out.push_str(text),
        Content::TextInput { value, .. } => out.push_str(value),
        _ => {}
    });
    out
}

/// Effective writing direction of the element with `id`, resolved through
/// its ancestors. Returns `None` when no such element exists.
pub fn effective_dir(root: &Element, id: &str) -> Option<TextDirection> {
    fn search(el: &Element, id: &str, inherited: TextDirection) -> Option<TextDirection> {
        let dir = el.dir.unwrap_or(inherited);
        if el.id == id {
            return Some(dir);
        }
        if let Content::Children(children) = &el.content {
            for child in children {
                if let Some(found) = search(child, id, dir) {
                    return Some(found);
                }
            }
        }
        None
    }
    search(root, id, TextDirection::default())
}
