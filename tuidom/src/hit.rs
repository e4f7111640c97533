use crate::element::Element;
use crate::layout::{LayoutResult, Rect};
use crate::types::{Overflow, Position};

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_path(layout, root, x, y)
        .into_iter()
        .rev()
        .find(|el| el.clickable)
        .map(|el| el.id.clone())
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_path(layout, root, x, y).last().map(|el| el.id.clone())
}

/// Find the focusable element at the given coordinates.
/// Disabled elements never match.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_path(layout, root, x, y)
        .into_iter()
        .rev()
        .find(|el| el.focusable && !el.disabled)
        .map(|el| el.id.clone())
}

/// The chain of elements under the point, outermost first.
///
/// Absolutely positioned descendants are checked before flow children,
/// highest z-index first, and may be hit even outside their ancestors'
/// rectangles. `Overflow::Hidden` clips flow descendants. Empty when nothing
/// is hit.
pub fn hit_path<'a>(layout: &LayoutResult, root: &'a Element, x: u16, y: u16) -> Vec<&'a Element> {
    walk(layout, root, i32::from(x), i32::from(y), None).unwrap_or_default()
}

fn walk<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: i32,
    y: i32,
    clip: Option<Rect>,
) -> Option<Vec<&'a Element>> {
    if element.hidden {
        return None;
    }
    let rect = *layout.get(&element.id)?;
    let visible = clip.map_or(rect, |c| c.intersect(&rect));

    let children = element.content.children();

    let mut layers: Vec<&Element> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();
    // Stable sort keeps later siblings on top within one z-index
    layers.sort_by_key(|c| c.z_index);
    for child in layers.into_iter().rev() {
        if let Some(path) = walk(layout, child, x, y, None) {
            return Some(prepend(element, path));
        }
    }

    // Flow children are searched even when the point is outside this element,
    // since a layer may hang off any of them.
    let child_clip = if element.overflow == Overflow::Hidden {
        Some(visible)
    } else {
        clip
    };
    for child in children
        .iter()
        .rev()
        .filter(|c| c.position == Position::Static)
    {
        if let Some(path) = walk(layout, child, x, y, child_clip) {
            return Some(prepend(element, path));
        }
    }

    visible.contains(x, y).then(|| vec![element])
}

fn prepend<'a>(element: &'a Element, mut path: Vec<&'a Element>) -> Vec<&'a Element> {
    path.insert(0, element);
    path
}
