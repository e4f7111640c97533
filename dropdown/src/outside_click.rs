//! Detect pointer presses that land outside a region of the tree.

use tuidom::{hit_path, Element, Event, LayoutResult};

/// Watches presses against the subtree rooted at `region`.
///
/// The check goes through the hit path, so absolutely positioned
/// descendants of the region count as inside even where they hang outside
/// its rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideClick {
    region: String,
}

impl OutsideClick {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether the point at `x`,`y` hits the region or one of its descendants.
    pub fn hits_region(&self, tree: &Element, layout: &LayoutResult, x: u16, y: u16) -> bool {
        hit_path(layout, tree, x, y)
            .iter()
            .any(|el| el.id == self.region)
    }

    /// Whether `event` is a press outside the region. Presses on empty
    /// space count as outside.
    pub fn is_outside(&self, event: &Event, tree: &Element, layout: &LayoutResult) -> bool {
        match event {
            Event::Click { x, y, .. } => !self.hits_region(tree, layout, *x, *y),
            _ => false,
        }
    }

    /// Call `on_outside` when `event` is a press outside the region.
    /// Returns whether it was called.
    pub fn check(
        &self,
        event: &Event,
        tree: &Element,
        layout: &LayoutResult,
        on_outside: impl FnOnce(),
    ) -> bool {
        if self.is_outside(event, tree, layout) {
            log::trace!("[outside-click] press outside {}", self.region);
            on_outside();
            true
        } else {
            false
        }
    }
}
