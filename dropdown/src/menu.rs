//! Keyboard and hover navigation for a scrollable menu.
//!
//! The helper knows nothing about option values. It reads the rendered menu:
//! every element carrying the item attribute is a row that can be
//! highlighted, and the attribute's value is the row's list index. Anything
//! without the attribute (headers, separators) is skipped.

use tuidom::{Element, Key};

use crate::events::EventResult;

/// Attribute that marks a selectable menu row with its list index.
pub const ITEM_ID_ATTR: &str = "data-dropdown-item-id";

/// Navigation helper bound to one menu container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollableMenu {
    menu_id: String,
    item_attr: String,
    visible_rows: u16,
}

impl ScrollableMenu {
    pub fn new(
        menu_id: impl Into<String>,
        item_attr: impl Into<String>,
        visible_rows: u16,
    ) -> Self {
        Self {
            menu_id: menu_id.into(),
            item_attr: item_attr.into(),
            visible_rows: visible_rows.max(1),
        }
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn visible_rows(&self) -> u16 {
        self.visible_rows
    }

    pub(crate) fn set_visible_rows(&mut self, rows: u16) {
        self.visible_rows = rows.max(1);
    }

    /// Indices of the highlightable rows under `menu`, in tree order.
    pub fn item_ids(&self, menu: &Element) -> Vec<usize> {
        let mut ids = Vec::new();
        self.collect(menu, &mut ids);
        ids
    }

    fn collect(&self, element: &Element, ids: &mut Vec<usize>) {
        if let Some(id) = self.item_id(element) {
            ids.push(id);
        }
        for child in element.content.children() {
            self.collect(child, ids);
        }
    }

    fn item_id(&self, element: &Element) -> Option<usize> {
        element.get_data(&self.item_attr)?.parse().ok()
    }

    /// Move the highlight in response to a key.
    ///
    /// Up/Down step between rows and stop at the ends. With nothing
    /// highlighted, Down starts at the first row and Up at the last.
    pub fn on_key(&self, key: Key, menu: &Element, highlighted: &mut Option<usize>) -> EventResult {
        let ids = self.item_ids(menu);
        let Some(last) = ids.len().checked_sub(1) else {
            return EventResult::Ignored;
        };
        let current = highlighted.and_then(|h| ids.iter().position(|&id| id == h));
        let page = usize::from(self.visible_rows);

        let next = match (key, current) {
            (Key::Down, None) | (Key::Home, _) => 0,
            (Key::Up, None) | (Key::End, _) => last,
            (Key::Down, Some(i)) => (i + 1).min(last),
            (Key::Up, Some(i)) => i.saturating_sub(1),
            (Key::PageDown, None) => page.saturating_sub(1).min(last),
            (Key::PageDown, Some(i)) => (i + page).min(last),
            (Key::PageUp, None) => 0,
            (Key::PageUp, Some(i)) => i.saturating_sub(page),
            _ => return EventResult::Ignored,
        };

        log::trace!("[menu] {} {} -> {}", self.menu_id, key.name(), ids[next]);
        *highlighted = Some(ids[next]);
        EventResult::Consumed
    }

    /// Highlight the row under the pointer.
    ///
    /// `path` is a hit path, outermost first. Only rows below this menu
    /// count.
    pub fn on_mouse_move(&self, path: &[&Element], highlighted: &mut Option<usize>) -> EventResult {
        let Some(start) = path.iter().position(|el| el.id == self.menu_id) else {
            return EventResult::Ignored;
        };
        match path[start + 1..]
            .iter()
            .rev()
            .find_map(|el| self.item_id(el))
        {
            Some(id) => {
                *highlighted = Some(id);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Scroll offset that keeps `row` inside the visible window.
    ///
    /// `total` is the number of rows in the menu and `current` the offset
    /// used so far. The result never scrolls past the last full window.
    pub fn scroll_into_view(&self, row: usize, total: usize, current: u16) -> u16 {
        let visible = usize::from(self.visible_rows);
        if total <= visible {
            return 0;
        }
        let max_scroll = total - visible;
        let mut scroll = usize::from(current).min(max_scroll);
        if row < scroll {
            scroll = row;
        } else if row >= scroll + visible {
            scroll = row + 1 - visible;
        }
        u16::try_from(scroll.min(max_scroll)).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_stays_put_while_row_is_visible() {
        let menu = ScrollableMenu::new("m", ITEM_ID_ATTR, 3);
        assert_eq!(menu.scroll_into_view(4, 10, 3), 3);
        assert_eq!(menu.scroll_into_view(6, 10, 3), 4);
        assert_eq!(menu.scroll_into_view(1, 10, 3), 1);
        assert_eq!(menu.scroll_into_view(9, 10, 0), 7);
    }

    #[test]
    fn short_menus_never_scroll() {
        let menu = ScrollableMenu::new("m", ITEM_ID_ATTR, 8);
        assert_eq!(menu.scroll_into_view(4, 5, 2), 0);
    }
}
