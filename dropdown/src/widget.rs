//! The dropdown widget and its operations.

use tuidom::{find_by_data, find_element, hit_path, Element, Event, FocusState, Key, LayoutResult};

use crate::error::{DropdownError, Result};
use crate::events::EventResult;
use crate::item::{position_of, DropdownItem, DropdownOption};
use crate::menu::{ScrollableMenu, ITEM_ID_ATTR};
use crate::outside_click::OutsideClick;
use crate::props::{ChangeEvent, DropdownProps};
use crate::render;
use crate::state::{DropdownId, DropdownState};

/// A select control with an overlay menu.
///
/// The dropdown renders a control showing the current value (or the
/// placeholder). Focusing the control opens an overlay listing every option,
/// shifted so the highlighted row sits on top of the control. Committing a
/// row reports the new value through the props callbacks and closes the
/// overlay.
///
/// The value is controlled by the caller: after a commit, pass the new value
/// back with [`set_value`](Self::set_value).
///
/// # Frame cycle
///
/// ```ignore
/// let mut tree = dropdown.render()?;
/// let mut layout = tuidom::layout::layout(&tree, area);
/// if dropdown.position_overlay(&tree, &layout)? {
///     tree = dropdown.render()?;
///     layout = tuidom::layout::layout(&tree, area);
/// }
/// for event in focus.process_events(&raw, &tree, &layout) {
///     dropdown.handle_event(&event, &tree, &layout, &mut focus)?;
/// }
/// ```
pub struct Dropdown<T: DropdownItem> {
    root_id: String,
    props: DropdownProps<T>,
    state: DropdownState,
    menu: ScrollableMenu,
    outside: OutsideClick,
}

impl<T: DropdownItem> Dropdown<T> {
    /// Create a dropdown, checking the icon and the value against the options.
    ///
    /// The root id is fixed here: `props.id` when given, else a generated
    /// `__dropdown_N`.
    pub fn new(props: DropdownProps<T>) -> Result<Self> {
        if let Some(icon) = &props.icon {
            icon.validate()?;
        }
        let root_id = props
            .id
            .clone()
            .unwrap_or_else(|| DropdownId::new().to_string());
        let menu = ScrollableMenu::new(
            format!("{root_id}-menu"),
            ITEM_ID_ATTR,
            props.config.max_visible_rows,
        );
        let outside = OutsideClick::new(root_id.clone());

        let dropdown = Self {
            root_id,
            props,
            state: DropdownState::new(),
            menu,
            outside,
        };
        dropdown.selected_position()?;
        log::debug!("[dropdown] created {}", dropdown.root_id);
        Ok(dropdown)
    }

    // ------------------------------------------------------------------
    // Ids
    // ------------------------------------------------------------------

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// The focusable control. Focus, blur and key events target this id.
    pub fn control_id(&self) -> String {
        format!("{}-control", self.root_id)
    }

    pub fn overlay_id(&self) -> String {
        format!("{}-overlay", self.root_id)
    }

    /// The menu container holding the option rows.
    pub fn menu_id(&self) -> &str {
        self.menu.menu_id()
    }

    pub fn row_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.root_id)
    }

    // ------------------------------------------------------------------
    // Props
    // ------------------------------------------------------------------

    pub fn props(&self) -> &DropdownProps<T> {
        &self.props
    }

    /// Replace all props. The value is checked on the next render or focus.
    ///
    /// Disabling an open dropdown closes it. Host focus is left to
    /// [`FocusState::retain_valid`].
    pub fn set_props(&mut self, props: DropdownProps<T>) -> Result<()> {
        if let Some(icon) = &props.icon {
            icon.validate()?;
        }
        self.menu.set_visible_rows(props.config.max_visible_rows);
        self.props = props;
        if self.props.disabled {
            self.close();
        }
        self.drop_stale_highlight();
        Ok(())
    }

    pub fn set_value(&mut self, value: Option<T>) {
        self.props.value = value;
    }

    pub fn set_options(&mut self, options: impl IntoIterator<Item = DropdownOption<T>>) {
        self.props.options = options.into_iter().collect();
        self.drop_stale_highlight();
    }

    pub fn value(&self) -> Option<&T> {
        self.props.value.as_ref()
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    fn drop_stale_highlight(&mut self) {
        if let Some(index) = self.state.highlighted() {
            let selectable = self
                .props
                .options
                .get(index)
                .is_some_and(DropdownOption::is_selectable);
            if !selectable {
                *self.state.highlighted_mut() = None;
            }
        }
    }

    /// List position of the current value, or `InvalidValue` when it matches
    /// no option.
    fn selected_position(&self) -> Result<Option<usize>> {
        match &self.props.value {
            None => Ok(None),
            Some(value) => position_of(&self.props.options, value)
                .map(Some)
                .ok_or_else(|| DropdownError::InvalidValue {
                    value: value.item_label(),
                }),
        }
    }

    pub(crate) fn control_border(&self) -> u16 {
        if self.props.no_border {
            0
        } else {
            self.props.config.border.thickness()
        }
    }

    /// Overlay offset that places it right under the control.
    pub(crate) fn below_control(&self) -> i16 {
        1 + 2 * self.control_border() as i16
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Build the element tree for the current props and state.
    pub fn render(&self) -> Result<Element> {
        let selected = self.selected_position()?;
        Ok(render::build(self, selected))
    }

    /// Align the open overlay so the highlighted row covers the control's
    /// text row.
    ///
    /// Call after laying out a tree from [`render`](Self::render). Returns
    /// `true` when the overlay moved and the tree must be rendered again.
    pub fn position_overlay(&mut self, tree: &Element, layout: &LayoutResult) -> Result<bool> {
        if !self.state.is_open() || !self.state.needs_positioning() {
            return Ok(false);
        }
        let Some(index) = self.state.highlighted() else {
            return Ok(false);
        };

        let row = self.resolve_row(tree, index)?;
        let unresolved = || DropdownError::UnresolvedHighlight {
            id: index.to_string(),
        };
        let row_rect = layout.get(&row.id).ok_or_else(unresolved)?;
        let overlay_rect = layout.get(&self.overlay_id()).ok_or_else(unresolved)?;

        let offset = row_rect.y - overlay_rect.y;
        let top = i32::from(self.control_border()) - offset;
        let top =
            i16::try_from(top).map_err(|_| DropdownError::OverlayOffset { offset: top })?;

        let moved = self.state.place_overlay(top);
        log::trace!("[dropdown] {} overlay top={top} moved={moved}", self.root_id);
        Ok(moved)
    }

    /// Find the rendered row for `index` through its item attribute.
    fn resolve_row<'a>(&self, tree: &'a Element, index: usize) -> Result<&'a Element> {
        find_element(tree, self.menu_id())
            .and_then(|menu| find_by_data(menu, ITEM_ID_ATTR, &index.to_string()))
            .ok_or_else(|| DropdownError::UnresolvedHighlight {
                id: index.to_string(),
            })
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Show the overlay and highlight the row holding the current value.
    pub fn on_focus(&mut self) -> Result<()> {
        if self.props.disabled {
            return Ok(());
        }
        let highlighted = self.selected_position()?;
        let scroll = highlighted.map_or(0, |row| {
            self.menu.scroll_into_view(row, self.props.options.len(), 0)
        });
        self.state.open(highlighted, scroll);
        log::debug!(
            "[dropdown] {} open highlighted={highlighted:?}",
            self.root_id
        );
        Ok(())
    }

    /// Hide the overlay, clear the highlight and release focus if the
    /// control still holds it.
    pub fn blur(&mut self, focus: &mut FocusState) {
        let control = self.control_id();
        if focus.is_focused(&control) {
            focus.blur();
        }
        self.close();
    }

    fn close(&mut self) {
        if self.state.close() {
            log::debug!("[dropdown] {} close", self.root_id);
            if let Some(on_blur) = &self.props.on_blur {
                on_blur();
            }
        }
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    /// Select the option at `index`, report it when it differs from the
    /// current value, then blur.
    ///
    /// Notification order is `on_value_change`, then `on_change`, then the
    /// blur notification.
    pub fn commit(&mut self, index: usize, focus: &mut FocusState) -> Result<()> {
        let value = self
            .props
            .options
            .get(index)
            .and_then(DropdownOption::as_value)
            .cloned()
            .ok_or_else(|| DropdownError::UnresolvedHighlight {
                id: index.to_string(),
            })?;

        if self.props.value.as_ref() != Some(&value) {
            log::debug!(
                "[dropdown] {} commit index={index} value={}",
                self.root_id,
                value.item_label()
            );
            let name = self.props.name.clone();
            if let Some(on_value_change) = &self.props.on_value_change {
                on_value_change(&value, name.as_deref());
            }
            if let Some(on_change) = &self.props.on_change {
                on_change(&ChangeEvent {
                    target: self.control_id(),
                    name,
                    value: value.item_label(),
                    index,
                });
            }
        }

        self.blur(focus);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a key aimed at the control.
    pub fn on_key(
        &mut self,
        key: Key,
        tree: &Element,
        focus: &mut FocusState,
    ) -> Result<EventResult> {
        if self.props.disabled || !self.state.is_open() {
            return Ok(EventResult::Ignored);
        }

        match key {
            Key::Escape => {
                self.blur(focus);
                Ok(EventResult::Consumed)
            }
            Key::Enter => {
                if let Some(index) = self.state.highlighted() {
                    self.resolve_row(tree, index)?;
                    self.commit(index, focus)?;
                }
                Ok(EventResult::Consumed)
            }
            _ => {
                let Some(menu) = find_element(tree, self.menu_id()) else {
                    return Ok(EventResult::Ignored);
                };
                let result = self.menu.on_key(key, menu, self.state.highlighted_mut());
                if let Some(row) = self.state.highlighted() {
                    let scroll = self.menu.scroll_into_view(
                        row,
                        self.props.options.len(),
                        self.state.scroll(),
                    );
                    self.state.set_scroll(scroll);
                }
                Ok(result)
            }
        }
    }

    /// Handle a pointer press at `x`,`y`.
    ///
    /// Presses outside the dropdown close it and stay `Ignored` so other
    /// handlers see them. Inside, the press is dispatched from the deepest
    /// element outwards: a value row commits, the overlay swallows anything
    /// else that lands on it, and the control closes an open overlay.
    pub fn on_mouse_down(
        &mut self,
        x: u16,
        y: u16,
        tree: &Element,
        layout: &LayoutResult,
        focus: &mut FocusState,
    ) -> Result<EventResult> {
        if self.props.disabled {
            return Ok(EventResult::Ignored);
        }
        if !self.outside.hits_region(tree, layout, x, y) {
            if self.state.is_open() {
                log::trace!("[dropdown] {} outside press", self.root_id);
                self.blur(focus);
            }
            return Ok(EventResult::Ignored);
        }

        let overlay_id = self.overlay_id();
        let control_id = self.control_id();
        let path = hit_path(layout, tree, x, y);

        for element in path.iter().rev() {
            if let Some(index) = element.get_data(ITEM_ID_ATTR) {
                let index = index
                    .parse()
                    .map_err(|_| DropdownError::MalformedItemId { id: index.clone() })?;
                self.commit(index, focus)?;
                return Ok(EventResult::Consumed);
            }
            if element.id == overlay_id || element.id == self.menu_id() {
                return Ok(EventResult::Consumed);
            }
            if element.id == control_id {
                if self.state.is_open() {
                    self.blur(focus);
                }
                return Ok(EventResult::Consumed);
            }
        }
        Ok(EventResult::Ignored)
    }

    /// Move the highlight to the row under the pointer.
    pub fn on_mouse_move(
        &mut self,
        x: u16,
        y: u16,
        tree: &Element,
        layout: &LayoutResult,
    ) -> EventResult {
        if self.props.disabled || !self.state.is_open() {
            return EventResult::Ignored;
        }
        let path = hit_path(layout, tree, x, y);
        self.menu.on_mouse_move(&path, self.state.highlighted_mut())
    }

    /// Route a host event to the matching operation.
    ///
    /// `tree` and `layout` must be the ones the event was produced from.
    pub fn handle_event(
        &mut self,
        event: &Event,
        tree: &Element,
        layout: &LayoutResult,
        focus: &mut FocusState,
    ) -> Result<EventResult> {
        let control = self.control_id();
        match event {
            Event::Focus { target } if *target == control => {
                self.on_focus()?;
                Ok(EventResult::Consumed)
            }
            Event::Blur { target } if *target == control => {
                self.close();
                Ok(EventResult::Consumed)
            }
            Event::Key {
                target: Some(target),
                key,
                ..
            } if *target == control => self.on_key(*key, tree, focus),
            Event::Click { x, y, .. } => self.on_mouse_down(*x, *y, tree, layout, focus),
            Event::MouseMove { x, y, .. } => Ok(self.on_mouse_move(*x, *y, tree, layout)),
            _ => Ok(EventResult::Ignored),
        }
    }
}

impl<T: DropdownItem + std::fmt::Debug> std::fmt::Debug for Dropdown<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("root_id", &self.root_id)
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}
