//! Build the element tree for a dropdown.
//!
//! ```text
//! root (box, data-name)
//! └─ control (row, focusable)
//!    ├─ label
//!    ├─ icon
//!    └─ overlay (absolute, bordered, hidden while closed)
//!       └─ menu (clipped to the visible row budget, scrolled)
//!          └─ one row per option
//! ```

use tuidom::text::display_width;
use tuidom::{Align, Edges, Element, Overflow, Position, Size, Style};

use crate::item::{DropdownItem, DropdownOption};
use crate::menu::ITEM_ID_ATTR;
use crate::widget::Dropdown;

/// Attribute holding the field name on the root element.
pub const NAME_ATTR: &str = "data-name";

/// Columns a value row needs besides its label: check mark and gap.
const ROW_EXTRA: u16 = 2;
/// Columns the control needs besides its label: gap, icon and padding.
const CONTROL_EXTRA: u16 = 4;

pub(crate) fn build<T: DropdownItem>(dropdown: &Dropdown<T>, selected: Option<usize>) -> Element {
    let props = dropdown.props();
    let config = &props.config;
    let control_border = dropdown.control_border();

    let label_width = widest_label(props.options(), props.placeholder.as_deref());
    let control_width = label_width + CONTROL_EXTRA + control_border * 2;

    let mut root = Element::box_()
        .id(dropdown.root_id())
        .align(Align::Start);
    if let Some(name) = &props.name {
        root = root.data(NAME_ATTR, name.clone());
    }

    let mut control_style = config.control_style.clone();
    if !props.no_border {
        control_style = control_style.border(config.border);
    }

    let control = Element::row()
        .id(dropdown.control_id())
        .min_width(control_width)
        .padding(Edges::horizontal(1))
        .gap(1)
        .focusable(!props.disabled)
        .clickable(!props.disabled)
        .disabled(props.disabled)
        .style(control_style)
        .style_focused(config.focused_style.clone())
        .style_disabled(config.disabled_style.clone())
        .child(render_label(dropdown, selected))
        .child(render_icon(dropdown))
        .child(render_overlay(dropdown, selected, control_width));

    root.child(control)
}

fn widest_label<T: DropdownItem>(options: &[DropdownOption<T>], placeholder: Option<&str>) -> u16 {
    let labels = options.iter().filter_map(|option| match option {
        DropdownOption::Header(label) => Some(display_width(label)),
        DropdownOption::Value(value) => {
            Some(display_width(&value.item_label()) + usize::from(ROW_EXTRA))
        }
        DropdownOption::Separator => None,
    });
    let widest = labels
        .chain(placeholder.map(display_width))
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

fn render_label<T: DropdownItem>(dropdown: &Dropdown<T>, selected: Option<usize>) -> Element {
    let props = dropdown.props();
    let config = &props.config;

    let (text, mut style) = match selected.and_then(|i| props.options()[i].as_value()) {
        Some(value) => (value.item_label(), config.control_style.clone()),
        None => (
            props.placeholder.clone().unwrap_or_default(),
            config.control_style.patched(&config.placeholder_style),
        ),
    };
    if props.disabled {
        style = style.patched(&config.disabled_style);
    }

    Element::text(text)
        .id(format!("{}-label", dropdown.root_id()))
        .width(Size::Fill)
        .style(style)
}

fn render_icon<T: DropdownItem>(dropdown: &Dropdown<T>) -> Element {
    let props = dropdown.props();
    let id = format!("{}-icon", dropdown.root_id());
    match &props.icon {
        Some(icon) => icon.to_element(&id),
        None => Element::text(props.config.default_icon.to_string()).id(id),
    }
}

fn render_overlay<T: DropdownItem>(
    dropdown: &Dropdown<T>,
    selected: Option<usize>,
    control_width: u16,
) -> Element {
    let props = dropdown.props();
    let config = &props.config;
    let state = dropdown.state();
    let border = config.border.thickness();

    let rows = props
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            render_row(
                dropdown,
                index,
                option,
                selected == Some(index),
                control_width.saturating_sub(border * 2),
            )
        });

    let menu = Element::col()
        .id(dropdown.menu_id())
        .max_height(config.max_visible_rows)
        .overflow(Overflow::Hidden)
        .scroll_offset(state.scroll())
        .children(rows);

    Element::col()
        .id(dropdown.overlay_id())
        .position(Position::Absolute)
        .top(state.overlay_top().unwrap_or_else(|| dropdown.below_control()))
        .width(Size::Fill)
        .z_index(config.overlay_z_index)
        .clickable(true)
        .hidden(!state.is_open())
        .style(config.overlay_style.clone().border(config.border))
        .child(menu)
}

fn render_row<T: DropdownItem>(
    dropdown: &Dropdown<T>,
    index: usize,
    option: &DropdownOption<T>,
    checked: bool,
    width: u16,
) -> Element {
    let config = &dropdown.props().config;
    let id = dropdown.row_id(index);

    match option {
        DropdownOption::Separator => {
            Element::text(config.divider.to_string().repeat(usize::from(width))).id(id)
        }
        DropdownOption::Header(label) => Element::text(label.clone())
            .id(id)
            .style(config.header_style.clone()),
        DropdownOption::Value(value) => {
            let mark = if checked { config.check_mark } else { ' ' };
            let style = if dropdown.state().highlighted() == Some(index) {
                config.highlight_style.clone()
            } else {
                Style::new()
            };
            Element::row()
                .id(id)
                .gap(1)
                .clickable(true)
                .data(ITEM_ID_ATTR, index.to_string())
                .style(style)
                .child(Element::text(mark.to_string()))
                .child(Element::text(value.item_label()))
        }
    }
}
