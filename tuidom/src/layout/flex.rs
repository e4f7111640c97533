use std::collections::HashMap;

use super::Rect;
use crate::element::Element;
use crate::text::display_width;
use crate::types::{Align, Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `element` inside `available`, returning a rectangle per element id.
///
/// Hidden elements (and their subtrees) get no entry.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if element.hidden {
        return result;
    }

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    place(element, Rect::new(available.x, available.y, width, height), &mut result);
    result
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.content.children();
    if children.is_empty() {
        return;
    }

    let border = element.style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| !c.hidden && c.position == Position::Static)
        .collect();

    // First pass: fixed space and fill count
    let gap_total = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in &flow {
        match main_axis(child, is_row) {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => fixed_total = fixed_total.saturating_add(estimate_size(child, is_row)),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: place flow children, shifted by the container's scroll
    let mut offset = if is_row {
        0
    } else {
        -i32::from(element.scroll_offset)
    };

    for child in flow {
        let main = match main_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        let main = constrain(main, child, is_row);

        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill => cross_size,
            Size::Auto if element.align == Align::Stretch => cross_size,
            Size::Auto => estimate_size(child, !is_row).min(cross_size),
        };
        let cross = constrain(cross, child, !is_row);

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };

        place(child, child_rect, result);
        offset += i32::from(main) + i32::from(element.gap);
    }

    // Absolute children are positioned against the parent's border box and
    // are not limited by its size.
    for child in children
        .iter()
        .filter(|c| !c.hidden && c.position == Position::Absolute)
    {
        let width = resolve_free_size(child.width, rect.width, child, true);
        let height = resolve_free_size(child.height, rect.height, child, false);
        let child_rect = Rect::new(
            rect.x + i32::from(child.left),
            rect.y + i32::from(child.top),
            width,
            height,
        );
        place(child, child_rect, result);
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis(element: &Element, is_row: bool) -> Size {
    main_axis(element, !is_row)
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    resolve_free_size(size, available, element, is_width).min(available)
}

fn resolve_free_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width),
    };
    constrain(base, element, is_width)
}

fn constrain(value: u16, element: &Element, is_width: bool) -> u16 {
    if is_width {
        element.min_width.map_or(value, |m| value.max(m))
    } else {
        element.max_height.map_or(value, |m| value.min(m))
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    if element.hidden {
        return 0;
    }

    let border = element.style.border.thickness() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        crate::element::Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        crate::element::Content::Children(children) => {
            let flow: Vec<&Element> = children
                .iter()
                .filter(|c| !c.hidden && c.position == Position::Static)
                .collect();
            let along_main = (element.direction == Direction::Row) == is_width;
            if flow.is_empty() {
                0
            } else if along_main {
                let gap_total = element.gap * (flow.len() - 1) as u16;
                flow.iter()
                    .map(|c| fixed_or_estimate(c, is_width))
                    .fold(gap_total, u16::saturating_add)
            } else {
                flow.iter()
                    .map(|c| fixed_or_estimate(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        crate::element::Content::None => 0,
    };

    constrain(
        content_size.saturating_add(padding).saturating_add(border),
        element,
        is_width,
    )
}

fn fixed_or_estimate(element: &Element, is_width: bool) -> u16 {
    match main_axis(element, is_width) {
        Size::Fixed(n) => constrain(n, element, is_width),
        _ => estimate_size(element, is_width),
    }
}
