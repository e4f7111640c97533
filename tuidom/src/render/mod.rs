use crate::buffer::{Buffer, Cell, DEFAULT_FG};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Overflow, Position, Rgb, Style};

/// Paint `root` into `buf` using a finished layout.
///
/// Flow content is painted first. Absolutely positioned subtrees are
/// collected as layers and painted afterwards in ascending z-index, so an
/// overlay covers whatever follows it in the tree.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut layers: Vec<&Element> = Vec::new();
    render_element(root, layout, buf, None, &mut layers);

    while !layers.is_empty() {
        let mut batch = std::mem::take(&mut layers);
        batch.sort_by_key(|el| el.z_index);
        for layer in batch {
            render_element(layer, layout, buf, None, &mut layers);
        }
    }
}

fn render_element<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Option<Rect>,
    layers: &mut Vec<&'a Element>,
) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    let visible = clip.map_or(rect, |c| c.intersect(&rect));
    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, visible, bg.to_rgb());
    }

    render_border(&style, rect, visible, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, &style, rect, visible, buf),
        Content::Children(children) => {
            let child_clip = if element.overflow == Overflow::Hidden {
                Some(visible)
            } else {
                clip
            };
            for child in children {
                if child.position == Position::Absolute {
                    layers.push(child);
                } else {
                    render_element(child, layout, buf, child_clip, layers);
                }
            }
        }
    }
}

/// Blank `rect` with `bg`, covering anything painted there before.
fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buf.set(x, y, Cell::new(' ').with_bg(bg));
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    style: &Style,
    rect: Rect,
    visible: Rect,
    buf: &mut Buffer,
) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let border = style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    for (line_no, line) in text.lines().enumerate() {
        let y = inner.y + line_no as i32;
        if y >= inner.bottom() {
            break;
        }
        let line = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;
        for ch in line.chars() {
            if visible.contains(x, y) {
                // Keep whatever background is already painted underneath
                let bg = explicit_bg
                    .or_else(|| buf.get_mut(x, y).map(|c| c.bg))
                    .unwrap_or_default();
                buf.set(
                    x,
                    y,
                    Cell::new(ch)
                        .with_fg(fg)
                        .with_bg(bg)
                        .with_style(style.text_style),
                );
            }
            x += char_width(ch).max(1) as i32;
        }
    }
}

fn render_border(style: &Style, rect: Rect, visible: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let mut put = |x: i32, y: i32, ch: char| {
        if !visible.contains(x, y) {
            return;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
        }
    };

    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);

    for x in (rect.x + 1)..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in (rect.y + 1)..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}
