use tuidom::{Align, Border, Edges, Element, Position, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> std::collections::HashMap<String, Rect> {
    tuidom::layout::layout(root, Rect::new(0, 0, width, height))
}

#[test]
fn test_column_stacks_auto_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let layout = layout_root(&root, 20, 10);
    assert_eq!(layout["a"], Rect::new(0, 0, 20, 1));
    assert_eq!(layout["b"], Rect::new(0, 1, 20, 1));
}

#[test]
fn test_row_uses_text_width_and_gap() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("banana").id("label"))
        .child(Element::text("▾").id("icon"));

    let layout = layout_root(&root, 40, 1);
    assert_eq!(layout["root"].width, 8);
    assert_eq!(layout["label"], Rect::new(0, 0, 6, 1));
    assert_eq!(layout["icon"], Rect::new(7, 0, 1, 1));
}

#[test]
fn test_fill_takes_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .child(Element::text("ab").id("fixed"))
        .child(Element::box_().id("fill").width(Size::Fill));

    let layout = layout_root(&root, 40, 1);
    assert_eq!(layout["fill"].x, 2);
    assert_eq!(layout["fill"].width, 18);
}

#[test]
fn test_border_and_padding_shrink_inner_area() {
    let root = Element::col()
        .id("root")
        .style(Style::new().border(Border::Single))
        .padding(Edges::horizontal(1))
        .child(Element::text("apple").id("text"));

    let layout = layout_root(&root, 40, 10);
    assert_eq!(layout["root"], Rect::new(0, 0, 9, 3));
    assert_eq!(layout["text"], Rect::new(2, 1, 5, 1));
}

#[test]
fn test_absolute_child_escapes_parent_and_takes_signed_offset() {
    let root = Element::box_()
        .id("root")
        .height(Size::Fixed(1))
        .child(Element::text("control").id("control"))
        .child(
            Element::col()
                .id("menu")
                .position(Position::Absolute)
                .top(-2)
                .left(1)
                .child(Element::text("a").id("a"))
                .child(Element::text("b").id("b"))
                .child(Element::text("c").id("c")),
        );

    let layout = layout_root(&root, 20, 10);
    assert_eq!(layout["root"].height, 1);
    // Menu is not clamped to the one-row parent
    assert_eq!(layout["menu"], Rect::new(1, -2, 1, 3));
    assert_eq!(layout["c"].y, 0);
}

#[test]
fn test_absolute_children_do_not_take_flow_space() {
    let root = Element::col()
        .id("root")
        .child(Element::text("x").id("x"))
        .child(
            Element::text("overlay")
                .id("overlay")
                .position(Position::Absolute),
        )
        .child(Element::text("y").id("y"));

    let layout = layout_root(&root, 20, 10);
    assert_eq!(layout["y"].y, 1);
    assert_eq!(layout["root"].height, 2);
}

#[test]
fn test_hidden_subtree_has_no_layout() {
    let root = Element::col()
        .id("root")
        .child(Element::text("x").id("x"))
        .child(
            Element::col()
                .id("hidden")
                .hidden(true)
                .child(Element::text("inner").id("inner")),
        )
        .child(Element::text("y").id("y"));

    let layout = layout_root(&root, 20, 10);
    assert!(!layout.contains_key("hidden"));
    assert!(!layout.contains_key("inner"));
    assert_eq!(layout["y"].y, 1);
}

#[test]
fn test_max_height_and_scroll_offset() {
    let root = Element::col()
        .id("menu")
        .max_height(2)
        .scroll_offset(1)
        .children((0..4).map(|i| Element::text(format!("row {i}")).id(format!("r{i}"))));

    let layout = layout_root(&root, 20, 10);
    assert_eq!(layout["menu"].height, 2);
    assert_eq!(layout["r0"].y, -1);
    assert_eq!(layout["r1"].y, 0);
    assert_eq!(layout["r3"].y, 2);
}

#[test]
fn test_min_width_and_align_start() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(30))
        .align(Align::Start)
        .child(Element::text("ab").id("short").min_width(6))
        .child(Element::text("abc").id("auto"));

    let layout = layout_root(&root, 40, 10);
    assert_eq!(layout["short"].width, 6);
    assert_eq!(layout["auto"].width, 3);
}
