use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};
use tuidom::{
    collect_focusable, hit_path, hit_test, hit_test_any, hit_test_focusable, Element, Event,
    FocusState, Key, LayoutResult, MouseButton, Position, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CtEvent {
    CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(x: u16, y: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_absolute_child_outside_parent() {
    // The menu hangs below a one-row control
    let root = Element::box_().id("root").child(
        Element::row().id("control").focusable(true).child(
            Element::col()
                .id("menu")
                .position(Position::Absolute)
                .clickable(true)
                .child(Element::text("apple").id("row-0").clickable(true)),
        ),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 1)),
        ("control", Rect::new(0, 0, 40, 1)),
        ("menu", Rect::new(0, 1, 10, 1)),
        ("row-0", Rect::new(0, 1, 10, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 2, 1), Some("row-0".to_string()));
    let ids: Vec<&str> = hit_path(&layout, &root, 2, 1)
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(ids, vec!["root", "control", "menu", "row-0"]);
    // The ancestor control is the focus target
    assert_eq!(
        hit_test_focusable(&layout, &root, 2, 1),
        Some("control".to_string())
    );
}

#[test]
fn test_hit_test_skips_hidden() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("gone").id("gone").clickable(true).hidden(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("gone", Rect::new(0, 0, 10, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 1, 0), None);
}

#[test]
fn test_hit_test_focusable_skips_disabled() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("off").id("off").focusable(true).disabled(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("off", Rect::new(0, 0, 10, 1)),
    ]);

    assert_eq!(hit_test_focusable(&layout, &root, 1, 0), None);
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_collect_focusable_skips_disabled_and_hidden() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true))
        .child(Element::text("b").id("b").focusable(true).disabled(true))
        .child(
            Element::col()
                .id("hidden")
                .hidden(true)
                .child(Element::text("c").id("c").focusable(true)),
        )
        .child(Element::text("d").id("d").focusable(true));

    assert_eq!(collect_focusable(&root), vec!["a", "d"]);
}

#[test]
fn test_tab_cycles_and_emits_blur_then_focus() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true))
        .child(Element::text("b").id("b").focusable(true));
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(events, vec![Event::Focus { target: "a".into() }]);

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur { target: "a".into() },
            Event::Focus { target: "b".into() },
        ]
    );

    focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(focus.focused(), Some("a"));

    focus.process_events(&[key(KeyCode::BackTab)], &root, &layout);
    assert_eq!(focus.focused(), Some("b"));
}

#[test]
fn test_keys_target_focused_element() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true));
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("a");

    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("a".into()),
            key: Key::Escape,
            modifiers: Default::default(),
        }]
    );
    // Escape is left to the element; focus is untouched
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_press_emits_click_before_focus() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true).clickable(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 5)),
        ("a", Rect::new(0, 0, 10, 1)),
    ]);
    let mut focus = FocusState::new();

    let events = focus.process_events(&[press(3, 0)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Click {
                target: Some("a".into()),
                x: 3,
                y: 0,
                button: MouseButton::Left,
            },
            Event::Focus { target: "a".into() },
        ]
    );

    // Pressing empty space leaves focus alone
    let events = focus.process_events(&[press(3, 4)], &root, &layout);
    assert_eq!(events.len(), 1);
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_retain_valid_drops_disabled_focus() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true).disabled(true));
    let mut focus = FocusState::new();
    focus.focus("a");

    assert_eq!(
        focus.retain_valid(&root),
        Some(Event::Blur { target: "a".into() })
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_mark_focused_sets_runtime_flag() {
    let mut root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true));
    let mut focus = FocusState::new();
    focus.focus("a");
    focus.mark_focused(&mut root);

    let a = tuidom::find_element(&root, "a").unwrap();
    assert!(a.focused);
    assert!(!root.focused);
}
