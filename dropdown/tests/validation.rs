use dropdown::{Dropdown, DropdownError, DropdownOption, DropdownProps, Icon, ITEM_ID_ATTR};
use tuidom::{Element, FocusState, Key, LayoutResult, Rect};

fn fruit_options() -> Vec<DropdownOption<&'static str>> {
    vec![
        DropdownOption::header("Fruit"),
        DropdownOption::value("apple"),
        DropdownOption::value("banana"),
        DropdownOption::separator(),
        DropdownOption::value("cherry"),
    ]
}

#[test]
fn test_two_character_icon_is_rejected() {
    let err = Dropdown::new(DropdownProps::new(fruit_options(), None).icon("AB")).unwrap_err();
    assert_eq!(
        err,
        DropdownError::IconLength {
            icon: "AB".into(),
            length: 2
        }
    );
}

#[test]
fn test_icon_is_checked_on_set_props() {
    let mut dropdown = Dropdown::new(DropdownProps::new(fruit_options(), None)).unwrap();
    let err = dropdown
        .set_props(DropdownProps::new(fruit_options(), None).icon(""))
        .unwrap_err();
    assert!(matches!(err, DropdownError::IconLength { length: 0, .. }));
}

#[test]
fn test_element_icon_is_accepted() {
    let icon = Icon::from(Element::text("[v]"));
    assert!(Dropdown::new(DropdownProps::new(fruit_options(), None).icon(icon)).is_ok());
}

#[test]
fn test_unknown_value_is_rejected() {
    let err = Dropdown::new(DropdownProps::new(fruit_options(), Some("grape"))).unwrap_err();
    assert_eq!(
        err,
        DropdownError::InvalidValue {
            value: "grape".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "dropdown value \"grape\" does not match any option"
    );
}

#[test]
fn test_value_is_checked_again_on_render() {
    let mut dropdown =
        Dropdown::new(DropdownProps::new(fruit_options(), Some("banana"))).unwrap();
    dropdown.set_value(Some("grape"));

    assert!(matches!(
        dropdown.render(),
        Err(DropdownError::InvalidValue { .. })
    ));
}

#[test]
fn test_value_is_checked_again_on_focus() {
    let mut dropdown =
        Dropdown::new(DropdownProps::new(fruit_options(), Some("cherry"))).unwrap();
    dropdown.set_options(vec![
        DropdownOption::value("apple"),
        DropdownOption::value("banana"),
    ]);

    let err = dropdown.on_focus().unwrap_err();
    assert_eq!(
        err,
        DropdownError::InvalidValue {
            value: "cherry".into()
        }
    );
    assert!(!dropdown.is_open());
}

#[test]
fn test_shrinking_options_drops_stale_highlight() {
    let mut dropdown =
        Dropdown::new(DropdownProps::new(fruit_options(), Some("cherry"))).unwrap();
    dropdown.on_focus().unwrap();
    assert_eq!(dropdown.highlighted(), Some(4));

    dropdown.set_options(vec![
        DropdownOption::value("apple"),
        DropdownOption::value("cherry"),
    ]);
    assert_eq!(dropdown.highlighted(), None);

    // Enter with nothing highlighted commits nothing
    let tree = dropdown.render().unwrap();
    let mut focus = FocusState::new();
    dropdown.on_key(Key::Enter, &tree, &mut focus).unwrap();
    assert!(dropdown.is_open());
}

#[test]
fn test_duplicate_values_check_first_match() {
    let dropdown = Dropdown::new(DropdownProps::new(
        vec![
            DropdownOption::value("apple"),
            DropdownOption::value("apple"),
        ],
        Some("apple"),
    ))
    .unwrap();
    let tree = dropdown.render().unwrap();

    let first = tuidom::find_element(&tree, &dropdown.row_id(0)).unwrap();
    let second = tuidom::find_element(&tree, &dropdown.row_id(1)).unwrap();
    let mark = |row: &Element| match &row.content.children()[0].content {
        tuidom::Content::Text(text) => text.clone(),
        _ => String::new(),
    };
    assert_eq!(mark(first), "✓");
    assert_eq!(mark(second), " ");
}

#[test]
fn test_malformed_item_id_is_an_error() {
    let mut dropdown = Dropdown::new(DropdownProps::new(fruit_options(), None)).unwrap();
    let tree = Element::col().id("app").child(
        Element::box_().id(dropdown.root_id()).child(
            Element::text("bad")
                .id("bad")
                .clickable(true)
                .data(ITEM_ID_ATTR, "abc"),
        ),
    );
    let layout = tuidom::layout::layout(&tree, Rect::new(0, 0, 40, 20));
    let mut focus = FocusState::new();

    let err = dropdown
        .on_mouse_down(0, 0, &tree, &layout, &mut focus)
        .unwrap_err();
    assert_eq!(err, DropdownError::MalformedItemId { id: "abc".into() });
}

#[test]
fn test_out_of_range_overlay_offset_is_an_error() {
    let mut dropdown =
        Dropdown::new(DropdownProps::new(fruit_options(), Some("banana"))).unwrap();
    dropdown.on_focus().unwrap();
    let tree = dropdown.render().unwrap();

    let mut layout = LayoutResult::new();
    layout.insert(dropdown.overlay_id(), Rect::new(0, 0, 14, 7));
    layout.insert(dropdown.row_id(2), Rect::new(1, 100_000, 12, 1));

    let err = dropdown.position_overlay(&tree, &layout).unwrap_err();
    assert_eq!(err, DropdownError::OverlayOffset { offset: -99_999 });
}
