use std::error::Error;
use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event as CtEvent, KeyCode, KeyModifiers};
use dropdown::{Dropdown, DropdownOption, DropdownProps, Labeled};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::{Color, Edges, Element, FocusState, Style, Terminal};

type Priority = Labeled<u8>;

fn main() -> Result<(), Box<dyn Error>> {
    // The terminal owns stdout, so logs go to a file
    let log_file = File::create("dropdown-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    // Commits land here and are applied after each batch of events
    let picked: Arc<Mutex<Option<&'static str>>> = Arc::default();
    let last_change: Arc<Mutex<String>> = Arc::default();

    let mut fruit = Dropdown::new(fruit_props(Some("banana"), &picked, &last_change))?;
    let priority = Dropdown::new(
        DropdownProps::new(
            [
                DropdownOption::value(Priority::new(1, "Low")),
                DropdownOption::value(Priority::new(2, "Medium")),
                DropdownOption::value(Priority::new(3, "High")),
            ],
            Some(Priority::new(2, "Medium")),
        )
        .id("priority")
        .name("priority")
        .disabled(true),
    )?;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();

    loop {
        let status = last_change.lock().unwrap_or_else(|e| e.into_inner()).clone();
        let mut tree = ui(&fruit, &priority, &status)?;
        focus.mark_focused(&mut tree);
        let layout = term.layout(&tree)?.clone();
        let (tree, layout) = if fruit.position_overlay(&tree, &layout)? {
            let mut tree = ui(&fruit, &priority, &status)?;
            focus.mark_focused(&mut tree);
            let layout = term.layout(&tree)?.clone();
            (tree, layout)
        } else {
            (tree, layout)
        };
        term.render(&tree)?;

        let raw = term.poll(Some(Duration::from_millis(100)))?;
        if raw.iter().any(is_quit) && !fruit.is_open() {
            return Ok(());
        }

        for event in focus.process_events(&raw, &tree, &layout) {
            fruit.handle_event(&event, &tree, &layout, &mut focus)?;
        }

        if let Some(value) = picked.lock().unwrap_or_else(|e| e.into_inner()).take() {
            fruit.set_value(Some(value));
        }
    }
}

fn fruit_props(
    value: Option<&'static str>,
    picked: &Arc<Mutex<Option<&'static str>>>,
    last_change: &Arc<Mutex<String>>,
) -> DropdownProps<&'static str> {
    let picked = picked.clone();
    let last_change = last_change.clone();
    DropdownProps::new(
        [
            DropdownOption::header("Fruit"),
            DropdownOption::value("apple"),
            DropdownOption::value("banana"),
            DropdownOption::separator(),
            DropdownOption::header("Stone fruit"),
            DropdownOption::value("cherry"),
            DropdownOption::value("peach"),
            DropdownOption::value("plum"),
            DropdownOption::value("apricot"),
            DropdownOption::value("mango"),
        ],
        value,
    )
    .id("fruit")
    .name("fruit")
    .placeholder("Pick a fruit")
    .on_value_change(move |value, _| {
        *picked.lock().unwrap_or_else(|e| e.into_inner()) = Some(*value);
    })
    .on_change(move |event| {
        log::info!("change {:?} -> {}", event.name, event.value);
        *last_change.lock().unwrap_or_else(|e| e.into_inner()) =
            format!("{} = {}", event.name.as_deref().unwrap_or("?"), event.value);
    })
    .on_blur(|| log::debug!("fruit closed"))
}

fn is_quit(event: &CtEvent) -> bool {
    match event {
        CtEvent::Key(key) => {
            key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn ui(
    fruit: &Dropdown<&'static str>,
    priority: &Dropdown<Priority>,
    last_change: &str,
) -> dropdown::Result<Element> {
    let status = if last_change.is_empty() {
        "Tab or click to open, q to quit".to_string()
    } else {
        format!("last change: {last_change}")
    };

    Ok(Element::col()
        .id("app")
        .padding(Edges::all(1))
        .gap(1)
        .style(Style::new().background(Color::oklch(0.18, 0.02, 260.0)))
        .child(Element::text("dropdown demo").style(Style::new().bold()))
        .child(Element::text("Fruit"))
        .child(fruit.render()?)
        .child(Element::text("Priority (disabled)"))
        .child(priority.render()?)
        .child(Element::text(status).style(Style::new().dim())))
}
