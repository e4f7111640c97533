use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.is_focused(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus, returning the element that had it.
    pub fn blur(&mut self) -> Option<String> {
        self.focused.take()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, true)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, false)
    }

    fn cycle(&mut self, root: &Element, forward: bool) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }
        let last = focusable.len() - 1;

        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1) % focusable.len(),
            (Some(0), false) => last,
            (Some(i), false) => i - 1,
        };

        let new_focus = focusable[next].clone();
        if self.focus(&new_focus) {
            Some(new_focus)
        } else {
            None
        }
    }

    /// Drop focus from an element that vanished, became hidden or disabled.
    pub fn retain_valid(&mut self, root: &Element) -> Option<Event> {
        let id = self.focused.as_ref()?;
        if collect_focusable(root).iter().any(|f| f == id) {
            return None;
        }
        log::debug!("[focus] dropping focus from unavailable element {id}");
        self.focused.take().map(|target| Event::Blur { target })
    }

    /// Set the runtime `focused` flag on the focused element of `root`.
    pub fn mark_focused(&self, root: &mut Element) {
        root.focused = self.is_focused(&root.id);
        if let crate::element::Content::Children(children) = &mut root.content {
            for child in children {
                self.mark_focused(child);
            }
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab/BackTab move focus. A mouse press emits `Click` first and then,
    /// when it lands on a different focusable element, the `Blur`/`Focus`
    /// pair. Every other key goes to the focused element.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab || key == Key::BackTab {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }
                CrosstermEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            events.push(Event::Click {
                                target: hit_test(layout, root, x, y),
                                x,
                                y,
                                button: button.into(),
                            });

                            if let Some(id) = hit_test_focusable(layout, root, x, y) {
                                let old = self.focused.clone();
                                if self.focus(&id) {
                                    if let Some(old) = old {
                                        events.push(Event::Blur { target: old });
                                    }
                                    events.push(Event::Focus { target: id });
                                }
                            }
                        }
                        MouseEventKind::Moved => events.push(Event::MouseMove {
                            target: hit_test_any(layout, root, x, y),
                            x,
                            y,
                        }),
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        if !events.is_empty() {
            log::trace!("[focus] events={events:?}");
        }
        events
    }
}

/// Focusable, enabled elements in tab order. Hidden subtrees are skipped.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_into(root, &mut result);
    result
}

fn collect_focusable_into(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_focusable_into(child, result);
    }
}

