//! Dropdown session state.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a Dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// Per-session state owned by one dropdown.
///
/// `open` and `highlighted` are the interaction state proper. The overlay
/// offset and scroll are derived from layout and recomputed on every open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    /// List index of the row eligible for keyboard commit.
    highlighted: Option<usize>,
    /// Overlay offset from the control's top edge, once measured.
    overlay_top: Option<i16>,
    /// First visible menu row.
    scroll: u16,
    needs_positioning: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Measured overlay offset, `None` while the overlay hangs below the control.
    pub fn overlay_top(&self) -> Option<i16> {
        self.overlay_top
    }

    /// Whether the next layout must be measured to align the overlay.
    pub fn needs_positioning(&self) -> bool {
        self.needs_positioning
    }

    pub(crate) fn open(&mut self, highlighted: Option<usize>, scroll: u16) {
        self.open = true;
        self.highlighted = highlighted;
        self.overlay_top = None;
        self.scroll = scroll;
        self.needs_positioning = highlighted.is_some();
    }

    /// Back to hidden with nothing highlighted. Returns whether it was open.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.open;
        *self = Self::default();
        was_open
    }

    pub(crate) fn highlighted_mut(&mut self) -> &mut Option<usize> {
        &mut self.highlighted
    }

    pub(crate) fn set_scroll(&mut self, scroll: u16) {
        self.scroll = scroll;
    }

    pub(crate) fn place_overlay(&mut self, top: i16) -> bool {
        self.needs_positioning = false;
        let changed = self.overlay_top != Some(top);
        self.overlay_top = Some(top);
        changed
    }
}
