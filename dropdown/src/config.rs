//! Dropdown appearance configuration.

use tuidom::{Border, Color, Style};

/// Glyphs, layering and styles shared by every dropdown built with it.
///
/// The defaults give a bordered control with a `▾` chevron and an overlay
/// of at most eight visible rows.
#[derive(Debug, Clone)]
pub struct DropdownConfig {
    /// Mark drawn in front of the row equal to the current value.
    pub check_mark: char,
    /// Icon used when no override is given.
    pub default_icon: char,
    /// Character repeated to draw separators.
    pub divider: char,
    /// Z-index of the overlay layer.
    pub overlay_z_index: i16,
    /// Rows visible in the overlay before it scrolls.
    pub max_visible_rows: u16,
    /// Border drawn around the control (unless `no_border`) and the overlay.
    pub border: Border,

    pub control_style: Style,
    pub focused_style: Style,
    pub placeholder_style: Style,
    pub disabled_style: Style,
    pub overlay_style: Style,
    pub highlight_style: Style,
    pub header_style: Style,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        let text = Color::oklch(0.92, 0.01, 260.0);
        let surface = Color::oklch(0.22, 0.02, 260.0);
        let accent = Color::oklch(0.62, 0.17, 295.0);

        Self {
            check_mark: '✓',
            default_icon: '▾',
            divider: '─',
            overlay_z_index: 100,
            max_visible_rows: 8,
            border: Border::Rounded,
            control_style: Style::new().foreground(text.clone()),
            focused_style: Style::new().foreground(accent.lighten(0.15)),
            placeholder_style: Style::new().dim(),
            disabled_style: Style::new().foreground(text.darken(0.45)).dim(),
            overlay_style: Style::new()
                .foreground(text.clone())
                .background(surface.clone()),
            highlight_style: Style::new().foreground(surface).background(accent),
            header_style: Style::new().foreground(text.darken(0.3)).bold(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_mark(mut self, mark: char) -> Self {
        self.check_mark = mark;
        self
    }

    pub fn default_icon(mut self, icon: char) -> Self {
        self.default_icon = icon;
        self
    }

    pub fn divider(mut self, divider: char) -> Self {
        self.divider = divider;
        self
    }

    pub fn overlay_z_index(mut self, z_index: i16) -> Self {
        self.overlay_z_index = z_index;
        self
    }

    /// Set the overlay's visible row budget (at least one row).
    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn control_style(mut self, style: Style) -> Self {
        self.control_style = style;
        self
    }

    pub fn focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    pub fn overlay_style(mut self, style: Style) -> Self {
        self.overlay_style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }
}
