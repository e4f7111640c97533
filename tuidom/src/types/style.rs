use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }

    /// Layer `over` on top of this style.
    ///
    /// Colors set in `over` win, text attributes accumulate. The border is
    /// only replaced when `over` sets one.
    pub fn patched(&self, over: &Style) -> Style {
        Style {
            background: over.background.clone().or_else(|| self.background.clone()),
            foreground: over.foreground.clone().or_else(|| self.foreground.clone()),
            border: if over.border == Border::None {
                self.border
            } else {
                over.border
            },
            text_style: self.text_style.union(over.text_style),
        }
    }
}
