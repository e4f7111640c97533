use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{
        Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::types::Rgb;

/// Raw-mode terminal that paints element trees with diffed flushes.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for input. `None` blocks until one event arrives; otherwise the
    /// timeout bounds the wait and all queued events are drained.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let Some(timeout) = timeout else {
            events.push(event::read()?);
            return Ok(events);
        };

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Lay out `root` for the current terminal size without painting.
    pub fn layout(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        self.sync_size()?;
        let (width, height) = self.size();
        self.last_layout = layout(root, Rect::from_size(width, height));
        Ok(&self.last_layout)
    }

    /// Lay out and paint `root`, writing only the cells that changed.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        self.layout(root)?;

        self.current_buffer.clear();
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer);

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            queue!(self.stdout, cursor::MoveTo(x, y))?;
            write_cell(&mut self.stdout, cell)?;
        }
        self.stdout.flush()?;

        self.previous_buffer = self.current_buffer.clone();
        Ok(&self.last_layout)
    }

    pub fn last_layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn sync_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            self.previous_buffer.invalidate();
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(())
    }
}

fn write_cell(out: &mut impl Write, cell: &Cell) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_crossterm(cell.fg)),
        SetBackgroundColor(to_crossterm(cell.bg))
    )?;
    if cell.style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if cell.style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if cell.style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if cell.style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    queue!(out, Print(cell.char))
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
