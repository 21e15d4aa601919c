//! Low-level terminal formatting.

use std::fmt::Display;
use std::io::{self, Write};

use serde_json::Value;

use super::json::render_json;

// ANSI color codes
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Fallback column count when the terminal size cannot be read.
pub const DEFAULT_WIDTH: usize = 80;

/// Visible width of the key column in key/value rows.
pub const KEY_COLUMN_WIDTH: usize = 50;

/// Where the renderer takes its line width from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Query the terminal on every call.
    Terminal,
    /// Always use this many columns.
    Fixed(usize),
}

/// Formatting primitives over an output stream.
pub struct Renderer<W: Write> {
    out: W,
    width: Width,
    color: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to `out`.
    ///
    /// With `color` off, no escape codes are written.
    pub const fn new(out: W, width: Width, color: bool) -> Self {
        Self { out, width, color }
    }

    /// The underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Current line width in columns.
    pub fn width(&self) -> usize {
        match self.width {
            Width::Fixed(columns) => columns,
            Width::Terminal => crossterm::terminal::size()
                .ok()
                .map(|(columns, _)| usize::from(columns))
                .filter(|columns| *columns > 0)
                .unwrap_or(DEFAULT_WIDTH),
        }
    }

    /// A rule of `-` across the full width.
    pub fn horizontal_line(&mut self) -> io::Result<()> {
        let width = self.width();
        writeln!(self.out, "{}", "-".repeat(width))
    }

    /// Trimmed text padded to sit in the middle of the line.
    pub fn centered(&mut self, text: &str) -> io::Result<()> {
        let text = text.trim();
        let left_padding = self.width().saturating_sub(text.chars().count()) / 2;
        writeln!(self.out, "{}{text}", " ".repeat(left_padding))
    }

    /// `lines` blank lines; zero is treated as one.
    pub fn vertical_space(&mut self, lines: usize) -> io::Result<()> {
        for _ in 0..lines.max(1) {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Highlighted key in a fixed-width column, followed by the value.
    pub fn key_value(&mut self, key: &str, value: impl Display) -> io::Result<()> {
        let padding = KEY_COLUMN_WIDTH.saturating_sub(key.chars().count()).max(1);
        let key = self.paint(key, YELLOW);
        writeln!(self.out, "{key}{}{value}", " ".repeat(padding))
    }

    /// A plain line of text.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// A line styled as a console status notice.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, BLUE);
        writeln!(self.out, "{text}")
    }

    /// Page header: rule, centered title, rule, then two blank lines.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        self.horizontal_line()?;
        self.centered(title)?;
        self.horizontal_line()?;
        self.vertical_space(2)
    }

    /// Pretty-printed, highlighted JSON document.
    pub fn json(&mut self, value: &Value) -> io::Result<()> {
        let rendered = render_json(value, self.color);
        writeln!(self.out, "{rendered}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
