//! Terminal rendering of agent responses.
//!
//! Operator lines sit on the left, HAL on the right, narration in the middle.
//! Each tone has its own 24-bit color.

use halnav_agent::{Align, Line, Response};

/// Draws response lines for a terminal of fixed width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    width: usize,
    color: bool,
}

impl Renderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(width: usize, color: bool) -> Self {
        Self { width, color }
    }

    /// Returns the terminal width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Renders one line, padded to its alignment.
    ///
    /// Lines wider than the terminal are left unpadded.
    #[must_use]
    pub fn render_line(&self, line: &Line) -> String {
        let len = line.text.chars().count();
        let slack = self.width.saturating_sub(len);
        let pad = match line.align {
            Align::Left => 0,
            Align::Center => slack / 2,
            Align::Right => slack,
        };

        let text = if self.color && !line.text.is_empty() {
            paint(&line.text, line.tone.color())
        } else {
            line.text.clone()
        };

        format!("{}{text}", " ".repeat(pad))
    }

    /// Renders every line of a response, one per output line.
    #[must_use]
    pub fn render(&self, response: &Response) -> String {
        response
            .lines()
            .iter()
            .map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(80, true)
    }
}

/// Parses `#rrggbb`.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Wraps `text` in a 24-bit foreground color.
fn paint(text: &str, color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}
