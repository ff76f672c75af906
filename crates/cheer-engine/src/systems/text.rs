//! Message box text layout.
//!
//! Messages are drawn in a monospace pixel font across the bottom of the
//! viewport. Layout happens in two steps: word-wrap the whole message into
//! lines for the current viewport width, then reveal the first `n` characters
//! across those lines for the typewriter effect. Both steps are pure so the
//! wrapped result can be rebuilt every frame from explicit state.

use serde::Serialize;

/// Metrics of the message font and box.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Horizontal advance of one glyph in pixels.
    pub glyph_advance: f32,
    /// Horizontal margin on each side of the box in pixels.
    pub margin: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            glyph_advance: 16.0,
            margin: 20.0,
        }
    }
}

impl TextStyle {
    /// How many glyphs fit on one line for the given viewport width.
    /// Fractional on purpose: wrapping compares against the exact value.
    pub fn chars_per_line(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.margin * 2.0) / self.glyph_advance
    }

    /// Width of the box in pixels.
    pub fn box_width(&self, viewport_width: f32) -> f32 {
        self.chars_per_line(viewport_width) * self.glyph_advance
    }
}

/// The visible part of a message, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePanel {
    /// One entry per wrapped line. Lines the typewriter has not reached yet
    /// are empty strings so the box keeps its final height.
    pub lines: Vec<String>,
    /// Width of every line box in pixels.
    pub width: f32,
}

/// Greedy word wrap on single spaces.
///
/// A word longer than a whole line is kept intact on its own line.
pub fn wrap_words(text: &str, chars_per_line: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        if line_len > 0 && (line_len + word_len + 1) as f32 > chars_per_line {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if line_len > 0 {
        lines.push(line);
    }

    lines
}

/// Reveal the first `revealed` characters across wrapped lines.
///
/// The running count sums line lengths only, so the space swallowed at each
/// wrap point is not counted.
pub fn reveal_lines(lines: &[String], revealed: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut shown = 0usize;

    for line in lines {
        let len = line.chars().count();
        if shown > revealed {
            out.push(String::new());
            continue;
        }
        if shown + len > revealed {
            out.push(line.chars().take(revealed - shown).collect());
        } else {
            out.push(line.clone());
        }
        shown += len;
    }

    out
}

/// Wrap and reveal a message for the given viewport width.
pub fn layout_message(text: &str, revealed: usize, viewport_width: f32, style: &TextStyle) -> MessagePanel {
    let lines = wrap_words(text, style.chars_per_line(viewport_width));
    MessagePanel {
        lines: reveal_lines(&lines, revealed),
        width: style.box_width(viewport_width),
    }
}
