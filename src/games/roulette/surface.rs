//! Text output for the debug overlay.

use std::fmt;

/// Logical screen width the overlay is laid out for.
pub const SCREEN_WIDTH: u32 = 640;

/// Logical screen height the overlay is laid out for.
pub const SCREEN_HEIGHT: u32 = 480;

/// Anything that can print a line of text at a screen position.
pub trait TextSurface {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
}

/// One recorded `draw_text` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Surface that records draw calls in order.
///
/// Terminal hosts print it; tests inspect it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    calls: Vec<DrawCall>,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Recorded calls in draw order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded text in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().map(|c| c.text.as_str())
    }
}

impl TextSurface for TextBuffer {
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.calls.push(DrawCall {
            text: text.to_string(),
            x,
            y,
        });
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
