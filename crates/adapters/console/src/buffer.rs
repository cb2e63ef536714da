//! In-memory console.

use smarthome_app::ports::Console;

/// Collects all output into a `String`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    buffer: String,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Complete lines written so far; an unterminated tail counts as a line.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl Console for BufferConsole {
    fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
