use super::*;

/// Where a session talks to the user.
pub trait Console {
    /// Shows one event.
    fn notify(&mut self, event: &Event<'_>) -> std::io::Result<()>;
    /// Prompts for and returns the next line of input without its line
    /// terminator, or `None` once input is exhausted.
    fn read(&mut self) -> std::io::Result<Option<String>>;
}

/// Prompt shown before every read.
pub const PROMPT: &str = "Enter your move";
